/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use aviary_common::approx_eq;
use aviary_common::geo::GeoPoint;
use aviary_common::geo_constants::FEET_PER_METER;
use aviary_sector::*;
use aviary_metrics::*;

fn ft_to_m (ft: f64) -> f64 { ft / FEET_PER_METER }

#[test]
fn test_scores() {
    println!("--- testing distance scores");
    assert_eq!( sector_exit_score( 7.5, 5.0, 10.0).unwrap(), -0.5);
    assert_eq!( sector_exit_score( 0.0, 0.0, 1.0).unwrap(), 0.0);
    assert_eq!( sector_exit_score( 5.0, 5.0, 10.0).unwrap(), 0.0);
    assert_eq!( sector_exit_score( 10.0, 5.0, 10.0).unwrap(), -1.0);
    assert_eq!( sector_exit_score( 15.0, 5.0, 10.0).unwrap(), -1.0);

    assert_eq!( separation_score( 0.0, 5.0, 10.0).unwrap(), -1.0);
    assert_eq!( separation_score( 5.0, 5.0, 10.0).unwrap(), -1.0);
    assert_eq!( separation_score( 7.5, 5.0, 10.0).unwrap(), -0.5);
    assert_eq!( separation_score( 10.0, 5.0, 10.0).unwrap(), 0.0);

    assert!( matches!( sector_exit_score( -1.0, 5.0, 10.0), Err(MetricsError::ArgumentError(_))));
    assert!( separation_score( 1.0, 10.0, 5.0).is_err());
    assert!( separation_score( f64::NAN, 5.0, 10.0).is_err());
}

#[test]
fn test_distances() {
    println!("--- testing horizontal and vertical distances");
    assert_eq!( horizontal_distance_nm( 0.0, 0.0, 0.0, 0.0), 0.0);
    assert_eq!( horizontal_distance_nm( 0.0, 0.0, -0.1, 0.0), 6.0); // 11057m
    assert_eq!( horizontal_distance_nm( 0.0, 0.0, 0.0, 0.15), 9.0);
    assert!( approx_eq( vertical_distance_ft( 0.0, 1000.0), 3280.839895, 1e-9));
}

#[test]
fn test_pairwise_separation() {
    println!("--- testing pairwise separation metric");
    let th = DistanceThresholds::default();
    let p = |lon, lat, alt| Position::new( lon, lat, alt);

    assert_eq!( pairwise_separation_metric( &p(0.0,0.0,0.0), &p(0.0,0.0,0.0), &th).unwrap(), -1.0);
    assert_eq!( pairwise_separation_metric( &p(0.0,0.0,0.0), &p(5.0,0.0,0.0), &th).unwrap(), 0.0);
    assert_eq!( pairwise_separation_metric( &p(0.0,0.0,0.0), &p(0.0,0.0,1000.0), &th).unwrap(), 0.0);
    assert_eq!( pairwise_separation_metric( &p(0.0,5.0,0.0), &p(0.0,0.0,0.0), &th).unwrap(), 0.0);

    // 1500ft vertical, no horizontal separation
    let s = pairwise_separation_metric( &p(0.0,0.0,0.0), &p(0.0,0.0,ft_to_m(1500.0)), &th).unwrap();
    assert!( approx_eq( s, -0.5, 1e-9));
}

#[test]
fn test_exit_position_score() {
    println!("--- testing exit position score");
    let th = DistanceThresholds::default();
    let origin = (0.0, 0.0, 0.0);

    assert_eq!( exit_position_score( origin, (0.0, 0.0, 0.0), &th).unwrap(), 0.0);
    assert_eq!( exit_position_score( origin, (-0.05, 0.0, 0.0), &th).unwrap(), 0.0);
    assert!( approx_eq( exit_position_score( origin, (0.0, -0.1, 0.0), &th).unwrap(), -0.2, 1e-9));
    assert!( approx_eq( exit_position_score( origin, (0.15, 0.0, 0.0), &th).unwrap(), -0.8, 1e-9));
    assert_eq!( exit_position_score( origin, (0.0, 0.2, 0.0), &th).unwrap(), -1.0);
    assert_eq!( exit_position_score( origin, (0.0, 0.0, 1000.0), &th).unwrap(), 0.0);
    assert!( approx_eq( exit_position_score( origin, (0.0, 0.0, 1230.0), &th).unwrap(), -0.23, 1e-9));
    assert_eq!( exit_position_score( origin, (0.0, 0.0, 1500.0), &th).unwrap(), -0.5);
    assert_eq!( exit_position_score( origin, (0.0, 0.0, 2000.0), &th).unwrap(), -1.0);
}

#[test]
fn test_sector_exit_metric() {
    println!("--- testing sector exit metric");
    let shape = SectorShape::with_default_fix_names( SectorType::I, ShapeParams::default()).unwrap();
    let sector = SectorElement::new( "HELL", GeoPoint::from_lon_lat_degrees( -0.1275, 51.5), shape, 50, 450).unwrap();

    let route = sector.routes().into_iter().find( |r| r.last_fix().is_some_and( |f| f.name == "SPIRT")).unwrap();
    let route = route.serialize();
    let (target_lon, target_lat) = exit_target( &route).unwrap();
    assert_eq!( route[route.len()-2].fix_name, "AIR");
    println!("  exit target {target_lon},{target_lat}");

    let th = DistanceThresholds::default();
    let requested_fl = 350;
    let alt = ft_to_m( 35000.0);
    let pos = |lat: f64, alt: f64| Position::new( target_lon, lat, alt);

    // still inside
    let res = sector_exit_metric( &pos( 51.5, alt), &pos( 51.1, alt), requested_fl, &sector, &route, &th).unwrap();
    assert!( res.is_none());

    // exit at target and requested level
    let res = sector_exit_metric( &pos( target_lat + 0.4, alt), &pos( target_lat - 0.4, alt), requested_fl, &sector, &route, &th).unwrap();
    assert_eq!( res, Some(0.0));

    // exit at target, 2000ft below
    let low = ft_to_m( 33000.0);
    let res = sector_exit_metric( &pos( target_lat + 0.4, low), &pos( target_lat - 0.4, low), requested_fl, &sector, &route, &th).unwrap();
    assert_eq!( res, Some(-1.0));

    // exit at target, 1500ft below
    let near = ft_to_m( 33500.0);
    let res = sector_exit_metric( &pos( target_lat + 0.4, near), &pos( target_lat - 0.4, near), requested_fl, &sector, &route, &th).unwrap();
    assert!( approx_eq( res.unwrap(), -0.5, 1e-6));

    // exit at requested level, 12nm from target
    let res = sector_exit_metric( &pos( target_lat + 0.2, alt), &pos( target_lat - 0.6, alt), requested_fl, &sector, &route, &th).unwrap();
    assert_eq!( res, Some(-1.0));

    // previous position above the sector
    let high = ft_to_m( 46000.0);
    let res = sector_exit_metric( &pos( target_lat + 0.4, high), &pos( target_lat - 0.4, high), requested_fl, &sector, &route, &th).unwrap();
    assert!( res.is_none());

    assert!( exit_target( &route[..1]).is_err());
}

#[test]
fn test_fuel_efficiency() {
    println!("--- testing fuel efficiency metric");
    // climb requested
    assert_eq!( fuel_efficiency_metric( 100.0, 400.0, 200.0), -1.0);
    assert_eq!( fuel_efficiency_metric( 200.0, 400.0, 200.0), -1.0);
    assert_eq!( fuel_efficiency_metric( 300.0, 400.0, 200.0), -0.5);
    assert_eq!( fuel_efficiency_metric( 400.0, 400.0, 200.0), 0.0);
    assert_eq!( fuel_efficiency_metric( 500.0, 400.0, 200.0), -0.5);

    // descent requested
    assert_eq!( fuel_efficiency_metric( 500.0, 200.0, 400.0), -0.5);
    assert_eq!( fuel_efficiency_metric( 400.0, 200.0, 400.0), 0.0);
    assert_eq!( fuel_efficiency_metric( 300.0, 200.0, 400.0), -0.5);
    assert_eq!( fuel_efficiency_metric( 200.0, 200.0, 400.0), -1.0);
    assert_eq!( fuel_efficiency_metric( 100.0, 200.0, 400.0), -1.0);

    assert_eq!( fuel_efficiency_metric( 200.0, 200.0, 200.0), 0.0);
}
