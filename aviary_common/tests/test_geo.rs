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

use geo::Point;
use aviary_common::geo::*;
use aviary_common::projection::StereographicProjection;
use aviary_common::approx_eq;

// run with "cargo test test_distance -- --nocapture"

#[test]
fn test_geopoint_serde() {
    let input = r#"{ "longitude": -0.1275, "latitude": 51.5 }"#;
    let p: GeoPoint = serde_json::from_str(&input).unwrap();
    println!("deserialized GeoPoint: {p:?}");
    assert_eq!( p.lon(), -0.1275);
    assert_eq!( p.lat(), 51.5);

    let s = serde_json::to_string(&p).unwrap();
    println!("serialized: {s}");
    assert_eq!( s, r#"{"lon":-0.1275,"lat":51.5}"#);
}

#[test]
fn test_distance() {
    let d = distance( 51.5080, -0.1281, 50.6083, -1.9608);
    println!("London -> Poole: {} km", d / 1000.0);
    assert!( (d - 162_500.0).abs() < 1625.0);

    assert_eq!( distance( 51.5, -0.1275, 51.5, -0.1275), 0.0);
}

#[test]
fn test_waypoint_location() {
    let (lat1, lon1, lat2, lon2) = (51.5, -0.1275, 50.6083, -1.9608);
    let total = distance( lat1, lon1, lat2, lon2);

    let p0 = waypoint_location( lat1, lon1, lat2, lon2, 0.0);
    println!("waypoint at 0: {p0}");
    assert!( approx_eq( p0.lat(), lat1, 1e-12) && approx_eq( p0.lon(), lon1, 1e-12));

    // distance to the end point has to decrease monotonically
    let mut last = f64::MAX;
    for i in 0..=20 {
        let d = total * (i as f64) / 20.0;
        let p = waypoint_location( lat1, lon1, lat2, lon2, d);
        let remaining = distance( p.lat(), p.lon(), lat2, lon2);
        println!("  {:8.1} m -> {p} ({remaining:.1} m remaining)", d);
        assert!( remaining < last);
        last = remaining;
    }
    assert!( last < 1e-3);

    // beyond the end point we clamp
    let p = waypoint_location( lat1, lon1, lat2, lon2, total * 2.0);
    assert_eq!( p.lat(), lat2);
    assert_eq!( p.lon(), lon2);
}

#[test]
fn test_destination_toward() {
    let (lat1, lon1, lat2, lon2) = (51.5, -0.1275, 51.6, -0.1275);
    let d12 = distance( lat1, lon1, lat2, lon2);

    let p = destination_toward( lat1, lon1, lat2, lon2, 2.0 * d12);
    println!("extended destination: {p}");
    assert!( approx_eq( distance( lat1, lon1, p.lat(), p.lon()), 2.0 * d12, 1e-6));
    assert!( p.lat() > lat2);
    assert!( approx_eq( p.lon(), lon1, 1e-9));

    let m = midpoint( lat1, lon1, lat2, lon2);
    assert!( approx_eq( distance( lat1, lon1, m.lat(), m.lon()), d12 / 2.0, 1e-6));
}

#[test]
fn test_nm_conversion() {
    assert!( approx_eq( nm_to_meters(1.0), 1852.0, 1e-9));
    assert!( approx_eq( meters_to_nm(3704.0), 2.0, 1e-9));
}

#[test]
fn test_projection_roundtrip() {
    let origin = GeoPoint::from_lon_lat_degrees( -0.1275, 51.5);
    let proj = StereographicProjection::new( origin);

    let o = proj.project( &origin);
    println!("projected origin: {o:?}");
    assert!( o.x().abs() < 1e-9 && o.y().abs() < 1e-9);

    for (x,y) in [(0.0,35.0), (0.0,-35.0), (30.31,17.5), (-25.0,5.0), (120.0,-80.0)] {
        let p = Point::new( x, y);
        let g = proj.inverse( &p);
        let q = proj.project( &g);
        println!("({x},{y}) -> {g} -> ({},{})", q.x(), q.y());
        assert!( approx_eq( p.x(), q.x(), 1e-8) && approx_eq( p.y(), q.y(), 1e-8));
    }
}

#[test]
fn test_projection_scale() {
    let origin = GeoPoint::from_lon_lat_degrees( -0.1275, 51.5);
    let proj = StereographicProjection::new( origin);

    // 35nm north of the origin
    let g = proj.inverse( &Point::new( 0.0, 35.0));
    println!("35nm north: {g}");
    assert!( approx_eq( g.lat(), 52.08, 0.01));
    assert!( approx_eq( g.lon(), -0.1275, 1e-9));

    // local distances are close to geodesic distances
    let d_m = distance( origin.lat(), origin.lon(), g.lat(), g.lon());
    println!("geodesic distance: {} nm", meters_to_nm(d_m));
    assert!( approx_eq( meters_to_nm(d_m), 35.0, 0.1));
}
