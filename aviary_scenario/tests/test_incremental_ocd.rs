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

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use aviary_common::geo::{distance, GeoPoint};
use aviary_sector::*;
use aviary_scenario::*;
use aviary_scenario::algorithm::FLIGHT_LEVELS;

fn i_sector () -> Arc<SectorElement> {
    let shape = SectorShape::i_shape( ShapeParams::default(), &["a","b","c","d","e"]).unwrap();
    Arc::new( SectorElement::new( "I", GeoPoint::from_lon_lat_degrees( -0.1275, 51.5), shape, 50, 450).unwrap())
}

fn empty (seed: u64) -> EmptyScenario {
    EmptyScenario::new( i_sector(), ScenarioConfig::default().with_seed( seed)).unwrap()
}

#[test]
fn test_phase_distribution() {
    println!("--- testing incremental scenario flight phase distribution");
    let n = 3000;
    let mut counts: HashMap<FlightPhase,usize> = HashMap::new();

    for seed in 0..n {
        let mut algorithm = IncrementalOcdScenario::with_defaults( empty( seed), seed).unwrap();
        let aircraft: Vec<AircraftRecord> = algorithm.aircraft().map( |ac| ac.unwrap()).collect();
        assert_eq!( aircraft.len(), 1);
        *counts.entry( FlightPhase::of( &aircraft[0])).or_default() += 1;
    }
    println!("  {counts:?}");

    let expected = n as f64 / 3.0;
    for phase in [FlightPhase::Overflier, FlightPhase::Climber, FlightPhase::Descender] {
        let count = *counts.get( &phase).unwrap_or(&0) as f64;
        assert!( (count - expected).abs() < 0.1 * expected, "{phase:?}: {count}");
    }
}

#[test]
fn test_level_windows() {
    println!("--- testing incremental scenario flight levels");
    for seed in 0..200 {
        let mut algorithm = IncrementalOcdScenario::with_defaults( empty( seed), seed).unwrap();
        let ac = algorithm.next_aircraft().unwrap().unwrap();
        let (current, requested) = (ac.current_flight_level, ac.requested_flight_level);

        match FlightPhase::of( &ac) {
            FlightPhase::Climber => assert!( current <= 300 && requested >= 360),
            FlightPhase::Descender => assert!( current >= 300 && requested <= 240),
            FlightPhase::Overflier => assert!( FLIGHT_LEVELS.contains( &current)),
        }
        assert_eq!( ac.cleared_flight_level, current);
    }
}

#[test]
fn test_discrete_start() {
    println!("--- testing discrete start positions on route segments");
    let params = IncrementalOcdParams { segment_probabilities: vec![0.0, 1.0], ..IncrementalOcdParams::default() };
    let mut algorithm = IncrementalOcdScenario::new( empty(5), 5, params).unwrap();

    let route = algorithm.route().clone();
    let fixes = route.fixes();
    let first = GeoPoint::from_point( fixes[0].point);
    let last = GeoPoint::from_point( fixes[fixes.len()-1].point);
    let half = distance( first.lat(), first.lon(), last.lat(), last.lon()) / 2.0;

    let ac = algorithm.next_aircraft().unwrap().unwrap();
    let start = ac.start_point();
    println!("  route {:?} start {start}, remaining {:?}", route.fix_names(), ac.fix_names());

    // the second half of a straight I route starts at the middle fix
    assert!( (distance( first.lat(), first.lon(), start.lat(), start.lon()) - half).abs() < 1e-3);
    assert!( ac.route.len() == 2 || ac.route.len() == 3);
    assert_eq!( ac.fix_names().last().copied(), route.fix_names().last().map( |s| s.as_str()));
    assert!( algorithm.next_aircraft().is_none());
}

#[test]
fn test_continuous_start() {
    println!("--- testing continuous start positions on route segments");
    let params = IncrementalOcdParams {
        segment_probabilities: vec![0.25, 0.25, 0.25, 0.25],
        placement: StartPlacement::Continuous,
        ..IncrementalOcdParams::default()
    };

    let mut positions = HashSet::new();
    for seed in 0..50 {
        let mut algorithm = IncrementalOcdScenario::new( empty( seed), seed, params.clone()).unwrap();
        let ac = algorithm.next_aircraft().unwrap().unwrap();
        let start = ac.start_point();
        assert!( (start.lon() - -0.1275).abs() < 1e-6); // I routes are meridians
        positions.insert( (start.lat() * 1e6).round() as i64);
    }
    assert!( positions.len() > 40);
}

#[test]
fn test_continuous_segment_coverage() {
    println!("--- testing continuous start positions cover segments that span several fixes");
    let params = IncrementalOcdParams {
        segment_probabilities: vec![1.0, 0.0, 0.0, 0.0],
        placement: StartPlacement::Continuous,
        ..IncrementalOcdParams::default()
    };

    let mut segment_length = 0.0;
    let mut max_dist: f64 = 0.0;
    for seed in 0..300 {
        let mut algorithm = IncrementalOcdScenario::new( empty( seed), seed, params.clone()).unwrap();
        let fixes = algorithm.route().fixes();
        let (a, b) = (GeoPoint::from_point( fixes[0].point), GeoPoint::from_point( fixes[1].point));
        let first_leg = distance( a.lat(), a.lon(), b.lat(), b.lon());
        let route_length: f64 = fixes.windows(2).map( |w| {
            let (p, q) = (GeoPoint::from_point( w[0].point), GeoPoint::from_point( w[1].point));
            distance( p.lat(), p.lon(), q.lat(), q.lon())
        }).sum();
        segment_length = route_length / 4.0;
        assert!( segment_length > first_leg);

        let ac = algorithm.next_aircraft().unwrap().unwrap();
        let start = ac.start_point();
        let d = distance( a.lat(), a.lon(), start.lat(), start.lon()); // I routes are straight
        assert!( d <= segment_length + 1e-3, "{d} beyond segment end {segment_length}");
        max_dist = max_dist.max( d);
    }
    println!("  segment length {segment_length:.0}m, max start distance {max_dist:.0}m");
    assert!( max_dist > 0.9 * segment_length);
}

#[test]
fn test_shared_route() {
    println!("--- testing incremental aircraft share the frozen route");
    for seed in 0..20 {
        let params = IncrementalOcdParams {
            segment_probabilities: vec![0.25, 0.25, 0.25, 0.25],
            aircraft_count: 6,
            ..IncrementalOcdParams::default()
        };
        let mut algorithm = IncrementalOcdScenario::new( empty( seed), seed, params).unwrap();
        let route: Vec<String> = algorithm.route().fix_names().iter().map( |s| s.to_string()).collect();

        let aircraft: Vec<AircraftRecord> = algorithm.aircraft().map( |ac| ac.unwrap()).collect();
        assert_eq!( aircraft.len(), 6);

        for ac in &aircraft {
            let names: Vec<String> = ac.fix_names().iter().map( |s| s.to_string()).collect();
            assert!( !names.is_empty());
            assert!( route.ends_with( &names), "{names:?} not on route {route:?}");
        }

        let callsigns: HashSet<&String> = aircraft.iter().map( |ac| &ac.callsign).collect();
        assert_eq!( callsigns.len(), aircraft.len());
    }
}

#[test]
fn test_stacked_on_poisson() {
    println!("--- testing incremental aircraft on top of poisson scenario");
    let poisson = PoissonScenario::new( i_sector(), ScenarioConfig::default().with_seed(22), 2.0/60.0).unwrap();
    let mut algorithm = IncrementalOcdScenario::with_defaults( poisson, 1).unwrap();

    let scenario = ScenarioGenerator::default().generate_scenario( &mut algorithm, 600).unwrap();
    assert!( scenario.aircraft.len() > 1);

    // poisson never ends, the incremental aircraft is never reached
    let callsigns: HashSet<&String> = scenario.aircraft.iter().map( |ac| &ac.callsign).collect();
    assert_eq!( callsigns.len(), scenario.aircraft.len());

    let mut algorithm = IncrementalOcdScenario::with_defaults( empty(2), 2).unwrap();
    let mut algorithm = IncrementalOcdScenario::with_defaults( algorithm, 3).unwrap();
    let aircraft: Vec<AircraftRecord> = algorithm.aircraft().map( |ac| ac.unwrap()).collect();
    assert_eq!( aircraft.len(), 2);
    assert_ne!( aircraft[0].callsign, aircraft[1].callsign);
}

#[test]
fn test_invalid_params() {
    println!("--- testing incremental scenario parameter validation");
    let bad = [
        IncrementalOcdParams { overflier_prob: 0.5, ..IncrementalOcdParams::default() },
        IncrementalOcdParams { climber_initial_interval: 0.8, ..IncrementalOcdParams::default() },
        IncrementalOcdParams { descender_minimum_descent: 0.5, ..IncrementalOcdParams::default() },
        IncrementalOcdParams { climber_minimum_climb: 0.0, ..IncrementalOcdParams::default() },
        IncrementalOcdParams { segment_probabilities: vec![], ..IncrementalOcdParams::default() },
        IncrementalOcdParams { segment_probabilities: vec![0.5, 0.6], ..IncrementalOcdParams::default() },
        IncrementalOcdParams { aircraft_count: 0, ..IncrementalOcdParams::default() },
    ];
    for params in bad {
        let res = IncrementalOcdScenario::new( empty(0), 0, params.clone());
        assert!( matches!( res, Err(ScenarioError::ConfigError(_))), "{params:?}");
    }

    let single_level = EmptyScenario::new( i_sector(), ScenarioConfig::default().with_flight_levels( vec![300])).unwrap();
    assert!( IncrementalOcdScenario::with_defaults( single_level, 0).is_err());
}

#[test]
fn test_params_config() {
    println!("--- testing incremental scenario RON parameters");
    let path = concat!( env!("CARGO_MANIFEST_DIR"), "/configs/incremental.ron");
    let params: IncrementalOcdParams = aviary_common::config::load_config( path).unwrap();
    assert!( params.validate().is_ok());
    assert_eq!( params.n_segments(), 3);
    assert_eq!( params.placement, StartPlacement::Continuous);
    assert_eq!( params.aircraft_count, 4);

    let params: IncrementalOcdParams = aviary_common::config::config_from_str( "(climber_prob: 0.5, overflier_prob: 0.0, descender_prob: 0.5)").unwrap();
    assert_eq!( params.segment_probabilities, vec![1.0]);
    assert_eq!( params.aircraft_count, 1);
    assert!( params.validate().is_ok());
}
