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

//! closed-form scores for aircraft separation, sector exit accuracy and fuel efficiency.
//!
//! Distance based scores map a distance `d` and two thresholds `c < C` into `[-1,0]`. Horizontal distances
//! are in whole nautical miles, vertical distances in feet. Positions are (lon, lat, altitude in meters)

use serde::{Serialize,Deserialize};

use aviary_common::geo::{distance, meters_to_nm, midpoint};
use aviary_common::geo_constants::{FEET_PER_FLIGHT_LEVEL, FEET_PER_METER};
use aviary_sector::{RouteElement, SectorElement};

pub mod errors;
pub use errors::{MetricsError, Result};
use errors::argument_error;

/// aircraft position with altitude in meters
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

impl Position {
    pub fn new (lon: f64, lat: f64, alt: f64) -> Self {
        Position { lon, lat, alt }
    }

    pub fn alt_ft (&self) -> f64 { self.alt * FEET_PER_METER }
    pub fn flight_level (&self) -> f64 { self.alt_ft() / FEET_PER_FLIGHT_LEVEL }
}

/// score thresholds. For separation the lower values are the minimum separation, for sector exits the
/// lower values are the tolerated deviation. Both default to 5/10 nm and 1000/2000 ft
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct DistanceThresholds {
    pub horizontal_nm: f64,
    pub horizontal_max_nm: f64,
    pub vertical_ft: f64,
    pub vertical_max_ft: f64,
}

impl Default for DistanceThresholds {
    fn default() -> Self {
        DistanceThresholds { horizontal_nm: 5.0, horizontal_max_nm: 10.0, vertical_ft: 1000.0, vertical_max_ft: 2000.0 }
    }
}

/// geodesic distance rounded to whole nautical miles
pub fn horizontal_distance_nm (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    meters_to_nm( distance( lat1, lon1, lat2, lon2)).round()
}

/// absolute difference in feet of two altitudes given in meters
pub fn vertical_distance_ft (alt1: f64, alt2: f64) -> f64 {
    (alt1 - alt2).abs() * FEET_PER_METER
}

fn check_args (d: f64, c: f64, max: f64) -> Result<()> {
    if !(d >= 0.0) {
        return Err( argument_error!("invalid distance {d}"))
    }
    if !(c < max) {
        return Err( argument_error!("expected threshold {c} < {max}"))
    }
    Ok(())
}

/// -1 below `c`, 0 at or above `max`, linear in between
pub fn separation_score (d: f64, c: f64, max: f64) -> Result<f64> {
    check_args( d, c, max)?;
    if d < c {
        Ok(-1.0)
    } else if d >= max {
        Ok(0.0)
    } else {
        Ok( (d - c) / (max - c) - 1.0 )
    }
}

/// 0 up to `c`, -1 above `max`, linear in between
pub fn sector_exit_score (d: f64, c: f64, max: f64) -> Result<f64> {
    check_args( d, c, max)?;
    if d <= c {
        Ok(0.0)
    } else if d > max {
        Ok(-1.0)
    } else {
        Ok( -(d - c) / (max - c) )
    }
}

/// the less severe of the horizontal and vertical separation scores of two aircraft
pub fn pairwise_separation_metric (p1: &Position, p2: &Position, thresholds: &DistanceThresholds) -> Result<f64> {
    let h = separation_score( horizontal_distance_nm( p1.lat, p1.lon, p2.lat, p2.lon), thresholds.horizontal_nm, thresholds.horizontal_max_nm)?;
    let v = separation_score( vertical_distance_ft( p1.alt, p2.alt), thresholds.vertical_ft, thresholds.vertical_max_ft)?;
    Ok( h.max(v) )
}

/// score of an actual exit point against a target point, both with altitudes in feet
pub fn exit_position_score (actual: (f64,f64,f64), target: (f64,f64,f64), thresholds: &DistanceThresholds) -> Result<f64> {
    let (lon, lat, alt_ft) = actual;
    let (target_lon, target_lat, target_alt_ft) = target;

    let h = sector_exit_score( horizontal_distance_nm( target_lat, target_lon, lat, lon), thresholds.horizontal_nm, thresholds.horizontal_max_nm)?;
    let v = sector_exit_score( (alt_ft - target_alt_ft).abs(), thresholds.vertical_ft, thresholds.vertical_max_ft)?;
    Ok( h.min(v) )
}

/// the exit target of a route is its second to last fix (the last one is outside of the sector)
pub fn exit_target (route: &[RouteElement]) -> Result<(f64,f64)> {
    if route.len() < 2 {
        return Err( argument_error!("route with {} fixes has no exit target", route.len()))
    }
    let fix = &route[route.len()-2];
    fix.lon_lat().ok_or_else( || argument_error!("fix {} has no point geometry", fix.fix_name))
}

/// score for an aircraft that left `sector` between the `previous` and `current` positions, or None if it did not.
/// The exit point is estimated as the midpoint of the two positions, the target is the exit fix of the route at the
/// requested flight level
pub fn sector_exit_metric (current: &Position, previous: &Position, requested_flight_level: u32,
                           sector: &SectorElement, route: &[RouteElement], thresholds: &DistanceThresholds) -> Result<Option<f64>> {
    let is_exit = !sector.contains( current.lon, current.lat, current.flight_level())
        && sector.contains( previous.lon, previous.lat, previous.flight_level());
    if !is_exit {
        return Ok(None)
    }

    let exit = midpoint( current.lat, current.lon, previous.lat, previous.lon);
    let exit_alt_ft = (current.alt_ft() + previous.alt_ft()) / 2.0;
    let (target_lon, target_lat) = exit_target( route)?;
    let target_alt_ft = requested_flight_level as f64 * FEET_PER_FLIGHT_LEVEL;

    exit_position_score( (exit.lon(), exit.lat(), exit_alt_ft), (target_lon, target_lat, target_alt_ft), thresholds).map( Some)
}

/// penalizes the distance to the requested level for climbs and the distance to the initial level for descents,
/// relative to the requested level change. Levels can be flight levels or altitudes. Results are in `[-1,0]`
pub fn fuel_efficiency_metric (current_level: f64, requested_level: f64, initial_level: f64) -> f64 {
    let denom = (requested_level - initial_level).abs();
    if denom == 0.0 {
        return 0.0
    }
    let num = (requested_level.max( initial_level) - current_level).abs();
    -(num / denom).min(1.0)
}
