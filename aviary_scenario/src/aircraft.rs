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

use serde::{Serialize,Deserialize};
use aviary_common::geo::GeoPoint;
use aviary_sector::RouteElement;

/// a single aircraft of a scenario as it appears in the scenario document
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftRecord {
    pub callsign: String,

    #[serde(rename = "type")]
    pub aircraft_type: String,

    pub departure: String,
    pub destination: String,

    /// [lon,lat] in degrees
    pub start_position: [f64;2],

    /// seconds since scenario start
    pub timedelta: u64,

    pub current_flight_level: u32,
    pub cleared_flight_level: u32,
    pub requested_flight_level: u32,

    pub route: Vec<RouteElement>,
}

impl AircraftRecord {
    pub fn start_point (&self) -> GeoPoint {
        GeoPoint::from_lon_lat_degrees( self.start_position[0], self.start_position[1])
    }

    pub fn fix_names (&self) -> Vec<&str> {
        self.route.iter().map( |e| e.fix_name.as_str()).collect()
    }
}

/// flight phase of a generated aircraft relative to its requested level
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum FlightPhase {
    Overflier,
    Climber,
    Descender,
}

impl FlightPhase {
    pub fn of (record: &AircraftRecord) -> Self {
        use std::cmp::Ordering::*;
        match record.requested_flight_level.cmp( &record.current_flight_level) {
            Greater => FlightPhase::Climber,
            Less => FlightPhase::Descender,
            Equal => FlightPhase::Overflier,
        }
    }
}
