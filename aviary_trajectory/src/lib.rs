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

//! trajectory estimates (cruise speed, climb time and downtrack distance) by flight level and aircraft type

pub mod errors;
pub mod lookup;

pub use errors::{TrajectoryError, Result};
pub use lookup::{LookupConfig, LookupTable, LookupTrajectoryPredictor};

/// the trajectory data queries scenario construction depends on.
/// Climb time and downtrack distance are cumulative from the ground and have to be monotonic in flight level
pub trait TrajectoryPredictor {

    /// true airspeed in m/s
    fn cruise_speed (&self, flight_level: u32, aircraft_type: &str) -> Result<f64>;

    /// climb time in seconds from the ground to the given level
    fn climb_time_to_level (&self, flight_level: u32, aircraft_type: &str) -> Result<f64>;

    /// horizontal distance in meters covered while climbing from the ground to the given level
    fn downtrack_distance_to_level (&self, flight_level: u32, aircraft_type: &str) -> Result<f64>;

    fn climb_time_between_levels (&self, lower_level: u32, upper_level: u32, aircraft_type: &str) -> Result<f64> {
        Ok( self.climb_time_to_level( upper_level, aircraft_type)? - self.climb_time_to_level( lower_level, aircraft_type)? )
    }

    fn downtrack_distance_between_levels (&self, lower_level: u32, upper_level: u32, aircraft_type: &str) -> Result<f64> {
        Ok( self.downtrack_distance_to_level( upper_level, aircraft_type)? - self.downtrack_distance_to_level( lower_level, aircraft_type)? )
    }
}
