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

/// geodetic and unit constants used throughout aviary

/// mean earth radius in meters
pub const MEAN_EARTH_RADIUS: f64 = 6371000.0;

/// semi major axis in meters
pub const EQATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// first eccentricity of earth
pub const E_EARTH: f64 = 0.08181919092890692;
pub const E_EARTH_SQUARED: f64 = E_EARTH*E_EARTH;

/// international nautical mile in meters
pub const METERS_PER_NM: f64 = 1852.0;

pub const FEET_PER_METER: f64 = 3.280839895;

/// a flight level is altitude in hundreds of feet
pub const FEET_PER_FLIGHT_LEVEL: f64 = 100.0;
