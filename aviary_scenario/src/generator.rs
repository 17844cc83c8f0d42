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

use std::fs;
use std::path::{Path, PathBuf};
use chrono::NaiveTime;
use serde::{Serialize,Deserialize};

use aviary_common::{debug, info};
use aviary_common::datetime::{add_secs_f64, de_hms, parse_hms, ser_hms};

use crate::aircraft::AircraftRecord;
use crate::algorithm::ScenarioAlgorithm;
use crate::errors::Result;

pub const JSON_EXTENSION: &str = "json";

/// a generated scenario as written to scenario documents
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(serialize_with = "ser_hms", deserialize_with = "de_hms")]
    pub start_time: NaiveTime,
    pub aircraft: Vec<AircraftRecord>,
}

impl Scenario {
    pub fn from_json_str (s: &str) -> Result<Self> {
        Ok( serde_json::from_str(s)? )
    }

    pub fn to_json_string (&self) -> Result<String> {
        Ok( serde_json::to_string_pretty( self)? )
    }

    /// time of day at which the given aircraft enters the scenario
    pub fn aircraft_start_time (&self, aircraft: &AircraftRecord) -> NaiveTime {
        add_secs_f64( &self.start_time, aircraft.timedelta as f64)
    }

    /// write scenario to `dir/filename`, adding a ".json" extension if missing. Returns the written path
    pub fn write_json_scenario (&self, dir: impl AsRef<Path>, filename: &str) -> Result<PathBuf> {
        let mut path = dir.as_ref().join( filename);
        if !path.extension().is_some_and( |ext| ext.eq_ignore_ascii_case( JSON_EXTENSION)) {
            path = dir.as_ref().join( format!("{filename}.{JSON_EXTENSION}"));
        }

        fs::write( &path, self.to_json_string()?)?;
        info!("wrote scenario with {} aircraft to {path:?}", self.aircraft.len());
        Ok(path)
    }
}

/// collects the aircraft of a scenario algorithm into a [`Scenario`]
#[derive(Debug,Clone)]
pub struct ScenarioGenerator {
    start_time: NaiveTime,
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        ScenarioGenerator { start_time: NaiveTime::MIN }
    }
}

impl ScenarioGenerator {
    pub fn new (start_time: NaiveTime) -> Self {
        ScenarioGenerator { start_time }
    }

    /// start time given as "HH:MM:SS"
    pub fn from_hms (start_time: &str) -> Result<Self> {
        Ok( ScenarioGenerator { start_time: parse_hms( start_time)? } )
    }

    pub fn start_time (&self) -> NaiveTime { self.start_time }

    /// pull aircraft from `algorithm` until it is exhausted or the next aircraft would enter after `duration_s` seconds
    pub fn generate_scenario<A: ScenarioAlgorithm> (&self, algorithm: &mut A, duration_s: u64) -> Result<Scenario> {
        let mut aircraft = Vec::new();
        for ac in algorithm.aircraft() {
            let ac = ac?;
            if ac.timedelta > duration_s {
                break
            }
            aircraft.push( ac);
        }
        debug!("generated scenario with {} aircraft over {duration_s}s", aircraft.len());

        Ok( Scenario { start_time: self.start_time, aircraft } )
    }
}

/// default file name for scenario documents: `<prefix>-<seed>`
pub fn scenario_filename (prefix: &str, seed: u64) -> String {
    format!("{prefix}-{seed}")
}
