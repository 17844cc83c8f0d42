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

use std::{collections::HashMap, io::Read, path::{Path,PathBuf}};
use serde::{Serialize,Deserialize};

use aviary_common::{debug, info};
use aviary_common::config::{find_config_file, load_config};
use crate::TrajectoryPredictor;
use crate::errors::{parse_error, Result, TrajectoryError};

pub const DEFAULT_INDEX_COLUMN: &str = "FL";

/// where to find the CSV lookup tables. Each table has a flight level index column and one column per aircraft type
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
pub struct LookupConfig {
    pub cruise_speed: PathBuf,
    pub climb_time: PathBuf,
    pub downtrack_distance: PathBuf,
    #[serde(default = "default_index_column")]
    pub index_column: String,
}

fn default_index_column()->String { DEFAULT_INDEX_COLUMN.to_string() }

impl LookupConfig {
    /// make relative table paths relative to the given directory (usually the one containing the config file)
    pub fn resolve_relative_to (&mut self, dir: &Path) {
        for p in [&mut self.cruise_speed, &mut self.climb_time, &mut self.downtrack_distance] {
            if p.is_relative() { *p = dir.join( &*p) }
        }
    }
}

/// a (flight level, aircraft type) -> value table
#[derive(Debug,Clone)]
pub struct LookupTable {
    name: String,
    aircraft_types: Vec<String>,
    values: HashMap<u32,Vec<f64>>, // level -> value per aircraft type column
}

impl LookupTable {
    pub fn from_reader<R: Read> (name: &str, rdr: R, index_column: &str) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(rdr);

        let headers = csv_reader.headers()?.clone();
        let idx = headers.iter().position( |h| h.trim() == index_column)
            .ok_or_else( || parse_error!("no index column {index_column} in {name}"))?;
        let aircraft_types: Vec<String> = headers.iter().enumerate()
            .filter( |(i,_)| *i != idx)
            .map( |(_,h)| h.trim().to_string())
            .collect();

        let mut values = HashMap::new();
        for rec in csv_reader.records() {
            let rec = rec?;
            let level = parse_level( rec.get(idx).unwrap_or(""))
                .ok_or_else( || parse_error!("invalid flight level in {name}: {rec:?}"))?;

            let mut row = Vec::with_capacity( aircraft_types.len());
            for (i,field) in rec.iter().enumerate() {
                if i != idx {
                    let v: f64 = field.trim().parse().map_err( |_| parse_error!("invalid value '{field}' in {name} at FL{level}"))?;
                    row.push(v);
                }
            }
            if row.len() != aircraft_types.len() {
                return Err( parse_error!("incomplete row in {name} at FL{level}"))
            }
            values.insert( level, row);
        }

        debug!("loaded {name} table with {} levels and types {:?}", values.len(), aircraft_types);
        Ok( LookupTable { name: name.to_string(), aircraft_types, values } )
    }

    pub fn from_path (name: &str, path: impl AsRef<Path>, index_column: &str) -> Result<Self> {
        let file = std::fs::File::open( path)?;
        Self::from_reader( name, file, index_column)
    }

    pub fn name (&self) -> &str { &self.name }

    pub fn aircraft_types (&self) -> &[String] { &self.aircraft_types }

    pub fn flight_levels (&self) -> Vec<u32> {
        let mut levels: Vec<u32> = self.values.keys().copied().collect();
        levels.sort();
        levels
    }

    pub fn get (&self, flight_level: u32, aircraft_type: &str) -> Result<f64> {
        self.aircraft_types.iter().position( |t| t == aircraft_type)
            .and_then( |i| self.values.get( &flight_level).map( |row| row[i]))
            .ok_or_else( || TrajectoryError::LookupError {
                table: self.name.clone(), flight_level, aircraft_type: aircraft_type.to_string()
            })
    }
}

// levels might be written as "200" or "200.0"
fn parse_level (s: &str) -> Option<u32> {
    let s = s.trim();
    s.parse::<u32>().ok().or_else( || {
        s.parse::<f64>().ok().filter( |v| *v >= 0.0 && v.fract() == 0.0).map( |v| v as u32)
    })
}

/// trajectory prediction by table lookup
#[derive(Debug,Clone)]
pub struct LookupTrajectoryPredictor {
    cruise_speed: LookupTable,
    climb_time: LookupTable,
    downtrack_distance: LookupTable,
}

impl LookupTrajectoryPredictor {
    pub fn new (cruise_speed: LookupTable, climb_time: LookupTable, downtrack_distance: LookupTable) -> Self {
        LookupTrajectoryPredictor { cruise_speed, climb_time, downtrack_distance }
    }

    pub fn from_config (config: &LookupConfig) -> Result<Self> {
        let idx = &config.index_column;
        let predictor = LookupTrajectoryPredictor::new(
            LookupTable::from_path( "cruise speed", &config.cruise_speed, idx)?,
            LookupTable::from_path( "climb time", &config.climb_time, idx)?,
            LookupTable::from_path( "downtrack distance", &config.downtrack_distance, idx)?
        );
        info!("loaded trajectory lookup tables for {:?}", predictor.cruise_speed.aircraft_types());
        Ok(predictor)
    }

    /// load from a RON [`LookupConfig`] file. Relative table paths are resolved against the config file directory
    pub fn from_config_file (path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: LookupConfig = load_config( path)?;
        if let Some(dir) = find_config_file( path).as_deref().and_then( Path::parent) {
            config.resolve_relative_to( dir);
        }
        Self::from_config( &config)
    }
}

impl TrajectoryPredictor for LookupTrajectoryPredictor {
    fn cruise_speed (&self, flight_level: u32, aircraft_type: &str) -> Result<f64> {
        self.cruise_speed.get( flight_level, aircraft_type)
    }

    fn climb_time_to_level (&self, flight_level: u32, aircraft_type: &str) -> Result<f64> {
        self.climb_time.get( flight_level, aircraft_type)
    }

    fn downtrack_distance_to_level (&self, flight_level: u32, aircraft_type: &str) -> Result<f64> {
        self.downtrack_distance.get( flight_level, aircraft_type)
    }
}
