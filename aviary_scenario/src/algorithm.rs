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

use std::collections::HashSet;
use std::ops::RangeBounds;
use std::sync::Arc;
use serde::{Serialize,Deserialize};
use rand::{Rng, SeedableRng};
use rand::seq::{index, IndexedRandom};
use rand_chacha::ChaCha8Rng;

use aviary_common::debug;
use aviary_sector::{Route, SectorElement};

use crate::aircraft::AircraftRecord;
use crate::errors::{config_error, Result};

pub const AIRCRAFT_TYPES: [&str;3] = ["B77W", "A320", "A346"];
pub const FLIGHT_LEVELS: [u32;6] = [200, 240, 280, 320, 360, 400];
pub const CALLSIGN_PREFIXES: [&str;4] = ["SPEEDBIRD", "VJ", "DELTA", "EZY"];

pub const DEPARTURE: &str = "DEP";
pub const DESTINATION: &str = "DEST";

const CALLSIGN_DIGITS: usize = 3;
const MAX_CALLSIGN_DIGITS: usize = 10;

/// the choices a scenario algorithm draws from
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub aircraft_types: Vec<String>,
    pub flight_levels: Vec<u32>,
    pub callsign_prefixes: Vec<String>,
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            aircraft_types: AIRCRAFT_TYPES.iter().map( |s| s.to_string()).collect(),
            flight_levels: FLIGHT_LEVELS.to_vec(),
            callsign_prefixes: CALLSIGN_PREFIXES.iter().map( |s| s.to_string()).collect(),
            seed: 0,
        }
    }
}

impl ScenarioConfig {
    pub fn with_seed (mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_flight_levels (mut self, flight_levels: Vec<u32>) -> Self {
        self.flight_levels = flight_levels;
        self
    }

    pub fn with_aircraft_types<S: ToString> (mut self, aircraft_types: &[S]) -> Self {
        self.aircraft_types = aircraft_types.iter().map( |s| s.to_string()).collect();
        self
    }

    pub fn validate (&self) -> Result<()> {
        if self.aircraft_types.is_empty() {
            return Err( config_error!("no aircraft types"))
        }
        if self.flight_levels.is_empty() {
            return Err( config_error!("no flight levels"))
        }
        if let Some(fl) = self.flight_levels.iter().find( |fl| **fl == 0 || **fl % 10 != 0) {
            return Err( config_error!("invalid flight level {fl} (has to be a positive multiple of 10)"))
        }
        if self.callsign_prefixes.is_empty() {
            return Err( config_error!("no callsign prefixes"))
        }
        if let Some(p) = self.callsign_prefixes.iter().find( |p| p.chars().count() < 2) {
            return Err( config_error!("invalid callsign prefix '{p}' (needs at least two characters)"))
        }
        Ok(())
    }

    /// sorted set of flight levels
    pub fn distinct_flight_levels (&self) -> Vec<u32> {
        let mut levels = self.flight_levels.clone();
        levels.sort();
        levels.dedup();
        levels
    }
}

/* #region decision functions *****************************************************************/

pub fn choose_route<R: Rng + ?Sized> (rng: &mut R, routes: &[Route]) -> Option<Route> {
    routes.choose( rng).cloned()
}

/// uniform choice among the `levels` that fall into `range`
pub fn choose_flight_level<R: Rng + ?Sized> (rng: &mut R, levels: &[u32], range: impl RangeBounds<u32>) -> Option<u32> {
    let candidates: Vec<u32> = levels.iter().copied().filter( |fl| range.contains(fl)).collect();
    candidates.choose( rng).copied()
}

pub fn choose_aircraft_type<R: Rng + ?Sized> (rng: &mut R, aircraft_types: &[String]) -> Option<String> {
    aircraft_types.choose( rng).cloned()
}

/// random prefix followed by random distinct digits. The number of digits starts at three and grows
/// with every collision until we find a callsign that is not in `seen`
pub fn new_callsign<R: Rng + ?Sized> (rng: &mut R, prefixes: &[String], seen: &mut HashSet<String>) -> Option<String> {
    let mut k = CALLSIGN_DIGITS;
    loop {
        let prefix = prefixes.choose( rng)?;
        let suffix: String = index::sample( rng, 10, k).iter().map( |d| char::from( b'0' + d as u8)).collect();
        let callsign = format!("{prefix}{suffix}");
        if seen.insert( callsign.clone()) {
            return Some(callsign)
        }
        k = (k + 1).min( MAX_CALLSIGN_DIGITS);
    }
}

/* #endregion decision functions */

/// the state shared by all scenario algorithms: the sector, the validated config, the seeded
/// random source and the callsigns issued so far
#[derive(Debug)]
pub struct ScenarioContext {
    sector: Arc<SectorElement>,
    config: ScenarioConfig,
    rng: ChaCha8Rng,
    callsigns: HashSet<String>,
}

impl ScenarioContext {
    pub fn new (sector: Arc<SectorElement>, config: ScenarioConfig) -> Result<Self> {
        config.validate()?;
        debug!("scenario context for sector {} with seed {}, levels {:?}", sector.name(), config.seed, config.flight_levels);

        let rng = ChaCha8Rng::seed_from_u64( config.seed);
        Ok( ScenarioContext { sector, config, rng, callsigns: HashSet::new() } )
    }

    pub fn sector (&self) -> &SectorElement { &self.sector }
    pub fn shared_sector (&self) -> Arc<SectorElement> { self.sector.clone() }
    pub fn config (&self) -> &ScenarioConfig { &self.config }
    pub fn seed (&self) -> u64 { self.config.seed }
    pub fn rng (&mut self) -> &mut ChaCha8Rng { &mut self.rng }

    /// random (geographic) sector route
    pub fn route (&mut self) -> Result<Route> {
        let routes = self.sector.routes();
        choose_route( &mut self.rng, &routes)
            .ok_or_else( || config_error!("sector {} has no routes", self.sector.name()))
    }

    pub fn flight_level (&mut self) -> Result<u32> {
        self.flight_level_in(..)
    }

    /// random configured flight level within `range`
    pub fn flight_level_in (&mut self, range: impl RangeBounds<u32> + std::fmt::Debug) -> Result<u32> {
        let bounds = format!("{range:?}");
        choose_flight_level( &mut self.rng, &self.config.flight_levels, range)
            .ok_or_else( || config_error!("no flight level in {bounds}"))
    }

    pub fn aircraft_type (&mut self) -> Result<String> {
        choose_aircraft_type( &mut self.rng, &self.config.aircraft_types)
            .ok_or_else( || config_error!("no aircraft types"))
    }

    pub fn callsign (&mut self) -> Result<String> {
        new_callsign( &mut self.rng, &self.config.callsign_prefixes, &mut self.callsigns)
            .ok_or_else( || config_error!("no callsign prefixes"))
    }

    pub fn departure_airport (&self) -> String { DEPARTURE.to_string() }

    pub fn destination_airport (&self) -> String { DESTINATION.to_string() }

    /// add a callsign that was issued elsewhere. Returns false if it was already known
    pub fn register_callsign (&mut self, callsign: &str) -> bool {
        self.callsigns.insert( callsign.to_string())
    }

    pub fn seen_callsigns (&self) -> &HashSet<String> { &self.callsigns }

    pub fn reset_seen_callsigns (&mut self) {
        self.callsigns.clear();
    }
}

/// a scenario construction strategy. Aircraft are produced one at a time until the algorithm
/// runs out (None). Algorithms are not rewound, re-create them with the same seed to replay
pub trait ScenarioAlgorithm {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>>;

    fn context (&self) -> &ScenarioContext;

    fn aircraft (&mut self) -> AircraftIter<'_, Self> where Self: Sized {
        AircraftIter { algorithm: self }
    }
}

impl<A: ScenarioAlgorithm + ?Sized> ScenarioAlgorithm for Box<A> {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>> { (**self).next_aircraft() }
    fn context (&self) -> &ScenarioContext { (**self).context() }
}

pub struct AircraftIter<'a, A: ScenarioAlgorithm> {
    algorithm: &'a mut A,
}

impl<'a, A: ScenarioAlgorithm> Iterator for AircraftIter<'a, A> {
    type Item = Result<AircraftRecord>;

    fn next (&mut self) -> Option<Self::Item> {
        self.algorithm.next_aircraft()
    }
}
