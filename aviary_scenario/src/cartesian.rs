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

use std::sync::Arc;

use aviary_sector::SectorElement;

use crate::aircraft::AircraftRecord;
use crate::algorithm::{ScenarioAlgorithm, ScenarioConfig, ScenarioContext};
use crate::errors::{config_error, Result};

/// one aircraft for each (flight level, aircraft type) combination, all starting at the
/// first fix of a random route at scenario start
pub struct CartesianScenario {
    ctx: ScenarioContext,
    combinations: Vec<(u32,String)>,
    next: usize,
}

impl CartesianScenario {
    pub fn new (sector: Arc<SectorElement>, config: ScenarioConfig) -> Result<Self> {
        let ctx = ScenarioContext::new( sector, config)?;

        let cfg = ctx.config();
        let combinations = cfg.flight_levels.iter()
            .flat_map( |fl| cfg.aircraft_types.iter().map( move |t| (*fl, t.clone())))
            .collect();

        Ok( CartesianScenario { ctx, combinations, next: 0 } )
    }

    pub fn len (&self) -> usize { self.combinations.len() }

    fn new_aircraft (&mut self, flight_level: u32, aircraft_type: String) -> Result<AircraftRecord> {
        let route = self.ctx.route()?;
        let start = route.first_fix().map( |f| f.point).ok_or_else( || config_error!("empty route"))?;

        Ok( AircraftRecord {
            callsign: self.ctx.callsign()?,
            aircraft_type,
            departure: self.ctx.departure_airport(),
            destination: self.ctx.destination_airport(),
            start_position: [start.x(), start.y()],
            timedelta: 0,
            current_flight_level: flight_level,
            cleared_flight_level: flight_level,
            requested_flight_level: flight_level,
            route: route.serialize(),
        })
    }
}

impl ScenarioAlgorithm for CartesianScenario {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>> {
        let (flight_level, aircraft_type) = self.combinations.get( self.next).cloned()?;
        self.next += 1;
        Some( self.new_aircraft( flight_level, aircraft_type))
    }

    fn context (&self) -> &ScenarioContext { &self.ctx }
}
