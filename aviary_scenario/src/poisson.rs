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
use rand_distr::{Distribution, Exp};

use aviary_common::trace;
use aviary_sector::{Route, SectorElement};

use crate::aircraft::AircraftRecord;
use crate::algorithm::{ScenarioAlgorithm, ScenarioConfig, ScenarioContext};
use crate::errors::{config_error, Result};

/// aircraft arriving at the first fix of a random route with exponentially distributed inter-arrival times.
/// This is an unbounded sequence, consumers have to limit it (e.g. by scenario duration)
pub struct PoissonScenario {
    ctx: ScenarioContext,
    arrival_rate: f64,
    interarrival: Exp<f64>,
    elapsed: f64,
}

impl PoissonScenario {
    /// `arrival_rate` is in aircraft per second
    pub fn new (sector: Arc<SectorElement>, config: ScenarioConfig, arrival_rate: f64) -> Result<Self> {
        if !(arrival_rate.is_finite() && arrival_rate > 0.0) {
            return Err( config_error!("invalid arrival rate {arrival_rate}"))
        }
        let interarrival = Exp::new( arrival_rate).map_err( |e| config_error!("invalid arrival rate {arrival_rate}: {e:?}"))?;
        let ctx = ScenarioContext::new( sector, config)?;

        Ok( PoissonScenario { ctx, arrival_rate, interarrival, elapsed: 0.0 } )
    }

    pub fn arrival_rate (&self) -> f64 { self.arrival_rate }

    fn new_aircraft (&mut self) -> Result<AircraftRecord> {
        self.elapsed += self.interarrival.sample( self.ctx.rng());

        let mut route = self.ctx.route()?;
        let start = route.first_fix().map( |f| f.point).ok_or_else( || config_error!("empty route"))?;
        let departure = self.ctx.departure_airport();
        let destination = self.ctx.destination_airport();
        route.truncate( start.y(), start.x());

        let flight_level = self.ctx.flight_level()?;
        let aircraft_type = self.ctx.aircraft_type()?;
        let callsign = self.ctx.callsign()?;
        trace!("poisson arrival {callsign} at {:.1}s", self.elapsed);

        Ok( AircraftRecord {
            callsign,
            aircraft_type,
            departure,
            destination,
            start_position: [start.x(), start.y()],
            timedelta: self.elapsed.round() as u64,
            current_flight_level: flight_level,
            cleared_flight_level: flight_level,
            requested_flight_level: flight_level,
            route: route.serialize(),
        })
    }
}

impl ScenarioAlgorithm for PoissonScenario {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>> {
        Some( self.new_aircraft())
    }

    fn context (&self) -> &ScenarioContext { &self.ctx }
}
