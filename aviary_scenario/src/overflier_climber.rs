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

use std::collections::VecDeque;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

use aviary_common::debug;
use aviary_common::geo::{destination_toward, GeoPoint};
use aviary_sector::{Route, SectorElement};
use aviary_trajectory::TrajectoryPredictor;

use crate::aircraft::AircraftRecord;
use crate::algorithm::{ScenarioAlgorithm, ScenarioConfig, ScenarioContext};
use crate::errors::{config_error, Result};

/// two aircraft on opposite directions of the same route whose constant rate trajectories reach the
/// sector centre at the same time: an overflier cruising at its level and a climber that arrives at the
/// overflier's level when it reaches the centre.
/// Assumes routes are straight lines through the centre, which holds for I, X and Y sectors
pub struct OverflierClimberScenario {
    ctx: ScenarioContext,
    predictor: Arc<dyn TrajectoryPredictor>,

    /// extra seconds of cruise added in front of each aircraft
    thinking_time: f64,
    /// overrides the drawn requested level of the climber
    climber_requested_level: Option<u32>,

    pending: VecDeque<AircraftRecord>,
    generated: bool,
}

impl OverflierClimberScenario {
    pub fn new (sector: Arc<SectorElement>, config: ScenarioConfig, predictor: Arc<dyn TrajectoryPredictor>) -> Result<Self> {
        let ctx = ScenarioContext::new( sector, config)?;
        let n_levels = ctx.config().distinct_flight_levels().len();
        if n_levels < 2 {
            return Err( config_error!("overflier-climber scenario requires at least 2 distinct flight levels, got {n_levels}"))
        }

        Ok( OverflierClimberScenario {
            ctx,
            predictor,
            thinking_time: 0.0,
            climber_requested_level: None,
            pending: VecDeque::new(),
            generated: false
        })
    }

    pub(crate) fn with_thinking_time (mut self, thinking_time: f64, climber_requested_level: u32) -> Self {
        self.thinking_time = thinking_time;
        self.climber_requested_level = Some(climber_requested_level);
        self
    }

    /// generate overflier and climber (in this order)
    fn conflict_pair (&mut self) -> Result<[AircraftRecord;2]> {
        let levels = self.ctx.config().distinct_flight_levels();
        let min_level = levels[0];

        let overflier_route = self.ctx.route()?;
        let mut climber_route = overflier_route.copy();
        climber_route.reverse();

        let overflier_level = self.ctx.flight_level_in( (Excluded(min_level), Unbounded))?;
        let climber_level = self.ctx.flight_level_in( ..overflier_level)?;
        let climber_requested_level = self.ctx.flight_level_in( overflier_level..)?;

        let overflier_type = self.ctx.aircraft_type()?;
        let climber_type = self.ctx.aircraft_type()?;

        let climb_time = self.predictor.climb_time_between_levels( climber_level, overflier_level, &climber_type)?;
        let overflier_speed = self.predictor.cruise_speed( overflier_level, &overflier_type)?;
        let climber_distance = self.predictor.downtrack_distance_between_levels( climber_level, overflier_level, &climber_type)?;
        let overflier_distance = climb_time * overflier_speed;
        debug!("overflier {overflier_type} FL{overflier_level} at {overflier_distance:.0}m, climber {climber_type} FL{climber_level} at {climber_distance:.0}m, time to conflict {climb_time:.1}s");

        let (overflier_windback, climber_windback) = if self.thinking_time > 0.0 {
            let climber_speed = self.predictor.cruise_speed( climber_level, &climber_type)?;
            (overflier_speed * self.thinking_time, climber_speed * self.thinking_time)
        } else {
            (0.0, 0.0)
        };

        let overflier = self.aircraft( overflier_route, overflier_distance + overflier_windback, overflier_type,
                                       overflier_level, overflier_level)?;
        let climber = self.aircraft( climber_route, climber_distance + climber_windback, climber_type,
                                     climber_level, self.climber_requested_level.unwrap_or( climber_requested_level))?;
        Ok( [overflier, climber] )
    }

    fn aircraft (&mut self, mut route: Route, distance_m: f64, aircraft_type: String, current_flight_level: u32, requested_flight_level: u32) -> Result<AircraftRecord> {
        let start = approach_start( self.ctx.sector(), &route, distance_m)?;
        route.truncate( start.lat(), start.lon());

        Ok( AircraftRecord {
            callsign: self.ctx.callsign()?,
            aircraft_type,
            departure: self.ctx.departure_airport(),
            destination: self.ctx.destination_airport(),
            start_position: [start.lon(), start.lat()],
            timedelta: 0,
            current_flight_level,
            cleared_flight_level: current_flight_level,
            requested_flight_level,
            route: route.serialize(),
        })
    }
}

/// the position `distance_m` meters from the sector centre in the direction of the first route fix. This is not
/// clamped to the fix, aircraft that need longer approaches start outside of the sector
fn approach_start (sector: &SectorElement, route: &Route, distance_m: f64) -> Result<GeoPoint> {
    let centre = sector.centre_point();
    let first = route.first_fix().ok_or_else( || config_error!("empty route"))?;
    Ok( destination_toward( centre.lat(), centre.lon(), first.point.y(), first.point.x(), distance_m) )
}

impl ScenarioAlgorithm for OverflierClimberScenario {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>> {
        if !self.generated {
            self.generated = true;
            match self.conflict_pair() {
                Ok(pair) => self.pending.extend( pair),
                Err(e) => return Some( Err(e))
            }
        }
        self.pending.pop_front().map( Ok)
    }

    fn context (&self) -> &ScenarioContext { &self.ctx }
}
