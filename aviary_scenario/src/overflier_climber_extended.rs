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
use rand::seq::index;

use aviary_common::debug;
use aviary_sector::SectorElement;
use aviary_trajectory::TrajectoryPredictor;

use crate::aircraft::AircraftRecord;
use crate::algorithm::{ScenarioAlgorithm, ScenarioConfig, ScenarioContext};
use crate::errors::{config_error, Result};
use crate::overflier_climber::OverflierClimberScenario;

/// overflier-climber scenario with both aircraft moved back along their approach by the distance they cruise
/// during `thinking_time` seconds. Three distinct levels low < mid < high are drawn: the overflier cruises at mid,
/// the climber starts at low and requests high. This makes an immediate climb of the climber a viable
/// resolution, which by construction it is not in the plain overflier-climber scenario
pub struct OverflierClimberExtendedScenario {
    ctx: ScenarioContext,
    inner: OverflierClimberScenario,
    thinking_time: f64,
    levels: [u32;3],
}

impl OverflierClimberExtendedScenario {
    pub fn new (sector: Arc<SectorElement>, config: ScenarioConfig, predictor: Arc<dyn TrajectoryPredictor>, thinking_time: f64) -> Result<Self> {
        if !(thinking_time.is_finite() && thinking_time > 0.0) {
            return Err( config_error!("invalid thinking time {thinking_time}"))
        }

        let mut ctx = ScenarioContext::new( sector.clone(), config.clone())?;
        let distinct = ctx.config().distinct_flight_levels();
        if distinct.len() < 3 {
            return Err( config_error!("extended overflier-climber scenario requires at least 3 distinct flight levels, got {}", distinct.len()))
        }

        let mut picked: Vec<u32> = index::sample( ctx.rng(), distinct.len(), 3).iter().map( |i| distinct[i]).collect();
        picked.sort();
        let levels = [picked[0], picked[1], picked[2]];
        debug!("extended overflier-climber levels {levels:?}, thinking time {thinking_time}s");

        let inner_config = config.with_flight_levels( vec![levels[0], levels[1]]);
        let inner = OverflierClimberScenario::new( sector, inner_config, predictor)?
            .with_thinking_time( thinking_time, levels[2]);

        Ok( OverflierClimberExtendedScenario { ctx, inner, thinking_time, levels } )
    }

    pub fn thinking_time (&self) -> f64 { self.thinking_time }

    /// (low, mid, high)
    pub fn levels (&self) -> (u32,u32,u32) { (self.levels[0], self.levels[1], self.levels[2]) }
}

impl ScenarioAlgorithm for OverflierClimberExtendedScenario {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>> {
        let res = self.inner.next_aircraft()?;
        if let Ok(ac) = &res {
            self.ctx.register_callsign( &ac.callsign);
        }
        Some(res)
    }

    fn context (&self) -> &ScenarioContext { &self.ctx }
}
