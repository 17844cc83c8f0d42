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
use crate::errors::Result;

/// a scenario without aircraft. Mostly useful as the base for incremental scenarios
pub struct EmptyScenario {
    ctx: ScenarioContext,
}

impl EmptyScenario {
    pub fn new (sector: Arc<SectorElement>, config: ScenarioConfig) -> Result<Self> {
        Ok( EmptyScenario { ctx: ScenarioContext::new( sector, config)? } )
    }
}

impl ScenarioAlgorithm for EmptyScenario {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>> { None }

    fn context (&self) -> &ScenarioContext { &self.ctx }
}
