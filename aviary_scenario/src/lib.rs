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

//! traffic scenarios for airspace sectors.
//!
//! A [`ScenarioAlgorithm`] produces [`AircraftRecord`]s one at a time from a seeded random source, so the same
//! sector, config and seed always produce the same scenario. The [`ScenarioGenerator`] collects them into a
//! [`Scenario`] document

pub mod errors;
pub mod aircraft;
pub mod algorithm;
pub mod poisson;
pub mod cartesian;
pub mod empty;
pub mod overflier_climber;
pub mod overflier_climber_extended;
pub mod incremental_ocd;
pub mod generator;

pub use errors::{ScenarioError, Result};
pub use aircraft::{AircraftRecord, FlightPhase};
pub use algorithm::{ScenarioAlgorithm, ScenarioConfig, ScenarioContext, AircraftIter};
pub use poisson::PoissonScenario;
pub use cartesian::CartesianScenario;
pub use empty::EmptyScenario;
pub use overflier_climber::OverflierClimberScenario;
pub use overflier_climber_extended::OverflierClimberExtendedScenario;
pub use incremental_ocd::{IncrementalOcdScenario, IncrementalOcdParams, StartPlacement};
pub use generator::{Scenario, ScenarioGenerator, scenario_filename};
