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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,ScenarioError>;

#[derive(Error,Debug)]
pub enum ScenarioError {

    /// rejected construction of a scenario algorithm or its configuration
    #[error("config error {0}")]
    ConfigError(String),

    #[error("sector error {0}")]
    SectorError( #[from] aviary_sector::SectorError),

    #[error("trajectory error {0}")]
    TrajectoryError( #[from] aviary_trajectory::TrajectoryError),

    #[error("common error {0}")]
    CommonError( #[from] aviary_common::AviaryCommonError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::ScenarioError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;
