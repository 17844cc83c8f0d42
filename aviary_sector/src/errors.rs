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

 pub type Result<T> = std::result::Result<T,SectorError>;

#[derive(Error,Debug)]
pub enum SectorError {

    /// rejected construction (inconsistent or out-of-range parameters)
    #[error("config error {0}")]
    ConfigError(String),

    #[error("lookup error: no {key} in {structure}")]
    LookupError { key: String, structure: String },

    #[error("parse error {0}")]
    ParseError(String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("GeoJSON error {0}")]
    GeoJsonError( #[from] geojson::Error),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::SectorError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::SectorError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;

macro_rules! lookup_error {
    ($key:expr, $structure:expr) => {
        $crate::errors::SectorError::LookupError { key: ($key).to_string(), structure: ($structure).to_string() }
    };
}
pub (crate) use lookup_error;
