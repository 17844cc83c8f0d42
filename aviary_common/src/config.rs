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

//! loading of RON configuration files.
//! Relative paths that don't exist in the current directory are looked up in the directory given by the
//! `AVIARY_CONFIG_DIR` environment variable (if set)

use std::{env, fs, path::{Path,PathBuf}};
use ron::ser::PrettyConfig;
use serde::{Serialize,Deserialize};

use crate::errors::{AviaryCommonError, Result};
use crate::debug;

pub const CONFIG_DIR_ENV: &str = "AVIARY_CONFIG_DIR";

pub fn find_config_file (path: impl AsRef<Path>) -> Option<PathBuf> {
    let path = path.as_ref();
    if path.is_file() { return Some(path.to_path_buf()) }

    if path.is_relative() {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            let p = Path::new(&dir).join(path);
            if p.is_file() { return Some(p) }
        }
    }
    None
}

pub fn load_config<C> (path: impl AsRef<Path>) -> Result<C> where C: for <'a> Deserialize<'a> {
    let path = path.as_ref();
    if let Some(p) = find_config_file(path) {
        debug!("loading config {p:?}");
        let data = fs::read(&p)?;
        Ok( ron::de::from_bytes( data.as_slice())? )
    } else {
        Err( AviaryCommonError::ConfigError( format!("config file not found: {path:?}")))
    }
}

/// parse a config from a RON string (mostly for inline configs and tests)
pub fn config_from_str<C> (s: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    Ok( ron::de::from_str(s)? )
}

/// pretty print a config value, e.g. to generate a template for a config file
pub fn to_config_string<C> (config: &C) -> Result<String> where C: Serialize {
    ron::ser::to_string_pretty( config, PrettyConfig::new().struct_names(true))
        .map_err(|e| AviaryCommonError::ConfigError( e.to_string()))
}
