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

//! idealized airspace sectors: I, X and Y shaped cross-sections with named fixes and routes through them,
//! defined in a local plane and mapped into geographic coordinates by a [`SectorElement`]

use sha2::{Digest, Sha256};

pub mod errors;
pub mod route;
pub mod shape;
pub mod element;
pub mod sector_geojson;

pub use errors::{SectorError, Result};
pub use route::{Fix, Route, RouteElement};
pub use shape::{SectorShape, SectorType, ShapeParams, Fixes};
pub use element::{SectorElement, SectorConfig};
pub use sector_geojson::SectorParser;

/// tolerance to decide if a fix lies on a route axis
pub const EPSILON: f64 = 1e-10;

// GeoJSON property keys and values
pub const NAME_KEY: &str = "name";
pub const TYPE_KEY: &str = "type";
pub const SHAPE_KEY: &str = "shape";
pub const ORIGIN_KEY: &str = "origin";
pub const CHILDREN_KEY: &str = "children";
pub const CHILDREN_NAMES_KEY: &str = "names";
pub const LOWER_LIMIT_KEY: &str = "lower_limit";
pub const UPPER_LIMIT_KEY: &str = "upper_limit";
pub const LENGTH_NM_KEY: &str = "length_nm";
pub const AIRWAY_WIDTH_NM_KEY: &str = "airway_width_nm";
pub const OFFSET_NM_KEY: &str = "offset_nm";
pub const FIX_NAME_KEY: &str = "fixName";

pub const SECTOR_VALUE: &str = "SECTOR";
pub const SECTOR_VOLUME_VALUE: &str = "SECTOR_VOLUME";
pub const ROUTE_VALUE: &str = "ROUTE";
pub const FIX_VALUE: &str = "FIX";

/// stable (platform and run independent) short content hash we use to name derived features
pub fn content_hash (content: &str) -> String {
    let digest = Sha256::digest( content.as_bytes());
    digest.iter().take(8).map( |b| format!("{b:02x}")).collect()
}
