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

use geo::{Contains, Point, Polygon};
use indexmap::IndexMap;
use serde::{Serialize,Deserialize};

use aviary_common::debug;
use aviary_common::geo::GeoPoint;
use aviary_common::projection::StereographicProjection;

use crate::errors::{config_error, lookup_error, Result};
use crate::route::Route;
use crate::shape::{SectorShape, SectorType, ShapeParams};

/// a sector shape placed at a geographic origin, with lower and upper flight level limits.
/// All geometry is stored in the local plane of the shape and mapped to geographic (lon,lat) coordinates on request
#[derive(Debug,Clone)]
pub struct SectorElement {
    name: String,
    origin: GeoPoint,
    shape: SectorShape,
    lower_limit: u32,
    upper_limit: u32,
    projection: StereographicProjection,
}

impl SectorElement {
    pub fn new (name: impl ToString, origin: GeoPoint, shape: SectorShape, lower_limit: u32, upper_limit: u32) -> Result<Self> {
        if lower_limit >= upper_limit {
            return Err( config_error!("lower limit {lower_limit} must be below upper limit {upper_limit}"))
        }

        let name = name.to_string();
        let projection = StereographicProjection::new( origin);
        debug!("sector element {name} ({}) at {origin}, FL{lower_limit}-{upper_limit}", shape.sector_type());

        Ok( SectorElement { name, origin, shape, lower_limit, upper_limit, projection } )
    }

    pub fn name (&self) -> &str { &self.name }
    pub fn origin (&self) -> &GeoPoint { &self.origin }
    pub fn shape (&self) -> &SectorShape { &self.shape }
    pub fn sector_type (&self) -> SectorType { self.shape.sector_type() }
    pub fn lower_limit (&self) -> u32 { self.lower_limit }
    pub fn upper_limit (&self) -> u32 { self.upper_limit }
    pub fn projection (&self) -> &StereographicProjection { &self.projection }

    /// move the sector. This is the only mutation and rebuilds the projection
    pub fn set_origin (&mut self, origin: GeoPoint) {
        self.origin = origin;
        self.projection = StereographicProjection::new( origin);
    }

    fn to_geo (&self, p: &Point) -> GeoPoint {
        self.projection.inverse( p)
    }

    /// geographic location of the polygon centroid
    pub fn centre_point (&self) -> GeoPoint {
        self.to_geo( &self.shape.centroid())
    }

    pub fn fix_location (&self, fix_name: &str) -> Result<GeoPoint> {
        let key = fix_name.to_uppercase();
        self.shape.fixes().get( &key)
            .map( |p| self.to_geo(p))
            .ok_or_else( || lookup_error!( format!("fix {key}"), format!("sector {}", self.name)))
    }

    /// geographic fix locations in shape order
    pub fn fixes (&self) -> IndexMap<String,GeoPoint> {
        self.shape.fixes().iter().map( |(n,p)| (n.clone(), self.to_geo(p))).collect()
    }

    pub fn fix_names (&self) -> Vec<String> { self.shape.fix_names() }

    /// geographic boundary polygon
    pub fn polygon (&self) -> Polygon {
        self.projection.inverse_polygon( self.shape.polygon())
    }

    /// detached copies of all routes in geographic coordinates
    pub fn routes (&self) -> Vec<Route> {
        self.shape.routes().iter().map( |r| r.map_points( |p| *self.to_geo(p).point())).collect()
    }

    pub fn route_names (&self) -> Vec<String> { self.shape.route_names() }

    /// is (lon,lat) inside the sector boundary and flight_level within [lower_limit,upper_limit]
    pub fn contains (&self, lon: f64, lat: f64, flight_level: f64) -> bool {
        if flight_level < self.lower_limit as f64 || flight_level > self.upper_limit as f64 {
            return false
        }
        let p = self.projection.project( &GeoPoint::from_lon_lat_degrees( lon, lat));
        self.shape.polygon().contains( &p)
    }
}

/// serializable definition of a [`SectorElement`], e.g. loaded from a RON config file
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct SectorConfig {
    pub name: String,
    pub sector_type: SectorType,
    pub origin: GeoPoint,
    pub lower_limit: u32,
    pub upper_limit: u32,

    #[serde(default)]
    pub params: ShapeParams,

    /// if not set we use the default names of the sector type
    #[serde(default)]
    pub fix_names: Option<Vec<String>>,
}

impl SectorConfig {
    pub fn sector_element (&self) -> Result<SectorElement> {
        let shape = match &self.fix_names {
            Some(names) => SectorShape::new( self.sector_type, self.params, names.as_slice())?,
            None => SectorShape::with_default_fix_names( self.sector_type, self.params)?
        };
        SectorElement::new( &self.name, self.origin, shape, self.lower_limit, self.upper_limit)
    }
}
