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

use serde::{Serialize,Deserialize};
use serde_json::json;
use geo::{LineString, Point};
use geojson::{Feature, Geometry, JsonObject, Value};

use aviary_common::{round_to, FLOAT_PRECISION};
use aviary_common::geo::{distance, GeoPoint};

use crate::{content_hash, NAME_KEY, TYPE_KEY, CHILDREN_KEY, CHILDREN_NAMES_KEY, ROUTE_VALUE, FIX_VALUE};

/// a named route waypoint. Points are either in the local sector plane (nm) or geographic (lon,lat degrees),
/// depending on where the owning route came from
#[derive(Debug,Clone,PartialEq)]
pub struct Fix {
    pub name: String,
    pub point: Point,
}

impl Fix {
    pub fn new (name: impl ToString, point: Point) -> Self {
        Fix { name: name.to_string(), point }
    }

    fn lat (&self) -> f64 { self.point.y() }
    fn lon (&self) -> f64 { self.point.x() }
}

/// serialized form of a route fix as it appears in scenario documents
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteElement {
    pub fix_name: String,
    pub geometry: Geometry,
}

impl RouteElement {
    /// (lon,lat) of the fix, if the geometry is a point
    pub fn lon_lat (&self) -> Option<(f64,f64)> {
        match &self.geometry.value {
            Value::Point(c) if c.len() >= 2 => Some( (c[0], c[1]) ),
            _ => None
        }
    }
}

/// an ordered list of fixes through a sector.
/// Routes are only modified through [`Route::reverse`] and [`Route::truncate`]. Operations that require distances
/// ([`Route::truncate`], [`Route::next_waypoint`]) assume geographic fix points
#[derive(Debug,Clone,PartialEq)]
pub struct Route {
    fixes: Vec<Fix>,
}

impl Route {
    pub fn new (fixes: Vec<Fix>) -> Self {
        Route { fixes }
    }

    /// detached copy
    pub fn copy (&self) -> Self { self.clone() }

    pub fn reverse (&mut self) {
        self.fixes.reverse();
    }

    pub fn len (&self) -> usize { self.fixes.len() }

    pub fn is_empty (&self) -> bool { self.fixes.is_empty() }

    pub fn fixes (&self) -> &[Fix] { &self.fixes }

    pub fn fix_names (&self) -> Vec<String> {
        self.fixes.iter().map( |f| f.name.clone()).collect()
    }

    pub fn fix_points (&self) -> Vec<Point> {
        self.fixes.iter().map( |f| f.point).collect()
    }

    pub fn first_fix (&self) -> Option<&Fix> { self.fixes.first() }

    pub fn last_fix (&self) -> Option<&Fix> { self.fixes.last() }

    /// same route with every point mapped by `f`
    pub fn map_points<F> (&self, f: F) -> Route where F: Fn(&Point)->Point {
        Route { fixes: self.fixes.iter().map( |fix| Fix::new( &fix.name, f(&fix.point))).collect() }
    }

    /// route name derived from the ordered fix names
    pub fn name (&self) -> String {
        content_hash( &self.fix_names().join(","))
    }

    /// remove all fixes the aircraft has already passed, given its current position.
    /// This is a distance-to-destination test: we keep the fixes that are closer to the final fix than
    /// the current position. If the current position is closer to the final fix than the penultimate one
    /// and further away from the penultimate fix than the final fix is, the whole route has been flown
    pub fn truncate (&mut self, lat: f64, lon: f64) {
        let n = self.fixes.len();
        if n == 0 { return }

        let last = &self.fixes[n-1];
        let (final_lat, final_lon) = (last.lat(), last.lon());

        if n > 1 {
            let penultimate = &self.fixes[n-2];
            let d_final = distance( lat, lon, final_lat, final_lon);
            let d_penultimate = distance( lat, lon, penultimate.lat(), penultimate.lon());
            let d_between = distance( final_lat, final_lon, penultimate.lat(), penultimate.lon());

            if d_final < d_penultimate && d_penultimate > d_between {
                self.fixes.clear();
                return
            }
        }

        let d_position = distance( final_lat, final_lon, lat, lon);
        self.fixes.retain( |f| distance( final_lat, final_lon, f.lat(), f.lon()) < d_position);
    }

    /// name of the fix an aircraft at the given position is heading to, or None if it passed all fixes
    pub fn next_waypoint (&self, lat: f64, lon: f64) -> Option<String> {
        let mut truncated = self.copy();
        truncated.truncate( lat, lon);
        truncated.first_fix().map( |f| f.name.clone())
    }

    pub fn serialize (&self) -> Vec<RouteElement> {
        self.fixes.iter().map( |f| {
            RouteElement {
                fix_name: f.name.clone(),
                geometry: Geometry::new( Value::Point( vec![f.point.x(), f.point.y()]))
            }
        }).collect()
    }

    /// GeoJSON ROUTE feature (LineString geometry with rounded coordinates)
    pub fn geojson_feature (&self) -> Feature {
        let coords: Vec<Vec<f64>> = self.fixes.iter().map( |f| {
            vec![ round_to( f.point.x(), FLOAT_PRECISION), round_to( f.point.y(), FLOAT_PRECISION)]
        }).collect();

        let mut properties = JsonObject::new();
        properties.insert( NAME_KEY.into(), json!( self.name()));
        properties.insert( TYPE_KEY.into(), json!( ROUTE_VALUE));
        properties.insert( CHILDREN_KEY.into(), json!({ FIX_VALUE: { CHILDREN_NAMES_KEY: self.fix_names() } }));

        Feature {
            bbox: None,
            geometry: Some( Geometry::new( Value::LineString(coords))),
            id: None,
            properties: Some(properties),
            foreign_members: None
        }
    }
}
