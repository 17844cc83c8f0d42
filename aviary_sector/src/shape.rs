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

//! canonical I, X and Y sector shapes in the local plane (nautical miles, centered at the origin, y pointing north).
//! Shapes are immutable values: polygon, fixes and routes are computed once by the constructor

use serde::{Serialize,Deserialize};
use geo::{Centroid, LineString, Point, Polygon, Rotate};
use indexmap::IndexMap;
use itertools::Itertools;
use strum::{Display, EnumString, AsRefStr};

use aviary_common::debug;
use crate::route::{Fix, Route};
use crate::errors::{config_error, Result};
use crate::EPSILON;

pub const LENGTH_NM: f64 = 50.0;
pub const AIRWAY_WIDTH_NM: f64 = 10.0;
pub const OFFSET_NM: f64 = 10.0;

//   SPIRT
//   AIR
//   WATER
//   EARTH
//   FIYRE
pub const I_FIX_NAMES: [&str;5] = ["spirt", "air", "water", "earth", "fiyre"];

//                  SIN
//                 GATES
// SIREN  WITCH    ABYSS   DEMON  SATAN
//                 HAUNT
//                 LIMBO
pub const X_FIX_NAMES: [&str;9] = ["sin", "gates", "siren", "witch", "abyss", "haunt", "limbo", "demon", "satan"];

// GHOST            GOD
//     BISHP   CANON
//          TRI
//          SON
//         DEACN
pub const Y_FIX_NAMES: [&str;7] = ["ghost", "bishp", "god", "canon", "tri", "son", "deacn"];

/// fix name -> point, in construction order
pub type Fixes = IndexMap<String,Point>;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumString,AsRefStr)]
pub enum SectorType { I, X, Y }

impl SectorType {
    pub fn default_fix_names (&self) -> &'static [&'static str] {
        match self {
            SectorType::I => &I_FIX_NAMES,
            SectorType::X => &X_FIX_NAMES,
            SectorType::Y => &Y_FIX_NAMES,
        }
    }
}

/// the scalar parameters that define a shape
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    pub length_nm: f64,
    pub airway_width_nm: f64,
    /// distance of exterior fixes from the shape boundary
    pub offset_nm: f64,
}

impl Default for ShapeParams {
    fn default()->Self {
        ShapeParams { length_nm: LENGTH_NM, airway_width_nm: AIRWAY_WIDTH_NM, offset_nm: OFFSET_NM }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct SectorShape {
    sector_type: SectorType,
    params: ShapeParams,
    polygon: Polygon,
    fixes: Fixes,
    routes: Vec<Route>,
}

impl SectorShape {

    pub fn new<S: AsRef<str>> (sector_type: SectorType, params: ShapeParams, fix_names: &[S]) -> Result<Self> {
        match sector_type {
            SectorType::I => Self::i_shape( params, fix_names),
            SectorType::X => Self::x_shape( params, fix_names),
            SectorType::Y => Self::y_shape( params, fix_names),
        }
    }

    pub fn with_default_fix_names (sector_type: SectorType, params: ShapeParams) -> Result<Self> {
        Self::new( sector_type, params, sector_type.default_fix_names())
    }

    /// a rectangle of airway width x length with five fixes along the vertical centerline:
    /// top exterior, top, middle, bottom, bottom exterior
    pub fn i_shape<S: AsRef<str>> (params: ShapeParams, fix_names: &[S]) -> Result<Self> {
        check_params( &params, params.length_nm)?;
        let a = params.airway_width_nm / 2.0;
        let h = params.length_nm / 2.0;
        let o = params.offset_nm;

        let polygon = polygon_from( &[(-a,-h), (a,-h), (a,h), (-a,h)]);
        let points = vec![ pt(0.0, h+o), pt(0.0, h), pt(0.0, 0.0), pt(0.0, -h), pt(0.0, -h-o) ];
        let fixes = fixes_from( fix_names, points)?;

        let ascending = sorted_by_y( fixes.iter());
        let routes = vec![ ascending.clone(), reversed(ascending) ];

        Ok( Self::build( SectorType::I, params, polygon, fixes, routes) )
    }

    /// the union of an I shape and the same I shape rotated by 90deg, with nine fixes:
    /// top exterior, top, left exterior, left, middle, bottom, bottom exterior, right, right exterior
    pub fn x_shape<S: AsRef<str>> (params: ShapeParams, fix_names: &[S]) -> Result<Self> {
        check_params( &params, params.length_nm)?;
        let a = params.airway_width_nm / 2.0;
        let h = params.length_nm / 2.0;
        let o = params.offset_nm;

        let polygon = polygon_from( &[
            (-a,-h), (a,-h), (a,-a), (h,-a), (h,a), (a,a),
            (a,h), (-a,h), (-a,a), (-h,a), (-h,-a), (-a,-a)
        ]);
        let points = vec![
            pt(0.0, h+o), pt(0.0, h),
            pt(-h-o, 0.0), pt(-h, 0.0),
            pt(0.0, 0.0),
            pt(0.0, -h), pt(0.0, -h-o),
            pt(h, 0.0), pt(h+o, 0.0)
        ];
        let fixes = fixes_from( fix_names, points)?;

        let ascending_y = sorted_by_y( fixes.iter().filter( |(_,p)| p.x().abs() < EPSILON));
        let ascending_x = sorted_by_x( fixes.iter().filter( |(_,p)| p.y().abs() < EPSILON));
        let routes = vec![ ascending_y.clone(), reversed(ascending_y), ascending_x.clone(), reversed(ascending_x) ];

        Ok( Self::build( SectorType::X, params, polygon, fixes, routes) )
    }

    /// three I shapes of half length joined at a common end point, rotated by 0, +120 and -120deg. The branch
    /// point is at the origin, which by symmetry is also the centroid. Seven fixes:
    /// left exterior, left, right exterior, right, middle, bottom, bottom exterior
    pub fn y_shape<S: AsRef<str>> (params: ShapeParams, fix_names: &[S]) -> Result<Self> {
        check_params( &params, params.length_nm / 2.0)?;
        let a = params.airway_width_nm / 2.0;
        let h = params.length_nm / 2.0;   // arm length
        let o = params.offset_nm;
        let c = a / 3f64.sqrt();          // where the trunk edge meets the adjacent arm edge

        let center = pt(0.0, 0.0);
        let trunk = [pt(-a,-h), pt(a,-h), pt(a,-c)];
        let mut ring: Vec<Point> = Vec::with_capacity(9);
        for angle in [0.0, 120.0, 240.0] {
            ring.extend( trunk.iter().map( |p| p.rotate_around_point( angle, center)));
        }
        let polygon = Polygon::new( LineString::from(ring), vec![]);

        let bottom = pt(0.0, -h);
        let bottom_outer = pt(0.0, -h-o);
        let points = vec![
            bottom_outer.rotate_around_point( -120.0, center),
            bottom.rotate_around_point( -120.0, center),
            bottom_outer.rotate_around_point( 120.0, center),
            bottom.rotate_around_point( 120.0, center),
            center,
            bottom,
            bottom_outer
        ];
        let fixes = fixes_from( fix_names, points)?;

        // the left branch route includes the trunk, the right one everything that is not on the left branch
        let vertical: Vec<&String> = fixes.iter().filter( |(_,p)| p.x().abs() < EPSILON).map( |(n,_)| n).collect();
        let left_only: Vec<&String> = fixes.iter()
            .filter( |(n,p)| p.x() < 0.0 && !vertical.contains(n))
            .map( |(n,_)| n)
            .collect();

        let left = sorted_by_y( fixes.iter().filter( |(n,_)| vertical.contains(n) || left_only.contains(n)));
        let right = sorted_by_y( fixes.iter().filter( |(n,_)| !left_only.contains(n)));
        let routes = vec![ left.clone(), reversed(left), right.clone(), reversed(right) ];

        Ok( Self::build( SectorType::Y, params, polygon, fixes, routes) )
    }

    fn build (sector_type: SectorType, params: ShapeParams, polygon: Polygon, fixes: Fixes, routes: Vec<Route>) -> Self {
        debug!("created {} shape with {} fixes and {} routes", sector_type, fixes.len(), routes.len());
        SectorShape { sector_type, params, polygon, fixes, routes }
    }

    pub fn sector_type (&self) -> SectorType { self.sector_type }

    pub fn params (&self) -> &ShapeParams { &self.params }

    pub fn polygon (&self) -> &Polygon { &self.polygon }

    pub fn fixes (&self) -> &Fixes { &self.fixes }

    pub fn fix_names (&self) -> Vec<String> { self.fixes.keys().cloned().collect() }

    /// detached copies of the routes (so that callers can reverse or truncate them)
    pub fn routes (&self) -> Vec<Route> { self.routes.clone() }

    pub fn route_names (&self) -> Vec<String> {
        self.routes.iter().map( |r| r.name()).collect()
    }

    pub fn centroid (&self) -> Point {
        self.polygon.centroid().unwrap_or( pt(0.0, 0.0))
    }
}

#[inline]
fn pt (x: f64, y: f64) -> Point { Point::new(x,y) }

fn polygon_from (vertices: &[(f64,f64)]) -> Polygon {
    Polygon::new( LineString::from( vertices.to_vec()), vec![])
}

fn check_params (params: &ShapeParams, max_width: f64) -> Result<()> {
    let ShapeParams { length_nm, airway_width_nm, offset_nm } = *params;

    if !(length_nm > 0.0) || !(airway_width_nm > 0.0) || !(offset_nm >= 0.0) {
        return Err( config_error!("invalid shape dimensions {params:?}"))
    }
    if airway_width_nm > max_width {
        return Err( config_error!("airway width {airway_width_nm} must not exceed {max_width}"))
    }
    Ok(())
}

fn fixes_from<S: AsRef<str>> (names: &[S], points: Vec<Point>) -> Result<Fixes> {
    if names.len() != points.len() {
        return Err( config_error!("fix_names must have length {}, got {}", points.len(), names.len()))
    }

    let fixes: Fixes = names.iter().map( |n| n.as_ref().to_uppercase()).zip( points.into_iter()).collect();
    if fixes.len() != names.len() {
        return Err( config_error!("fix names are not unique"))
    }
    Ok(fixes)
}

fn sorted_by_y<'a> (it: impl Iterator<Item=(&'a String,&'a Point)>) -> Route {
    Route::new( it.sorted_by( |a,b| a.1.y().total_cmp( &b.1.y())).map( |(n,p)| Fix::new( n, *p)).collect())
}

fn sorted_by_x<'a> (it: impl Iterator<Item=(&'a String,&'a Point)>) -> Route {
    Route::new( it.sorted_by( |a,b| a.1.x().total_cmp( &b.1.x())).map( |(n,p)| Fix::new( n, *p)).collect())
}

fn reversed (mut route: Route) -> Route {
    route.reverse();
    route
}
