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
#![allow(unused,uncommon_codepoints,non_snake_case)]

/// this module provides geodesic support on the WGS84 ellipsoid surface
/// We use the [geo](https://docs.rs/geo/latest/geo/index.html) crate for the actual computation (which in turn uses
/// geographiclib for geodesics) and add a [new type](https://doc.rust-lang.org/rust-by-example/generics/new_types.html)
/// for geographic points so that we don't confuse them with points in the local (projected) plane.
/// Note that most functions here take (lat,lon) argument order to match the usual aviation notation, whereas
/// all points store (lon,lat) (x,y) order.

use std::fmt;
use serde::{Serialize,Deserialize};

use geo::{Bearing, Coord, Destination, Distance, Geodesic, Point};

use uom::si::f64::Length;
use uom::si::length::{meter, nautical_mile};

use crate::angle::{normalize_180, normalize_90};
use crate::round_to;

pub type GeoCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 in (lon,lat) order
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from = "LonLat", into = "LonLat")]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    /// note this does not normalize - use only for points that come out of geodetic computations
    pub fn from_point(p:Point) -> Self { GeoPoint(p) }

    pub fn lon (&self) -> f64 { self.0.x() }
    pub fn lat (&self) -> f64 { self.0.y() }

    pub fn point (&self) -> &Point { &self.0 }
    pub fn coord (&self) -> GeoCoord { self.0.0 }

    /// (lon,lat) tuple as used in GeoJSON coordinates
    pub fn lon_lat (&self) -> (f64,f64) { (self.0.x(), self.0.y()) }

    /// the same point with coordinates rounded to the given decimals
    pub fn rounded (&self, decimals: i32) -> Self {
        GeoPoint( Point::new( round_to(self.0.x(), decimals), round_to(self.0.y(), decimals)))
    }

    pub fn geodesic_distance (&self, other: &GeoPoint) -> Length {
        Length::new::<meter>( Geodesic.distance( self.0, other.0))
    }

    /// initial bearing in degrees towards other point
    pub fn bearing_to (&self, other: &GeoPoint) -> f64 {
        Geodesic.bearing( self.0, other.0)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(),self.0.y())
    }
}

// serde proxy - we accept "lon"/"longitude"/"x" and "lat"/"latitude"/"y" on input
#[derive(Serialize,Deserialize)]
struct LonLat {
    #[serde(alias = "longitude", alias = "x")]
    lon: f64,
    #[serde(alias = "latitude", alias = "y")]
    lat: f64,
}

impl From<LonLat> for GeoPoint {
    fn from (ll: LonLat) -> Self { GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat) }
}

impl From<GeoPoint> for LonLat {
    fn from (p: GeoPoint) -> Self { LonLat { lon: p.lon(), lat: p.lat() } }
}

/* #endregion GeoPoint */

/* #region geodesic functions ************************************************************************************/

fn geo_point (lat: f64, lon: f64) -> Point { Point::new( lon, lat) }

/// geodesic distance in meters between (lat1,lon1) and (lat2,lon2) on the WGS84 ellipsoid
pub fn distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Geodesic.distance( geo_point(lat1,lon1), geo_point(lat2,lon2))
}

/// the point at the given geodesic distance (in meters) from (lat1,lon1) towards (lat2,lon2).
/// Distances beyond the separation of the two points are clamped, i.e. we return the end point
pub fn waypoint_location (lat1: f64, lon1: f64, lat2: f64, lon2: f64, distance_m: f64) -> GeoPoint {
    let total = distance( lat1, lon1, lat2, lon2);
    if distance_m >= total {
        GeoPoint::from_lon_lat_degrees( lon2, lat2)
    } else {
        destination_toward( lat1, lon1, lat2, lon2, distance_m.max(0.0))
    }
}

/// the point at the given geodesic distance (in meters) from (lat1,lon1) along the initial bearing towards (lat2,lon2).
/// Other than [`waypoint_location`] this is not clamped, i.e. it continues past (lat2,lon2) for distances that exceed
/// the separation of both points
pub fn destination_toward (lat1: f64, lon1: f64, lat2: f64, lon2: f64, distance_m: f64) -> GeoPoint {
    let start = geo_point( lat1, lon1);
    if distance_m == 0.0 { return GeoPoint::from_point(start) }

    let bearing = Geodesic.bearing( start, geo_point( lat2, lon2));
    let p = Geodesic.destination( start, bearing, distance_m);
    GeoPoint::from_lon_lat_degrees( p.x(), p.y())
}

/// geodesic midpoint between (lat1,lon1) and (lat2,lon2)
pub fn midpoint (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeoPoint {
    let d = distance( lat1, lon1, lat2, lon2);
    waypoint_location( lat1, lon1, lat2, lon2, d / 2.0)
}

#[inline] pub fn nm_to_meters (nm: f64) -> f64 { Length::new::<nautical_mile>(nm).get::<meter>() }
#[inline] pub fn meters_to_nm (m: f64) -> f64 { Length::new::<meter>(m).get::<nautical_mile>() }

/* #endregion geodesic functions */
