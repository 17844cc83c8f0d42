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

/// oblique stereographic projection between geographic (lon,lat) degrees and a local plane that is centered at
/// a configurable origin, with x pointing east and y pointing north in nautical miles.
/// We use the spherical form (see Snyder, "Map Projections - A Working Manual", p.157ff) on the Gaussian mean
/// radius of curvature at the origin latitude, which gives a conformal, locally true-to-scale mapping with a
/// closed form inverse. Sector extents are in the order of 100nm so the difference to the ellipsoidal
/// form is well below what matters for fix placement.

use ::geo::{Coord, LineString, MapCoords, Point, Polygon};

use crate::{sin, cos, asin, atan, atan2, sqrt, pow2, deg, rad};
use crate::angle::normalize_180;
use crate::geo::GeoPoint;
use crate::geo_constants::{EQATORIAL_EARTH_RADIUS, E_EARTH_SQUARED, METERS_PER_NM};

#[derive(Debug,Clone,PartialEq)]
pub struct StereographicProjection {
    origin: GeoPoint,
    φ0: f64,       // origin latitude in radians
    λ0: f64,       // origin longitude in radians
    sin_φ0: f64,
    cos_φ0: f64,
    R2: f64,       // 2 * radius in nm
}

impl StereographicProjection {
    pub fn new (origin: GeoPoint) -> Self {
        let φ0 = rad(origin.lat());
        let λ0 = rad(origin.lon());
        let sin_φ0 = sin(φ0);
        let cos_φ0 = cos(φ0);

        // Gaussian mean radius sqrt(M*N) = a*sqrt(1-e²) / (1 - e²sin²φ)
        let R = EQATORIAL_EARTH_RADIUS * sqrt(1.0 - E_EARTH_SQUARED) / (1.0 - E_EARTH_SQUARED * pow2(sin_φ0));
        let R2 = 2.0 * R / METERS_PER_NM;

        StereographicProjection { origin, φ0, λ0, sin_φ0, cos_φ0, R2 }
    }

    pub fn origin (&self) -> &GeoPoint { &self.origin }

    /// geographic (lon,lat) degrees to local (x,y) nautical miles
    pub fn project_coord (&self, c: Coord) -> Coord {
        let φ = rad(c.y);
        let dλ = rad(c.x) - self.λ0;
        let sin_φ = sin(φ);
        let cos_φ = cos(φ);
        let cos_dλ = cos(dλ);

        let k = self.R2 / (1.0 + self.sin_φ0*sin_φ + self.cos_φ0*cos_φ*cos_dλ);
        let x = k * cos_φ * sin(dλ);
        let y = k * (self.cos_φ0*sin_φ - self.sin_φ0*cos_φ*cos_dλ);

        Coord { x, y }
    }

    /// local (x,y) nautical miles to geographic (lon,lat) degrees
    pub fn inverse_coord (&self, c: Coord) -> Coord {
        let Coord { x, y } = c;
        let ρ = sqrt( x*x + y*y);
        if ρ == 0.0 {
            return Coord { x: deg(self.λ0), y: deg(self.φ0) }
        }

        let γ = 2.0 * atan( ρ / self.R2);  // angular distance from origin
        let sin_γ = sin(γ);
        let cos_γ = cos(γ);

        let φ = asin( cos_γ*self.sin_φ0 + y*sin_γ*self.cos_φ0/ρ);
        let λ = self.λ0 + atan2( x*sin_γ, ρ*self.cos_φ0*cos_γ - y*self.sin_φ0*sin_γ);

        Coord { x: normalize_180( deg(λ)), y: deg(φ) }
    }

    pub fn project (&self, p: &GeoPoint) -> Point {
        Point( self.project_coord( p.coord()))
    }

    pub fn inverse (&self, p: &Point) -> GeoPoint {
        let c = self.inverse_coord( p.0);
        GeoPoint::from_lon_lat_degrees( c.x, c.y)
    }

    pub fn inverse_line_string (&self, ls: &LineString) -> LineString {
        ls.map_coords( |c| self.inverse_coord(c))
    }

    pub fn inverse_polygon (&self, poly: &Polygon) -> Polygon {
        poly.map_coords( |c| self.inverse_coord(c))
    }

    pub fn project_polygon (&self, poly: &Polygon) -> Polygon {
        poly.map_coords( |c| self.project_coord(c))
    }
}
