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

//! GeoJSON sector documents. A document is a FeatureCollection with one SECTOR feature (name, shape, origin and
//! child references), one SECTOR_VOLUME feature (boundary polygon and vertical limits), one ROUTE feature per
//! route and one FIX feature per fix. Computed coordinates are rounded to [`FLOAT_PRECISION`] decimals so that
//! documents of rebuilt sectors are identical to the ones they were parsed from

use std::{fs, path::{Path,PathBuf}, str::FromStr};
use serde_json::{json, Value as JsonValue};
use geo::{LineString, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};

use aviary_common::{info, round_to, FLOAT_PRECISION};
use aviary_common::geo::GeoPoint;

use crate::*;
use crate::errors::{parse_error, lookup_error};

pub const GEOJSON_EXTENSION: &str = "geojson";

/* #region writer ***********************************************************************************************/

impl SectorElement {

    fn polygon_coords (&self) -> Vec<Vec<Vec<f64>>> {
        let ring: Vec<Vec<f64>> = self.polygon().exterior().coords()
            .map( |c| vec![ round_to( c.x, FLOAT_PRECISION), round_to( c.y, FLOAT_PRECISION)])
            .collect();
        vec![ring]
    }

    /// name of the SECTOR_VOLUME feature, which is derived from the boundary coordinates
    pub fn sector_volume_name (&self) -> String {
        content_hash( &format!("{:?}", self.polygon_coords()))
    }

    pub fn sector_feature (&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert( NAME_KEY.into(), json!( self.name()));
        properties.insert( TYPE_KEY.into(), json!( SECTOR_VALUE));
        properties.insert( SHAPE_KEY.into(), json!( self.sector_type().as_ref()));
        properties.insert( ORIGIN_KEY.into(), json!( [self.origin().lon(), self.origin().lat()]));
        properties.insert( CHILDREN_KEY.into(), json!({
            SECTOR_VOLUME_VALUE: { CHILDREN_NAMES_KEY: [ self.sector_volume_name() ] },
            ROUTE_VALUE: { CHILDREN_NAMES_KEY: self.route_names() }
        }));

        feature( None, properties)
    }

    pub fn sector_volume_feature (&self) -> Feature {
        let params = self.shape().params();

        let mut properties = JsonObject::new();
        properties.insert( NAME_KEY.into(), json!( self.sector_volume_name()));
        properties.insert( TYPE_KEY.into(), json!( SECTOR_VOLUME_VALUE));
        properties.insert( LOWER_LIMIT_KEY.into(), json!( self.lower_limit()));
        properties.insert( UPPER_LIMIT_KEY.into(), json!( self.upper_limit()));
        properties.insert( LENGTH_NM_KEY.into(), json!( params.length_nm));
        properties.insert( AIRWAY_WIDTH_NM_KEY.into(), json!( params.airway_width_nm));
        properties.insert( OFFSET_NM_KEY.into(), json!( params.offset_nm));
        properties.insert( CHILDREN_KEY.into(), json!({}));

        feature( Some( Geometry::new( Value::Polygon( self.polygon_coords()))), properties)
    }

    pub fn fix_features (&self) -> Vec<Feature> {
        self.fixes().iter().map( |(name,p)| {
            let mut properties = JsonObject::new();
            properties.insert( NAME_KEY.into(), json!( name));
            properties.insert( TYPE_KEY.into(), json!( FIX_VALUE));

            let coords = vec![ round_to( p.lon(), FLOAT_PRECISION), round_to( p.lat(), FLOAT_PRECISION)];
            feature( Some( Geometry::new( Value::Point( coords))), properties)
        }).collect()
    }

    pub fn to_geojson (&self) -> FeatureCollection {
        let mut features = vec![ self.sector_feature(), self.sector_volume_feature() ];
        features.extend( self.routes().iter().map( |r| r.geojson_feature()));
        features.extend( self.fix_features());

        FeatureCollection { bbox: None, features, foreign_members: None }
    }

    pub fn to_geojson_string (&self) -> Result<String> {
        Ok( serde_json::to_string_pretty( &self.to_geojson())? )
    }

    /// write document to `dir/filename`, adding a ".geojson" extension if missing. Returns the written path
    pub fn write_geojson (&self, dir: impl AsRef<Path>, filename: &str) -> Result<PathBuf> {
        let mut path = dir.as_ref().join( filename);
        if !path.extension().is_some_and( |ext| ext.eq_ignore_ascii_case( GEOJSON_EXTENSION)) {
            path = dir.as_ref().join( format!("{filename}.{GEOJSON_EXTENSION}"));
        }

        fs::write( &path, self.to_geojson_string()?)?;
        info!("wrote sector {} to {path:?}", self.name());
        Ok(path)
    }
}

fn feature (geometry: Option<Geometry>, properties: JsonObject) -> Feature {
    Feature { bbox: None, geometry, id: None, properties: Some(properties), foreign_members: None }
}

/// default file name for sector documents: `<prefix>-<name>-<type>-<lower>-<upper>`
pub fn sector_filename (prefix: &str, sector: &SectorElement) -> String {
    format!("{}-{}-{}-{}-{}", prefix, sector.name(), sector.sector_type(), sector.lower_limit(), sector.upper_limit())
}

/* #endregion writer */

/* #region parser ***********************************************************************************************/

/// read access to the elements of a GeoJSON sector document, and reconstruction of the [`SectorElement`] it describes
#[derive(Debug,Clone)]
pub struct SectorParser {
    collection: FeatureCollection,
}

impl SectorParser {
    pub fn from_str (s: &str) -> Result<Self> {
        match s.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => Ok( SectorParser { collection } ),
            _ => Err( parse_error!("sector document is not a FeatureCollection"))
        }
    }

    pub fn from_file (path: impl AsRef<Path>) -> Result<Self> {
        let s = fs::read_to_string( path)?;
        Self::from_str( &s)
    }

    /// features whose `properties.type` matches the given value, in document order
    pub fn features_of_type (&self, type_value: &str) -> Vec<&Feature> {
        self.collection.features.iter()
            .filter( |f| f.property( TYPE_KEY).and_then( |v| v.as_str()) == Some(type_value))
            .collect()
    }

    fn single_feature_of_type (&self, type_value: &str) -> Result<&Feature> {
        let features = self.features_of_type( type_value);
        if features.len() != 1 {
            return Err( lookup_error!( format!("single {type_value} feature (found {})", features.len()), "sector document"))
        }
        Ok( features[0] )
    }

    fn names_of_type (&self, type_value: &str) -> Result<Vec<String>> {
        self.features_of_type( type_value).iter().map( |f| str_property( f, NAME_KEY).map( |s| s.to_string())).collect()
    }

    pub fn fix_names (&self) -> Result<Vec<String>> { self.names_of_type( FIX_VALUE) }

    pub fn route_names (&self) -> Result<Vec<String>> { self.names_of_type( ROUTE_VALUE) }

    /// the boundary polygon (geographic). There has to be exactly one polygon in the document
    pub fn sector_polygon (&self) -> Result<Polygon> {
        let polygons: Vec<&Vec<Vec<Vec<f64>>>> = self.collection.features.iter()
            .filter_map( |f| f.geometry.as_ref())
            .filter_map( |g| if let Value::Polygon(rings) = &g.value { Some(rings) } else { None })
            .collect();

        if polygons.len() != 1 {
            return Err( lookup_error!( format!("single polygon (found {})", polygons.len()), "sector document"))
        }

        let exterior = polygons[0].first().ok_or_else( || parse_error!("polygon without exterior ring"))?;
        let coords: Vec<(f64,f64)> = exterior.iter()
            .map( |c| if c.len() >= 2 { Ok( (c[0],c[1]) ) } else { Err( parse_error!("invalid polygon position {c:?}")) })
            .collect::<Result<_>>()?;

        Ok( Polygon::new( LineString::from(coords), vec![]) )
    }

    pub fn sector_name (&self) -> Result<String> {
        Ok( str_property( self.single_feature_of_type( SECTOR_VALUE)?, NAME_KEY)?.to_string() )
    }

    pub fn sector_type (&self) -> Result<SectorType> {
        let s = str_property( self.single_feature_of_type( SECTOR_VALUE)?, SHAPE_KEY)?;
        SectorType::from_str( s).map_err( |_| parse_error!("unknown sector type {s}"))
    }

    pub fn sector_origin (&self) -> Result<GeoPoint> {
        let f = self.single_feature_of_type( SECTOR_VALUE)?;
        let origin = property( f, ORIGIN_KEY)?.as_array().ok_or_else( || parse_error!("origin is not an array"))?;
        match origin.as_slice() {
            [lon,lat] => {
                match (lon.as_f64(), lat.as_f64()) {
                    (Some(lon),Some(lat)) => Ok( GeoPoint::from_lon_lat_degrees( lon, lat) ),
                    _ => Err( parse_error!("non-numeric origin {origin:?}"))
                }
            }
            _ => Err( parse_error!("origin has to be a [lon,lat] pair"))
        }
    }

    fn volume_f64 (&self, key: &str) -> Result<f64> {
        f64_property( self.single_feature_of_type( SECTOR_VOLUME_VALUE)?, key)
    }

    fn volume_u32 (&self, key: &str) -> Result<u32> {
        let f = self.single_feature_of_type( SECTOR_VOLUME_VALUE)?;
        property( f, key)?.as_u64()
            .and_then( |v| u32::try_from(v).ok())
            .ok_or_else( || parse_error!("{key} is not a flight level"))
    }

    pub fn lower_limit (&self) -> Result<u32> { self.volume_u32( LOWER_LIMIT_KEY) }
    pub fn upper_limit (&self) -> Result<u32> { self.volume_u32( UPPER_LIMIT_KEY) }

    pub fn length_nm (&self) -> Result<f64> { self.volume_f64( LENGTH_NM_KEY) }
    pub fn airway_width_nm (&self) -> Result<f64> { self.volume_f64( AIRWAY_WIDTH_NM_KEY) }
    pub fn offset_nm (&self) -> Result<f64> { self.volume_f64( OFFSET_NM_KEY) }

    pub fn shape_params (&self) -> Result<ShapeParams> {
        Ok( ShapeParams {
            length_nm: self.length_nm()?,
            airway_width_nm: self.airway_width_nm()?,
            offset_nm: self.offset_nm()?
        })
    }

    /// rebuild the sector element described by this document
    pub fn sector_element (&self) -> Result<SectorElement> {
        let shape = SectorShape::new( self.sector_type()?, self.shape_params()?, &self.fix_names()?)?;
        SectorElement::new( self.sector_name()?, self.sector_origin()?, shape, self.lower_limit()?, self.upper_limit()?)
    }
}

fn property<'a> (f: &'a Feature, key: &str) -> Result<&'a JsonValue> {
    f.property( key).ok_or_else( || lookup_error!( format!("property {key}"), "feature"))
}

fn str_property<'a> (f: &'a Feature, key: &str) -> Result<&'a str> {
    property( f, key)?.as_str().ok_or_else( || parse_error!("property {key} is not a string"))
}

fn f64_property (f: &Feature, key: &str) -> Result<f64> {
    property( f, key)?.as_f64().ok_or_else( || parse_error!("property {key} is not a number"))
}

/* #endregion parser */
