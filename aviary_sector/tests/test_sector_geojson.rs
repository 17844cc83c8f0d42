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

use aviary_common::geo::GeoPoint;
use aviary_sector::*;
use aviary_sector::sector_geojson::sector_filename;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn element (sector_type: SectorType) -> SectorElement {
    let params = ShapeParams { length_nm: 60.0, airway_width_nm: 12.5, offset_nm: 7.0 };
    let shape = SectorShape::with_default_fix_names( sector_type, params).unwrap();
    SectorElement::new( "HELL", GeoPoint::from_lon_lat_degrees( -0.1275, 51.5), shape, 140, 400).unwrap()
}

#[test]
fn test_geojson_roundtrip() {
    for t in [SectorType::I, SectorType::X, SectorType::Y] {
        println!("--- testing {t} sector geojson roundtrip");
        let sector = element(t);
        let s = sector.to_geojson_string().unwrap();

        let parser = SectorParser::from_str( &s).unwrap();
        let sector1 = parser.sector_element().unwrap();
        let s1 = sector1.to_geojson_string().unwrap();

        assert_eq!( s, s1);
        assert_eq!( sector1.name(), "HELL");
        assert_eq!( sector1.sector_type(), t);
        assert_eq!( sector1.lower_limit(), 140);
        assert_eq!( sector1.upper_limit(), 400);
        assert_eq!( sector1.shape().params(), sector.shape().params());
        assert_eq!( sector1.fix_names(), sector.fix_names());
    }
}

#[test]
fn test_geojson_roundtrip_random_origins() {
    println!("--- testing sector geojson roundtrip for random origins");
    let mut rng = ChaCha8Rng::seed_from_u64( 42);
    let params = ShapeParams::default();
    let mut n = 0;

    for i in 0..300 {
        let lon: f64 = rng.random_range( -179.0..179.0);
        let lat: f64 = rng.random_range( -70.0..70.0);

        for t in [SectorType::I, SectorType::X, SectorType::Y] {
            let shape = SectorShape::with_default_fix_names( t, params.clone()).unwrap();
            let sector = SectorElement::new( format!("S{i}"), GeoPoint::from_lon_lat_degrees( lon, lat), shape, 100, 400).unwrap();
            let s = sector.to_geojson_string().unwrap();

            let sector1 = SectorParser::from_str( &s).unwrap().sector_element().unwrap();
            assert_eq!( sector1.origin(), sector.origin(), "origin changed for lon={lon} lat={lat}");
            assert_eq!( sector1.to_geojson_string().unwrap(), s, "document changed for {t} sector at lon={lon} lat={lat}");
            n += 1;
        }
    }
    println!("{n} documents round tripped");
}

#[test]
fn test_document_structure() {
    let sector = element( SectorType::X);
    let fc = sector.to_geojson();
    println!("{}", serde_json::to_string_pretty(&fc).unwrap());

    // SECTOR, SECTOR_VOLUME, 4 routes, 9 fixes
    assert_eq!( fc.features.len(), 15);

    let parser = SectorParser::from_str( &sector.to_geojson_string().unwrap()).unwrap();
    assert_eq!( parser.features_of_type( SECTOR_VALUE).len(), 1);
    assert_eq!( parser.features_of_type( SECTOR_VOLUME_VALUE).len(), 1);
    assert_eq!( parser.features_of_type( ROUTE_VALUE).len(), 4);
    assert_eq!( parser.fix_names().unwrap(), sector.fix_names());
    assert_eq!( parser.route_names().unwrap(), sector.route_names());
    assert_eq!( parser.sector_origin().unwrap(), *sector.origin());

    let poly = parser.sector_polygon().unwrap();
    assert_eq!( poly.exterior().0.len(), 13); // closed ring

    // sector children reference the volume and routes
    let sectors = parser.features_of_type( SECTOR_VALUE);
    let children = sectors[0].property( CHILDREN_KEY).unwrap();
    assert_eq!( children[SECTOR_VOLUME_VALUE][CHILDREN_NAMES_KEY][0].as_str(), Some( sector.sector_volume_name().as_str()));
    assert_eq!( children[ROUTE_VALUE][CHILDREN_NAMES_KEY].as_array().unwrap().len(), 4);
}

#[test]
fn test_parse_errors() {
    let sector = element( SectorType::I);
    let mut fc = sector.to_geojson();
    let volume = fc.features[1].clone();
    fc.features.push( volume);
    let s = serde_json::to_string( &fc).unwrap();

    let parser = SectorParser::from_str( &s).unwrap();
    let res = parser.sector_polygon();
    println!("{res:?}");
    assert!( matches!( res, Err(SectorError::LookupError{..})));
    assert!( parser.sector_element().is_err());

    let res = SectorParser::from_str( r#"{"type":"Point","coordinates":[0.0,0.0]}"#);
    assert!( matches!( res, Err(SectorError::ParseError(_))));
}

#[test]
fn test_write_geojson() {
    let sector = element( SectorType::Y);
    let dir = std::env::temp_dir();
    let filename = sector_filename( "test", &sector);
    assert_eq!( filename, "test-HELL-Y-140-400");

    let path = sector.write_geojson( &dir, &filename).unwrap();
    println!("written to {path:?}");
    assert!( path.to_string_lossy().ends_with(".geojson"));

    let sector1 = SectorParser::from_file( &path).unwrap().sector_element().unwrap();
    assert_eq!( sector1.to_geojson_string().unwrap(), sector.to_geojson_string().unwrap());
    std::fs::remove_file( &path).unwrap();
}
