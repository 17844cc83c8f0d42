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

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use aviary_common::config::load_config;
use aviary_sector::SectorConfig;
use aviary_sector::sector_geojson::sector_filename;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "create a GeoJSON sector document from a RON sector definition")]
pub struct Args {
    /// directory to write the sector document to
    #[arg(short,long, default_value = ".")]
    pub output_dir: PathBuf,

    /// filename prefix of the sector document
    #[arg(short,long, default_value = "sector")]
    pub prefix: String,

    /// RON SectorConfig file
    pub config: PathBuf,
}

fn main()->Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config: SectorConfig = load_config( &args.config)?;
    let sector = config.sector_element()?;

    let path = sector.write_geojson( &args.output_dir, &sector_filename( &args.prefix, &sector))?;
    println!("{}", path.display());

    Ok(())
}
