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
use std::sync::Arc;
use anyhow::Result;
use clap::{Parser, ValueEnum};

use aviary_common::config::load_config;
use aviary_common::info;
use aviary_sector::SectorParser;
use aviary_trajectory::{LookupTrajectoryPredictor, TrajectoryPredictor};
use aviary_scenario::*;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Algorithm {
    Poisson,
    Cartesian,
    OverflierClimber,
    OverflierClimberExtended,
    Empty,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = "generate a JSON traffic scenario for a GeoJSON sector document")]
pub struct Args {
    #[arg(short,long, value_enum, default_value_t = Algorithm::Poisson)]
    pub algorithm: Algorithm,

    #[arg(short,long, default_value_t = 0)]
    pub seed: u64,

    /// maximum aircraft entry time in seconds
    #[arg(short,long, default_value_t = 3600)]
    pub duration: u64,

    /// scenario start time (HH:MM:SS)
    #[arg(long, default_value = "00:00:00")]
    pub start_time: String,

    /// aircraft per second (poisson)
    #[arg(long, default_value_t = 2.0/60.0)]
    pub arrival_rate: f64,

    /// seconds (overflier-climber-extended)
    #[arg(long, default_value_t = 60.0)]
    pub thinking_time: f64,

    /// number of overflier/climber/descender aircraft to add on a shared route
    #[arg(short,long, default_value_t = 0)]
    pub incremental: usize,

    /// optional RON IncrementalOcdParams file
    #[arg(long)]
    pub incremental_params: Option<PathBuf>,

    /// optional RON ScenarioConfig file (aircraft types, flight levels, callsign prefixes)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// RON LookupConfig file for the trajectory tables
    #[arg(long, default_value = "aviary_trajectory/data/lookup.ron")]
    pub lookup: PathBuf,

    /// directory to write the scenario document to
    #[arg(short,long, default_value = ".")]
    pub output_dir: PathBuf,

    /// filename prefix of the scenario document
    #[arg(short,long, default_value = "scenario")]
    pub prefix: String,

    /// GeoJSON sector document
    pub sector: PathBuf,
}

fn main()->Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let sector = Arc::new( SectorParser::from_file( &args.sector)?.sector_element()?);
    let config = match &args.config {
        Some(path) => load_config::<ScenarioConfig>( path)?,
        None => ScenarioConfig::default()
    }.with_seed( args.seed);

    let mut algorithm: Box<dyn ScenarioAlgorithm> = match args.algorithm {
        Algorithm::Poisson => Box::new( PoissonScenario::new( sector, config, args.arrival_rate)?),
        Algorithm::Cartesian => Box::new( CartesianScenario::new( sector, config)?),
        Algorithm::OverflierClimber => Box::new( OverflierClimberScenario::new( sector, config, predictor( &args)?)?),
        Algorithm::OverflierClimberExtended => {
            Box::new( OverflierClimberExtendedScenario::new( sector, config, predictor( &args)?, args.thinking_time)?)
        }
        Algorithm::Empty => Box::new( EmptyScenario::new( sector, config)?),
    };

    if args.incremental > 0 {
        let mut params = match &args.incremental_params {
            Some(path) => load_config::<IncrementalOcdParams>( path)?,
            None => IncrementalOcdParams::default()
        };
        params.aircraft_count = args.incremental;
        algorithm = Box::new( IncrementalOcdScenario::new( algorithm, args.seed.wrapping_add(1), params)?);
    }

    let generator = ScenarioGenerator::from_hms( &args.start_time)?;
    let scenario = generator.generate_scenario( &mut algorithm, args.duration)?;
    info!("{:?} scenario with {} aircraft", args.algorithm, scenario.aircraft.len());

    let path = scenario.write_json_scenario( &args.output_dir, &scenario_filename( &args.prefix, args.seed))?;
    println!("{}", path.display());

    Ok(())
}

fn predictor (args: &Args) -> Result<Arc<dyn TrajectoryPredictor>> {
    Ok( Arc::new( LookupTrajectoryPredictor::from_config_file( &args.lookup)?) )
}
