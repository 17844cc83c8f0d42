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
use rand::Rng;
use rand::seq::IndexedRandom;

use aviary_common::{debug, trace};
use aviary_common::geo::{distance, waypoint_location, GeoPoint};
use aviary_sector::Route;

use crate::aircraft::{AircraftRecord, FlightPhase};
use crate::algorithm::{ScenarioAlgorithm, ScenarioContext};
use crate::errors::{config_error, Result};

const PROBABILITY_TOLERANCE: f64 = 1e-9;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum StartPlacement {
    /// start at the beginning of the drawn route segment
    Discrete,
    /// start at a uniformly drawn position within the drawn route segment
    Continuous,
}

/// parameters of the incremental overflier/climber/descender scenario.
///
/// The level fractions refer to the range between the lowest and highest configured flight level:
/// climbers start in the lowest `climber_initial_interval` (CII) fraction and request a level above the lowest
/// `climber_initial_interval + climber_minimum_climb` (CMC) fraction. Descenders mirror this from the top with
/// `descender_initial_interval` (DII) and `descender_minimum_descent` (DMD).
///
/// The route is divided into `segment_probabilities.len()` segments of equal length, the start segment of a new
/// aircraft is drawn with these probabilities. `aircraft_count` aircraft are added, all on the same route
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct IncrementalOcdParams {
    pub overflier_prob: f64,
    pub climber_prob: f64,
    pub descender_prob: f64,

    pub climber_initial_interval: f64,
    pub climber_minimum_climb: f64,
    pub descender_initial_interval: f64,
    pub descender_minimum_descent: f64,

    pub segment_probabilities: Vec<f64>,
    pub placement: StartPlacement,

    pub aircraft_count: usize,
}

impl Default for IncrementalOcdParams {
    fn default() -> Self {
        IncrementalOcdParams {
            overflier_prob: 1.0/3.0,
            climber_prob: 1.0/3.0,
            descender_prob: 1.0/3.0,
            climber_initial_interval: 0.5,
            climber_minimum_climb: 0.3,
            descender_initial_interval: 0.5,
            descender_minimum_descent: 0.3,
            segment_probabilities: vec![1.0],
            placement: StartPlacement::Discrete,
            aircraft_count: 1,
        }
    }
}

impl IncrementalOcdParams {
    pub fn validate (&self) -> Result<()> {
        check_probabilities( "phase", &[self.overflier_prob, self.climber_prob, self.descender_prob])?;
        check_probabilities( "segment", &self.segment_probabilities)?;

        if self.aircraft_count == 0 {
            return Err( config_error!("incremental scenario has to add at least one aircraft"))
        }

        for (name,v) in [("climber initial interval", self.climber_initial_interval),
                         ("climber minimum climb", self.climber_minimum_climb),
                         ("descender initial interval", self.descender_initial_interval),
                         ("descender minimum descent", self.descender_minimum_descent)] {
            if !(v > 0.0 && v <= 1.0) {
                return Err( config_error!("{name} {v} not in (0,1]"))
            }
        }

        if self.climber_initial_interval + self.climber_minimum_climb >= 1.0 {
            return Err( config_error!("climber initial interval plus minimum climb has to be less than 1"))
        }
        if self.descender_initial_interval + self.descender_minimum_descent >= 1.0 {
            return Err( config_error!("descender initial interval plus minimum descent has to be less than 1"))
        }
        Ok(())
    }

    pub fn n_segments (&self) -> usize { self.segment_probabilities.len() }
}

fn check_probabilities (what: &str, probs: &[f64]) -> Result<()> {
    if probs.is_empty() {
        return Err( config_error!("no {what} probabilities"))
    }
    if let Some(p) = probs.iter().find( |p| !(**p >= 0.0 && **p <= 1.0)) {
        return Err( config_error!("invalid {what} probability {p}"))
    }
    let sum: f64 = probs.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err( config_error!("{what} probabilities sum up to {sum}, not 1"))
    }
    Ok(())
}

/// index of the first cumulative probability that exceeds `u`
fn pick_index (u: f64, probs: &[f64]) -> usize {
    let mut acc = 0.0;
    for (i,p) in probs.iter().enumerate() {
        acc += p;
        if u < acc { return i }
    }
    probs.len() - 1
}

/// candidate levels for climbers and descenders
#[derive(Debug,Clone)]
struct LevelWindows {
    climber_current: Vec<u32>,
    climber_requested: Vec<u32>,
    descender_current: Vec<u32>,
    descender_requested: Vec<u32>,
}

impl LevelWindows {
    fn new (levels: &[u32], params: &IncrementalOcdParams) -> Result<Self> {
        if levels.len() < 2 {
            return Err( config_error!("incremental scenario requires at least 2 distinct flight levels"))
        }
        let min = levels[0] as f64;
        let max = levels[levels.len()-1] as f64;
        let range = max - min;

        let below = |limit: f64| -> Vec<u32> { levels.iter().copied().filter( |fl| *fl as f64 <= limit + PROBABILITY_TOLERANCE).collect() };
        let above = |limit: f64| -> Vec<u32> { levels.iter().copied().filter( |fl| *fl as f64 >= limit - PROBABILITY_TOLERANCE).collect() };

        let windows = LevelWindows {
            climber_current: below( min + params.climber_initial_interval * range),
            climber_requested: above( min + (params.climber_initial_interval + params.climber_minimum_climb) * range),
            descender_current: above( max - params.descender_initial_interval * range),
            descender_requested: below( max - (params.descender_initial_interval + params.descender_minimum_descent) * range),
        };

        for (name,w) in [("climber current", &windows.climber_current), ("climber requested", &windows.climber_requested),
                         ("descender current", &windows.descender_current), ("descender requested", &windows.descender_requested)] {
            if w.is_empty() {
                return Err( config_error!("no {name} flight level in {levels:?}"))
            }
        }
        Ok(windows)
    }
}

/// the equal length route segments, in geodesic distance
#[derive(Debug,Clone)]
struct RouteSegments {
    points: Vec<GeoPoint>,
    legs: Vec<f64>,
    total: f64,
    segment_length: f64,
}

impl RouteSegments {
    fn new (route: &Route, n_segments: usize) -> Result<Self> {
        if route.len() < 2 {
            return Err( config_error!("incremental scenario requires a route with at least 2 fixes"))
        }
        let points: Vec<GeoPoint> = route.fixes().iter().map( |f| GeoPoint::from_point( f.point)).collect();
        let legs: Vec<f64> = points.windows(2).map( |w| distance( w[0].lat(), w[0].lon(), w[1].lat(), w[1].lon())).collect();
        let total: f64 = legs.iter().sum();

        Ok( RouteSegments { points, legs, total, segment_length: total / n_segments as f64 } )
    }

    /// the route fix at or before route distance `d` and the windback distance of `d` past that fix
    fn pre_fix (&self, d: f64) -> (usize, f64) {
        let mut acc = 0.0;
        for (i,leg) in self.legs.iter().enumerate() {
            if acc + leg > d || i == self.legs.len()-1 {
                return (i, d - acc)
            }
            acc += leg;
        }
        (0, 0.0) // not reached, we have at least one leg
    }

    /// the point at route distance `d` from the first fix, clamped to the route
    fn location (&self, d: f64) -> GeoPoint {
        let (i, windback) = self.pre_fix( d.clamp( 0.0, self.total));
        let pre = &self.points[i];
        let post = &self.points[i+1];
        waypoint_location( pre.lat(), pre.lon(), post.lat(), post.lon(), windback)
    }

    /// route distance of the start of segment `k`
    fn segment_start (&self, k: usize) -> f64 {
        k as f64 * self.segment_length
    }
}

/// adds `aircraft_count` overfliers, climbers or descenders on a fixed route to the aircraft of an underlying
/// scenario. The route is drawn once at construction, all later draws come from the same generator
pub struct IncrementalOcdScenario<A: ScenarioAlgorithm> {
    underlying: A,
    ctx: ScenarioContext,
    params: IncrementalOcdParams,
    route: Route,
    segments: RouteSegments,
    windows: LevelWindows,
    underlying_done: bool,
    added: usize,
}

impl<A: ScenarioAlgorithm> IncrementalOcdScenario<A> {
    pub fn new (underlying: A, seed: u64, params: IncrementalOcdParams) -> Result<Self> {
        params.validate()?;

        let uctx = underlying.context();
        let config = uctx.config().clone().with_seed( seed);
        let mut ctx = ScenarioContext::new( uctx.shared_sector(), config)?;
        for cs in uctx.seen_callsigns() {
            ctx.register_callsign( cs);
        }

        let windows = LevelWindows::new( &ctx.config().distinct_flight_levels(), &params)?;
        let route = ctx.route()?;
        let segments = RouteSegments::new( &route, params.n_segments())?;
        debug!("incremental ocd scenario adding {} aircraft on route {:?} with {} segments of {:.0}m",
               params.aircraft_count, route.fix_names(), params.n_segments(), segments.segment_length);

        Ok( IncrementalOcdScenario { underlying, ctx, params, route, segments, windows, underlying_done: false, added: 0 } )
    }

    pub fn with_defaults (underlying: A, seed: u64) -> Result<Self> {
        Self::new( underlying, seed, IncrementalOcdParams::default())
    }

    pub fn params (&self) -> &IncrementalOcdParams { &self.params }

    /// the fixed route all added aircraft follow
    pub fn route (&self) -> &Route { &self.route }

    pub fn underlying (&self) -> &A { &self.underlying }

    fn flight_phase (&mut self) -> FlightPhase {
        let p = &self.params;
        let u: f64 = self.ctx.rng().random();
        if u < p.overflier_prob {
            FlightPhase::Overflier
        } else if u - p.overflier_prob < p.climber_prob {
            FlightPhase::Climber
        } else {
            FlightPhase::Descender
        }
    }

    /// (current, requested) flight level for the given phase
    fn flight_levels (&mut self, phase: FlightPhase) -> Result<(u32,u32)> {
        let (current, requested) = match phase {
            FlightPhase::Overflier => {
                let fl = self.ctx.flight_level()?;
                (Some(fl), Some(fl))
            }
            FlightPhase::Climber => {
                let w = &self.windows;
                let rng = self.ctx.rng();
                (w.climber_current.choose( rng).copied(), w.climber_requested.choose( rng).copied())
            }
            FlightPhase::Descender => {
                let w = &self.windows;
                let rng = self.ctx.rng();
                (w.descender_current.choose( rng).copied(), w.descender_requested.choose( rng).copied())
            }
        };
        match (current, requested) {
            (Some(current), Some(requested)) => Ok( (current, requested) ),
            _ => Err( config_error!("no {phase:?} flight levels"))
        }
    }

    fn start_position (&mut self) -> GeoPoint {
        let u: f64 = self.ctx.rng().random();
        let k = pick_index( u, &self.params.segment_probabilities);
        let start = self.segments.segment_start( k);

        match self.params.placement {
            StartPlacement::Discrete => self.segments.location( start),
            StartPlacement::Continuous => {
                let f: f64 = self.ctx.rng().random();
                self.segments.location( start + f * self.segments.segment_length)
            }
        }
    }

    fn new_aircraft (&mut self) -> Result<AircraftRecord> {
        let phase = self.flight_phase();
        let (current_flight_level, requested_flight_level) = self.flight_levels( phase)?;
        let start = self.start_position();

        let mut route = self.route.copy();
        route.truncate( start.lat(), start.lon());

        let aircraft_type = self.ctx.aircraft_type()?;
        let callsign = self.ctx.callsign()?;
        trace!("incremental {phase:?} {callsign} FL{current_flight_level}->{requested_flight_level} at {start}");

        Ok( AircraftRecord {
            callsign,
            aircraft_type,
            departure: self.ctx.departure_airport(),
            destination: self.ctx.destination_airport(),
            start_position: [start.lon(), start.lat()],
            timedelta: 0,
            current_flight_level,
            cleared_flight_level: current_flight_level,
            requested_flight_level,
            route: route.serialize(),
        })
    }
}

impl<A: ScenarioAlgorithm> ScenarioAlgorithm for IncrementalOcdScenario<A> {
    fn next_aircraft (&mut self) -> Option<Result<AircraftRecord>> {
        if !self.underlying_done {
            match self.underlying.next_aircraft() {
                Some(Ok(ac)) => {
                    self.ctx.register_callsign( &ac.callsign);
                    return Some( Ok(ac))
                }
                Some(Err(e)) => return Some( Err(e)),
                None => self.underlying_done = true
            }
        }

        if self.added >= self.params.aircraft_count {
            None
        } else {
            self.added += 1;
            Some( self.new_aircraft())
        }
    }

    fn context (&self) -> &ScenarioContext { &self.ctx }
}
