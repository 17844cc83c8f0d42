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
#![allow(unused,uncommon_codepoints)]

pub mod macros;
pub mod errors;
pub mod config;
pub mod datetime;
pub mod angle;
pub mod geo_constants;
pub mod geo;
pub mod projection;

pub use errors::{AviaryCommonError, Result};

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn asin(x:f64) -> f64 {x.asin() }
#[inline(always)] pub fn atan(x:f64) -> f64 { x.atan() }
#[inline(always)] pub fn atan2(y:f64,x:f64) -> f64 { y.atan2(x) }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }
#[inline(always)] pub fn abs(x:f64) -> f64 { x.abs() }
#[inline(always)] pub fn deg(x:f64)->f64 { x.to_degrees() }
#[inline(always)] pub fn rad(x:f64)->f64 { x.to_radians() }

/// number of decimals we keep for coordinates in exported documents
pub const FLOAT_PRECISION: i32 = 10;

/// round to the given number of decimals. Used to get stable textual representations of computed coordinates
#[inline]
pub fn round_to (x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let y = (x * scale).round() / scale;
    if y == 0.0 { 0.0 } else { y } // no negative zeros in output
}

/// check if two floats are within a given absolute tolerance
#[inline]
pub fn approx_eq (a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
