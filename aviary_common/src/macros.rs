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

//! logging macros that forward to `tracing`. Crates use these through `aviary_common::{debug,info,..}` so that
//! they don't need their own `tracing` dependency and we can change the backend in one place

#[macro_export]
macro_rules! trace {
    ( $( $id:ident = $e:expr ),* ) => { $crate::macros::tracing::trace!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::macros::tracing::trace!( $( $e ),* ) }
}

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { $crate::macros::tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::macros::tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! info {
    ( $( $id:ident = $e:expr ),* ) => { $crate::macros::tracing::info!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::macros::tracing::info!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { $crate::macros::tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::macros::tracing::warn!( $( $e ),* ) }
}

#[macro_export]
macro_rules! error {
    ( $( $id:ident = $e:expr ),* ) => { $crate::macros::tracing::error!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { $crate::macros::tracing::error!( $( $e ),* ) }
}

#[doc(hidden)]
pub use tracing;
