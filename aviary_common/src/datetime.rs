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

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Serializer,Deserializer,Deserialize,de::{Error as DeError}};

use crate::errors::Result;

/// time-of-day format used for scenario start times
pub const HMS_FORMAT: &str = "%H:%M:%S";

pub fn parse_hms (s: &str) -> Result<NaiveTime> {
    Ok( NaiveTime::parse_from_str( s, HMS_FORMAT)? )
}

pub fn hms_string (t: &NaiveTime) -> String {
    t.format(HMS_FORMAT).to_string()
}

/// add fractional seconds to a time-of-day (wrapping around midnight)
pub fn add_secs_f64 (t: &NaiveTime, secs: f64) -> NaiveTime {
    let millis = (secs * 1000.0).round() as i64;
    t.overflowing_add_signed( TimeDelta::milliseconds(millis)).0
}

pub fn ser_hms<S: Serializer> (t: &NaiveTime, s: S) -> std::result::Result<S::Ok, S::Error>  {
    s.serialize_str( &hms_string(t))
}

pub fn de_hms <'a,D>(deserializer: D) -> std::result::Result<NaiveTime,D::Error> where D: Deserializer<'a> {
    String::deserialize(deserializer).and_then( |s| {
        NaiveTime::parse_from_str( &s, HMS_FORMAT).map_err(|e| D::Error::custom(format!("{e}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hms () {
        let t = parse_hms("12:30:05").unwrap();
        assert_eq!( t.hour(), 12);
        assert_eq!( hms_string(&t), "12:30:05");
        assert_eq!( hms_string( &add_secs_f64(&t, 60.4)), "12:31:05");
        assert!( parse_hms("25:00:00").is_err());
    }
}
