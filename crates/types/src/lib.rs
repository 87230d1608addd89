// Copyright (C) 2025-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Value types found in Cisco NX-OS NX-API `show` command responses.
//!
//! NX-OS reports elapsed times (BGP last flap, ARP entry age, uptime, ...) in
//! several textual shapes and wall clock instants in a fixed
//! `MM/DD/YYYY HH:MM:SS` form. [`Duration`] and [`TimeStamp`] decode those
//! values and plug into `serde` so a response body can declare them directly
//! as field types. [`response::InsApiResponse`] is the `ins_api` envelope
//! shared by every `cli_show` answer.
//!
//! ```
//! use nxapi_types::Duration;
//!
//! let uptime: Duration = "P7DT12H2M5S".parse().unwrap();
//! assert_eq!(uptime.as_secs(), 648_125);
//! assert_eq!("1w2d".parse::<Duration>().unwrap().to_string(), "P9D");
//! assert_eq!("00:04:30".parse::<Duration>().unwrap().to_string(), "PT4M30S");
//! ```

pub mod duration;
pub mod response;
pub mod text;
pub mod timestamp;

pub use duration::{Duration, DurationPart, DurationToken, DurationUnit};
pub use text::deserializer::{
    duration::{DurationParsingError, MalformedDuration},
    timestamp::TimeStampParsingError,
};
pub use timestamp::TimeStamp;
