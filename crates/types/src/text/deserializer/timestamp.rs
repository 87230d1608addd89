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

//! Deserializer for NX-API timestamps, `MM/DD/YYYY HH:MM:SS` or date only
//! `MM/DD/YYYY` which is read as midnight.

use crate::{text::trim_value, timestamp::TimeStamp};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::str::FromStr;

pub(crate) const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
pub(crate) const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeStampParsingError {
    #[error("malformed timestamp `{input}`: {reason}")]
    Malformed {
        input: String,
        reason: chrono::ParseError,
    },

    /// `SS` read as `60`, the text form can't render it back
    #[error("leap second in timestamp `{input}`")]
    LeapSecond { input: String },
}

impl TimeStampParsingError {
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed { input, .. } => input,
            Self::LeapSecond { input } => input,
        }
    }
}

fn parse_naive(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    if text.contains(' ') {
        NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
    } else {
        NaiveDate::parse_from_str(text, DATE_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
    }
}

impl FromStr for TimeStamp {
    type Err = TimeStampParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = match parse_naive(trim_value(s)) {
            // chrono keeps a leap second as nanoseconds past 1e9
            Ok(naive) if naive.nanosecond() >= 1_000_000_000 => {
                Err(TimeStampParsingError::LeapSecond {
                    input: s.to_string(),
                })
            }
            Ok(naive) => Ok(TimeStamp::new(naive.and_utc())),
            Err(reason) => Err(TimeStampParsingError::Malformed {
                input: s.to_string(),
                reason,
            }),
        };
        if let Err(err) = &result {
            tracing::debug!("{err}");
        }
        result
    }
}
