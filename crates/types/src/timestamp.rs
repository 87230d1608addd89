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

//! Wall clock instants as printed by NX-OS, `MM/DD/YYYY HH:MM:SS` in UTC

use chrono::{DateTime, SubsecRound, Timelike, Utc};

/// A UTC instant with whole second precision
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp(DateTime<Utc>);

impl TimeStamp {
    /// Sub-second precision is dropped, the text form doesn't carry it. A
    /// leap second is folded into the `:59` second it extends.
    pub fn new(value: DateTime<Utc>) -> Self {
        match value.with_nanosecond(0) {
            Some(folded) => Self(folded),
            None => Self(value.trunc_subsecs(0)),
        }
    }

    /// `None` when out of the supported date range
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn unix_timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl From<DateTime<Utc>> for TimeStamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

impl From<TimeStamp> for DateTime<Utc> {
    fn from(value: TimeStamp) -> Self {
        value.0
    }
}
