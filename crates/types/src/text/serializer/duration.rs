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

//! Serializer for NX-API durations
//!
//! The canonical form is `P[nD][T[nH][nM][nS]]`:
//! - days are the largest unit, weeks and months are folded into days
//! - only non-zero units are written
//! - `T` is omitted when the time of day is zero and there are days
//! - a duration shorter than one second is `PT0S`
//! - the sub-second remainder is truncated

use crate::{
    duration::{Duration, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
    text::serializer::decimal_len,
};
use nxapi_parse_utils::WritableText;
use std::fmt::{self, Write};

/// A duration broken down into the units of its canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CanonicalParts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl CanonicalParts {
    const fn is_time_of_day_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl From<&Duration> for CanonicalParts {
    fn from(value: &Duration) -> Self {
        let total = value.as_secs();
        Self {
            days: total / SECONDS_PER_DAY,
            hours: total % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }
}

/// Length of `<value><unit>` or zero when the unit isn't written
#[inline]
const fn component_len(value: u64) -> usize {
    if value == 0 {
        0
    } else {
        decimal_len(value) + 1
    }
}

impl WritableText<fmt::Error> for Duration {
    fn len(&self) -> usize {
        let parts = CanonicalParts::from(self);
        let date_len = 1 + component_len(parts.days);
        if parts.is_time_of_day_zero() {
            return if parts.days == 0 {
                date_len + "T0S".len()
            } else {
                date_len
            };
        }
        date_len
            + 1
            + component_len(parts.hours)
            + component_len(parts.minutes)
            + component_len(parts.seconds)
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), fmt::Error> {
        let parts = CanonicalParts::from(self);
        writer.write_char('P')?;
        if parts.days > 0 {
            write!(writer, "{}D", parts.days)?;
        }
        if parts.is_time_of_day_zero() {
            if parts.days == 0 {
                writer.write_str("T0S")?;
            }
            return Ok(());
        }
        writer.write_char('T')?;
        if parts.hours > 0 {
            write!(writer, "{}H", parts.hours)?;
        }
        if parts.minutes > 0 {
            write!(writer, "{}M", parts.minutes)?;
        }
        if parts.seconds > 0 {
            write!(writer, "{}S", parts.seconds)?;
        }
        Ok(())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WritableText::write(self, f)
    }
}
