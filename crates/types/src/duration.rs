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

//! Elapsed time as reported by NX-OS.
//!
//! The text forms accepted by the parser are:
//!
//! ```text
//! ISO-8601 like    P[nY][nM][nW][nD][T[nH][nM][nS]]   P7DT12H2M5S, P1MT4M31S
//! Compact          any of nw nd nh nm ns nM            1w2d, 3h4m5s
//! Clock            H:M:S                               00:04:30
//! ```
//!
//! `M` is a 30-day month before the `T` marker of the ISO form and a minute
//! after it. In the compact form the letter case decides: upper case `M` is
//! a month, lower case `m` a minute, every other unit is case-insensitive.
//! Years are accepted in the ISO form and count as zero, device elapsed
//! times never reach them.
//!
//! The canonical output is always the ISO form using days as its largest
//! unit, see [`crate::text::serializer::duration`].

use std::time::Duration as StdDuration;

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;
/// NX-OS reports elapsed device time, not calendar dates, a month is fixed
/// to 30 days.
pub const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;

/// Elapsed time with nanosecond resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Duration(u64);

impl Duration {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Returns `None` when `secs` doesn't fit in `u64` nanoseconds
    pub const fn from_secs(secs: u64) -> Option<Self> {
        match secs.checked_mul(NANOS_PER_SECOND) {
            Some(nanos) => Some(Self(nanos)),
            None => None,
        }
    }

    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Whole seconds, the sub-second remainder is truncated
    pub const fn as_secs(&self) -> u64 {
        self.0 / NANOS_PER_SECOND
    }

    pub const fn subsec_nanos(&self) -> u32 {
        (self.0 % NANOS_PER_SECOND) as u32
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Drop the sub-second remainder, i.e. the value the canonical text
    /// form preserves.
    pub const fn truncate_to_secs(&self) -> Self {
        Self(self.0 - self.0 % NANOS_PER_SECOND)
    }

    pub const fn checked_add(&self, other: Duration) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(nanos) => Some(Self(nanos)),
            None => None,
        }
    }
}

impl From<Duration> for StdDuration {
    fn from(value: Duration) -> Self {
        StdDuration::from_nanos(value.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("duration {0:?} is too large to be represented in u64 nanoseconds")]
pub struct DurationOutOfRange(pub StdDuration);

impl TryFrom<StdDuration> for Duration {
    type Error = DurationOutOfRange;

    fn try_from(value: StdDuration) -> Result<Self, Self::Error> {
        u64::try_from(value.as_nanos())
            .map(Self)
            .map_err(|_| DurationOutOfRange(value))
    }
}

/// The section of a duration text a unit letter is read in, it decides what
/// an ambiguous letter means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationPart {
    /// ISO form, between `P` and `T`
    Date,
    /// ISO form, after `T`
    Time,
    /// Form without `P`/`T` markers, e.g. `1w2d`
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl DurationUnit {
    /// Resolve a unit letter read in the given part, `None` if the letter
    /// isn't a unit there.
    pub const fn resolve(letter: char, part: DurationPart) -> Option<Self> {
        match (part, letter) {
            (DurationPart::Date, 'Y') => Some(Self::Year),
            (DurationPart::Date, 'M') => Some(Self::Month),
            (DurationPart::Date, 'W') => Some(Self::Week),
            (DurationPart::Date, 'D') => Some(Self::Day),
            (DurationPart::Time, 'H') => Some(Self::Hour),
            (DurationPart::Time, 'M') => Some(Self::Minute),
            (DurationPart::Time, 'S') => Some(Self::Second),
            (DurationPart::Compact, 'M') => Some(Self::Month),
            (DurationPart::Compact, 'm') => Some(Self::Minute),
            (DurationPart::Compact, 'w' | 'W') => Some(Self::Week),
            (DurationPart::Compact, 'd' | 'D') => Some(Self::Day),
            (DurationPart::Compact, 'h' | 'H') => Some(Self::Hour),
            (DurationPart::Compact, 's' | 'S') => Some(Self::Second),
            _ => None,
        }
    }

    /// Seconds in one unit, years are ignored and count as zero
    pub const fn seconds(&self) -> u64 {
        match self {
            Self::Year => 0,
            Self::Month => SECONDS_PER_MONTH,
            Self::Week => SECONDS_PER_WEEK,
            Self::Day => SECONDS_PER_DAY,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Second => 1,
        }
    }

    pub const fn nanos(&self) -> u64 {
        self.seconds() * NANOS_PER_SECOND
    }
}

/// One `<quantity><unit>` pair of a duration text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationToken {
    quantity: u64,
    unit: DurationUnit,
}

impl DurationToken {
    pub const fn new(quantity: u64, unit: DurationUnit) -> Self {
        Self { quantity, unit }
    }

    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    pub const fn unit(&self) -> DurationUnit {
        self.unit
    }

    /// `None` on overflow
    pub const fn nanos(&self) -> Option<u64> {
        self.quantity.checked_mul(self.unit.nanos())
    }
}
