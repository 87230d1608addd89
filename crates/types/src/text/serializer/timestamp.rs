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

//! Serializer for NX-API timestamps, always `MM/DD/YYYY HH:MM:SS`

use crate::{text::serializer::decimal_len, timestamp::TimeStamp};
use chrono::{Datelike, Timelike};
use nxapi_parse_utils::WritableText;
use std::fmt::{self, Write};

/// `MM/DD/` + ` HH:MM:SS`
const FIXED_LEN: usize = 6 + 9;

/// `{:04}` pads to four characters, the sign included
#[inline]
const fn year_len(year: i32) -> usize {
    let digits = decimal_len(year.unsigned_abs() as u64) + if year < 0 { 1 } else { 0 };
    if digits < 4 {
        4
    } else {
        digits
    }
}

impl WritableText<fmt::Error> for TimeStamp {
    fn len(&self) -> usize {
        FIXED_LEN + year_len(self.as_datetime().year())
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), fmt::Error> {
        let value = self.as_datetime();
        write!(
            writer,
            "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
            value.month(),
            value.day(),
            value.year(),
            value.hour(),
            value.minute(),
            value.second()
        )
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WritableText::write(self, f)
    }
}
