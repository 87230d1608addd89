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

use crate::{
    duration::{
        Duration, DurationOutOfRange, DurationPart, DurationToken, DurationUnit, NANOS_PER_SECOND,
        SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MONTH,
    },
    text::deserializer::duration::{
        DurationParsingError, LocatedDurationParsingError, MalformedDuration,
    },
};
use nxapi_parse_utils::test_helpers::{
    test_parse_error, test_parse_error_with_one_input, test_parsed_completely,
    test_parsed_completely_with_one_input, test_write,
};
use rstest::rstest;
use std::time::Duration as StdDuration;

type TokenError<'a> = LocatedDurationParsingError<'a>;

fn secs(value: u64) -> Duration {
    Duration::from_secs(value).unwrap()
}

#[rstest]
#[case::empty("", 0)]
#[case::bare_zero("0", 0)]
#[case::white_space_only("   \n", 0)]
#[case::iso_full("P7DT12H2M5S", 648_125)]
#[case::iso_month("P1MT4M31S", 2_592_271)]
#[case::iso_time_only("PT4M31S", 271)]
#[case::iso_date_only("P3D", 3 * SECONDS_PER_DAY)]
#[case::iso_week("P2W", 14 * SECONDS_PER_DAY)]
#[case::iso_zero_seconds("PT0S", 0)]
#[case::iso_year_ignored("P1Y2D", 2 * SECONDS_PER_DAY)]
#[case::iso_date_minute_is_month("P1M", SECONDS_PER_MONTH)]
#[case::iso_time_minute("PT1M", 60)]
#[case::iso_trimmed("\n    P7DT12H2M5S\n  ", 648_125)]
#[case::compact_weeks_days("1w2d", 777_600)]
#[case::compact_upper_case("1W2D", 777_600)]
#[case::compact_hms("3h4m5s", 3 * SECONDS_PER_HOUR + 4 * 60 + 5)]
#[case::compact_month("1M", SECONDS_PER_MONTH)]
#[case::compact_minute("1m", 60)]
#[case::compact_all_units("1h1m1s1d1w1M", 38 * SECONDS_PER_DAY + SECONDS_PER_HOUR + 60 + 1)]
#[case::clock("00:04:30", 270)]
#[case::clock_long_hours("123:04:05", 123 * SECONDS_PER_HOUR + 4 * 60 + 5)]
#[case::clock_no_range_check("0:90:90", 90 * 60 + 90)]
fn test_parse_duration(#[case] input: &str, #[case] expected_secs: u64) {
    let parsed = input.parse::<Duration>();
    assert_eq!(parsed, Ok(secs(expected_secs)), "parsing `{input}`");
    assert_eq!(
        parsed.map(|value| value.as_nanos()),
        Ok(expected_secs * NANOS_PER_SECOND)
    );
}

#[rstest]
#[case::garbage("garbage", 0, DurationParsingError::MissingQuantity)]
#[case::garbage_offset_keeps_white_space("  garbage ", 2, DurationParsingError::MissingQuantity)]
#[case::only_designator("P", 0, DurationParsingError::MissingComponents)]
#[case::only_designators("PT", 2, DurationParsingError::MissingComponents)]
#[case::empty_time_part("P1DT", 4, DurationParsingError::MissingComponents)]
#[case::clock_two_fields("12:34", 5, DurationParsingError::MissingClockField)]
#[case::clock_short("1:2", 3, DurationParsingError::MissingClockField)]
#[case::clock_letters("a:b:c", 0, DurationParsingError::MissingQuantity)]
#[case::clock_trailing("00:04:30 extra", 8, DurationParsingError::TrailingInput)]
#[case::duplicate_day("P1D2D", 3, DurationParsingError::DuplicateUnit(DurationUnit::Day))]
#[case::duplicate_minute("PT1M2M", 4, DurationParsingError::DuplicateUnit(DurationUnit::Minute))]
#[case::duplicate_week("1w2w", 2, DurationParsingError::DuplicateUnit(DurationUnit::Week))]
#[case::duplicate_mixed_case("1h2H", 2, DurationParsingError::DuplicateUnit(DurationUnit::Hour))]
#[case::missing_unit("5", 1, DurationParsingError::MissingUnit)]
#[case::unknown_unit("1x", 1, DurationParsingError::UnknownUnit('x'))]
#[case::iso_lower_case_unit("P1d", 2, DurationParsingError::UnknownUnit('d'))]
#[case::iso_time_unit_in_date("P1H", 2, DurationParsingError::UnknownUnit('H'))]
#[case::iso_date_unit_in_time("PT1D", 3, DurationParsingError::UnknownUnit('D'))]
#[case::lower_case_designator("p1d", 0, DurationParsingError::MissingQuantity)]
#[case::negative("-1d", 0, DurationParsingError::MissingQuantity)]
#[case::quantity_too_large("18446744073709551616s", 0, DurationParsingError::Overflow)]
#[case::token_too_large("18446744073709551615s", 0, DurationParsingError::Overflow)]
#[case::sum_too_large("P213000DT100000H", 0, DurationParsingError::Overflow)]
fn test_parse_malformed_duration(
    #[case] input: &str,
    #[case] offset: usize,
    #[case] error: DurationParsingError,
) {
    assert_eq!(
        input.parse::<Duration>(),
        Err(MalformedDuration::new(input, offset, error))
    );
}

#[test]
fn test_malformed_duration_display() {
    let err = "garbage".parse::<Duration>().unwrap_err();
    assert_eq!(err.input(), "garbage");
    assert_eq!(err.offset(), 0);
    assert_eq!(err.error(), DurationParsingError::MissingQuantity);
    assert_eq!(
        err.to_string(),
        "malformed duration `garbage` at offset 0: expected a number"
    );

    let err = "P1D2D".parse::<Duration>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed duration `P1D2D` at offset 3: unit Day appears more than once"
    );
}

#[test]
fn test_parse_into_same_variable() {
    let mut uptime: Duration = "PT4M31S".parse().unwrap();
    assert_eq!(uptime.as_secs(), 271);

    uptime = "00:04:30".parse().unwrap();
    assert_eq!(uptime.as_secs(), 270);
    assert_eq!(uptime.to_string(), "PT4M30S");

    // a failed parse leaves the held value alone
    let held = uptime;
    if let Ok(value) = "12:34".parse::<Duration>() {
        uptime = value;
    }
    assert_eq!(uptime, held);
}

#[test]
fn test_duration_text() {
    let good_iso = "P7DT12H2M5S";
    let good_clock = "00:04:30";
    let bad_iso = "P";
    let bad_clock = "12:34";

    test_parsed_completely::<Duration, LocatedDurationParsingError<'_>>(good_iso, &secs(648_125));
    test_parsed_completely::<Duration, LocatedDurationParsingError<'_>>(good_clock, &secs(270));
    test_parsed_completely::<Duration, LocatedDurationParsingError<'_>>("", &Duration::ZERO);
    test_parse_error::<Duration, LocatedDurationParsingError<'_>>(
        bad_iso,
        &LocatedDurationParsingError::new("P", DurationParsingError::MissingComponents),
    );
    test_parse_error::<Duration, LocatedDurationParsingError<'_>>(
        bad_clock,
        &LocatedDurationParsingError::new("", DurationParsingError::MissingClockField),
    );
}

#[rstest]
#[case::date_month("4M", DurationPart::Date, DurationUnit::Month)]
#[case::time_minute("4M", DurationPart::Time, DurationUnit::Minute)]
#[case::compact_month("4M", DurationPart::Compact, DurationUnit::Month)]
#[case::compact_minute("4m", DurationPart::Compact, DurationUnit::Minute)]
#[case::date_week("4W", DurationPart::Date, DurationUnit::Week)]
#[case::compact_week("4w", DurationPart::Compact, DurationUnit::Week)]
#[case::date_year("4Y", DurationPart::Date, DurationUnit::Year)]
#[case::time_second("4S", DurationPart::Time, DurationUnit::Second)]
fn test_duration_token(
    #[case] input: &str,
    #[case] part: DurationPart,
    #[case] unit: DurationUnit,
) {
    test_parsed_completely_with_one_input::<DurationToken, DurationPart, TokenError<'_>>(
        input,
        part,
        &DurationToken::new(4, unit),
    );
}

#[test]
fn test_duration_token_errors() {
    test_parse_error_with_one_input::<DurationToken, DurationPart, TokenError<'_>>(
        "4m",
        DurationPart::Time,
        &LocatedDurationParsingError::new("m", DurationParsingError::UnknownUnit('m')),
    );
    test_parse_error_with_one_input::<DurationToken, DurationPart, TokenError<'_>>(
        "4",
        DurationPart::Compact,
        &LocatedDurationParsingError::new("", DurationParsingError::MissingUnit),
    );
    test_parse_error_with_one_input::<DurationToken, DurationPart, TokenError<'_>>(
        "H",
        DurationPart::Time,
        &LocatedDurationParsingError::new("H", DurationParsingError::MissingQuantity),
    );
}

#[test]
fn test_duration_token_nanos() {
    assert_eq!(
        DurationToken::new(2, DurationUnit::Day).nanos(),
        Some(2 * SECONDS_PER_DAY * NANOS_PER_SECOND)
    );
    assert_eq!(DurationToken::new(10, DurationUnit::Year).nanos(), Some(0));
    assert_eq!(
        DurationToken::new(u64::MAX, DurationUnit::Second).nanos(),
        None
    );
}

#[rstest]
#[case::zero(Duration::ZERO, "PT0S")]
#[case::sub_second(Duration::from_nanos(500_000_000), "PT0S")]
#[case::truncated(Duration::from_nanos(61 * NANOS_PER_SECOND + 999_999_999), "PT1M1S")]
#[case::one_day(secs(SECONDS_PER_DAY), "P1D")]
#[case::month_folded_into_days(secs(SECONDS_PER_MONTH), "P30D")]
#[case::full(secs(648_125), "P7DT12H2M5S")]
#[case::month_and_minutes(secs(2_592_271), "P30DT4M31S")]
#[case::hour(secs(SECONDS_PER_HOUR), "PT1H")]
#[case::day_and_second(secs(SECONDS_PER_DAY + 1), "P1DT1S")]
#[case::clock(secs(270), "PT4M30S")]
#[case::max(Duration::MAX, "P213503DT23H34M33S")]
fn test_write_duration(#[case] value: Duration, #[case] expected: &str) {
    test_write(&value, expected).unwrap();
    assert_eq!(value.to_string(), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(59)]
#[case(271)]
#[case(3_600)]
#[case(86_399)]
#[case(648_125)]
#[case(2_592_271)]
#[case(18_446_744_073)]
fn test_duration_round_trip(#[case] value: u64) {
    let value = secs(value);
    assert_eq!(value.to_string().parse::<Duration>(), Ok(value));
}

#[test]
fn test_duration_round_trip_truncates() {
    let value = Duration::from_nanos(271 * NANOS_PER_SECOND + 1);
    assert_eq!(
        value.to_string().parse::<Duration>(),
        Ok(value.truncate_to_secs())
    );
}

#[test]
fn test_duration_conversions() {
    assert_eq!(Duration::from_secs(u64::MAX), None);
    assert_eq!(secs(90).as_secs(), 90);
    assert_eq!(
        Duration::from_nanos(1_500_000_000).subsec_nanos(),
        500_000_000
    );
    assert!(Duration::default().is_zero());
    assert_eq!(Duration::MAX.checked_add(Duration::from_nanos(1)), None);
    assert_eq!(secs(1).checked_add(secs(2)), Some(secs(3)));

    assert_eq!(StdDuration::from(secs(271)), StdDuration::from_secs(271));
    assert_eq!(
        Duration::try_from(StdDuration::from_millis(1_500)),
        Ok(Duration::from_nanos(1_500_000_000))
    );
    assert_eq!(
        Duration::try_from(StdDuration::from_secs(u64::MAX)),
        Err(DurationOutOfRange(StdDuration::from_secs(u64::MAX)))
    );
}
