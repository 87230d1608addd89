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

//! Deserializer for NX-API durations
//!
//! The text is first split into [`DurationToken`]s, each unit letter is
//! resolved against the [`DurationPart`] it's read in, then the tokens are
//! summed up. The grammar is picked from the first character: `P` is the
//! ISO form, a text containing `:` is the clock form, anything else is the
//! compact form.

use crate::{
    duration::{Duration, DurationPart, DurationToken, DurationUnit},
    text::trim_value,
};
use nom::{
    character::complete::{anychar, char, digit1},
    combinator::opt,
    error::{ErrorKind, FromExternalError, ParseError},
    IResult,
};
use nxapi_parse_utils::{
    parse_complete, span_offset, CompleteParsingError, LocatedParsingError, ReadableText,
    ReadableTextWithOneInput, Span,
};
use std::str::FromStr;

/// Duration Parsing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DurationParsingError {
    #[error("parser error: {0:?}")]
    NomError(ErrorKind),

    #[error("expected a number")]
    MissingQuantity,

    #[error("expected a unit letter after the number")]
    MissingUnit,

    #[error("`{0}` is not a duration unit here")]
    UnknownUnit(char),

    #[error("unit {0:?} appears more than once")]
    DuplicateUnit(DurationUnit),

    /// `P`, `PT` or `P1DT` without any time unit after the `T`
    #[error("expected at least one duration component")]
    MissingComponents,

    #[error("expected three `:` separated fields")]
    MissingClockField,

    #[error("value doesn't fit in u64 nanoseconds")]
    Overflow,

    #[error("unexpected trailing characters")]
    TrailingInput,
}

/// [`DurationParsingError`] along with the part of the text where it
/// occurred
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LocatedDurationParsingError<'a> {
    span: Span<'a>,
    error: DurationParsingError,
}

impl<'a> LocatedDurationParsingError<'a> {
    pub const fn new(span: Span<'a>, error: DurationParsingError) -> Self {
        Self { span, error }
    }
}

impl<'a> LocatedParsingError for LocatedDurationParsingError<'a> {
    type Span = Span<'a>;
    type Error = DurationParsingError;

    fn span(&self) -> &Self::Span {
        &self.span
    }

    fn error(&self) -> &Self::Error {
        &self.error
    }
}

impl<'a> ParseError<Span<'a>> for LocatedDurationParsingError<'a> {
    fn from_error_kind(input: Span<'a>, kind: ErrorKind) -> Self {
        LocatedDurationParsingError::new(input, DurationParsingError::NomError(kind))
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<Span<'a>, DurationParsingError> for LocatedDurationParsingError<'a> {
    fn from_external_error(input: Span<'a>, _kind: ErrorKind, error: DurationParsingError) -> Self {
        LocatedDurationParsingError::new(input, error)
    }
}

/// The error reported for a text that isn't a valid duration. It keeps the
/// complete offending text and the byte offset the parser stopped at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed duration `{input}` at offset {offset}: {error}")]
pub struct MalformedDuration {
    input: String,
    offset: usize,
    error: DurationParsingError,
}

impl MalformedDuration {
    pub fn new(input: impl Into<String>, offset: usize, error: DurationParsingError) -> Self {
        Self {
            input: input.into(),
            offset,
            error,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn error(&self) -> DurationParsingError {
        self.error
    }
}

#[inline]
fn located_err(
    span: Span<'_>,
    error: DurationParsingError,
) -> nom::Err<LocatedDurationParsingError<'_>> {
    nom::Err::Error(LocatedDurationParsingError::new(span, error))
}

fn parse_quantity<'a>(buf: Span<'a>) -> IResult<Span<'a>, u64, LocatedDurationParsingError<'a>> {
    let input = buf;
    let (buf, digits) = digit1::<Span<'a>, LocatedDurationParsingError<'a>>(buf)
        .map_err(|_| located_err(input, DurationParsingError::MissingQuantity))?;
    // only ASCII digits are left, so the only failure is overflow
    let quantity = digits
        .parse::<u64>()
        .map_err(|_| located_err(input, DurationParsingError::Overflow))?;
    Ok((buf, quantity))
}

impl<'a> ReadableTextWithOneInput<'a, DurationPart, LocatedDurationParsingError<'a>>
    for DurationToken
{
    fn from_text(
        buf: Span<'a>,
        part: DurationPart,
    ) -> IResult<Span<'a>, Self, LocatedDurationParsingError<'a>> {
        let input = buf;
        let (buf, quantity) = parse_quantity(buf)?;
        let unit_span = buf;
        let (buf, letter) = anychar::<Span<'a>, LocatedDurationParsingError<'a>>(buf)
            .map_err(|_| located_err(unit_span, DurationParsingError::MissingUnit))?;
        let unit = DurationUnit::resolve(letter, part)
            .ok_or_else(|| located_err(unit_span, DurationParsingError::UnknownUnit(letter)))?;
        let token = DurationToken::new(quantity, unit);
        if token.nanos().is_none() {
            return Err(located_err(input, DurationParsingError::Overflow));
        }
        Ok((buf, token))
    }
}

/// Read tokens of one part till the input is consumed or the `stop`
/// character is reached. A unit may appear only once per part.
fn parse_part<'a>(
    buf: Span<'a>,
    part: DurationPart,
    stop: Option<char>,
) -> IResult<Span<'a>, Vec<DurationToken>, LocatedDurationParsingError<'a>> {
    let mut buf = buf;
    let mut tokens: Vec<DurationToken> = Vec::new();
    while !buf.is_empty() && !stop.is_some_and(|stop| buf.starts_with(stop)) {
        let (rest, token) = DurationToken::from_text(buf, part)?;
        if tokens.iter().any(|seen| seen.unit() == token.unit()) {
            return Err(located_err(buf, DurationParsingError::DuplicateUnit(token.unit())));
        }
        tokens.push(token);
        buf = rest;
    }
    Ok((buf, tokens))
}

/// `P[date tokens][T time tokens]`
fn parse_iso_duration<'a>(
    buf: Span<'a>,
) -> IResult<Span<'a>, Vec<DurationToken>, LocatedDurationParsingError<'a>> {
    let input = buf;
    let (buf, _) = char::<Span<'a>, LocatedDurationParsingError<'a>>('P')(buf)?;
    let (buf, mut tokens) = parse_part(buf, DurationPart::Date, Some('T'))?;
    let (buf, marker) = opt(char::<Span<'a>, LocatedDurationParsingError<'a>>('T'))(buf)?;
    let buf = if marker.is_some() {
        let time_span = buf;
        let (buf, time_tokens) = parse_part(buf, DurationPart::Time, None)?;
        if time_tokens.is_empty() {
            return Err(located_err(time_span, DurationParsingError::MissingComponents));
        }
        tokens.extend(time_tokens);
        buf
    } else {
        buf
    };
    if tokens.is_empty() {
        return Err(located_err(input, DurationParsingError::MissingComponents));
    }
    Ok((buf, tokens))
}

fn parse_clock_separator<'a>(
    buf: Span<'a>,
) -> IResult<Span<'a>, char, LocatedDurationParsingError<'a>> {
    char::<Span<'a>, LocatedDurationParsingError<'a>>(':')(buf)
        .map_err(|_| located_err(buf, DurationParsingError::MissingClockField))
}

/// `H:M:S`
fn parse_clock_duration<'a>(
    buf: Span<'a>,
) -> IResult<Span<'a>, Vec<DurationToken>, LocatedDurationParsingError<'a>> {
    let (buf, hours) = parse_quantity(buf)?;
    let (buf, _) = parse_clock_separator(buf)?;
    let (buf, minutes) = parse_quantity(buf)?;
    let (buf, _) = parse_clock_separator(buf)?;
    let (buf, seconds) = parse_quantity(buf)?;
    Ok((
        buf,
        vec![
            DurationToken::new(hours, DurationUnit::Hour),
            DurationToken::new(minutes, DurationUnit::Minute),
            DurationToken::new(seconds, DurationUnit::Second),
        ],
    ))
}

impl<'a> ReadableText<'a, LocatedDurationParsingError<'a>> for Duration {
    fn from_text(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedDurationParsingError<'a>> {
        let input = buf;
        let (buf, tokens) = if buf.starts_with('P') {
            parse_iso_duration(buf)?
        } else if buf.contains(':') {
            parse_clock_duration(buf)?
        } else if buf == "0" {
            // devices report a bare `0` uptime
            (&buf[buf.len()..], Vec::new())
        } else {
            parse_part(buf, DurationPart::Compact, None)?
        };
        let nanos = tokens
            .iter()
            .try_fold(0u64, |total, token| {
                token.nanos().and_then(|nanos| total.checked_add(nanos))
            })
            .ok_or_else(|| located_err(input, DurationParsingError::Overflow))?;
        Ok((buf, Duration::from_nanos(nanos)))
    }
}

impl FromStr for Duration {
    type Err = MalformedDuration;

    /// Parse a complete duration text, surrounding ASCII white space is
    /// ignored. An empty text is a zero duration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = trim_value(s);
        let result = match parse_complete::<Duration, LocatedDurationParsingError<'_>>(text) {
            Ok(duration) => Ok(duration),
            Err(CompleteParsingError::Parser(err)) => Err(MalformedDuration::new(
                s,
                span_offset(s, *err.span()),
                *err.error(),
            )),
            Err(CompleteParsingError::TrailingInput(rest)) => Err(MalformedDuration::new(
                s,
                span_offset(s, rest),
                DurationParsingError::TrailingInput,
            )),
        };
        if let Err(err) = &result {
            tracing::debug!("{err}");
        }
        result
    }
}
