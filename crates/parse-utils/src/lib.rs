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

//! Traits for Ser/Deser of text encoded NX-API values

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

use nom::{IResult, Offset};
use std::fmt::Debug;

/// The unconsumed part of the text being parsed
pub type Span<'a> = &'a str;

/// Generic trait for a value readable from text that doesn't need any
/// external input while parsing.
pub trait ReadableText<'a, Error: Debug> {
    fn from_text(buf: Span<'a>) -> IResult<Span<'a>, Self, Error>
    where
        Self: Sized;
}

/// Generic trait for a value readable from text that does need a single
/// external input, for instance the parser state it's read in.
pub trait ReadableTextWithOneInput<'a, T, ErrorType> {
    fn from_text(buf: Span<'a>, input: T) -> IResult<Span<'a>, Self, ErrorType>
    where
        Self: Sized;
}

/// Generic trait for a value that renders itself as text.
#[allow(clippy::len_without_is_empty)]
pub trait WritableText<ErrorType> {
    /// The exact number of bytes [`Self::write`] produces
    fn len(&self) -> usize;

    fn write<T: std::fmt::Write>(&self, _writer: &mut T) -> Result<(), ErrorType>
    where
        Self: Sized;
}

/// Located Parsing error is the error raised by parsing a given text and a
/// reference to the location where it occurred. The [`Span`] should start
/// (as much as possible) at the first character where the error started.
pub trait LocatedParsingError {
    type Span;
    type Error;

    fn span(&self) -> &Self::Span;
    fn error(&self) -> &Self::Error;
}

/// Byte offset of `span` inside `input`, `span` must be a suffix of `input`.
#[inline]
pub fn span_offset(input: &str, span: Span<'_>) -> usize {
    input.offset(span)
}

/// Run a [`ReadableText`] parser over the complete input, the parser must
/// consume all of it. Returns the located error and the span where parsing
/// stopped otherwise.
#[inline]
pub fn parse_complete<'a, T, E>(buf: Span<'a>) -> Result<T, CompleteParsingError<'a, E>>
where
    T: ReadableText<'a, E>,
    E: Debug,
{
    match T::from_text(buf) {
        Ok((rest, value)) if rest.is_empty() => Ok(value),
        Ok((rest, _)) => Err(CompleteParsingError::TrailingInput(rest)),
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
            Err(CompleteParsingError::Parser(err))
        }
        Err(nom::Err::Incomplete(_)) => Err(CompleteParsingError::TrailingInput(buf)),
    }
}

/// Reasons [`parse_complete`] fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteParsingError<'a, E> {
    /// The parser itself failed
    Parser(E),
    /// The parser succeeded but left this part of the input unconsumed
    TrailingInput(Span<'a>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::{character::complete::digit1, error::Error as NomError};

    #[derive(Debug, PartialEq)]
    struct Digits<'a>(&'a str);

    impl<'a> ReadableText<'a, NomError<Span<'a>>> for Digits<'a> {
        fn from_text(buf: Span<'a>) -> IResult<Span<'a>, Self, NomError<Span<'a>>> {
            let (buf, digits) = digit1(buf)?;
            Ok((buf, Digits(digits)))
        }
    }

    #[test]
    fn test_parse_complete() {
        assert_eq!(
            parse_complete::<Digits<'_>, NomError<Span<'_>>>("123"),
            Ok(Digits("123"))
        );
        assert_eq!(
            parse_complete::<Digits<'_>, NomError<Span<'_>>>("123ab"),
            Err(CompleteParsingError::TrailingInput("ab"))
        );
        assert!(matches!(
            parse_complete::<Digits<'_>, NomError<Span<'_>>>("ab"),
            Err(CompleteParsingError::Parser(_))
        ));
    }

    #[test]
    fn test_span_offset() {
        let input = "  P1D";
        assert_eq!(span_offset(input, &input[2..]), 2);
        assert_eq!(span_offset(input, &input[input.len()..]), input.len());
    }
}
