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

//! Various functions used in testing the correctness of
//! serializing/deserializing text encoded values

use crate::{ReadableText, ReadableTextWithOneInput, Span, WritableText};
use nom::IResult;
use std::fmt::Debug;

/// Assert with more meaningful error messages
pub fn test_parsed_completely<'a, T, E>(input: &'a str, expected: &T) -> T
where
    T: ReadableText<'a, E> + PartialEq + Debug,
    E: Debug,
{
    let parsed = <T as ReadableText<E>>::from_text(input);
    assert!(
        parsed.is_ok(),
        "Value failed parsing, while expecting it to pass.\n\tExpected : {expected:?}\n\tParsed: {parsed:?}"
    );
    let (span, value) = parsed.unwrap();
    assert_eq!(&value, expected);
    assert_eq!(
        span.len(),
        0,
        "Not all the input is consumed by the parser, didn't consume: {span:?}",
    );
    value
}

/// Assert with more meaningful error messages
pub fn test_parsed_completely_with_one_input<'a, T, I, E>(
    input: &'a str,
    parser_input: I,
    expected: &T,
) -> T
where
    T: ReadableTextWithOneInput<'a, I, E> + PartialEq + Debug,
    E: Debug,
{
    let parsed = <T as ReadableTextWithOneInput<I, E>>::from_text(input, parser_input);
    assert!(
        parsed.is_ok(),
        "Value failed parsing, while expecting it to pass.\n\tExpected : {expected:?}\n\tParsed: {parsed:?}"
    );
    let (span, value) = parsed.unwrap();
    assert_eq!(&value, expected);
    assert_eq!(
        span.len(),
        0,
        "Not all the input is consumed by the parser, didn't consume: {span:?}",
    );
    value
}

/// Assert with more meaningful error messages
pub fn test_parse_error<'a, T, E>(input: &'a str, expected_err: &E)
where
    T: ReadableText<'a, E> + Debug,
    E: Debug + PartialEq,
{
    let parsed: IResult<Span<'a>, T, E> = <T as ReadableText<E>>::from_text(input);
    assert!(
        parsed.is_err(),
        "Value was parsed, while expecting it to fail.\n\tExpected : {expected_err:?}\n\tParsed: {parsed:?}"
    );

    if let Err(nom::Err::Error(parsed_error)) = parsed {
        assert_eq!(&parsed_error, expected_err);
    } else {
        panic!(
            "Expected the test to fail with Err(nom::Err:Err(x)) but it didn't. Got {parsed:?} instead"
        );
    }
}

/// Assert with more meaningful error messages
pub fn test_parse_error_with_one_input<'a, T, I, E>(
    input: &'a str,
    parser_input: I,
    expected_err: &E,
) where
    T: ReadableTextWithOneInput<'a, I, E> + Debug,
    E: Debug + PartialEq,
{
    let parsed: IResult<Span<'a>, T, E> =
        <T as ReadableTextWithOneInput<I, E>>::from_text(input, parser_input);
    assert!(
        parsed.is_err(),
        "Value was parsed, while expecting it to fail.\n\tExpected : {expected_err:?}\n\tParsed: {parsed:?}"
    );

    if let Err(nom::Err::Error(parsed_error)) = parsed {
        assert_eq!(&parsed_error, expected_err);
    } else {
        panic!(
            "Expected the test to fail with Err(nom::Err:Err(x)) but it didn't. Got {parsed:?} instead"
        );
    }
}

pub fn test_write<T: WritableText<E>, E: Eq>(input: &T, expected: &str) -> Result<(), E> {
    let mut buf = String::new();
    input.write(&mut buf)?;
    assert_eq!(
        buf, expected,
        "Serialized text is different from the expected one"
    );
    assert_eq!(
        input.len(),
        expected.len(),
        "Value::len() is different from the serialized text length"
    );
    Ok(())
}
