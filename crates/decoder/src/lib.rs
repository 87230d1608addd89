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

//! NX-API Decoder Library
//!
//! Decodes NX-API duration or timestamp texts, one per line, and writes a
//! JSON Lines record for each of them.

use nxapi_types::{Duration, TimeStamp};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

/// The codec applied to every input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Duration,
    TimeStamp,
}

/// Configuration for decoding a token file
#[derive(Debug, Clone)]
pub struct Config {
    /// Read from stdin when not set
    pub input_path: Option<PathBuf>,
    /// Write to stdout when not set
    pub output_path: Option<PathBuf>,
    pub kind: TokenKind,
    /// Stop at the first malformed token
    pub strict: bool,
}

/// One JSON Lines output record, `line` is the 1-based input line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DecodedRecord {
    Duration {
        line: usize,
        input: String,
        nanos: u64,
        canonical: String,
    },
    TimeStamp {
        line: usize,
        input: String,
        unix: i64,
        canonical: String,
    },
    Error {
        line: usize,
        input: String,
        error: String,
    },
}

impl DecodedRecord {
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("failed to open `{}`: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to create output file `{}`: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {error}")]
    Malformed { line: usize, error: String },
}

/// Counters of a decoding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    pub decoded: usize,
    pub failed: usize,
}

/// Decode a single, already trimmed, token
pub fn decode_token(kind: TokenKind, line: usize, token: &str) -> DecodedRecord {
    let input = token.to_string();
    match kind {
        TokenKind::Duration => match token.parse::<Duration>() {
            Ok(value) => DecodedRecord::Duration {
                line,
                input,
                nanos: value.as_nanos(),
                canonical: value.to_string(),
            },
            Err(err) => DecodedRecord::Error {
                line,
                input,
                error: err.to_string(),
            },
        },
        TokenKind::TimeStamp => match token.parse::<TimeStamp>() {
            Ok(value) => DecodedRecord::TimeStamp {
                line,
                input,
                unix: value.unix_timestamp(),
                canonical: value.to_string(),
            },
            Err(err) => DecodedRecord::Error {
                line,
                input,
                error: err.to_string(),
            },
        },
    }
}

#[inline]
fn trim_token(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Decode every non blank line of `reader` and write the records to
/// `writer`. A line that isn't valid UTF-8 gets an error record like any
/// other malformed token. In strict mode the record of the first malformed
/// token is still written before returning [`DecoderError::Malformed`].
pub fn decode_tokens<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    kind: TokenKind,
    strict: bool,
) -> Result<DecodeSummary, DecoderError> {
    let mut summary = DecodeSummary::default();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line_number = index + 1;
        let record = match std::str::from_utf8(&line) {
            Ok(text) => {
                let token = trim_token(text);
                if token.is_empty() {
                    continue;
                }
                decode_token(kind, line_number, token)
            }
            Err(err) => DecodedRecord::Error {
                line: line_number,
                input: trim_token(&String::from_utf8_lossy(&line)).to_string(),
                error: format!("line is not valid UTF-8: {err}"),
            },
        };
        serde_json::to_writer(&mut *writer, &record)?;
        writer.write_all(b"\n")?;
        if let DecodedRecord::Error { error, .. } = record {
            summary.failed += 1;
            tracing::debug!("line {line_number}: {error}");
            if strict {
                writer.flush()?;
                return Err(DecoderError::Malformed {
                    line: line_number,
                    error,
                });
            }
        } else {
            summary.decoded += 1;
        }
    }
    writer.flush()?;
    Ok(summary)
}

/// Open the input and output named by `config` and decode all the tokens.
pub fn load_and_decode(config: &Config) -> Result<DecodeSummary, DecoderError> {
    let reader: Box<dyn BufRead> = match &config.input_path {
        Some(path) => {
            let file = File::open(path).map_err(|source| DecoderError::Open {
                path: path.clone(),
                source,
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut writer: Box<dyn Write> = match &config.output_path {
        Some(path) => {
            let file = File::create(path).map_err(|source| DecoderError::Create {
                path: path.clone(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let summary = decode_tokens(reader, &mut writer, config.kind, config.strict)?;
    tracing::info!(
        "decoded {} value(s), {} malformed",
        summary.decoded,
        summary.failed
    );
    Ok(summary)
}
