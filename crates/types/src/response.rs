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

//! The `ins_api` envelope wrapping every NX-API `cli_show` answer
//!
//! ```text
//! {
//!   "ins_api": {
//!     "outputs": {
//!       "output": { "body": {...}, "code": "200", "input": "show ...", "msg": "Success" }
//!     },
//!     "sid": "eoc",
//!     "type": "cli_show",
//!     "version": "1.0"
//!   }
//! }
//! ```
//!
//! The body is specific to each command and is left to the caller as the
//! type parameter `B`. NX-API encodes a `TABLE_x`/`ROW_x` holding a single
//! entry as an object rather than a one element list, body types should read
//! those fields with `serde_with::OneOrMany`.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{io, str::FromStr};

pub const SUCCESS_CODE: &str = "200";

#[derive(Debug, thiserror::Error)]
pub enum ResponseParsingError {
    #[error("invalid NX-API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("NX-API command `{input}` failed with code {code}: {msg}")]
    CommandFailed {
        input: String,
        code: String,
        msg: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsApiResponse<B> {
    pub ins_api: InsApi<B>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsApi<B> {
    pub outputs: InsApiOutputs<B>,
    pub sid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsApiOutputs<B> {
    pub output: InsApiOutput<B>,
}

/// Result of a single command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsApiOutput<B> {
    pub body: B,
    pub code: String,
    pub input: String,
    pub msg: String,
}

fn log_failure<T>(result: Result<T, serde_json::Error>) -> Result<T, ResponseParsingError> {
    result.map_err(|err| {
        tracing::debug!("decoding NX-API response failed: {err}");
        ResponseParsingError::Json(err)
    })
}

impl<B> InsApiResponse<B> {
    pub const fn output(&self) -> &InsApiOutput<B> {
        &self.ins_api.outputs.output
    }

    pub const fn body(&self) -> &B {
        &self.ins_api.outputs.output.body
    }

    pub fn into_body(self) -> B {
        self.ins_api.outputs.output.body
    }

    /// The body of a successful command, the command's failure otherwise
    pub fn into_success_body(self) -> Result<B, ResponseParsingError> {
        self.ins_api.outputs.output.into_success_body()
    }
}

impl<B: DeserializeOwned> InsApiResponse<B> {
    pub fn from_slice(value: &[u8]) -> Result<Self, ResponseParsingError> {
        log_failure(serde_json::from_slice(value))
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ResponseParsingError> {
        log_failure(serde_json::from_reader(reader))
    }
}

impl<B: DeserializeOwned> FromStr for InsApiResponse<B> {
    type Err = ResponseParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        log_failure(serde_json::from_str(s))
    }
}

impl<B> InsApiOutput<B> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    pub fn into_success_body(self) -> Result<B, ResponseParsingError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ResponseParsingError::CommandFailed {
                input: self.input,
                code: self.code,
                msg: self.msg,
            })
        }
    }
}

impl<B: DeserializeOwned> InsApiOutput<B> {
    pub fn from_slice(value: &[u8]) -> Result<Self, ResponseParsingError> {
        log_failure(serde_json::from_slice(value))
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ResponseParsingError> {
        log_failure(serde_json::from_reader(reader))
    }
}

impl<B: DeserializeOwned> FromStr for InsApiOutput<B> {
    type Err = ResponseParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        log_failure(serde_json::from_str(s))
    }
}
