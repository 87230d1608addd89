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

//! Serialize/Deserialize the text form of NX-API values, and the `serde`
//! hooks built on top of them.

pub mod deserializer;
pub mod serializer;

mod serde_hooks;

#[cfg(test)]
mod tests;

/// Text nodes of XML responses carry surrounding white space, it's never
/// part of a value.
#[inline]
pub(crate) fn trim_value(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
}
