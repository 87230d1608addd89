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

#![no_main]
use libfuzzer_sys::fuzz_target;
use nxapi_parse_utils::WritableText;
use nxapi_types::Duration;

fuzz_target!(|value: Duration| {
    let mut buf = String::new();
    let _ = value.write(&mut buf);
    assert_eq!(buf.len(), value.len());
    assert_eq!(buf.parse::<Duration>(), Ok(value.truncate_to_secs()));
});
