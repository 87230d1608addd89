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

mod duration;

use crate::text::trim_value;

#[test]
fn test_trim_value() {
    assert_eq!(trim_value(""), "");
    assert_eq!(trim_value("  \n"), "");
    assert_eq!(trim_value("\n    P7DT12H2M5S\n  "), "P7DT12H2M5S");
    assert_eq!(
        trim_value("\t11/04/2019 22:13:33\r\n"),
        "11/04/2019 22:13:33"
    );
}
