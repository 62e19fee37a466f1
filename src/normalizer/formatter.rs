// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helper_constants::{CANONICAL_PREFIX, PLUS_SIGN, PRETTY_GROUPS, PRETTY_LENGTH};
use crate::string_util::slice_clamped;

/// Pretty form of a canonical number: `+380 AA BBB CC DD`.
///
/// Groups that are not typed yet are omitted, so `"38097"` gives `"+380 97"`.
/// Returns an empty string if `digits380` is not in the "380" dialect.
pub fn format_pretty_ua(digits380: &str) -> String {
    let Some(subscriber) = digits380.strip_prefix(CANONICAL_PREFIX) else {
        return String::new();
    };

    let mut out = String::with_capacity(PRETTY_LENGTH);
    out.push_str(PLUS_SIGN);
    out.push_str(CANONICAL_PREFIX);

    let mut start = 0;
    for group_len in PRETTY_GROUPS {
        let group = slice_clamped(subscriber, start, start + group_len);
        if !group.is_empty() {
            out.push(' ');
            out.push_str(group);
        }
        start += group_len;
    }
    out
}
