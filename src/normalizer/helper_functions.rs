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

use super::{
    enums::Dialect,
    helper_constants::{CANONICAL_LENGTH, CANONICAL_PREFIX, SUBSCRIBER_LENGTH},
};
use crate::string_util::last_n;

/// Returns the digit cap of the dialect `digits` is typed in.
///
/// This is the single cap table shared by the normalizer and by the
/// pre-insertion check of the edit session.
pub fn cap_for(digits: &str) -> usize {
    Dialect::classify(digits).cap()
}

/// Truncates `digits` to the cap of its own dialect.
pub(super) fn truncate_to_cap(digits: &mut String) {
    let cap = cap_for(digits);
    if digits.len() > cap {
        digits.truncate(cap);
    }
}

/// Rewrites `digits` into the canonical "380" dialect once the input has
/// exactly the length that makes its dialect unambiguous. Shorter (or
/// otherwise unexpected) input is left as typed.
pub(super) fn convert_to_canonical(digits: &mut String) {
    let converted = match (Dialect::classify(digits), digits.len()) {
        (Dialect::International, _) => None,
        // 0XXXXXXXXX -> 380XXXXXXXXX
        (Dialect::NationalTrunk, 10) => Some(prepend_canonical(&digits[1..])),
        // 80XXXXXXXXX -> 380XXXXXXXXX
        (Dialect::LegacyEighty, 11) => Some(fast_cat::concat_str!("3", digits.as_str())),
        // 8XXXXXXXXX -> 380XXXXXXXXX
        (Dialect::LongDistance, 10) => Some(prepend_canonical(&digits[1..])),
        // 8XXXXXXXXXX keeps only the trailing subscriber digits.
        (Dialect::LongDistance, 11) => last_n(digits, SUBSCRIBER_LENGTH).map(prepend_canonical),
        (Dialect::Subscriber, SUBSCRIBER_LENGTH) => Some(prepend_canonical(digits)),
        _ => None,
    };
    if let Some(converted) = converted {
        *digits = converted;
    }

    if digits.starts_with(CANONICAL_PREFIX) && digits.len() > CANONICAL_LENGTH {
        digits.truncate(CANONICAL_LENGTH);
    }
}

fn prepend_canonical(subscriber: &str) -> String {
    fast_cat::concat_str!(CANONICAL_PREFIX, subscriber)
}
