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

use log::trace;

use super::{
    enums::Dialect,
    helper_constants::{CANONICAL_LENGTH, CANONICAL_PREFIX, PLUS_SIGN, SUBSCRIBER_LENGTH},
    helper_functions::{convert_to_canonical, truncate_to_cap},
};
use crate::string_util::{last_n, phone_digits};

/// Result of one normalization pass. Recomputed from scratch on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedNumber {
    /// Current digit state: canonical `380XXXXXXXXX` or the dialect the user
    /// is still typing in (`0XXXXXXXXX`, `80XXXXXXXXX`, bare subscriber, ...).
    pub digits: String,
    /// `+380XXXXXXXXX`, or empty while the number is incomplete.
    pub e164: String,
    /// Last 9 digits, or empty if fewer than 9 digits are present.
    pub last9: String,
    /// Complete canonical number.
    pub valid: bool,
}

impl NormalizedNumber {
    pub fn dialect(&self) -> Dialect {
        Dialect::classify(&self.digits)
    }

    /// Whether `digits` is already in the "380" dialect, complete or not.
    pub fn is_canonical(&self) -> bool {
        self.digits.starts_with(CANONICAL_PREFIX)
    }
}

/// Normalizes arbitrary text into a [`NormalizedNumber`].
///
/// Never fails: noise is stripped and anything unparseable ends up as an
/// incomplete, invalid result. Digits are capped by dialect *before* the
/// conversion to "380" so that fast typing or a long paste never grows past
/// the point where its prefix becomes ambiguous.
pub fn normalize(raw: &str) -> NormalizedNumber {
    let mut digits = phone_digits(raw);

    truncate_to_cap(&mut digits);
    convert_to_canonical(&mut digits);

    let valid = digits.starts_with(CANONICAL_PREFIX) && digits.len() == CANONICAL_LENGTH;
    let e164 = if valid {
        fast_cat::concat_str!(PLUS_SIGN, digits.as_str())
    } else {
        String::new()
    };
    let last9 = last_n(&digits, SUBSCRIBER_LENGTH)
        .map(str::to_owned)
        .unwrap_or_default();

    trace!("Normalized {:?} into {:?} (valid: {})", raw, digits, valid);
    NormalizedNumber { digits, e164, last9, valid }
}
