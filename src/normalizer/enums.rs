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

use strum::EnumIter;

use super::helper_constants::{
    CANONICAL_LENGTH, CANONICAL_PREFIX, LEGACY_EIGHTY_CAP, LEGACY_EIGHTY_PREFIX,
    LONG_DISTANCE_CAP, LONG_DISTANCE_PREFIX, NATIONAL_TRUNK_CAP, NATIONAL_TRUNK_PREFIX,
    SUBSCRIBER_LENGTH,
};

/// Input style a user may start typing a Ukrainian number in.
///
/// Classification goes from the most specific prefix to the least one, so
/// `"80…"` is [`Dialect::LegacyEighty`] even though it also starts with `"8"`.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// **Canonical international form.**
    /// Example: `380971234567`.
    International,
    /// **National form with trunk prefix 0.**
    /// Example: `0971234567`.
    NationalTrunk,
    /// **Legacy "80" form**, the international form without the leading 3.
    /// Example: `80971234567`.
    LegacyEighty,
    /// **Older long-distance form** starting with 8 (but not 80).
    /// Example: `8971234567`.
    LongDistance,
    /// **Bare subscriber number** without any recognized prefix.
    /// Example: `971234567`.
    Subscriber,
}

impl Dialect {
    pub fn classify(digits: &str) -> Self {
        if digits.starts_with(CANONICAL_PREFIX) {
            Dialect::International
        } else if digits.starts_with(NATIONAL_TRUNK_PREFIX) {
            Dialect::NationalTrunk
        } else if digits.starts_with(LEGACY_EIGHTY_PREFIX) {
            Dialect::LegacyEighty
        } else if digits.starts_with(LONG_DISTANCE_PREFIX) {
            Dialect::LongDistance
        } else {
            Dialect::Subscriber
        }
    }

    /// Maximum number of digits accepted while the input is in this dialect.
    pub fn cap(self) -> usize {
        match self {
            Dialect::International => CANONICAL_LENGTH,
            Dialect::NationalTrunk => NATIONAL_TRUNK_CAP,
            Dialect::LegacyEighty => LEGACY_EIGHTY_CAP,
            Dialect::LongDistance => LONG_DISTANCE_CAP,
            Dialect::Subscriber => SUBSCRIBER_LENGTH,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Dialect::International => CANONICAL_PREFIX,
            Dialect::NationalTrunk => NATIONAL_TRUNK_PREFIX,
            Dialect::LegacyEighty => LEGACY_EIGHTY_PREFIX,
            Dialect::LongDistance => LONG_DISTANCE_PREFIX,
            Dialect::Subscriber => "",
        }
    }
}
