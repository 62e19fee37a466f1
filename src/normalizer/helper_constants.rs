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

// Prefix of the canonical international dialect (country calling code).
pub const CANONICAL_PREFIX: &str = "380";
pub const NATIONAL_TRUNK_PREFIX: &str = "0";
pub const LEGACY_EIGHTY_PREFIX: &str = "80";
pub const LONG_DISTANCE_PREFIX: &str = "8";

pub const PLUS_SIGN: &str = "+";

/// Digits in a complete canonical number: "380" + 9 subscriber digits.
pub const CANONICAL_LENGTH: usize = 12;
/// Digits of the subscriber part (operator/area code + local number).
pub const SUBSCRIBER_LENGTH: usize = 9;

pub const NATIONAL_TRUNK_CAP: usize = 10;
pub const LEGACY_EIGHTY_CAP: usize = 11;
pub const LONG_DISTANCE_CAP: usize = 11;

/// Grouping of the 9 subscriber digits in the pretty form: "+380 AA BBB CC DD".
pub const PRETTY_GROUPS: [usize; 4] = [2, 3, 2, 2];

/// Length of a complete pretty form, e.g. "+380 97 878 80 99".
pub const PRETTY_LENGTH: usize = 17;
