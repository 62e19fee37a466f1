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

use std::borrow::Cow;

use crate::{
    normalizer::{format_pretty_ua, helper_constants::PLUS_SIGN, NormalizedNumber},
    string_util::{fold_decimals, strip_to_phone_chars},
};

/// Switches of [`render_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderFlags {
    /// The raw input started with `+`; keep it visible.
    pub show_plus_hint: bool,
    /// Finalization pass (blur, submit): pretty-print whatever is canonical.
    pub force_pretty: bool,
}

impl RenderFlags {
    pub fn for_raw(raw: &str, force_pretty: bool) -> Self {
        Self {
            show_plus_hint: raw.trim_start().starts_with('+'),
            force_pretty,
        }
    }
}

/// Chooses the visible text for a normalization result.
///
/// * forced and canonical: pretty form;
/// * canonical: `+` and the digits while incomplete, pretty form once valid;
/// * otherwise: `+` and the digits if the user typed a plus, else the raw
///   text with everything but digits and `+` removed.
pub fn render_value<'a>(norm: &NormalizedNumber, raw: &'a str, flags: RenderFlags) -> Cow<'a, str> {
    if norm.is_canonical() {
        if flags.force_pretty || norm.valid {
            return Cow::Owned(format_pretty_ua(&norm.digits));
        }
        return Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, norm.digits.as_str()));
    }
    if flags.show_plus_hint {
        return Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, norm.digits.as_str()));
    }
    match fold_decimals(raw) {
        Cow::Borrowed(raw) => strip_to_phone_chars(raw),
        Cow::Owned(folded) => Cow::Owned(strip_to_phone_chars(&folded).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_value, RenderFlags};
    use crate::normalizer::normalize;

    fn render(raw: &str, force_pretty: bool) -> String {
        let norm = normalize(raw);
        render_value(&norm, raw, RenderFlags::for_raw(raw, force_pretty)).into_owned()
    }

    #[test]
    fn test_compact_while_incomplete() {
        assert_eq!(render("38097", false), "+38097");
        assert_eq!(render("050 12", false), "05012");
        assert_eq!(render("+050", false), "+050");
        assert_eq!(render(" +0 5", false), "+05");
    }

    #[test]
    fn test_pretty_when_complete_or_forced() {
        assert_eq!(render("0971234567", false), "+380 97 123 45 67");
        assert_eq!(render("38097", true), "+380 97");
        // forcing does not touch numbers outside the canonical dialect
        assert_eq!(render("0971", true), "0971");
    }
}
