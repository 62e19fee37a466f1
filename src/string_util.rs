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

/// Folds every unicode decimal digit (full-width, arabic-indic, ...) into
/// its ASCII counterpart. Returns borrowed input when there is nothing to fold.
pub fn fold_decimals(raw: &str) -> Cow<'_, str> {
    if raw.chars().all(|c| c.is_ascii() || !c.is_numeric()) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(dec_from_char::normalize_decimals(raw).to_string())
}

/// Keeps only ASCII digits and `+` signs.
///
/// Returns `Cow::Borrowed` if nothing had to be removed, so callers
/// comparing against the field value can skip an allocation.
pub fn strip_to_phone_chars(raw: &str) -> Cow<'_, str> {
    if raw.chars().all(is_phone_char) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.chars().filter(|c| is_phone_char(*c)).collect())
}

/// Collapses all `+` signs into at most one, kept only if the stripped
/// string started with one.
pub fn collapse_plus_signs(stripped: Cow<'_, str>) -> Cow<'_, str> {
    let leading = stripped.starts_with('+');
    let plus_count = stripped.matches('+').count();
    if plus_count == 0 || (leading && plus_count == 1) {
        return stripped;
    }
    let mut out = String::with_capacity(stripped.len());
    if leading {
        out.push('+');
    }
    out.extend(stripped.chars().filter(|c| c.is_ascii_digit()));
    Cow::Owned(out)
}

/// Extracts ASCII digits only.
pub fn ascii_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digits of arbitrary phone input, unicode decimals folded to ASCII.
///
/// Every place that counts digits against a cap goes through here, so the
/// edit session and the normalizer always agree on the count.
pub fn phone_digits(raw: &str) -> String {
    let folded = fold_decimals(raw);
    let cleaned = collapse_plus_signs(strip_to_phone_chars(&folded));
    ascii_digits(&cleaned)
}

/// Returns the last `n` chars of an ASCII string, or `None` if it is shorter.
pub fn last_n(s: &str, n: usize) -> Option<&str> {
    if s.len() < n {
        return None;
    }
    s.get(s.len() - n..)
}

/// Byte-safe `[start, end)` slice of an ASCII string clamped to its length,
/// behaves like `String.prototype.slice` for non-negative bounds.
pub fn slice_clamped(s: &str, start: usize, end: usize) -> &str {
    let end = end.min(s.len());
    let start = start.min(end);
    s.get(start..end).unwrap_or_default()
}

/// Replaces the chars in `[sel_start, sel_end)` of `current` with `incoming`.
/// Selection offsets are char offsets and are clamped to the text.
pub fn splice_chars(current: &str, sel_start: usize, sel_end: usize, incoming: &str) -> String {
    let char_len = current.chars().count();
    let end = sel_end.min(char_len);
    let start = sel_start.min(end);
    let start_byte = byte_offset(current, start);
    let end_byte = byte_offset(current, end);

    fast_cat::concat_str!(&current[..start_byte], incoming, &current[end_byte..])
}

fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || c == '+'
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{
        collapse_plus_signs, fold_decimals, last_n, phone_digits, slice_clamped, splice_chars,
        strip_to_phone_chars,
    };

    #[test]
    fn test_strip_borrows_when_clean() {
        assert!(matches!(strip_to_phone_chars("+380501234567"), Cow::Borrowed(_)));
        assert_eq!(strip_to_phone_chars("+38 (050) 123-45-67"), "+380501234567");
    }

    #[test]
    fn test_collapse_plus_signs() {
        assert_eq!(collapse_plus_signs(Cow::Borrowed("++380")), "+380");
        assert_eq!(collapse_plus_signs(Cow::Borrowed("38+0+")), "380");
        assert_eq!(collapse_plus_signs(Cow::Borrowed("+3+8+0")), "+380");
        assert_eq!(collapse_plus_signs(Cow::Borrowed("380")), "380");
    }

    #[test]
    fn test_fold_decimals() {
        assert_eq!(fold_decimals("０５０"), "050");
        assert!(matches!(fold_decimals("050 x"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_phone_digits_counts_unicode_decimals() {
        assert_eq!(phone_digits("+38 (０９７) 12-3"), "38097123");
        assert_eq!(phone_digits("５"), "5");
        assert_eq!(phone_digits("abc+"), "");
    }

    #[test]
    fn test_slicing_helpers() {
        assert_eq!(last_n("380501234567", 9), Some("501234567"));
        assert_eq!(last_n("12345678", 9), None);
        assert_eq!(slice_clamped("97123", 2, 5), "123");
        assert_eq!(slice_clamped("97", 2, 5), "");
        assert_eq!(slice_clamped("971", 2, 5), "1");
    }

    #[test]
    fn test_splice_chars() {
        assert_eq!(splice_chars("050", 3, 3, "1"), "0501");
        assert_eq!(splice_chars("050999", 3, 6, "12"), "05012");
        assert_eq!(splice_chars("абв", 1, 2, "1"), "а1в");
        assert_eq!(splice_chars("05", 10, 12, "0"), "050");
    }
}
