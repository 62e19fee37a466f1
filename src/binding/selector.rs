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

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use super::errors::SelectorError;

/// `tag#id[attr][attr="value"]`, every part optional.
static COMPOUND_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<tag>[A-Za-z][A-Za-z0-9-]*)?(?:#(?P<id>[A-Za-z0-9_-]+))?(?P<attrs>(?:\[[A-Za-z0-9_-]+(?:=(?:"[^"]*"|'[^']*'))?\])*)$"#,
    )
    .expect("Compound selector regex must be valid")
});

static ATTRIBUTE_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[(?P<name>[A-Za-z0-9_-]+)(?:=(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'))?\]"#)
        .expect("Attribute selector regex must be valid")
});

/// Subset of CSS selectors sufficient to locate phone fields: a tag, an id
/// and attribute presence/equality tests, optionally as a comma list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<CompoundSelector>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompoundSelector {
    tag: Option<String>,
    id: Option<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let alternatives = selector
            .split(',')
            .map(str::trim)
            .map(CompoundSelector::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { alternatives })
    }

    pub fn matches(&self, tag: &str, attributes: &HashMap<String, String>) -> bool {
        self.alternatives.iter().any(|alt| alt.matches(tag, attributes))
    }
}

impl CompoundSelector {
    fn parse(selector: &str) -> Result<Self, SelectorError> {
        if selector.is_empty() {
            return Err(SelectorError::Empty);
        }
        let captures = COMPOUND_SELECTOR
            .captures(selector)
            .ok_or_else(|| SelectorError::Unsupported(selector.to_owned()))?;

        let attributes: Vec<(String, Option<String>)> = captures
            .name("attrs")
            .map(|attrs| {
                ATTRIBUTE_SELECTOR
                    .captures_iter(attrs.as_str())
                    .map(|attr| {
                        let value = attr.name("dq").or_else(|| attr.name("sq"));
                        (attr["name"].to_owned(), value.map(|v| v.as_str().to_owned()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            tag: captures.name("tag").map(|m| m.as_str().to_ascii_lowercase()),
            id: captures.name("id").map(|m| m.as_str().to_owned()),
            attributes,
        })
    }

    fn matches(&self, tag: &str, attributes: &HashMap<String, String>) -> bool {
        if self.tag.as_deref().is_some_and(|t| !t.eq_ignore_ascii_case(tag)) {
            return false;
        }
        if let Some(id) = &self.id {
            if attributes.get("id") != Some(id) {
                return false;
            }
        }
        self.attributes.iter().all(|(name, expected)| match (attributes.get(name), expected) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Selector;
    use crate::binding::errors::SelectorError;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_id_and_attribute_selectors() {
        let phone = attrs(&[("id", "phone"), ("data-phone", ""), ("name", "phone")]);
        let other = attrs(&[("id", "email"), ("name", "email")]);

        let by_id = Selector::parse("#phone").unwrap();
        assert!(by_id.matches("input", &phone));
        assert!(!by_id.matches("input", &other));

        let by_marker = Selector::parse("input[data-phone]").unwrap();
        assert!(by_marker.matches("INPUT", &phone));
        assert!(!by_marker.matches("textarea", &phone));
        assert!(!by_marker.matches("input", &other));

        let by_name = Selector::parse(r#"[name="email"], [name='phone']"#).unwrap();
        assert!(by_name.matches("input", &phone));
        assert!(by_name.matches("input", &other));
    }

    #[test]
    fn test_unsupported_selectors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("#a,"), Err(SelectorError::Empty));
        assert!(matches!(
            Selector::parse("form > input"),
            Err(SelectorError::Unsupported(_))
        ));
    }
}
