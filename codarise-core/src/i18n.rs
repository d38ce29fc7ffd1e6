/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Translation catalogs.
//!
//! Catalogs are nested JSON objects flattened into dotted keys, so
//! `{"nav": {"home": "Home"}}` answers `"nav.home"`.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::preferences::Locale;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog root must be an object")]
    NotAnObject,
    #[error("unsupported value at {key:?}: only strings, numbers and objects are allowed")]
    UnsupportedValue { key: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(root) = value else {
            return Err(I18nError::NotAnObject);
        };
        let mut entries = HashMap::new();
        for (key, value) in root {
            flatten(&key, value, &mut entries)?;
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys present in `self` but missing from `other`, sorted.
    pub fn missing_in(&self, other: &Catalog) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .entries
            .keys()
            .filter(|key| !other.entries.contains_key(*key))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }
}

fn flatten(prefix: &str, value: Value, out: &mut HashMap<String, String>) -> Result<(), I18nError> {
    match value {
        Value::String(text) => {
            out.insert(prefix.to_string(), text);
        }
        Value::Number(number) => {
            out.insert(prefix.to_string(), number.to_string());
        }
        Value::Object(map) => {
            for (key, value) in map {
                flatten(&format!("{prefix}.{key}"), value, out)?;
            }
        }
        _ => {
            return Err(I18nError::UnsupportedValue {
                key: prefix.to_string(),
            })
        }
    }
    Ok(())
}

/// Looks keys up in the active locale, then the fallback, then echoes the
/// key so a missing string is visible instead of blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    locale: Locale,
    primary: Catalog,
    fallback: Catalog,
}

impl Translator {
    pub fn new(locale: Locale, primary: Catalog, fallback: Catalog) -> Self {
        Self {
            locale,
            primary,
            fallback,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.primary
            .get(key)
            .or_else(|| self.fallback.get(key))
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"{"nav": {"home": "Home", "about": "About"}, "hero": {"title": "We Rise Through Code"}}"#;
    const AR: &str = r#"{"nav": {"home": "الرئيسية"}}"#;

    #[test]
    fn nested_keys_are_dotted() {
        let catalog = Catalog::from_json(EN).unwrap();
        assert_eq!(catalog.get("nav.home"), Some("Home"));
        assert_eq!(catalog.get("hero.title"), Some("We Rise Through Code"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(matches!(Catalog::from_json("[1, 2]"), Err(I18nError::NotAnObject)));
        assert!(matches!(Catalog::from_json("{"), Err(I18nError::Parse(_))));
    }

    #[test]
    fn arrays_are_rejected_with_their_key() {
        let err = Catalog::from_json(r#"{"team": {"names": ["a"]}}"#).unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedValue { key } if key == "team.names"));
    }

    #[test]
    fn translator_falls_back_to_english_then_key() {
        let translator = Translator::new(
            Locale::Ar,
            Catalog::from_json(AR).unwrap(),
            Catalog::from_json(EN).unwrap(),
        );
        assert_eq!(translator.t("nav.home"), "الرئيسية");
        assert_eq!(translator.t("nav.about"), "About");
        assert_eq!(translator.t("nav.pricing"), "nav.pricing");
    }

    #[test]
    fn reports_untranslated_keys() {
        let en = Catalog::from_json(EN).unwrap();
        let ar = Catalog::from_json(AR).unwrap();
        assert_eq!(en.missing_in(&ar), vec!["hero.title", "nav.about"]);
        assert!(ar.missing_in(&en).is_empty());
    }
}
