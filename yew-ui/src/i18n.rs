// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundled translation catalogs.

use codarise_core::{Catalog, Locale, Translator};

const EN_JSON: &str = include_str!("../locales/en.json");
const AR_JSON: &str = include_str!("../locales/ar.json");

fn catalog_json(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_JSON,
        Locale::Ar => AR_JSON,
    }
}

fn load_catalog(locale: Locale) -> Catalog {
    Catalog::from_json(catalog_json(locale)).unwrap_or_else(|e| {
        log::error!("bundled {locale} catalog is broken: {e}");
        Catalog::default()
    })
}

/// Translator for `locale` with English as the fallback.
pub fn translator_for(locale: Locale) -> Translator {
    let fallback = load_catalog(Locale::En);
    let primary = if locale == Locale::En {
        fallback.clone()
    } else {
        load_catalog(locale)
    };
    let missing = fallback.missing_in(&primary);
    if !missing.is_empty() {
        log::debug!("{locale}: {} untranslated keys: {missing:?}", missing.len());
    }
    Translator::new(locale, primary, fallback)
}
