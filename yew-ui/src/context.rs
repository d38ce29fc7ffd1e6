// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the page
//!
//! Theme, locale and the shared scroll bus are handed down the component
//! tree through Yew's `ContextProvider` instead of props drilling.

use std::rc::Rc;

use codarise_core::preferences::{LOCALE_STORAGE_KEY, THEME_STORAGE_KEY};
use codarise_core::{Locale, ScrollBus, Theme, Translator};
use yew::prelude::*;

use crate::dom_layout::GlooScheduler;

// -----------------------------------------------------------------------------
// Theme
// -----------------------------------------------------------------------------

#[derive(Clone, PartialEq)]
pub struct ThemeCtx {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

// -----------------------------------------------------------------------------
// Locale
// -----------------------------------------------------------------------------

#[derive(Clone)]
pub struct LocaleCtx {
    pub locale: Locale,
    pub translator: Rc<Translator>,
    pub set_locale: Callback<Locale>,
}

impl LocaleCtx {
    /// Shorthand for `translator.t(key)` returning an owned string for `html!`.
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key).to_string()
    }
}

impl PartialEq for LocaleCtx {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && Rc::ptr_eq(&self.translator, &other.translator)
            && self.set_locale == other.set_locale
    }
}

// -----------------------------------------------------------------------------
// Scroll bus
// -----------------------------------------------------------------------------

/// The page's single scroll publisher. Compared by identity.
#[derive(Clone)]
pub struct ScrollBusCtx(pub Rc<ScrollBus<GlooScheduler>>);

impl PartialEq for ScrollBusCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for ScrollBusCtx {
    type Target = ScrollBus<GlooScheduler>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// -----------------------------------------------------------------------------
// Local-storage helpers
// -----------------------------------------------------------------------------

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw theme string saved by an earlier visit, if any.
pub fn load_theme_from_storage() -> Option<String> {
    storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
}

pub fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Saved locale, ignoring values this build does not know.
pub fn load_locale_from_storage() -> Option<Locale> {
    storage()
        .and_then(|s| s.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .and_then(|code| code.parse().ok())
}

pub fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
    }
}

// -----------------------------------------------------------------------------
// Document root helpers
// -----------------------------------------------------------------------------

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Adds or removes the `dark` class on `<html>`.
pub fn apply_theme_to_document(theme: Theme) {
    if let Some(root) = document_element() {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(e) = result {
            log::warn!("failed to apply theme {theme}: {e:?}");
        }
    }
}

/// Sets `lang` and `dir` on `<html>` so the browser mirrors the layout.
pub fn apply_locale_to_document(locale: Locale) {
    if let Some(root) = document_element() {
        let _ = root.set_attribute("lang", locale.code());
        let _ = root.set_attribute("dir", locale.direction().as_str());
    }
}

/// `prefers-color-scheme: dark` media query, when the browser supports it.
pub fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}
