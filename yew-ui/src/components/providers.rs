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


//! Theme and locale providers.
//!
//! Both read the visitor's saved choice from `localStorage` on first render,
//! mirror the current value onto `<html>` and persist explicit changes.

use codarise_core::{Locale, Theme};
use gloo::events::EventListener;
use yew::prelude::*;

use crate::context::{
    apply_locale_to_document, apply_theme_to_document, dark_scheme_query,
    load_locale_from_storage, load_theme_from_storage, save_locale_to_storage,
    save_theme_to_storage, LocaleCtx, ThemeCtx,
};
use crate::i18n::translator_for;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Saved theme wins; otherwise the OS preference, which is also followed
/// live until the visitor toggles explicitly.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state_eq(|| {
        let prefers_dark = dark_scheme_query().is_some_and(|q| q.matches());
        Theme::resolve(load_theme_from_storage().as_deref(), prefers_dark)
    });

    use_effect_with(*theme, |theme| {
        apply_theme_to_document(*theme);
        || ()
    });

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let listener = dark_scheme_query().map(|query| {
                let target = query.clone();
                EventListener::new(&target, "change", move |_| {
                    let saved = load_theme_from_storage();
                    if let Some(next) = Theme::on_system_change(saved.as_deref(), query.matches()) {
                        log::debug!("following system theme: {next}");
                        theme.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle = use_callback(theme.clone(), |_: (), theme| {
        let next = theme.toggled();
        save_theme_to_storage(next);
        theme.set(next);
    });

    let ctx = ThemeCtx {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeCtx> context={ctx}>
            { props.children.clone() }
        </ContextProvider<ThemeCtx>>
    }
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    /// Used when nothing was saved by an earlier visit.
    #[prop_or_default]
    pub default_locale: Locale,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let default_locale = props.default_locale;
    let locale = use_state_eq(|| load_locale_from_storage().unwrap_or(default_locale));
    let translator = use_memo(*locale, |locale| translator_for(*locale));

    use_effect_with(*locale, |locale| {
        apply_locale_to_document(*locale);
        || ()
    });

    let set_locale = use_callback(locale.clone(), |next: Locale, locale| {
        if **locale != next {
            log::info!("switching locale to {next}");
        }
        save_locale_to_storage(next);
        locale.set(next);
    });

    let ctx = LocaleCtx {
        locale: *locale,
        translator,
        set_locale,
    };

    html! {
        <ContextProvider<LocaleCtx> context={ctx}>
            { props.children.clone() }
        </ContextProvider<LocaleCtx>>
    }
}
