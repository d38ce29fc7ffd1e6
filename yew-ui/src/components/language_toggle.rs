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


use codarise_core::Locale;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::context::LocaleCtx;

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let Some(locale) = use_context::<LocaleCtx>() else {
        log::error!("LanguageToggle rendered outside LocaleProvider");
        return html! {};
    };

    let onchange = {
        let set_locale = locale.set_locale.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            match select.value().parse::<Locale>() {
                Ok(next) => set_locale.emit(next),
                Err(err) => log::warn!("ignoring language choice: {err}"),
            }
        })
    };

    html! {
        <select
            class="language-toggle"
            aria-label={locale.t("language.label")}
            {onchange}
        >
            { for Locale::ALL.into_iter().map(|option| html! {
                <option
                    key={option.code()}
                    value={option.code()}
                    selected={option == locale.locale}
                >
                    { option.label() }
                </option>
            }) }
        </select>
    }
}
