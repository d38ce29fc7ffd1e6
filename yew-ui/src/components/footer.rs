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


use codarise_core::spy::DEFAULT_SECTIONS;
use yew::prelude::*;

use crate::components::navigation::nav_label_key;
use crate::context::LocaleCtx;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let Some(locale) = use_context::<LocaleCtx>() else {
        return html! {};
    };
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="nav-logo" aria-hidden="true">{"</>"}</span>
                <span>{ locale.t("nav.brand") }</span>
            </div>
            <p class="footer-tagline">{ locale.t("footer.tagline") }</p>
            <ul class="footer-links">
                { for DEFAULT_SECTIONS.into_iter().map(|id| {
                    let on_navigate = props.on_navigate.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(id.to_string());
                    });
                    html! {
                        <li key={id}>
                            <a href={format!("#{id}")} {onclick}>{ locale.t(&nav_label_key(id)) }</a>
                        </li>
                    }
                }) }
            </ul>
            <p class="footer-copyright">
                { format!("\u{00A9} {year} {}. {}", locale.t("nav.brand"), locale.t("footer.rights")) }
            </p>
        </footer>
    }
}
