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


use yew::prelude::*;

use crate::context::LocaleCtx;

/// `(translation key, icon)` for each service card.
const SERVICES: [(&str, &str); 4] = [
    ("web", "\u{1F310}"),
    ("mobile", "\u{1F4F1}"),
    ("design", "\u{1F3A8}"),
    ("custom", "\u{2699}"),
];

#[function_component(Services)]
pub fn services() -> Html {
    let Some(locale) = use_context::<LocaleCtx>() else {
        return html! {};
    };

    html! {
        <section id="services" class="section services">
            <div class="section-header">
                <h2 class="section-title">{ locale.t("services.title") }</h2>
                <p class="section-subtitle">{ locale.t("services.subtitle") }</p>
            </div>
            <div class="card-grid">
                { for SERVICES.into_iter().map(|(key, icon)| html! {
                    <article key={key} class="card service-card">
                        <span class="card-icon" aria-hidden="true">{ icon }</span>
                        <h3 class="card-title">{ locale.t(&format!("services.{key}.title")) }</h3>
                        <p class="card-desc">{ locale.t(&format!("services.{key}.desc")) }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}
