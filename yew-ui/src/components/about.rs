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

use crate::components::timeline::Timeline;
use crate::context::LocaleCtx;

#[function_component(About)]
pub fn about() -> Html {
    let Some(locale) = use_context::<LocaleCtx>() else {
        return html! {};
    };

    html! {
        <section id="about" class="section about">
            <div class="section-header">
                <h2 class="section-title">{ locale.t("about.title") }</h2>
                <p class="section-subtitle">{ locale.t("about.subtitle") }</p>
            </div>
            <Timeline />
        </section>
    }
}
