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

use crate::context::{LocaleCtx, ThemeCtx};

/// Light/dark switch. The label names the theme a click switches to.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let (Some(theme), Some(locale)) = (use_context::<ThemeCtx>(), use_context::<LocaleCtx>())
    else {
        log::error!("ThemeToggle rendered outside its providers");
        return html! {};
    };

    let label = if theme.theme.is_dark() {
        locale.t("theme.toLight")
    } else {
        locale.t("theme.toDark")
    };
    let icon = if theme.theme.is_dark() { "\u{2600}" } else { "\u{263E}" };
    let onclick = theme.toggle.reform(|_: MouseEvent| ());

    html! {
        <button
            class="theme-toggle"
            data-theme={theme.theme.as_str()}
            aria-label={label.clone()}
            title={label}
            {onclick}
        >
            <span aria-hidden="true">{ icon }</span>
        </button>
    }
}
