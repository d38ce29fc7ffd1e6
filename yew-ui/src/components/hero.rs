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


//! Landing section with the typewriter headline.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::context::LocaleCtx;

/// Delay between typed characters.
pub const TYPE_INTERVAL_MS: u32 = 80;

/// First `count` characters of `text`, counted as chars so multi-byte
/// scripts are never split.
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let locale = use_context::<LocaleCtx>();
    let title = locale
        .as_ref()
        .map(|locale| locale.t("hero.title"))
        .unwrap_or_default();
    let typed = use_state_eq(|| 0usize);

    {
        let typed = typed.clone();
        use_effect_with(title.clone(), move |title| {
            let total = title.chars().count();
            typed.set(0);

            let count = Rc::new(Cell::new(0usize));
            let interval = Interval::new(TYPE_INTERVAL_MS, move || {
                if count.get() < total {
                    count.set(count.get() + 1);
                    typed.set(count.get());
                }
            });

            // Restarts from the first character when the locale changes.
            move || drop(interval)
        });
    }

    let Some(locale) = locale else {
        log::error!("Hero rendered outside LocaleProvider");
        return html! {};
    };
    let done = *typed >= title.chars().count();
    let to = |id: &'static str| {
        props
            .on_navigate
            .reform(move |_: MouseEvent| id.to_string())
    };

    html! {
        <section id="hero" class="section hero">
            <div class="hero-content">
                <h1 class="hero-title" aria-label={title.clone()}>
                    <span aria-hidden="true">{ typed_prefix(&title, *typed).to_string() }</span>
                    <span class={classes!("hero-caret", done.then_some("blink"))} aria-hidden="true">{"|"}</span>
                </h1>
                <p class="hero-subtitle">{ locale.t("hero.subtitle") }</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" onclick={to("contact")}>
                        { locale.t("hero.cta") }
                    </button>
                    <button class="btn btn-secondary" onclick={to("services")}>
                        { locale.t("hero.secondary") }
                    </button>
                </div>
            </div>
        </section>
    }
}
