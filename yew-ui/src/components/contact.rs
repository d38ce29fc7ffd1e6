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


use std::rc::Rc;

use codarise_core::{ContactChannel, PageConfig};
use yew::prelude::*;

use crate::context::LocaleCtx;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub config: Rc<PageConfig>,
}

fn channel_icon(channel: ContactChannel) -> &'static str {
    match channel {
        ContactChannel::WhatsApp => "\u{1F4AC}",
        ContactChannel::Call => "\u{1F4DE}",
        ContactChannel::Email => "\u{2709}",
    }
}

/// One card per channel. Channels without configured details render
/// disabled instead of linking nowhere.
#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let Some(locale) = use_context::<LocaleCtx>() else {
        return html! {};
    };

    let card = |channel: ContactChannel| {
        let key = channel.key();
        let body = html! {
            <>
                <span class="card-icon" aria-hidden="true">{ channel_icon(channel) }</span>
                <h3 class="card-title">{ locale.t(&format!("contact.{key}.title")) }</h3>
                <p class="card-desc">{ locale.t(&format!("contact.{key}.desc")) }</p>
            </>
        };
        match channel.href(&props.config) {
            Some(href) => html! {
                <a
                    key={key}
                    class="card contact-card"
                    data-channel={key}
                    href={href}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { body }
                </a>
            },
            None => html! {
                <div key={key} class="card contact-card disabled" data-channel={key} aria-disabled="true">
                    { body }
                    <p class="contact-unavailable">{ locale.t("contact.unavailable") }</p>
                </div>
            },
        }
    };

    html! {
        <section id="contact" class="section contact">
            <div class="section-header">
                <h2 class="section-title">{ locale.t("contact.title") }</h2>
                <p class="section-subtitle">{ locale.t("contact.subtitle") }</p>
            </div>
            <div class="card-grid">
                { for ContactChannel::ALL.into_iter().map(card) }
            </div>
        </section>
    }
}
