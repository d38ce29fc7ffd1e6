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

use codarise_core::TeamMember;
use yew::prelude::*;

use crate::context::LocaleCtx;

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub members: Rc<Vec<TeamMember>>,
}

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: TeamMember,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let locale = use_context::<LocaleCtx>();
    // Falls back to initials when the portrait fails to load.
    let image_failed = use_state_eq(|| false);
    let Some(locale) = locale else {
        return html! {};
    };
    let member = &props.member;

    let portrait = match (&member.image, *image_failed) {
        (Some(src), false) => {
            let onerror = {
                let image_failed = image_failed.clone();
                Callback::from(move |_: Event| image_failed.set(true))
            };
            html! { <img class="member-photo" src={src.clone()} alt={member.name.clone()} {onerror} /> }
        }
        _ => html! { <span class="member-initials" aria-hidden="true">{ member.initials() }</span> },
    };

    let link = |href: &Option<String>, class: &'static str, label_key: &str, text: &'static str| {
        href.as_ref().map(|href| {
            html! {
                <a
                    class={classes!("member-link", class)}
                    href={href.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={format!("{} {}", member.name, locale.t(label_key))}
                >
                    { text }
                </a>
            }
        })
    };

    html! {
        <article class="card member-card">
            <div class="member-portrait">{ portrait }</div>
            <h3 class="card-title">{ member.name.clone() }</h3>
            <p class="member-role">{ member.role.clone() }</p>
            if let Some(specialty) = &member.specialty {
                <p class="member-specialty">{ specialty.clone() }</p>
            }
            <div class="member-links">
                { link(&member.github, "github", "team.github", "GitHub") }
                { link(&member.linkedin, "linkedin", "team.linkedin", "LinkedIn") }
            </div>
        </article>
    }
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    let Some(locale) = use_context::<LocaleCtx>() else {
        return html! {};
    };

    html! {
        <section id="team" class="section team">
            <div class="section-header">
                <h2 class="section-title">{ locale.t("team.title") }</h2>
                <p class="section-subtitle">{ locale.t("team.subtitle") }</p>
            </div>
            if props.members.is_empty() {
                <p class="team-empty">{ locale.t("team.empty") }</p>
            } else {
                <div class="card-grid">
                    { for props.members.iter().map(|member| html! {
                        <MemberCard key={member.name.clone()} member={member.clone()} />
                    }) }
                </div>
            }
        </section>
    }
}
