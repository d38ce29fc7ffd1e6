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


//! Fixed top navigation with scroll-spy highlighting.

use codarise_core::spy::{DEFAULT_SECTIONS, NAV_ELEMENT_ID};
use yew::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::components::theme_toggle::ThemeToggle;
use crate::context::LocaleCtx;

/// Translation key for a section's nav label. The hero is labelled "Home".
pub fn nav_label_key(section_id: &str) -> String {
    match section_id {
        "hero" => "nav.home".to_string(),
        other => format!("nav.{other}"),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    /// Section id reported by the scroll spy.
    pub active_section: AttrValue,
    /// True once the page has scrolled past the opacity threshold.
    #[prop_or_default]
    pub scrolled: bool,
    /// Called with a section id when an item is clicked.
    pub on_navigate: Callback<String>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let locale = use_context::<LocaleCtx>();
    let menu_open = use_state_eq(|| false);
    let Some(locale) = locale else {
        log::error!("Navigation rendered outside LocaleProvider");
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_to = |id: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(id.to_string());
        })
    };

    let item = |id: &'static str, mobile: bool| {
        let active = props.active_section.as_str() == id;
        let class = classes!(
            if mobile { "nav-item-mobile" } else { "nav-item" },
            active.then_some("active"),
        );
        html! {
            <li key={id}>
                <a
                    href={format!("#{id}")}
                    class={class}
                    data-section={id}
                    aria-current={active.then_some("page")}
                    onclick={go_to(id)}
                >
                    { locale.t(&nav_label_key(id)) }
                </a>
            </li>
        }
    };

    let nav_class = classes!("site-nav", props.scrolled.then_some("scrolled"));
    let menu_label = if *menu_open {
        locale.t("nav.closeMenu")
    } else {
        locale.t("nav.openMenu")
    };
    let menu_icon = if *menu_open { "\u{2715}" } else { "\u{2630}" };

    html! {
        <nav id={NAV_ELEMENT_ID} class={nav_class} aria-label={locale.t("nav.ariaLabel")}>
            <div class="nav-inner">
                <a href="#hero" class="nav-brand" onclick={go_to("hero")} aria-label={locale.t("nav.logoAlt")}>
                    <span class="nav-logo" aria-hidden="true">{"</>"}</span>
                    <span class="nav-brand-text">{ locale.t("nav.brand") }</span>
                </a>

                <ul class="nav-items">
                    { for DEFAULT_SECTIONS.into_iter().map(|id| item(id, false)) }
                </ul>

                <div class="nav-controls">
                    <LanguageToggle />
                    <ThemeToggle />
                    <button
                        class="nav-menu-toggle"
                        aria-label={menu_label}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        <span class="nav-menu-icon" aria-hidden="true">{ menu_icon }</span>
                    </button>
                </div>
            </div>

            if *menu_open {
                <ul class="nav-items-mobile">
                    { for DEFAULT_SECTIONS.into_iter().map(|id| item(id, true)) }
                </ul>
            }
        </nav>
    }
}
