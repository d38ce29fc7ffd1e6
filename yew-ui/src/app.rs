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


//! Page root: providers, the shared scroll bus and the section layout.

use std::rc::Rc;

use codarise_core::spy::{is_scrolled, NAV_ELEMENT_ID};
use codarise_core::{scroll_target, Layout, PageConfig, ScrollSpy};
use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::components::providers::{LocaleProvider, ThemeProvider};
use crate::components::services::Services;
use crate::components::team::Team;
use crate::constants::app_config;
use crate::context::{LocaleCtx, ScrollBusCtx};
use crate::dom_layout::DomLayout;
use crate::hooks::{use_bus_subscription, use_scroll_bus};

/// Below this viewport width smooth scrolling is followed by an instant jump,
/// since some mobile browsers stop a smooth scroll early.
const MOBILE_BREAKPOINT_PX: f64 = 768.0;
const MOBILE_SCROLL_FALLBACK_MS: u32 = 100;

fn scroll_window_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    let narrow = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .is_some_and(|w| w < MOBILE_BREAKPOINT_PX);
    if narrow {
        Timeout::new(MOBILE_SCROLL_FALLBACK_MS, move || {
            window.scroll_to_with_x_and_y(0.0, top);
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Overrides `window.__APP_CONFIG`, mainly for tests.
    #[prop_or_default]
    pub config: Option<Rc<PageConfig>>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_memo(props.config.clone(), |config| {
        config.as_deref().cloned().unwrap_or_else(app_config)
    });

    html! {
        <ThemeProvider>
            <LocaleProvider default_locale={config.default_locale}>
                <Page config={config} />
            </LocaleProvider>
        </ThemeProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub config: Rc<PageConfig>,
}

/// Owns the scroll bus and the scroll spy. Sections below read the bus from
/// context and subscribe on their own.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let config = props.config.clone();
    let bus = use_scroll_bus(config.scroll_debounce_ms);
    let spy = use_mut_ref({
        let margin = config.spy_margin_px;
        move || ScrollSpy::with_default_sections(margin)
    });
    let active_section = use_state_eq(|| spy.borrow().active().to_string());
    let scrolled = use_state_eq(|| false);

    {
        let spy = spy.clone();
        let active_section = active_section.clone();
        let scrolled = scrolled.clone();
        let threshold = config.scrolled_threshold_px;
        use_bus_subscription(Some(bus.clone()), threshold, move |tick| {
            let layout = DomLayout::new();
            let mut spy = spy.borrow_mut();
            if tick.resized {
                spy.measure_nav(&layout, NAV_ELEMENT_ID);
            }
            if let Some(section) = spy.recompute(&layout) {
                log::debug!("active section: {section}");
                active_section.set(section.to_string());
            }
            scrolled.set(is_scrolled(layout.scroll_y(), threshold));
        });
    }

    // A locale switch can reflow the nav bar (RTL, different font metrics).
    {
        let spy = spy.clone();
        let locale = use_context::<LocaleCtx>().map(|ctx| ctx.locale);
        use_effect_with(locale, move |_| {
            spy.borrow_mut()
                .measure_nav(&DomLayout::new(), NAV_ELEMENT_ID);
            || ()
        });
    }

    let on_navigate = {
        let spy = spy.clone();
        let active_section = active_section.clone();
        Callback::from(move |id: String| {
            let layout = DomLayout::new();
            let nav_height = spy.borrow().nav_height();
            let Some(top) = scroll_target(&layout, &id, nav_height) else {
                log::warn!("no section with id {id:?}");
                return;
            };
            scroll_window_to(top);
            if spy.borrow_mut().select(&id) {
                active_section.set(id);
            }
        })
    };

    html! {
        <ContextProvider<ScrollBusCtx> context={bus}>
            <div class="page">
                <Navigation
                    active_section={AttrValue::from((*active_section).clone())}
                    scrolled={*scrolled}
                    on_navigate={on_navigate.clone()}
                />
                <main>
                    <Hero on_navigate={on_navigate.clone()} />
                    <About />
                    <Services />
                    <Team members={Rc::new(config.team.clone())} />
                    <Contact config={config.clone()} />
                </main>
                <Footer {on_navigate} />
            </div>
        </ContextProvider<ScrollBusCtx>>
    }
}
