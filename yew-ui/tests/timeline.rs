// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the process timeline.
//
// Clicking a card, a rail dot or a control dot selects that step; the
// left/right alternation mirrors for right-to-left locales.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    cleanup, click, count, create_mount_point, query, reset_preferences, save_preference, settle,
};
use wasm_bindgen_test::*;
use yew::prelude::*;

use codarise_ui::components::providers::LocaleProvider;
use codarise_ui::components::timeline::Timeline;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// The spacer keeps the timeline below the fold so the mount-time geometry
// check leaves the first step selected.
#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! {
        <LocaleProvider>
            <div style="height: 200vh;" />
            <Timeline />
        </LocaleProvider>
    }
}

fn active_step(mount: &web_sys::Element) -> Option<String> {
    query(mount, "#process-timeline").get_attribute("data-active-step")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn renders_five_steps_with_the_first_active() {
    reset_preferences();
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(count(&mount, ".timeline-row"), 5);
    assert_eq!(count(&mount, ".timeline-row.active"), 1);
    assert_eq!(
        query(&mount, ".timeline-row.active").get_attribute("data-step").as_deref(),
        Some("0")
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn clicking_a_dot_selects_that_step() {
    reset_preferences();
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    click(&mount, ".timeline-row[data-step='3'] .timeline-dot");
    settle().await;
    assert_eq!(active_step(&mount).as_deref(), Some("3"));
    let dot = query(&mount, ".timeline-row[data-step='3'] .timeline-dot");
    assert_eq!(dot.get_attribute("aria-current").as_deref(), Some("step"));

    click(&mount, ".timeline-row[data-step='1'] .timeline-card");
    settle().await;
    assert_eq!(active_step(&mount).as_deref(), Some("1"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn control_dots_track_the_active_step() {
    reset_preferences();
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(count(&mount, ".timeline-control"), 5);
    click(&mount, ".timeline-control:last-child");
    settle().await;

    assert_eq!(active_step(&mount).as_deref(), Some("4"));
    assert_eq!(
        query(&mount, ".timeline-control:last-child").get_attribute("aria-pressed").as_deref(),
        Some("true")
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn even_steps_switch_sides_in_arabic() {
    reset_preferences();
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;
    let first = query(&mount, ".timeline-row[data-step='0']");
    assert!(first.class_list().contains("timeline-left"));
    cleanup(&mount);

    save_preference("locale", "ar");
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;
    let first = query(&mount, ".timeline-row[data-step='0']");
    assert!(first.class_list().contains("timeline-right"));
    assert!(query(&mount, ".timeline-row[data-step='1']")
        .class_list()
        .contains("timeline-left"));
    cleanup(&mount);

    reset_preferences();
}
