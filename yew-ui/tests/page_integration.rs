// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the full page.
//
// Renders `App` against an injected `window.__APP_CONFIG` and checks the
// section layout, preference handling on `<html>`, contact links and that
// unmounting leaves no live scroll handlers behind.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::rc::Rc;
use std::time::Duration;

use codarise_core::PageConfig;
use support::{
    cleanup, click, count, create_mount_point, fire, inject_app_config, query,
    remove_app_config, reset_preferences, root_element, save_preference, settle,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlSelectElement;
use yew::platform::time::sleep;

use codarise_ui::{App, AppProps};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn render_app(mount: &web_sys::Element) -> yew::AppHandle<App> {
    yew::Renderer::<App>::with_root(mount.clone()).render()
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn renders_every_section_in_order() {
    reset_preferences();
    inject_app_config();
    let mount = create_mount_point();
    let app = render_app(&mount);
    settle().await;

    let ids: Vec<String> = ["hero", "about", "services", "team", "contact"]
        .iter()
        .map(|id| query(&mount, &format!("section#{id}")).id())
        .collect();
    assert_eq!(ids, vec!["hero", "about", "services", "team", "contact"]);
    assert_eq!(count(&mount, "nav#nav"), 1);
    assert_eq!(count(&mount, "#about #process-timeline"), 1);

    // Config-driven team roster.
    let team = query(&mount, "#team").text_content().unwrap_or_default();
    assert!(team.contains("Ada Lovelace"), "team section should list configured members");

    app.destroy();
    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn contact_cards_link_only_configured_channels() {
    reset_preferences();
    let config = PageConfig {
        contact_email: Some("hello@example.com".to_string()),
        ..Default::default()
    };
    let mount = create_mount_point();
    let app = yew::Renderer::<App>::with_root_and_props(
        mount.clone(),
        AppProps {
            config: Some(Rc::new(config)),
        },
    )
    .render();
    settle().await;

    let email = query(&mount, "[data-channel='email']");
    assert_eq!(email.tag_name(), "A");
    assert_eq!(email.get_attribute("href").as_deref(), Some("mailto:hello@example.com"));

    let whatsapp = query(&mount, "[data-channel='whatsapp']");
    assert_eq!(whatsapp.get_attribute("href"), None);
    assert_eq!(whatsapp.get_attribute("aria-disabled").as_deref(), Some("true"));

    app.destroy();
    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn theme_toggle_flips_and_persists_the_dark_class() {
    reset_preferences();
    save_preference("theme", "light");
    let mount = create_mount_point();
    let app = render_app(&mount);
    settle().await;

    let root = root_element();
    assert!(!root.class_list().contains("dark"));

    click(&mount, ".theme-toggle");
    settle().await;
    assert!(root.class_list().contains("dark"));
    let saved = gloo_utils::window()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item("theme")
        .unwrap();
    assert_eq!(saved.as_deref(), Some("dark"));

    click(&mount, ".theme-toggle");
    settle().await;
    assert!(!root.class_list().contains("dark"));

    app.destroy();
    cleanup(&mount);
    reset_preferences();
}

#[wasm_bindgen_test]
async fn choosing_arabic_mirrors_the_document() {
    reset_preferences();
    let mount = create_mount_point();
    let app = render_app(&mount);
    settle().await;

    let root = root_element();
    assert_eq!(root.get_attribute("dir").as_deref(), Some("ltr"));
    assert_eq!(root.get_attribute("lang").as_deref(), Some("en"));

    let select: HtmlSelectElement = query(&mount, ".language-toggle").unchecked_into();
    select.set_value("ar");
    fire(&select, "change");
    settle().await;

    assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));
    assert_eq!(root.get_attribute("lang").as_deref(), Some("ar"));
    let hero = query(&mount, "#hero .hero-title").get_attribute("aria-label");
    assert_ne!(hero.as_deref(), Some("We Rise Through Code"));

    app.destroy();
    cleanup(&mount);
    reset_preferences();
}

#[wasm_bindgen_test]
async fn saved_locale_wins_over_config_default() {
    reset_preferences();
    save_preference("locale", "ar");
    inject_app_config();
    let mount = create_mount_point();
    let app = render_app(&mount);
    settle().await;

    assert_eq!(root_element().get_attribute("dir").as_deref(), Some("rtl"));

    app.destroy();
    cleanup(&mount);
    remove_app_config();
    reset_preferences();
}

// ---------------------------------------------------------------------------
// Teardown
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn scroll_after_unmount_is_harmless() {
    reset_preferences();
    let mount = create_mount_point();
    let app = render_app(&mount);
    settle().await;

    // A scroll burst right before unmount leaves a debounce timer pending.
    let window = gloo_utils::window();
    fire(&window, "scroll");
    fire(&window, "resize");
    app.destroy();
    settle().await;

    fire(&window, "scroll");
    fire(&window, "resize");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(count(&mount, "nav"), 0);
    cleanup(&mount);
}
