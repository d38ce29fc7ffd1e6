// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for codarise-ui component tests.
//
// Provides mount/cleanup helpers, storage and config reset, and small DOM
// query shortcuts so that individual test files stay focused on assertions.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, HtmlElement};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// First element under `mount` matching `selector`, panicking with the
/// selector when there is none.
pub fn query(mount: &web_sys::Element, selector: &str) -> web_sys::Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector:?}"))
}

pub fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

/// Click the first element matching `selector`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    query(mount, selector).unchecked_into::<HtmlElement>().click();
}

/// Dispatch a bubbling event of type `kind` on `target`.
pub fn fire(target: &web_sys::EventTarget, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Let Yew flush pending renders and effects.
pub async fn settle() {
    sleep(Duration::ZERO).await;
    sleep(Duration::ZERO).await;
}

/// `<html>` element, where theme and locale are mirrored.
pub fn root_element() -> web_sys::Element {
    gloo_utils::document().document_element().unwrap()
}

// ---------------------------------------------------------------------------
// Saved preferences and runtime config
// ---------------------------------------------------------------------------

/// Forget preferences saved by earlier tests and reset `<html>`.
pub fn reset_preferences() {
    let storage = gloo_utils::window().local_storage().unwrap().unwrap();
    storage.remove_item("theme").unwrap();
    storage.remove_item("locale").unwrap();
    let root = root_element();
    root.class_list().remove_1("dark").unwrap();
    root.remove_attribute("dir").unwrap();
    root.remove_attribute("lang").unwrap();
}

pub fn save_preference(key: &str, value: &str) {
    let storage = gloo_utils::window().local_storage().unwrap().unwrap();
    storage.set_item(key, value).unwrap();
}

/// Inject a `window.__APP_CONFIG` object with contact details and one team
/// member. Call this before rendering `App` without an explicit config.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("defaultLocale", &"en".into());
    set("scrollDebounceMs", &wasm_bindgen::JsValue::from(10));
    set("contactEmail", &"hello@example.com".into());
    set("contactPhone", &"+1 (555) 010-0200".into());

    let member = js_sys::Object::new();
    js_sys::Reflect::set(&member, &"name".into(), &"Ada Lovelace".into()).unwrap();
    js_sys::Reflect::set(&member, &"role".into(), &"Engineer".into()).unwrap();
    let team = js_sys::Array::of1(&member);
    set("team", &team);

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
