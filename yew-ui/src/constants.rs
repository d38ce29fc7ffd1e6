// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{anyhow, Context};
use codarise_core::PageConfig;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

/// Name of the optional global the hosting page may set before the wasm loads.
pub const APP_CONFIG_GLOBAL: &str = "__APP_CONFIG";

/// Parses `window.__APP_CONFIG`.
///
/// `Ok(None)` when the global is absent; an error when it is present but
/// malformed or out of range.
pub fn try_app_config() -> anyhow::Result<Option<PageConfig>> {
    let win = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str(APP_CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(None);
    }
    let parsed = from_js_value::<PageConfig>(config)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("Failed to parse {APP_CONFIG_GLOBAL}"))?;
    Ok(Some(parsed.validate()?))
}

/// Runtime config with defaults filled in. A broken config never blocks the
/// page from rendering.
pub fn app_config() -> PageConfig {
    match try_app_config() {
        Ok(Some(config)) => config,
        Ok(None) => PageConfig::default(),
        Err(e) => {
            log::warn!("{e:#}; using default page config");
            PageConfig::default()
        }
    }
}
