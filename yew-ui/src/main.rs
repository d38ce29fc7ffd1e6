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

use codarise_core::PageConfig;
use codarise_ui::constants::try_app_config;
use codarise_ui::{App, AppProps};
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    // Read the config before the logger exists so its level applies from
    // the first line; problems are reported once logging is up.
    let (config, config_error) = match try_app_config() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    let level = if cfg!(feature = "debugAssertions") {
        LevelFilter::Debug
    } else {
        config.log_level().unwrap_or(LevelFilter::Info)
    };
    if let Some(level) = level.to_level() {
        let _ = console_log::init_with_level(level);
    }
    if let Some(e) = config_error {
        log::warn!("{e:#}; using default page config");
    }
    log::info!("starting codarise-ui");

    yew::Renderer::<App>::with_props(AppProps {
        config: Some(Rc::new(config)),
    })
    .render();
}
