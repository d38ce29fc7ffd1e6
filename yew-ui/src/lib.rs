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


//! Yew front end for the Codarise landing page.
//!
//! The scroll spy, the timeline mapper and the preference rules live in
//! `codarise-core`; this crate supplies the DOM-backed layout, timers and
//! components around them.

pub mod app;
pub mod components;
pub mod constants;
pub mod context;
pub mod dom_layout;
pub mod hooks;
pub mod i18n;

pub use app::{App, AppProps};
