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

//! Framework-agnostic core of the Codarise landing page.
//!
//! Everything in here is a pure function of measured geometry or a small
//! owned state machine, so it runs natively in unit tests with a scripted
//! [`Layout`] and a fake [`Scheduler`]. The Yew shell in `yew-ui` supplies the
//! DOM-backed implementations.

pub mod bus;
pub mod config;
pub mod contact;
pub mod debounce;
pub mod i18n;
pub mod layout;
pub mod preferences;
pub mod spy;
pub mod timeline;

#[cfg(test)]
pub(crate) mod testing;

pub use bus::{ScrollBus, ScrollKind, ScrollTick, Subscription};
pub use config::{ConfigError, PageConfig, TeamMember};
pub use contact::ContactChannel;
pub use debounce::{Debouncer, Scheduler};
pub use i18n::{Catalog, I18nError, Translator};
pub use layout::{scroll_target, BoundingBox, Layout};
pub use preferences::{Locale, PreferenceError, Theme};
pub use spy::{ScrollSpy, SpyError};
pub use timeline::{Direction, TimelineError, TimelineMapper};
