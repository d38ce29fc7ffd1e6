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

//! Runtime page configuration.
//!
//! The page reads an optional `window.__APP_CONFIG` object at startup. Every
//! field has a default so the page still renders when the object is absent.

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::preferences::Locale;
use crate::spy::{DEFAULT_MARGIN_PX, DEFAULT_SCROLLED_THRESHOLD_PX};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One card in the team section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub specialty: Option<String>,
    /// Portrait URL. Initials are shown when absent.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl TeamMember {
    /// Up to two uppercase initials, used as the portrait placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Locale used when nothing is stored for the visitor.
    pub default_locale: Locale,
    /// Pixels added below the nav bar when probing sections.
    pub spy_margin_px: f64,
    /// Quiet period before a scroll burst is delivered.
    pub scroll_debounce_ms: u32,
    /// Scroll offset after which the nav bar turns opaque.
    pub scrolled_threshold_px: f64,
    /// `log` level filter for the console logger.
    pub log_level: String,
    /// Phone number behind the WhatsApp and call cards.
    pub contact_phone: Option<String>,
    /// Address behind the email card.
    pub contact_email: Option<String>,
    /// Team section roster, in display order.
    pub team: Vec<TeamMember>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            spy_margin_px: DEFAULT_MARGIN_PX,
            scroll_debounce_ms: DEFAULT_DEBOUNCE_MS,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            log_level: "info".to_string(),
            contact_phone: None,
            contact_email: None,
            team: Vec::new(),
        }
    }
}

impl PageConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.spy_margin_px.is_finite() || self.spy_margin_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spyMarginPx must be a non-negative number, got {}",
                self.spy_margin_px
            )));
        }
        if !self.scrolled_threshold_px.is_finite() || self.scrolled_threshold_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scrolledThresholdPx must be a non-negative number, got {}",
                self.scrolled_threshold_px
            )));
        }
        if let Some(index) = self.team.iter().position(|m| m.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("team[{index}] has an empty name")));
        }
        self.log_level()?;
        Ok(self)
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("unknown logLevel {:?}", self.log_level)))
    }
}
