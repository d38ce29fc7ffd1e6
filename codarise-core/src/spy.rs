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

//! Navigation scroll-spy.
//!
//! Works out which page section the reader is currently in so the navigation
//! bar can highlight it. The probe sits a little below the fixed nav bar and
//! the section list is scanned from the end, so when several sections have
//! been scrolled past the deepest one wins.

use log::debug;
use thiserror::Error;

use crate::layout::Layout;

/// Section anchors in document order.
pub const DEFAULT_SECTIONS: [&str; 5] = ["hero", "about", "services", "team", "contact"];

/// Extra pixels added below the nav bar before comparing offsets.
pub const DEFAULT_MARGIN_PX: f64 = 10.0;

/// Past this scroll offset the nav bar switches to its opaque background.
pub const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// DOM id of the fixed navigation bar.
pub const NAV_ELEMENT_ID: &str = "nav";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpyError {
    #[error("scroll-spy needs at least one section")]
    NoSections,
}

/// Index of the last section whose top is at or above `probe`.
///
/// `tops` is in document order; `None` entries (unmounted sections) never
/// match. Returns `None` when the probe is above every section.
pub fn active_index(tops: &[Option<f64>], probe: f64) -> Option<usize> {
    tops.iter()
        .enumerate()
        .rev()
        .find(|(_, top)| matches!(top, Some(top) if *top <= probe))
        .map(|(index, _)| index)
}

/// Whether the nav bar should render its "scrolled" style.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Owned active-section state for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<String>,
    margin: f64,
    nav_height: f64,
    active: usize,
}

impl ScrollSpy {
    pub fn new(sections: Vec<String>, margin: f64) -> Result<Self, SpyError> {
        if sections.is_empty() {
            return Err(SpyError::NoSections);
        }
        Ok(Self {
            sections,
            margin,
            nav_height: 0.0,
            active: 0,
        })
    }

    /// Spy over [`DEFAULT_SECTIONS`] with the given margin.
    pub fn with_default_sections(margin: f64) -> Self {
        Self {
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            margin,
            nav_height: 0.0,
            active: 0,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn nav_height(&self) -> f64 {
        self.nav_height
    }

    /// Currently highlighted section id.
    pub fn active(&self) -> &str {
        &self.sections[self.active]
    }

    /// Re-reads the nav bar height. Called on mount and again on every resize
    /// because the bar reflows with the viewport width and the locale.
    pub fn measure_nav<L: Layout + ?Sized>(&mut self, layout: &L, nav_id: &str) {
        if let Some(bbox) = layout.bounding_box_of(nav_id) {
            if bbox.height != self.nav_height {
                debug!("nav height {} -> {}", self.nav_height, bbox.height);
            }
            self.nav_height = bbox.height;
        }
    }

    pub fn probe(&self, scroll_y: f64) -> f64 {
        scroll_y + self.nav_height + self.margin
    }

    /// Recomputes the active section from fresh geometry.
    ///
    /// Returns the new id only when it changed. When the probe is above every
    /// section the previous value is kept.
    pub fn recompute<L: Layout + ?Sized>(&mut self, layout: &L) -> Option<&str> {
        let probe = self.probe(layout.scroll_y());
        let tops: Vec<Option<f64>> = self
            .sections
            .iter()
            .map(|id| layout.offset_top_of(id))
            .collect();
        let index = active_index(&tops, probe)?;
        if index == self.active {
            return None;
        }
        debug!(
            "active section {} -> {} (probe {probe})",
            self.sections[self.active], self.sections[index]
        );
        self.active = index;
        Some(&self.sections[index])
    }

    /// Marks `id` active directly, as a nav click does. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        match self.sections.iter().position(|s| s == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}
