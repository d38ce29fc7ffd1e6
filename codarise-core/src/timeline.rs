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

//! Maps how far a timeline container has travelled through the viewport to
//! one of its N steps.
//!
//! Scroll is the continuous source of truth. A click may jump to any step, but
//! the next scroll-driven recomputation is free to overwrite it.

use std::num::NonZeroUsize;

use log::debug;
use thiserror::Error;

use crate::layout::{BoundingBox, Layout};

/// DOM id of the process timeline in the services section.
pub const TIMELINE_ELEMENT_ID: &str = "process-timeline";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("timeline needs at least one step")]
    NoSteps,
}

/// Reading direction of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Whether step `index` is drawn on the left of the spine. Alternates per
/// step; right-to-left locales mirror the placement.
pub fn is_left(index: usize, direction: Direction) -> bool {
    let even = index % 2 == 0;
    match direction {
        Direction::Ltr => even,
        Direction::Rtl => !even,
    }
}

/// True when any part of the container overlaps the viewport.
pub fn is_in_view(container: BoundingBox, viewport_height: f64) -> bool {
    container.top < viewport_height && container.bottom() > 0.0
}

/// Progress in `[0, 1]` of the container sweeping past the viewport centre.
///
/// A degenerate range (zero or negative) yields 0 rather than NaN.
pub fn scroll_progress(container: BoundingBox, viewport_height: f64) -> f64 {
    let center = viewport_height / 2.0;
    let scroll_start = (center - container.top).max(0.0);
    let scroll_end = container
        .height
        .min(viewport_height + center - container.top);
    let range = scroll_end - scroll_start;
    if range <= 0.0 {
        return 0.0;
    }
    let current = (center - container.top).clamp(0.0, range);
    current / range
}

/// `floor(progress * step_count)` clamped to a valid step.
pub fn step_for_progress(progress: f64, step_count: usize) -> usize {
    if step_count == 0 {
        return 0;
    }
    let last = step_count - 1;
    if !progress.is_finite() || progress <= 0.0 {
        return 0;
    }
    let raw = (progress * step_count as f64).floor() as usize;
    raw.min(last)
}

/// Active-step state of one timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineMapper {
    step_count: usize,
    active: usize,
}

impl TimelineMapper {
    pub fn new(step_count: usize) -> Result<Self, TimelineError> {
        NonZeroUsize::new(step_count)
            .map(Self::with_step_count)
            .ok_or(TimelineError::NoSteps)
    }

    /// Infallible constructor for step counts known at compile time.
    pub fn with_step_count(step_count: NonZeroUsize) -> Self {
        Self {
            step_count: step_count.get(),
            active: 0,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Recomputes the active step from the container geometry.
    ///
    /// No-op when the container is not mounted or not on screen. Returns the
    /// new index only when it changed.
    pub fn recompute<L: Layout + ?Sized>(&mut self, layout: &L, container_id: &str) -> Option<usize> {
        let container = layout.bounding_box_of(container_id)?;
        let viewport_height = layout.viewport_height();
        if !is_in_view(container, viewport_height) {
            return None;
        }
        let progress = scroll_progress(container, viewport_height);
        let index = step_for_progress(progress, self.step_count);
        if index == self.active {
            return None;
        }
        debug!("timeline step {} -> {index} (progress {progress:.3})", self.active);
        self.active = index;
        Some(index)
    }

    /// Jumps to `index` on click. Out-of-range values clamp to the last step.
    pub fn select(&mut self, index: usize) -> usize {
        self.active = index.min(self.step_count - 1);
        self.active
    }
}
