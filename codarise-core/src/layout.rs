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

//! Read-only view of the live page geometry.
//!
//! Nothing here caches measurements: the spy and the timeline ask the layout
//! again on every recomputation because content height changes as fonts,
//! images and locale switches reflow the page.

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub top: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Geometry queries used by the scroll consumers.
///
/// Element lookups return `None` when the element is not mounted (yet). Callers
/// treat that as "skip this cycle" and never as an error.
pub trait Layout {
    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Distance in pixels from the document top to the element with `id`.
    fn offset_top_of(&self, id: &str) -> Option<f64>;

    /// Viewport-relative box of the element with `id`.
    fn bounding_box_of(&self, id: &str) -> Option<BoundingBox>;
}

/// Document offset to scroll to so that `id` lands just below the fixed
/// navigation bar.
pub fn scroll_target<L: Layout + ?Sized>(layout: &L, id: &str, nav_height: f64) -> Option<f64> {
    let bbox = layout.bounding_box_of(id)?;
    Some(bbox.top + layout.scroll_y() - nav_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeLayout;

    #[test]
    fn bottom_is_top_plus_height() {
        let bbox = BoundingBox::new(-120.0, 400.0);
        assert_eq!(bbox.bottom(), 280.0);
    }

    #[test]
    fn scroll_target_compensates_for_nav_height() {
        let layout = FakeLayout::new()
            .with_scroll(300.0)
            .with_box("team", BoundingBox::new(500.0, 900.0));

        assert_eq!(scroll_target(&layout, "team", 64.0), Some(736.0));
    }

    #[test]
    fn scroll_target_of_unmounted_section_is_none() {
        let layout = FakeLayout::new().with_scroll(300.0);
        assert_eq!(scroll_target(&layout, "team", 64.0), None);
    }
}
