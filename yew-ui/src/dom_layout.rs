// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browser-backed implementations of the core's `Layout` and `Scheduler`.

use codarise_core::{BoundingBox, Layout, Scheduler};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

/// Reads live geometry from the DOM on every call. Nothing is cached.
#[derive(Clone, Debug)]
pub struct DomLayout {
    window: Option<Window>,
}

impl DomLayout {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.window
            .as_ref()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Default for DomLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for DomLayout {
    fn scroll_y(&self) -> f64 {
        self.window
            .as_ref()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .as_ref()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn offset_top_of(&self, id: &str) -> Option<f64> {
        self.html_element(id).map(|el| el.offset_top() as f64)
    }

    fn bounding_box_of(&self, id: &str) -> Option<BoundingBox> {
        let rect = self.html_element(id)?.get_bounding_client_rect();
        Some(BoundingBox::new(rect.top(), rect.height()))
    }
}

/// `gloo_timers` timeouts; dropping the `Timeout` clears it.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
