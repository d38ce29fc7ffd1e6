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

//! Test doubles shared by the unit tests of this crate.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::debounce::Scheduler;
use crate::layout::{BoundingBox, Layout};

/// Scripted geometry. Document offsets and viewport boxes are set
/// independently so tests can describe exactly what a browser would report.
#[derive(Default, Clone)]
pub struct FakeLayout {
    scroll_y: f64,
    viewport_height: f64,
    offsets: HashMap<String, f64>,
    boxes: HashMap<String, BoundingBox>,
}

impl FakeLayout {
    pub fn new() -> Self {
        Self {
            viewport_height: 800.0,
            ..Default::default()
        }
    }

    pub fn with_scroll(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_viewport(mut self, height: f64) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn with_offset(mut self, id: &str, top: f64) -> Self {
        self.offsets.insert(id.to_string(), top);
        self
    }

    pub fn with_box(mut self, id: &str, bbox: BoundingBox) -> Self {
        self.boxes.insert(id.to_string(), bbox);
        self
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub fn set_box(&mut self, id: &str, bbox: BoundingBox) {
        self.boxes.insert(id.to_string(), bbox);
    }
}

impl Layout for FakeLayout {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn offset_top_of(&self, id: &str) -> Option<f64> {
        self.offsets.get(id).copied()
    }

    fn bounding_box_of(&self, id: &str) -> Option<BoundingBox> {
        self.boxes.get(id).copied()
    }
}

struct FakeTask {
    delay_ms: u32,
    cancelled: Rc<RefCell<bool>>,
    task: Option<Box<dyn FnOnce()>>,
}

/// Manual clock: scheduled tasks only run when the test calls
/// [`FakeScheduler::run_pending`].
#[derive(Clone, Default)]
pub struct FakeScheduler {
    tasks: Rc<RefCell<Vec<FakeTask>>>,
}

/// Dropping the handle cancels the task, mirroring `gloo_timers::callback::Timeout`.
pub struct FakeHandle {
    cancelled: Rc<RefCell<bool>>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        *self.cancelled.borrow_mut() = true;
    }
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks that were scheduled and not cancelled yet.
    pub fn live_count(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| t.task.is_some() && !*t.cancelled.borrow())
            .count()
    }

    pub fn last_delay(&self) -> Option<u32> {
        self.tasks.borrow().last().map(|t| t.delay_ms)
    }

    /// Runs every live task once. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let ready: Vec<Box<dyn FnOnce()>> = {
            let mut tasks = self.tasks.borrow_mut();
            let ready = tasks
                .iter_mut()
                .filter(|t| !*t.cancelled.borrow())
                .filter_map(|t| t.task.take())
                .collect();
            tasks.retain(|t| t.task.is_some() && !*t.cancelled.borrow());
            ready
        };
        let count = ready.len();
        for task in ready {
            task();
        }
        count
    }
}

impl Scheduler for FakeScheduler {
    type Handle = FakeHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeHandle {
        let cancelled = Rc::new(RefCell::new(false));
        self.tasks.borrow_mut().push(FakeTask {
            delay_ms,
            cancelled: cancelled.clone(),
            task: Some(task),
        });
        FakeHandle { cancelled }
    }
}
