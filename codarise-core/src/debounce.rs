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

//! Trailing-edge debounce over an injectable timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Delay used for scroll bursts.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// Something that can run a task later.
///
/// Dropping the returned handle must cancel the task if it has not run yet;
/// `gloo_timers::callback::Timeout` behaves exactly like that.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Runs only the last task of a rapid burst.
///
/// Every [`Debouncer::call`] drops the pending handle (cancelling it) and
/// schedules the new task, so a task only runs once `delay_ms` passes without
/// another call.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
    armed: Rc<Cell<bool>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn call<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        // Cancel first so the old timer can never fire after the new one is set.
        self.pending.borrow_mut().take();

        // The fired handle stays in the slot until the next call; a timer must
        // not be dropped from inside its own callback.
        let armed = self.armed.clone();
        armed.set(true);
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                armed.set(false);
                task();
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }

    pub fn cancel(&self) {
        self.armed.set(false);
        self.pending.borrow_mut().take();
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
