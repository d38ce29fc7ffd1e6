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

//! Page-level scroll publisher.
//!
//! One bus per page owns the window `scroll` / `resize` listeners (installed
//! by the UI) and fans a single debounced tick out to every consumer, so the
//! spy and the timeline share one layout read cadence instead of each keeping
//! its own window listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::debounce::{Debouncer, Scheduler};

/// Raw browser event that reached the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKind {
    Scroll,
    Resize,
}

/// What subscribers receive once a burst settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollTick {
    /// At least one resize happened in the burst; cached sizes are stale.
    pub resized: bool,
}

impl ScrollTick {
    /// Tick delivered on mount. Nothing has been measured yet, so it counts
    /// as a resize.
    pub const INITIAL: ScrollTick = ScrollTick { resized: true };
}

type Listener = Rc<dyn Fn(ScrollTick)>;

#[derive(Default)]
struct BusState {
    listeners: Vec<(usize, Listener)>,
    next_id: usize,
    resized_pending: bool,
    closed: bool,
}

impl BusState {
    /// Snapshot taken under the borrow; listeners run after it is released
    /// so they may subscribe or unsubscribe.
    fn take_delivery(&mut self, tick: Option<ScrollTick>) -> Option<(ScrollTick, Vec<Listener>)> {
        if self.closed {
            return None;
        }
        let tick = tick.unwrap_or(ScrollTick {
            resized: std::mem::take(&mut self.resized_pending),
        });
        let listeners = self.listeners.iter().map(|(_, l)| l.clone()).collect();
        Some((tick, listeners))
    }
}

fn deliver(state: &RefCell<BusState>, tick: Option<ScrollTick>) {
    let delivery = state.borrow_mut().take_delivery(tick);
    if let Some((tick, listeners)) = delivery {
        for listener in listeners {
            listener(tick);
        }
    }
}

/// Debounced scroll/resize fan-out.
pub struct ScrollBus<S: Scheduler> {
    state: Rc<RefCell<BusState>>,
    debouncer: Debouncer<S>,
}

impl<S: Scheduler> ScrollBus<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(BusState::default())),
            debouncer: Debouncer::new(scheduler, delay_ms),
        }
    }

    /// Registers `listener`. It stays registered until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "the listener is removed when the subscription is dropped"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ScrollTick) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        if !state.closed {
            state.listeners.push((id, Rc::new(listener)));
        }
        Subscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Records a raw event and (re)arms the debounce timer.
    pub fn notify(&self, kind: ScrollKind) {
        {
            let mut state = self.state.borrow_mut();
            if state.closed {
                return;
            }
            if kind == ScrollKind::Resize {
                state.resized_pending = true;
            }
        }
        let state = Rc::downgrade(&self.state);
        self.debouncer.call(move || {
            if let Some(state) = state.upgrade() {
                deliver(&state, None);
            }
        });
    }

    /// Delivers [`ScrollTick::INITIAL`] synchronously, bypassing the debounce.
    pub fn dispatch_now(&self) {
        deliver(&self.state, Some(ScrollTick::INITIAL));
    }

    /// Cancels any pending tick and drops every listener. Later
    /// notifications are ignored.
    pub fn shutdown(&self) {
        self.debouncer.cancel();
        let listeners = {
            let mut state = self.state.borrow_mut();
            state.closed = true;
            std::mem::take(&mut state.listeners)
        };
        drop(listeners);
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }
}

impl<S: Scheduler> Drop for ScrollBus<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Handle returned by [`ScrollBus::subscribe`]; unsubscribes on drop.
pub struct Subscription {
    id: usize,
    state: Weak<RefCell<BusState>>,
}

impl Subscription {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let removed = {
                let mut state = state.borrow_mut();
                let index = state.listeners.iter().position(|(id, _)| *id == self.id);
                index.map(|index| state.listeners.remove(index))
            };
            drop(removed);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.id)
    }
}
