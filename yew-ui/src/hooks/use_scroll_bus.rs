// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hooks around the page-level scroll bus.

use std::rc::Rc;

use codarise_core::{ScrollBus, ScrollKind, ScrollTick};
use gloo::events::EventListener;
use yew::prelude::*;

use crate::context::ScrollBusCtx;
use crate::dom_layout::GlooScheduler;

/// Creates the page's scroll bus and wires it to the window's `scroll` and
/// `resize` events.
///
/// On unmount the listeners are removed and the bus is shut down, which also
/// cancels a pending debounce timer.
#[hook]
pub fn use_scroll_bus(delay_ms: u32) -> ScrollBusCtx {
    let bus = use_memo(delay_ms, |delay_ms| {
        ScrollBusCtx(Rc::new(ScrollBus::new(GlooScheduler, *delay_ms)))
    });
    let bus = (*bus).clone();

    {
        let bus = bus.clone();
        use_effect_with(bus, move |bus| {
            let listeners = web_sys::window().map(|window| {
                let on_scroll = {
                    let bus = bus.clone();
                    EventListener::new(&window, "scroll", move |_| bus.notify(ScrollKind::Scroll))
                };
                let on_resize = {
                    let bus = bus.clone();
                    EventListener::new(&window, "resize", move |_| bus.notify(ScrollKind::Resize))
                };
                [on_scroll, on_resize]
            });
            if listeners.is_none() {
                log::warn!("no window; scroll tracking disabled");
            }
            // Subscribers that attached before this effect get their first tick now.
            bus.dispatch_now();

            let bus = bus.clone();
            move || {
                drop(listeners);
                bus.shutdown();
            }
        });
    }

    bus
}

/// Runs `on_tick` for every tick of the scroll bus found in context, plus
/// once right away with [`ScrollTick::INITIAL`].
///
/// `deps` re-subscribes when it changes, like `use_effect_with`.
#[hook]
pub fn use_scroll_subscription<D, F>(deps: D, on_tick: F)
where
    D: PartialEq + Clone + 'static,
    F: Fn(ScrollTick) + 'static,
{
    let bus = use_context::<ScrollBusCtx>();
    use_bus_subscription(bus, deps, on_tick);
}

/// Same as [`use_scroll_subscription`] for a component that owns the bus it
/// subscribes to and therefore cannot read it from context.
#[hook]
pub fn use_bus_subscription<D, F>(bus: Option<ScrollBusCtx>, deps: D, on_tick: F)
where
    D: PartialEq + Clone + 'static,
    F: Fn(ScrollTick) + 'static,
{
    let on_tick = Rc::new(on_tick);
    use_effect_with((bus, deps), move |(bus, _)| {
        on_tick(ScrollTick::INITIAL);
        let subscription = bus.as_ref().map(|bus| {
            let on_tick = on_tick.clone();
            bus.subscribe(move |tick| on_tick(tick))
        });
        move || drop(subscription)
    });
}
