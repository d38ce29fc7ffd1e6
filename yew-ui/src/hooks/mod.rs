pub mod use_scroll_bus;

pub use use_scroll_bus::{use_bus_subscription, use_scroll_bus, use_scroll_subscription};
