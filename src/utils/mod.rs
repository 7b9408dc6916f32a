//! DOM and timing helpers
//!
//! Small utilities shared by the grid and its observers: one-shot timers,
//! trailing-edge debouncing, element lookups, and listener lifetime
//! management.

pub mod debounce;
pub mod dom;
pub mod timers;

// Re-export commonly used types
pub use debounce::Debouncer;
pub use dom::{element_index, next_element_of, ListenerHandle};
pub use timers::set_timeout;
