//! Event channel between cards, observers, and the grid
//!
//! Cards and observers publish notifications here; the grid is the sole
//! subscriber and reacts by recomputing layout. The bus is owned by the
//! grid and injected by `Rc` into every publisher, so there is no
//! process-wide channel state and tests can hand in their own listeners.

use std::cell::RefCell;

use crate::models::ids::CardId;

/// Notification published on the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridEvent {
    /// An image without explicit dimensions inside a card finished loading.
    ImageLoaded { id: CardId },
    /// A new card element appeared at `index` among the container children.
    CardAdded { index: usize },
    /// The card element that occupied `index` left the container.
    CardRemoved { index: usize },
    /// A card's box size changed.
    CardResized { id: CardId },
}

type Listener = Box<dyn Fn(&GridEvent)>;

/// Publish/subscribe dispatcher shared by a grid, its cards, and its
/// observers.
///
/// Dispatch is synchronous on the single UI thread, in subscription order.
/// Listeners must not subscribe re-entrantly from inside a dispatch.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&GridEvent) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn dispatch(&self, event: &GridEvent) {
        for listener in self.listeners.borrow().iter() {
            listener(event);
        }
    }
}
