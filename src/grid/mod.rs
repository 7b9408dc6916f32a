//! Grid orchestration
//!
//! The grid owns the ordered card sequence and is the single writer of the
//! container element: cards and observers only publish events, and the grid
//! reacts to every one of them with a full layout recompute. Partial
//! updates (translating only the successors in one column) are deliberately
//! absent: a height change can alter a row maximum and with it the offsets
//! in every column.

pub mod card;
pub mod errors;
pub mod observer;
pub mod style;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::events::{EventBus, GridEvent};
use crate::layout;
use crate::models::config::GridConfig;
use crate::models::ids::CardId;
use crate::utils::debounce::Debouncer;
use crate::utils::dom::ListenerHandle;
use crate::utils::timers;

use card::Card;
use errors::GridError;
use observer::DomChangeObserver;

/// Quiet period before a resize triggers a recompute.
const RESIZE_DEBOUNCE_MS: u32 = 200;

/// A masonry grid over one container element.
///
/// Construction discovers the existing cards, runs the first layout pass,
/// schedules the staggered entry reveal, and wires the event sources:
/// per-card size observation, image loads, window resize, and (when
/// configured) container child-list mutations.
pub struct Grid {
    state: Rc<RefCell<GridState>>,
    _resize_hook: ListenerHandle,
    _dom_watch: Option<DomChangeObserver>,
}

struct GridState {
    container: HtmlElement,
    config: GridConfig,
    cards: Vec<Card>,
    bus: Rc<EventBus>,
    next_card_id: u32,
}

impl Grid {
    /// Build the grid over `container` and run the initial layout.
    pub fn new(container: Element, config: GridConfig) -> Result<Self, GridError> {
        let container: HtmlElement = container
            .dyn_into()
            .map_err(|_| GridError::Dom("the grid container is not an HTMLElement".to_string()))?;
        let bus = Rc::new(EventBus::new());

        if config.animation {
            container
                .class_list()
                .add_1(&style::animation_class(&config.animation_type.to_lowercase()))
                .map_err(GridError::from_js)?;
        }

        let state = Rc::new(RefCell::new(GridState {
            container,
            config,
            cards: Vec::new(),
            bus: Rc::clone(&bus),
            next_card_id: 0,
        }));

        {
            let mut state_ref = state.borrow_mut();
            state_ref.init_cards()?;
            state_ref.schedule_reveal_all();
            state_ref.recompute();
        }

        let weak = Rc::downgrade(&state);
        bus.subscribe(move |event| Grid::handle_event(&weak, event));

        let resize_hook = Self::hook_resize(&state)?;

        let dom_watch = if state.borrow().config.observe_mutations {
            let container = state.borrow().container.clone();
            Some(DomChangeObserver::new(container.as_ref(), Rc::clone(&bus))?)
        } else {
            None
        };

        log::info!(
            "masonry grid initialized with {} cards",
            state.borrow().cards.len()
        );

        Ok(Self {
            state,
            _resize_hook: resize_hook,
            _dom_watch: dom_watch,
        })
    }

    /// Switch the entry transition style and replay the staggered reveal
    /// after the configured delay.
    pub fn trigger_animation(&self, animation_type: &str) {
        let delay = {
            let mut state = self.state.borrow_mut();
            state.retarget_animation(animation_type);
            state.config.animation_delay
        };
        let weak = Rc::downgrade(&self.state);
        timers::set_timeout(
            move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow().schedule_reveal_all();
                }
            },
            delay as i32,
        );
    }

    /// Debounced full recompute on window resize; the column count is
    /// width-derived and must be re-evaluated.
    fn hook_resize(state: &Rc<RefCell<GridState>>) -> Result<ListenerHandle, GridError> {
        let window =
            web_sys::window().ok_or_else(|| GridError::Dom("no window object".to_string()))?;
        let debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS);
        let weak = Rc::downgrade(state);
        ListenerHandle::add(window.as_ref(), "resize", move || {
            let weak = weak.clone();
            debouncer.call(move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().recompute();
                }
            });
        })
        .map_err(GridError::from_js)
    }

    fn handle_event(state: &Weak<RefCell<GridState>>, event: &GridEvent) {
        let state = match state.upgrade() {
            Some(state) => state,
            None => return,
        };
        let mut state = state.borrow_mut();
        match *event {
            GridEvent::ImageLoaded { id } => {
                log::debug!("{} finished loading an image", id);
                state.recompute();
            }
            GridEvent::CardResized { id } => {
                match state.position_of(id) {
                    Some(position) => log::debug!("{} resized at position {}", id, position),
                    None => log::debug!("{} resized but is no longer in the grid", id),
                }
                state.recompute();
            }
            GridEvent::CardAdded { index } => state.insert_card(index),
            GridEvent::CardRemoved { index } => state.remove_card(index),
        }
    }
}

impl GridState {
    /// Discover the container's element children and wrap each in a card.
    fn init_cards(&mut self) -> Result<(), GridError> {
        let children = self.container.children();
        let mut elements = Vec::new();
        for i in 0..children.length() {
            if let Some(element) = children.item(i) {
                elements.push(element);
            }
        }
        self.cards.clear();
        for element in elements {
            let card = self.make_card(element)?;
            self.cards.push(card);
        }
        Ok(())
    }

    fn make_card(&mut self, element: Element) -> Result<Card, GridError> {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        Card::new(element, id, self.config.animation, Rc::clone(&self.bus))
    }

    /// Current position of the card named by `id`.
    fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// Full layout pass: derive columns, row heights, offsets, and the
    /// container height from the current DOM measurements, then write the
    /// results back. Safe to re-run at any time.
    fn recompute(&mut self) {
        let heights: Vec<i32> = self.cards.iter().map(Card::height).collect();
        let first_width = self.cards.first().map(Card::width);
        let columns = layout::column_count(self.container.offset_width(), first_width);
        let row_heights = layout::row_heights(&heights, columns);
        let offsets = layout::offsets(&heights, &row_heights, columns);
        for (card, offset) in self.cards.iter_mut().zip(offsets) {
            card.translate(offset);
        }
        let total = layout::container_height(&heights, columns);
        if let Err(err) = self
            .container
            .style()
            .set_property("height", &format!("{}px", total))
        {
            log::warn!("failed to set container height: {:?}", err);
        }
        log::debug!(
            "layout pass: {} cards, {} columns, container {}px",
            self.cards.len(),
            columns,
            total
        );
    }

    /// Schedule the staggered entry reveal for every card.
    fn schedule_reveal_all(&self) {
        for position in 0..self.cards.len() {
            self.schedule_reveal(position);
        }
    }

    /// Reveal the card at `position` after `position * animation_delay`;
    /// with animation disabled every delay is zero.
    fn schedule_reveal(&self, position: usize) {
        let card = match self.cards.get(position) {
            Some(card) => card,
            None => return,
        };
        let step = if self.config.animation {
            self.config.animation_delay
        } else {
            0
        };
        let delay = (position as u32)
            .saturating_mul(step)
            .min(i32::MAX as u32) as i32;
        let element = card.element().clone();
        timers::set_timeout(move || card::reveal(&element), delay);
    }

    /// React to a card element appearing at `index` among the children.
    fn insert_card(&mut self, index: usize) {
        let element = match self.container.children().item(index as u32) {
            Some(element) => element,
            None => {
                log::warn!("no child element at reported index {}", index);
                return;
            }
        };
        let card = match self.make_card(element) {
            Ok(card) => card,
            Err(err) => {
                log::warn!("failed to wrap added card: {}", err);
                return;
            }
        };
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
        self.schedule_reveal(index);
        log::debug!("card inserted at position {}", index);
        self.recompute();
    }

    /// React to the card element at `index` leaving the container. The
    /// card's observers disconnect when it drops.
    fn remove_card(&mut self, index: usize) {
        if index >= self.cards.len() {
            log::warn!(
                "removal reported at position {} but only {} cards exist",
                index,
                self.cards.len()
            );
            return;
        }
        self.cards.remove(index);
        log::debug!("card removed from position {}", index);
        self.recompute();
    }

    /// Swap the container's animation-type class and clear every reveal
    /// marker so the next reveal pass can replay the transition.
    fn retarget_animation(&mut self, animation_type: &str) {
        let class_list = self.container.class_list();
        let mut stale = Vec::new();
        for i in 0..class_list.length() {
            if let Some(name) = class_list.item(i) {
                if name.starts_with(style::ANIMATION_PREFIX) {
                    stale.push(name);
                }
            }
        }
        for name in stale {
            if let Err(err) = class_list.remove_1(&name) {
                log::warn!("failed to remove class {}: {:?}", name, err);
            }
        }
        for card in &self.cards {
            card.reset();
        }
        self.config.animation_type = animation_type.to_lowercase();
        if let Err(err) = class_list.add_1(&style::animation_class(&self.config.animation_type)) {
            log::warn!("failed to add animation class: {:?}", err);
        }
        log::debug!("animation type set to {}", self.config.animation_type);
    }
}
