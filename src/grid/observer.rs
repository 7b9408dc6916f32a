//! DOM structure and card size observation

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord, ResizeObserver,
    ResizeObserverEntry,
};

use crate::events::{EventBus, GridEvent};
use crate::models::ids::CardId;
use crate::utils::dom;

use super::errors::GridError;

/// Watches the grid container for cards entering or leaving the child list
/// and publishes [`GridEvent::CardAdded`] / [`GridEvent::CardRemoved`] with
/// the affected index.
///
/// Mutations anywhere in the subtree are tolerated; only records whose
/// target is the container itself describe structural children. Only the
/// first added or removed node of a record is indexed; batched multi-node
/// records beyond the first are not individually re-indexed.
pub struct DomChangeObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(Array, MutationObserver)>,
}

impl DomChangeObserver {
    pub(crate) fn new(container: &Element, bus: Rc<EventBus>) -> Result<Self, GridError> {
        let target = container.clone();
        let callback = Closure::wrap(Box::new(move |records: Array, _observer: MutationObserver| {
            for record in records.iter() {
                let record: MutationRecord = record.unchecked_into();
                Self::process_record(&target, &bus, &record);
            }
        }) as Box<dyn FnMut(Array, MutationObserver)>);

        let observer =
            MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(GridError::from_js)?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer
            .observe_with_options(container.as_ref(), &options)
            .map_err(GridError::from_js)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn process_record(container: &Element, bus: &EventBus, record: &MutationRecord) {
        if record.type_() != "childList" {
            return;
        }
        let target = match record.target() {
            Some(target) => target,
            None => return,
        };
        if !container.is_same_node(Some(&target)) {
            return;
        }

        let added = record.added_nodes();
        if added.length() > 0 {
            if let Some(element) = added.get(0).and_then(|node| node.dyn_into::<Element>().ok()) {
                match dom::element_index(container, &element) {
                    Some(index) => bus.dispatch(&GridEvent::CardAdded { index }),
                    None => log::warn!("added node is no longer a container child"),
                }
            }
            return;
        }

        let removed = record.removed_nodes();
        if removed.length() > 0
            && removed
                .get(0)
                .and_then(|node| node.dyn_into::<Element>().ok())
                .is_some()
        {
            let index = Self::removal_index(container, record);
            bus.dispatch(&GridEvent::CardRemoved { index });
        }
    }

    /// Index the removed node used to occupy, derived from the record's
    /// previous sibling: no previous sibling means the first slot; a
    /// previous sibling with no following element means the removed node
    /// was the last child.
    fn removal_index(container: &Element, record: &MutationRecord) -> usize {
        let previous = match record.previous_sibling() {
            Some(previous) => previous,
            None => return 0,
        };
        match dom::next_element_of(&previous) {
            Some(next) => dom::element_index(container, &next)
                .unwrap_or_else(|| container.child_element_count() as usize),
            None => container.child_element_count() as usize,
        }
    }
}

impl Drop for DomChangeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches one card element's box and publishes [`GridEvent::CardResized`]
/// with the card's stable handle.
///
/// The handle is resolved to the card's current position when the grid
/// handles the event, so index shifts between observation and delivery are
/// harmless.
pub struct SizeChangeObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(Array, ResizeObserver)>,
}

impl SizeChangeObserver {
    pub(crate) fn new(
        element: &HtmlElement,
        id: CardId,
        bus: Rc<EventBus>,
    ) -> Result<Self, GridError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: ResizeObserver| {
            for entry in entries.iter() {
                let entry: ResizeObserverEntry = entry.unchecked_into();
                if !entry.content_box_size().is_undefined() {
                    bus.dispatch(&GridEvent::CardResized { id });
                }
            }
        }) as Box<dyn FnMut(Array, ResizeObserver)>);

        let observer =
            ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(GridError::from_js)?;
        observer.observe(element.as_ref());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SizeChangeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
