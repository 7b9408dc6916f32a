//! DOM lookups and listener lifetime management

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, Node};

/// Position of `child` among the element children of `parent`.
pub fn element_index(parent: &Element, child: &Element) -> Option<usize> {
    let children = parent.children();
    for i in 0..children.length() {
        if let Some(candidate) = children.item(i) {
            if candidate.is_same_node(Some(child.as_ref())) {
                return Some(i as usize);
            }
        }
    }
    None
}

/// First element among the siblings following `node`.
///
/// Mutation records report text nodes as siblings too, while card indices
/// are derived from element positions only.
pub fn next_element_of(node: &Node) -> Option<Element> {
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        match sibling.dyn_into::<Element>() {
            Ok(element) => return Some(element),
            Err(other) => current = other.next_sibling(),
        }
    }
    None
}

/// A DOM event listener that stays registered exactly as long as this
/// handle is alive.
///
/// Dropping the handle unregisters the listener before the closure is
/// freed, so a late event on a removed card cannot fire into a dead
/// closure.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl ListenerHandle {
    pub fn add<F>(target: &EventTarget, event: &'static str, listener: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(listener) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if removed.is_err() {
            log::warn!("failed to unregister {} listener", self.event);
        }
    }
}
