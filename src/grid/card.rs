//! One grid item

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::events::{EventBus, GridEvent};
use crate::models::ids::CardId;
use crate::utils::dom::ListenerHandle;

use super::errors::GridError;
use super::observer::SizeChangeObserver;
use super::style;

/// Wraps one card element of the grid.
///
/// The card applies the structural class, wires image-load detection, and
/// owns the size observer watching its box. Width and height are read from
/// the element on every access; the only cached layout state is the offset
/// applied by the most recent layout pass.
pub struct Card {
    element: HtmlElement,
    id: CardId,
    offset: i32,
    _image_hooks: Vec<ListenerHandle>,
    _size_watch: SizeChangeObserver,
}

impl Card {
    /// Wrap `element` and wire its observation.
    ///
    /// With animation enabled the element content is re-wrapped in an inner
    /// container so the outer layer can carry the layout transform while
    /// the inner content fades or scales, and every descendant `<img>`
    /// without explicit `width` and `height` attributes gets a `load`
    /// listener publishing [`GridEvent::ImageLoaded`]; such images change
    /// the card height when they arrive, so layout must re-run.
    pub(crate) fn new(
        element: Element,
        id: CardId,
        animate: bool,
        bus: Rc<EventBus>,
    ) -> Result<Self, GridError> {
        let element: HtmlElement = element
            .dyn_into()
            .map_err(|_| GridError::Dom("grid item is not an HTMLElement".to_string()))?;
        element
            .class_list()
            .add_1(style::ITEM)
            .map_err(GridError::from_js)?;

        let mut image_hooks = Vec::new();
        if animate {
            element.set_inner_html(&format!(
                "<div class=\"{}\">{}</div>",
                style::ITEM_INNER,
                element.inner_html()
            ));
            image_hooks = Self::watch_images(&element, id, &bus)?;
        }
        let size_watch = SizeChangeObserver::new(&element, id, Rc::clone(&bus))?;

        Ok(Self {
            element,
            id,
            offset: 0,
            _image_hooks: image_hooks,
            _size_watch: size_watch,
        })
    }

    /// Attach load listeners to the images whose rendered height is unknown
    /// until they load. Runs after the inner-wrap rewrite so the listeners
    /// land on the live nodes.
    fn watch_images(
        element: &HtmlElement,
        id: CardId,
        bus: &Rc<EventBus>,
    ) -> Result<Vec<ListenerHandle>, GridError> {
        let mut hooks = Vec::new();
        let images = element.query_selector_all("img").map_err(GridError::from_js)?;
        for i in 0..images.length() {
            let image = match images
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
            {
                Some(image) => image,
                None => continue,
            };
            if image.get_attribute("width").is_some() || image.get_attribute("height").is_some() {
                continue;
            }
            let bus = Rc::clone(bus);
            let hook = ListenerHandle::add(image.as_ref(), "load", move || {
                bus.dispatch(&GridEvent::ImageLoaded { id });
            })
            .map_err(GridError::from_js)?;
            hooks.push(hook);
        }
        Ok(hooks)
    }

    /// Stable handle naming this card.
    pub fn id(&self) -> CardId {
        self.id
    }

    pub(crate) fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Move the card up by `offset` pixels and remember the value.
    pub fn translate(&mut self, offset: i32) {
        let value = format!("translateY(-{}px)", offset);
        if let Err(err) = self.element.style().set_property("transform", &value) {
            log::warn!("failed to set card transform: {:?}", err);
        }
        self.offset = offset;
    }

    /// Start the entry transition.
    pub fn animate(&self) {
        reveal(&self.element);
    }

    /// Clear the reveal marker so the transition can run again.
    pub fn reset(&self) {
        if let Err(err) = self.element.class_list().remove_1(style::REVEAL) {
            log::warn!("failed to remove reveal class: {:?}", err);
        }
    }

    /// Rendered height, read live from the element.
    pub fn height(&self) -> i32 {
        self.element.offset_height()
    }

    /// Rendered width, read live from the element.
    pub fn width(&self) -> i32 {
        self.element.offset_width()
    }

    /// Translation applied by the most recent layout pass.
    pub fn offset(&self) -> i32 {
        self.offset
    }
}

/// Add the reveal marker to `element`; the transition itself is CSS-driven.
pub(crate) fn reveal(element: &HtmlElement) {
    if let Err(err) = element.class_list().add_1(style::REVEAL) {
        log::warn!("failed to add reveal class: {:?}", err);
    }
}
