//! CSS class-name contract with the host stylesheet
//!
//! The widget only toggles membership in these classes; the transitions
//! themselves are defined by the host page. The one inline style besides
//! the card translation transform is the container height.

/// Structural marker applied to every card element.
pub const ITEM: &str = "masonry-item";

/// Inner wrapper that carries the fade/scale part of the entry transition,
/// leaving the outer element free for the layout transform.
pub const ITEM_INNER: &str = "masonry-item-inner";

/// Container class prefix selecting the entry transition; the lowercased
/// animation type name is appended.
pub const ANIMATION_PREFIX: &str = "masonry-grid-animation-";

/// Reveal marker whose addition starts a card's entry transition.
pub const REVEAL: &str = "masonry-animation-complete";

/// Container class for an animation type name.
pub fn animation_class(animation_type: &str) -> String {
    format!("{}{}", ANIMATION_PREFIX, animation_type)
}
