//! Masonry layout mathematics
//!
//! This module computes the column count, per-row maximum heights, per-card
//! vertical offsets, and total container height for a masonry pack. It is
//! pure pixel arithmetic over sizes measured from the DOM by the grid; no
//! DOM types appear here, so everything is unit-testable natively.

pub mod masonry;

pub use masonry::{card_offset, column_count, container_height, offsets, row_heights};
