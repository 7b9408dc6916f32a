//! Stable card handles

use std::fmt;

/// Opaque handle naming one card for the lifetime of its grid.
///
/// Card positions shift whenever cards are inserted or removed, so size
/// observers and image listeners refer to their card by handle; the grid
/// resolves the handle to the current position when an event arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardId(u32);

impl CardId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}
