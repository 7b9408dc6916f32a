//! JavaScript-facing API
//!
//! The thin `#[wasm_bindgen]` surface over the grid: a constructor taking
//! the container element and a configuration object, plus the runtime
//! animation trigger. All validation happens here, before the grid touches
//! the DOM; errors cross the boundary as JS exceptions.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::grid::errors::GridError;
use crate::grid::Grid;
use crate::models::config::GridConfig;

/// Masonry grid handle exported to JavaScript.
///
/// ```js
/// const grid = new MasonryGrid(document.querySelector("#grid"), {
///     animation: true,
///     animationType: "slideIn",
///     animationDelay: 300,
///     observeMutations: true,
/// });
/// grid.triggerAnimation("fade");
/// ```
#[wasm_bindgen]
pub struct MasonryGrid {
    grid: Grid,
}

#[wasm_bindgen]
impl MasonryGrid {
    /// Build a grid over `element`.
    ///
    /// # Arguments
    /// * `element` - the container whose element children become cards
    /// * `config` - optional configuration object; missing fields default
    ///
    /// # Errors
    /// Rejects a missing container element and a non-conforming
    /// configuration object, in both cases before any DOM mutation.
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<Element>, config: JsValue) -> Result<MasonryGrid, JsValue> {
        let element = match element {
            Some(element) => element,
            None => return Err(GridError::MissingContainer.into()),
        };
        let config = GridConfig::from_js(config)?;
        log::info!("creating masonry grid: {:?}", config);
        let grid = Grid::new(element, config)?;
        Ok(MasonryGrid { grid })
    }

    /// Re-run the entry animation with a new transition style.
    #[wasm_bindgen(js_name = triggerAnimation)]
    pub fn trigger_animation(&self, animation_type: &str) {
        self.grid.trigger_animation(animation_type);
    }
}
