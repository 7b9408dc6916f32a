//! Grid configuration

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::grid::errors::GridError;

/// Animation and observation settings, fixed at grid construction.
///
/// Built from the caller-supplied JavaScript object; missing fields keep
/// their defaults, and a missing object means all defaults. The only later
/// change goes through `triggerAnimation`, which replaces `animation_type`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Staggered entry transitions on or off.
    pub animation: bool,
    /// Name of the entry transition, consumed by the host stylesheet as a
    /// container class suffix. Recognized by convention: fade,
    /// translateBottom, translateTop, scale, scaleUp, scaleDown, slide,
    /// slideIn, flip. Not validated here.
    pub animation_type: String,
    /// Stagger step and post-retrigger pause, in milliseconds.
    pub animation_delay: u32,
    /// Watch the container child list for cards added or removed at runtime.
    pub observe_mutations: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            animation: true,
            animation_type: "fade".to_string(),
            animation_delay: 200,
            observe_mutations: false,
        }
    }
}

impl GridConfig {
    /// Parse the configuration object handed over from JavaScript.
    pub fn from_js(value: JsValue) -> Result<Self, GridError> {
        if value.is_null() || value.is_undefined() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|err| GridError::BadConfig(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert!(config.animation);
        assert_eq!(config.animation_type, "fade");
        assert_eq!(config.animation_delay, 200);
        assert!(!config.observe_mutations);
    }

    #[test]
    fn test_empty_object_takes_all_defaults() {
        let config: GridConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let config: GridConfig =
            serde_json::from_str(r#"{"animationType":"slideIn","animationDelay":300}"#).unwrap();
        assert!(config.animation);
        assert_eq!(config.animation_type, "slideIn");
        assert_eq!(config.animation_delay, 300);
        assert!(!config.observe_mutations);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config: GridConfig =
            serde_json::from_str(r#"{"animation":false,"columns":4}"#).unwrap();
        assert!(!config.animation);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result: Result<GridConfig, _> =
            serde_json::from_str(r#"{"animationDelay":"soon"}"#);
        assert!(result.is_err());
    }
}
