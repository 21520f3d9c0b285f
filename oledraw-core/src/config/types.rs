//! Editor configuration
//!
//! Settings the editor facade is built from. Configuration is loaded from
//! TOML or postcard binary by the format crate.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::geometry::PanelGeometry;

/// Maximum controller label length
pub const MAX_LABEL_LEN: usize = 16;

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Default minimum side length of a selection, in pixels
pub const DEFAULT_SELECTION_MIN: u16 = 2;

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditorConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    /// Controller name (e.g., "sh1106")
    pub controller: String<MAX_LABEL_LEN>,
    /// Display RAM layout
    pub panel: PanelGeometry,
    /// Initial brush side length (clamped on use)
    pub brush: u8,
    /// Drags smaller than this on either axis do not select
    pub selection_min: u16,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let mut controller = String::new();
        let _ = controller.push_str("sh1106");
        Self {
            version: CONFIG_VERSION,
            controller,
            panel: PanelGeometry::SH1106,
            brush: 1,
            selection_min: DEFAULT_SELECTION_MIN,
        }
    }
}

impl EditorConfig {
    /// Create the default (SH1106) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for a specific panel
    pub fn with_panel(controller: &str, panel: PanelGeometry) -> Self {
        let mut config = Self::default();
        config.controller.clear();
        // Truncate to the label capacity
        for ch in controller.chars() {
            if config.controller.push(ch).is_err() {
                break;
            }
        }
        config.panel = panel;
        config
    }
}
