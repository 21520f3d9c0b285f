//! Editor configuration loading
//!
//! Configuration is normally written by hand as TOML:
//!
//! ```toml
//! [panel]
//! controller = "ssd1306"
//! # Optional overrides of the preset
//! column_offset = 0
//!
//! [brush]
//! size = 2
//!
//! [selection]
//! min_size = 2
//! ```
//!
//! A compact postcard encoding of [`EditorConfig`] is accepted as well,
//! for configuration stored by the editor itself.

use alloc::string::String;
use alloc::vec::Vec;
use core::str;

use serde::Deserialize;

use oledraw_core::config::CONFIG_VERSION;
use oledraw_core::{BrushSize, EditorConfig, GeometryError, PanelGeometry};

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML syntax or type error
    TomlParse,
    /// Binary data could not be decoded
    Deserialize,
    /// Configuration could not be encoded
    Serialize,
    /// Controller name has no preset
    UnknownController,
    /// Panel geometry failed validation
    Geometry(GeometryError),
    /// Config version mismatch
    VersionMismatch,
}

impl From<GeometryError> for ConfigError {
    fn from(e: GeometryError) -> Self {
        ConfigError::Geometry(e)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    version: Option<u8>,
    panel: RawPanel,
    brush: RawBrush,
    selection: RawSelection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPanel {
    controller: Option<String>,
    width: Option<u16>,
    height: Option<u16>,
    ram_page_width: Option<u16>,
    column_offset: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBrush {
    size: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSelection {
    min_size: Option<u16>,
}

/// Panel preset for a controller name
pub fn controller_preset(name: &str) -> Option<PanelGeometry> {
    if name.eq_ignore_ascii_case("sh1106") {
        Some(PanelGeometry::SH1106)
    } else if name.eq_ignore_ascii_case("ssd1306") {
        Some(PanelGeometry::SSD1306)
    } else {
        None
    }
}

/// Parse TOML configuration
///
/// Missing sections and keys take their defaults.
pub fn parse_toml(input: &str) -> Result<EditorConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(input).map_err(|_| ConfigError::TomlParse)?;

    if let Some(version) = raw.version {
        if version != CONFIG_VERSION {
            warn!(
                "Config version mismatch: found {}, expected {}",
                version, CONFIG_VERSION
            );
            return Err(ConfigError::VersionMismatch);
        }
    }

    let defaults = EditorConfig::default();
    let controller = raw
        .panel
        .controller
        .as_deref()
        .unwrap_or(defaults.controller.as_str());
    let preset = controller_preset(controller).ok_or(ConfigError::UnknownController)?;

    let panel = PanelGeometry::new(
        raw.panel.width.unwrap_or(preset.width),
        raw.panel.height.unwrap_or(preset.height),
        raw.panel.ram_page_width.unwrap_or(preset.ram_page_width),
        raw.panel.column_offset.unwrap_or(preset.column_offset),
    )?;

    let mut config = EditorConfig::with_panel(controller, panel);
    if let Some(size) = raw.brush.size {
        let size = size.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        config.brush = BrushSize::new(size).get();
    }
    if let Some(min_size) = raw.selection.min_size {
        config.selection_min = min_size;
    }

    log_config_summary(&config);
    Ok(config)
}

/// Encode a configuration with postcard
pub fn to_binary(config: &EditorConfig) -> Result<Vec<u8>, ConfigError> {
    postcard::to_allocvec(config).map_err(|_| ConfigError::Serialize)
}

/// Decode a postcard configuration
pub fn from_binary(data: &[u8]) -> Result<EditorConfig, ConfigError> {
    let config: EditorConfig = postcard::from_bytes(data).map_err(|_| ConfigError::Deserialize)?;

    if config.version != CONFIG_VERSION {
        warn!(
            "Config version mismatch: found {}, expected {}",
            config.version, CONFIG_VERSION
        );
        return Err(ConfigError::VersionMismatch);
    }
    config.panel.validate()?;

    log_config_summary(&config);
    Ok(config)
}

/// Load configuration from raw bytes
///
/// Tries TOML first, falls back to binary postcard format. Semantic errors
/// in otherwise valid TOML are returned as-is.
pub fn load(data: &[u8]) -> Result<EditorConfig, ConfigError> {
    let toml_error = match str::from_utf8(data) {
        Ok(text) => match parse_toml(text) {
            Ok(config) => {
                debug!("Loaded configuration from TOML");
                return Ok(config);
            }
            Err(ConfigError::TomlParse) => Some(ConfigError::TomlParse),
            Err(e) => return Err(e),
        },
        Err(_) => None,
    };

    debug!("Trying binary configuration");
    match from_binary(data) {
        Err(ConfigError::Deserialize) => Err(toml_error.unwrap_or(ConfigError::Deserialize)),
        result => result,
    }
}

fn log_config_summary(config: &EditorConfig) {
    debug!(
        "  panel {}x{}, ram width {}, offset {}",
        config.panel.width,
        config.panel.height,
        config.panel.ram_page_width,
        config.panel.column_offset
    );
    debug!(
        "  brush {}, selection min {}",
        config.brush, config.selection_min
    );
}
