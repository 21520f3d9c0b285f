//! Interchange formats for oledraw
//!
//! Everything that turns editor state into text or bytes for the outside
//! world, and back:
//!
//! - [`export`]: C array source for full frames and clipboard regions
//! - [`import`]: hex dumps pasted from C source or plain hex text
//! - [`config`]: editor configuration from TOML, with a postcard fallback
//!
//! Exported arrays use the controller's page layout: one byte per column
//! per 8-row page, least significant bit at the top.
//! ```text
//! const unsigned char screen[1056] = {
//!     0x00, 0x00, 0xFF, 0x81, ...
//! };
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod config;
pub mod export;
pub mod import;

pub use config::{load, parse_toml, ConfigError};
pub use export::{frame_to_c_array, region_to_c_array};
pub use import::{parse_frame, parse_hex_bytes, parse_region, ImportError};
