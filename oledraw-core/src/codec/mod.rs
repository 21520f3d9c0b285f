//! Hardware page codec
//!
//! Translates between the logical grid and the page-organized RAM image of
//! a paged OLED controller. The byte layout is the interop contract with
//! real controllers and exported data, so it must stay bit-exact:
//!
//! ```text
//! page       = y / 8
//! bit        = y % 8            (LSB is the top row of the page)
//! byte_index = page * ram_page_width + x + column_offset
//! ```

pub mod page;

pub use page::{HardwareCodec, PageLayout};
