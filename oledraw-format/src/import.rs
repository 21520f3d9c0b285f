//! Hex dump import
//!
//! Accepts C array source as produced by [`crate::export`], or any text
//! holding hex byte values.

use alloc::vec::Vec;

use oledraw_core::config::PAGE_HEIGHT;
use oledraw_core::{HardwareCodec, PanelGeometry, RegionImage};

/// Page height of a region without a size hint
const DEFAULT_REGION_HEIGHT: u16 = 8;

/// Width assumed for long regions without a size hint
const DEFAULT_REGION_WIDTH: u16 = 128;

/// Import errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImportError {
    /// No hex values found in the input
    NoData,
    /// Size hint describes an empty or oversized region
    InvalidSize,
}

/// Which token forms count as a byte
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tokens {
    /// `0x`-prefixed values only
    Prefixed,
    /// Prefixed values and bare two-digit hex words
    PrefixedOrBare,
}

/// Extract hex byte values from text
///
/// Recognizes `0x`/`0X` followed by hex digits, and bare two-digit hex
/// words such as `A1`. When the text contains a `{ ... }` block only its
/// contents are scanned. Values wider than a byte keep their low byte.
pub fn parse_hex_bytes(text: &str) -> Vec<u8> {
    scan(array_body(text), Tokens::PrefixedOrBare)
}

/// Parse a full-frame dump into a buffer of exactly `buffer_len()` bytes
///
/// Longer input is truncated and shorter input padded with zeros.
pub fn parse_frame(text: &str, geometry: &PanelGeometry) -> Result<Vec<u8>, ImportError> {
    let mut bytes = parse_hex_bytes(text);
    if bytes.is_empty() {
        return Err(ImportError::NoData);
    }
    let expected = geometry.buffer_len();
    if bytes.len() != expected {
        warn!(
            "frame import: {} bytes, expected {}; resizing",
            bytes.len(),
            expected
        );
    }
    bytes.resize(expected, 0x00);
    Ok(bytes)
}

/// Parse a region dump into a minimal-size image
///
/// The size comes from a `(WxH region` comment when present. Otherwise
/// short dumps are taken as one page row and longer ones as full-width
/// pages. Bytes are read in packed page layout.
pub fn parse_region(text: &str) -> Result<RegionImage, ImportError> {
    let bytes = scan(array_body(text), Tokens::Prefixed);
    if bytes.is_empty() {
        return Err(ImportError::NoData);
    }

    let (width, height) = match size_hint(text) {
        Some((0, _)) | Some((_, 0)) => return Err(ImportError::InvalidSize),
        Some((w, h)) if !hint_fits(w, h, bytes.len()) => return Err(ImportError::InvalidSize),
        Some(size) => size,
        None if bytes.len() < DEFAULT_REGION_WIDTH as usize => {
            (bytes.len() as u16, DEFAULT_REGION_HEIGHT)
        }
        None => {
            let pages = bytes.len().div_ceil(DEFAULT_REGION_WIDTH as usize);
            let height = u16::try_from(pages * DEFAULT_REGION_HEIGHT as usize)
                .map_err(|_| ImportError::InvalidSize)?;
            (DEFAULT_REGION_WIDTH, height)
        }
    };

    debug!(
        "region import: {}x{} from {} bytes",
        width,
        height,
        bytes.len()
    );
    let codec = HardwareCodec::default();
    Ok(codec.region_from_bytes(width, height, &bytes))
}

/// Whether a `w`x`h` hint is backed by the data it came with
///
/// A dump may stop short of its last page row but not by more.
fn hint_fits(width: u16, height: u16, len: usize) -> bool {
    let pages = (height as u64).div_ceil(PAGE_HEIGHT as u64);
    let needed = pages * width as u64;
    needed <= len as u64 + width as u64
}

/// Text between the first `{` and the last `}`, or all of it
fn array_body(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start + 1..end],
        _ => text,
    }
}

fn scan(text: &str, tokens: Tokens) -> Vec<u8> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter_map(|word| parse_token(word, tokens))
        .collect()
}

fn parse_token(word: &str, tokens: Tokens) -> Option<u8> {
    let digits = match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        Some(digits) => digits,
        None if tokens == Tokens::PrefixedOrBare && word.len() == 2 => word,
        None => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u8, |acc, c| {
        let d = c.to_digit(16)? as u8;
        Some(acc.wrapping_shl(4) | d)
    })
}

/// Dimensions from a `(WxH region` marker
fn size_hint(text: &str) -> Option<(u16, u16)> {
    text.match_indices('(').find_map(|(i, _)| {
        let rest = &text[i + 1..];
        let (dims, tail) = rest.split_once(' ')?;
        if !tail.starts_with("region") {
            return None;
        }
        let (w, h) = dims.split_once('x')?;
        Some((w.parse().ok()?, h.parse().ok()?))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{frame_to_c_array, region_to_c_array};
    use alloc::vec;
    use oledraw_core::LogicalGrid;
    use proptest::prelude::*;

    #[test]
    fn test_prefixed_and_bare() {
        assert_eq!(
            parse_hex_bytes("0xFF, 0x00, a1 0Xb2"),
            vec![0xFF, 0x00, 0xA1, 0xB2]
        );
    }

    #[test]
    fn test_plain_hex_text() {
        assert_eq!(parse_hex_bytes("DE AD BE EF"), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_wide_value_keeps_low_byte() {
        assert_eq!(parse_hex_bytes("0x1234 0xABC"), vec![0x34, 0xBC]);
    }

    #[test]
    fn test_only_braces_scanned() {
        let text = "const unsigned char ab[2] = { 0x01, 0x02 };";
        assert_eq!(parse_hex_bytes(text), vec![0x01, 0x02]);
    }

    #[test]
    fn test_ignores_non_hex_words() {
        assert_eq!(parse_hex_bytes("0xZZ, gg, 0x, 123, 0x0f"), vec![0x0F]);
    }

    #[test]
    fn test_frame_resize() {
        let geometry = PanelGeometry::SSD1306;
        let short = parse_frame("{ 0x01, 0x02 }", &geometry).unwrap();
        assert_eq!(short.len(), 1024);
        assert_eq!(&short[..3], &[0x01, 0x02, 0x00]);

        let long = "FF ".repeat(2000);
        let frame = parse_frame(&long, &geometry).unwrap();
        assert_eq!(frame.len(), 1024);
        assert!(frame.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_frame_no_data() {
        assert_eq!(
            parse_frame("nothing here", &PanelGeometry::SH1106),
            Err(ImportError::NoData)
        );
    }

    #[test]
    fn test_frame_export_import() {
        let mut grid = LogicalGrid::default();
        oledraw_core::raster::draw_ellipse(&mut grid, (4, 4), (100, 50), true, Default::default());
        let codec = HardwareCodec::default();
        let bytes = codec.encode(&grid);
        let text = frame_to_c_array("screen_data", &bytes);
        let parsed = parse_frame(&text, codec.geometry()).unwrap();
        assert_eq!(parsed, bytes);
        assert_eq!(codec.decode(&parsed), grid);
    }

    #[test]
    fn test_region_with_hint() {
        let mut image = RegionImage::blank(22, 12);
        image.set(0, 0, true);
        image.set(21, 11, true);
        let text = region_to_c_array(&image, (3, 4));
        let parsed = parse_region(&text).unwrap();
        assert_eq!(parsed, image);
    }

    #[test]
    fn test_region_short_without_hint() {
        let parsed = parse_region("{ 0x01, 0x80, 0x00 }").unwrap();
        assert_eq!((parsed.width(), parsed.height()), (3, 8));
        assert!(parsed.get(0, 0));
        assert!(parsed.get(1, 7));
        assert_eq!(parsed.lit_count(), 2);
    }

    #[test]
    fn test_region_long_without_hint() {
        let text = "0x01 ".repeat(130);
        let parsed = parse_region(&text).unwrap();
        assert_eq!((parsed.width(), parsed.height()), (128, 16));
        assert!(parsed.get(127, 0));
        assert!(parsed.get(1, 8));
        assert!(!parsed.get(2, 8));
    }

    #[test]
    fn test_region_ignores_bare_words() {
        assert_eq!(parse_region("AB CD"), Err(ImportError::NoData));
    }

    #[test]
    fn test_region_zero_size_hint() {
        let text = "// (0x8 region at (0, 0))\n{ 0x01 }";
        assert_eq!(parse_region(text), Err(ImportError::InvalidSize));
    }

    #[test]
    fn test_region_oversized_hint() {
        let text = "const uint8_t r[] = { 0x01 }; // (65535x65535 region";
        assert_eq!(parse_region(text), Err(ImportError::InvalidSize));
        // 8x16 wants 16 bytes
        let text = "{ 0x01, 0x02 } (8x16 region";
        assert_eq!(parse_region(text), Err(ImportError::InvalidSize));
    }

    #[test]
    fn test_region_hint_short_last_page() {
        // 4x16 wants 8 bytes; the second page row is cut off
        let text = "{ 0xFF, 0x00, 0x00, 0x00, 0x01 } (4x16 region";
        let image = parse_region(text).unwrap();
        assert_eq!((image.width(), image.height()), (4, 16));
        assert_eq!(image.lit_count(), 9);
        assert!(image.get(0, 8));
    }

    #[test]
    fn test_size_hint() {
        assert_eq!(
            size_hint("// Image Data (22x8 region at (1, 2))"),
            Some((22, 8))
        );
        assert_eq!(size_hint("(22x8 pixels)"), None);
        assert_eq!(size_hint("no hint"), None);
    }

    proptest! {
        #[test]
        fn prop_frame_text_round_trip(bytes in proptest::collection::vec(any::<u8>(), 1..1100)) {
            let geometry = PanelGeometry::SH1106;
            let text = frame_to_c_array("f", &bytes);
            let parsed = parse_frame(&text, &geometry).unwrap();
            let n = bytes.len().min(geometry.buffer_len());
            prop_assert_eq!(&parsed[..n], &bytes[..n]);
            prop_assert!(parsed[n..].iter().all(|&b| b == 0));
        }
    }
}
