//! C array export
//!
//! Output is meant to be pasted straight into firmware source.

use alloc::string::String;
use core::fmt::Write;

use oledraw_core::{HardwareCodec, PageLayout, RegionImage};

/// Values per output line
pub const BYTES_PER_LINE: usize = 16;

const INDENT: &str = "    ";

/// Format a full hardware buffer as `const unsigned char <name>[N]`
pub fn frame_to_c_array(name: &str, bytes: &[u8]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "const unsigned char {}[{}] = {{", name, bytes.len());
    write_body(&mut out, bytes);
    out
}

/// Format a clipboard region as a packed `imageData` array
///
/// The leading comment records the size and origin so the region can be
/// imported again without guessing its shape.
pub fn region_to_c_array(image: &RegionImage, origin: (i32, i32)) -> String {
    let bytes = HardwareCodec::default().region_bytes(image, PageLayout::Packed);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Image Data ({}x{} region at ({}, {}))",
        image.width(),
        image.height(),
        origin.0,
        origin.1
    );
    let _ = writeln!(out, "const uint8_t imageData[{}] = {{", bytes.len());
    write_body(&mut out, &bytes);
    out
}

fn write_body(out: &mut String, bytes: &[u8]) {
    for (i, line) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(INDENT);
        for (j, byte) in line.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{:02X}", byte);
        }
    }
    if !bytes.is_empty() {
        out.push('\n');
    }
    out.push_str("};");
}
