//! Hexadecimal helpers used for tag identifiers and log output.
//!
//! Identifiers are shown upper-case without separators (`04AABBCCDD11`);
//! frames are logged with a space between bytes. The parser accepts either
//! case and optional whitespace.

use std::fmt::Write;

/// Convert a byte slice to an upper-case hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to an upper-case hex string with a single space
/// between each byte.
///
/// Example: `&[0x7e, 0xff]` -> `"7E FF"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace. Returns an error message
/// string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let text = String::from_utf8_lossy(pair);
            // from_str_radix alone would accept a leading '+'
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(format!("invalid hex pair '{}'", text));
            }
            u8::from_str_radix(&text, 16)
                .map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
