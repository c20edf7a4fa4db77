//! Utility functions for RustDVD

use crate::error::{Result, RustDvdError};

/// Parse hex text such as `"12 00 00 00 24 00"` or `"0x1200000024"` into bytes
pub fn parse_hex_bytes(text: &str) -> Result<Vec<u8>> {
    let cleaned: String = text
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .map(|part| part.trim_start_matches("0x").trim_start_matches("0X"))
        .collect();

    hex::decode(&cleaned)
        .map_err(|e| RustDvdError::parse(format!("invalid hex '{}': {}", text, e)))
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer
pub fn parse_u16(text: &str) -> Result<u16> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => text.parse::<u16>(),
    };
    parsed.map_err(|e| RustDvdError::parse(format!("invalid number '{}': {}", text, e)))
}

/// Classic 16-bytes-per-line hex dump with an ASCII column
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in data.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        out.push_str(&format!("{:04x}  {:<47}  {}\n", line * 16, hex.join(" "), ascii));
    }
    out
}
