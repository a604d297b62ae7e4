//! # Transaction Root Comparison
//!
//! Roots are compared as `0x`-prefixed hexadecimal strings, ignoring case.

/// Render root bytes as `0x` followed by lowercase hex.
pub fn encode_root_hex(root: &[u8]) -> String {
    format!("0x{}", hex::encode(root))
}

/// Compare two hex-rendered roots, ignoring case and an optional `0x` prefix.
pub fn roots_match(declared_hex: &str, computed_hex: &str) -> bool {
    strip_hex_prefix(declared_hex).eq_ignore_ascii_case(strip_hex_prefix(computed_hex))
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
