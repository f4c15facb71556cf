//! Hex text form of keys, as printed and accepted by the tools.

use anyhow::{bail, Context, Result};

/// Lowercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Parse hex text (optional `0x` prefix, `_` separators allowed).
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|&c| c != '_')
        .collect();

    if !digits.is_ascii() {
        bail!("Hex key '{}' contains non-ASCII characters", text);
    }
    if digits.len() % 2 != 0 {
        bail!("Hex key '{}' has an odd number of digits", text);
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("Invalid hex byte '{}' in '{}'", &digits[i..i + 2], text))
        })
        .collect()
}
