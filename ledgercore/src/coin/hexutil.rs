use crate::Result;

/// Functions for converting between byte buffers and their hex string form.
///
/// Hex strings are always lowercase, even-length and unprefixed. They are the common substrate
/// used by the other modules to move between wire bytes and human-readable or storable form.

/// Encodes a byte buffer as a lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decodes a hex string into its byte buffer.
///
/// Fails with [Error::MalformedHex] if the string has an odd length or contains non-hex
/// characters.
/// [Error::MalformedHex]: crate::Error::MalformedHex
pub fn to_bytes(hex_str: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_str)?)
}

/// Renders a hex string with a space after every byte pair, for display only.
///
/// This is never used in a round-trip path.
pub fn pretty(hex_str: &str) -> String {
    let mut out = String::with_capacity(hex_str.len() + hex_str.len() / 2);
    for (i, c) in hex_str.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
