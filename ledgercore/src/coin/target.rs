use crate::{Error, Result};
use num::{BigUint, Zero};

/// Functions for converting between the packed 32-bit "difficulty bits" representation found
/// in block headers and the full-precision 256-bit target integer it stands for.
///
/// The packed form holds an exponent byte and a 3-byte mantissa, representing
/// `mantissa * 256^(exponent - 3)`. Encoding is lossy for magnitudes that do not fit the
/// 3-byte mantissa; consensus truncates the precision, so `encode(decode(c)) == c` only holds
/// when the mantissa of `c` uses at most 3 significant bytes.

/// Expands a compact bits value into the full target integer.
pub fn decode_compact_bits(compact: u32) -> BigUint {
    let size = (compact >> 24) as usize;
    let mut bytes = vec![0u8; size];
    if size >= 1 {
        bytes[0] = (compact >> 16) as u8;
    }
    if size >= 2 {
        bytes[1] = (compact >> 8) as u8;
    }
    if size >= 3 {
        bytes[2] = compact as u8;
    }
    BigUint::from_bytes_be(&bytes)
}

/// Packs a target integer into its compact bits form.
///
/// The target is serialized to its minimal big-endian byte form, with a zero byte prepended
/// when the top bit is set. This reproduces the historical big-number serialization
/// convention, where the leading bit marks the sign.
pub fn encode_compact_bits(target: &BigUint) -> u32 {
    if target.is_zero() {
        return 0;
    }
    let mut bytes = target.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0);
    }
    let size = bytes.len() as u32;
    let mut compact = size << 24;
    if size >= 1 {
        compact |= (bytes[0] as u32) << 16;
    }
    if size >= 2 {
        compact |= (bytes[1] as u32) << 8;
    }
    if size >= 3 {
        compact |= bytes[2] as u32;
    }
    compact
}

/// Normalizes a compact bits value to both representations.
pub fn decode_target_from_compact(compact: u32) -> (BigUint, u32) {
    (decode_compact_bits(compact), compact)
}

/// Normalizes a hex-encoded target to both representations.
///
/// Fails with [Error::MalformedHex] if the string contains non-hex characters.
/// [Error::MalformedHex]: crate::Error::MalformedHex
pub fn decode_target_from_hex(hex_str: &str) -> Result<(BigUint, u32)> {
    let target = BigUint::parse_bytes(hex_str.as_bytes(), 16)
        .ok_or_else(|| Error::MalformedHex(hex_str.to_string()))?;
    let compact = encode_compact_bits(&target);
    Ok((target, compact))
}
