use crate::{Error, Result};
use num::{BigUint, Integer, ToPrimitive, Zero};

/// Functions for base-58 encoding of arbitrary-precision integers.
///
/// The alphabet excludes 0, O, I and l to avoid visual ambiguity. A base-58 string represents
/// a non-negative integer; the address codec layers the checksum and version byte on top of
/// this integer conversion.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes a non-negative integer as a base-58 string.
///
/// Zero encodes as a single "1", the first character of the alphabet.
pub fn encode_int(val: &BigUint) -> String {
    let radix = BigUint::from(58u8);
    let mut quotient = val.clone();
    let mut encoded = Vec::new();
    loop {
        let (q, r) = quotient.div_rem(&radix);
        let digit = r.to_usize().expect("base58 remainder must fit in usize");
        encoded.push(ALPHABET[digit]);
        quotient = q;
        if quotient.is_zero() {
            break;
        }
    }
    encoded.reverse();
    String::from_utf8(encoded).expect("base58 alphabet is ASCII")
}

/// Decodes a base-58 string into the integer it represents.
///
/// Fails with [Error::InvalidBase58Character] if any character is outside the alphabet.
pub fn decode(encoded: &str) -> Result<BigUint> {
    let radix = BigUint::from(58u8);
    let mut val = BigUint::zero();
    for c in encoded.chars() {
        let digit = ALPHABET
            .iter()
            .position(|&a| a as char == c)
            .ok_or(Error::InvalidBase58Character(c))?;
        val = val * &radix + BigUint::from(digit);
    }
    Ok(val)
}

/// Encodes the numeric value of a hex string as base-58.
///
/// The hex string is truncated to its first 64 characters (256 bits) before integer
/// conversion. Callers must ensure the meaningful payload fits in 256 bits or be aware of the
/// silent truncation. Leading zero bytes of the hex are not given a base-58 representation;
/// the address codec compensates for version byte "00" itself.
pub fn encode_hex(hex_str: &str) -> Result<String> {
    let truncated = if hex_str.len() > 64 {
        // a multibyte character straddling the cut is not hex anyway
        hex_str
            .get(..64)
            .ok_or_else(|| Error::MalformedHex(hex_str.to_string()))?
    } else {
        hex_str
    };
    let val = BigUint::parse_bytes(truncated.as_bytes(), 16)
        .ok_or_else(|| Error::MalformedHex(truncated.to_string()))?;
    Ok(encode_int(&val))
}
