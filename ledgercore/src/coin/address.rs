use crate::coin::{base58, hash, hexutil};
use crate::Result;

/// Functions for encoding public key hashes into checksummed, network-versioned addresses and
/// for decoding and validating them.
///
/// An address is the Base58Check encoding of `version_byte || hash160(pubkey)`: the version
/// byte is prepended, the first 4 bytes of the double SHA256 of that payload are appended,
/// and the whole is base-58 encoded. The payload is a fixed 25 bytes (50 hex digits).

// version byte (2) + hash160 (40) + checksum (8) hex digits
const PAYLOAD_HEX_SIZE: usize = 50;
const CHECKSUM_HEX_SIZE: usize = 8;

/// Encodes a hash160 into an address for the given network version byte.
///
/// For version byte "00" a literal "1" is prepended to the encoding. The base-58 integer
/// conversion drops the leading zero byte, so version 0 addresses carry the extra glyph on
/// top of the natural encoding. This historical quirk is preserved exactly; altering it would
/// change produced addresses byte-for-byte.
pub fn hash160_to_address(hash160_hex: &str, version: &str) -> Result<String> {
    let payload = format!("{}{}", version, hash160_hex);
    let check = hash::checksum(&hexutil::to_bytes(&payload)?);
    let full = format!("{}{}", payload, hexutil::to_hex(&check));
    let encoded = base58::encode_hex(&full)?;
    if version == "00" {
        Ok(format!("1{}", encoded))
    } else {
        Ok(encoded)
    }
}

/// Encodes a public key into an address for the given network version byte.
pub fn pubkey_to_address(pubkey: &[u8], version: &str) -> Result<String> {
    hash160_to_address(&hexutil::to_hex(&hash::hash160(pubkey)), version)
}

/// Checks whether an address is valid for the given network version byte.
///
/// Returns false for any wrong but well-formed address: version byte mismatch, checksum
/// mismatch, or a payload of the wrong size. Fails with [Error::InvalidBase58Character] only
/// when the address contains characters outside the base-58 alphabet.
/// [Error::InvalidBase58Character]: crate::Error::InvalidBase58Character
pub fn valid_address(address: &str, version: &str) -> Result<bool> {
    Ok(checked_payload(address, version)?.is_some())
}

/// Extracts the hash160 from an address, if the address validates.
///
/// Returns `None` on any mismatch; a partial or garbage value is never returned.
pub fn hash160_from_address(address: &str, version: &str) -> Result<Option<String>> {
    Ok(checked_payload(address, version)?
        .map(|payload| payload[2..PAYLOAD_HEX_SIZE - CHECKSUM_HEX_SIZE].to_string()))
}

// Decodes the address to its hex payload and verifies version byte and checksum.
// Returns the full payload hex on success.
fn checked_payload(address: &str, version: &str) -> Result<Option<String>> {
    let val = base58::decode(address)?;
    let mut payload = val.to_str_radix(16);
    if payload.len() % 2 == 1 {
        payload.insert(0, '0');
    }
    // restore the leading zero bytes lost in the integer round-trip
    while payload.len() < PAYLOAD_HEX_SIZE {
        payload.insert_str(0, "00");
    }
    if payload.len() > PAYLOAD_HEX_SIZE {
        return Ok(None);
    }

    if version == "00" {
        // the version byte vanishes into the leading zeros; check the extra glyph instead
        if !address.starts_with('1') {
            return Ok(None);
        }
    } else if !payload.starts_with(version) {
        return Ok(None);
    }

    let (data, check) = payload.split_at(PAYLOAD_HEX_SIZE - CHECKSUM_HEX_SIZE);
    let expected = hexutil::to_hex(&hash::checksum(&hexutil::to_bytes(data)?));
    if check == expected {
        Ok(Some(payload))
    } else {
        Ok(None)
    }
}
