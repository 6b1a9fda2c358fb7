use crate::coin::hexutil;
use crate::Result;
use ring::digest::{digest, SHA256};
use ripemd::digest::Update;
use ripemd::{Digest, Ripemd160};

/// The digest primitives used throughout the ledger: SHA256, SHA256d, HASH160 and the 4-byte
/// Base58Check checksum.

/// SHA256 hash of the given data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(digest(&SHA256, data).as_ref());
    out
}

/// Double SHA256 hash of the given data.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD160 of the SHA256 of the given data. Used to shorten public keys for addresses.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = digest(&SHA256, data);
    let mut r_hasher = Ripemd160::new();
    Update::update(&mut r_hasher, sha.as_ref());
    let ripemd = r_hasher.finalize();
    let mut out = [0u8; 20];
    out.copy_from_slice(ripemd.as_ref());
    out
}

/// First 4 bytes of the double SHA256 of the given data.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let mut out = [0u8; 4];
    out.copy_from_slice(&sha256d(data)[..4]);
    out
}

/// Double SHA256 over a hex string, bridging byte orders.
///
/// The input bytes are reversed before hashing and the digest is reversed before hex encoding.
/// The wire serialization stores hashes in little-endian byte order while hex display and
/// arithmetic comparisons use big-endian; this function is the single place that bridges the
/// two.
pub fn bitcoin_hash(hex_str: &str) -> Result<String> {
    let mut data = hexutil::to_bytes(hex_str)?;
    data.reverse();
    let mut hashed = sha256d(&data);
    hashed.reverse();
    Ok(hexutil::to_hex(&hashed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha256_known() {
        // SHA256("abc") from FIPS 180-2
        assert_eq!(
            sha256(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn sha256d_known() {
        let data = hex!("0123456789abcdef");
        assert_eq!(
            hexutil::to_hex(&sha256d(&data)),
            "137ad663f79da06e282ed0abbec4d70523ced5ff8e39d5c2e5641d978c5925aa"
        );
    }

    #[test]
    fn hash160_known() {
        // tx a18fb9948823e7999a1b37f64a8ea0d83d1e5a97d121e5c65d3131d5f046806a, input 0
        // the hash160 value expected is 4cc77f98b35c178e1587747a03aaeb6932daee0b
        let pubkey =
            hex!("02792790606e454a01e6c27372927dca961c025d25d989aeeb4b21dc2e196d2b5e");
        assert_eq!(
            hexutil::to_hex(&hash160(&pubkey)),
            "4cc77f98b35c178e1587747a03aaeb6932daee0b"
        );
    }

    #[test]
    fn checksum_is_sha256d_prefix() {
        let data = b"hello world";
        let full = sha256d(data);
        assert_eq!(checksum(data), full[..4]);
    }

    #[test]
    fn bitcoin_hash_genesis_header() {
        // the serialized mainnet genesis header, in display (big-endian) hex
        let header = "7c2bac1d1d00ffff495fab294a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b000000000000000000000000000000000000000000000000000000000000000000000001";
        assert_eq!(
            bitcoin_hash(header).unwrap(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
    }

    #[test]
    fn bitcoin_hash_malformed() {
        assert!(bitcoin_hash("abc").is_err());
    }
}
