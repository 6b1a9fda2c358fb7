use crate::coin::{address, hash, hexutil};
use crate::{Error, Result};
use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1, SecretKey};
use std::str::FromStr;

/// Generation, signing and verification of ECDSA keys on the secp256k1 curve, and address
/// derivation from a public key.
///
/// Keys are exchanged as fixed-width hex: the private scalar as 64 hex digits, the public
/// point as 130 hex digits in uncompressed form. The private scalar's lifetime is
/// caller-managed; nothing here persists it.

/// Generates a fresh key pair using a secure random number generator.
///
/// Returns `(private_key_hex, public_key_hex)`.
pub fn generate() -> (String, String) {
    let secp = Secp256k1::new();
    let (secret_key, public_key) = secp.generate_keypair(&mut rand::thread_rng());
    (
        hexutil::to_hex(&secret_key.secret_bytes()),
        hexutil::to_hex(&public_key.serialize_uncompressed()),
    )
}

/// Signs a 32-byte message digest with the given private key.
///
/// The signature is DER-serialized. Signatures are not required to be deterministic; any
/// valid signature over the curve is acceptable.
pub fn sign(private_key_hex: &str, digest: &[u8]) -> Result<Vec<u8>> {
    let secret_key = SecretKey::from_slice(&hexutil::to_bytes(private_key_hex)?)?;
    let message = Message::from_digest(digest_array(digest)?);
    let secp = Secp256k1::new();
    let signature = secp.sign_ecdsa(&message, &secret_key);
    Ok(signature.serialize_der().to_vec())
}

/// Verifies a DER-serialized signature over a 32-byte message digest.
///
/// Returns false for a signature that does not verify, including one that does not parse.
/// Fails with [Error::InvalidPublicKey] if the hex does not decode to a point on the curve.
/// [Error::InvalidPublicKey]: crate::Error::InvalidPublicKey
pub fn verify(digest: &[u8], signature: &[u8], public_key_hex: &str) -> Result<bool> {
    let public_key =
        PublicKey::from_str(public_key_hex).map_err(|_| Error::InvalidPublicKey)?;
    let message = Message::from_digest(digest_array(digest)?);
    let signature = match Signature::from_der(signature) {
        Ok(s) => s,
        Err(_) => return Ok(false),
    };
    let secp = Secp256k1::new();
    Ok(secp.verify_ecdsa(&message, &signature, &public_key).is_ok())
}

/// Generates a fresh key pair and derives its address for the given network version byte.
///
/// Returns `(address, private_key_hex, public_key_hex, hash160_hex)`.
pub fn generate_address(version: &str) -> Result<(String, String, String, String)> {
    let (private_key, public_key) = generate();
    let hash160 = hexutil::to_hex(&hash::hash160(&hexutil::to_bytes(&public_key)?));
    let addr = address::hash160_to_address(&hash160, version)?;
    Ok((addr, private_key, public_key, hash160))
}

fn digest_array(digest: &[u8]) -> Result<[u8; 32]> {
    <[u8; 32]>::try_from(digest)
        .map_err(|_| Error::BadArgument("message digest must be 32 bytes".to_string()))
}
