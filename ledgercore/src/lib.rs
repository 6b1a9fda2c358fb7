//! Ledger primitives library for Rust.
//!
//! This library implements the byte-level and number-theoretic transforms that underlie a
//! cryptocurrency ledger's addressing and consensus-difficulty scheme: hex and Base58Check
//! codecs, the SHA256d and HASH160 digest primitives, the compact difficulty-target (nBits)
//! codec, merkle root construction, and ECDSA key handling on secp256k1. It is intended for
//! use at the infrastructure level by nodes, wallets and block explorers. It is not a wallet
//! or a client.

/// Contains the encoding and cryptographic primitives of the ledger.
pub mod coin;

mod result;
pub use result::{Error, Result};

// re-export the secp256k1 crate
pub extern crate secp256k1;
