/// The coin module contains the encoding and cryptographic primitives of the ledger.
pub mod address;
pub mod base58;
pub mod hash;
pub mod hexutil;
pub mod keys;
pub mod merkle;
pub mod params;
pub mod target;

pub use self::params::{NetworkId, NetworkParams};
