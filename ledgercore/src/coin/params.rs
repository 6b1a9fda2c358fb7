use crate::coin::hexutil;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Static per-network configuration tables.
///
/// The network parameters are consumed read-only: the address codec takes the version byte,
/// the connection and storage layers take the magic bytes, port, seeds and genesis data as
/// plain values. There is no process-wide active network; callers pass the network (or the
/// field they need) explicitly.

/// The networks the ledger can run on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    #[serde(alias = "mainnet")]
    Bitcoin,
    Testnet,
}

/// The fixed parameter record of a network. Immutable after registration.
#[derive(Clone, Debug)]
pub struct NetworkParams {
    /// The magic bytes prefixed to wire-protocol messages.
    pub magic_head: [u8; 4],
    /// The version byte prepended to address payloads, hex-encoded.
    pub address_version: &'static str,
    /// Default port for peer connections.
    pub default_port: u16,
    /// Hostnames used for peer discovery.
    pub dns_seeds: &'static [&'static str],
    /// Hash of the genesis block, in display hex.
    pub genesis_hash: &'static str,
    /// The serialized genesis block, hex-encoded.
    pub genesis_block: &'static str,
}

impl NetworkParams {
    /// The raw serialized genesis block.
    pub fn genesis_block_bytes(&self) -> Result<Vec<u8>> {
        hexutil::to_bytes(self.genesis_block)
    }
}

impl From<NetworkId> for NetworkParams {
    fn from(network: NetworkId) -> Self {
        match network {
            NetworkId::Bitcoin => NetworkParams {
                magic_head: [0xf9, 0xbe, 0xb4, 0xd9],
                address_version: "00",
                default_port: 8333,
                dns_seeds: &[
                    "seed.bitcoin.sipa.be",
                    "dnsseed.bluematt.me",
                    "dnsseed.bitcoin.dashjr.org",
                    "seed.bitcoinstats.com",
                ],
                genesis_hash: "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
                genesis_block: BITCOIN_GENESIS_BLOCK,
            },
            NetworkId::Testnet => NetworkParams {
                magic_head: [0x0b, 0x11, 0x09, 0x07],
                address_version: "6f",
                default_port: 18333,
                dns_seeds: &[
                    "testnet-seed.bitcoin.jonasschnelli.ch",
                    "seed.tbtc.petertodd.org",
                    "testnet-seed.bluematt.me",
                ],
                genesis_hash: "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943",
                genesis_block: TESTNET_GENESIS_BLOCK,
            },
        }
    }
}

const BITCOIN_GENESIS_BLOCK: &str = concat!(
    "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd",
    "7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c",
    "0101000000010000000000000000000000000000000000000000000000000000000000000000ffff",
    "ffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c",
    "6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73",
    "ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a6",
    "7962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
    "ac00000000"
);

const TESTNET_GENESIS_BLOCK: &str = concat!(
    "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd",
    "7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4adae5494dffff001d1aa4ae18",
    "0101000000010000000000000000000000000000000000000000000000000000000000000000ffff",
    "ffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c",
    "6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73",
    "ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a6",
    "7962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
    "ac00000000"
);
