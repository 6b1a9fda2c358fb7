use crate::coin::hash;
use crate::{Error, Result};

/// Calculate the Merkle root from an ordered list of transaction hashes, and hash assembled
/// block headers.
///
/// Hashes are hex strings in display (big-endian) order. The pairwise merge concatenates
/// right before left; combined with the byte reversal inside [hash::bitcoin_hash] this
/// produces the little-endian concatenation the wire serialization hashes over.

/// Hash two merkle branches together.
///
/// The concatenation order is right followed by left; this matches the wire byte-order
/// convention and must be preserved exactly.
pub fn merge(left: &str, right: &str) -> Result<String> {
    let mut combined = String::with_capacity(left.len() + right.len());
    combined.push_str(right);
    combined.push_str(left);
    hash::bitcoin_hash(&combined)
}

/// Calculate the Merkle root from a list of transaction hashes.
///
/// - If there's only one transaction, its hash is the root
/// - If a level has an odd number of hashes, the last one is paired with itself
/// - Hashes are combined pairwise with [merge] until one remains
///
/// Leaf order is significant and preserved as given.
pub fn build_root<S: AsRef<str>>(leaf_hashes: &[S]) -> Result<String> {
    if leaf_hashes.is_empty() {
        return Err(Error::BadArgument(
            "Cannot calculate merkle root of empty transaction list".to_string(),
        ));
    }

    // Start with the transaction hashes
    let mut current_level: Vec<String> = leaf_hashes
        .iter()
        .map(|h| h.as_ref().to_string())
        .collect();

    // Build the tree level by level
    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity(current_level.len().div_ceil(2));

        let mut i = 0;
        while i < current_level.len() {
            let left = &current_level[i];

            // If we're at the last element and it's odd, duplicate it
            let right = if i + 1 < current_level.len() {
                &current_level[i + 1]
            } else {
                &current_level[i]
            };

            next_level.push(merge(left, right)?);
            i += 2;
        }

        current_level = next_level;
    }

    Ok(current_level.swap_remove(0))
}

/// Hash of the fixed-width block header assembled from its fields.
///
/// Numeric fields are zero-padded to 8 hex digits; hash fields are left-padded with zeros to
/// 64 hex digits and fail with [Error::FieldTooLong] when longer.
/// [Error::FieldTooLong]: crate::Error::FieldTooLong
pub fn block_hash(
    prev_block_hash: &str,
    merkle_root: &str,
    time: u32,
    bits: u32,
    nonce: u32,
    version: u32,
) -> Result<String> {
    let header = format!(
        "{:08x}{:08x}{:08x}{}{}{:08x}",
        nonce,
        bits,
        time,
        pad_hash_field(merkle_root, "merkle_root")?,
        pad_hash_field(prev_block_hash, "prev_block_hash")?,
        version
    );
    hash::bitcoin_hash(&header)
}

fn pad_hash_field(field: &str, name: &'static str) -> Result<String> {
    if field.len() > 64 {
        return Err(Error::FieldTooLong {
            field: name,
            len: field.len(),
        });
    }
    Ok(format!("{:0>64}", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_hash_is_root() {
        let tx = "0000000000000000000000000000000000000000000000000000000000000001";
        assert_eq!(build_root(&[tx]).unwrap(), tx);
    }

    #[test]
    fn two_hashes() {
        let tx1 = "0000000000000000000000000000000000000000000000000000000000000001";
        let tx2 = "0000000000000000000000000000000000000000000000000000000000000002";
        assert_eq!(build_root(&[tx1, tx2]).unwrap(), merge(tx1, tx2).unwrap());
    }

    #[test]
    fn odd_count_duplicates_last() {
        let tx1 = "0000000000000000000000000000000000000000000000000000000000000001";
        let tx2 = "0000000000000000000000000000000000000000000000000000000000000002";
        let tx3 = "0000000000000000000000000000000000000000000000000000000000000003";

        let root = build_root(&[tx1, tx2, tx3]).unwrap();

        let hash12 = merge(tx1, tx2).unwrap();
        let hash33 = merge(tx3, tx3).unwrap();
        assert_eq!(root, merge(&hash12, &hash33).unwrap());
    }

    #[test]
    fn merge_order_matters() {
        let h1 = "0000000000000000000000000000000000000000000000000000000000000001";
        let h2 = "0000000000000000000000000000000000000000000000000000000000000002";
        assert_ne!(merge(h1, h2).unwrap(), merge(h2, h1).unwrap());
    }

    #[test]
    fn empty_transaction_list() {
        let txs: Vec<&str> = vec![];
        assert!(build_root(&txs).is_err());
    }

    #[test]
    fn real_block_100000_merkle_root() {
        // the transaction hashes of mainnet block #100000
        let tx_hashes = [
            "8c14f0db3df150123e6f3dbbf30f8b955a8249b62ac1d1ff16284aefa3d06d87",
            "fff2525b8931402dd09222c50775608f75787bd2b87e56995a7bdd30f79702c4",
            "6359f0868171b1d194cbee1af2f16ea598ae8fad666d9b012c8ed2b79a236ec4",
            "e9a66845e05d5abc0ad04ec80f774a7e585c6e8db975962d069a522137b80c1d",
        ];
        assert_eq!(
            build_root(&tx_hashes).unwrap(),
            "f3e94742aca4b5ef85488dc37c06c3282295ffec960994b2c0d5ac2a25a95766"
        );
    }

    #[test]
    fn real_block_100000_header_hash() {
        let hash = block_hash(
            "000000000002d01c1fccc21636b607dfd930d31d01c3a62104612a1719011250",
            "f3e94742aca4b5ef85488dc37c06c3282295ffec960994b2c0d5ac2a25a95766",
            1293623863,
            0x1b04864c,
            274148111,
            1,
        )
        .unwrap();
        assert_eq!(
            hash,
            "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506"
        );
    }

    #[test]
    fn short_hash_fields_are_left_padded() {
        // a 63-digit merkle root hashes identically to its zero-padded form
        let prev = "000000000002d01c1fccc21636b607dfd930d31d01c3a62104612a1719011250";
        let mrkl = "f3e94742aca4b5ef85488dc37c06c3282295ffec960994b2c0d5ac2a25a9576";
        let padded = format!("0{}", mrkl);
        assert_eq!(
            block_hash(prev, mrkl, 1, 2, 3, 4).unwrap(),
            block_hash(prev, &padded, 1, 2, 3, 4).unwrap()
        );
    }

    #[test]
    fn oversized_hash_field_fails() {
        let long = "f".repeat(65);
        let ok = "0".repeat(64);
        assert!(matches!(
            block_hash(&ok, &long, 1, 2, 3, 4),
            Err(Error::FieldTooLong {
                field: "merkle_root",
                ..
            })
        ));
        assert!(matches!(
            block_hash(&long, &ok, 1, 2, 3, 4),
            Err(Error::FieldTooLong {
                field: "prev_block_hash",
                ..
            })
        ));
    }
}
