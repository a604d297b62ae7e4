//! # Keccak-256 Hashing
//!
//! One-shot Keccak-256 and the binary Merkle root used for transaction roots.
//!
//! ## Merkle Construction
//!
//! - Leaves are `keccak256(encoded transaction)`, in block order.
//! - Each level pairs adjacent nodes: `parent = keccak256(left || right)`.
//! - An odd node at the end of a level is paired with `SENTINEL_HASH`.
//! - A single transaction's leaf is the root.
//! - An empty transaction list has root `SENTINEL_HASH`.

use sha3::{Digest, Keccak256};

/// Keccak-256 output (256-bit).
pub type Hash = [u8; 32];

/// Padding value for odd levels and the root of an empty tree.
pub const SENTINEL_HASH: Hash = [0u8; 32];

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the binary Merkle root over a sequence of leaf payloads.
///
/// Deterministic: the same payloads in the same order always yield the same
/// root.
pub fn keccak_merkle_root<I, T>(leaves: I) -> Hash
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut level: Vec<Hash> = leaves
        .into_iter()
        .map(|leaf| keccak256(leaf.as_ref()))
        .collect();

    if level.is_empty() {
        return SENTINEL_HASH;
    }

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_pair(left, right),
                [single] => hash_pair(single, &SENTINEL_HASH),
                _ => unreachable!("chunks(2) yields one or two nodes"),
            })
            .collect();
    }

    level[0]
}

/// parent = H(left || right)
fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}
