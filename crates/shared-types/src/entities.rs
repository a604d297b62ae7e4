//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Chain**: `Block`, `BlockHeader`, `Transaction`
//! - **Sealing**: `SignatureEntry`, sealer public keys (raw bytes in
//!   `BlockHeader::sealer_list`)

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use std::collections::BTreeMap;

/// A 32-byte digest (Keccak-256).
pub type Hash = [u8; 32];

/// Length of a raw secp256k1 point (x || y) without a format prefix.
pub const RAW_PUBLIC_KEY_LEN: usize = 64;

/// Length of a SEC1 uncompressed secp256k1 point (0x04 || x || y).
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// SEC1 format byte for an uncompressed point.
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// One signature slot of a block's sig list.
///
/// Maps a sealer index (hexadecimal string, case-insensitive, no fixed width)
/// to the hex-encoded signature produced by that sealer. A `BTreeMap` keeps
/// iteration order deterministic.
pub type SignatureEntry = BTreeMap<String, String>;

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// A transaction in its canonical byte encoding.
///
/// The validator never looks inside a transaction; it only hands the ordered
/// list to a digest provider.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Transaction {
    /// Canonical encoding as it appeared in the block body.
    #[serde_as(as = "Hex")]
    pub encoded: Vec<u8>,
}

impl Transaction {
    /// Wrap an encoded transaction.
    pub fn new(encoded: impl Into<Vec<u8>>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }
}

/// The header of a decoded block.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Block height. Height 0 is the genesis block.
    pub number: u64,
    /// Hash of the parent block.
    #[serde_as(as = "Hex")]
    pub parent_hash: Hash,
    /// Transaction root claimed by the block producer.
    #[serde_as(as = "Hex")]
    pub transactions_root: Vec<u8>,
    /// Unix timestamp (milliseconds) set by the producer.
    pub timestamp: u64,
    /// Index of the sealer that produced this block.
    pub sealer: u64,
    /// Public keys of the sealer set, addressed by position.
    ///
    /// Each key is either 64 bytes (x || y) or 65 bytes (0x04 || x || y).
    #[serde_as(as = "Vec<Hex>")]
    pub sealer_list: Vec<Vec<u8>>,
}

impl BlockHeader {
    /// Whether this header belongs to the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.number == 0
    }
}

/// A fully decoded block.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// Transactions in block order.
    pub transactions: Vec<Transaction>,
    /// Signatures attached by the sealers.
    pub sig_list: Vec<SignatureEntry>,
    /// Block hash computed by the decoder. This is the message the sealers
    /// signed.
    #[serde_as(as = "Hex")]
    pub hash: Hash,
}

impl Block {
    /// Total number of (index, signature) pairs across all sig list entries.
    pub fn signature_count(&self) -> usize {
        self.sig_list.iter().map(|entry| entry.len()).sum()
    }
}
