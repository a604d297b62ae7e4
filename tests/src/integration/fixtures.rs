//! # Sealed Block Fixtures
//!
//! Builds blocks the way a producing chain would: transactions rooted with
//! the Keccak Merkle digest, the block hash signed by every sealer.

use shared_crypto::{keccak256, keccak_merkle_root, Secp256k1KeyPair};
use shared_types::{Block, BlockHeader, SignatureEntry, Transaction};

/// How a sealer's key is stored in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// x || y (64 bytes)
    Raw,
    /// 0x04 || x || y (65 bytes)
    Uncompressed,
}

/// A sealer set with its private keys.
pub struct SealerSet {
    pub keys: Vec<Secp256k1KeyPair>,
    pub encodings: Vec<KeyEncoding>,
}

impl SealerSet {
    /// Generate `count` sealers, alternating raw and uncompressed key storage.
    pub fn generate(count: usize) -> Self {
        let keys = (0..count).map(|_| Secp256k1KeyPair::generate()).collect();
        let encodings = (0..count)
            .map(|i| {
                if i % 2 == 0 {
                    KeyEncoding::Raw
                } else {
                    KeyEncoding::Uncompressed
                }
            })
            .collect();
        Self { keys, encodings }
    }

    /// Header sealer list in each sealer's storage encoding.
    pub fn sealer_list(&self) -> Vec<Vec<u8>> {
        self.keys
            .iter()
            .zip(&self.encodings)
            .map(|(key, encoding)| match encoding {
                KeyEncoding::Raw => key.public_key().to_raw().to_vec(),
                KeyEncoding::Uncompressed => key.public_key().as_bytes().to_vec(),
            })
            .collect()
    }

    /// Hex signature of `hash` by sealer `index`.
    pub fn sign(&self, index: usize, hash: &[u8; 32]) -> String {
        self.keys[index]
            .sign_prehash_hex(hash)
            .expect("prehash signing cannot fail for a 32-byte digest")
    }

    /// One sig list entry per sealer, keyed by lowercase hex index.
    pub fn sig_list(&self, hash: &[u8; 32]) -> Vec<SignatureEntry> {
        (0..self.keys.len())
            .map(|i| {
                let mut entry = SignatureEntry::new();
                entry.insert(format!("{i:x}"), self.sign(i, hash));
                entry
            })
            .collect()
    }
}

/// Encoded transactions with distinct payloads.
pub fn make_transactions(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| Transaction::new(format!("transfer #{i}").into_bytes()))
        .collect()
}

/// A fully sealed block at `number`, valid on both checks.
pub fn sealed_block(number: u64, transactions: usize, sealers: &SealerSet) -> Block {
    let transactions = make_transactions(transactions);
    let transactions_root = keccak_merkle_root(transactions.iter().map(|tx| &tx.encoded));
    let hash = keccak256(format!("block {number}").as_bytes());

    Block {
        header: BlockHeader {
            number,
            parent_hash: keccak256(format!("block {}", number.saturating_sub(1)).as_bytes()),
            transactions_root: transactions_root.to_vec(),
            timestamp: 1_564_738_576_749 + number,
            sealer: number % sealers.keys.len().max(1) as u64,
            sealer_list: sealers.sealer_list(),
        },
        transactions,
        sig_list: sealers.sig_list(&hash),
        hash,
    }
}
