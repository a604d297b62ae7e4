//! # Crypto Adapters
//!
//! Outbound port implementations backed by `shared-crypto`:
//! - `KeccakMerkleDigest`: Keccak-256 binary Merkle root over encoded transactions
//! - `Secp256k1Verifier`: ECDSA over the block hash, low-S enforced

use crate::domain::errors::ProviderError;
use crate::ports::outbound::{DigestProvider, SignatureVerifier};
use shared_crypto::{keccak_merkle_root, verify_prehash_hex, CryptoError};
use shared_types::Transaction;

/// Keccak-256 Merkle transaction root.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeccakMerkleDigest;

impl KeccakMerkleDigest {
    /// Create a new digest provider.
    pub fn new() -> Self {
        Self
    }
}

impl DigestProvider for KeccakMerkleDigest {
    fn digest(&self, transactions: &[Transaction]) -> Result<Vec<u8>, ProviderError> {
        let root = keccak_merkle_root(transactions.iter().map(|tx| &tx.encoded));
        Ok(root.to_vec())
    }
}

/// secp256k1 signature verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    /// Create a new verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(
        &self,
        message: &[u8],
        signature: &str,
        public_key: &[u8; 65],
    ) -> Result<bool, ProviderError> {
        verify_prehash_hex(message, signature, public_key).map_err(ProviderError::from)
    }
}

impl From<CryptoError> for ProviderError {
    fn from(error: CryptoError) -> Self {
        match error {
            CryptoError::InvalidDigestLength(_) | CryptoError::InvalidInput(_) => {
                ProviderError::InvalidInput(error.to_string())
            }
            CryptoError::InvalidKeyLength { .. } | CryptoError::InvalidPublicKey => {
                ProviderError::InvalidKey(error.to_string())
            }
            CryptoError::InvalidPrivateKey | CryptoError::SigningFailed(_) => {
                ProviderError::Internal(error.to_string())
            }
        }
    }
}
