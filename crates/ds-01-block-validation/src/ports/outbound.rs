//! # Outbound Ports (Driven Ports / SPI)
//!
//! Cryptographic capabilities this subsystem needs. Both are injected into
//! the service at construction.
//!
//! Production: `KeccakMerkleDigest`, `Secp256k1Verifier` (adapters/crypto.rs)
//!
//! ## Concurrency
//!
//! Blocks are validated in parallel, so implementations are invoked
//! concurrently from several threads and must be `Send + Sync`.

use crate::domain::errors::ProviderError;
use shared_types::Transaction;

/// Computes the transaction root of a block.
pub trait DigestProvider: Send + Sync {
    /// Digest the ordered transaction list.
    ///
    /// Must be deterministic and use the same scheme the block producer used
    /// for `transactions_root`.
    fn digest(&self, transactions: &[Transaction]) -> Result<Vec<u8>, ProviderError>;
}

/// Verifies sealer signatures.
pub trait SignatureVerifier: Send + Sync {
    /// Verify `signature` over `message` for a 65-byte uncompressed key.
    ///
    /// A malformed or non-matching signature is `Ok(false)`. A public key the
    /// verifier cannot use is `Err(ProviderError::InvalidKey)`; any other `Err`
    /// is a fault of the verifier itself.
    fn verify(
        &self,
        message: &[u8],
        signature: &str,
        public_key: &[u8; 65],
    ) -> Result<bool, ProviderError>;
}
