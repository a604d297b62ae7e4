//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
///
/// These are faults of the primitive itself or of its inputs' framing. A
/// signature that simply does not verify is never reported through this type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Message is not a prehashed digest
    #[error("Invalid message digest length: expected 32, got {0}")]
    InvalidDigestLength(usize),

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Invalid input for cryptographic operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
