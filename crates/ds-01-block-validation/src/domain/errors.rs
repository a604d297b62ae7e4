//! # Validation Errors
//!
//! Error taxonomy for block validation.
//!
//! | Family | Variants | Meaning |
//! |--------|----------|---------|
//! | Structural | `MalformedSealerIndex`, `SealerIndexOutOfRange`, `MalformedSealerKey` | Block data is corrupt |
//! | Dependency | `DigestFault`, `VerifierFault` | A collaborator faulted |
//!
//! A root mismatch or a signature that does not verify is NOT an error. Those
//! are reported as `Ok(false)`.

use thiserror::Error;

/// Errors that can occur during block validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlockValidationError {
    /// A sig list key is not a hexadecimal integer
    #[error("Malformed sealer index {index:?}: expected a hexadecimal integer")]
    MalformedSealerIndex { index: String },

    /// A sig list key points past the end of the sealer list
    #[error("Sealer index {index:?} out of range: sealer list has {sealer_count} entries")]
    SealerIndexOutOfRange { index: String, sealer_count: usize },

    /// The sealer key at `index` is not a usable uncompressed curve point
    #[error("Malformed key for sealer {index}: {source}")]
    MalformedSealerKey {
        index: usize,
        #[source]
        source: KeyError,
    },

    /// The digest provider faulted while recomputing the transaction root
    #[error("Digest provider fault: {0}")]
    DigestFault(#[source] ProviderError),

    /// The signature verifier faulted while checking the signature of a sealer
    #[error("Signature verifier fault for sealer {index}: {source}")]
    VerifierFault {
        index: usize,
        #[source]
        source: ProviderError,
    },
}

impl BlockValidationError {
    /// Whether the block data itself is corrupt.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedSealerIndex { .. }
                | Self::SealerIndexOutOfRange { .. }
                | Self::MalformedSealerKey { .. }
        )
    }

    /// Whether a collaborator faulted. Retrying the same block yields the same
    /// fault.
    pub fn is_dependency_fault(&self) -> bool {
        matches!(self, Self::DigestFault(_) | Self::VerifierFault { .. })
    }
}

/// Why a sealer public key could not be normalized.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Neither a raw (64) nor an uncompressed (65) point
    #[error("unsupported key length {0}, expected 64 or 65 bytes")]
    UnsupportedLength(usize),

    /// 65 bytes, but not tagged as an uncompressed point
    #[error("unsupported key prefix {0:#04x}, expected 0x04")]
    UnsupportedPrefix(u8),

    /// Well-formed encoding of a point that is not on the curve
    #[error("key is not a valid curve point")]
    NotOnCurve,
}

/// Fault raised by a digest provider or signature verifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The verifier rejected the public key it was handed
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The collaborator does not support the requested algorithm or key type
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The collaborator rejected the framing of its input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal failure of the collaborator
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for block validation operations
pub type BlockValidationResult<T> = Result<T, BlockValidationError>;
