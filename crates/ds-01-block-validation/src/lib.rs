//! # Block Validation Subsystem (DS-01)
//!
//! Verifies a decoded block before it is handed to the stash.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Key normalization, sealer index parsing,
//!   root comparison, errors. Pure logic, no I/O
//! - **Ports Layer** (`ports/`): Inbound API and the outbound digest and
//!   signature capabilities
//! - **Adapters Layer** (`adapters/`): Keccak/secp256k1 implementations of the
//!   outbound ports backed by `shared-crypto`
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Checks
//!
//! 1. **Transaction root**: the declared root must match a root recomputed
//!    from the transaction list. The genesis block (height 0) is exempt.
//! 2. **Sig list**: every signature must verify against the sealer key at its
//!    index, over the block hash.
//!
//! A failed check is `Ok(false)`. Corrupt block data (bad index, bad key) and
//! collaborator faults are `Err`, so callers can tell an invalid block from a
//! broken one.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;


// Re-export public API
pub use adapters::crypto::{KeccakMerkleDigest, Secp256k1Verifier};
pub use domain::config::ValidationConfig;
pub use domain::entities::{CheckOutcome, ValidationReport};
pub use domain::errors::{
    BlockValidationError, BlockValidationResult, KeyError, ProviderError,
};
pub use domain::index::resolve_sealer;
pub use domain::keys::{normalize_sealer_key, SealerKey};
pub use domain::root::{encode_root_hex, roots_match};
pub use ports::inbound::BlockValidationApi;
pub use ports::outbound::{DigestProvider, SignatureVerifier};
pub use service::BlockValidationService;

/// Validation service wired to the production Keccak and secp256k1 adapters.
pub type DefaultBlockValidationService =
    BlockValidationService<KeccakMerkleDigest, Secp256k1Verifier>;
