//! # Shared Crypto
//!
//! Concrete cryptographic primitives used to validate sealed blocks.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256, binary Merkle tree | Transaction roots |
//! | `ecdsa` | secp256k1 | Sealer signatures over block hashes |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic signing, low-S enforced on verify (EIP-2)
//! - **Keccak-256**: the pre-standard SHA-3 variant used by Ethereum-family chains

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{verify_prehash_hex, Secp256k1KeyPair, Secp256k1PublicKey};
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak_merkle_root, Hash};
