//! # Adapters Layer
//!
//! Implementations of the outbound ports.

pub mod crypto;
