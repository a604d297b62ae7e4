//! # Shared Types Crate
//!
//! Block data model consumed by the Data-Stash validation pipeline.
//!
//! ## Design Principles
//!
//! - **Decoded Input Only**: every type here is produced by the upstream RLP
//!   decoder. Nothing in this crate parses raw block bytes.
//! - **Read-Only**: blocks are immutable values once decoded; the `hash` field
//!   is computed once by the decoder and never recomputed downstream.

pub mod entities;

pub use entities::*;
