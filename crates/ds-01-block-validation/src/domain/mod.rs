//! # Domain Layer
//!
//! Pure validation logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod config;
pub mod entities;
pub mod errors;
pub mod index;
pub mod keys;
pub mod root;
