//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the ingestion pipeline calls
//! - **Outbound (Driven)**: Cryptographic capabilities this subsystem needs

pub mod inbound;
pub mod outbound;
