//! # Block Validation Service
//!
//! Application service layer that implements the `BlockValidationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`BlockValidationApi`)
//! - Uses the outbound ports (`DigestProvider`, `SignatureVerifier`) for all
//!   cryptography
//! - Delegates key normalization and index parsing to the domain layer
//!
//! The service holds no mutable state. Concurrent calls need no locking.

use crate::domain::config::ValidationConfig;
use crate::domain::entities::{CheckOutcome, SigListOutcome, ValidationReport};
use crate::domain::errors::{
    BlockValidationError, BlockValidationResult, KeyError, ProviderError,
};
use crate::domain::index::resolve_sealer;
use crate::domain::keys::normalize_sealer_key;
use crate::domain::root::{encode_root_hex, roots_match};
use crate::ports::inbound::BlockValidationApi;
use crate::ports::outbound::{DigestProvider, SignatureVerifier};
use rayon::prelude::*;
use shared_types::Block;
use tracing::{debug, info, warn};

/// Block Validation Service.
///
/// Collaborators are injected at construction; there is no global crypto
/// provider.
pub struct BlockValidationService<D: DigestProvider, V: SignatureVerifier> {
    digest: D,
    verifier: V,
    config: ValidationConfig,
}

impl<D: DigestProvider, V: SignatureVerifier> BlockValidationService<D, V> {
    /// Create a new validation service with both checks enabled.
    ///
    /// # Arguments
    /// * `digest` - Recomputes transaction roots
    /// * `verifier` - Verifies sealer signatures
    pub fn new(digest: D, verifier: V) -> Self {
        Self::with_config(digest, verifier, ValidationConfig::default())
    }

    /// Create a new validation service with explicit configuration.
    pub fn with_config(digest: D, verifier: V, config: ValidationConfig) -> Self {
        Self {
            digest,
            verifier,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Walk the sig list in entry order, then key order within each entry.
    fn check_sig_list(&self, block: &Block) -> BlockValidationResult<SigListOutcome> {
        let number = block.header.number;
        let sealer_list = &block.header.sealer_list;
        let mut checked = 0;

        for (slot, entry) in block.sig_list.iter().enumerate() {
            for (index_hex, signature) in entry {
                let (index, stored_key) =
                    resolve_sealer(index_hex, sealer_list).inspect_err(|e| {
                        warn!(block = number, slot, error = %e, "Corrupt sig list entry");
                    })?;

                let public_key = normalize_sealer_key(stored_key).map_err(|source| {
                    warn!(block = number, sealer = index, error = %source, "Corrupt sealer key");
                    BlockValidationError::MalformedSealerKey { index, source }
                })?;

                let valid = self
                    .verifier
                    .verify(&block.hash, signature, &public_key)
                    .map_err(|source| match source {
                        ProviderError::InvalidKey(_) => {
                            warn!(
                                block = number,
                                sealer = index,
                                error = %source,
                                "Sealer key rejected by verifier"
                            );
                            BlockValidationError::MalformedSealerKey {
                                index,
                                source: KeyError::NotOnCurve,
                            }
                        }
                        source => BlockValidationError::VerifierFault { index, source },
                    })?;
                checked += 1;

                debug!(block = number, slot, sealer = index, valid, "Checked sealer signature");

                if !valid {
                    warn!(block = number, sealer = index, "Sealer signature did not verify");
                    return Ok(SigListOutcome {
                        valid: false,
                        checked,
                    });
                }
            }
        }

        Ok(SigListOutcome {
            valid: true,
            checked,
        })
    }
}

impl<D: DigestProvider, V: SignatureVerifier> BlockValidationApi
    for BlockValidationService<D, V>
{
    fn validate_transaction_root(&self, block: &Block) -> BlockValidationResult<bool> {
        let number = block.header.number;

        if block.header.is_genesis() {
            debug!(block = number, "Genesis block exempt from transaction root check");
            return Ok(true);
        }

        let declared = encode_root_hex(&block.header.transactions_root);
        debug!(block = number, root = %declared, "Declared transaction root");

        let computed = self
            .digest
            .digest(&block.transactions)
            .map_err(BlockValidationError::DigestFault)?;
        let computed = encode_root_hex(&computed);
        debug!(block = number, root = %computed, "Computed transaction root");

        let matched = roots_match(&declared, &computed);
        if !matched {
            warn!(
                block = number,
                declared = %declared,
                computed = %computed,
                "Transaction root mismatch"
            );
        }

        Ok(matched)
    }

    fn validate_sig_list(&self, block: &Block) -> BlockValidationResult<bool> {
        self.check_sig_list(block).map(|outcome| outcome.valid)
    }

    fn validate_block(&self, block: &Block) -> BlockValidationResult<ValidationReport> {
        let transactions_root = if self.config.verify_transactions_root {
            CheckOutcome::from_valid(self.validate_transaction_root(block)?)
        } else {
            CheckOutcome::Skipped
        };

        let (signatures, signatures_checked) = if self.config.verify_signatures {
            let outcome = self.check_sig_list(block)?;
            (CheckOutcome::from_valid(outcome.valid), outcome.checked)
        } else {
            (CheckOutcome::Skipped, 0)
        };

        let report = ValidationReport {
            block_number: block.header.number,
            block_hash: block.hash,
            transactions_root,
            signatures,
            signatures_checked,
        };

        info!(
            block = report.block_number,
            hash = %hex::encode(report.block_hash),
            transactions_root = ?report.transactions_root,
            signatures = ?report.signatures,
            signatures_checked,
            valid = report.is_valid(),
            "Block validated"
        );

        Ok(report)
    }

    fn validate_blocks(&self, blocks: &[Block]) -> Vec<BlockValidationResult<ValidationReport>> {
        blocks
            .par_iter()
            .map(|block| self.validate_block(block))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
