//! # Domain Entities
//!
//! Outcomes produced by the validation service.

use shared_types::Hash;

/// Outcome of one check within `validate_block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The check ran and the block passed.
    Passed,
    /// The check ran and the block failed.
    Failed,
    /// The check was disabled by configuration.
    Skipped,
}

impl CheckOutcome {
    /// Map a check result onto an outcome.
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// Whether the block may be accepted as far as this check goes.
    pub fn is_acceptable(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Result of validating one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Height of the validated block.
    pub block_number: u64,
    /// Hash of the validated block.
    pub block_hash: Hash,
    /// Transaction root check.
    pub transactions_root: CheckOutcome,
    /// Sig list check.
    pub signatures: CheckOutcome,
    /// Number of (index, signature) pairs verified before the check concluded.
    pub signatures_checked: usize,
}

impl ValidationReport {
    /// Whether every enabled check passed.
    pub fn is_valid(&self) -> bool {
        self.transactions_root.is_acceptable() && self.signatures.is_acceptable()
    }
}

/// Result of walking a sig list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SigListOutcome {
    /// Whether every signature verified.
    pub valid: bool,
    /// Signatures verified, including the one that failed.
    pub checked: usize,
}
