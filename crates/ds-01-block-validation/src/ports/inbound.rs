//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::ValidationReport;
use crate::domain::errors::BlockValidationResult;
use shared_types::Block;

/// Primary Block Validation API.
///
/// This is the entry point the ingestion pipeline uses before a block is
/// written to the stash. Implementations must be thread-safe (`Send + Sync`).
///
/// Every operation follows the same contract:
/// - `Ok(true)` / passed: the block is valid as far as the check goes
/// - `Ok(false)` / failed: the block is invalid
/// - `Err(_)`: the block data is corrupt or a collaborator faulted
pub trait BlockValidationApi: Send + Sync {
    /// Check the declared transaction root against the transaction list.
    ///
    /// The genesis block (height 0) always passes.
    fn validate_transaction_root(&self, block: &Block) -> BlockValidationResult<bool>;

    /// Check every signature in the sig list against its sealer's key.
    ///
    /// Stops at the first signature that does not verify.
    ///
    /// # Errors
    /// * `MalformedSealerIndex` / `SealerIndexOutOfRange` - bad sig list key
    /// * `MalformedSealerKey` - the sealer key is not a usable curve point
    /// * `VerifierFault` - the signature verifier faulted
    fn validate_sig_list(&self, block: &Block) -> BlockValidationResult<bool>;

    /// Run every check enabled by configuration and report the outcome.
    fn validate_block(&self, block: &Block) -> BlockValidationResult<ValidationReport>;

    /// Validate independent blocks in parallel. Results keep input order.
    fn validate_blocks(&self, blocks: &[Block]) -> Vec<BlockValidationResult<ValidationReport>>;
}
