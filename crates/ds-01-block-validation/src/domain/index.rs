//! # Sealer Index Resolution
//!
//! Sig list keys name a sealer by its position in the header's sealer list,
//! written as a hexadecimal string: case-insensitive, no fixed width, leading
//! zeros allowed. No sign and no `0x` prefix.

use super::errors::{BlockValidationError, BlockValidationResult};

/// Parse a sig list key into a sealer position.
///
/// Overflow comes back as `SealerIndexOutOfRange` with a placeholder
/// `sealer_count`; `resolve_sealer` fills in the real list size.
pub(crate) fn parse_sealer_index(index_hex: &str) -> BlockValidationResult<usize> {
    if index_hex.is_empty() || !index_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BlockValidationError::MalformedSealerIndex {
            index: index_hex.to_string(),
        });
    }

    // Only overflow can fail once every digit is known to be hex
    usize::from_str_radix(index_hex, 16).map_err(|_| BlockValidationError::SealerIndexOutOfRange {
        index: index_hex.to_string(),
        sealer_count: 0,
    })
}

/// Resolve a sig list key to its sealer position and stored public key.
///
/// # Errors
/// * `BlockValidationError::MalformedSealerIndex` - key is not hexadecimal
/// * `BlockValidationError::SealerIndexOutOfRange` - no sealer at that position
pub fn resolve_sealer<'a>(
    index_hex: &str,
    sealer_list: &'a [Vec<u8>],
) -> BlockValidationResult<(usize, &'a [u8])> {
    let out_of_range = || BlockValidationError::SealerIndexOutOfRange {
        index: index_hex.to_string(),
        sealer_count: sealer_list.len(),
    };

    let index = match parse_sealer_index(index_hex) {
        Ok(index) => index,
        Err(BlockValidationError::SealerIndexOutOfRange { .. }) => return Err(out_of_range()),
        Err(e) => return Err(e),
    };

    sealer_list
        .get(index)
        .map(|key| (index, key.as_slice()))
        .ok_or_else(out_of_range)
}
