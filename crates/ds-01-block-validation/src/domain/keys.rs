//! # Sealer Key Normalization
//!
//! Sealer lists carry secp256k1 points in two encodings:
//!
//! - **Raw**: `x || y` (64 bytes), no format prefix
//! - **Uncompressed**: `0x04 || x || y` (65 bytes)
//!
//! The signature verifier only ever sees the uncompressed form.

use super::errors::KeyError;
use shared_types::{RAW_PUBLIC_KEY_LEN, UNCOMPRESSED_POINT_TAG, UNCOMPRESSED_PUBLIC_KEY_LEN};

/// A sealer public key classified by encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SealerKey<'a> {
    /// Bare point, `x || y`.
    Raw(&'a [u8; RAW_PUBLIC_KEY_LEN]),
    /// SEC1 uncompressed point, `0x04 || x || y`.
    Uncompressed(&'a [u8; UNCOMPRESSED_PUBLIC_KEY_LEN]),
}

impl<'a> SealerKey<'a> {
    /// Classify raw sealer list bytes.
    ///
    /// # Errors
    /// * `KeyError::UnsupportedLength` - not 64 or 65 bytes
    /// * `KeyError::UnsupportedPrefix` - 65 bytes without the 0x04 tag
    pub fn classify(bytes: &'a [u8]) -> Result<Self, KeyError> {
        if let Ok(raw) = <&[u8; RAW_PUBLIC_KEY_LEN]>::try_from(bytes) {
            return Ok(Self::Raw(raw));
        }

        match <&[u8; UNCOMPRESSED_PUBLIC_KEY_LEN]>::try_from(bytes) {
            Ok(full) if full[0] == UNCOMPRESSED_POINT_TAG => Ok(Self::Uncompressed(full)),
            Ok(full) => Err(KeyError::UnsupportedPrefix(full[0])),
            Err(_) => Err(KeyError::UnsupportedLength(bytes.len())),
        }
    }

    /// The 65-byte uncompressed encoding of this key.
    pub fn to_uncompressed(self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_LEN] {
        match self {
            Self::Raw(raw) => {
                let mut full = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
                full[0] = UNCOMPRESSED_POINT_TAG;
                full[1..].copy_from_slice(raw);
                full
            }
            Self::Uncompressed(full) => *full,
        }
    }
}

/// Normalize a sealer key to the 65-byte uncompressed encoding.
///
/// 64-byte keys gain a leading `0x04`, the point bytes kept in order.
/// 65-byte `0x04` keys pass through unchanged.
pub fn normalize_sealer_key(bytes: &[u8]) -> Result<[u8; UNCOMPRESSED_PUBLIC_KEY_LEN], KeyError> {
    SealerKey::classify(bytes).map(SealerKey::to_uncompressed)
}
