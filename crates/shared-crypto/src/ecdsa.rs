//! # ECDSA Signatures (secp256k1)
//!
//! Sealer signatures over block hashes.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization on sign, low-S required on verify (EIP-2)
//! - Verification is over a 32-byte prehash; the block hash is never rehashed
//!
//! ## Wire Forms
//!
//! - Public key: SEC1 uncompressed, `0x04 || x || y` (65 bytes)
//! - Signature: hex of `r || s` (64 bytes) or `r || s || v` (65 bytes),
//!   optional `0x` prefix

use crate::hashing::Hash;
use crate::CryptoError;
use k256::ecdsa::{
    signature::hazmat::PrehashVerifier, RecoveryId, Signature, SigningKey, VerifyingKey,
};

/// Length of a prehashed message digest.
const DIGEST_LEN: usize = 32;

/// Uncompressed secp256k1 public key (65 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; 65]);

impl Secp256k1PublicKey {
    /// Create from uncompressed SEC1 bytes (65 bytes, starting with 0x04).
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self, CryptoError> {
        let bytes: [u8; 65] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: 65,
                actual: bytes.len(),
            })?;

        if bytes[0] != 0x04 {
            return Err(CryptoError::InvalidPublicKey);
        }

        // Validate it's a point on the curve
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Get uncompressed bytes (0x04 || x || y).
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    /// Get the bare point (x || y) without the format prefix.
    pub fn to_raw(&self) -> [u8; 64] {
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&self.0[1..]);
        raw
    }

    /// Verify a signature over a 32-byte digest.
    ///
    /// Returns `Ok(false)` for any signature that is malformed or does not
    /// verify. Returns `Err` only when the digest is not 32 bytes.
    pub fn verify_prehash(&self, digest: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
        if digest.len() != DIGEST_LEN {
            return Err(CryptoError::InvalidDigestLength(digest.len()));
        }

        let Some(sig) = parse_signature(signature) else {
            return Ok(false);
        };

        // EIP-2: the high-S twin of a valid signature is rejected
        if sig.normalize_s().is_some() {
            return Ok(false);
        }

        let verifying_key =
            VerifyingKey::from_sec1_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        Ok(verifying_key.verify_prehash(digest, &sig).is_ok())
    }
}

/// Verify a hex-encoded signature against an uncompressed public key.
///
/// This is the form in which sealer signatures travel in a block's sig list.
///
/// # Errors
/// * `CryptoError::InvalidDigestLength` - `digest` is not 32 bytes
/// * `CryptoError::InvalidKeyLength` / `CryptoError::InvalidPublicKey` - the
///   key is not a 65-byte uncompressed curve point
pub fn verify_prehash_hex(
    digest: &[u8],
    signature_hex: &str,
    public_key: &[u8],
) -> Result<bool, CryptoError> {
    let public_key = Secp256k1PublicKey::from_uncompressed(public_key)?;

    let Some(signature) = decode_hex(signature_hex) else {
        return Ok(false);
    };

    public_key.verify_prehash(digest, &signature)
}

/// secp256k1 ECDSA keypair.
///
/// The wrapped `SigningKey` zeroizes its scalar when dropped.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get public key (uncompressed, 65 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        let encoded = self.signing_key.verifying_key().to_encoded_point(false);
        let mut bytes = [0u8; 65];
        bytes.copy_from_slice(encoded.as_bytes());
        Secp256k1PublicKey(bytes)
    }

    /// Sign a 32-byte digest, returning `r || s || v` with low S.
    pub fn sign_prehash(&self, digest: &Hash) -> Result<[u8; 65], CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // Flipping S to the low half mirrors the point, so the parity flips too
        let (sig, recid) = match sig.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
            ),
            None => (sig, recid),
        };

        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&sig.to_bytes());
        bytes[64] = recid.to_byte();
        Ok(bytes)
    }

    /// Sign a 32-byte digest and hex-encode the result (sig list form).
    pub fn sign_prehash_hex(&self, digest: &Hash) -> Result<String, CryptoError> {
        self.sign_prehash(digest).map(hex::encode)
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}

/// Decode hex with an optional `0x` prefix.
fn decode_hex(value: &str) -> Option<Vec<u8>> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    hex::decode(digits).ok()
}

/// Parse `r || s` or `r || s || v`. Valid v values: 0, 1, 27, 28.
fn parse_signature(bytes: &[u8]) -> Option<Signature> {
    let rs = match bytes.len() {
        64 => bytes,
        65 => {
            if !matches!(bytes[64], 0 | 1 | 27 | 28) {
                return None;
            }
            &bytes[..64]
        }
        _ => return None,
    };

    Signature::from_slice(rs).ok()
}
