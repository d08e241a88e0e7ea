//! PWS3 prologue parsing.
//!
//! The prologue is the fixed 152-byte region at the start of every
//! file, laid out as:
//!
//! ```text
//! offset  size  field
//! 0       4     magic "PWS3"
//! 4       32    salt
//! 36      4     iteration count (little-endian u32)
//! 40      32    verification hash H(P')
//! 72      64    wrapped key blocks b0..b3 (4 × 16)
//! 136     16    IV
//! ```
//!
//! Nothing in the prologue is secret; parsing performs no cryptography.

use crate::consts::{BLOCK_SIZE, HASH_SIZE, MAGIC, PROLOGUE_SIZE, SALT_SIZE};
use crate::error::Psafe3Error;
use crate::utils::load_le32;

/// Parsed, validated prologue. Immutable once built.
#[derive(Debug, Clone)]
pub struct Prologue {
    /// Per-file random salt fed into key stretching.
    pub salt: [u8; SALT_SIZE],
    /// Number of extra hash applications during key stretching.
    pub iterations: u32,
    /// SHA-256 of the stretched key, checked before any decryption.
    pub verification_hash: [u8; HASH_SIZE],
    /// Four ciphertext blocks pairwise wrapping the two working keys:
    /// (b0, b1) → cipher key, (b2, b3) → HMAC key.
    pub wrapped_keys: [[u8; BLOCK_SIZE]; 4],
    /// Initialization vector for body decryption.
    pub iv: [u8; BLOCK_SIZE],
}

impl Prologue {
    /// Parse the prologue from the start of `bytes`.
    ///
    /// Length is checked before the magic tag, so anything shorter than
    /// 152 bytes reports `Truncated` regardless of content.
    pub fn parse(bytes: &[u8]) -> Result<Self, Psafe3Error> {
        if bytes.len() < PROLOGUE_SIZE {
            return Err(Psafe3Error::Truncated {
                need: PROLOGUE_SIZE,
                have: bytes.len(),
            });
        }
        if bytes[..4] != MAGIC {
            return Err(Psafe3Error::BadMagic);
        }

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&bytes[4..36]);

        let iterations = load_le32(&bytes[36..40]);

        let mut verification_hash = [0u8; HASH_SIZE];
        verification_hash.copy_from_slice(&bytes[40..72]);

        let mut wrapped_keys = [[0u8; BLOCK_SIZE]; 4];
        for (i, block) in wrapped_keys.iter_mut().enumerate() {
            let off = 72 + i * BLOCK_SIZE;
            block.copy_from_slice(&bytes[off..off + BLOCK_SIZE]);
        }

        let mut iv = [0u8; BLOCK_SIZE];
        iv.copy_from_slice(&bytes[136..PROLOGUE_SIZE]);

        Ok(Prologue {
            salt,
            iterations,
            verification_hash,
            wrapped_keys,
            iv,
        })
    }
}
