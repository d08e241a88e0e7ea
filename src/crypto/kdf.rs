//! Passphrase key stretching and verification.
//!
//! PWS3 stretches the passphrase with plain iterated SHA-256 (the
//! format predates PBKDF2 adoption): hash passphrase‖salt once, then
//! re-hash the 32-byte state `iterations` more times. The stored
//! verification hash is one further application over the result, which
//! lets a wrong passphrase be rejected without touching the body.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::consts::{HASH_SIZE, SALT_SIZE};
use crate::secrets::StretchedKey;

/// Stretch `passphrase` into the 32-byte key P'.
///
/// Total hash applications: `iterations + 1`. Deterministic; runtime is
/// proportional to `iterations` and nothing else.
pub fn stretch_key(passphrase: &[u8], salt: &[u8; SALT_SIZE], iterations: u32) -> StretchedKey {
    let mut hasher = Sha256::new();
    hasher.update(passphrase);
    hasher.update(salt);
    let mut state: [u8; HASH_SIZE] = hasher.finalize().into();

    for _ in 0..iterations {
        state = Sha256::digest(state).into();
    }

    let key = StretchedKey::new(state);
    state.zeroize();
    key
}

/// Check the stretched key against the prologue's verification hash.
///
/// Computes H(P') and compares in constant time. Must be called before
/// any body decryption; a `false` here means the passphrase is wrong
/// (or the file is corrupt) and the body must not be touched.
pub fn verify_stretched_key(stretched: &StretchedKey, expected: &[u8; HASH_SIZE]) -> bool {
    let check: [u8; HASH_SIZE] = Sha256::digest(stretched.as_bytes()).into();
    bool::from(check.ct_eq(expected))
}
