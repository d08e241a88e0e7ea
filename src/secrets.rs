//! Wipe-on-drop wrappers for key material.
//!
//! Every buffer that ever holds the stretched key or a working key is
//! owned by one of these types, so all exit paths (success, error,
//! early return) end with the bytes overwritten. The raw arrays are
//! never exposed mutably and never cloned out.

use zeroize::Zeroize;

use crate::consts::HASH_SIZE;

/// 32-byte passphrase-derived key. Verification key and key-unwrap key
/// in one: H(stretched) is compared against the prologue's verification
/// hash, and the stretched bytes decrypt the wrapped key blocks.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct StretchedKey([u8; HASH_SIZE]);

impl StretchedKey {
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

/// The two working keys recovered from the wrapped key blocks.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct WorkingKeys {
    cipher: [u8; HASH_SIZE],
    hmac: [u8; HASH_SIZE],
}

impl WorkingKeys {
    pub fn new(cipher: [u8; HASH_SIZE], hmac: [u8; HASH_SIZE]) -> Self {
        Self { cipher, hmac }
    }

    /// Key for CBC body decryption (random key K).
    pub fn cipher_key(&self) -> &[u8; HASH_SIZE] {
        &self.cipher
    }

    /// Key for record-payload authentication (random key L).
    pub fn hmac_key(&self) -> &[u8; HASH_SIZE] {
        &self.hmac
    }
}
