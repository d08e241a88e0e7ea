//! Incremental HMAC verification of the record stream.
//!
//! The tag covers exactly the value bytes of every field, in stream
//! order — never the length/type headers and never block padding. The
//! final comparison against the trailing 32-byte tag is constant-time.

use hmac::Mac;
use subtle::ConstantTimeEq;

use crate::consts::HASH_SIZE;
use crate::crypto::HmacSha256;
use crate::decryptor::fields::Field;
use crate::error::Psafe3Error;

/// Outcome of the final tag comparison.
///
/// A `Mismatch` means the decoded plaintext cannot be trusted, even
/// though the passphrase was correct; callers must not ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an unverified database must not be trusted"]
pub enum Integrity {
    Verified,
    Mismatch,
}

/// Running keyed hash over emitted field values.
pub struct IntegrityVerifier {
    mac: HmacSha256,
}

impl IntegrityVerifier {
    pub fn new(hmac_key: &[u8; HASH_SIZE]) -> Result<Self, Psafe3Error> {
        let mac = <HmacSha256 as Mac>::new_from_slice(hmac_key)
            .map_err(|_| Psafe3Error::CryptoEngine("invalid HMAC key length"))?;
        Ok(IntegrityVerifier { mac })
    }

    /// Absorb one field's value bytes. Every field the reader emits
    /// must pass through here, group terminators included.
    pub fn absorb(&mut self, field: &Field) {
        self.mac.update(&field.value);
    }

    /// Finalize and compare against the footer tag.
    pub fn finish(self, expected_tag: &[u8; HASH_SIZE]) -> Integrity {
        let computed = self.mac.finalize().into_bytes();
        if bool::from(computed.as_slice().ct_eq(expected_tag)) {
            Integrity::Verified
        } else {
            Integrity::Mismatch
        }
    }
}
