// src/decryptor/mod.rs

//! High-level decode facade.
//!
//! [`decode`] runs the whole pipeline over an in-memory file image:
//! prologue → passphrase verification → working-key recovery → CBC
//! body decryption → field reassembly → tag check. Each call is
//! one-shot and all-or-nothing; nothing is retried or resumed.
//! [`open_and_verify`] stops after the passphrase check and never
//! touches the body.

pub mod body;
pub mod fields;
pub mod integrity;

use zeroize::Zeroizing;

use crate::consts::{BLOCK_SIZE, EOF_MARKER, HASH_SIZE, MIN_FILE_SIZE, PROLOGUE_SIZE};
use crate::crypto::engine;
use crate::crypto::kdf::{stretch_key, verify_stretched_key};
use crate::crypto::unwrap::recover_working_keys;
use crate::error::Psafe3Error;
use crate::prologue::Prologue;
use crate::secrets::WorkingKeys;

use body::decrypt_body;
use fields::{Field, FieldReader, Group};
use integrity::IntegrityVerifier;

pub use integrity::Integrity;

/// Result of a full decode: both field groups plus the integrity
/// outcome. The outcome is part of the value precisely so it cannot be
/// lost in a log line — consult it, or use [`Decoded::into_verified`].
#[derive(Debug)]
pub struct Decoded {
    /// Header-group fields, excluding the group terminator.
    pub header: Vec<Field>,
    /// Database-group fields, in stream order. `0xFF` entry separators
    /// are kept; callers interpret them.
    pub records: Vec<Field>,
    /// Outcome of the trailing tag comparison.
    pub integrity: Integrity,
}

impl Decoded {
    /// Enforce integrity: hand back the field groups only when the tag
    /// matched, otherwise fail with `IntegrityMismatch`.
    pub fn into_verified(self) -> Result<(Vec<Field>, Vec<Field>), Psafe3Error> {
        match self.integrity {
            Integrity::Verified => Ok((self.header, self.records)),
            Integrity::Mismatch => Err(Psafe3Error::IntegrityMismatch),
        }
    }
}

/// Split a file image into (body ciphertext, tag), validating total
/// length and the end-of-data marker.
fn split_file(bytes: &[u8]) -> Result<(&[u8], &[u8; HASH_SIZE]), Psafe3Error> {
    let truncated = || Psafe3Error::Truncated {
        need: MIN_FILE_SIZE,
        have: bytes.len(),
    };
    let rest = bytes.get(PROLOGUE_SIZE..).ok_or_else(truncated)?;
    let (rest, tag) = rest.split_last_chunk::<HASH_SIZE>().ok_or_else(truncated)?;
    let (ciphertext, marker) = rest.split_last_chunk::<BLOCK_SIZE>().ok_or_else(truncated)?;
    if marker != &EOF_MARKER {
        return Err(Psafe3Error::MalformedBody("end-of-data marker not found"));
    }
    Ok((ciphertext, tag))
}

/// Verify the passphrase and recover both working keys. The stretched
/// key lives only inside this function and wipes itself on return.
fn unlock(prologue: &Prologue, passphrase: &[u8]) -> Result<WorkingKeys, Psafe3Error> {
    let stretched = stretch_key(passphrase, &prologue.salt, prologue.iterations);
    if !verify_stretched_key(&stretched, &prologue.verification_hash) {
        return Err(Psafe3Error::InvalidPassword);
    }
    recover_working_keys(&stretched, &prologue.wrapped_keys)
}

/// Check whether `passphrase` opens the vault, without decrypting any
/// of the body.
pub fn open_and_verify(bytes: &[u8], passphrase: &[u8]) -> Result<(), Psafe3Error> {
    engine::init()?;
    let prologue = Prologue::parse(bytes)?;
    let stretched = stretch_key(passphrase, &prologue.salt, prologue.iterations);
    if !verify_stretched_key(&stretched, &prologue.verification_hash) {
        return Err(Psafe3Error::InvalidPassword);
    }
    Ok(())
}

/// Decode a complete PWS3 file image.
///
/// A wrong passphrase fails with `InvalidPassword` before a single
/// body block is decrypted. A tag mismatch after a full decode is
/// reported in [`Decoded::integrity`], with the (untrustworthy) fields
/// still available for diagnosis.
pub fn decode(bytes: &[u8], passphrase: &[u8]) -> Result<Decoded, Psafe3Error> {
    engine::init()?;
    let prologue = Prologue::parse(bytes)?;
    let (ciphertext, tag) = split_file(bytes)?;

    let keys = unlock(&prologue, passphrase)?;

    let plaintext: Zeroizing<Vec<u8>> = decrypt_body(ciphertext, keys.cipher_key(), &prologue.iv)?;
    let mut verifier = IntegrityVerifier::new(keys.hmac_key())?;
    let mut reader = FieldReader::new(&plaintext)?;

    let mut header = Vec::new();
    let mut records = Vec::new();
    loop {
        let group = reader.group();
        let field = match reader.next_field()? {
            Some(field) => field,
            None => break,
        };
        verifier.absorb(&field);
        if field.is_group_terminator() && group == Group::Header {
            continue; // boundary marker, not data
        }
        match group {
            Group::Header => header.push(field),
            Group::Database => records.push(field),
        }
    }

    let integrity = verifier.finish(tag);
    Ok(Decoded {
        header,
        records,
        integrity,
    })
}
