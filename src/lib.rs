// src/lib.rs

//! Read-only decoder for Password Safe v3 (PWS3) database files.
//!
//! The pipeline: parse the fixed 152-byte prologue, stretch the
//! passphrase into a verification key, recover the two working keys
//! from the prologue's wrapped-key blocks, CBC-decrypt the body with
//! Twofish-256, reassemble the variable-length field records, and
//! check the trailing HMAC-SHA256 tag over every field value.
//!
//! High-level API: [`decode`] for the full pipeline, [`open_and_verify`]
//! for a passphrase check that never touches the body.

pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod error;
pub mod fieldtype;
pub mod prologue;
pub mod secrets;
pub mod utils;

// High-level API — this is what most users import
pub use decryptor::{decode, open_and_verify, Decoded, Integrity};
pub use error::{strerror, ErrorKind, Psafe3Error};

// Pipeline stages — public for custom flows (e.g. streaming dump tools)
pub use decryptor::body::decrypt_body;
pub use decryptor::fields::{Field, FieldReader, Group, GROUP_TERMINATOR};
pub use decryptor::integrity::IntegrityVerifier;
pub use prologue::Prologue;

// Key derivation — needed by passphrase-check tools
pub use crypto::kdf::{stretch_key, verify_stretched_key};
pub use crypto::unwrap::{recover_working_key, recover_working_keys};
pub use secrets::{StretchedKey, WorkingKeys};
