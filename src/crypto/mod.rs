// src/crypto/mod.rs

//! Low-level crypto: engine lifecycle, key stretching, key unwrap.
//!
//! Primitives come from the RustCrypto crates (`twofish`, `sha2`,
//! `hmac`); this module only arranges them the way the PWS3 format
//! requires.

pub mod engine;
pub mod kdf;
pub mod unwrap;

use hmac::Hmac;
use sha2::Sha256;

/// Keyed hash used for the trailing authentication tag.
pub type HmacSha256 = Hmac<Sha256>;

/// Cipher block type shared by the ECB key-unwrap and CBC body paths.
pub(crate) type TwofishBlock = twofish::cipher::Block<twofish::Twofish>;
