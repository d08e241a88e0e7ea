//! # Constants
//!
//! Fixed sizes and literals of the PWS3 container format. Everything
//! here comes straight from the on-disk layout; none of it is tunable.

/// Magic tag identifying a PWS3 container, first 4 bytes of the file.
pub const MAGIC: [u8; 4] = *b"PWS3";

/// Cipher block size in bytes (Twofish-256, same block size as AES).
pub const BLOCK_SIZE: usize = 16;

/// Total prologue size including the magic tag:
/// 4 magic + 32 salt + 4 iterations + 32 verification hash
/// + 4×16 wrapped key blocks + 16 IV.
pub const PROLOGUE_SIZE: usize = 152;

/// Salt length in the prologue.
pub const SALT_SIZE: usize = 32;

/// SHA-256 digest / HMAC-SHA256 tag length.
pub const HASH_SIZE: usize = 32;

/// Plaintext end-of-data marker, one full cipher block, stored
/// unencrypted right after the body.
pub const EOF_MARKER: [u8; BLOCK_SIZE] = *b"PWS3-EOFPWS3-EOF";

/// Footer = end-of-data marker + 32-byte authentication tag.
pub const FOOTER_SIZE: usize = BLOCK_SIZE + HASH_SIZE;

/// Per-record header inside the decrypted body: 4-byte little-endian
/// length followed by a 1-byte type code.
pub const FIELD_HEADER_SIZE: usize = 5;

/// Value bytes carried by the first block of a record.
pub const FIRST_BLOCK_VALUE: usize = BLOCK_SIZE - FIELD_HEADER_SIZE;

/// Smallest well-formed file: prologue + footer, empty body.
pub const MIN_FILE_SIZE: usize = PROLOGUE_SIZE + FOOTER_SIZE;
