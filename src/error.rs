//! # Error Types
//!
//! All operations return [`Result<T, Psafe3Error>`](Psafe3Error).
//! Every failure is deterministic for a given input; nothing here is
//! transient or worth retrying. [`ErrorKind`] gives CLI collaborators a
//! stable, copyable classification with a distinct non-zero status code
//! per kind.

use thiserror::Error;

/// The error type for all PWS3 decode operations.
#[derive(Error, Debug)]
pub enum Psafe3Error {
    /// The file does not start with the `PWS3` magic tag.
    #[error("not a PWS3 file: bad magic tag")]
    BadMagic,

    /// Fewer bytes available than the format requires at this point.
    #[error("file truncated: need at least {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    /// I/O error while reading the underlying byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Crypto engine bring-up or primitive failure.
    ///
    /// These are programming or environment errors (bad key length,
    /// failed self-test), never a property of the input file.
    #[error("crypto engine failure: {0}")]
    CryptoEngine(&'static str),

    /// The stretched passphrase does not match the stored verification
    /// hash. The body is never decrypted when this is returned.
    #[error("invalid password or corrupt file")]
    InvalidPassword,

    /// Body or footer violates the container layout.
    #[error("malformed body: {0}")]
    MalformedBody(&'static str),

    /// A record header is inconsistent with the stream around it.
    #[error("malformed field: {0}")]
    MalformedField(&'static str),

    /// The record stream ended before a record's declared length was
    /// satisfied. No partial record is ever returned.
    #[error("premature end of record stream")]
    PrematureEnd,

    /// The trailing authentication tag does not match the recomputed
    /// HMAC over the field values.
    #[error("HMAC verification failed: database integrity cannot be trusted")]
    IntegrityMismatch,
}

/// Copyable classification of a [`Psafe3Error`], one per taxonomy kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadMagic,
    Truncated,
    Io,
    CryptoEngine,
    InvalidPassword,
    MalformedBody,
    MalformedField,
    PrematureEnd,
    IntegrityMismatch,
}

impl Psafe3Error {
    /// The kind of this error, for status mapping and diagnostics.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Psafe3Error::BadMagic => ErrorKind::BadMagic,
            Psafe3Error::Truncated { .. } => ErrorKind::Truncated,
            Psafe3Error::Io(_) => ErrorKind::Io,
            Psafe3Error::CryptoEngine(_) => ErrorKind::CryptoEngine,
            Psafe3Error::InvalidPassword => ErrorKind::InvalidPassword,
            Psafe3Error::MalformedBody(_) => ErrorKind::MalformedBody,
            Psafe3Error::MalformedField(_) => ErrorKind::MalformedField,
            Psafe3Error::PrematureEnd => ErrorKind::PrematureEnd,
            Psafe3Error::IntegrityMismatch => ErrorKind::IntegrityMismatch,
        }
    }
}

impl ErrorKind {
    /// Distinct non-zero process status code for this kind.
    pub fn status(self) -> u8 {
        match self {
            ErrorKind::BadMagic => 2,
            ErrorKind::Truncated => 3,
            ErrorKind::Io => 4,
            ErrorKind::CryptoEngine => 5,
            ErrorKind::InvalidPassword => 6,
            ErrorKind::MalformedBody => 7,
            ErrorKind::MalformedField => 8,
            ErrorKind::PrematureEnd => 9,
            ErrorKind::IntegrityMismatch => 10,
        }
    }
}

/// Short human-readable description of an error kind, for tools that
/// report status codes rather than carrying the full error value.
pub fn strerror(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::BadMagic => "not a PWS3 file",
        ErrorKind::Truncated => "file truncated",
        ErrorKind::Io => "I/O error",
        ErrorKind::CryptoEngine => "crypto engine failure",
        ErrorKind::InvalidPassword => "invalid password or corrupt file",
        ErrorKind::MalformedBody => "malformed database body",
        ErrorKind::MalformedField => "malformed field record",
        ErrorKind::PrematureEnd => "premature end of record stream",
        ErrorKind::IntegrityMismatch => "HMAC verification failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_distinct_and_nonzero() {
        let kinds = [
            ErrorKind::BadMagic,
            ErrorKind::Truncated,
            ErrorKind::Io,
            ErrorKind::CryptoEngine,
            ErrorKind::InvalidPassword,
            ErrorKind::MalformedBody,
            ErrorKind::MalformedField,
            ErrorKind::PrematureEnd,
            ErrorKind::IntegrityMismatch,
        ];
        let mut seen = std::collections::HashSet::new();
        for kind in kinds {
            assert_ne!(kind.status(), 0);
            assert!(seen.insert(kind.status()), "duplicate status for {kind:?}");
            assert!(!strerror(kind).is_empty());
        }
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Psafe3Error::BadMagic.kind(), ErrorKind::BadMagic);
        assert_eq!(
            Psafe3Error::Truncated { need: 152, have: 3 }.kind(),
            ErrorKind::Truncated
        );
        assert_eq!(
            Psafe3Error::IntegrityMismatch.kind(),
            ErrorKind::IntegrityMismatch
        );
    }
}
