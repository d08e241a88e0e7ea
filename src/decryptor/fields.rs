//! Field record reassembly.
//!
//! The decrypted body is a sequence of variable-length records packed
//! into 16-byte blocks:
//!
//! ```text
//! 4 bytes length (LE) | 1 byte type | `length` value bytes | padding
//! ```
//!
//! A record occupies `ceil((length + 5) / 16)` blocks; trailing bytes
//! of its last block are random padding, never part of the value. The
//! first `0xFF` record terminates the header group; everything after
//! it belongs to the database group.

use zeroize::Zeroize;

use crate::consts::{BLOCK_SIZE, FIELD_HEADER_SIZE, FIRST_BLOCK_VALUE};
use crate::error::Psafe3Error;
use crate::utils::load_le32;

/// Field type reserved as group terminator / end-of-entry marker.
pub const GROUP_TERMINATOR: u8 = 0xff;

/// Which half of the record stream a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Database metadata, before the first `0xFF` field.
    Header,
    /// Entry records, after it.
    Database,
}

/// One reassembled record. The value wipes itself on drop; it may hold
/// a stored password.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct Field {
    /// Raw type code; meaning depends on the group (see `fieldtype`).
    pub field_type: u8,
    /// Exactly the declared number of value bytes, padding stripped.
    pub value: Vec<u8>,
}

impl Field {
    /// True for the reserved `0xFF` type. In the header group this is
    /// the group boundary; in the database group it separates entries.
    pub fn is_group_terminator(&self) -> bool {
        self.field_type == GROUP_TERMINATOR
    }
}

/// Lazy reader over the decrypted block stream.
///
/// Yields fields in stream order only; the chained decryption of the
/// underlying body makes any other order meaningless. The iterator is
/// fused: after an error or the end of the stream it yields nothing.
#[derive(Debug)]
pub struct FieldReader<'a> {
    plaintext: &'a [u8],
    offset: usize,
    group: Group,
    failed: bool,
}

impl<'a> FieldReader<'a> {
    /// Start reading at the first block of `plaintext`.
    pub fn new(plaintext: &'a [u8]) -> Result<Self, Psafe3Error> {
        if plaintext.len() % BLOCK_SIZE != 0 {
            return Err(Psafe3Error::MalformedField(
                "record stream is not a whole number of blocks",
            ));
        }
        Ok(FieldReader {
            plaintext,
            offset: 0,
            group: Group::Header,
            failed: false,
        })
    }

    /// Group the *next* field will belong to. Flips to `Database` once
    /// the header-group terminator has been read, which is how callers
    /// observe the boundary.
    pub fn group(&self) -> Group {
        self.group
    }

    fn next_block(&mut self) -> Option<&'a [u8]> {
        if self.offset + BLOCK_SIZE > self.plaintext.len() {
            return None;
        }
        let block = &self.plaintext[self.offset..self.offset + BLOCK_SIZE];
        self.offset += BLOCK_SIZE;
        Some(block)
    }

    /// Read the next record, or `None` at a clean end of stream.
    pub fn next_field(&mut self) -> Result<Option<Field>, Psafe3Error> {
        if self.failed {
            return Ok(None);
        }

        let first = match self.next_block() {
            Some(block) => block,
            None => return Ok(None),
        };

        let length = load_le32(first) as usize;
        let field_type = first[FIELD_HEADER_SIZE - 1];

        // Pre-size by what the stream can actually hold, so a garbled
        // length cannot trigger a multi-gigabyte allocation.
        let capacity = FIRST_BLOCK_VALUE + (self.plaintext.len() - self.offset);
        let mut value = Vec::with_capacity(length.min(capacity));

        let head = length.min(FIRST_BLOCK_VALUE);
        value.extend_from_slice(&first[FIELD_HEADER_SIZE..FIELD_HEADER_SIZE + head]);

        while value.len() < length {
            let block = match self.next_block() {
                Some(block) => block,
                None => {
                    self.failed = true;
                    value.zeroize();
                    return Err(Psafe3Error::PrematureEnd);
                }
            };
            let take = (length - value.len()).min(BLOCK_SIZE);
            value.extend_from_slice(&block[..take]);
        }

        let field = Field { field_type, value };
        if field.is_group_terminator() && self.group == Group::Header {
            self.group = Group::Database;
        }
        Ok(Some(field))
    }
}

impl Iterator for FieldReader<'_> {
    type Item = Result<Field, Psafe3Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_field().transpose()
    }
}
