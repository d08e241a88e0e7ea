//! Field-type classification for display-oriented collaborators.
//!
//! Dump tools need to know how to render a field's value. The type
//! codes differ between the header and database groups, so each group
//! gets its own explicit set of codes here; anything unlisted renders
//! as raw bytes. This replaces the numeric-range switches that dump
//! tools otherwise accumulate.

use crate::decryptor::fields::GROUP_TERMINATOR;

/// How a field's value should be interpreted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Two bytes, minor then major version number.
    Version,
    /// 16-byte UUID, rendered as hex.
    Uuid,
    /// Timestamp (little-endian seconds since the epoch).
    Time,
    /// Text, rendered as-is.
    Text,
    /// Group terminator / entry separator, no value to render.
    Terminator,
    /// Unknown or binary; render as raw bytes.
    Raw,
}

/// Classify a header-group field type.
pub fn header_value_shape(field_type: u8) -> ValueShape {
    match field_type {
        0x00 => ValueShape::Version,
        0x01 => ValueShape::Uuid,
        0x04 => ValueShape::Time,
        GROUP_TERMINATOR => ValueShape::Terminator,
        // Preferences, tree display status, last-save user/host and the
        // rest of the header set are all stored as text.
        _ => ValueShape::Text,
    }
}

/// Classify a database-group field type.
pub fn record_value_shape(field_type: u8) -> ValueShape {
    match field_type {
        0x01 => ValueShape::Uuid,
        // group, title, username, notes, password, url, autotype,
        // password history, password policy, run command, email
        0x02 | 0x03 | 0x04 | 0x05 | 0x06 | 0x0d | 0x0e | 0x0f | 0x10 | 0x14 | 0x16 => {
            ValueShape::Text
        }
        // ctime, password mtime, atime, expiry, record mtime
        0x07 | 0x08 | 0x09 | 0x0a | 0x0c => ValueShape::Time,
        GROUP_TERMINATOR => ValueShape::Terminator,
        _ => ValueShape::Raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_code_differs_by_group() {
        // 0x04 is a timestamp in the header but text (username) in a record.
        assert_eq!(header_value_shape(0x04), ValueShape::Time);
        assert_eq!(record_value_shape(0x04), ValueShape::Text);
    }

    #[test]
    fn terminator_is_terminator_in_both_groups() {
        assert_eq!(header_value_shape(0xff), ValueShape::Terminator);
        assert_eq!(record_value_shape(0xff), ValueShape::Terminator);
    }

    #[test]
    fn unknown_record_types_are_raw() {
        assert_eq!(record_value_shape(0x42), ValueShape::Raw);
        assert_eq!(record_value_shape(0x0b), ValueShape::Raw);
    }
}
