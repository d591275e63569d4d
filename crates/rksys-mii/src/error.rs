//! Error types for Mii block handling.

use thiserror::Error;

/// Errors that can occur when decoding, encoding or constructing a Mii.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The raw block is not exactly 74 bytes.
    #[error("invalid Mii block length: expected 74 bytes, got {0}")]
    InvalidLength(usize),

    /// The raw block is entirely 0x00 or entirely 0xFF.
    #[error("Mii block is empty")]
    EmptyBlock,

    /// Mii id 0 means "no avatar" and cannot round-trip through the block.
    #[error("Mii id may not be zero")]
    ZeroId,

    /// A decoded block carried an empty owner name.
    #[error("Mii block has an empty name")]
    EmptyName,

    /// A name field exceeds its 10 code unit width.
    #[error("Mii name too long: {0} UTF-16 code units, maximum is 10")]
    NameTooLong(usize),

    /// A numeric trait field falls outside its closed range.
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },

    /// A field decoded to a value with no meaning in its enumeration.
    #[error("invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: u16 },
}

/// Result type for Mii operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Range check shared by the trait-record constructors.
pub(crate) fn check_range(field: &'static str, value: u16, min: u16, max: u16) -> Result<u16> {
    if value < min || value > max {
        return Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
