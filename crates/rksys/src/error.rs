//! Error types for save-file handling.

use thiserror::Error;

/// Errors that can occur when parsing or editing a save file.
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer is not exactly the size of a save file.
    #[error("invalid save size: expected {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    /// A license slot index outside 0-3.
    #[error("license slot {0} out of range (0-3)")]
    InvalidSlot(usize),

    /// The addressed license slot carries no license.
    #[error("license slot {0} is not in use")]
    SlotNotInUse(usize),

    /// A license name that is empty after whitespace normalization.
    #[error("license name may not be empty")]
    EmptyName,

    /// A license name wider than its 10 code unit field.
    #[error("license name too long: {0} UTF-16 code units, maximum is 10")]
    NameTooLong(usize),

    /// A friend code string that is not 12 decimal digits.
    #[error("invalid friend code: {0}")]
    InvalidFriendCode(&'static str),

    /// A Mii failed to encode or decode.
    #[error(transparent)]
    Mii(#[from] rksys_mii::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for save-file operations.
pub type Result<T> = std::result::Result<T, Error>;
