//! Fixed-width Mii name fields.

use rksys_common::be;

use crate::{Error, Result};

/// Width of a name field in UTF-16 code units.
pub const NAME_UNITS: usize = 10;

/// An owner or creator name, at most 10 UTF-16 code units.
///
/// Names may be empty: creator fields frequently are, and the block codec
/// decides separately whether an empty owner name is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MiiName(String);

impl MiiName {
    /// Create a name, validating the encoded width.
    pub fn new(value: &str) -> Result<Self> {
        let units = be::utf16_len(value);
        if units > NAME_UNITS {
            return Err(Error::NameTooLong(units));
        }
        Ok(MiiName(value.to_owned()))
    }

    /// Decode a name from its 20-byte field at `offset`.
    pub fn from_field(data: &[u8], offset: usize) -> Self {
        // Trailing zero units are padding; width is bounded by the field.
        MiiName(be::read_utf16(data, offset, NAME_UNITS))
    }

    /// Encode the name into its 20-byte field at `offset`, zero-padded.
    pub fn write_field(&self, data: &mut [u8], offset: usize) {
        be::write_utf16(data, offset, NAME_UNITS, &self.0);
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for MiiName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_limit_is_code_units() {
        assert!(MiiName::new("exactly10!").is_ok());
        assert_eq!(
            MiiName::new("elevenchars").unwrap_err(),
            Error::NameTooLong(11)
        );
        // 5 chars outside the BMP occupy 10 units; 6 do not fit
        let five = "\u{1F3C1}".repeat(5);
        let six = "\u{1F3C1}".repeat(6);
        assert!(MiiName::new(&five).is_ok());
        assert!(MiiName::new(&six).is_err());
    }

    #[test]
    fn test_field_round_trip() {
        let mut buf = [0xFFu8; 24];
        let name = MiiName::new("Daisy").unwrap();
        name.write_field(&mut buf, 2);
        assert_eq!(MiiName::from_field(&buf, 2), name);
        // Unused tail of the field is zeroed
        assert_eq!(&buf[12..22], &[0u8; 10]);
    }

    #[test]
    fn test_empty_name_allowed() {
        assert!(MiiName::new("").is_ok());
        assert!(MiiName::new("").unwrap().is_empty());
    }
}
