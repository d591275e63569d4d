//! Friend-code derivation.
//!
//! Friend codes are not stored in the save. The console derives them from
//! the profile id: MD5 over the pid (little-endian) followed by the ASCII
//! game tag `"JCMR"`, with the first hash byte (shifted right once)
//! becoming the upper 32 bits above the pid. The 12-digit decimal result is
//! what players exchange. The algorithm is an external contract; a different
//! hash prefix would produce codes the matchmaking servers reject.

use md5::{Digest, Md5};

use rksys_common::be;

use crate::{Error, Result};

/// Derive the friend code for the profile id stored at `offset`.
///
/// A pid of 0 means the license never went online and has no friend code;
/// it renders as the empty string.
pub fn friend_code(data: &[u8], offset: usize) -> String {
    let pid = be::read_u32(data, offset);
    if pid == 0 {
        return String::new();
    }

    let src = [
        data[offset + 3],
        data[offset + 2],
        data[offset + 1],
        data[offset],
        0x4A,
        0x43,
        0x4D,
        0x52,
    ];
    let hash = Md5::digest(src);
    let hi = u64::from(hash[0] >> 1);
    format_friend_code(hi << 32 | u64::from(pid))
}

/// Render a numeric friend code as three zero-padded 4-digit groups.
pub fn format_friend_code(fc: u64) -> String {
    format!(
        "{:04}-{:04}-{:04}",
        fc / 100_000_000 % 10_000,
        fc / 10_000 % 10_000,
        fc % 10_000
    )
}

/// Parse a friend code string back to its numeric form.
///
/// Dashes and whitespace are ignored; exactly 12 digits must remain.
pub fn parse_friend_code(code: &str) -> Result<u64> {
    let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 12 {
        return Err(Error::InvalidFriendCode(
            "friend code must be exactly 12 digits",
        ));
    }
    digits
        .parse()
        .map_err(|_| Error::InvalidFriendCode("friend code contains invalid characters"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pid_has_no_code() {
        let data = [0u8; 8];
        assert_eq!(friend_code(&data, 0), "");
    }

    #[test]
    fn test_code_shape() {
        let mut data = [0u8; 8];
        be::write_u32(&mut data, 2, 0x0123_4567);
        let code = friend_code(&data, 2);
        assert_eq!(code.len(), 14);
        assert_eq!(code.as_bytes()[4], b'-');
        assert_eq!(code.as_bytes()[9], b'-');
        assert!(code
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-'));
        // Deterministic
        assert_eq!(friend_code(&data, 2), code);
    }

    #[test]
    fn test_formatting_pads_groups() {
        assert_eq!(format_friend_code(1), "0000-0000-0001");
        assert_eq!(format_friend_code(123_456_789_012), "1234-5678-9012");
        assert_eq!(format_friend_code(500_000_042), "0005-0000-0042");
    }

    #[test]
    fn test_parse_ignores_separators() {
        assert_eq!(parse_friend_code("1234-5678-9012").unwrap(), 123_456_789_012);
        assert_eq!(parse_friend_code(" 1234 5678 9012 ").unwrap(), 123_456_789_012);
        assert!(parse_friend_code("1234-5678-901").is_err());
        assert!(parse_friend_code("").is_err());
    }

    #[test]
    fn test_format_parse_round_trip() {
        let fc = 123_456_789_012u64;
        assert_eq!(parse_friend_code(&format_friend_code(fc)).unwrap(), fc);
    }
}
