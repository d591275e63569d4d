//! CRC-32 checksum as computed by the game's save loader.
//!
//! This is the standard reflected CRC-32 (polynomial 0xEDB88320, initial
//! value 0xFFFFFFFF, final complement). The Castagnoli variant that hardware
//! instructions accelerate uses a different polynomial and produces different
//! digests, so the bitwise loop is implemented here directly.

const POLY: u32 = 0xEDB8_8320;

/// Compute the CRC-32 of a byte slice.
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in data {
        crc ^= u32::from(b);
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(checksum(&[]), 0x0000_0000);
    }

    #[test]
    fn test_reference_vector() {
        // The standard CRC-32 check value
        assert_eq!(checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_sensitive_to_every_byte() {
        let a = checksum(b"rksys");
        let b = checksum(b"rksyt");
        assert_ne!(a, b);
    }
}
