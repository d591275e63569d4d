//! Big-endian field access at fixed byte offsets.
//!
//! The rksys layout is a grid of fixed offsets, so these helpers read and
//! write directly at caller-given positions instead of tracking a cursor.
//! Offsets are part of the format contract: an out-of-range offset is a bug
//! in the caller, not a property of the data, and panics via the usual slice
//! bounds check rather than truncating silently. Callers validate the buffer
//! length once, up front.

/// Read a big-endian u16 at `offset`.
#[inline]
pub fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

/// Read a big-endian u32 at `offset`.
#[inline]
pub fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read a big-endian f32 at `offset`.
#[inline]
pub fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_bits(read_u32(data, offset))
}

/// Write a big-endian u16 at `offset`.
#[inline]
pub fn write_u16(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// Write a big-endian u32 at `offset`.
#[inline]
pub fn write_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// Read a fixed-width UTF-16BE string field of `max_units` code units.
///
/// Decoding stops at the first zero code unit; the remainder of the field is
/// padding. Unpaired surrogates are replaced rather than rejected, matching
/// how the game itself renders names.
pub fn read_utf16(data: &[u8], offset: usize, max_units: usize) -> String {
    let mut units = Vec::with_capacity(max_units);
    for i in 0..max_units {
        let unit = read_u16(data, offset + i * 2);
        if unit == 0 {
            break;
        }
        units.push(unit);
    }
    String::from_utf16_lossy(&units)
}

/// Write `s` as a fixed-width UTF-16BE string field of `max_units` code
/// units, right-padded with zero code units.
///
/// The string must fit the field; width validation happens at the call site
/// where a meaningful error can be produced.
pub fn write_utf16(data: &mut [u8], offset: usize, max_units: usize, s: &str) {
    data[offset..offset + max_units * 2].fill(0);
    for (i, unit) in s.encode_utf16().take(max_units).enumerate() {
        write_u16(data, offset + i * 2, unit);
    }
}

/// Number of UTF-16 code units `s` occupies in a fixed-width field.
#[inline]
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_round_trip() {
        let mut buf = [0u8; 4];
        write_u16(&mut buf, 1, 0xBEEF);
        assert_eq!(buf, [0x00, 0xBE, 0xEF, 0x00]);
        assert_eq!(read_u16(&buf, 1), 0xBEEF);
    }

    #[test]
    fn test_u32_round_trip() {
        let mut buf = [0u8; 8];
        write_u32(&mut buf, 2, 0xDEADBEEF);
        assert_eq!(&buf[2..6], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(read_u32(&buf, 2), 0xDEADBEEF);
    }

    #[test]
    fn test_f32_reads_big_endian() {
        let buf = 1.5f32.to_bits().to_be_bytes();
        assert_eq!(read_f32(&buf, 0), 1.5);
    }

    #[test]
    fn test_utf16_pads_and_trims() {
        let mut buf = [0xAAu8; 20];
        write_utf16(&mut buf, 0, 10, "Mario");
        // 5 code units written, rest of the field zeroed
        assert_eq!(read_u16(&buf, 0), 'M' as u16);
        assert_eq!(&buf[10..20], &[0u8; 10]);
        assert_eq!(read_utf16(&buf, 0, 10), "Mario");
    }

    #[test]
    fn test_utf16_stops_at_zero_unit() {
        let mut buf = [0u8; 8];
        write_u16(&mut buf, 0, 'A' as u16);
        write_u16(&mut buf, 2, 0);
        write_u16(&mut buf, 4, 'B' as u16);
        assert_eq!(read_utf16(&buf, 0, 4), "A");
    }

    #[test]
    fn test_utf16_len_counts_code_units() {
        assert_eq!(utf16_len("Mario"), 5);
        // Outside the BMP: one char, two code units
        assert_eq!(utf16_len("\u{1F3C1}"), 2);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_offset_panics() {
        let buf = [0u8; 2];
        read_u32(&buf, 0);
    }
}
