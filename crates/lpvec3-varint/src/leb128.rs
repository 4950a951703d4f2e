use bytes::BufMut;

use crate::error::{Result, VarintError};

/// Maximum encoded length of a `u32`: ceil(32 / 7).
pub const MAX_VARINT_LEN: usize = 5;

const PAYLOAD_MASK: u8 = 0x7F;
const CONTINUATION_BIT: u8 = 0x80;

/// Bits of the fifth byte that still fit in a `u32` (32 - 4 * 7 = 4).
const LAST_BYTE_MASK: u8 = 0x0F;

/// Read an unsigned LEB128 value starting at `offset`.
///
/// Returns the decoded value and the number of bytes it occupied.
pub fn read_varint(buf: &[u8], offset: usize) -> Result<(u32, usize)> {
    let mut value = 0u32;

    for i in 0..MAX_VARINT_LEN {
        let byte = *buf
            .get(offset + i)
            .ok_or(VarintError::Underrun { offset })?;

        if i == MAX_VARINT_LEN - 1 && byte & !LAST_BYTE_MASK & PAYLOAD_MASK != 0 {
            return Err(VarintError::Overflow { offset });
        }

        value |= u32::from(byte & PAYLOAD_MASK) << (7 * i);

        if byte & CONTINUATION_BIT == 0 {
            return Ok((value, i + 1));
        }
    }

    Err(VarintError::TooLong {
        offset,
        max: MAX_VARINT_LEN,
    })
}

/// Write `value` as unsigned LEB128 into `buf` at `offset`.
///
/// Returns the offset immediately after the last written byte. Nothing is
/// written when the slice is too short.
pub fn write_varint(value: u32, buf: &mut [u8], offset: usize) -> Result<usize> {
    let needed = varint_len(value);
    let available = buf.len().saturating_sub(offset);
    if available < needed {
        return Err(VarintError::BufferOverflow { needed, available });
    }

    let mut remaining = value;
    let mut pos = offset;
    loop {
        let mut byte = (remaining as u8) & PAYLOAD_MASK;
        remaining >>= 7;
        if remaining != 0 {
            byte |= CONTINUATION_BIT;
        }
        buf[pos] = byte;
        pos += 1;
        if remaining == 0 {
            return Ok(pos);
        }
    }
}

/// Append `value` as unsigned LEB128 to a growable buffer.
pub fn put_varint<B: BufMut>(dst: &mut B, value: u32) {
    let mut remaining = value;
    while remaining >= u32::from(CONTINUATION_BIT) {
        dst.put_u8((remaining as u8 & PAYLOAD_MASK) | CONTINUATION_BIT);
        remaining >>= 7;
    }
    dst.put_u8(remaining as u8);
}

/// Number of bytes `value` occupies once encoded.
pub fn varint_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_byte_values() {
        let mut buf = [0u8; 1];
        assert_eq!(write_varint(0, &mut buf, 0).unwrap(), 1);
        assert_eq!(buf, [0x00]);

        assert_eq!(write_varint(127, &mut buf, 0).unwrap(), 1);
        assert_eq!(buf, [0x7F]);
        assert_eq!(read_varint(&buf, 0).unwrap(), (127, 1));
    }

    #[test]
    fn known_multi_byte_encodings() {
        let cases: [(u32, &[u8]); 4] = [
            (128, &[0x80, 0x01]),
            (300, &[0xAC, 0x02]),
            (16_384, &[0x80, 0x80, 0x01]),
            (u32::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
        ];

        for (value, expected) in cases {
            let mut buf = BytesMut::new();
            put_varint(&mut buf, value);
            assert_eq!(buf.as_ref(), expected, "value {value}");
            assert_eq!(varint_len(value), expected.len());
            assert_eq!(read_varint(expected, 0).unwrap(), (value, expected.len()));
        }
    }

    #[test]
    fn read_at_offset_ignores_trailing_bytes() {
        let buf = [0xAA, 0xAC, 0x02, 0xFF];
        assert_eq!(read_varint(&buf, 1).unwrap(), (300, 2));
    }

    #[test]
    fn write_returns_offset_after_value() {
        let mut buf = [0u8; 8];
        let end = write_varint(300, &mut buf, 3).unwrap();
        assert_eq!(end, 5);
        assert_eq!(&buf[3..5], &[0xAC, 0x02]);
        assert_eq!(buf[..3], [0, 0, 0]);
    }

    #[test]
    fn read_empty_is_underrun() {
        assert_eq!(
            read_varint(&[], 0),
            Err(VarintError::Underrun { offset: 0 })
        );
    }

    #[test]
    fn read_truncated_continuation_is_underrun() {
        let buf = [0x80, 0x80];
        assert!(matches!(
            read_varint(&buf, 0),
            Err(VarintError::Underrun { offset: 0 })
        ));
    }

    #[test]
    fn read_six_byte_encoding_is_rejected() {
        let buf = [0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        assert!(matches!(
            read_varint(&buf, 0),
            Err(VarintError::Overflow { .. }) | Err(VarintError::TooLong { .. })
        ));
    }

    #[test]
    fn read_fifth_byte_high_bits_overflow() {
        let buf = [0xFF, 0xFF, 0xFF, 0xFF, 0x1F];
        assert_eq!(
            read_varint(&buf, 0),
            Err(VarintError::Overflow { offset: 0 })
        );
    }

    #[test]
    fn write_into_short_slice_fails_without_writing() {
        let mut buf = [0xEEu8; 2];
        let err = write_varint(16_384, &mut buf, 0).unwrap_err();
        assert_eq!(
            err,
            VarintError::BufferOverflow {
                needed: 3,
                available: 2
            }
        );
        assert_eq!(buf, [0xEE, 0xEE]);
    }

    #[test]
    fn length_boundaries() {
        assert_eq!(varint_len(0x7F), 1);
        assert_eq!(varint_len(0x80), 2);
        assert_eq!(varint_len(0x3FFF), 2);
        assert_eq!(varint_len(0x4000), 3);
        assert_eq!(varint_len(0x1F_FFFF), 3);
        assert_eq!(varint_len(0x20_0000), 4);
        assert_eq!(varint_len(0x0FFF_FFFF), 4);
        assert_eq!(varint_len(0x1000_0000), 5);
    }

    proptest! {
        #[test]
        fn prop_slice_and_bufmut_writers_agree(value in any::<u32>()) {
            let mut growable = BytesMut::new();
            put_varint(&mut growable, value);

            let mut fixed = [0u8; MAX_VARINT_LEN];
            let end = write_varint(value, &mut fixed, 0).unwrap();

            prop_assert_eq!(&fixed[..end], growable.as_ref());
            prop_assert_eq!(end, varint_len(value));
            prop_assert_eq!(read_varint(&fixed, 0).unwrap(), (value, end));
        }
    }
}
