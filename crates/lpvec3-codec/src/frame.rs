use bytes::{Buf, BufMut};
use lpvec3_varint::{put_varint, read_varint};

use crate::error::{LpVec3Error, Result};
use crate::quantize::{dequantize, quantize, DATA_BITS_MASK};
use crate::scale::{Scale, CONTINUATION_FLAG};
use crate::vec3::LpVec3;

/// Length of the zero-vector encoding.
pub const ZERO_FORM_LEN: usize = 1;

/// Length of the fixed part of a non-zero encoding.
pub const FRAME_LEN: usize = 6;

/// Longest possible encoding: frame plus a 5-byte scale extension.
pub const MAX_ENCODED_LEN: usize = FRAME_LEN + lpvec3_varint::MAX_VARINT_LEN;

/// Bit offset of the X code in the packed frame.
pub const X_OFFSET: u32 = 3;
/// Bit offset of the Y code in the packed frame.
pub const Y_OFFSET: u32 = 18;
/// Bit offset of the Z code in the packed frame.
pub const Z_OFFSET: u32 = 33;

/// Pack a sanitized vector into the 48-bit frame integer.
///
/// Layout (bit 0 = least significant):
/// ```text
/// ┌────────┬──────┬──────────────┬──────────────┬──────────────┐
/// │ 0..=1  │ 2    │ 3..=17       │ 18..=32      │ 33..=47      │
/// │ scale  │ cont │ X code (15b) │ Y code (15b) │ Z code (15b) │
/// └────────┴──────┴──────────────┴──────────────┴──────────────┘
/// ```
///
/// Codes are shifted in unmasked, two's complement, so an out-of-range code
/// spills into the neighbouring field. Only the low 48 bits reach the wire.
pub fn pack_frame(sanitized: &LpVec3, scale: Scale) -> u64 {
    let s = scale.as_f64();
    let x = (quantize(sanitized.x / s) as u64) << X_OFFSET;
    let y = (quantize(sanitized.y / s) as u64) << Y_OFFSET;
    let z = (quantize(sanitized.z / s) as u64) << Z_OFFSET;
    scale.control_bits() | x | y | z
}

/// Write the 6 frame bytes and, when the scale needs it, the varint extension.
pub(crate) fn put_frame<B: BufMut>(dst: &mut B, sanitized: &LpVec3, scale: Scale) {
    let packed = pack_frame(sanitized, scale);
    dst.put_u8(packed as u8);
    dst.put_u8((packed >> 8) as u8);
    dst.put_u32_le((packed >> 16) as u32);

    if let Some(ext) = scale.extension() {
        tracing::trace!(scale = scale.get(), ext, "writing LpVec3 scale extension");
        put_varint(dst, ext);
    }
}

/// An undecoded LpVec3 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawFrame {
    /// The 1-byte zero vector.
    Zero,
    /// A 6-byte frame, possibly followed by a scale extension.
    Scaled {
        /// Full scale, inline bits and extension combined.
        scale: Scale,
        /// Whether the continuation flag was set.
        continuation: bool,
        /// X, Y and Z codes, masked to 15 bits.
        codes: [u16; 3],
        /// Bytes occupied, extension included.
        len: usize,
    },
}

impl RawFrame {
    /// Bytes this frame occupies on the wire.
    pub fn len(&self) -> usize {
        match self {
            RawFrame::Zero => ZERO_FORM_LEN,
            RawFrame::Scaled { len, .. } => *len,
        }
    }

    /// Always false: every frame occupies at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Dequantize and rescale into a vector.
    pub fn decode(&self) -> LpVec3 {
        match self {
            RawFrame::Zero => LpVec3::ZERO,
            RawFrame::Scaled { scale, codes, .. } => {
                let s = scale.as_f64();
                let [x, y, z] = codes.map(|code| dequantize(u64::from(code)) * s);
                LpVec3::new(x, y, z)
            }
        }
    }
}

/// Parse the encoding at `offset` without dequantizing it.
pub fn inspect_lp_vec3(buf: &[u8], offset: usize) -> Result<RawFrame> {
    let available = buf.len().saturating_sub(offset);
    if available < ZERO_FORM_LEN {
        return Err(LpVec3Error::BufferUnderrun {
            offset,
            needed: ZERO_FORM_LEN,
            available,
        });
    }

    let control = buf[offset];
    if control == 0 {
        return Ok(RawFrame::Zero);
    }

    if available < FRAME_LEN {
        return Err(LpVec3Error::BufferUnderrun {
            offset,
            needed: FRAME_LEN,
            available,
        });
    }

    let mut src = &buf[offset..offset + FRAME_LEN];
    let a = src.get_u8();
    let b = src.get_u8();
    let c = src.get_u32_le();
    let packed = (u64::from(c) << 16) | (u64::from(b) << 8) | u64::from(a);

    let continuation = u64::from(control) & CONTINUATION_FLAG != 0;
    let (extension, len) = if continuation {
        let (ext, ext_len) = read_varint(buf, offset + FRAME_LEN)?;
        tracing::trace!(offset, ext, ext_len, "read LpVec3 scale extension");
        (Some(ext), FRAME_LEN + ext_len)
    } else {
        (None, FRAME_LEN)
    };

    let code = |shift: u32| ((packed >> shift) & DATA_BITS_MASK) as u16;
    Ok(RawFrame::Scaled {
        scale: Scale::from_parts(control, extension),
        continuation,
        codes: [code(X_OFFSET), code(Y_OFFSET), code(Z_OFFSET)],
        len,
    })
}
