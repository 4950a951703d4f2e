use bytes::{Buf, BufMut, BytesMut};
use lpvec3_varint::varint_len;

use crate::error::{LpVec3Error, Result};
use crate::frame::{inspect_lp_vec3, put_frame, FRAME_LEN, ZERO_FORM_LEN};
use crate::scale::select_scale;
use crate::vec3::LpVec3;

/// Decode the vector encoded at `offset`.
///
/// Returns the vector and the number of bytes it occupied (1, 6, or 6 plus
/// the scale extension).
pub fn read_lp_vec3(buf: &[u8], offset: usize) -> Result<(LpVec3, usize)> {
    let frame = inspect_lp_vec3(buf, offset)?;
    Ok((frame.decode(), frame.len()))
}

/// Encode `vec` into `buf` at `offset`.
///
/// Returns the offset immediately after the written bytes. Fails without
/// touching `buf` if the slice is too short.
pub fn write_lp_vec3(vec: &LpVec3, buf: &mut [u8], offset: usize) -> Result<usize> {
    let needed = lp_vec3_size(vec);
    let available = buf.len().saturating_sub(offset);
    if available < needed {
        return Err(LpVec3Error::BufferOverflow { needed, available });
    }

    let mut dst = &mut buf[offset..offset + needed];
    put_lp_vec3(&mut dst, vec);
    Ok(offset + needed)
}

/// Number of bytes [`write_lp_vec3`] produces for `vec`.
pub fn lp_vec3_size(vec: &LpVec3) -> usize {
    let sanitized = vec.sanitized();
    match select_scale(&sanitized) {
        Some(scale) => FRAME_LEN + scale.extension().map_or(0, varint_len),
        None => ZERO_FORM_LEN,
    }
}

/// Append the encoding of `vec` to any growable buffer.
pub fn put_lp_vec3<B: BufMut>(dst: &mut B, vec: &LpVec3) {
    let sanitized = vec.sanitized();
    match select_scale(&sanitized) {
        Some(scale) => put_frame(dst, &sanitized, scale),
        None => dst.put_u8(0),
    }
}

/// Encode `vec` onto the end of `dst`.
pub fn encode_lp_vec3(vec: &LpVec3, dst: &mut BytesMut) {
    dst.reserve(lp_vec3_size(vec));
    put_lp_vec3(dst, vec);
}

/// Decode a vector from the front of `src`.
///
/// On success, consumes the encoded bytes. On failure `src` is left untouched.
pub fn decode_lp_vec3(src: &mut BytesMut) -> Result<LpVec3> {
    let (vec, len) = read_lp_vec3(src, 0)?;
    src.advance(len);
    Ok(vec)
}
