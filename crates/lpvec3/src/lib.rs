//! Compact quantized wire codec for three-component `f64` vectors.
//!
//! # Crate Structure
//!
//! - [`varint`]: Unsigned LEB128 integers used for the scale extension
//! - [`codec`]: The LpVec3 codec: sanitizing, scale selection, quantization, framing
//!
//! The most common items are re-exported at the crate root.
//!
//! ```
//! use bytes::BytesMut;
//! use lpvec3::{decode_lp_vec3, encode_lp_vec3, LpVec3};
//!
//! let mut buf = BytesMut::new();
//! encode_lp_vec3(&LpVec3::new(4.0, 0.0, -4.0), &mut buf);
//! assert_eq!(buf.len(), 7);
//!
//! let v = decode_lp_vec3(&mut buf).unwrap();
//! assert_eq!(v, LpVec3::new(4.0, 0.0, -4.0));
//! ```

/// Re-export varint types.
pub mod varint {
    pub use lpvec3_varint::*;
}

/// Re-export codec types.
pub mod codec {
    pub use lpvec3_codec::*;
}

pub use lpvec3_codec::{
    decode_lp_vec3, encode_lp_vec3, inspect_lp_vec3, lp_vec3_size, read_lp_vec3, write_lp_vec3,
    LpVec3, LpVec3Error, RawFrame,
};
