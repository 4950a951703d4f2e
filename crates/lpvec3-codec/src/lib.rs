//! Compact wire codec for three-component `f64` vectors.
//!
//! An [`LpVec3`] is sent as one of:
//! - a single `0x00` byte when every component is below [`ABS_MIN`]
//! - a 6-byte frame holding a 2-bit scale, a continuation flag and three
//!   15-bit quantized components
//! - the same frame followed by a LEB128 varint carrying the upper scale bits
//!
//! All components share one integer scale (`ceil` of the largest magnitude),
//! so precision degrades with the vector's largest axis: each component comes
//! back within `scale / 16383` of its sanitized input.
//!
//! ```
//! use lpvec3_codec::{read_lp_vec3, write_lp_vec3, LpVec3};
//!
//! let v = LpVec3::new(0.25, -1.5, 2.0);
//! let mut buf = [0u8; 16];
//! let end = write_lp_vec3(&v, &mut buf, 0).unwrap();
//! assert_eq!(end, v.encoded_len());
//!
//! let (decoded, len) = read_lp_vec3(&buf, 0).unwrap();
//! assert_eq!(len, end);
//! assert!((decoded.y - v.y).abs() <= 2.0 / 16383.0);
//! ```

pub mod codec;
pub mod error;
pub mod frame;
pub mod quantize;
pub mod scale;
pub mod vec3;

pub use codec::{
    decode_lp_vec3, encode_lp_vec3, lp_vec3_size, put_lp_vec3, read_lp_vec3, write_lp_vec3,
};
pub use error::{LpVec3Error, Result};
pub use frame::{inspect_lp_vec3, RawFrame, FRAME_LEN, MAX_ENCODED_LEN, ZERO_FORM_LEN};
pub use scale::{sanitize, Scale, ABS_MAX, ABS_MIN};
pub use vec3::LpVec3;
