//! Unsigned LEB128 variable-length integers.
//!
//! Each byte carries 7 payload bits, least significant group first, with the
//! high bit set on every byte except the last. Values are `u32`, so an
//! encoding is at most [`MAX_VARINT_LEN`] bytes.
//!
//! This is the lowest layer of lpvec3: the frame codec uses it to carry the
//! part of a vector's scale that does not fit in the inline 2-bit field.

pub mod error;
pub mod leb128;

pub use error::{Result, VarintError};
pub use leb128::{put_varint, read_varint, varint_len, write_varint, MAX_VARINT_LEN};
