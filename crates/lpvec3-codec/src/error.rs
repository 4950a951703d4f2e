use lpvec3_varint::VarintError;

/// Errors that can occur while decoding or writing an LpVec3.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LpVec3Error {
    /// The buffer does not hold the fixed-size part of the encoding.
    #[error("unexpected end while reading LpVec3 at offset {offset} ({needed} bytes needed, {available} available)")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The destination slice cannot hold the encoded vector.
    #[error("buffer too small for LpVec3 ({needed} bytes needed, {available} available)")]
    BufferOverflow { needed: usize, available: usize },

    /// The scale extension could not be read.
    #[error(transparent)]
    Varint(#[from] VarintError),
}

pub type Result<T> = std::result::Result<T, LpVec3Error>;
