/// Errors that can occur while reading or writing variable-length integers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VarintError {
    /// The buffer ended before the final (non-continuation) byte.
    #[error("unexpected end while reading varint at offset {offset}")]
    Underrun { offset: usize },

    /// The encoding runs past the maximum length for a `u32`.
    #[error("varint at offset {offset} is longer than {max} bytes")]
    TooLong { offset: usize, max: usize },

    /// The final byte carries bits that do not fit in a `u32`.
    #[error("varint at offset {offset} overflows u32")]
    Overflow { offset: usize },

    /// The destination slice cannot hold the encoded value.
    #[error("buffer too small for varint ({needed} bytes needed, {available} available)")]
    BufferOverflow { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, VarintError>;
