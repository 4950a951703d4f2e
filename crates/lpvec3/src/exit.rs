use std::fmt;

use lpvec3_codec::LpVec3Error;

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn codec_error(context: &str, err: LpVec3Error) -> CliError {
    match err {
        LpVec3Error::BufferUnderrun { .. } | LpVec3Error::Varint(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        LpVec3Error::BufferOverflow { .. } => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

pub fn hex_error(err: hex::FromHexError) -> CliError {
    CliError::new(USAGE, format!("input is not valid hex: {err}"))
}
