use clap::{Args, Subcommand};
use lpvec3_codec::LpVec3;

use crate::exit::{hex_error, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod size;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a vector and print its wire bytes as hex.
    Encode(VectorArgs),
    /// Decode hex wire bytes into a vector.
    Decode(WireArgs),
    /// Print the encoded length of a vector without encoding it.
    Size(VectorArgs),
    /// Print the raw frame fields of hex wire bytes.
    Inspect(WireArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Size(args) => size::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct VectorArgs {
    /// X component (NaN and infinities are accepted and sanitized).
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    /// Y component.
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
    /// Z component.
    #[arg(allow_negative_numbers = true)]
    pub z: f64,
}

impl VectorArgs {
    pub fn vector(&self) -> LpVec3 {
        LpVec3::new(self.x, self.y, self.z)
    }
}

#[derive(Args, Debug)]
pub struct WireArgs {
    /// Wire bytes as hex; an optional `0x` prefix, spaces and `:` are ignored.
    pub hex: String,
    /// Byte offset at which the vector starts.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

impl WireArgs {
    pub fn bytes(&self) -> CliResult<Vec<u8>> {
        let trimmed = self.hex.trim();
        let digits: String = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ':')
            .collect();
        hex::decode(digits).map_err(hex_error)
    }
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(hex: &str) -> WireArgs {
        WireArgs {
            hex: hex.to_string(),
            offset: 0,
        }
    }

    #[test]
    fn wire_bytes_accepts_prefix_and_separators() {
        assert_eq!(wire("0xF4 ff:01").bytes().unwrap(), vec![0xF4, 0xFF, 0x01]);
    }

    #[test]
    fn wire_bytes_rejects_odd_length() {
        let err = wire("abc").bytes().unwrap_err();
        assert_eq!(err.code, crate::exit::USAGE);
    }
}
