use bytes::BytesMut;
use lpvec3_codec::scale::select_scale;
use lpvec3_codec::{encode_lp_vec3, LpVec3};
use serde::Serialize;

use crate::cmd::VectorArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat, Record};

#[derive(Serialize)]
pub struct EncodedOutput {
    input: LpVec3,
    sanitized: LpVec3,
    hex: String,
    len: usize,
    scale: Option<u64>,
    continuation: bool,
}

impl Record for EncodedOutput {
    fn schema(&self) -> &'static str {
        "encoded.schema.json"
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("input", self.input.to_string()),
            ("sanitized", self.sanitized.to_string()),
            ("hex", self.hex.clone()),
            ("len", self.len.to_string()),
            (
                "scale",
                self.scale.map_or_else(|| "-".to_string(), |s| s.to_string()),
            ),
            ("continuation", self.continuation.to_string()),
        ]
    }
}

pub fn run(args: VectorArgs, format: OutputFormat) -> CliResult<i32> {
    let out = encode(args.vector());
    tracing::debug!(len = out.len, scale = ?out.scale, "encoded vector");
    print_record(&out, format);
    Ok(SUCCESS)
}

pub fn encode(input: LpVec3) -> EncodedOutput {
    let sanitized = input.sanitized();
    let scale = select_scale(&sanitized);

    let mut buf = BytesMut::new();
    encode_lp_vec3(&input, &mut buf);

    EncodedOutput {
        input,
        sanitized,
        hex: hex::encode(&buf),
        len: buf.len(),
        scale: scale.map(|s| s.get()),
        continuation: scale.is_some_and(|s| s.needs_continuation()),
    }
}
