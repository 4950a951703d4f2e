use lpvec3_codec::{read_lp_vec3, LpVec3};
use serde::Serialize;

use crate::cmd::WireArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat, Record};

#[derive(Serialize)]
struct DecodedOutput {
    vector: LpVec3,
    offset: usize,
    consumed: usize,
    trailing: usize,
}

impl Record for DecodedOutput {
    fn schema(&self) -> &'static str {
        "decoded.schema.json"
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("x", self.vector.x.to_string()),
            ("y", self.vector.y.to_string()),
            ("z", self.vector.z.to_string()),
            ("offset", self.offset.to_string()),
            ("consumed", self.consumed.to_string()),
            ("trailing", self.trailing.to_string()),
        ]
    }
}

pub fn run(args: WireArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = args.bytes()?;
    let (vector, consumed) =
        read_lp_vec3(&bytes, args.offset).map_err(|err| codec_error("decode failed", err))?;

    let trailing = bytes.len() - args.offset - consumed;
    if trailing > 0 {
        tracing::warn!(trailing, "input has bytes after the decoded vector");
    }

    print_record(
        &DecodedOutput {
            vector,
            offset: args.offset,
            consumed,
            trailing,
        },
        format,
    );
    Ok(SUCCESS)
}
