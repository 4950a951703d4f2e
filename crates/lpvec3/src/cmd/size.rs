use lpvec3_codec::{lp_vec3_size, LpVec3};
use serde::Serialize;

use crate::cmd::VectorArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat, Record};

#[derive(Serialize)]
struct SizeOutput {
    input: LpVec3,
    len: usize,
}

impl Record for SizeOutput {
    fn schema(&self) -> &'static str {
        "size.schema.json"
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("input", self.input.to_string()),
            ("len", self.len.to_string()),
        ]
    }
}

pub fn run(args: VectorArgs, format: OutputFormat) -> CliResult<i32> {
    let input = args.vector();
    let out = SizeOutput {
        input,
        len: lp_vec3_size(&input),
    };
    print_record(&out, format);
    Ok(SUCCESS)
}
