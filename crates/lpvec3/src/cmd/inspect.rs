use lpvec3_codec::{inspect_lp_vec3, LpVec3, RawFrame};
use serde::Serialize;

use crate::cmd::WireArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat, Record};

#[derive(Serialize)]
struct InspectOutput {
    form: &'static str,
    len: usize,
    scale: Option<u64>,
    continuation: bool,
    codes: Option<[u16; 3]>,
    vector: LpVec3,
}

impl From<RawFrame> for InspectOutput {
    fn from(frame: RawFrame) -> Self {
        let vector = frame.decode();
        match frame {
            RawFrame::Zero => Self {
                form: "zero",
                len: frame.len(),
                scale: None,
                continuation: false,
                codes: None,
                vector,
            },
            RawFrame::Scaled {
                scale,
                continuation,
                codes,
                len,
            } => Self {
                form: "scaled",
                len,
                scale: Some(scale.get()),
                continuation,
                codes: Some(codes),
                vector,
            },
        }
    }
}

impl Record for InspectOutput {
    fn schema(&self) -> &'static str {
        "frame.schema.json"
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("form", self.form.to_string()), ("len", self.len.to_string())];
        if let (Some(scale), Some([x, y, z])) = (self.scale, self.codes) {
            rows.push(("scale", scale.to_string()));
            rows.push(("continuation", self.continuation.to_string()));
            rows.push(("codes", format!("{x} {y} {z}")));
        }
        rows.push(("vector", self.vector.to_string()));
        rows
    }
}

pub fn run(args: WireArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = args.bytes()?;
    let frame =
        inspect_lp_vec3(&bytes, args.offset).map_err(|err| codec_error("inspect failed", err))?;
    print_record(&InspectOutput::from(frame), format);
    Ok(SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render;

    #[test]
    fn zero_frame_rows() {
        let out = InspectOutput::from(RawFrame::Zero);
        assert_eq!(
            render(&out, OutputFormat::Pretty),
            "form=zero len=1 vector=(0, 0, 0)"
        );
    }

    #[test]
    fn scaled_frame_rows() {
        let frame = inspect_lp_vec3(&[0xF4, 0xFF, 0xFF, 0xFF, 0xFE, 0x7F, 0x01], 0).unwrap();
        let out = InspectOutput::from(frame);
        assert_eq!(
            render(&out, OutputFormat::Pretty),
            "form=scaled len=7 scale=4 continuation=true codes=32766 16383 16383 vector=(4, 0, 0)"
        );
    }
}
