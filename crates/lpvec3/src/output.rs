use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

const SCHEMA_BASE: &str = "https://schemas.3leaps.dev/lpvec3/cli/v1";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// A command result that can be rendered in every output format.
pub trait Record: Serialize {
    /// Schema file name, e.g. `encoded.schema.json`.
    fn schema(&self) -> &'static str;

    /// Field/value pairs for table and pretty output.
    fn rows(&self) -> Vec<(&'static str, String)>;
}

#[derive(Serialize)]
struct Envelope<'a, R: Serialize> {
    schema_id: String,
    #[serde(flatten)]
    record: &'a R,
}

pub fn print_record<R: Record>(record: &R, format: OutputFormat) {
    println!("{}", render(record, format));
}

pub fn render<R: Record>(record: &R, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let out = Envelope {
                schema_id: schema_id(record.schema()),
                record,
            };
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in record.rows() {
                table.add_row(vec![field.to_string(), value]);
            }
            table.to_string()
        }
        OutputFormat::Pretty => record
            .rows()
            .into_iter()
            .map(|(field, value)| format!("{field}={value}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

pub fn schema_id(name: &str) -> String {
    format!("{SCHEMA_BASE}/{name}")
}
