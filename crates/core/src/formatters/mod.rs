//! Report writers for metric rows.

pub mod csv;
pub mod json;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::Result;
use crate::analyze::MetricRow;

pub use self::csv::write_csv;
pub use self::json::{JsonConfig, write_json};

/// Output format for the metrics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma separated values with a header row.
    #[default]
    Csv,
    /// A JSON array of objects keyed by column name.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: csv, json", s)),
        }
    }
}

/// Writes `rows` to `writer` in the requested format.
pub fn write_report<W: Write>(rows: &[MetricRow], writer: W, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(rows, writer),
        OutputFormat::Json => write_json(rows, writer, &JsonConfig { pretty }),
    }
}

/// Creates (or truncates) `path` and writes the report into it.
pub fn save_report(rows: &[MetricRow], path: &Path, format: OutputFormat, pretty: bool) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_report(rows, &mut writer, format, pretty)?;
    writer.flush()?;
    Ok(())
}
