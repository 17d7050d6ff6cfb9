use std::io::Write;

use csv::Writer;

use crate::Result;
use crate::analyze::{COLUMNS, MetricRow};

/// Writes the header row followed by one row per article.
///
/// The header is written even when there are no rows.
pub fn write_csv<W: Write>(rows: &[MetricRow], writer: W) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    if rows.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
