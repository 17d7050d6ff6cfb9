//! The input article list.

use std::fs::File;
use std::path::Path;

use csv::Reader;
use serde::{Deserialize, Serialize};

use crate::{MetricaError, Result};

/// One row of the input list: an article id and the URL to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Join key across artifacts and output rows.
    #[serde(rename = "URL_ID")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl InputRecord {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self { id: id.into(), url: url.into() }
    }

    /// Name of the text artifact persisted for this record.
    ///
    /// Ids end up in file names, so empty ids and ids that could escape the
    /// articles directory are rejected.
    pub fn artifact_name(&self) -> Result<String> {
        let id = self.id.as_str();
        let reason = if id.trim().is_empty() {
            Some("empty id")
        } else if id.contains(['/', '\\']) {
            Some("id contains a path separator")
        } else if id.contains("..") {
            Some("id contains '..'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(MetricaError::InvalidRecord { id: id.to_string(), reason: reason.to_string() }),
            None => Ok(format!("{}.txt", id)),
        }
    }
}

/// Loads the input list from a CSV file with `URL_ID` and `URL` columns.
///
/// Rows keep file order; extra columns are ignored.
pub fn load_records(path: &Path) -> Result<Vec<InputRecord>> {
    if !path.exists() {
        return Err(MetricaError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = Reader::from_reader(file);
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<InputRecord>().enumerate() {
        let record =
            row.map_err(|e| MetricaError::InvalidInput(format!("{}: row {}: {}", path.display(), index + 1, e)))?;
        records.push(record);
    }

    tracing::debug!(path = %path.display(), records = records.len(), "Loaded input records");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_records_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Input.csv");
        fs::write(
            &path,
            "URL_ID,URL,Notes\n37,https://example.test/b,x\n2,https://example.test/a,y\n",
        )
        .unwrap();

        let records = load_records(&path).unwrap();

        assert_eq!(
            records,
            vec![
                InputRecord::new("37", "https://example.test/b"),
                InputRecord::new("2", "https://example.test/a"),
            ]
        );
    }

    #[test]
    fn test_load_records_missing_file() {
        let result = load_records(Path::new("/nonexistent/Input.csv"));
        assert!(matches!(result, Err(MetricaError::FileNotFound(_))));
    }

    #[test]
    fn test_load_records_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Input.csv");
        fs::write(&path, "ID,LINK\n1,https://example.test\n").unwrap();

        assert!(matches!(load_records(&path), Err(MetricaError::InvalidInput(_))));
    }

    #[test]
    fn test_artifact_name() {
        assert_eq!(InputRecord::new("blackassign0001", "u").artifact_name().unwrap(), "blackassign0001.txt");
        assert_eq!(InputRecord::new("12.5", "u").artifact_name().unwrap(), "12.5.txt");
    }

    #[test]
    fn test_artifact_name_rejects_unsafe_ids() {
        for id in ["", "  ", "a/b", "a\\b", "..", "x..y"] {
            let result = InputRecord::new(id, "u").artifact_name();
            assert!(matches!(result, Err(MetricaError::InvalidRecord { .. })), "id {:?}", id);
        }
    }
}
