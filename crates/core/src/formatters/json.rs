use std::io::Write;

use crate::Result;
use crate::analyze::MetricRow;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Writes the rows as a JSON array of objects keyed by column name.
pub fn write_json<W: Write>(rows: &[MetricRow], writer: W, config: &JsonConfig) -> Result<()> {
    if config.pretty {
        serde_json::to_writer_pretty(writer, rows)?;
    } else {
        serde_json::to_writer(writer, rows)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconSet;
    use crate::metrics::ArticleMetrics;
    use crate::records::InputRecord;

    fn render(rows: &[MetricRow], pretty: bool) -> String {
        let mut buffer = Vec::new();
        write_json(rows, &mut buffer, &JsonConfig { pretty }).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn rows() -> Vec<MetricRow> {
        let lexicon = LexiconSet::from_words(&["good"], &["bad"], &[]);
        let record = InputRecord::new("42", "https://example.test/42");
        vec![MetricRow::new(&record, &ArticleMetrics::compute("It is good. It is bad.", &lexicon))]
    }

    #[test]
    fn test_json_uses_column_names() {
        let json = render(&rows(), false);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["URL_ID"], "42");
        assert_eq!(first["Positive Score"], 1);
        assert_eq!(first["Negative Score"], 1);
        assert_eq!(first["Word Count"], 6);
        assert_eq!(first["Average Number of Words Per Sentence"], 3.0);
    }

    #[test]
    fn test_pretty_json() {
        let json = render(&rows(), true);
        assert!(json.contains("\n  {"));
    }

    #[test]
    fn test_json_rows_deserialize() {
        let original = rows();
        let mut buffer = Vec::new();
        write_json(&original, &mut buffer, &JsonConfig::default()).unwrap();

        let parsed: Vec<MetricRow> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, original[0].id);
        assert_eq!(parsed[0].word_count, original[0].word_count);
        assert_eq!(parsed[0].personal_pronouns, original[0].personal_pronouns);
    }
}
