//! Batch analysis of extracted articles.
//!
//! The [`Analyzer`] reads the artifact written for each input record,
//! computes its [`ArticleMetrics`] and assembles [`MetricRow`]s in input
//! order.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::extract::artifact_path;
use crate::lexicon::LexiconSet;
use crate::metrics::ArticleMetrics;
use crate::records::InputRecord;
use crate::{MetricaError, Result};

/// What to do when a record has no extracted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingArtifact {
    /// Log the id and leave it out of the output.
    #[default]
    Skip,
    /// Abort the batch with [`MetricaError::FileNotFound`].
    Fail,
}

impl FromStr for MissingArtifact {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            _ => Err(format!("Invalid missing-artifact policy: {}. Valid options: skip, fail", s)),
        }
    }
}

/// Configuration for the analysis stage.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Directory the extractor wrote artifacts into.
    pub articles_dir: PathBuf,
    pub missing: MissingArtifact,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self { articles_dir: PathBuf::from("Extracted_Text"), missing: MissingArtifact::default() }
    }
}

/// One output row: the record plus its metrics, in report column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "URL_ID")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Positive Score")]
    pub positive_score: usize,
    #[serde(rename = "Negative Score")]
    pub negative_score: usize,
    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,
    #[serde(rename = "Average Sentence Length")]
    pub avg_sentence_length: f64,
    #[serde(rename = "Percentage of Complex Words")]
    pub percentage_complex_words: f64,
    #[serde(rename = "Fog Index")]
    pub fog_index: f64,
    #[serde(rename = "Average Number of Words Per Sentence")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "Complex Word Count")]
    pub complex_word_count: usize,
    #[serde(rename = "Word Count")]
    pub word_count: usize,
    #[serde(rename = "Syllable Per Word")]
    pub syllable_per_word: f64,
    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: usize,
    #[serde(rename = "Average Word Length")]
    pub avg_word_length: f64,
}

/// Report column headers, in order.
pub const COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "Positive Score",
    "Negative Score",
    "Polarity Score",
    "Subjectivity Score",
    "Average Sentence Length",
    "Percentage of Complex Words",
    "Fog Index",
    "Average Number of Words Per Sentence",
    "Complex Word Count",
    "Word Count",
    "Syllable Per Word",
    "Personal Pronouns",
    "Average Word Length",
];

impl MetricRow {
    pub fn new(record: &InputRecord, metrics: &ArticleMetrics) -> Self {
        Self {
            id: record.id.clone(),
            url: record.url.clone(),
            positive_score: metrics.positive_score,
            negative_score: metrics.negative_score,
            polarity_score: metrics.polarity_score,
            subjectivity_score: metrics.subjectivity_score,
            avg_sentence_length: metrics.avg_sentence_length,
            percentage_complex_words: metrics.percentage_complex_words,
            fog_index: metrics.fog_index,
            avg_words_per_sentence: metrics.avg_words_per_sentence,
            complex_word_count: metrics.complex_word_count,
            word_count: metrics.word_count,
            syllable_per_word: metrics.syllable_per_word,
            personal_pronouns: metrics.personal_pronouns,
            avg_word_length: metrics.avg_word_length,
        }
    }
}

/// Rows produced by an analysis batch and the ids left out of it.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    pub rows: Vec<MetricRow>,
    /// Ids without an artifact, in input order.
    pub skipped: Vec<String>,
}

/// Computes metric rows for extracted articles against a shared lexicon.
pub struct Analyzer<'a> {
    lexicon: &'a LexiconSet,
    config: AnalyzeConfig,
}

impl<'a> Analyzer<'a> {
    pub fn new(lexicon: &'a LexiconSet, config: AnalyzeConfig) -> Self {
        Self { lexicon, config }
    }

    /// Metrics for raw article text.
    pub fn analyze_text(&self, text: &str) -> ArticleMetrics {
        ArticleMetrics::compute(text, self.lexicon)
    }

    /// Reads the artifact for `record` and computes its row.
    ///
    /// # Errors
    ///
    /// Returns [`MetricaError::FileNotFound`] when the artifact does not exist.
    pub fn analyze_record(&self, record: &InputRecord) -> Result<MetricRow> {
        let path = artifact_path(&self.config.articles_dir, record)?;
        if !path.exists() {
            return Err(MetricaError::FileNotFound(path));
        }

        let text = fs::read_to_string(&path)?;
        let metrics = self.analyze_text(&text);
        tracing::debug!(id = %record.id, words = metrics.word_count, "Analyzed article");

        Ok(MetricRow::new(record, &metrics))
    }

    /// Analyzes every record in order, applying the missing-artifact policy.
    pub fn run(&self, records: &[InputRecord]) -> Result<AnalysisReport> {
        let mut report = AnalysisReport::default();

        for record in records {
            match self.analyze_record(record) {
                Ok(row) => report.rows.push(row),
                Err(MetricaError::FileNotFound(path)) if self.config.missing == MissingArtifact::Skip => {
                    tracing::warn!(id = %record.id, path = %path.display(), "No extracted article, skipping");
                    report.skipped.push(record.id.clone());
                }
                Err(MetricaError::InvalidRecord { id, reason }) if self.config.missing == MissingArtifact::Skip => {
                    tracing::warn!(id = %id, reason = %reason, "Invalid record, skipping");
                    report.skipped.push(id);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(rows = report.rows.len(), skipped = report.skipped.len(), "Analysis finished");

        Ok(report)
    }
}
