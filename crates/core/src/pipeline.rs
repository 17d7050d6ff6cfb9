//! End-to-end workflow: records in, artifacts on disk, metrics report out.
//!
//! # Example
//!
//! ```rust,no_run
//! use metrica_core::{OutputFormat, Pipeline, PipelineConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::builder()
//!     .input("Input.csv")
//!     .output("output.json")
//!     .format(OutputFormat::Json)
//!     .timeout(10)
//!     .build();
//!
//! let summary = Pipeline::new(config).run().await?;
//! println!("{} rows written", summary.analysis.rows.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::Result;
use crate::analyze::{AnalysisReport, AnalyzeConfig, Analyzer, MissingArtifact};
use crate::extract::{ExtractReport, Extractor};
use crate::fetch::FetchConfig;
use crate::formatters::{OutputFormat, save_report};
use crate::lexicon::{LexiconConfig, LexiconSet};
use crate::records::{InputRecord, load_records};

/// Configuration for a full run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Input CSV with `URL_ID` and `URL` columns (default: `Input.csv`).
    pub input: PathBuf,

    /// Report destination (default: `output.csv`).
    pub output: PathBuf,

    pub format: OutputFormat,

    /// Pretty print JSON output (default: false).
    pub pretty: bool,

    /// Where artifacts are written and read (default: `Extracted_Text`).
    pub articles_dir: PathBuf,

    pub lexicon: LexiconConfig,

    pub fetch: FetchConfig,

    /// Policy for records without an artifact (default: skip).
    pub missing: MissingArtifact,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Input.csv"),
            output: PathBuf::from("output.csv"),
            format: OutputFormat::default(),
            pretty: false,
            articles_dir: PathBuf::from("Extracted_Text"),
            lexicon: LexiconConfig::default(),
            fetch: FetchConfig::default(),
            missing: MissingArtifact::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a new builder for PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }

    fn analyze_config(&self) -> AnalyzeConfig {
        AnalyzeConfig { articles_dir: self.articles_dir.clone(), missing: self.missing }
    }
}

/// Builder for PipelineConfig.
///
/// # Example
///
/// ```rust
/// use metrica_core::{MissingArtifact, PipelineConfig};
///
/// let config = PipelineConfig::builder()
///     .articles_dir("out/articles")
///     .missing(MissingArtifact::Fail)
///     .fold_stopwords(true)
///     .build();
///
/// assert!(config.lexicon.fold_case);
/// ```
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: PipelineConfig::default() }
    }

    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn pretty(mut self, value: bool) -> Self {
        self.config.pretty = value;
        self
    }

    pub fn articles_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.articles_dir = path.into();
        self
    }

    /// Sets the directory holding the positive and negative word lists.
    pub fn dictionary_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon.dictionary_dir = path.into();
        self
    }

    pub fn stopwords_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon.stopwords_dir = path.into();
        self
    }

    /// Lower-cases stop words on load so they match regardless of case.
    pub fn fold_stopwords(mut self, value: bool) -> Self {
        self.config.lexicon.fold_case = value;
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = secs;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.fetch.user_agent = user_agent.into();
        self
    }

    pub fn missing(mut self, policy: MissingArtifact) -> Self {
        self.config.missing = policy;
        self
    }

    /// Builds the PipelineConfig.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of both stages of [`Pipeline::run`].
#[derive(Debug)]
pub struct PipelineSummary {
    pub extraction: ExtractReport,
    pub analysis: AnalysisReport,
}

/// Drives the extractor and analyzer over one input file.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn records(&self) -> Result<Vec<InputRecord>> {
        let records = load_records(&self.config.input)?;
        tracing::info!(count = records.len(), input = %self.config.input.display(), "Loaded input records");
        Ok(records)
    }

    /// Fetches every record and writes its artifact.
    pub async fn extract(&self) -> Result<ExtractReport> {
        let records = self.records()?;
        self.extract_records(&records).await
    }

    async fn extract_records(&self, records: &[InputRecord]) -> Result<ExtractReport> {
        let extractor = Extractor::new(self.config.fetch.clone(), &self.config.articles_dir)?;
        extractor.run(records).await
    }

    /// Computes metrics from existing artifacts and writes the report.
    pub fn analyze(&self) -> Result<AnalysisReport> {
        let records = self.records()?;
        let lexicon = LexiconSet::load(&self.config.lexicon)?;
        self.analyze_records(&lexicon, &records)
    }

    fn analyze_records(&self, lexicon: &LexiconSet, records: &[InputRecord]) -> Result<AnalysisReport> {
        let report = Analyzer::new(lexicon, self.config.analyze_config()).run(records)?;

        save_report(&report.rows, &self.config.output, self.config.format, self.config.pretty)?;
        tracing::info!(rows = report.rows.len(), output = %self.config.output.display(), "Report written");

        Ok(report)
    }

    /// Extracts then analyzes.
    ///
    /// The lexicon and input are loaded before any request is made, so a
    /// missing dictionary file fails without network traffic. Only records
    /// saved by this extraction are analyzed; failed ids are reported in
    /// [`AnalysisReport::skipped`] alongside ids with no artifact.
    pub async fn run(&self) -> Result<PipelineSummary> {
        let lexicon = LexiconSet::load(&self.config.lexicon)?;
        let records = self.records()?;

        let extraction = self.extract_records(&records).await?;
        let saved: Vec<InputRecord> = records
            .iter()
            .zip(&extraction.outcomes)
            .filter(|(_, outcome)| outcome.is_saved())
            .map(|(record, _)| record.clone())
            .collect();

        let mut analysis = self.analyze_records(&lexicon, &saved)?;
        let missing = std::mem::take(&mut analysis.skipped);
        analysis.skipped = records
            .iter()
            .zip(&extraction.outcomes)
            .filter(|(record, outcome)| !outcome.is_saved() || missing.contains(&record.id))
            .map(|(record, _)| record.id.clone())
            .collect();

        Ok(PipelineSummary { extraction, analysis })
    }
}
