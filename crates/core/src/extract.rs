//! Article extraction: fetch a page, reduce it to title and paragraph text,
//! persist it as a two-line text artifact.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;

use crate::fetch::{FetchConfig, build_client, fetch_with_client};
use crate::parse::Document;
use crate::records::InputRecord;
use crate::{MetricaError, Result};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Title and body text extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl ExtractedArticle {
    /// Reduces an HTML page to its title and the text of its paragraphs.
    ///
    /// The title loses every `-` character; the paragraphs are joined by a
    /// single space and whitespace-normalized.
    pub fn from_html(id: impl Into<String>, html: &str) -> Result<Self> {
        let doc = Document::parse(html)?;

        let title = clean_title(&doc.title().unwrap_or_default());
        let body = normalize_whitespace(&doc.paragraphs().join(" "));

        Ok(Self { id: id.into(), title, body })
    }

    /// Artifact text: title on line 1, body on line 2.
    pub fn to_artifact(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

/// Removes hyphens from a page title.
///
/// Line breaks are flattened to spaces so the title stays on the first line
/// of the artifact; nothing else is touched.
pub fn clean_title(title: &str) -> String {
    title
        .chars()
        .filter(|&c| c != '-')
        .map(|c| if matches!(c, '\n' | '\r') { ' ' } else { c })
        .collect()
}

/// Collapses every run of whitespace into one space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Path of the artifact for `record` under `dir`.
pub fn artifact_path(dir: &Path, record: &InputRecord) -> Result<PathBuf> {
    Ok(dir.join(record.artifact_name()?))
}

/// Writes the artifact for `article`, replacing any previous one.
pub fn write_artifact(dir: &Path, record: &InputRecord, article: &ExtractedArticle) -> Result<PathBuf> {
    let path = artifact_path(dir, record)?;
    fs::write(&path, article.to_artifact())?;
    Ok(path)
}

/// Deletes an artifact left behind by an earlier run for a record that has
/// just failed, so a failed id never has text on disk.
fn remove_stale_artifact(dir: &Path, record: &InputRecord) -> Result<()> {
    let Ok(path) = artifact_path(dir, record) else {
        return Ok(());
    };
    if path.exists() {
        fs::remove_file(&path)?;
        tracing::debug!(id = %record.id, path = %path.display(), "Removed stale article");
    }
    Ok(())
}

/// Result of extracting a single record.
#[derive(Debug)]
pub enum ExtractOutcome {
    /// The artifact was written.
    Saved { id: String, path: PathBuf },
    /// Fetching or parsing failed; no artifact exists for this id.
    Failed { id: String, url: String, error: MetricaError },
}

impl ExtractOutcome {
    pub fn id(&self) -> &str {
        match self {
            ExtractOutcome::Saved { id, .. } | ExtractOutcome::Failed { id, .. } => id.as_str(),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, ExtractOutcome::Saved { .. })
    }
}

/// Outcomes of an extraction batch, in input order.
#[derive(Debug, Default)]
pub struct ExtractReport {
    pub outcomes: Vec<ExtractOutcome>,
}

impl ExtractReport {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.saved()
    }
}

/// Sequential page extractor writing artifacts into one directory.
pub struct Extractor {
    client: Client,
    fetch: FetchConfig,
    output_dir: PathBuf,
}

impl Extractor {
    /// Creates an extractor with a single HTTP client for the whole batch.
    pub fn new(fetch: FetchConfig, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = build_client(&fetch)?;
        Ok(Self { client, fetch, output_dir: output_dir.into() })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetches and reduces one record without touching the filesystem.
    pub async fn extract(&self, record: &InputRecord) -> Result<ExtractedArticle> {
        record.artifact_name()?;
        let html = fetch_with_client(&self.client, &record.url, &self.fetch).await?;
        ExtractedArticle::from_html(record.id.clone(), &html)
    }

    /// Extracts every record in order and persists the successful ones.
    ///
    /// Per-record fetch and parse failures become [`ExtractOutcome::Failed`]
    /// and remove any artifact an earlier run wrote for that id. Failing to
    /// create the directory or write or remove an artifact aborts the batch.
    pub async fn run(&self, records: &[InputRecord]) -> Result<ExtractReport> {
        fs::create_dir_all(&self.output_dir)?;

        let mut report = ExtractReport::default();

        for record in records {
            let outcome = match self.extract(record).await {
                Ok(article) => {
                    let path = write_artifact(&self.output_dir, record, &article)?;
                    tracing::debug!(id = %record.id, path = %path.display(), "Saved article");
                    ExtractOutcome::Saved { id: record.id.clone(), path }
                }
                Err(e) => {
                    tracing::warn!(id = %record.id, url = %record.url, error = %e, "Extraction failed");
                    remove_stale_artifact(&self.output_dir, record)?;
                    ExtractOutcome::Failed { id: record.id.clone(), url: record.url.clone(), error: e }
                }
            };
            report.outcomes.push(outcome);
        }

        tracing::info!(
            saved = report.saved(),
            failed = report.failed(),
            dir = %self.output_dir.display(),
            "Extraction finished"
        );

        Ok(report)
    }
}
