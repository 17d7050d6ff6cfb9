//! Error types for Metrica operations.
//!
//! This module defines the main error type [`MetricaError`] which represents
//! all possible errors that can occur while reading the input list, fetching
//! pages, persisting articles, loading dictionaries and writing the report.
//!
//! # Example
//!
//! ```rust
//! use metrica_core::{MetricaError, Result};
//!
//! fn require_body(body: &str) -> Result<&str> {
//!     if body.is_empty() {
//!         return Err(MetricaError::HtmlParseError("empty document".to_string()));
//!     }
//!     Ok(body)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the extraction and analysis pipeline.
///
/// Per-record failures (network, parsing, bad ids) are caught by the
/// extractor and reported as outcomes; everything else propagates and
/// aborts the batch.
#[derive(Error, Debug)]
pub enum MetricaError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// File not found.
    ///
    /// Returned for a missing input list, dictionary file, or (in strict
    /// mode) a missing article artifact.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed tabular input or output.
    ///
    /// Wraps CSV and JSON (de)serialization failures.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record whose id cannot be used as an artifact name.
    #[error("Invalid record {id:?}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Pipeline configuration errors.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<csv::Error> for MetricaError {
    fn from(err: csv::Error) -> Self {
        MetricaError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for MetricaError {
    fn from(err: serde_json::Error) -> Self {
        MetricaError::InvalidInput(err.to_string())
    }
}

/// Result type alias for MetricaError.
pub type Result<T> = std::result::Result<T, MetricaError>;
