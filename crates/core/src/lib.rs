//! Article extraction and text metrics.
//!
//! `metrica-core` fetches the articles listed in an input CSV, reduces each
//! page to its title and paragraph text, and scores the saved text for
//! sentiment and readability against a positive/negative word dictionary
//! and a set of stop-word lists.
//!
//! # Example
//!
//! ```rust
//! use metrica_core::{ArticleMetrics, LexiconSet};
//!
//! let lexicon = LexiconSet::from_words(&["good"], &["bad"], &[]);
//! let metrics = ArticleMetrics::compute("Hello World\nThis is good. This is bad news.", &lexicon);
//!
//! assert_eq!(metrics.word_count, 9);
//! assert_eq!(metrics.positive_score, 1);
//! assert_eq!(metrics.negative_score, 1);
//! ```

pub mod analyze;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod lexicon;
pub mod metrics;
pub mod parse;
pub mod pipeline;
pub mod records;
pub mod syllable;
pub mod tokenize;

pub use analyze::{AnalysisReport, AnalyzeConfig, Analyzer, COLUMNS, MetricRow, MissingArtifact};
pub use error::{MetricaError, Result};
pub use extract::{ExtractOutcome, ExtractReport, ExtractedArticle, Extractor};
pub use fetch::{FetchConfig, fetch_url};
pub use formatters::{JsonConfig, OutputFormat, save_report, write_report};
pub use lexicon::{LexiconConfig, LexiconSet};
pub use metrics::ArticleMetrics;
pub use parse::Document;
pub use pipeline::{Pipeline, PipelineConfig, PipelineConfigBuilder, PipelineSummary};
pub use records::{InputRecord, load_records};
pub use syllable::syllable_count;
