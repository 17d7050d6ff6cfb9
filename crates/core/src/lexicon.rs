//! Sentiment word lists and stop words.
//!
//! A [`LexiconSet`] is loaded once per run from the master dictionary
//! (positive and negative word lists) and the stop-word category files, then
//! borrowed read-only by every metric computation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::fetch::read_file_bytes;

/// Stop-word category files merged into one set.
pub const STOPWORD_FILES: [&str; 7] = [
    "StopWords_Auditor.txt",
    "StopWords_Currencies.txt",
    "StopWords_DatesandNumbers.txt",
    "StopWords_Generic.txt",
    "StopWords_GenericLong.txt",
    "StopWords_Geographic.txt",
    "StopWords_Names.txt",
];

/// Where the dictionaries live and how to read them.
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Directory holding the positive and negative word lists.
    pub dictionary_dir: PathBuf,
    pub positive_file: String,
    pub negative_file: String,
    /// Directory holding the stop-word category files.
    pub stopwords_dir: PathBuf,
    pub stopword_files: Vec<String>,
    /// Lower-case stop-word entries on load.
    ///
    /// Tokens are always lower-cased before the lookup, so with the default
    /// (`false`) upper-case entries never match.
    pub fold_case: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            dictionary_dir: PathBuf::from("MasterDictionary"),
            positive_file: "positive-words.txt".to_string(),
            negative_file: "negative-words.txt".to_string(),
            stopwords_dir: PathBuf::from("StopWords"),
            stopword_files: STOPWORD_FILES.iter().map(|s| s.to_string()).collect(),
            fold_case: false,
        }
    }
}

/// Immutable positive, negative and stop-word sets.
#[derive(Debug, Clone, Default)]
pub struct LexiconSet {
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
    pub stopwords: HashSet<String>,
}

impl LexiconSet {
    /// Loads every dictionary file named by `config`.
    ///
    /// Any missing file is an error; the run cannot proceed without the
    /// complete lexicon.
    pub fn load(config: &LexiconConfig) -> Result<Self> {
        let positive = load_word_list(&config.dictionary_dir.join(&config.positive_file))?;
        let negative = load_word_list(&config.dictionary_dir.join(&config.negative_file))?;

        let mut stopwords = HashSet::new();
        for name in &config.stopword_files {
            let path = config.stopwords_dir.join(name);
            let text = decode_latin1(&read_file_bytes(&path)?);
            let before = stopwords.len();
            stopwords.extend(text.lines().map(|line| {
                if config.fold_case { line.to_lowercase() } else { line.to_string() }
            }));
            tracing::debug!(file = %path.display(), added = stopwords.len() - before, "Loaded stop words");
        }

        tracing::info!(
            positive = positive.len(),
            negative = negative.len(),
            stopwords = stopwords.len(),
            "Lexicon loaded"
        );

        Ok(Self { positive, negative, stopwords })
    }

    /// Builds a lexicon from in-memory word lists.
    pub fn from_words(positive: &[&str], negative: &[&str], stopwords: &[&str]) -> Self {
        let to_set = |words: &[&str]| -> HashSet<String> { words.iter().map(|w| w.to_string()).collect() };
        Self { positive: to_set(positive), negative: to_set(negative), stopwords: to_set(stopwords) }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

/// Reads a one-word-per-line list, UTF-8 with a Latin-1 fallback.
fn load_word_list(path: &Path) -> Result<HashSet<String>> {
    let bytes = read_file_bytes(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => decode_latin1(e.as_bytes()),
    };
    Ok(text.lines().map(str::to_string).collect())
}

/// Latin-1 maps every byte to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetricaError;
    use std::fs;

    fn write_lexicon(root: &Path) -> LexiconConfig {
        let dictionary_dir = root.join("MasterDictionary");
        let stopwords_dir = root.join("StopWords");
        fs::create_dir_all(&dictionary_dir).unwrap();
        fs::create_dir_all(&stopwords_dir).unwrap();

        fs::write(dictionary_dir.join("positive-words.txt"), "good\ngreat\ngood\n").unwrap();
        fs::write(dictionary_dir.join("negative-words.txt"), "bad\r\nworse\r\n").unwrap();
        for (i, name) in STOPWORD_FILES.iter().enumerate() {
            fs::write(stopwords_dir.join(name), format!("WORD{}\nshared\n", i)).unwrap();
        }
        fs::write(stopwords_dir.join("StopWords_Currencies.txt"), b"EURO | Europe\nCAF\xc9\n").unwrap();

        LexiconConfig { dictionary_dir, stopwords_dir, ..Default::default() }
    }

    #[test]
    fn test_default_config() {
        let config = LexiconConfig::default();
        assert_eq!(config.dictionary_dir, PathBuf::from("MasterDictionary"));
        assert_eq!(config.stopword_files.len(), 7);
        assert!(!config.fold_case);
    }

    #[test]
    fn test_load_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_lexicon(dir.path());

        let lexicon = LexiconSet::load(&config).unwrap();

        assert_eq!(lexicon.positive.len(), 2);
        assert!(lexicon.is_positive("good"));
        assert!(lexicon.is_negative("bad"));
        assert!(lexicon.is_negative("worse"));
        assert!(lexicon.is_stopword("shared"));
        assert!(lexicon.is_stopword("WORD0"));
        assert!(lexicon.is_stopword("CAFÉ"));
        assert!(lexicon.is_stopword("EURO | Europe"));
        assert!(!lexicon.is_stopword("word0"));
    }

    #[test]
    fn test_fold_case() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexiconConfig { fold_case: true, ..write_lexicon(dir.path()) };

        let lexicon = LexiconSet::load(&config).unwrap();

        assert!(lexicon.is_stopword("word0"));
        assert!(lexicon.is_stopword("café"));
        assert!(!lexicon.is_stopword("WORD0"));
    }

    #[test]
    fn test_missing_stopword_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_lexicon(dir.path());
        fs::remove_file(config.stopwords_dir.join("StopWords_Names.txt")).unwrap();

        let result = LexiconSet::load(&config);
        assert!(matches!(result, Err(MetricaError::FileNotFound(p)) if p.ends_with("StopWords_Names.txt")));
    }

    #[test]
    fn test_word_list_latin1_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positive-words.txt");
        fs::write(&path, b"na\xefve\nkind\n").unwrap();

        let words = load_word_list(&path).unwrap();
        assert!(words.contains("naïve"));
        assert!(words.contains("kind"));
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode_latin1(b"caf\xe9"), "café");
        assert_eq!(decode_latin1(b""), "");
    }
}
