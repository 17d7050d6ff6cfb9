//! Sentiment and readability metrics for a single article.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::lexicon::LexiconSet;
use crate::syllable::syllable_count;
use crate::tokenize::{is_alphabetic, sentences, word_tokens};

/// Added to denominators that may be zero in the sentiment ratios.
pub const EPSILON: f64 = 0.000001;

static PERSONAL_PRONOUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:I|we|my|ours|us)\b").expect("valid pronoun pattern"));

/// Metric values computed from one article's text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArticleMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// Lower-cased alphabetic tokens of `text` that are not stop words.
pub fn kept_words(text: &str, lexicon: &LexiconSet) -> Vec<String> {
    word_tokens(text)
        .into_iter()
        .filter(|token| is_alphabetic(token))
        .map(str::to_lowercase)
        .filter(|word| !lexicon.is_stopword(word))
        .collect()
}

/// Case-insensitive whole-word matches of `I`, `we`, `my`, `ours` and `us`.
pub fn personal_pronoun_count(text: &str) -> usize {
    PERSONAL_PRONOUNS.find_iter(text).count()
}

/// `numerator / denominator`, or `0.0` when there is nothing to divide by.
fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 { 0.0 } else { numerator / denominator as f64 }
}

impl ArticleMetrics {
    /// Computes every metric for the raw artifact text.
    ///
    /// Ratios over an empty word or sentence list are reported as `0.0`.
    /// Pronouns are counted on the raw text since stop-word filtering would
    /// remove them.
    pub fn compute(text: &str, lexicon: &LexiconSet) -> Self {
        let words = kept_words(text, lexicon);
        let sentence_count = sentences(text).len();
        let word_count = words.len();

        let positive_score = words.iter().filter(|w| lexicon.is_positive(w)).count();
        let negative_score = words.iter().filter(|w| lexicon.is_negative(w)).count();
        let polarity_score =
            (positive_score as f64 - negative_score as f64) / ((positive_score + negative_score) as f64 + EPSILON);
        let subjectivity_score = (positive_score + negative_score) as f64 / (word_count as f64 + EPSILON);

        let syllables: Vec<usize> = words.iter().map(|w| syllable_count(w)).collect();
        let complex_word_count = syllables.iter().filter(|&&s| s > 2).count();
        let total_syllables: usize = syllables.iter().sum();
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        let avg_sentence_length = ratio(word_count as f64, sentence_count);
        let percentage_complex_words = ratio(complex_word_count as f64, word_count);

        Self {
            positive_score,
            negative_score,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index: 0.4 * (avg_sentence_length + percentage_complex_words),
            avg_words_per_sentence: avg_sentence_length,
            complex_word_count,
            word_count,
            syllable_per_word: ratio(total_syllables as f64, word_count),
            personal_pronouns: personal_pronoun_count(text),
            avg_word_length: ratio(total_chars as f64, word_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "Hello  World\nThis is good. This is bad news.";

    fn lexicon() -> LexiconSet {
        LexiconSet::from_words(&["good", "great"], &["bad"], &[])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn test_compute_reference_article() {
        let m = ArticleMetrics::compute(ARTICLE, &lexicon());

        assert_eq!(m.word_count, 9);
        assert_eq!(m.positive_score, 1);
        assert_eq!(m.negative_score, 1);
        assert_close(m.polarity_score, 0.0);
        assert_close(m.subjectivity_score, 2.0 / (9.0 + EPSILON));
        assert_close(m.avg_sentence_length, 4.5);
        assert_close(m.avg_words_per_sentence, 4.5);
        assert_eq!(m.complex_word_count, 0);
        assert_close(m.percentage_complex_words, 0.0);
        assert_close(m.fog_index, 1.8);
        assert_close(m.syllable_per_word, 10.0 / 9.0);
        assert_eq!(m.personal_pronouns, 0);
        assert_close(m.avg_word_length, 33.0 / 9.0);
    }

    #[test]
    fn test_stopwords_are_excluded() {
        let lexicon = LexiconSet::from_words(&["good"], &["bad"], &["this", "is", "IS"]);
        let words = kept_words(ARTICLE, &lexicon);

        assert_eq!(words, vec!["hello", "world", "good", "bad", "news"]);
    }

    #[test]
    fn test_uppercase_stopwords_do_not_match_lowercased_tokens() {
        let lexicon = LexiconSet::from_words(&[], &[], &["THIS", "IS"]);
        assert_eq!(kept_words(ARTICLE, &lexicon).len(), 9);
    }

    #[test]
    fn test_non_alphabetic_tokens_are_dropped() {
        let words = kept_words("We can't sell 3 well-known items for $5, Mr. Smith.", &LexiconSet::default());
        assert_eq!(words, vec!["we", "ca", "sell", "items", "for", "smith"]);
    }

    #[test]
    fn test_complex_words() {
        let m = ArticleMetrics::compute("Beautiful education matters.", &LexiconSet::default());

        assert_eq!(m.word_count, 3);
        assert_eq!(m.complex_word_count, 2);
        assert_close(m.percentage_complex_words, 2.0 / 3.0);
        assert_close(m.fog_index, 0.4 * (3.0 + 2.0 / 3.0));
        assert_close(m.syllable_per_word, 9.0 / 3.0);
    }

    #[test]
    fn test_personal_pronouns_use_raw_text() {
        assert_eq!(personal_pronoun_count("I think we, my friends and US, own ours. Using myself."), 5);
        assert_eq!(personal_pronoun_count("Iowa wears mystery"), 0);

        let lexicon = LexiconSet::from_words(&[], &[], &["i", "we", "my"]);
        let m = ArticleMetrics::compute("I said we like my car.", &lexicon);
        assert_eq!(m.personal_pronouns, 3);
        assert_eq!(m.word_count, 3);
    }

    #[test]
    fn test_empty_text_reports_zero_ratios() {
        let m = ArticleMetrics::compute("", &lexicon());

        assert_eq!(m.word_count, 0);
        assert_close(m.avg_sentence_length, 0.0);
        assert_close(m.percentage_complex_words, 0.0);
        assert_close(m.syllable_per_word, 0.0);
        assert_close(m.avg_word_length, 0.0);
        assert_close(m.polarity_score, 0.0);
        assert_close(m.subjectivity_score, 0.0);
    }

    #[test]
    fn test_sentences_without_words() {
        let m = ArticleMetrics::compute("123. 456!", &lexicon());

        assert_eq!(m.word_count, 0);
        assert_close(m.avg_sentence_length, 0.0);
        assert_close(m.fog_index, 0.0);
    }

    #[test]
    fn test_score_bounds() {
        let lexicon = LexiconSet::from_words(&["good", "great", "fine"], &["bad"], &[]);
        let texts = [
            "good good great fine.",
            "bad bad bad.",
            "good bad news today.",
            "nothing to see here.",
        ];

        for text in texts {
            let m = ArticleMetrics::compute(text, &lexicon);
            assert!((-1.0..=1.0).contains(&m.polarity_score), "{}", text);
            assert!((0.0..=1.0).contains(&m.subjectivity_score), "{}", text);
            assert_eq!(m.avg_sentence_length, m.avg_words_per_sentence);
        }
    }
}
