//! Heuristic syllable counting.

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Counts the syllables of a word by counting vowel groups.
///
/// Words ending in `es` or `ed` count as zero. Otherwise every vowel that
/// starts a group of vowels adds one, a trailing `e` takes one away, and the
/// result is at least one. Only `a e i o u` are vowels.
///
/// ```rust
/// use metrica_core::syllable_count;
///
/// assert_eq!(syllable_count("beautiful"), 3);
/// assert_eq!(syllable_count("apple"), 1);
/// assert_eq!(syllable_count("bed"), 0);
/// ```
pub fn syllable_count(word: &str) -> usize {
    let word = word.to_lowercase();
    let word = word.trim_matches(['.', ':', ';', '?', '!']);

    if word.ends_with("es") || word.ends_with("ed") {
        return 0;
    }

    let mut count = 0usize;
    let mut previous: Option<char> = None;
    for c in word.chars() {
        if is_vowel(c) && !previous.is_some_and(is_vowel) {
            count += 1;
        }
        previous = Some(c);
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}
