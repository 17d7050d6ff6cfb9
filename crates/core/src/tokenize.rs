//! Sentence and word tokenization.
//!
//! Sentences are split on terminal punctuation followed by whitespace, with
//! abbreviations and initials exempt. Words follow Penn Treebank
//! conventions within each sentence: punctuation and quotes become their own
//! tokens, clitics are split off (`don't` -> `do` `n't`), and only the
//! sentence-final period is detached, so `Mr.` stays one token.

/// Words that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf", "inc", "ltd", "co",
    "corp", "dept", "govt", "no", "fig", "approx", "est", "gen", "col", "lt", "sgt", "capt", "rev", "jan", "feb",
    "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "a.m", "p.m",
];

/// Characters that always form a token of their own.
const SEPARATORS: &[char] = &[
    ';', '@', '#', '$', '%', '&', '?', '!', '*', '(', ')', '[', ']', '{', '}', '<', '>', '"', '“', '”', '‘', '’',
    '«', '»', '„',
];

/// Contractions detached from the end of a word.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '>' | '’' | '”' | '»')
}

/// Splits `text` into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut run_end = i;
        while run_end + 1 < chars.len() && is_terminator(chars[run_end + 1].1) {
            run_end += 1;
        }
        let mut end = run_end;
        while end + 1 < chars.len() && is_closing(chars[end + 1].1) {
            end += 1;
        }

        let next = end + 1;
        let followed_by_space = next == chars.len() || chars[next].1.is_whitespace();
        let single_period = run_start == run_end && chars[run_start].1 == '.';

        if followed_by_space && !(single_period && ends_with_abbreviation(&text[start..chars[run_start].0])) {
            let byte_end = chars[end].0 + chars[end].1.len_utf8();
            push_trimmed(&mut out, &text[start..byte_end]);
            start = byte_end;
        }

        i = next;
    }

    push_trimmed(&mut out, &text[start..]);
    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        out.push(sentence);
    }
}

/// Whether the word right before a period is an abbreviation or an initial.
fn ends_with_abbreviation(before_period: &str) -> bool {
    let Some(word) = before_period.split_whitespace().last() else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();

    let mut chars = word.chars();
    let is_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

    is_initial || ABBREVIATIONS.contains(&word.as_str())
}

/// Tokenizes `text` into words and punctuation, sentence by sentence.
pub fn word_tokens(text: &str) -> Vec<&str> {
    sentences(text).into_iter().flat_map(sentence_tokens).collect()
}

fn sentence_tokens(sentence: &str) -> Vec<&str> {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let mut tokens = Vec::new();

    for (index, chunk) in chunks.iter().enumerate() {
        let pieces = if index + 1 == chunks.len() { split_final_period(chunk) } else { vec![*chunk] };

        for piece in pieces {
            for part in split_punctuation(piece) {
                split_clitics(part, &mut tokens);
            }
        }
    }

    tokens
}

/// Detaches the period ending a sentence, keeping any closing quotes or
/// brackets after it. Ellipses are left alone.
fn split_final_period(chunk: &str) -> Vec<&str> {
    let core = chunk.trim_end_matches(is_closing);
    let Some(head) = core.strip_suffix('.') else {
        return vec![chunk];
    };
    if head.is_empty() || head.ends_with('.') {
        return vec![chunk];
    }

    let mut pieces = vec![head, &chunk[head.len()..core.len()]];
    if core.len() < chunk.len() {
        pieces.push(&chunk[core.len()..]);
    }
    pieces
}

/// Splits separators, non-numeric `:` and `,`, and runs of `--` or `..`.
fn split_punctuation(piece: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = piece.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let stands_alone =
            SEPARATORS.contains(&c) || (matches!(c, ':' | ',') && !next.is_some_and(|n| n.is_ascii_digit()));

        let run = if stands_alone {
            1
        } else if matches!(c, '-' | '.') && next == Some(c) {
            chars[i..].iter().take_while(|&&(_, r)| r == c).count()
        } else {
            0
        };

        if run == 0 {
            i += 1;
            continue;
        }

        if start < pos {
            parts.push(&piece[start..pos]);
        }
        let end = chars.get(i + run).map_or(piece.len(), |&(p, _)| p);
        parts.push(&piece[pos..end]);
        start = end;
        i += run;
    }

    if start < piece.len() {
        parts.push(&piece[start..]);
    }
    parts
}

/// Pushes `part` with a leading quote and trailing clitic split off.
fn split_clitics<'a>(part: &'a str, tokens: &mut Vec<&'a str>) {
    let mut word = part;

    if let Some(rest) = word.strip_prefix('\'') {
        let lower = rest.to_lowercase();
        let looks_like_clitic = ["re", "ve", "ll", "m", "t", "s", "d", "n"].iter().any(|c| lower.starts_with(c));
        if !rest.is_empty() && !looks_like_clitic {
            tokens.push(&word[..1]);
            word = rest;
        }
    }

    let clitic_len = CLITICS
        .iter()
        .find(|c| ends_with_ignore_ascii_case(word, c))
        .map(|c| c.len())
        .or_else(|| (word.len() > 1 && word.ends_with('\'')).then_some(1));

    match clitic_len {
        Some(len) => {
            let (head, tail) = word.split_at(word.len() - len);
            tokens.push(head);
            tokens.push(tail);
        }
        None => tokens.push(word),
    }
}

fn ends_with_ignore_ascii_case(word: &str, suffix: &str) -> bool {
    word.len() > suffix.len()
        && word.is_char_boundary(word.len() - suffix.len())
        && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// A token made only of letters.
///
/// Letter-like numerals such as `Ⅷ` carry the Unicode Alphabetic property
/// but are not letters, so numeric characters are rejected. Combining marks
/// with the Alphabetic property are still accepted.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphabetic() && !c.is_numeric())
}
