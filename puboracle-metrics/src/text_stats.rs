//! Character and word counts for titles and abstracts.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+").ok());

/// Number of `\w+` runs in `text`.
pub fn count_words(text: &str) -> usize {
    WORD.as_ref()
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0)
}

/// Characters in `text` after trimming trailing whitespace and deleting every
/// occurrence of the strings in `to_remove`.
pub fn count_chars_no_white(text: &str, to_remove: &[&str]) -> usize {
    let mut text = text.trim_end().to_string();
    for pattern in to_remove.iter().filter(|p| !p.is_empty()) {
        text = text.replace(*pattern, "");
    }
    text.chars().count()
}

/// Character and word counts for every text, index-aligned with `texts`.
pub fn chars_and_words<S: AsRef<str>>(texts: &[S], to_remove: &[&str]) -> (Vec<usize>, Vec<usize>) {
    texts
        .iter()
        .map(|t| {
            let t = t.as_ref();
            (count_chars_no_white(t, to_remove), count_words(t))
        })
        .unzip()
}

/// Keep the text before the first occurrence of each trim character, applied
/// in order. Whitespace left before a trim character is kept.
pub fn trim_txt(text: &str, trim_chars: &[char]) -> String {
    let mut out = text;
    for &c in trim_chars {
        out = out.split(c).next().unwrap_or(out);
    }
    out.to_string()
}
