//! Jaccard index over character n-gram shingle sets.

use std::collections::HashSet;

/// Distinct character n-grams of `text`, after collapsing whitespace runs to a
/// single space. A text shorter than `n` characters has no shingles.
pub fn shingles(text: &str, n: usize) -> HashSet<String> {
    let chars = collapse_whitespace(text);
    if n == 0 || chars.len() < n {
        return HashSet::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Jaccard similarity of the `n`-gram shingle sets of `a` and `b`.
///
/// Identical strings score 1.0. A string too short to produce a shingle
/// scores 0.0 against any different string.
pub fn jaccard_similarity(a: &str, b: &str, n: usize) -> f64 {
    if a == b {
        return 1.0;
    }
    let sa = shingles(a, n);
    let sb = shingles(b, n);
    if sa.is_empty() || sb.is_empty() {
        return 0.0;
    }
    let inter = sa.intersection(&sb).count();
    let union = sa.len() + sb.len() - inter;
    inter as f64 / union as f64
}

fn collapse_whitespace(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
