//! Cosine similarity between embedding vectors, folded into `[0, 1]`.

/// Cosine of the angle between two embeddings, accumulated in `f64`.
///
/// Merge thresholds live in `(0, 1]`, so opposing vectors clamp to 0.0
/// rather than going negative. Mismatched lengths, empty input and
/// zero-magnitude vectors (texts with no known terms) score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );
    let denom = (norm_a * norm_b).sqrt();
    if denom < f64::EPSILON {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}
