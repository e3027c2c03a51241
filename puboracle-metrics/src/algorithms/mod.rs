//! String and vector similarity algorithms: n-gram Jaccard, Ratcliff/Obershelp, cosine.

pub mod cosine;
pub mod jaccard;
pub mod sequence_matcher;

pub use cosine::cosine_similarity;
pub use jaccard::{jaccard_similarity, shingles};
pub use sequence_matcher::{quick_ratio, ratio};
