// News pipeline: per-source normalization, then merge and sort

pub mod merge;
pub mod normalize;

pub use merge::{build_combined, merge_sources};
pub use normalize::{normalize_all, NormalizationRegistry, SourceNormalizer};
