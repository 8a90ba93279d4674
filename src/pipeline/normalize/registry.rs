use super::normalizers::{FauskeKommuneNormalizer, FauskenfNormalizer};
use super::SourceNormalizer;
use crate::types::FeedSource;

/// Source normalizers in merge-priority order.
///
/// Order matters: items are concatenated in registration order before the
/// stable date sort, so it decides ties between same-day items.
pub struct NormalizationRegistry {
    normalizers: Vec<Box<dyn SourceNormalizer>>,
}

impl NormalizationRegistry {
    /// Registry with the built-in news sources: kommune first, then næringsforum.
    pub fn new() -> Self {
        Self {
            normalizers: vec![
                Box::new(FauskeKommuneNormalizer::new()),
                Box::new(FauskenfNormalizer::new()),
            ],
        }
    }

    /// Empty registry, for callers that want to choose their own sources.
    pub fn empty() -> Self {
        Self { normalizers: Vec::new() }
    }

    /// Register a normalizer, replacing any existing one for the same source
    /// in place so priority is preserved.
    pub fn register(&mut self, normalizer: Box<dyn SourceNormalizer>) {
        let source = normalizer.source();
        match self.normalizers.iter().position(|n| n.source() == source) {
            Some(idx) => self.normalizers[idx] = normalizer,
            None => self.normalizers.push(normalizer),
        }
    }

    pub fn get_normalizer(&self, source: FeedSource) -> Option<&dyn SourceNormalizer> {
        self.normalizers
            .iter()
            .find(|n| n.source() == source)
            .map(|n| n.as_ref())
    }

    /// Normalizers in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SourceNormalizer> {
        self.normalizers.iter().map(|n| n.as_ref())
    }

    pub fn list_sources(&self) -> Vec<FeedSource> {
        self.normalizers.iter().map(|n| n.source()).collect()
    }
}

impl Default for NormalizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
