use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{info, instrument};

use super::RunSummary;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::pipeline::merge::build_combined;
use crate::pipeline::normalize::{collect_raw_items, normalize_all, NormalizationRegistry};
use crate::storage;
use crate::types::{CombinedFeed, FeedSource, NormalizedItem};

/// Builds the combined "Aktuelt" news feed from every registered source.
pub struct AktueltUseCase<'a> {
    config: &'a FeedConfig,
    registry: NormalizationRegistry,
}

impl<'a> AktueltUseCase<'a> {
    pub fn new(config: &'a FeedConfig, registry: NormalizationRegistry) -> Self {
        Self { config, registry }
    }

    /// Use case with the built-in sources
    pub fn with_default_registry(config: &'a FeedConfig) -> Self {
        Self::new(config, NormalizationRegistry::new())
    }

    fn input_path(&self, source: FeedSource) -> &Path {
        match source {
            FeedSource::FauskeKommune => &self.config.kommune_news,
            FeedSource::Fauskenf => &self.config.fauskenf_news,
        }
    }

    /// Load and normalize one source. A missing file contributes nothing.
    fn load_source(&self, source: FeedSource) -> Result<Vec<NormalizedItem>> {
        let Some(normalizer) = self.registry.get_normalizer(source) else {
            return Ok(Vec::new());
        };

        let path = self.input_path(source);
        let raw_items = match storage::read_optional_feed(path)? {
            Some(feed) => collect_raw_items(source, feed.items),
            None => Vec::new(),
        };

        let items = normalize_all(normalizer, &raw_items);
        info!(source = %source, path = %path.display(), raw = raw_items.len(), normalized = items.len(), "Loaded source");
        Ok(items)
    }

    /// Read and normalize all sources, then merge. Nothing is written.
    pub fn combine(&self, now: DateTime<Utc>) -> Result<CombinedFeed> {
        let batches = self
            .registry
            .list_sources()
            .into_iter()
            .map(|source| self.load_source(source))
            .collect::<Result<Vec<_>>>()?;

        Ok(build_combined(batches, now))
    }

    /// Combine and overwrite the configured output file.
    #[instrument(skip_all, fields(output = %self.config.aktuelt_output.display()))]
    pub fn run(&self, now: DateTime<Utc>) -> Result<RunSummary> {
        // Every input is read before the output is touched
        let feed = self.combine(now)?;
        storage::write_json_pretty(&self.config.aktuelt_output, &feed)?;

        info!(items = feed.items.len(), "Wrote combined feed");
        Ok(RunSummary {
            noun: "items",
            written: feed.items.len(),
            output: self.config.aktuelt_output.clone(),
        })
    }
}

/// Build `aktuelt_combined.json` with the built-in sources, stamped now.
pub fn build_aktuelt_combined(config: &FeedConfig) -> Result<RunSummary> {
    AktueltUseCase::with_default_registry(config).run(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::normalize::normalizers::FauskenfNormalizer;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_registry_limits_sources_read() {
        let dir = tempdir().unwrap();
        let config = FeedConfig::with_data_dir(dir.path());
        fs::write(
            &config.kommune_news,
            json!({ "items": [{ "title": "K", "url": "https://s/k" }] }).to_string(),
        )
        .unwrap();
        fs::write(
            &config.fauskenf_news,
            json!({ "items": [{ "id": "nf-1", "title": "N" }] }).to_string(),
        )
        .unwrap();

        let mut registry = NormalizationRegistry::empty();
        registry.register(Box::new(FauskenfNormalizer::new()));

        let feed = AktueltUseCase::new(&config, registry).combine(Utc::now()).unwrap();
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].id, "nf-1");
    }

    #[test]
    fn test_summary_line() {
        let dir = tempdir().unwrap();
        let config = FeedConfig::with_data_dir(dir.path());
        let summary = AktueltUseCase::with_default_registry(&config).run(Utc::now()).unwrap();
        assert_eq!(summary.written, 0);
        assert_eq!(
            summary.to_string(),
            format!("Wrote 0 items to {}", config.aktuelt_output.display())
        );
    }
}
