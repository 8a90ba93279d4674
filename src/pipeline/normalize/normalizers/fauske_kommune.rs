use super::super::{NormalizerUtils, SourceNormalizer};
use crate::idempotency;
use crate::types::{FeedSource, NormalizedItem, RawItem};

/// Normalizer for the Fauske kommune front-page news cards (`nyheter.json`).
///
/// Raw records carry `title`, `url`, `imageUrl`, `published` (ISO),
/// `publishedText` (`13. november 2025`), `ingress`, `body` and `bodyHtml`.
pub struct FauskeKommuneNormalizer;

impl FauskeKommuneNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// `fauske_kommune-<last url segment>`, falling back to the title, then
    /// to a hash of the whole record.
    fn derive_id(raw: &RawItem) -> String {
        let source = FeedSource::FauskeKommune.id();
        ["url", "title"]
            .iter()
            .filter_map(|key| raw.str_field(key))
            .find_map(idempotency::last_segment)
            .map(|segment| idempotency::namespaced_id(source, segment))
            .unwrap_or_else(|| idempotency::namespaced_id(source, &idempotency::content_hash(raw)))
    }
}

impl Default for FauskeKommuneNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceNormalizer for FauskeKommuneNormalizer {
    fn normalize(&self, raw: &RawItem) -> NormalizedItem {
        let source = self.source();
        let base = source.base_url();

        let published = NormalizerUtils::date_field(raw, &["published", "publishedText"]);
        let body = NormalizerUtils::owned(raw, "body");
        let ingress = NormalizerUtils::owned(raw, "ingress")
            .or_else(|| body.as_deref().and_then(NormalizerUtils::first_paragraph));

        NormalizedItem {
            id: Self::derive_id(raw),
            source,
            source_name: source.display_name().to_string(),
            title: NormalizerUtils::owned(raw, "title"),
            url: NormalizerUtils::url_field(raw, &["url"], base),
            image: NormalizerUtils::url_field(raw, &["imageUrl", "image"], base),
            published,
            published_text: NormalizerUtils::published_text(raw, &["publishedText"], &["published"], published),
            ingress,
            body,
            category: NormalizerUtils::owned(raw, "category"),
            raw: raw.clone(),
        }
    }

    fn source(&self) -> FeedSource {
        FeedSource::FauskeKommune
    }

    fn name(&self) -> &str {
        "Fauske kommune News Normalizer"
    }
}
