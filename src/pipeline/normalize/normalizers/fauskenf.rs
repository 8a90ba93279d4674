use super::super::{NormalizerUtils, SourceNormalizer};
use crate::idempotency;
use crate::types::{FeedSource, NormalizedItem, RawItem};

/// Normalizer for Fauske Næringsforum news (`fauskenf_nyheter.json`).
///
/// Cards carry a scraper-assigned `id`, a compact `date` (`17.11.2025`),
/// `title`, `ingress`, `category`, `image`, `url`, and optionally the
/// fetched `articleBody`.
pub struct FauskenfNormalizer;

impl FauskenfNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Keeps the scraper's own id when present; otherwise rebuilds it the
    /// same way the scraper does (`fauskenf-{date}-{slug}`).
    fn derive_id(raw: &RawItem) -> String {
        let source = FeedSource::Fauskenf.id();
        if let Some(id) = raw.id_field("id") {
            return id;
        }

        let key = match (raw.str_field("url").and_then(idempotency::last_segment), raw.str_field("date")) {
            (Some(slug), Some(date)) => Some(format!("{}-{}", date, slug)),
            (Some(slug), None) => Some(slug.to_string()),
            (None, _) => raw
                .str_field("title")
                .map(idempotency::generate_slug)
                .filter(|slug| !slug.is_empty()),
        };

        let key = key.unwrap_or_else(|| idempotency::content_hash(raw));
        idempotency::namespaced_id(source, &key)
    }
}

impl Default for FauskenfNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceNormalizer for FauskenfNormalizer {
    fn normalize(&self, raw: &RawItem) -> NormalizedItem {
        let source = self.source();
        let base = source.base_url();

        let date_keys = ["date", "published"];
        let published = NormalizerUtils::date_field(raw, &date_keys);

        // The listing ingress is often empty; the article text is the next best summary
        let body = raw.first_str(&["articleBody", "body"]).map(str::to_string);
        let ingress = NormalizerUtils::owned(raw, "ingress")
            .or_else(|| body.as_deref().and_then(NormalizerUtils::first_paragraph));

        NormalizedItem {
            id: Self::derive_id(raw),
            source,
            source_name: source.display_name().to_string(),
            title: NormalizerUtils::owned(raw, "title"),
            url: NormalizerUtils::url_field(raw, &["url"], base),
            image: NormalizerUtils::url_field(raw, &["image", "imageUrl"], base),
            published,
            published_text: NormalizerUtils::published_text(raw, &["publishedText"], &date_keys, published),
            ingress,
            body,
            category: NormalizerUtils::owned(raw, "category"),
            raw: raw.clone(),
        }
    }

    fn source(&self) -> FeedSource {
        FeedSource::Fauskenf
    }

    fn name(&self) -> &str {
        "Fauske Næringsforum News Normalizer"
    }
}
