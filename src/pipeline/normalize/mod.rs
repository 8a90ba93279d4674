use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::dates;
use crate::idempotency;
use crate::types::{FeedSource, NormalizedItem, RawItem};

pub mod normalizers;
pub mod registry;

pub use registry::NormalizationRegistry;

/// Converts one source's raw records into the common item shape.
///
/// `normalize` never fails: every field is resolved independently and a
/// field that cannot be read becomes `None`.
pub trait SourceNormalizer: Send + Sync {
    fn normalize(&self, raw: &RawItem) -> NormalizedItem;

    /// The source this normalizer handles
    fn source(&self) -> FeedSource;

    /// Human-readable name for logs
    fn name(&self) -> &str;
}

/// Normalize a whole batch, keeping input order.
///
/// A record whose id was already produced earlier in the batch gets a
/// content-hash suffix. Only a record identical to an earlier one is dropped.
pub fn normalize_all(normalizer: &dyn SourceNormalizer, raw_items: &[RawItem]) -> Vec<NormalizedItem> {
    let mut seen_ids = HashSet::with_capacity(raw_items.len());
    let mut seen_content = HashSet::with_capacity(raw_items.len());
    let mut out = Vec::with_capacity(raw_items.len());

    for raw in raw_items {
        let hash = idempotency::content_hash(raw);
        if !seen_content.insert(hash.clone()) {
            warn!(source = %normalizer.source(), hash = %hash, "Dropping repeated identical record");
            continue;
        }

        let mut item = normalizer.normalize(raw);
        if item.published.is_none() && item.published_text.is_some() {
            debug!(id = %item.id, text = ?item.published_text, "Date not parseable, keeping text only");
        }
        if seen_ids.contains(&item.id) {
            let unique = format!("{}-{}", item.id, hash);
            warn!(source = %normalizer.source(), id = %item.id, new_id = %unique, "Duplicate id, disambiguating");
            item.id = unique;
        }
        seen_ids.insert(item.id.clone());
        out.push(item);
    }

    debug!(normalizer = normalizer.name(), count = out.len(), "Normalized batch");
    out
}

/// Object entries of a raw feed's `items` array; other entries are skipped.
pub fn collect_raw_items(source: FeedSource, entries: Vec<Value>) -> Vec<RawItem> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let item = RawItem::from_value(value);
            if item.is_none() {
                warn!(source = %source, index = idx, "Skipping non-object entry in items");
            }
            item
        })
        .collect()
}

/// Shared field helpers for normalizers
pub struct NormalizerUtils;

impl NormalizerUtils {
    /// Resolve `href` against a site root the way the scrapers do.
    pub fn absolute_url(base: &str, href: &str) -> String {
        let href = href.trim();
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if let Some(rest) = href.strip_prefix("//") {
            format!("https://{}", rest)
        } else if href.starts_with('/') {
            format!("{}{}", base, href)
        } else {
            format!("{}/{}", base, href)
        }
    }

    /// First string among `keys`, made absolute against `base`.
    pub fn url_field(raw: &RawItem, keys: &[&str], base: &str) -> Option<String> {
        raw.first_str(keys).map(|href| Self::absolute_url(base, href))
    }

    /// First non-empty paragraph of a longer text, used when a source has
    /// article text but no separate summary.
    pub fn first_paragraph(text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
    }

    /// First date that parses among `keys`.
    pub fn date_field(raw: &RawItem, keys: &[&str]) -> Option<NaiveDate> {
        keys.iter().find_map(|k| dates::normalize_opt(raw.str_field(k)))
    }

    /// Display text for the date: the source's own human-readable text if it
    /// has one, else the long form of the parsed date, else the raw date
    /// value verbatim so an unparseable date is never lost.
    pub fn published_text(
        raw: &RawItem,
        text_keys: &[&str],
        date_keys: &[&str],
        published: Option<NaiveDate>,
    ) -> Option<String> {
        raw.first_str(text_keys)
            .map(str::to_string)
            .or_else(|| published.map(dates::long_form))
            .or_else(|| raw.first_str(date_keys).map(str::to_string))
    }

    pub fn owned(raw: &RawItem, key: &str) -> Option<String> {
        raw.str_field(key).map(str::to_string)
    }
}
