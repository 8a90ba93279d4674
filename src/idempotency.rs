use sha2::{Digest, Sha256};

use crate::types::RawItem;

/// Number of hex chars kept from a content hash.
const CONTENT_HASH_LEN: usize = 16;

/// `{namespace}-{key}`.
pub fn namespaced_id(namespace: &str, key: &str) -> String {
    format!("{}-{}", namespace, key)
}

/// Last path segment of a URL or title, ignoring trailing slashes.
/// Returns `None` when nothing usable remains.
pub fn last_segment(value: &str) -> Option<&str> {
    let segment = value.trim().trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() || segment.ends_with(':') {
        None
    } else {
        Some(segment)
    }
}

/// Lowercase, dash-separated form of free text.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Hash of the raw record's canonical JSON, for records with no stable text to key on.
///
/// Object keys serialize in sorted order, so equal records hash equally
/// regardless of the order they were written in.
pub fn content_hash(raw: &RawItem) -> String {
    let canonical = serde_json::to_string(raw.as_map()).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let mut out = hex::encode(hasher.finalize());
    out.truncate(CONTENT_HASH_LEN);
    out
}
