//! Helpers for Sanity CMS structures embedded in filmweb data.

use serde_json::Value;

/// Flatten portable-text blocks into plain text.
///
/// Only `block` entries and their `span` children contribute; blocks are
/// trimmed, blank ones dropped, and the rest joined by a blank line.
pub fn blocks_to_plaintext(blocks: Option<&Value>) -> String {
    let Some(blocks) = blocks.and_then(Value::as_array) else {
        return String::new();
    };

    blocks
        .iter()
        .filter(|block| block.get("_type").and_then(Value::as_str) == Some("block"))
        .filter_map(|block| {
            let text: String = block
                .get("children")
                .and_then(Value::as_array)
                .map(|children| {
                    children
                        .iter()
                        .filter(|child| child.get("_type").and_then(Value::as_str) == Some("span"))
                        .filter_map(|child| child.get("text").and_then(Value::as_str))
                        .collect()
                })
                .unwrap_or_default();
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `asset.url` of each image entry that has one, in order.
pub fn image_urls(images: Option<&Value>) -> impl Iterator<Item = String> + '_ {
    images
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|img| img.get("asset")?.get("url")?.as_str())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

/// First `asset.url` in an image list.
pub fn first_image_url(images: Option<&Value>) -> Option<String> {
    image_urls(images).next()
}
