use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{FeedError, Result};
use crate::types::RawFeed;

/// Read an optional upstream feed.
///
/// A missing file is `Ok(None)` and an empty file is a feed with no items;
/// a file that exists but is not valid JSON is an error.
pub fn read_optional_feed(path: &Path) -> Result<Option<RawFeed>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "Input not found, treating as zero items");
            return Ok(None);
        }
        Err(e) => return Err(FeedError::io(path, e)),
    };

    if text.trim().is_empty() {
        debug!(path = %path.display(), "Input is empty");
        return Ok(Some(RawFeed::default()));
    }

    let feed = serde_json::from_str(&text).map_err(|e| FeedError::json(path, e))?;
    Ok(Some(feed))
}

/// Read a JSON document that must exist and be non-empty.
pub fn read_required_json(path: &Path) -> Result<Value> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(FeedError::MissingInput(path.to_path_buf()));
        }
        Err(e) => return Err(FeedError::io(path, e)),
    };

    if text.trim().is_empty() {
        return Err(FeedError::EmptyInput(path.to_path_buf()));
    }

    serde_json::from_str(&text).map_err(|e| FeedError::json(path, e))
}

/// Serialize `value` as pretty JSON (non-ASCII kept literal) and overwrite `path`.
///
/// The document is fully rendered before the file is opened, so a
/// serialization failure leaves any previous file untouched.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FeedError::io(parent, e))?;
    }

    fs::write(path, rendered).map_err(|e| FeedError::io(path, e))?;
    debug!(path = %path.display(), "Wrote JSON document");
    Ok(())
}
