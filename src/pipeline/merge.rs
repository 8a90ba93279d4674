use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Reverse;

use crate::types::{CombinedFeed, NormalizedItem};

/// Sort key for an item: its calendar date, with `None` ordering below every
/// date so undated items sink to the end of a descending sort.
pub fn sort_key(item: &NormalizedItem) -> Option<NaiveDate> {
    item.published
}

/// Concatenate per-source batches in the given priority order, then sort
/// newest first. The sort is stable, so same-day items keep their
/// concatenation order.
pub fn merge_sources(batches: Vec<Vec<NormalizedItem>>) -> Vec<NormalizedItem> {
    let mut items: Vec<NormalizedItem> = batches.into_iter().flatten().collect();
    items.sort_by_key(|item| Reverse(sort_key(item)));
    items
}

/// Build the combined feed document stamped with `now`.
pub fn build_combined(batches: Vec<Vec<NormalizedItem>>, now: DateTime<Utc>) -> CombinedFeed {
    CombinedFeed::new(merge_sources(batches), now)
}
