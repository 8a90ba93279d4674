pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod idempotency;
pub mod logging;
pub mod storage;
pub mod types;

// News normalization and merge
pub mod pipeline;

// Cinema and culture program converters
pub mod kino;

// Entry-point use cases shared by the binaries
pub mod app;

pub use config::FeedConfig;
pub use error::{FeedError, Result};
pub use types::{CombinedFeed, FeedSource, NormalizedItem, RawItem};
