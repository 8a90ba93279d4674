//! Group the raw culture program into events in `kultur_program.json`.
//!
//! Takes no arguments; paths come from `feeds.toml` and the environment.

use anyhow::Result;

use fauske_feeds::app;
use fauske_feeds::{logging, FeedConfig};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = FeedConfig::load()?;
    logging::init_logging(&config.log_dir);

    let summary = app::build_kultur_program(&config)?;
    println!("{}", summary);
    Ok(())
}
