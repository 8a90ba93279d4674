use chrono::Utc;
use tracing::{info, instrument};

use super::RunSummary;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::kino::{self, build_culture_program, build_films, build_program};
use crate::storage;

/// `fauskekino_program_raw.json` → `fauskekino_program.json`.
#[instrument(skip_all, fields(input = %config.kino_program_raw.display()))]
pub fn build_kino_program(config: &FeedConfig) -> Result<RunSummary> {
    let document = storage::read_required_json(&config.kino_program_raw)?;
    let program = build_program(kino::raw_payload(&document), Utc::now());
    storage::write_json_pretty(&config.kino_program_output, &program)?;

    info!(movies = program.movies.len(), "Wrote simplified program");
    Ok(RunSummary {
        noun: "movies",
        written: program.movies.len(),
        output: config.kino_program_output.clone(),
    })
}

/// `fauskekino_program_raw.json` → `fauskekino_filmer.json`.
#[instrument(skip_all, fields(input = %config.kino_program_raw.display()))]
pub fn build_kino_films(config: &FeedConfig) -> Result<RunSummary> {
    let document = storage::read_required_json(&config.kino_program_raw)?;
    let catalog = build_films(kino::raw_payload(&document), Utc::now());
    storage::write_json_pretty(&config.kino_films_output, &catalog)?;

    info!(films = catalog.films.len(), "Wrote film details");
    Ok(RunSummary {
        noun: "films",
        written: catalog.films.len(),
        output: config.kino_films_output.clone(),
    })
}

/// `kultur_program_raw.json` → `kultur_program.json`.
#[instrument(skip_all, fields(input = %config.kultur_program_raw.display()))]
pub fn build_kultur_program(config: &FeedConfig) -> Result<RunSummary> {
    let document = storage::read_required_json(&config.kultur_program_raw)?;
    let program = build_culture_program(kino::raw_payload(&document), Utc::now());
    storage::write_json_pretty(&config.kultur_program_output, &program)?;

    info!(events = program.events.len(), "Wrote culture program");
    Ok(RunSummary {
        noun: "events",
        written: program.events.len(),
        output: config.kultur_program_output.clone(),
    })
}
