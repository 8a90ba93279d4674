use std::fmt;
use std::path::PathBuf;

pub mod aktuelt_use_case;
pub mod kino_use_case;

pub use aktuelt_use_case::{build_aktuelt_combined, AktueltUseCase};
pub use kino_use_case::{build_kino_films, build_kino_program, build_kultur_program};

/// Outcome of one pipeline step, printed as the run's summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// What was written: "items", "movies", "films", "events"
    pub noun: &'static str,
    pub written: usize,
    pub output: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrote {} {} to {}", self.written, self.noun, self.output.display())
    }
}
