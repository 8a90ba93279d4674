//! Source identifiers and labels shared across normalizers, config and CLI.

// Source ids (also the id namespace prefixes)
pub const FAUSKE_KOMMUNE_SOURCE: &str = "fauske_kommune";
pub const FAUSKENF_SOURCE: &str = "fauskenf";

// Human-readable source names
pub const FAUSKE_KOMMUNE_NAME: &str = "Fauske kommune";
pub const FAUSKENF_NAME: &str = "Fauske Næringsforum";

// Site roots used to absolutize relative links
pub const FAUSKE_KOMMUNE_BASE_URL: &str = "https://www.fauske.kommune.no";
pub const FAUSKENF_BASE_URL: &str = "https://www.fauskenf.no";
pub const FAUSKEKINO_BASE_URL: &str = "https://www.fauskekino.no";

// Default file names under the data directory
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const KOMMUNE_NEWS_FILE: &str = "nyheter.json";
pub const FAUSKENF_NEWS_FILE: &str = "fauskenf_nyheter.json";
pub const AKTUELT_COMBINED_FILE: &str = "aktuelt_combined.json";
pub const KINO_PROGRAM_RAW_FILE: &str = "fauskekino_program_raw.json";
pub const KINO_PROGRAM_FILE: &str = "fauskekino_program.json";
pub const KINO_FILMS_FILE: &str = "fauskekino_filmer.json";
pub const KULTUR_PROGRAM_RAW_FILE: &str = "kultur_program_raw.json";
pub const KULTUR_PROGRAM_FILE: &str = "kultur_program.json";

// Config discovery
pub const DEFAULT_CONFIG_FILE: &str = "feeds.toml";
pub const CONFIG_PATH_ENV: &str = "FAUSKE_FEEDS_CONFIG";
pub const DATA_DIR_ENV: &str = "FAUSKE_DATA_DIR";
pub const LOG_DIR_ENV: &str = "FAUSKE_LOG_DIR";
