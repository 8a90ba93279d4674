use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants;
use crate::error::{FeedError, Result};

/// Input and output locations for every pipeline step.
///
/// Built once by the entry point and passed by reference into each use case.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub kommune_news: PathBuf,
    pub fauskenf_news: PathBuf,
    pub aktuelt_output: PathBuf,
    pub kino_program_raw: PathBuf,
    pub kino_program_output: PathBuf,
    pub kino_films_output: PathBuf,
    pub kultur_program_raw: PathBuf,
    pub kultur_program_output: PathBuf,
}

/// Optional overrides read from `feeds.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    kommune_news: Option<PathBuf>,
    fauskenf_news: Option<PathBuf>,
    aktuelt_output: Option<PathBuf>,
    kino_program_raw: Option<PathBuf>,
    kino_program_output: Option<PathBuf>,
    kino_films_output: Option<PathBuf>,
    kultur_program_raw: Option<PathBuf>,
    kultur_program_output: Option<PathBuf>,
}

impl FeedConfig {
    /// Default file layout rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            log_dir: PathBuf::from(constants::DEFAULT_LOG_DIR),
            kommune_news: data_dir.join(constants::KOMMUNE_NEWS_FILE),
            fauskenf_news: data_dir.join(constants::FAUSKENF_NEWS_FILE),
            aktuelt_output: data_dir.join(constants::AKTUELT_COMBINED_FILE),
            kino_program_raw: data_dir.join(constants::KINO_PROGRAM_RAW_FILE),
            kino_program_output: data_dir.join(constants::KINO_PROGRAM_FILE),
            kino_films_output: data_dir.join(constants::KINO_FILMS_FILE),
            kultur_program_raw: data_dir.join(constants::KULTUR_PROGRAM_RAW_FILE),
            kultur_program_output: data_dir.join(constants::KULTUR_PROGRAM_FILE),
            data_dir,
        }
    }

    /// Load from `feeds.toml` (or `$FAUSKE_FEEDS_CONFIG`) and environment overrides.
    pub fn load() -> Result<Self> {
        let file_text = match env::var(constants::CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                let text = fs::read_to_string(&path).map_err(|e| {
                    FeedError::Config(format!("Failed to read config file '{}': {}", path, e))
                })?;
                Some(text)
            }
            _ => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(
                        fs::read_to_string(default_path)
                            .map_err(|e| FeedError::io(default_path, e))?,
                    )
                } else {
                    None
                }
            }
        };

        Self::from_sources(
            file_text.as_deref(),
            non_empty_env(constants::DATA_DIR_ENV),
            non_empty_env(constants::LOG_DIR_ENV),
        )
    }

    /// Layer defaults, TOML text and environment values, lowest precedence first.
    pub fn from_sources(
        toml_text: Option<&str>,
        data_dir_env: Option<String>,
        log_dir_env: Option<String>,
    ) -> Result<Self> {
        let file: FileConfig = match toml_text {
            Some(text) => toml::from_str(text)?,
            None => FileConfig::default(),
        };

        let data_dir = data_dir_env
            .map(PathBuf::from)
            .or(file.data_dir)
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_DATA_DIR));

        let mut config = Self::with_data_dir(&data_dir);

        let resolve = |p: PathBuf| if p.is_absolute() { p } else { data_dir.join(p) };
        let overrides: [(&mut PathBuf, Option<PathBuf>); 8] = [
            (&mut config.kommune_news, file.kommune_news),
            (&mut config.fauskenf_news, file.fauskenf_news),
            (&mut config.aktuelt_output, file.aktuelt_output),
            (&mut config.kino_program_raw, file.kino_program_raw),
            (&mut config.kino_program_output, file.kino_program_output),
            (&mut config.kino_films_output, file.kino_films_output),
            (&mut config.kultur_program_raw, file.kultur_program_raw),
            (&mut config.kultur_program_output, file.kultur_program_output),
        ];
        for (slot, value) in overrides {
            if let Some(path) = value {
                *slot = resolve(path);
            }
        }

        if let Some(log_dir) = log_dir_env.map(PathBuf::from).or(file.log_dir) {
            config.log_dir = log_dir;
        }

        debug!(data_dir = %config.data_dir.display(), "Resolved feed configuration");
        Ok(config)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::with_data_dir(constants::DEFAULT_DATA_DIR)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_original_file_names() {
        let config = FeedConfig::from_sources(None, None, None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.kommune_news, PathBuf::from("data/nyheter.json"));
        assert_eq!(config.fauskenf_news, PathBuf::from("data/fauskenf_nyheter.json"));
        assert_eq!(config.aktuelt_output, PathBuf::from("data/aktuelt_combined.json"));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_toml_overrides_resolve_against_data_dir() {
        let toml = r#"
            data_dir = "/srv/feeds"
            aktuelt_output = "out/combined.json"
            kommune_news = "/tmp/kommune.json"
        "#;
        let config = FeedConfig::from_sources(Some(toml), None, None).unwrap();
        assert_eq!(config.aktuelt_output, PathBuf::from("/srv/feeds/out/combined.json"));
        assert_eq!(config.kommune_news, PathBuf::from("/tmp/kommune.json"));
        assert_eq!(config.fauskenf_news, PathBuf::from("/srv/feeds/fauskenf_nyheter.json"));
    }

    #[test]
    fn test_env_data_dir_wins_over_file() {
        let toml = r#"data_dir = "from-file""#;
        let config = FeedConfig::from_sources(
            Some(toml),
            Some("from-env".to_string()),
            Some("/var/log/feeds".to_string()),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("from-env"));
        assert_eq!(config.kino_films_output, PathBuf::from("from-env/fauskekino_filmer.json"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/feeds"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = FeedConfig::from_sources(Some("output_dir = \"x\""), None, None);
        assert!(matches!(result, Err(FeedError::Toml(_))));
    }
}
