//! Engine configuration.
//!
//! Defaults match the classic trivia service: ten questions per page, category
//! id `0` meaning "all categories" in quiz mode, difficulty 1–5. Values can be
//! read from a TOML document and then overridden from the environment.

use std::path::Path;
use serde::Deserialize;
use thiserror::Error;

use crate::trivia_engine::models::CategoryId;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_ALL_CATEGORIES_ID: u32 = 0;
pub const DEFAULT_MAX_DIFFICULTY: u8 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Questions per page for listing and search.
    pub page_size: usize,
    /// Quiz category id that selects the whole collection.
    pub all_categories_id: u32,
    /// Highest accepted difficulty on creation (lowest is always 1).
    pub max_difficulty: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            all_categories_id: DEFAULT_ALL_CATEGORIES_ID,
            max_difficulty: DEFAULT_MAX_DIFFICULTY,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Defaults overridden by `TRIVIA_PAGE_SIZE`, `TRIVIA_ALL_CATEGORIES_ID`
    /// and `TRIVIA_MAX_DIFFICULTY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any key/value source. Unset keys keep the current value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, "TRIVIA_PAGE_SIZE")? {
            self.page_size = v;
        }
        if let Some(v) = parse_var(&lookup, "TRIVIA_ALL_CATEGORIES_ID")? {
            self.all_categories_id = v;
        }
        if let Some(v) = parse_var(&lookup, "TRIVIA_MAX_DIFFICULTY")? {
            self.max_difficulty = v;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1"));
        }
        if self.max_difficulty == 0 {
            return Err(ConfigError::Invalid("max_difficulty must be at least 1"));
        }
        Ok(())
    }

    pub fn is_all_categories(&self, id: CategoryId) -> bool {
        id.0 == self.all_categories_id
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn toml_overrides_single_field() {
        let config = EngineConfig::from_toml_str("page_size = 25").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.all_categories_id, DEFAULT_ALL_CATEGORIES_ID);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = EngineConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("page_size = \"ten\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn overrides_apply_and_validate() {
        let config = EngineConfig::default()
            .with_overrides(|var| match var {
                "TRIVIA_PAGE_SIZE" => Some("5".to_string()),
                "TRIVIA_ALL_CATEGORIES_ID" => Some("99".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.page_size, 5);
        assert!(config.is_all_categories(CategoryId(99)));
        assert!(!config.is_all_categories(CategoryId(0)));

        let err = EngineConfig::default()
            .with_overrides(|var| (var == "TRIVIA_MAX_DIFFICULTY").then(|| "hard".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "TRIVIA_MAX_DIFFICULTY", .. }));
    }

    #[test]
    fn toml_file_is_loaded_and_validated() {
        let path = std::env::temp_dir().join(format!("trivia_engine_config_{}.toml", std::process::id()));
        std::fs::write(&path, "page_size = 4\nmax_difficulty = 3\n").unwrap();
        let loaded = EngineConfig::from_toml_file(&path);
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.max_difficulty, 3);
        assert_eq!(config.all_categories_id, DEFAULT_ALL_CATEGORIES_ID);
    }

    #[test]
    fn missing_toml_file_is_a_read_error() {
        let path = std::env::temp_dir().join("trivia_engine_config_does_not_exist.toml");
        let err = EngineConfig::from_toml_file(&path).unwrap_err();
        match err {
            ConfigError::Read { path: reported, source } => {
                assert!(reported.ends_with("trivia_engine_config_does_not_exist.toml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected a read error, got {other:?}"),
        }
    }

    // The only test in the crate that touches TRIVIA_* variables.
    #[test]
    fn environment_overrides_defaults() {
        std::env::set_var("TRIVIA_PAGE_SIZE", "7");
        let loaded = EngineConfig::from_env();
        std::env::remove_var("TRIVIA_PAGE_SIZE");

        let config = loaded.unwrap();
        assert_eq!(config.page_size, 7);
        assert_eq!(config.max_difficulty, DEFAULT_MAX_DIFFICULTY);
    }
}
