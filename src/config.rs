//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::ranking::{default_seed, Leaderboard, SeedDish};
use crate::view::{ViewOptions, DEFAULT_PODIUM_SIZE, DEFAULT_TITLE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Leaderboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_podium_size")]
    pub podium_size: usize,

    #[serde(default = "default_seed")]
    pub seed: Vec<SeedDish>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_podium_size() -> usize {
    DEFAULT_PODIUM_SIZE
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            podium_size: default_podium_size(),
            seed: default_seed(),
        }
    }
}

impl BoardConfig {
    /// Fresh leaderboard built from the configured seed
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from_seed(&self.seed)
    }

    /// Presentation settings for front ends
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            title: self.title.clone(),
            podium_size: self.podium_size,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!("unknown log format {:?}", other))),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// The first config file that exists wins. A file that exists but does
    /// not load is an error, the same as a file passed explicitly.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dishboard").join("config.toml")),
            Some(PathBuf::from("./dishboard.toml")),
        ];
        Self::load_first(config_paths.iter().flatten())
    }

    fn load_first<'a>(
        paths: impl IntoIterator<Item = &'a PathBuf>,
    ) -> Result<Self, ConfigError> {
        match paths.into_iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::info!("Using default config with environment overrides");
                Self::from_env()
            }
        }
    }

    /// Reject values no leaderboard can use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.podium_size == 0 {
            return Err(ConfigError::Invalid(
                "board.podium_size must be at least 1".to_string(),
            ));
        }
        if self.board.title.trim().is_empty() {
            return Err(ConfigError::Invalid("board.title must not be empty".to_string()));
        }
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        // Board overrides
        if let Some(title) = lookup("DISHBOARD_TITLE") {
            self.board.title = title;
        }
        if let Some(size) = lookup("DISHBOARD_PODIUM_SIZE") {
            self.board.podium_size = size.parse().map_err(|_| {
                ConfigError::Invalid(format!("DISHBOARD_PODIUM_SIZE is not a number: {:?}", size))
            })?;
        }

        // Logging overrides
        if let Some(level) = lookup("DISHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DISHBOARD_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }

        self.validate()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    let mut content = String::from(
        r#"# Dishboard Configuration
#
# Environment variables override these settings:
# - DISHBOARD_TITLE
# - DISHBOARD_PODIUM_SIZE
# - DISHBOARD_LOG_LEVEL
# - DISHBOARD_LOG_FORMAT

[board]
# Heading shown above the leaderboard
title = "Most Requested Dishes"

# How many of the top dishes are highlighted
podium_size = 3

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Dishes on the board when a session starts.
# Each needs a non-empty name and an order count of at least 1.
"#,
    );

    content.push_str(&seed_tables(&default_seed()));
    content
}

/// `[[board.seed]]` tables for a seed list
fn seed_tables(seed: &[SeedDish]) -> String {
    let mut tables = String::new();
    for dish in seed {
        let name = toml::Value::String(dish.name.to_string());
        tables.push_str(&format!(
            "\n[[board.seed]]\nname = {}\norder_count = {}\n",
            name,
            dish.order_count.get()
        ));
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{DishName, OrderCount};
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.board.title, "Most Requested Dishes");
        assert_eq!(config.board.podium_size, 3);
        assert_eq!(config.board.seed.len(), 10);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.board.seed, default_seed());
        assert_eq!(config.board.leaderboard(), Leaderboard::seeded());
        config.validate().unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [board]
            title = "Canteen Favourites"
            podium_size = 1

            [[board.seed]]
            name = "Soup"
            order_count = 4

            [[board.seed]]
            name = "Pie"
            order_count = 11

            [logging]
            format = "json"
            "#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.board.title, "Canteen Favourites");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");

        let board = config.board.leaderboard();
        assert_eq!(board.dishes()[0].name.as_str(), "Pie");
        assert_eq!(config.board.view_options().podium_size, 1);
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[board.seed]]
            name = "Soup"
            order_count = 0
            "#
        )
        .unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_podium_rejected() {
        let config: Config = toml::from_str("[board]\npodium_size = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_seed_names_are_escaped() {
        let seed = vec![SeedDish::new(
            DishName::new(r#"Nan's "Special" \ Curry"#).unwrap(),
            OrderCount::new(7).unwrap(),
        )];

        let config: Config = toml::from_str(&seed_tables(&seed)).unwrap();
        assert_eq!(config.board.seed, seed);
    }

    #[test]
    fn test_discovered_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let broken = dir.path().join("dishboard.toml");
        std::fs::write(&broken, "[board]\ntitle = \"Canteen\"\npodium_size = 0\n").unwrap();

        let err = Config::load_first([&missing, &broken]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_discovery_uses_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let found = dir.path().join("dishboard.toml");
        std::fs::write(&found, "[board]\ntitle = \"Canteen\"\n").unwrap();

        let config = Config::load_first([&missing, &found]).unwrap();
        assert_eq!(config.board.title, "Canteen");
        assert_eq!(config.board.seed.len(), 10);

        let defaults = Config::load_first([&missing]).unwrap();
        assert_eq!(defaults.board.seed.len(), 10);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/dishboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DISHBOARD_TITLE", "Top Plates"),
            ("DISHBOARD_PODIUM_SIZE", "5"),
            ("DISHBOARD_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.board.title, "Top Plates");
        assert_eq!(config.board.podium_size, 5);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "DISHBOARD_PODIUM_SIZE").then(|| "three".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
