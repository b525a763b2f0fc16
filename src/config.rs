use std::path::Path;

use crate::error::ConfigError;
use crate::game::{PlayerId, COLS};
use crate::logging::LoggingConfig;
use crate::ui::UiConfig;

/// Players' marks and who moves first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_mark: char,
    pub second_mark: char,
    /// Drawn for cells nobody has played yet.
    pub empty_mark: char,
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_mark: '@',
            second_mark: '$',
            empty_mark: '!',
            first_player: PlayerId::One,
        }
    }
}

impl GameConfig {
    pub fn mark_of(&self, id: PlayerId) -> char {
        match id {
            PlayerId::One => self.first_mark,
            PlayerId::Two => self.second_mark,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            // Logging is configured from this file, so warn on stderr directly
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let marks = [
            ("game.first_mark", self.game.first_mark),
            ("game.second_mark", self.game.second_mark),
            ("game.empty_mark", self.game.empty_mark),
        ];
        for (name, mark) in marks {
            if mark.is_whitespace() || mark.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }

        if self.game.first_mark == self.game.second_mark {
            return Err(ConfigError::Validation(
                "game.first_mark must differ from game.second_mark".into(),
            ));
        }
        if self.game.empty_mark == self.game.first_mark
            || self.game.empty_mark == self.game.second_mark
        {
            return Err(ConfigError::Validation(
                "game.empty_mark must differ from both player marks".into(),
            ));
        }

        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
