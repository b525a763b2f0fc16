use std::path::PathBuf;

/// Reasons a move is rejected. None of them change the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is not on the board")]
    InvalidColumn { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(
            MoveError::InvalidColumn { column: 9 }.to_string(),
            "column 9 is not on the board"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.first_mark must differ from game.second_mark".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.first_mark must differ from game.second_mark"
        );
    }

    #[test]
    fn test_logging_error_display() {
        let err = LoggingError::FileOpen {
            path: PathBuf::from("logs/game.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "failed to open log file logs/game.log: missing"
        );
    }
}
