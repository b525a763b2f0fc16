//! Log subscriber setup.
//!
//! The terminal UI owns the screen, so logs only go to a file unless the
//! caller asks for a stderr fallback.

use std::env::VarError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::LoggingError;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Append logs here. Without it, logging is off unless stderr is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Build the filter: `RUST_LOG` if set, the configured directives otherwise.
    /// A malformed `RUST_LOG` is an error rather than a silent fallback.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        let from_env = match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(directives) => Some(directives),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        };
        self.filter_from(from_env)
    }

    fn filter_from(&self, from_env: Option<String>) -> Result<EnvFilter, LoggingError> {
        let directives = from_env.unwrap_or_else(|| self.filter.clone());
        EnvFilter::try_new(&directives).map_err(|source| LoggingError::Filter {
            filter: directives,
            source,
        })
    }
}

/// Install the global subscriber. Returns `false` when nothing was installed
/// because there is no log file and stderr is not allowed.
pub fn init(config: &LoggingConfig, allow_stderr: bool) -> Result<bool, LoggingError> {
    let filter = config.env_filter()?;

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::FileOpen {
                    path: path.clone(),
                    source,
                })?;
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None if allow_stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => return Ok(false),
    }

    tracing::debug!(filter = %config.filter, "logging initialised");
    Ok(true)
}
