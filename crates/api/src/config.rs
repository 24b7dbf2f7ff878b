//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use stockview_inventory::DataSource;
use stockview_observability::{LogFormat, ParseLogFormatError};

pub const ENV_BIND: &str = "STOCKVIEW_BIND";
pub const ENV_DATA: &str = "STOCKVIEW_DATA";
pub const ENV_SHEET: &str = "STOCKVIEW_SHEET";
pub const ENV_LOG_FORMAT: &str = "STOCKVIEW_LOG_FORMAT";

pub const DEFAULT_BIND: &str = "127.0.0.1:8050";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STOCKVIEW_BIND: invalid listen address {value:?}: {source}")]
    InvalidBind {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("STOCKVIEW_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),

    #[error("STOCKVIEW_SHEET is set but STOCKVIEW_DATA is not")]
    SheetWithoutData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub source: DataSource,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: bind_raw.clone(),
                source,
            })?;

        let sheet = get(ENV_SHEET);
        let source = match get(ENV_DATA) {
            Some(path) => DataSource::File {
                path: PathBuf::from(path.trim()),
                sheet,
            },
            None if sheet.is_some() => return Err(ConfigError::SheetWithoutData),
            None => DataSource::Sample,
        };

        let log_format = match get(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind,
            source,
            log_format,
        })
    }
}
