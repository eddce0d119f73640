use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DB_PATH: &str = "Data.db";
const DEFAULT_CSV_PATH: &str = "Data.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ADDRESS_BOOK_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub csv_path: PathBuf,
}

impl Config {
    /// Reads `ADDRESS_BOOK_*` variables, after loading a `.env` file if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup("ADDRESS_BOOK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        Ok(Self {
            addr,
            db_path: lookup("ADDRESS_BOOK_DB_PATH")
                .unwrap_or_else(|| DEFAULT_DB_PATH.into())
                .into(),
            csv_path: lookup("ADDRESS_BOOK_CSV_PATH")
                .unwrap_or_else(|| DEFAULT_CSV_PATH.into())
                .into(),
        })
    }
}
