//! Service configuration, loaded once at startup from a YAML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Process configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// Database engine, eg. "sqlite"
    pub db: String,
    /// DSN, eg. "/var/lib/irma-abused/abuse.db"
    pub dsn: String,
    /// Address to bind to, eg. ":8383"
    pub bindaddr: String,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            db: String::new(),
            dsn: String::new(),
            bindaddr: "localhost:8383".to_string(),
        }
    }
}

impl Conf {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let buf = fs::read_to_string(path)?;
        let conf = serde_yaml::from_str(&buf)?;
        Ok(conf)
    }
}
