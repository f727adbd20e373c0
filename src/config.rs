use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::report::text::DEFAULT_ORGANIZATION;
use crate::sink::LogFormat;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Issuer printed under the signature line.
    pub organization: String,
    /// Directory receiving rendered documents.
    pub out_dir: PathBuf,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub path: PathBuf,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_format() -> LogFormat {
    LogFormat::Tsv
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            out_dir: PathBuf::from("."),
            log: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
