//! Layered configuration for the xuanji tools.
//!
//! Precedence, lowest first: built-in defaults, a TOML file, then
//! `XUANJI_*` environment variables. The file comes from an explicit path
//! or `XUANJI_CONFIG`; with neither, only defaults and environment apply.
//!
//! ```toml
//! default_timezone = "Asia/Shanghai"
//! default_spread = "ThreeCard"
//! log_filter = "xuanji=debug"
//! seed = 42
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use xuanji_tarot::SpreadType;
use xuanji_time::is_known_timezone;

pub const ENV_CONFIG: &str = "XUANJI_CONFIG";
pub const ENV_TIMEZONE: &str = "XUANJI_TIMEZONE";
pub const ENV_SPREAD: &str = "XUANJI_SPREAD";
pub const ENV_LOG: &str = "XUANJI_LOG";
pub const ENV_SEED: &str = "XUANJI_SEED";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    #[error("seed must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XuanjiConfig {
    /// Zone used when a birth payload names neither offset nor timezone.
    pub default_timezone: Option<String>,
    /// Spread used when a draw names none.
    pub default_spread: String,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Fixed tarot seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for XuanjiConfig {
    fn default() -> Self {
        Self {
            default_timezone: None,
            default_spread: SpreadType::SingleCard.name().to_string(),
            log_filter: "warn".to_string(),
            seed: None,
        }
    }
}

impl XuanjiConfig {
    /// Load from `path` (or `XUANJI_CONFIG`), then apply the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// As [`load`](Self::load), reading variables through `env`.
    pub fn load_with<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = path.map(Path::to_path_buf).or_else(|| env(ENV_CONFIG).map(PathBuf::from));
        let mut config = match file {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        if let Some(tz) = set(ENV_TIMEZONE) {
            self.default_timezone = Some(tz);
        }
        if let Some(spread) = set(ENV_SPREAD) {
            self.default_spread = spread;
        }
        if let Some(filter) = set(ENV_LOG) {
            self.log_filter = filter;
        }
        if let Some(seed) = set(ENV_SEED) {
            self.seed = Some(seed.trim().parse().map_err(|_| ConfigError::InvalidSeed(seed))?);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(tz) = &self.default_timezone {
            if !is_known_timezone(tz) {
                return Err(ConfigError::UnknownTimezone(tz.clone()));
            }
        }
        self.spread()?;
        Ok(())
    }

    /// The configured default spread.
    pub fn spread(&self) -> Result<SpreadType, ConfigError> {
        self.default_spread
            .parse()
            .map_err(|_| ConfigError::UnknownSpread(self.default_spread.clone()))
    }
}
