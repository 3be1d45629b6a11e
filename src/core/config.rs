// src/core/config.rs
use std::env;
use log::LevelFilter;
use thiserror::Error;

use crate::cli::Args;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be an unsigned integer, got '{value}'")]
    InvalidSeed { key: &'static str, value: String },

    #[error("{key} must be one of off, error, warn, info, debug, trace, got '{value}'")]
    InvalidLogLevel { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub const LOG_LEVEL_KEY: &str = "PASSGEN_LOG";
pub const SEED_KEY: &str = "PASSGEN_SEED";

// Runtime settings for the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Logging
    pub log_level: LevelFilter,

    // Randomness
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            seed: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup(LOG_LEVEL_KEY) {
            config.log_level = val.trim().parse().map_err(|_| ConfigError::InvalidLogLevel {
                key: LOG_LEVEL_KEY,
                value: val.clone(),
            })?;
        }

        if let Some(val) = lookup(SEED_KEY) {
            let seed = val.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                key: SEED_KEY,
                value: val.clone(),
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }

    // Command line flags win over the environment
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(level) = args.log_level {
            self.log_level = level;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.seed.is_none());
    }

    #[test]
    fn reads_environment_values() {
        let config = Config::from_lookup(lookup_from(&[(LOG_LEVEL_KEY, "Debug"), (SEED_KEY, " 1234 ")])).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn invalid_values_are_errors() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[(SEED_KEY, "abc")])),
            Err(ConfigError::InvalidSeed { key: SEED_KEY, value: "abc".to_string() })
        );
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(LOG_LEVEL_KEY, "loud")])),
            Err(ConfigError::InvalidLogLevel { .. })
        ));
    }

    #[test]
    fn args_override_environment() {
        let mut config = Config::from_lookup(lookup_from(&[(SEED_KEY, "1"), (LOG_LEVEL_KEY, "info")])).unwrap();
        let args = Args {
            seed: Some(2),
            log_level: None,
        };
        config.apply_args(&args);
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
