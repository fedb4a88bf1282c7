// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, MAX_SALT_LEN, ROUNDS_ENV, SALT_LEN_ENV};
use crate::error::ConfigError;
use crate::kdf::KdfSettings;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_kdf")]
    pub kdf: KdfSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KdfSection {
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default = "default_salt_len")]
    pub salt_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { kdf: default_kdf() }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// File named by `BCRYPT_KDF_CONFIG` (defaults used if it does not
    /// exist), then `BCRYPT_KDF_ROUNDS` / `BCRYPT_KDF_SALT_LEN` on top.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut conf = if Path::new(&config_path).exists() {
            Self::from_path(&config_path)?
        } else {
            Config::default()
        };

        if let Ok(rounds) = std::env::var(ROUNDS_ENV) {
            conf.kdf.rounds = rounds
                .trim()
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("{ROUNDS_ENV}={rounds}: {e}")))?;
        }
        if let Ok(salt_len) = std::env::var(SALT_LEN_ENV) {
            conf.kdf.salt_len = salt_len
                .trim()
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("{SALT_LEN_ENV}={salt_len}: {e}")))?;
        }

        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kdf.rounds < 1 {
            return Err(ConfigError::Invalid("kdf.rounds must be at least 1".into()));
        }
        if self.kdf.salt_len == 0 || self.kdf.salt_len > MAX_SALT_LEN {
            return Err(ConfigError::Invalid(format!(
                "kdf.salt_len must be between 1 and {MAX_SALT_LEN}"
            )));
        }
        Ok(())
    }

    /// Settings for [`KdfParams::generate`](crate::kdf::KdfParams::generate)
    pub fn settings(&self) -> KdfSettings {
        KdfSettings {
            rounds: self.kdf.rounds,
            salt_len: self.kdf.salt_len,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process, falling back to defaults on any error
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| match Config::from_env() {
        Ok(conf) => conf,
        Err(err) => {
            warn!(%err, "bcrypt-kdf config unusable, using built-in defaults");
            Config::default()
        }
    })
}
