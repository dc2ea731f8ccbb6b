use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::{AsymmetricAlgorithm, SymmetricAlgorithm};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherSection,
}

/// Every field is optional; whatever is absent keeps the facade default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CipherSection {
    /// Full symmetric recipe: transformation, key algorithm and size
    #[serde(default)]
    pub symmetric: Option<SymmetricAlgorithm>,
    #[serde(default)]
    pub asymmetric: Option<AsymmetricAlgorithm>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub key_algorithm: Option<String>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub provider: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cipher: default_cipher(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Read a configuration file
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading cipher configuration");
    let content = std::fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

/// Load from `$CIPHER_FACADE_CONFIG` (or `cipher-facade.toml`), falling back
/// to built-in defaults when the file does not exist.
pub fn load() -> Result<Config, ConfigError> {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&config_path).exists() {
        load_from(&config_path)
    } else {
        warn!(path = %config_path, "config file not found — using built-in defaults");
        Ok(Config::default())
    }
}
