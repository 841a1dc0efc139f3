use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TriageError;

/// Top-level configuration for Vault Triage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where scan results are persisted, relative to the vault root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Dot-prefixed so the walker never indexes it; checked by [`TriageConfig::validate`]
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_cache_dir() -> String {
    ".vault-triage".to_string()
}

fn default_cache_file() -> String {
    "scan-cache.json".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            cache_file: default_cache_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl TriageConfig {
    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load config from a YAML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The cache must be a single hidden directory directly under the vault root.
    pub fn validate(&self) -> crate::Result<()> {
        let dir = self.scan.cache_dir.as_str();
        if !dir.starts_with('.') || dir == "." || dir == ".." || has_separator(dir) {
            return Err(TriageError::InvalidConfig(format!(
                "scan.cache_dir must be a dot-prefixed directory name, got {:?}",
                dir
            )));
        }

        let file = self.scan.cache_file.as_str();
        if file.is_empty() || has_separator(file) {
            return Err(TriageError::InvalidConfig(format!(
                "scan.cache_file must be a plain file name, got {:?}",
                file
            )));
        }

        Ok(())
    }
}

fn has_separator(name: &str) -> bool {
    name.contains(['/', '\\'])
}
