//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, else the platform config dir)
//! 3. Identity provider (`git config`), applied by the core
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tbplugin_core::domain::RawOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new plugins.
    pub defaults: Defaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub license: Option<String>,
    pub test_framework: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `config_file` must exist. Without one, the default
    /// location is read if present and built-in defaults are used otherwise.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "textbringer", "textbringer-plugin-generator")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".textbringer-plugin-generator.toml"))
    }

    /// Config defaults as the lowest-priority raw options.
    pub fn raw_defaults(&self) -> RawOptions {
        RawOptions {
            license: self.defaults.license.clone(),
            test_framework: self.defaults.test_framework.clone(),
            author: self.defaults.author.clone(),
            email: self.defaults.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_has_no_overrides() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.license.is_none());
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.raw_defaults(), RawOptions::default());
    }

    #[test]
    fn load_reads_partial_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nlicense = \"mit\"\nauthor = \"Ada\"").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.defaults.license.as_deref(), Some("mit"));
        assert_eq!(cfg.defaults.author.as_deref(), Some("Ada"));
        assert_eq!(cfg.defaults.email, None);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults\nlicense = ").unwrap();

        let err = AppConfig::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
