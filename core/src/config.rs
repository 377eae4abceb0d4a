//! User settings.
//!
//! Stores configuration in JSON format at `~/.portscout/config.json`.
//! Scan results are never written here; only preferences are.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Keys accepted by [`ConfigStore::set`].
pub const CONFIG_KEYS: &[&str] = &["format", "project", "lsof", "ps", "ss"];

/// How scan results are rendered by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Detailed,
    Simple,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Table,
        OutputFormat::Detailed,
        OutputFormat::Simple,
        OutputFormat::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Detailed => "detailed",
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Config(format!(
                    "Invalid format: {}. Use table, detailed, simple, or json",
                    s
                ))
            })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Programs used for process lookups.
///
/// Bare names are resolved through `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPaths {
    #[serde(default = "default_lsof")]
    pub lsof: String,

    #[serde(default = "default_ps")]
    pub ps: String,

    #[serde(default = "default_ss")]
    pub ss: String,
}

fn default_lsof() -> String {
    "lsof".to_string()
}

fn default_ps() -> String {
    "ps".to_string()
}

fn default_ss() -> String {
    "ss".to_string()
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            lsof: default_lsof(),
            ps: default_ps(),
            ss: default_ss(),
        }
    }
}

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output format used when none is given on the command line.
    #[serde(default, rename = "defaultFormat")]
    pub default_format: OutputFormat,

    /// Project name shown in report headers.
    #[serde(default = "default_project_name", rename = "projectName")]
    pub project_name: String,

    /// Lookup tool programs.
    #[serde(default)]
    pub tools: ToolPaths,
}

fn default_project_name() -> String {
    "project".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            project_name: default_project_name(),
            tools: ToolPaths::default(),
        }
    }
}

impl Config {
    /// Update one setting by key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::Config(format!("Empty value for {}", key)));
        }

        match key {
            "format" => self.default_format = value.parse()?,
            "project" => self.project_name = value.to_string(),
            "lsof" => self.tools.lsof = value.to_string(),
            "ps" => self.tools.ps = value.to_string(),
            "ss" => self.tools.ss = value.to_string(),
            _ => {
                return Err(Error::Config(format!(
                    "Unknown key: {}. Valid keys: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

/// Configuration store for reading and writing settings.
///
/// Handles reading and writing configuration to `~/.portscout/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.portscout/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        Ok(Self {
            config_path: home.join(".portscout").join("config.json"),
        })
    }

    /// Create a config store with a custom path (for testing).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> PathBuf {
        self.config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self, config: &Config) -> Result<()> {
        let config_dir = self.config_dir();
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .await
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(config)?;

        // Write atomically by writing to temp file then renaming
        let temp_path = self.config_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(&temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }

    /// Change one setting and persist it.
    pub async fn set(&self, key: &str, value: &str) -> Result<Config> {
        let mut config = self.load().await?;
        config.set(key, value)?;
        self.save(&config).await?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let config = store.load().await.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_format, OutputFormat::Table);
        assert_eq!(config.project_name, "project");
        assert_eq!(config.tools.lsof, "lsof");
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _dir) = test_store();

        let config = Config {
            default_format: OutputFormat::Detailed,
            project_name: "my-app".to_string(),
            tools: ToolPaths {
                lsof: "/usr/sbin/lsof".to_string(),
                ..ToolPaths::default()
            },
        };

        store.save(&config).await.unwrap();
        assert!(store.path().exists());
        assert!(!store.path().with_extension("json.tmp").exists());

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let (store, _dir) = test_store();
        std::fs::create_dir_all(store.config_dir()).unwrap();
        std::fs::write(store.path(), r#"{"projectName": "shop"}"#).unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.project_name, "shop");
        assert_eq!(config.default_format, OutputFormat::Table);
        assert_eq!(config.tools, ToolPaths::default());
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let (store, _dir) = test_store();
        std::fs::create_dir_all(store.config_dir()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load().await, Err(Error::Json(_))));

        // A wrongly typed field is a JSON error too, not a silent default.
        std::fs::write(store.path(), r#"{"defaultFormat": "xml"}"#).unwrap();
        assert!(matches!(store.load().await, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_set_persists() {
        let (store, _dir) = test_store();

        store.set("format", "simple").await.unwrap();
        store.set("project", "checkout").await.unwrap();
        store.set("ss", "/usr/sbin/ss").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.default_format, OutputFormat::Simple);
        assert_eq!(config.project_name, "checkout");
        assert_eq!(config.tools.ss, "/usr/sbin/ss");
    }

    #[tokio::test]
    async fn test_set_rejects_bad_input() {
        let (store, _dir) = test_store();

        assert!(store.set("colour", "red").await.is_err());
        assert!(store.set("format", "xml").await.is_err());
        assert!(store.set("project", "  ").await.is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("DETAILED".parse::<OutputFormat>().unwrap(), OutputFormat::Detailed);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
