//! Dashboard settings stored as TOML in the platform config directory.
//!
//! Every section and key is optional; anything left out keeps its default.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entities::criteria::DatePreset;
use crate::domain::entities::pagination::PageSize;

pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to resolve config directory")]
    NoConfigDir,

    #[error("failed to access config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub table: TableConfig,
    pub export: ExportConfig,
    pub data: DataConfig,
}

/// Defaults every table view starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: PageSize,
    pub date_preset: DatePreset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Decimals written for cost and credit columns.
    pub numeric_precision: usize,
    /// Folder the save dialog opens in, also the target of quick exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries_csv: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            numeric_precision: 2,
            directory: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("com", "opsboard", "ops-dashboard").ok_or(ConfigError::NoConfigDir)
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

impl DashboardConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads `path`, first writing the defaults there when no file exists so
    /// there is a file to edit.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.save(path)?;
        info!(path = %path.display(), "wrote default config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        let to_error = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
        std::fs::write(path, text).map_err(to_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_gives_defaults() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");

        let config = DashboardConfig::load(&temp_dir.path().join(CONFIG_FILE_NAME))
            .expect("missing config should not fail");

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.table.page_size, PageSize::Ten);
        assert_eq!(config.export.numeric_precision, 2);
    }

    #[test]
    fn first_start_writes_default_config_file() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let path = temp_dir.path().join("ops-dashboard").join(CONFIG_FILE_NAME);

        let config = DashboardConfig::load_or_create(&path).expect("should create config");

        assert_eq!(config, DashboardConfig::default());
        assert!(path.is_file(), "default config should be written");
        let reloaded = DashboardConfig::load(&path).expect("written config should load");
        assert_eq!(reloaded, config);
    }

    #[test]
    fn existing_config_is_not_overwritten() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[export]\nnumeric_precision = 3\n").expect("should write config");

        let config = DashboardConfig::load_or_create(&path).expect("should load config");

        assert_eq!(config.export.numeric_precision, 3);
        assert_eq!(
            fs::read_to_string(&path).expect("should read config"),
            "[export]\nnumeric_precision = 3\n"
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = DashboardConfig::parse(
            r#"
[table]
page_size = 50
date_preset = "7d"
"#,
        )
        .expect("config should parse");

        assert_eq!(config.table.page_size, PageSize::Fifty);
        assert_eq!(config.table.date_preset, DatePreset::SevenDays);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn unsupported_page_size_is_a_parse_error() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[table]\npage_size = 25\n").expect("should write config");

        let result = DashboardConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })), "{result:?}");
    }

    #[test]
    fn save_then_load_returns_same_config() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = DashboardConfig {
            table: TableConfig {
                page_size: PageSize::Twenty,
                date_preset: DatePreset::ThirtyDays,
            },
            export: ExportConfig {
                numeric_precision: 4,
                directory: Some(temp_dir.path().to_path_buf()),
            },
            data: DataConfig {
                queries_csv: Some(temp_dir.path().join("queries.csv")),
            },
        };

        config.save(&path).expect("save should succeed");
        let loaded = DashboardConfig::load(&path).expect("load should succeed");

        assert_eq!(loaded, config);
    }
}
