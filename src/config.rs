use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{OrgChartError, Result};

/// Name of the configuration file written by `orgchart init`.
pub const CONFIG_FILENAME: &str = "orgchart.json";

/// Header names of the five logical roster columns.
///
/// Lookups tolerate leading artifacts on the header (see
/// [`crate::roster::resolve_field`]), so these are the bare column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Role or job title.
    pub role: String,
    /// Display name.
    pub name: String,
    /// Unique identifier.
    pub id: String,
    /// Free-text reference to the direct manager.
    pub manager: String,
    /// Free-text reference to a dotted-line manager.
    pub secondary: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            role: "תפקיד".to_string(),
            name: "שם".to_string(),
            id: "ת.ז".to_string(),
            manager: "למי כפוף".to_string(),
            secondary: "למי מדווח".to_string(),
        }
    }
}

impl ColumnNames {
    fn all(&self) -> [(&'static str, &str); 5] {
        [
            ("role", self.role.as_str()),
            ("name", self.name.as_str()),
            ("id", self.id.as_str()),
            ("manager", self.manager.as_str()),
            ("secondary", self.secondary.as_str()),
        ]
    }
}

/// Configuration for building an org chart from a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Substring of a role that marks a governance (board) position.
    pub board_marker: String,
    /// Whether to remove `"` characters from role text when building titles.
    pub strip_quotes: bool,
    pub columns: ColumnNames,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            version: 1,
            board_marker: "דירקטור".to_string(),
            strip_quotes: true,
            columns: ColumnNames::default(),
        }
    }
}

impl ChartConfig {
    /// Checks that every column name and the board marker are non-empty.
    ///
    /// An empty marker would classify every role as `Board`, and an empty
    /// column name would suffix-match the first header of every record.
    pub fn validate(&self) -> Result<()> {
        for (field, header) in self.columns.all() {
            if header.trim().is_empty() {
                return Err(OrgChartError::Config {
                    message: format!("column name for '{}' must not be empty", field),
                });
            }
        }
        if self.board_marker.is_empty() {
            return Err(OrgChartError::Config {
                message: "board_marker must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the default configuration path inside `dir`.
pub fn default_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("toml")
}

/// Loads and validates the configuration at `path`.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON. If the
/// file does not exist the default configuration is returned.
pub fn load_config(path: &Path) -> Result<ChartConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ChartConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| OrgChartError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    let config: ChartConfig = if is_toml(path) {
        toml::from_str(&contents).map_err(|e| OrgChartError::Config {
            message: format!("failed to parse config file '{}': {}", path.display(), e),
        })?
    } else {
        serde_json::from_str(&contents).map_err(|e| OrgChartError::Config {
            message: format!("failed to parse config file '{}': {}", path.display(), e),
        })?
    };

    config.validate()?;
    Ok(config)
}

/// Saves the configuration using an atomic write.
///
/// Writes to a temporary sibling file first and then renames it over `path`,
/// so a partial write never leaves a truncated config behind.
pub fn save_config(path: &Path, config: &ChartConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OrgChartError::Config {
            message: format!(
                "failed to create config directory '{}': {}",
                parent.display(),
                e
            ),
        })?;
    }

    let serialized = if is_toml(path) {
        toml::to_string_pretty(config).map_err(|e| OrgChartError::Config {
            message: format!("failed to serialize config: {}", e),
        })?
    } else {
        serde_json::to_string_pretty(config).map_err(|e| OrgChartError::Config {
            message: format!("failed to serialize config: {}", e),
        })?
    };

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &serialized).map_err(|e| OrgChartError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| OrgChartError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}
