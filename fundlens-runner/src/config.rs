//! Serializable dashboard configuration, loaded from TOML.
//!
//! Every section is optional; a missing section falls back to the
//! defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fundlens_core::{InvestorMatch, RecentOrder, ReportOptions};

/// Errors from reading or parsing a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("{field} must be at least 1")]
    ZeroLimit { field: &'static str },
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
    pub report: ReportConfig,
}

/// Where the funding table lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("startup_cleaned.csv"),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Suffix appended to every amount metric, e.g. `"1570 Cr"`.
    pub currency_unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_unit: "Cr".to_string(),
        }
    }
}

/// Report behaviour knobs. Mirrors `ReportOptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub recent_limit: usize,
    pub top_limit: usize,
    pub investor_match: InvestorMatch,
    pub recent_order: RecentOrder,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let opts = ReportOptions::default();
        Self {
            recent_limit: opts.recent_limit,
            top_limit: opts.top_limit,
            investor_match: opts.investor_match,
            recent_order: opts.recent_order,
        }
    }
}

impl DashboardConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.recent_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "report.recent_limit",
            });
        }
        if self.report.top_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "report.top_limit",
            });
        }
        Ok(())
    }

    /// Options handed to the report functions.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            investor_match: self.report.investor_match,
            recent_order: self.report.recent_order,
            recent_limit: self.report.recent_limit,
            top_limit: self.report.top_limit,
        }
    }
}
