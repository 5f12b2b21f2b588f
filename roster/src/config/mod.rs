//! Run configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the standard four-period layout:
//!
//! ```toml
//! [input]
//! header_marker = "Period"
//! periods = ["1", "2", "3", "4"]
//! delimiter = ","
//! cabin_tags = false
//!
//! [output]
//! dir = "."
//! file_pattern = "period_{period}_activities.csv"
//! count_annotations = false
//! # summary_file = "activities_summary.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Placeholder replaced by the period id in output file names.
pub const PERIOD_PLACEHOLDER: &str = "{period}";

/// Default name of the text summary.
pub const DEFAULT_SUMMARY_FILE: &str = "activities_summary.txt";

/// Full configuration of a run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// How the input export is read.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Substring of the first cell that marks the camper-name header row.
    pub header_marker: String,
    /// Known period ids. Rows starting with anything else are skipped.
    pub periods: Vec<String>,
    /// Field delimiter. `None` means auto-detect.
    pub delimiter: Option<char>,
    /// Decorate participants with the most recent cabin title.
    pub cabin_tags: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            header_marker: "Period".to_string(),
            periods: default_periods(),
            delimiter: Some(','),
            cabin_tags: false,
        }
    }
}

/// Where and what to write.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// File name pattern for period tables; must contain `{period}`.
    pub file_pattern: String,
    /// Write the aggregate text report to this file (relative to `dir`).
    pub summary_file: Option<PathBuf>,
    /// Append `" - <n>"` participant counts to activity labels.
    pub count_annotations: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_pattern: "period_{period}_activities.csv".to_string(),
            summary_file: None,
            count_annotations: false,
        }
    }
}

impl OutputConfig {
    /// Path of the table for one period.
    pub fn table_path(&self, period: &str) -> PathBuf {
        self.dir
            .join(self.file_pattern.replace(PERIOD_PLACEHOLDER, period))
    }

    /// Path of the text report, if one was requested.
    pub fn summary_path(&self) -> Option<PathBuf> {
        self.summary_file.as_ref().map(|f| self.dir.join(f))
    }
}

fn default_periods() -> Vec<String> {
    ["1", "2", "3", "4"].iter().map(|p| p.to_string()).collect()
}

impl RosterConfig {
    /// Turn on the summary variant: cabin tags, count annotations and the text report.
    pub fn enable_summary(&mut self, summary_file: Option<PathBuf>) {
        self.input.cabin_tags = true;
        self.output.count_annotations = true;
        self.output.summary_file =
            Some(summary_file.unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_FILE)));
    }

    /// Check values that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.input.header_marker.trim().is_empty() {
            return Err(ConfigError::Invalid("header_marker must not be empty".into()));
        }
        if self.input.periods.is_empty() {
            return Err(ConfigError::Invalid("at least one period is required".into()));
        }
        for (i, period) in self.input.periods.iter().enumerate() {
            if period.trim().is_empty() {
                return Err(ConfigError::Invalid("period ids must not be empty".into()));
            }
            if self.input.periods[..i].contains(period) {
                return Err(ConfigError::Invalid(format!("duplicate period '{}'", period)));
            }
        }
        if !self.output.file_pattern.contains(PERIOD_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "file_pattern '{}' must contain {}",
                self.output.file_pattern, PERIOD_PLACEHOLDER
            )));
        }
        Ok(())
    }

    /// Render as TOML, for `roster config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Parse configuration from TOML text and validate it.
pub fn parse_config(content: &str) -> ConfigResult<RosterConfig> {
    let config: RosterConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> ConfigResult<RosterConfig> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}
