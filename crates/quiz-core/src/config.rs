//! TOML-configurable paths and patterns for a pipeline run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, QuizError};

/// Settings shared by the inspect, convert, and report commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Directory holding the corpus to convert.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// File-name glob selecting conversion inputs.
    #[serde(default = "default_source_pattern")]
    pub source_pattern: String,
    /// Directory holding the corpus to report on.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
    /// File-name glob selecting report inputs.
    #[serde(default = "default_report_pattern")]
    pub report_pattern: String,
    /// Directory receiving converted tier files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Leading component of converted file names.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Rows kept for ranked tables (years, nationalities, players).
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("data/v3")
}

fn default_source_pattern() -> String {
    "*.json".to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_report_pattern() -> String {
    "REBALANCED_*.json".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_prefix() -> String {
    "CONVERTED_V3".to_string()
}

fn default_top_n() -> usize {
    10
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            source_pattern: default_source_pattern(),
            report_dir: default_report_dir(),
            report_pattern: default_report_pattern(),
            output_dir: default_output_dir(),
            output_prefix: default_output_prefix(),
            top_n: default_top_n(),
        }
    }
}

impl PipelineConfig {
    /// Reads a TOML configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            QuizError::Config(
                ErrorInfo::new("quiz_core.config_read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_toml_str(&raw).map_err(|err| match err {
            QuizError::Config(info) => {
                QuizError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Parses a TOML configuration string.
    pub fn from_toml_str(raw: &str) -> Result<Self, QuizError> {
        toml::from_str(raw).map_err(|err| {
            QuizError::Config(ErrorInfo::new("quiz_core.config_parse", err.to_string()))
        })
    }
}
