//! TOML configuration file
//!
//! The file holds an optional `[analysis]` table; omitted keys keep their
//! defaults and out-of-range values are rejected while parsing.
//!
//! ```toml
//! [analysis]
//! tolerance_percentage = 20.0
//! case_sensitive = true
//! max_file_size_mb = 50.0
//! ```

use anyhow::Context;
use docdiff_engine::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}
