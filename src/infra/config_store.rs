// ============================================================
// Layer 6 - Config and Summary Store
// ============================================================
// JSON persistence for the two serde types of the crate:
//
//   EmbedConfig   - read from `--config <file>` (optional)
//   ReportSummary - written to `--summary-json <file>` (optional)
//
// Example config file:
//   {
//     "input_path":  "data/database.txt",
//     "output_path": "out/embeddings.txt",
//     "title":       "CSE102 Assignment 9"
//   }
// Missing fields fall back to EmbedConfig::default().
//
// Reference: serde_json crate documentation

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::embed_use_case::EmbedConfig;
use crate::infra::report_writer::ReportSummary;

/// Stateless JSON reader/writer for config and summary files.
pub struct ConfigStore;

impl ConfigStore {
    /// Load an EmbedConfig from a JSON file.
    pub fn load_config(path: &Path) -> Result<EmbedConfig> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }

    /// Write the report summary as pretty JSON next to the report.
    pub fn save_summary(path: &Path, summary: &ReportSummary) -> Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write summary to '{}'", path.display()))?;

        tracing::debug!("Saved report summary to '{}'", path.display());
        Ok(())
    }
}
