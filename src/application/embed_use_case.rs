// ============================================================
// Layer 2 - EmbedUseCase
// ============================================================
// Runs the full embedding pipeline in order:
//
//   Step 1: Load QA pairs              (Layer 4 - data)
//   Step 2: Build the alphabet         (Layer 4 - data)
//   Step 3: Encode every sentence      (Layer 4 - data)
//   Step 4: Write the text report      (Layer 6 - infra)
//   Step 5: Write the JSON summary     (Layer 6 - infra, optional)
//
// Any failure in steps 1-4 is fatal; nothing is retried.
//
// Reference: Rust Book §10 (Generic Types and Traits)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{alphabet::AlphabetBuilder, encoder::CorpusEncoder, loader::QaFileLoader};
use crate::domain::traits::{CorpusSource, ReportSink};
use crate::infra::{
    config_store::ConfigStore,
    report_writer::{ReportSummary, ReportWriter},
};

pub const DEFAULT_INPUT_PATH: &str = "database.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "embeddings.txt";
pub const DEFAULT_TITLE: &str = "CSE102 Assignment 9";

// ─── Embedding Configuration ─────────────────────────────────────────────────
// Only file locations and the report title are configurable.
// Alphabet cap, width and lengths live in domain::constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    pub input_path:   PathBuf,
    pub output_path:  PathBuf,
    pub title:        String,
    pub summary_path: Option<PathBuf>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            input_path:   PathBuf::from(DEFAULT_INPUT_PATH),
            output_path:  PathBuf::from(DEFAULT_OUTPUT_PATH),
            title:        DEFAULT_TITLE.to_string(),
            summary_path: None,
        }
    }
}

// ─── EmbedUseCase ─────────────────────────────────────────────────────────────
pub struct EmbedUseCase {
    config: EmbedConfig,
}

impl EmbedUseCase {
    /// Use case bound to one resolved configuration
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// Run against the configured input and output files.
    pub fn execute(&self) -> Result<ReportSummary> {
        let cfg = &self.config;

        tracing::info!("Reading QA pairs from '{}'", cfg.input_path.display());
        let loader = QaFileLoader::new(&cfg.input_path);
        let writer = ReportWriter::new(&cfg.output_path);

        let summary = self.run(&loader, &writer)?;

        // ── Step 5: Optional JSON summary ─────────────────────────────────────
        if let Some(path) = &cfg.summary_path {
            ConfigStore::save_summary(path, &summary)?;
        }

        Ok(summary)
    }

    /// Run the pipeline against any source and sink.
    pub fn run<S, K>(&self, source: &S, sink: &K) -> Result<ReportSummary>
    where
        S: CorpusSource,
        K: ReportSink,
    {
        // ── Step 1: Load the whole corpus ─────────────────────────────────────
        let corpus = source.load_corpus()?;

        // ── Step 2: Alphabet ──────────────────────────────────────────────────
        let alphabet = AlphabetBuilder::collect(&corpus);
        tracing::info!("Dimension of letter embeddings: {}", alphabet.len());

        // ── Step 3: Encode ────────────────────────────────────────────────────
        let encoded = CorpusEncoder::new(&alphabet).encode_corpus(&corpus);

        // ── Step 4: Report ────────────────────────────────────────────────────
        sink.write_report(&self.config.title, &alphabet, &encoded)?;

        Ok(ReportSummary::new(self.config.title.clone(), &alphabet, &encoded))
    }
}
