// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Two subcommands, both optional to type:
//
//   embed   - build the report (what runs with no arguments)
//   inspect - print the corpus summary, write nothing
//
// Every flag has a default matching the fixed paths, so a
// bare invocation reads database.txt and writes embeddings.txt.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::embed_use_case::{EmbedConfig, DEFAULT_INPUT_PATH};
use crate::infra::config_store::ConfigStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode the QA file and write the embeddings report
    Embed(EmbedArgs),

    /// Print alphabet and corpus statistics without writing a report
    Inspect(InspectArgs),
}

/// Arguments for `embed`. Every field is optional so that a
/// JSON config file can supply it instead.
#[derive(Args, Debug, Default, Clone)]
pub struct EmbedArgs {
    /// Q:/A:/--- input file [default: database.txt]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Report destination [default: embeddings.txt]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// First line of the report
    #[arg(long)]
    pub title: Option<String>,

    /// Also write the report header fields as JSON to this path
    #[arg(long = "summary-json")]
    pub summary_json: Option<PathBuf>,

    /// JSON file with EmbedConfig fields; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Flags win over the config file, the config file wins over defaults.
impl TryFrom<EmbedArgs> for EmbedConfig {
    type Error = anyhow::Error;

    fn try_from(a: EmbedArgs) -> Result<Self> {
        let mut cfg = match &a.config {
            Some(path) => ConfigStore::load_config(path)?,
            None       => EmbedConfig::default(),
        };

        if let Some(input) = a.input {
            cfg.input_path = input;
        }
        if let Some(output) = a.output {
            cfg.output_path = output;
        }
        if let Some(title) = a.title {
            cfg.title = title;
        }
        if a.summary_json.is_some() {
            cfg.summary_path = a.summary_json;
        }
        Ok(cfg)
    }
}

/// Arguments for `inspect`
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Q:/A:/--- input file
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,
}
