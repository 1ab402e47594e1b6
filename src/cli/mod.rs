// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to a use case.
// Only this layer prints to stdout.
//
// Exit status: main returns the error, which prints the
// diagnostic chain to stderr and exits with code 1.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EmbedArgs, InspectArgs};

use crate::application::embed_use_case::{EmbedConfig, EmbedUseCase};
use crate::application::inspect_use_case::InspectUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "qa-char-embed",
    version,
    about = "One-hot character embeddings for a Q:/A:/--- question/answer file."
)]
pub struct Cli {
    /// Defaults to `embed` with default paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Dispatch to the selected subcommand
    pub fn run(self) -> Result<()> {
        match self.command {
            None                          => run_embed(EmbedArgs::default()),
            Some(Commands::Embed(args))   => run_embed(args),
            Some(Commands::Inspect(args)) => run_inspect(args),
        }
    }
}

/// Handles `embed` (and the bare invocation).
fn run_embed(args: EmbedArgs) -> Result<()> {
    let config = EmbedConfig::try_from(args)?;
    let output = config.output_path.clone();

    EmbedUseCase::new(config).execute()?;

    println!("{} generated successfully.", output.display());
    Ok(())
}

/// Handles `inspect`.
fn run_inspect(args: InspectArgs) -> Result<()> {
    let inspection = InspectUseCase::new(args.input).execute()?;
    println!("{inspection}");
    Ok(())
}
