// ============================================================
// Layer 3 - Fatal Error Taxonomy
// ============================================================
// Every failure that stops the pipeline. Each one ends the
// process with exit code 1 after a short diagnostic.
//
// Alphabet overflow and the 65-wide representation gap are
// NOT here: they are silent and only visible in the data.
//
// The io cause is attached as the error source, not repeated
// in the message, so anyhow prints it once under "Caused by".
//
// Reference: Rust Book §9 (Error Handling), thiserror docs

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    /// The input file could not be opened or read.
    #[error("Error opening input file '{}'", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input was readable but held no complete QA pair.
    #[error("No QA pairs found in '{}'", .path.display())]
    EmptyCorpus { path: PathBuf },

    /// The report destination could not be opened or written.
    #[error("Failed to open output file '{}'", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The up-front corpus buffer could not be reserved.
    #[error("Memory allocation failed for {requested} QA pairs")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

impl EmbedError {
    /// InputUnavailable for `path`
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputUnavailable { path: path.into(), source }
    }

    /// OutputUnavailable for `path`
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputUnavailable { path: path.into(), source }
    }
}
