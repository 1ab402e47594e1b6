// ============================================================
// Layer 2 - InspectUseCase
// ============================================================
// Runs load → alphabet → encode without writing a report and
// returns what the report header would say, plus the lossy
// details that the report itself never shows.
//
// Reference: Rust Book §10.2 (Traits), std::fmt::Display

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

use crate::data::{alphabet::AlphabetBuilder, encoder::CorpusEncoder, loader::QaFileLoader};
use crate::domain::embedding::Alphabet;
use crate::domain::traits::CorpusSource;

/// Everything `inspect` prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub alphabet:             Alphabet,
    pub pair_count:           usize,
    pub max_embedding_length: usize,
    pub truncated_sentences:  usize,
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimension of letter embeddings: {}", self.alphabet.len())?;
        writeln!(f, "Alphabet: {}", self.alphabet)?;
        writeln!(f, "Number of QA pairs: {}", self.pair_count)?;
        writeln!(f, "Maximum embedding length: {}", self.max_embedding_length)?;
        writeln!(f, "Characters dropped by alphabet cap: {}", self.alphabet.dropped())?;
        writeln!(
            f,
            "Characters beyond embedding width: {}",
            self.alphabet.unrepresentable().len()
        )?;
        write!(f, "Truncated sentences: {}", self.truncated_sentences)
    }
}

pub struct InspectUseCase {
    input_path: PathBuf,
}

impl InspectUseCase {
    /// Inspect the Q:/A:/--- file at `input_path`
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self { input_path: input_path.into() }
    }

    /// Inspect the configured file on disk
    pub fn execute(&self) -> Result<Inspection> {
        self.inspect(&QaFileLoader::new(&self.input_path))
    }

    /// Load, collect and encode, keeping only the counts
    pub fn inspect<S: CorpusSource>(&self, source: &S) -> Result<Inspection> {
        let corpus   = source.load_corpus()?;
        let alphabet = AlphabetBuilder::collect(&corpus);
        let encoded  = CorpusEncoder::new(&alphabet).encode_corpus(&corpus);

        Ok(Inspection {
            pair_count:           encoded.len(),
            max_embedding_length: encoded.max_embedding_length,
            truncated_sentences:  encoded.truncated_sentences(),
            alphabet,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_inspect_reports_lossy_details() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = dir.path().join("database.txt");
        let input = format!("Q:{}\nA:b a\n---\n", "a".repeat(360));
        fs::write(&path, input).unwrap();

        let report = InspectUseCase::new(&path).execute().unwrap();
        assert_eq!(report.alphabet.symbols(), b" ab");
        assert_eq!(report.pair_count, 1);
        assert_eq!(report.truncated_sentences, 1);

        let text = report.to_string();
        assert!(text.contains("Alphabet:  ab"));
        assert!(text.contains("Truncated sentences: 1"));
    }

    #[test]
    fn test_inspect_does_not_write_report() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.txt");
        fs::write(&path, "Q:x\nA:y\n---\n").unwrap();

        InspectUseCase::new(&path).execute().unwrap();
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
