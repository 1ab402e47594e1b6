// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The two I/O seams of the pipeline. The application layer
// only talks to these traits, so tests can feed an in-memory
// corpus or capture a report without touching the disk.
//
// Implementations:
//   - QaFileLoader  → CorpusSource over a Q:/A:/--- text file
//   - ReportWriter  → ReportSink writing the text report
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::embedding::{Alphabet, EncodedCorpus};
use crate::domain::error::EmbedError;
use crate::domain::qa_pair::Corpus;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the full corpus up front.
pub trait CorpusSource {
    /// Load every QA pair. Must fail with `EmptyCorpus`
    /// rather than return an empty corpus.
    fn load_corpus(&self) -> Result<Corpus, EmbedError>;
}

// ─── ReportSink ───────────────────────────────────────────────────────────────
/// Anything that can persist the finished embeddings.
pub trait ReportSink {
    /// Persist the header fields and every encoded pair.
    fn write_report(
        &self,
        title:    &str,
        alphabet: &Alphabet,
        encoded:  &EncodedCorpus,
    ) -> Result<(), EmbedError>;
}
