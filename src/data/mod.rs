// ============================================================
// Layer 4 - Embedding Pipeline
// ============================================================
// Everything from the raw Q/A file to the encoded corpus.
//
//   database.txt
//       │
//       ▼
//   QaFileLoader      → reads Q:/A:/--- lines into a Corpus
//       │
//       ▼
//   AlphabetBuilder   → distinct characters, capped, sorted
//       │
//       ▼
//   CorpusEncoder     → padded one-hot sentences + max length
//       (uses OneHotEncoder per character)
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §7 (Modules), §13 (Iterators)

/// Parses the Q:/A:/--- text format
pub mod loader;

/// Builds the sorted, capped alphabet
pub mod alphabet;

/// One-hot and whole-corpus encoding
pub mod encoder;
