// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain data types, fixed limits, the error taxonomy and the
// I/O traits. No file access and no logging happen here.
//
// Everything the embedding pipeline passes between stages is
// defined in this layer:
//   Sentence → QaPair → Corpus → Alphabet → EncodedCorpus
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Compile-time limits (alphabet cap, width, lengths)
pub mod constants;

/// Single-byte sentence type
pub mod sentence;

/// A question/answer record and the ordered corpus
pub mod qa_pair;

/// Alphabet, one-hot vectors and encoded sentences
pub mod embedding;

/// Fatal pipeline errors
pub mod error;

/// Loader and report seams
pub mod traits;
