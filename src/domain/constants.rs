// ============================================================
// Layer 3 - Fixed Limits
// ============================================================
// Every size in the embedding pipeline is a compile-time
// constant. None of these are exposed as configuration.
//
//   MAX_CHAR            - distinct characters the alphabet keeps
//   MAX_PAIRS           - QA pairs read from the input file
//   EMBEDDING_DIM       - width of every one-hot vector
//   MAX_SENTENCE_LENGTH - vectors per encoded sentence
//
// Note that EMBEDDING_DIM < MAX_CHAR: alphabet entries at
// index 65..128 are kept but can never be encoded as "set".
//
// Reference: Rust Book §3.1 (Constants)

/// Maximum number of distinct characters in the alphabet.
pub const MAX_CHAR: usize = 128;

/// Maximum number of QA pairs parsed from one input file.
pub const MAX_PAIRS: usize = 2048;

/// Width of every one-hot vector, independent of alphabet size.
pub const EMBEDDING_DIM: usize = 65;

/// Number of one-hot vectors in every encoded sentence.
pub const MAX_SENTENCE_LENGTH: usize = 350;

/// Rendered symbol for a "set" position.
pub const SET_SYMBOL: char = '1';

/// Rendered symbol for an "unset" position.
pub const UNSET_SYMBOL: char = '0';
