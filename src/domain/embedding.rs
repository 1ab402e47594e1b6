// ============================================================
// Layer 3 - Embedding Domain Types
// ============================================================
// The values produced by the embedding pipeline:
//
//   Alphabet        - distinct characters, ascending by code
//   OneHotVector    - EMBEDDING_DIM positions, at most one set
//   EncodedSentence - MAX_SENTENCE_LENGTH one-hot vectors
//   EncodedCorpus   - one encoded question + answer per pair,
//                     plus the corpus-wide max embedding length
//
// All of them are plain values: built once, then read-only.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)
//            std::fmt::Display for the '0'/'1' rendering

use std::fmt::{self, Write as _};

use crate::domain::constants::{EMBEDDING_DIM, MAX_CHAR, MAX_SENTENCE_LENGTH, SET_SYMBOL, UNSET_SYMBOL};

// ─── Alphabet ─────────────────────────────────────────────────────────────────
/// Distinct characters of a corpus, sorted ascending by byte value.
///
/// Invariants: no duplicates, strictly ascending, at most
/// [`MAX_CHAR`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,

    /// Distinct characters that arrived after the cap was full
    dropped: usize,
}

impl Alphabet {
    /// Build an alphabet from already-accepted characters.
    /// Sorts and dedups so the ordering invariant holds for any input.
    pub fn new(mut symbols: Vec<u8>, dropped: usize) -> Self {
        symbols.sort_unstable();
        symbols.dedup();
        debug_assert!(symbols.len() <= MAX_CHAR);
        Self { symbols, dropped }
    }

    /// The "embedding-relevant alphabet size" written to the report
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the corpus held no characters at all
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The characters in alphabet order (ascending byte value)
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Position of `c` in the sorted alphabet, if present
    pub fn index_of(&self, c: u8) -> Option<usize> {
        self.symbols.binary_search(&c).ok()
    }

    /// How many distinct characters were ignored because of the cap
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Alphabet entries at index >= EMBEDDING_DIM.
    /// These can never be encoded as "set".
    pub fn unrepresentable(&self) -> &[u8] {
        self.symbols().get(EMBEDDING_DIM..).unwrap_or(&[])
    }
}

/// Printable listing, non-printable bytes escaped (`\n`, `\x7f`, ...).
impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.symbols() {
            for e in std::ascii::escape_default(c) {
                f.write_char(e as char)?;
            }
        }
        Ok(())
    }
}

// ─── OneHotVector ─────────────────────────────────────────────────────────────
/// A fixed-width indicator vector with at most one "set" position.
///
/// Only the set index is stored; the width is always
/// [`EMBEDDING_DIM`]. `Default` is the all-unset vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OneHotVector {
    hot: Option<usize>,
}

impl OneHotVector {
    /// The all-unset vector (padding, or "no match")
    pub const fn unset() -> Self {
        Self { hot: None }
    }

    /// A vector with `index` set, or `None` when `index` is
    /// outside the fixed width.
    pub fn set_at(index: usize) -> Option<Self> {
        (index < EMBEDDING_DIM).then_some(Self { hot: Some(index) })
    }

    /// Always [`EMBEDDING_DIM`]
    pub const fn width(&self) -> usize {
        EMBEDDING_DIM
    }

    /// The single set position, or `None` for an all-unset vector
    pub fn hot_index(&self) -> Option<usize> {
        self.hot
    }

    /// Length of the textual rendering: one symbol per position
    pub const fn rendered_len(&self) -> usize {
        self.width()
    }
}

/// `'1'` for the set position, `'0'` everywhere else.
impl fmt::Display for OneHotVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hot = self.hot_index();
        for j in 0..EMBEDDING_DIM {
            f.write_char(if hot == Some(j) { SET_SYMBOL } else { UNSET_SYMBOL })?;
        }
        Ok(())
    }
}

// ─── EncodedSentence ──────────────────────────────────────────────────────────
/// Exactly [`MAX_SENTENCE_LENGTH`] one-hot vectors.
///
/// Positions `0..written` come from real characters, the rest
/// stay all-unset padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSentence {
    vectors: Vec<OneHotVector>,

    /// Number of positions populated from real characters
    written: usize,

    /// Length of the source sentence before truncation
    source_len: usize,

    /// Sum of the rendered length of every written vector
    embedding_length: usize,
}

impl EncodedSentence {
    /// A sentence of all-unset vectors, ready to be populated
    pub fn blank(source_len: usize) -> Self {
        Self {
            vectors: vec![OneHotVector::unset(); MAX_SENTENCE_LENGTH],
            written: 0,
            source_len,
            embedding_length: 0,
        }
    }

    /// Store the vector for the next real character.
    /// Returns `false` once the sentence is full.
    pub fn push(&mut self, vector: OneHotVector) -> bool {
        match self.vectors.get_mut(self.written) {
            Some(slot) => {
                *slot = vector;
                self.written += 1;
                self.embedding_length += vector.rendered_len();
                true
            }
            None => false,
        }
    }

    /// All MAX_SENTENCE_LENGTH vectors, padding included
    pub fn vectors(&self) -> &[OneHotVector] {
        &self.vectors
    }

    /// Number of vectors that came from real characters
    pub fn written(&self) -> usize {
        self.written
    }

    /// True when characters past MAX_SENTENCE_LENGTH were dropped
    pub fn is_truncated(&self) -> bool {
        self.source_len > self.written()
    }

    /// Summed rendered length of the written vectors
    pub fn embedding_length(&self) -> usize {
        self.embedding_length
    }
}

/// Encoded question and answer of one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPair {
    pub question: EncodedSentence,
    pub answer:   EncodedSentence,
}

/// Every pair encoded, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedCorpus {
    pub pairs: Vec<EncodedPair>,

    /// Largest per-sentence embedding length over all questions and answers
    pub max_embedding_length: usize,
}

impl EncodedCorpus {
    /// Number of encoded pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Number of questions and answers that lost characters to the length cap
    pub fn truncated_sentences(&self) -> usize {
        self.pairs
            .iter()
            .flat_map(|p| [&p.question, &p.answer])
            .filter(|s| s.is_truncated())
            .count()
    }
}
