// ============================================================
// Layer 3 - QaPair and Corpus Domain Types
// ============================================================
// A QA pair is one question sentence and one answer sentence.
// The corpus is the ordered list of pairs in file order.
//
// File order matters: report section N always belongs to
// pair N, and alphabet capping keeps the characters that were
// seen first while walking question-then-answer, pair by pair.
//
// Example input:
//   Q:What is 2+2?
//   A:4
//   ---
// becomes QaPair { question: "What is 2+2?", answer: "4" }
//
// Reference: Rust Book §5 (Structs), §13 (Iterators)

use crate::domain::sentence::Sentence;

/// One question/answer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaPair {
    /// The text after `Q:`
    pub question: Sentence,

    /// The text after `A:`
    pub answer: Sentence,
}

impl QaPair {
    /// Create a new QaPair from anything convertible to a Sentence
    pub fn new(question: impl Into<Sentence>, answer: impl Into<Sentence>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }

    /// Question first, then answer
    pub fn sentences(&self) -> [&Sentence; 2] {
        [&self.question, &self.answer]
    }
}

/// The whole input file, fully materialised in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pairs: Vec<QaPair>,
}

impl Corpus {
    /// Wrap pairs that are already in file order
    pub fn new(pairs: Vec<QaPair>) -> Self {
        Self { pairs }
    }

    /// Number of QA pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// The pairs in file order
    pub fn pairs(&self) -> &[QaPair] {
        &self.pairs
    }

    /// Every sentence in traversal order:
    /// pair 0 question, pair 0 answer, pair 1 question, ...
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> + '_ {
        self.pairs.iter().flat_map(|p| p.sentences())
    }
}
