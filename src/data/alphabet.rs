// ============================================================
// Layer 4 - Alphabet Builder
// ============================================================
// Collects the distinct characters of a corpus and returns
// them sorted ascending by byte value.
//
// Capacity rule: the first MAX_CHAR distinct characters met
// while walking the corpus are kept. Later new characters are
// silently ignored (counted in Alphabet::dropped). Walk order
// is pair by pair, question before answer, left to right.
//
// Below the cap the result depends only on WHICH characters
// occur, never on where they occur.
//
// Reference: std::collections::BTreeSet

use std::collections::BTreeSet;

use crate::domain::constants::MAX_CHAR;
use crate::domain::embedding::Alphabet;
use crate::domain::qa_pair::Corpus;
use crate::domain::sentence::Sentence;

/// Incremental dedup set with a hard capacity.
#[derive(Debug, Default)]
pub struct AlphabetBuilder {
    accepted: BTreeSet<u8>,
    rejected: BTreeSet<u8>,
}

impl AlphabetBuilder {
    /// Start with nothing accepted
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the alphabet of a whole corpus.
    pub fn collect(corpus: &Corpus) -> Alphabet {
        let mut builder = Self::new();
        for sentence in corpus.sentences() {
            builder.extend_from(sentence);
        }
        let alphabet = builder.finish();

        if alphabet.is_empty() {
            tracing::debug!("Corpus holds no characters, every vector will be unset");
        }
        tracing::debug!(
            "Alphabet: {} characters ({} dropped by cap, {} beyond embedding width)",
            alphabet.len(),
            alphabet.dropped(),
            alphabet.unrepresentable().len(),
        );
        alphabet
    }

    /// Offer one character. Returns true if it is (now) part of
    /// the alphabet, false if the cap kept it out.
    pub fn insert(&mut self, c: u8) -> bool {
        if self.accepted.contains(&c) {
            return true;
        }
        if self.accepted.len() < MAX_CHAR {
            self.accepted.insert(c);
            true
        } else {
            self.rejected.insert(c);
            false
        }
    }

    /// Offer every character of a sentence, left to right
    pub fn extend_from(&mut self, sentence: &Sentence) {
        for c in sentence.chars() {
            self.insert(c);
        }
    }

    /// Freeze into the sorted alphabet.
    pub fn finish(self) -> Alphabet {
        // BTreeSet iterates in ascending order already
        Alphabet::new(self.accepted.into_iter().collect(), self.rejected.len())
    }
}
