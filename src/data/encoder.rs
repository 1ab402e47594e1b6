// ============================================================
// Layer 4 - One-Hot and Corpus Encoders
// ============================================================
// OneHotEncoder: character → OneHotVector
//   Position j is set iff j < alphabet.len() and
//   alphabet[j] == c, for j in 0..EMBEDDING_DIM. A character
//   that is missing, or sits at alphabet index >= 65, encodes
//   as the all-unset vector. That is a normal result.
//
// CorpusEncoder: Corpus → EncodedCorpus
//   Every question and answer becomes MAX_SENTENCE_LENGTH
//   vectors: real characters first, all-unset padding after.
//   Characters past MAX_SENTENCE_LENGTH are dropped.
//
//   "Maximum embedding length" is the largest, over every
//   question and answer, of the summed rendered length of the
//   vectors actually written for that sentence. Every rendered
//   vector is 65 symbols, so this equals
//   min(len, MAX_SENTENCE_LENGTH) * 65 for the longest sentence.
//
// Reference: Rust Book §10.3 (Lifetimes)

use crate::domain::embedding::{Alphabet, EncodedCorpus, EncodedPair, EncodedSentence, OneHotVector};
use crate::domain::qa_pair::Corpus;
use crate::domain::sentence::Sentence;

// ─── OneHotEncoder ────────────────────────────────────────────────────────────
/// Encodes single characters against a fixed alphabet.
#[derive(Debug, Clone, Copy)]
pub struct OneHotEncoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> OneHotEncoder<'a> {
    /// Borrow the alphabet for the lifetime of the encoder
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Never fails; "no match" is the all-unset vector.
    pub fn encode(&self, c: u8) -> OneHotVector {
        self.alphabet
            .index_of(c)
            .and_then(OneHotVector::set_at)
            .unwrap_or_default()
    }
}

// ─── CorpusEncoder ────────────────────────────────────────────────────────────
/// Applies the one-hot encoder to a whole corpus.
#[derive(Debug, Clone, Copy)]
pub struct CorpusEncoder<'a> {
    encoder: OneHotEncoder<'a>,
}

impl<'a> CorpusEncoder<'a> {
    /// Encoder over a finished alphabet
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { encoder: OneHotEncoder::new(alphabet) }
    }

    /// Encode one sentence into a fixed-length, padded sequence.
    pub fn encode_sentence(&self, sentence: &Sentence) -> EncodedSentence {
        let mut encoded = EncodedSentence::blank(sentence.len());
        for c in sentence.chars() {
            if !encoded.push(self.encoder.encode(c)) {
                break;
            }
        }
        encoded
    }

    /// Encode every pair, tracking the maximum embedding length.
    pub fn encode_corpus(&self, corpus: &Corpus) -> EncodedCorpus {
        let mut out = EncodedCorpus {
            pairs: Vec::with_capacity(corpus.len()),
            max_embedding_length: 0,
        };

        for pair in corpus.pairs() {
            let question = self.encode_sentence(&pair.question);
            let answer   = self.encode_sentence(&pair.answer);

            out.max_embedding_length = out
                .max_embedding_length
                .max(question.embedding_length())
                .max(answer.embedding_length());

            out.pairs.push(EncodedPair { question, answer });
        }

        let truncated = out.truncated_sentences();
        if truncated > 0 {
            tracing::debug!("{} sentences truncated to the maximum sentence length", truncated);
        }
        tracing::info!(
            "Encoded {} QA pairs (max embedding length {})",
            out.len(),
            out.max_embedding_length
        );
        out
    }
}
