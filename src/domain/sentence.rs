// ============================================================
// Layer 3 - Sentence Domain Type
// ============================================================
// A sentence is an ordered run of single-byte characters.
// The pipeline never decodes UTF-8: every byte is one
// character and its numeric code is the byte value.
//
// Sentences are immutable once loaded.
//
// Reference: Rust Book §8 (Storing UTF-8 Encoded Text)

use std::fmt;

/// One question or answer line, stored as raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sentence {
    bytes: Vec<u8>,
}

impl Sentence {
    /// Build a sentence from anything that yields bytes.
    ///
    /// Example:
    ///   let s = Sentence::new("What time is it?");
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Number of characters (bytes) in the sentence
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Iterate over the characters by value, in order
    pub fn chars(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().copied()
    }
}

impl From<&str> for Sentence {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<&[u8]> for Sentence {
    fn from(b: &[u8]) -> Self {
        Self::new(b)
    }
}

/// Lossy display, for log lines only.
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}
