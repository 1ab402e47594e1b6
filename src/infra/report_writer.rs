// ============================================================
// Layer 6 - Report Writer
// ============================================================
// Serialises the encoded corpus to the plain-text report.
//
// Layout:
//   <title>
//   Dimension of letter embeddings: <alphabet size>
//   Number of QA pairs: <pair count>
//   Maximum embedding length: <max embedding length>
//   #####
//   Question:
//   <350 lines of 65 '0'/'1' symbols>
//   Answer:
//   <350 lines of 65 '0'/'1' symbols>
//   ---
//   ... one Question/Answer/--- block per pair
//
// The file is opened only after encoding has finished, so a
// failed run never leaves a partial report behind unless the
// write itself fails half way.
//
// Reference: Rust Book §12.5 (Writing to Files), std::io::BufWriter

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::embedding::{Alphabet, EncodedCorpus, EncodedSentence};
use crate::domain::error::EmbedError;
use crate::domain::traits::ReportSink;

/// Corpus-wide header fields of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub title:                String,
    pub alphabet_size:        usize,
    pub pair_count:           usize,
    pub max_embedding_length: usize,
}

impl ReportSummary {
    /// Gather the header fields from a finished encoding
    pub fn new(title: impl Into<String>, alphabet: &Alphabet, encoded: &EncodedCorpus) -> Self {
        Self {
            title:                title.into(),
            alphabet_size:        alphabet.len(),
            pair_count:           encoded.len(),
            max_embedding_length: encoded.max_embedding_length,
        }
    }
}

/// Writes reports to a file on disk.
/// Implements the ReportSink trait from Layer 3.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Writer targeting `path`; nothing is created until a report is written
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for ReportWriter {
    fn write_report(
        &self,
        title:    &str,
        alphabet: &Alphabet,
        encoded:  &EncodedCorpus,
    ) -> Result<(), EmbedError> {
        let file = File::create(&self.path).map_err(|e| EmbedError::output(&self.path, e))?;
        let mut out = BufWriter::new(file);

        let summary = ReportSummary::new(title, alphabet, encoded);
        write_report(&mut out, &summary, encoded)
            .and_then(|_| out.flush())
            .map_err(|e| EmbedError::output(&self.path, e))?;

        tracing::info!("Wrote report to '{}'", self.path.display());
        Ok(())
    }
}

/// Write the full report to any writer.
pub fn write_report<W: Write>(
    out:     &mut W,
    summary: &ReportSummary,
    encoded: &EncodedCorpus,
) -> io::Result<()> {
    writeln!(out, "{}", summary.title)?;
    writeln!(out, "Dimension of letter embeddings: {}", summary.alphabet_size)?;
    writeln!(out, "Number of QA pairs: {}", summary.pair_count)?;
    writeln!(out, "Maximum embedding length: {}", summary.max_embedding_length)?;
    writeln!(out, "#####")?;

    for pair in &encoded.pairs {
        writeln!(out, "Question:")?;
        write_sentence(out, &pair.question)?;
        writeln!(out, "Answer:")?;
        write_sentence(out, &pair.answer)?;
        writeln!(out, "---")?;
    }
    Ok(())
}

fn write_sentence<W: Write>(out: &mut W, sentence: &EncodedSentence) -> io::Result<()> {
    for vector in sentence.vectors() {
        writeln!(out, "{vector}")?;
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::alphabet::AlphabetBuilder;
    use crate::data::encoder::CorpusEncoder;
    use crate::domain::constants::{EMBEDDING_DIM, MAX_SENTENCE_LENGTH};
    use crate::domain::qa_pair::{Corpus, QaPair};

    fn render(corpus: &Corpus) -> String {
        let alphabet = AlphabetBuilder::collect(corpus);
        let encoded  = CorpusEncoder::new(&alphabet).encode_corpus(corpus);
        let summary  = ReportSummary::new("Test Report", &alphabet, &encoded);

        let mut buf = Vec::new();
        write_report(&mut buf, &summary, &encoded).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_lines() {
        let text  = render(&Corpus::new(vec![QaPair::new("ab", "ba")]));
        let lines: Vec<&str> = text.lines().take(6).collect();
        assert_eq!(
            lines,
            vec![
                "Test Report",
                "Dimension of letter embeddings: 2",
                "Number of QA pairs: 1",
                "Maximum embedding length: 130",
                "#####",
                "Question:",
            ]
        );
    }

    #[test]
    fn test_body_shape() {
        let text  = render(&Corpus::new(vec![QaPair::new("ab", "ba"), QaPair::new("a", "")]));
        let lines: Vec<&str> = text.lines().collect();

        // 5 header lines, then per pair: 2 labels + 2*350 vectors + separator
        assert_eq!(lines.len(), 5 + 2 * (3 + 2 * MAX_SENTENCE_LENGTH));

        let vectors: Vec<&&str> = lines
            .iter()
            .filter(|l| l.len() == EMBEDDING_DIM)
            .collect();
        assert_eq!(vectors.len(), 4 * MAX_SENTENCE_LENGTH);
        assert!(vectors.iter().all(|l| l.chars().all(|c| c == '0' || c == '1')));
    }

    #[test]
    fn test_first_vectors_match_alphabet() {
        let text  = render(&Corpus::new(vec![QaPair::new("ab", "ba")]));
        let lines: Vec<&str> = text.lines().collect();

        let expect_a = format!("1{}", "0".repeat(EMBEDDING_DIM - 1));
        let expect_b = format!("01{}", "0".repeat(EMBEDDING_DIM - 2));
        assert_eq!(lines[6], expect_a);
        assert_eq!(lines[7], expect_b);
        assert_eq!(lines[8], "0".repeat(EMBEDDING_DIM));

        let answer_at = 6 + MAX_SENTENCE_LENGTH;
        assert_eq!(lines[answer_at], "Answer:");
        assert_eq!(lines[answer_at + 1], expect_b);
        assert_eq!(lines.last().copied(), Some("---"));
    }

    #[test]
    fn test_writes_file() {
        let dir      = tempfile::tempdir().unwrap();
        let path     = dir.path().join("embeddings.txt");
        let corpus   = Corpus::new(vec![QaPair::new("ab", "ba")]);
        let alphabet = AlphabetBuilder::collect(&corpus);
        let encoded  = CorpusEncoder::new(&alphabet).encode_corpus(&corpus);

        ReportWriter::new(&path).write_report("T", &alphabet, &encoded).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("T\nDimension of letter embeddings: 2\n"));
    }

    #[test]
    fn test_unwritable_path_is_output_unavailable() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");
        let err  = ReportWriter::new(path)
            .write_report("T", &Alphabet::default(), &EncodedCorpus::default())
            .unwrap_err();
        assert!(matches!(err, EmbedError::OutputUnavailable { .. }));
    }
}
