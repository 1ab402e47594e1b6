// ============================================================
// Layer 4 - Corpus Loader
// ============================================================
// Reads a line-oriented Q/A file into a Corpus.
//
// File format:
//   Q:<question>     → question of the current pair
//   A:<answer>       → answer of the current pair
//   ---              → closes the current pair, starts the next
//   anything else    → ignored
//
// Lines are raw bytes. Each line is cut at its first '\r',
// '\n' or NUL byte: nothing after an embedded NUL is part of
// the sentence, and Windows line endings never reach one.
//
// Edge cases:
//   - a pair is only counted when its `---` line is read;
//     a trailing Q:/A: with no `---` before EOF is dropped
//   - a second Q: (or A:) before `---` replaces the first
//   - a `---` with no Q:/A: before it still closes a pair,
//     with empty sentences on the missing side
//   - reading stops once MAX_PAIRS pairs are closed
//
// Reference: Rust Book §9 (Error Handling)
//            std::io::BufRead::read_until

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::{Path, PathBuf};

use crate::domain::constants::MAX_PAIRS;
use crate::domain::error::EmbedError;
use crate::domain::qa_pair::{Corpus, QaPair};
use crate::domain::sentence::Sentence;
use crate::domain::traits::CorpusSource;

/// Loads QA pairs from a text file on disk.
/// Implements the CorpusSource trait from Layer 3.
pub struct QaFileLoader {
    /// Path to the Q:/A:/--- input file
    path: PathBuf,
}

impl QaFileLoader {
    /// Create a loader pointed at a Q:/A:/--- file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for QaFileLoader {
    fn load_corpus(&self) -> Result<Corpus, EmbedError> {
        let file = File::open(&self.path).map_err(|e| EmbedError::input(&self.path, e))?;

        let corpus = parse_corpus(BufReader::new(file), &self.path)?;

        tracing::info!(
            "Loaded {} QA pairs from '{}'",
            corpus.len(),
            self.path.display()
        );
        Ok(corpus)
    }
}

// ─── Line Classification ──────────────────────────────────────────────────────
/// What a single input line means to the parser
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Question(&'a [u8]),
    Answer(&'a [u8]),
    Separator,
    Other,
}

fn classify(line: &[u8]) -> Line<'_> {
    if let Some(rest) = line.strip_prefix(b"Q:") {
        Line::Question(rest)
    } else if let Some(rest) = line.strip_prefix(b"A:") {
        Line::Answer(rest)
    } else if line.starts_with(b"---") {
        Line::Separator
    } else {
        Line::Other
    }
}

/// Cut a raw line at its first carriage return, newline or NUL.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .position(|&b| matches!(b, b'\r' | b'\n' | b'\0'))
        .unwrap_or(line.len());
    &line[..end]
}

// ─── Parser ───────────────────────────────────────────────────────────────────
/// Parse a Q:/A:/--- stream into a corpus.
///
/// `origin` is only used to label errors. Fails with
/// `EmptyCorpus` when no pair was closed, and with
/// `AllocationFailure` if the pair buffer cannot be reserved.
pub fn parse_corpus<R: BufRead>(mut reader: R, origin: &Path) -> Result<Corpus, EmbedError> {
    // The whole pair buffer is reserved before the first line is read
    let mut pairs: Vec<QaPair> = Vec::new();
    pairs
        .try_reserve(MAX_PAIRS)
        .map_err(|source| EmbedError::AllocationFailure { requested: MAX_PAIRS, source })?;

    let mut question = Sentence::default();
    let mut answer   = Sentence::default();
    let mut dirty    = false;
    let mut buf      = Vec::new();

    while pairs.len() < MAX_PAIRS {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| EmbedError::input(origin, e))?;
        if read == 0 {
            break;
        }

        match classify(strip_line_ending(&buf)) {
            Line::Question(text) => {
                question = Sentence::from(text);
                dirty = true;
            }
            Line::Answer(text) => {
                answer = Sentence::from(text);
                dirty = true;
            }
            Line::Separator => {
                pairs.push(QaPair::new(mem::take(&mut question), mem::take(&mut answer)));
                dirty = false;
            }
            Line::Other => {}
        }
    }

    if pairs.len() == MAX_PAIRS {
        tracing::debug!("Stopped reading '{}' at the {} pair limit", origin.display(), MAX_PAIRS);
    } else if dirty {
        tracing::debug!(
            "Discarding unterminated pair at end of '{}'",
            origin.display()
        );
    }

    if pairs.is_empty() {
        return Err(EmbedError::EmptyCorpus { path: origin.to_path_buf() });
    }

    Ok(Corpus::new(pairs))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::alphabet::AlphabetBuilder;
    use std::io::Cursor;
    use std::io::Write;

    fn parse(text: &str) -> Result<Corpus, EmbedError> {
        parse_corpus(Cursor::new(text.as_bytes().to_vec()), Path::new("test.txt"))
    }

    #[test]
    fn test_single_pair() {
        let corpus = parse("Q:ab\nA:ba\n---\n").unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.pairs()[0], QaPair::new("ab", "ba"));
    }

    #[test]
    fn test_strips_crlf() {
        let corpus = parse("Q:hi\r\nA:yo\r\n---\r\n").unwrap();
        assert_eq!(corpus.pairs()[0], QaPair::new("hi", "yo"));
    }

    #[test]
    fn test_line_is_cut_at_nul() {
        let corpus = parse("Q:a\0b\nA:c\n---\n").unwrap();
        assert_eq!(corpus.pairs()[0].question, Sentence::from("a"));
        assert_eq!(corpus.pairs()[0].answer, Sentence::from("c"));

        let alphabet = AlphabetBuilder::collect(&corpus);
        assert_eq!(alphabet.symbols(), b"ac");
        assert_eq!(alphabet.len(), 2);
    }

    #[test]
    fn test_nul_before_prefix_blanks_the_line() {
        let corpus = parse("\0Q:hidden\nQ:q\nA:a\n---\n").unwrap();
        assert_eq!(corpus.pairs()[0], QaPair::new("q", "a"));
    }

    #[test]
    fn test_other_lines_are_ignored() {
        let corpus = parse("# header\nQ:x\nnoise\nA:y\n\n---\ntrailing\n").unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.pairs()[0], QaPair::new("x", "y"));
    }

    #[test]
    fn test_unterminated_pair_is_not_counted() {
        let corpus = parse("Q:one\nA:1\n---\nQ:two\n").unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_only_unterminated_pair_is_empty_corpus() {
        let err = parse("Q:lonely question\n").unwrap_err();
        assert!(matches!(err, EmbedError::EmptyCorpus { .. }));
    }

    #[test]
    fn test_empty_input_is_empty_corpus() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, EmbedError::EmptyCorpus { .. }));
    }

    #[test]
    fn test_later_question_replaces_earlier() {
        let corpus = parse("Q:first\nQ:second\nA:a\n---\n").unwrap();
        assert_eq!(corpus.pairs()[0].question, Sentence::from("second"));
    }

    #[test]
    fn test_bare_separator_closes_empty_pair() {
        let corpus = parse("---\nQ:q\n---\n").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.pairs()[0], QaPair::default());
        assert_eq!(corpus.pairs()[1], QaPair::new("q", ""));
    }

    #[test]
    fn test_separator_with_trailing_text() {
        let corpus = parse("Q:q\nA:a\n------ end ------\n").unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_stops_at_pair_limit() {
        let mut text = String::new();
        for i in 0..MAX_PAIRS + 5 {
            text.push_str(&format!("Q:{i}\nA:{i}\n---\n"));
        }
        let corpus = parse(&text).unwrap();
        assert_eq!(corpus.len(), MAX_PAIRS);
        assert_eq!(corpus.pairs()[MAX_PAIRS - 1].question.to_string(), (MAX_PAIRS - 1).to_string());
    }

    #[test]
    fn test_non_utf8_bytes_survive() {
        let mut raw = b"Q:caf".to_vec();
        raw.push(0xE9);
        raw.extend_from_slice(b"\nA:x\n---\n");
        let corpus = parse_corpus(Cursor::new(raw), Path::new("latin1.txt")).unwrap();
        assert_eq!(corpus.pairs()[0].question, Sentence::new(vec![b'c', b'a', b'f', 0xE9]));
    }

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let dir    = tempfile::tempdir().unwrap();
        let loader = QaFileLoader::new(dir.path().join("nope.txt"));
        let err    = loader.load_corpus().unwrap_err();
        assert!(matches!(err, EmbedError::InputUnavailable { .. }));
    }

    #[test]
    fn test_loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Q:ab\nA:ba\n---\n").unwrap();

        let corpus = QaFileLoader::new(file.path()).load_corpus().unwrap();
        assert_eq!(corpus.len(), 1);
    }
}
