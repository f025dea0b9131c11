//! Lazy sentence readers.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    mem,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    CorpusError, Dialect, Sentence, TextEncoding,
    format::{Line, LineFormat, format_for},
};

/// Reader over a file in any supported dialect.
pub type CorpusReader = SentenceReader<BufReader<File>, Box<dyn LineFormat>>;

/// Opens `path` as a corpus in `dialect`.
pub fn open_corpus(path: &Path, dialect: Dialect) -> Result<CorpusReader, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SentenceReader::new(BufReader::new(file), format_for(dialect), path))
}

/// Assembles sentences from the lines of a corpus.
///
/// Yields each non-empty sentence once it is closed by a boundary line or by
/// the end of input. Stops after the first error.
pub struct SentenceReader<R, F> {
    /// Underlying byte stream.
    input: R,
    /// Dialect line parser.
    format: F,
    /// Path used in error messages.
    path: PathBuf,
    /// Number of lines consumed so far.
    line: usize,
    /// Reusable line buffer.
    buf: Vec<u8>,
    /// Sentence under construction.
    current: Sentence,
    /// Set once input is exhausted or an error was returned.
    done: bool,
}

impl<R: BufRead, F: LineFormat> SentenceReader<R, F> {
    /// Creates a reader. `path` is only used for error reporting.
    pub fn new(input: R, format: F, path: &Path) -> Self {
        let current = Sentence::new(format.dialect().name());
        Self {
            input,
            format,
            path: path.to_path_buf(),
            line: 0,
            buf: Vec::new(),
            current,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Replaces the sentence under construction, returning the old one if non-empty.
    fn take_current(&mut self) -> Option<Sentence> {
        let fresh = Sentence::new(self.format.dialect().name());
        let previous = mem::replace(&mut self.current, fresh);
        (!previous.is_empty()).then_some(previous)
    }

    /// Reads the next line into `buf`, decoded. Returns `None` at end of input.
    fn next_line(&mut self) -> Option<Result<String, CorpusError>> {
        self.buf.clear();
        match self.input.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
                    self.buf.pop();
                }
                Some(self.decode())
            }
            Err(source) => Some(Err(CorpusError::ReadFile {
                path: self.path.clone(),
                source,
            })),
        }
    }

    /// Decodes `buf` according to the dialect's encoding.
    fn decode(&self) -> Result<String, CorpusError> {
        match self.format.encoding() {
            TextEncoding::Latin1 => Ok(self.buf.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Utf8 => String::from_utf8(self.buf.clone()).map_err(|_| {
                CorpusError::InvalidUtf8 {
                    path: self.path.clone(),
                    line: self.line,
                }
            }),
        }
    }

    /// Marks the reader finished and returns `err`.
    fn fail(&mut self, err: CorpusError) -> Option<Result<Sentence, CorpusError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<R: BufRead, F: LineFormat> Iterator for SentenceReader<R, F> {
    type Item = Result<Sentence, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let text = match self.next_line() {
                None => {
                    self.done = true;
                    return self.take_current().map(Ok);
                }
                Some(Err(err)) => return self.fail(err),
                Some(Ok(text)) => text,
            };

            match self.format.parse_line(&text) {
                Ok(Line::Boundary) => {
                    if let Some(sentence) = self.take_current() {
                        return Some(Ok(sentence));
                    }
                }
                Ok(Line::Skip) => {}
                Ok(Line::Ignored) => {
                    debug!(path = %self.path.display(), line = self.line, "ignoring line");
                }
                Ok(Line::Token(token)) => self.current.push(token),
                Err(reason) => {
                    let err = CorpusError::MalformedToken {
                        path: self.path.clone(),
                        line: self.line,
                        reason,
                    };
                    return self.fail(err);
                }
            }
        }
    }
}
