//! Per-key output files.
//!
//! Every routing key (a prefix or an adverb) gets its own
//! `<key>.contexts.tsv` in the output directory. Files are created lazily on
//! the first record for their key and truncated at that point, so a run never
//! mixes its output with a previous run's. When a bound on simultaneously
//! open files is set, the least recently used file is closed to make room and
//! reopened in append mode if its key shows up again.

use std::{
    collections::{HashMap, HashSet},
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{ContextRecord, ExtractError};

/// Suffix of every output file.
pub const SINK_SUFFIX: &str = ".contexts.tsv";

/// Write buffer size of each output file.
const BUFFER_CAPACITY: usize = 64 * 1024;

/// File name for `key`. Path separators and `%` are percent-encoded, so every
/// key stays inside the output directory and distinct keys never share a file.
pub fn sink_file_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + SINK_SUFFIX.len());
    for ch in key.chars() {
        match ch {
            '%' => name.push_str("%25"),
            '/' => name.push_str("%2F"),
            '\\' => name.push_str("%5C"),
            _ => name.push(ch),
        }
    }
    name.push_str(SINK_SUFFIX);
    name
}

/// One open output file.
#[derive(Debug)]
struct OpenSink {
    /// Location of the file.
    path: PathBuf,
    /// Buffered handle.
    writer: BufWriter<File>,
    /// Router tick of the last access.
    last_used: u64,
}

/// Totals reported when a router is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterSummary {
    /// Distinct keys that received records.
    pub keys: usize,
    /// Records written.
    pub records: usize,
    /// Files closed to respect the open-file bound.
    pub evictions: usize,
}

/// Maps routing keys to output files.
#[derive(Debug)]
pub struct SinkRouter {
    /// Output directory.
    dir: PathBuf,
    /// Maximum number of open files; 0 means unbounded.
    max_open: usize,
    /// Currently open files by key.
    open: HashMap<String, OpenSink>,
    /// Keys whose file was created during this run.
    created: HashSet<String>,
    /// Monotonic access counter.
    tick: u64,
    /// Running totals.
    summary: RouterSummary,
}

impl SinkRouter {
    /// Creates a router writing into `dir`, creating the directory if needed.
    pub fn create(dir: &Path) -> Result<Self, ExtractError> {
        fs::create_dir_all(dir).map_err(|source| ExtractError::CreateOutputDir {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
            max_open: 0,
            open: HashMap::new(),
            created: HashSet::new(),
            tick: 0,
            summary: RouterSummary::default(),
        })
    }

    /// Bounds the number of simultaneously open files. 0 removes the bound.
    pub fn with_max_open(mut self, max_open: usize) -> Self {
        self.max_open = max_open;
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for `key`.
    pub fn sink_path(&self, key: &str) -> PathBuf {
        self.dir.join(sink_file_name(key))
    }

    /// Number of files currently open.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Returns the writer for `key`, creating its file on first use.
    ///
    /// Lines written through it are not counted in the summary.
    pub fn sink(&mut self, key: &str) -> Result<&mut BufWriter<File>, ExtractError> {
        Ok(&mut self.entry(key)?.writer)
    }

    /// Appends `record` as one line to the file of its key.
    pub fn write_record(&mut self, record: &ContextRecord) -> Result<(), ExtractError> {
        let sink = self.entry(record.key())?;
        writeln!(sink.writer, "{record}").map_err(|source| ExtractError::WriteSink {
            path: sink.path.clone(),
            source,
        })?;
        self.summary.records += 1;
        Ok(())
    }

    /// Flushes and closes every file.
    pub fn finish(mut self) -> Result<RouterSummary, ExtractError> {
        for (_, sink) in self.open.drain() {
            close(sink)?;
        }
        Ok(self.summary)
    }

    /// Returns the open sink for `key`, opening it if necessary.
    fn entry(&mut self, key: &str) -> Result<&mut OpenSink, ExtractError> {
        self.tick += 1;
        if !self.open.contains_key(key) {
            self.make_room()?;
            let sink = self.open_sink(key)?;
            self.open.insert(key.to_string(), sink);
        }
        let tick = self.tick;
        let sink = self.open.get_mut(key).expect("sink opened above");
        sink.last_used = tick;
        Ok(sink)
    }

    /// Creates the file for a new key, or reopens an evicted one for appending.
    fn open_sink(&mut self, key: &str) -> Result<OpenSink, ExtractError> {
        let path = self.sink_path(key);
        let first = self.created.insert(key.to_string());
        let file = if first {
            debug!(key, path = %path.display(), "creating output file");
            self.summary.keys += 1;
            File::create(&path)
        } else {
            debug!(key, path = %path.display(), "reopening output file");
            OpenOptions::new().append(true).open(&path)
        };
        let file = file.map_err(|source| ExtractError::CreateSink {
            path: path.clone(),
            source,
        })?;
        Ok(OpenSink {
            path,
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, file),
            last_used: self.tick,
        })
    }

    /// Closes the least recently used file when the bound is reached.
    fn make_room(&mut self) -> Result<(), ExtractError> {
        if self.max_open == 0 || self.open.len() < self.max_open {
            return Ok(());
        }
        let oldest = self
            .open
            .iter()
            .min_by_key(|(_, sink)| sink.last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest
            && let Some(sink) = self.open.remove(&key)
        {
            debug!(key = %key, "closing least recently used output file");
            self.summary.evictions += 1;
            close(sink)?;
        }
        Ok(())
    }
}

/// Flushes `sink`; dropping it closes the handle.
fn close(mut sink: OpenSink) -> Result<(), ExtractError> {
    sink.writer.flush().map_err(|source| ExtractError::WriteSink {
        path: sink.path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CompoundRecord, Context};

    fn record(prefix: &str, noun: &str) -> ContextRecord {
        ContextRecord::Compound(CompoundRecord {
            source: "ITWAC".to_string(),
            prefix: prefix.to_string(),
            noun: noun.to_string(),
            context: Context {
                left: String::new(),
                matched: format!("{prefix}-{noun}"),
                right: String::new(),
            },
        })
    }

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn records_go_to_the_file_of_their_key() {
        let dir = TempDir::new().unwrap();
        let mut router = SinkRouter::create(dir.path()).unwrap();
        router.write_record(&record("ex", "ministro")).unwrap();
        router.write_record(&record("post", "guerra")).unwrap();
        router.write_record(&record("ex", "moglie")).unwrap();
        let summary = router.finish().unwrap();

        assert_eq!(summary.keys, 2);
        assert_eq!(summary.records, 3);
        let ex = lines(&dir.path().join("ex.contexts.tsv"));
        assert_eq!(ex.len(), 2);
        assert!(ex[0].contains("\tministro\t"));
        assert!(ex[1].contains("\tmoglie\t"));
        assert_eq!(lines(&dir.path().join("post.contexts.tsv")).len(), 1);
    }

    #[test]
    fn no_file_without_records() {
        let dir = TempDir::new().unwrap();
        let router = SinkRouter::create(&dir.path().join("out")).unwrap();
        assert_eq!(router.finish().unwrap(), RouterSummary::default());
        assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
    }

    #[test]
    fn first_open_truncates_previous_runs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ex.contexts.tsv"), "stale\n").unwrap();

        let mut router = SinkRouter::create(dir.path()).unwrap();
        router.write_record(&record("ex", "ministro")).unwrap();
        router.finish().unwrap();

        let ex = lines(&dir.path().join("ex.contexts.tsv"));
        assert_eq!(ex.len(), 1);
        assert!(!ex[0].contains("stale"));
    }

    #[test]
    fn bounded_router_reopens_in_append_mode() {
        let dir = TempDir::new().unwrap();
        let mut router = SinkRouter::create(dir.path()).unwrap().with_max_open(1);
        router.write_record(&record("ex", "ministro")).unwrap();
        router.write_record(&record("post", "guerra")).unwrap();
        assert_eq!(router.open_count(), 1);
        router.write_record(&record("ex", "moglie")).unwrap();
        let summary = router.finish().unwrap();

        assert_eq!(summary.keys, 2);
        assert_eq!(summary.evictions, 2);
        let ex = lines(&dir.path().join("ex.contexts.tsv"));
        assert_eq!(ex.len(), 2);
        assert!(ex[1].contains("\tmoglie\t"));
    }

    #[test]
    fn separators_in_keys_stay_inside_the_directory() {
        assert_eq!(sink_file_name("a/b"), "a%2Fb.contexts.tsv");
        assert_eq!(sink_file_name("..\\x"), "..%5Cx.contexts.tsv");
        assert_eq!(sink_file_name("50%"), "50%25.contexts.tsv");
        assert_eq!(sink_file_name("molto ben"), "molto ben.contexts.tsv");
    }

    #[test]
    fn keys_differing_only_by_separators_keep_their_own_files() {
        let dir = TempDir::new().unwrap();
        let mut router = SinkRouter::create(dir.path()).unwrap();
        for key in ["a/b", "a_b", "a\\b", "a%2Fb"] {
            router.write_record(&record(key, "casa")).unwrap();
        }
        let summary = router.finish().unwrap();

        assert_eq!(summary.keys, 4);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 4);
        for key in ["a/b", "a_b", "a\\b", "a%2Fb"] {
            let written = lines(&dir.path().join(sink_file_name(key)));
            assert_eq!(written.len(), 1, "{key}");
            assert!(written[0].contains(&format!("\t{key}\t")), "{key}");
        }
    }

    #[test]
    fn sink_hands_out_the_same_file_for_a_key() {
        let dir = TempDir::new().unwrap();
        let mut router = SinkRouter::create(dir.path()).unwrap();
        writeln!(router.sink("ex").unwrap(), "first").unwrap();
        writeln!(router.sink("ex").unwrap(), "second").unwrap();
        assert_eq!(router.open_count(), 1);
        let summary = router.finish().unwrap();

        assert_eq!(summary.keys, 1);
        assert_eq!(summary.records, 0);
        assert_eq!(lines(&dir.path().join("ex.contexts.tsv")), ["first", "second"]);
    }
}
