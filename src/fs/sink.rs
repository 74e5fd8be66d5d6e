//! Append-only link sinks.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Append-only persistence for named link streams.
///
/// The pipeline flushes once per page boundary; each flush is a separate
/// append, never a buffered whole-crawl write. Output files are append logs,
/// not atomic snapshots: a failed crawl leaves already-flushed pages on disk.
pub trait LinkSink {
    /// Append a page's worth of entries to a named stream. Entries may span
    /// multiple physical lines (annotated attachment records do).
    fn append(&mut self, stream: &str, entries: &[String]) -> Result<()>;
}

/// File-backed sink writing each stream to `<dir>/<stream>`.
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl LinkSink for FileSink {
    fn append(&mut self, stream: &str, entries: &[String]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let path = self.dir.join(stream);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        // Each page block is preceded by a newline, matching the output
        // framing downstream tooling already consumes.
        write!(file, "\n{}", entries.join("\n"))?;

        Ok(())
    }
}

/// In-memory sink for exercising the pipeline without filesystem access.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub streams: HashMap<String, Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries appended to a stream, across every flush.
    pub fn entries(&self, stream: &str) -> &[String] {
        self.streams.get(stream).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl LinkSink for MemorySink {
    fn append(&mut self, stream: &str, entries: &[String]) -> Result<()> {
        self.streams
            .entry(stream.to_string())
            .or_default()
            .extend(entries.iter().cloned());
        Ok(())
    }
}
