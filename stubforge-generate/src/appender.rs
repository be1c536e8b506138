//! Appending generated blocks to target files
//!
//! All disk access of a run goes through [`BlockSink`]. [`FsSink`] talks to
//! the real file system; [`MemorySink`] keeps files in memory for tests.

use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Marker comment written before every appended block
pub const BLOCK_MARKER: &str = "// Auto-generated comprehensive tests";

/// Narrow append-only storage interface
pub trait BlockSink {
    /// Whether anything exists at `target`
    fn exists(&self, target: &Path) -> bool;

    /// Append `text` to the existing `target`, flushing before returning.
    /// Must not create `target`.
    fn append(&mut self, target: &Path, text: &str) -> Result<()>;

    /// Current contents of `target`, if it exists
    fn read(&self, target: &Path) -> Result<Option<String>>;
}

/// Sink backed by the file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl BlockSink for FsSink {
    fn exists(&self, target: &Path) -> bool {
        stubforge_utils::path_exists(target)
    }

    fn append(&mut self, target: &Path, text: &str) -> Result<()> {
        let written = stubforge_utils::append_to_existing(target, text)?;
        tracing::debug!(target_file = %target.display(), bytes = written, "appended");
        Ok(())
    }

    fn read(&self, target: &Path) -> Result<Option<String>> {
        if !self.exists(target) {
            return Ok(None);
        }
        Ok(Some(stubforge_utils::file::read_text_file(target)?))
    }
}

/// In-memory sink; only files registered with [`MemorySink::with_file`] exist
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing file with `content`
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Contents of `path`, if registered
    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Number of registered files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl BlockSink for MemorySink {
    fn exists(&self, target: &Path) -> bool {
        self.files.contains_key(target)
    }

    fn append(&mut self, target: &Path, text: &str) -> Result<()> {
        let content = self.files.get_mut(target).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", target.display()),
            )
        })?;
        content.push_str(text);
        Ok(())
    }

    fn read(&self, target: &Path) -> Result<Option<String>> {
        Ok(self.files.get(target).cloned())
    }
}

/// Result of handing a block to the appender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Block written; `bytes` is the length of the appended text
    Appended { bytes: usize },
    /// Target missing; nothing written
    Missing,
}

/// Text actually appended for a rendered block: a blank line, the marker,
/// the block verbatim and a trailing newline.
pub fn delimited(block: &str) -> String {
    format!("\n{}\n{}\n", BLOCK_MARKER, block)
}

/// Appends delimited blocks to existing targets through a [`BlockSink`]
#[derive(Debug)]
pub struct FileAppender<S> {
    sink: S,
}

impl<S: BlockSink> FileAppender<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Whether `target` can receive a block
    pub fn target_exists(&self, target: &Path) -> bool {
        self.sink.exists(target)
    }

    /// Append `block` to `target` if it exists; report `Missing` otherwise.
    /// Write failures propagate.
    pub fn append_block(&mut self, target: &Path, block: &str) -> Result<AppendOutcome> {
        if !self.sink.exists(target) {
            return Ok(AppendOutcome::Missing);
        }

        let text = delimited(block);
        self.sink.append(target, &text)?;
        Ok(AppendOutcome::Appended { bytes: text.len() })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
