//! stubforge generate - Test Stub Generation Engine
//!
//! Synthesizes uniquely numbered placeholder test functions per category and
//! appends them to the category's existing test file.
//!
//! Key pieces:
//! - [`CategoryRegistry`]: categories, required counts and starting offsets
//! - [`templates`]: one pure template strategy per category
//! - [`NumberingScheme`]: index to number mapping and cyclic selections
//! - [`FileAppender`]: append-only writes behind the [`BlockSink`] seam
//! - [`GenerationEngine`]: the sequential run over all categories

#![warn(clippy::all, clippy::pedantic)]

pub mod appender;
pub mod config;
pub mod engine;
pub mod numbering;
pub mod registry;
pub mod templates;
pub mod types;

// Re-export main types for convenience
pub use appender::{AppendOutcome, BlockSink, FileAppender, FsSink, MemorySink, BLOCK_MARKER};
pub use config::{ConfigOverlay, GeneratorConfig, NumberingMode};
pub use engine::{GenerationEngine, RunEvent, RunOptions};
pub use numbering::NumberingScheme;
pub use registry::{CategoryEntry, CategoryRegistry};
pub use types::{Category, CategoryOutcome, GeneratedBlock, GeneratedTest, GenerationReport, OutcomeStatus};

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Error types for generation operations
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Test numbers would leave the `u64` range
    #[error("Numbering error: {0}")]
    Numbering(String),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] stubforge_utils::UtilError),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
