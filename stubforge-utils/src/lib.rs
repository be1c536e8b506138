//! stubforge utilities
//!
//! Shared plumbing for the generator crates: the error type, logging setup,
//! layered configuration loading and the append-only file primitives that
//! are the only place the workspace writes to disk.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod file;
pub mod logging;

/// Re-export commonly used utilities
pub use config::{load_config, merge_overlay, ConfigFormat};
pub use file::{append_to_existing, normalize_path, path_exists};

/// Result type used throughout stubforge utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UtilError::Config("bad key".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad key");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: UtilError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
