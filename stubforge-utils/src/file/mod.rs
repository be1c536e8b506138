//! File system utilities
//!
//! Append-only access to files that must already exist. Nothing in this
//! module creates, truncates or removes a file.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Normalize path lexically (collapses `.` and `..` without touching disk)
pub fn normalize_path(path: &Path) -> PathBuf {
    path_clean::clean(path)
}

/// True when anything exists at `path`. A directory counts as existing;
/// appending to it then fails with an I/O error.
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Append `text` to the end of an existing file.
///
/// The file is opened without the create flag, so a missing file surfaces as
/// `NotFound` instead of being created. Buffered bytes are flushed and synced
/// before the handle is dropped; on an early return the handle is still
/// released when it goes out of scope. Returns the number of bytes appended.
pub fn append_to_existing(path: &Path, text: &str) -> crate::Result<u64> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    let file = writer
        .into_inner()
        .map_err(|e| crate::UtilError::Io(e.into_error()))?;
    file.sync_all()?;

    Ok(text.len() as u64)
}

/// Read file as text, replacing invalid UTF-8 sequences
pub fn read_text_file(path: &Path) -> crate::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            let bytes = fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).to_string())
        }
        Err(e) => Err(e.into()),
    }
}
