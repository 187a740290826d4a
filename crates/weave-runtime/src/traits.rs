/*
 * traits.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Defines the SystemRuntime trait and supporting types for file access.
 *
 * This abstraction allows the inclusion engine to run against different backends:
 * - NativeRuntime: real filesystem access using std
 * - MemoryRuntime: in-memory document set for tests and embedding
 */

use std::io;
use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug)]
pub enum RuntimeError {
    /// The requested path does not exist
    NotFound(PathBuf),

    /// Standard I/O error
    Io(io::Error),

    /// File contents are not valid UTF-8
    InvalidUtf8(PathBuf),
}

impl RuntimeError {
    /// Whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            RuntimeError::NotFound(_) => true,
            RuntimeError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            RuntimeError::InvalidUtf8(_) => false,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            RuntimeError::Io(e) => write!(f, "I/O error: {}", e),
            RuntimeError::InvalidUtf8(path) => {
                write!(f, "Invalid UTF-8 in file: {}", path.display())
            }
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Io(e)
    }
}

/// Trait defining the file operations the inclusion engine needs.
///
/// Implementations provide the actual storage interaction, so the engine
/// can be exercised against the real filesystem or an in-memory document set
/// without changing any expansion logic.
pub trait SystemRuntime: Send + Sync {
    /// Read entire file contents as bytes.
    ///
    /// A missing file is reported as [`RuntimeError::NotFound`].
    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    /// Read file as string with UTF-8 encoding.
    ///
    /// Default implementation reads bytes and converts to string.
    fn file_read_string(&self, path: &Path) -> RuntimeResult<String> {
        let bytes = self.file_read(path)?;
        String::from_utf8(bytes).map_err(|_| RuntimeError::InvalidUtf8(path.to_path_buf()))
    }

    /// Write bytes to file (creates or overwrites).
    fn file_write(&self, path: &Path, contents: &[u8]) -> RuntimeResult<()>;

    /// Check if a file exists at `path`.
    fn path_exists(&self, path: &Path) -> RuntimeResult<bool>;
}

impl<T: SystemRuntime + ?Sized> SystemRuntime for &T {
    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        (**self).file_read(path)
    }

    fn file_write(&self, path: &Path, contents: &[u8]) -> RuntimeResult<()> {
        (**self).file_write(path, contents)
    }

    fn path_exists(&self, path: &Path) -> RuntimeResult<bool> {
        (**self).path_exists(path)
    }
}

impl<T: SystemRuntime + ?Sized> SystemRuntime for std::sync::Arc<T> {
    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        (**self).file_read(path)
    }

    fn file_write(&self, path: &Path, contents: &[u8]) -> RuntimeResult<()> {
        (**self).file_write(path, contents)
    }

    fn path_exists(&self, path: &Path) -> RuntimeResult<bool> {
        (**self).path_exists(path)
    }
}
