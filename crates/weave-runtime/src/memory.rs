/*
 * memory.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! In-memory runtime.
//!
//! Holds a flat map of path to bytes. Paths are compared exactly as given,
//! so callers should build them with the same joins the engine uses.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::traits::{RuntimeError, RuntimeResult, SystemRuntime};

/// Runtime that serves files from an in-memory map.
///
/// Useful for testing and for scenarios where documents are bundled
/// into the application.
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryRuntime {
    /// Create a new empty memory runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runtime with the given files.
    pub fn with_files(
        files: impl IntoIterator<Item = (impl Into<PathBuf>, impl Into<Vec<u8>>)>,
    ) -> Self {
        let runtime = Self::new();
        for (path, contents) in files {
            runtime.add_file(path, contents);
        }
        runtime
    }

    /// Add (or replace) a file.
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> &Self {
        self.lock().insert(path.into(), contents.into());
        self
    }

    /// Current contents of a file as UTF-8, if present and valid.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock()
            .get(path.as_ref())
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // A poisoned map is still a valid map; keep serving it.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SystemRuntime for MemoryRuntime {
    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        self.lock()
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::NotFound(path.to_path_buf()))
    }

    fn file_write(&self, path: &Path, contents: &[u8]) -> RuntimeResult<()> {
        self.lock().insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn path_exists(&self, path: &Path) -> RuntimeResult<bool> {
        Ok(self.lock().contains_key(path))
    }
}
