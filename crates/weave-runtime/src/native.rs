/*
 * native.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * NativeRuntime implementation backed by std::fs.
 */

use std::io;
use std::path::Path;

use crate::traits::{RuntimeError, RuntimeResult, SystemRuntime};

/// Runtime with full access to the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct NativeRuntime;

impl NativeRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl SystemRuntime for NativeRuntime {
    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RuntimeError::NotFound(path.to_path_buf()),
            _ => RuntimeError::Io(e),
        })
    }

    fn file_write(&self, path: &Path, contents: &[u8]) -> RuntimeResult<()> {
        // Parent directories are never created: an unwritable destination is an error.
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn path_exists(&self, path: &Path) -> RuntimeResult<bool> {
        Ok(path.is_file())
    }
}
