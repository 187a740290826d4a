/*
 * sink.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Output artifact naming and writing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;
use weave_runtime::SystemRuntime;

use crate::error::{TemplateError, TemplateResult};

/// Path of the artifact written for a top-level document.
///
/// The artifact sits next to `root`, named `prefix` followed by the root's
/// file name (`site/index.html` → `site/t.index.html`).
pub fn output_path_for(root: &Path, prefix: &str) -> TemplateResult<PathBuf> {
    let file_name = root.file_name().ok_or_else(|| TemplateError::InvalidRoot {
        path: root.to_path_buf(),
    })?;
    let mut name = OsString::from(prefix);
    name.push(file_name);
    Ok(root.with_file_name(name))
}

/// Writes final expansion results through a runtime.
pub struct OutputSink<'a, R: SystemRuntime + ?Sized> {
    runtime: &'a R,
}

impl<'a, R: SystemRuntime + ?Sized> OutputSink<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }

    /// Write `contents` to `path`, replacing any existing file.
    pub fn write_artifact(&self, path: &Path, contents: &str) -> TemplateResult<()> {
        debug!(path = %path.display(), bytes = contents.len(), "writing output artifact");
        self.runtime
            .file_write(path, contents.as_bytes())
            .map_err(|source| TemplateError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })
    }
}
