/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template expansion.

use std::path::{Path, PathBuf};

use thiserror::Error;
use weave_runtime::RuntimeError;

/// Errors that can occur while expanding a document.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A directive names a file that does not exist relative to its including document.
    #[error("Template not found: {}", .path.display())]
    MissingTemplate { path: PathBuf },

    /// A document includes itself, directly or transitively.
    #[error("Cyclic inclusion detected: {}", format_chain(.chain))]
    CyclicInclusion { path: PathBuf, chain: Vec<PathBuf> },

    /// Inclusion nesting went deeper than the configured limit.
    #[error("Inclusion nesting too deep (depth > {max_depth}): {}", .path.display())]
    MaxDepthExceeded { path: PathBuf, max_depth: usize },

    /// A document is not valid UTF-8.
    #[error("Template is not valid UTF-8: {}", .path.display())]
    InvalidEncoding { path: PathBuf },

    /// The root path has no file name to derive an output artifact from.
    #[error("Root document has no file name: {}", .path.display())]
    InvalidRoot { path: PathBuf },

    /// The output artifact could not be written.
    #[error("Failed to write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// Any other failure reading a document.
    #[error("Failed to read {}: {source}", .path.display())]
    Runtime {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },
}

impl TemplateError {
    /// Classify a read failure for `path`.
    pub(crate) fn from_read(path: &Path, source: RuntimeError) -> Self {
        match source {
            RuntimeError::InvalidUtf8(_) => TemplateError::InvalidEncoding {
                path: path.to_path_buf(),
            },
            e if e.is_not_found() => TemplateError::MissingTemplate {
                path: path.to_path_buf(),
            },
            e => TemplateError::Runtime {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }

    /// The path this error is about.
    pub fn path(&self) -> &Path {
        match self {
            TemplateError::MissingTemplate { path }
            | TemplateError::CyclicInclusion { path, .. }
            | TemplateError::MaxDepthExceeded { path, .. }
            | TemplateError::InvalidEncoding { path }
            | TemplateError::InvalidRoot { path }
            | TemplateError::OutputWrite { path, .. }
            | TemplateError::Runtime { path, .. } => path,
        }
    }
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
