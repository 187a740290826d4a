/*
 * cache.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-expansion result cache and inclusion stack.
//!
//! An [`ExpansionSession`] lives for exactly one top-level expansion. It holds
//! the expansion results of nested documents, keyed by resolved path, and the
//! chain of documents currently being expanded. Dropping the session discards
//! everything, whether the expansion succeeded or failed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{TemplateError, TemplateResult};

/// Expansion results of nested documents, keyed by resolved path.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<PathBuf, String>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the result for `path`, replacing any earlier one, and return it.
    pub fn insert(&mut self, path: PathBuf, result: String) -> &str {
        trace!(path = %path.display(), bytes = result.len(), "caching expansion result");
        self.entries.entry(path).insert_entry(result).into_mut()
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// State threaded through one top-level expansion.
#[derive(Debug)]
pub struct ExpansionSession {
    cache: ResultCache,
    /// Documents being expanded, root first.
    stack: Vec<PathBuf>,
}

impl ExpansionSession {
    /// Start a session for the given root document.
    pub fn new(root: &Path) -> Self {
        Self {
            cache: ResultCache::new(),
            stack: vec![root.to_path_buf()],
        }
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ResultCache {
        &mut self.cache
    }

    /// Current inclusion nesting depth (0 while expanding the root).
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Documents currently being expanded, root first.
    pub fn chain(&self) -> &[PathBuf] {
        &self.stack
    }

    /// Push `path` onto the inclusion stack.
    ///
    /// Fails if `path` is already being expanded or the nesting would exceed
    /// `max_depth`.
    pub fn enter(&mut self, path: &Path, max_depth: usize) -> TemplateResult<()> {
        if self.stack.iter().any(|p| p == path) {
            let mut chain = self.stack.clone();
            chain.push(path.to_path_buf());
            return Err(TemplateError::CyclicInclusion {
                path: path.to_path_buf(),
                chain,
            });
        }
        if self.depth() >= max_depth {
            return Err(TemplateError::MaxDepthExceeded {
                path: path.to_path_buf(),
                max_depth,
            });
        }
        self.stack.push(path.to_path_buf());
        Ok(())
    }

    /// Pop the innermost document.
    pub fn leave(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}
