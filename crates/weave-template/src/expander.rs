/*
 * expander.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Recursive expansion engine.
//!
//! [`Expander`] reads a document, scans it for directives, expands every
//! referenced template (which may itself contain directives) and splices the
//! results back in. Nested results go through the session's [`ResultCache`];
//! only the top-level result reaches the [`OutputSink`].
//!
//! [`ResultCache`]: crate::cache::ResultCache

use std::path::{Path, PathBuf};

use tracing::debug;
use weave_runtime::{NativeRuntime, SystemRuntime};

use crate::cache::ExpansionSession;
use crate::error::{TemplateError, TemplateResult};
use crate::options::ExpandOptions;
use crate::resolver::resolve_template_path;
use crate::scanner::{Segment, scan};
use crate::sink::{OutputSink, output_path_for};
use crate::splice::splice_result;

/// Expands inclusion directives in documents served by a runtime.
#[derive(Debug, Clone, Default)]
pub struct Expander<R: SystemRuntime = NativeRuntime> {
    runtime: R,
    options: ExpandOptions,
}

impl<R: SystemRuntime> Expander<R> {
    /// Create an expander with default options.
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            options: ExpandOptions::default(),
        }
    }

    /// Replace the expansion options.
    pub fn with_options(mut self, options: ExpandOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExpandOptions {
        &self.options
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Expand `root` and write the result next to it as the output artifact.
    ///
    /// Returns the path of the written artifact. Nothing is written if any
    /// error occurs during expansion.
    pub fn expand(&self, root: &Path) -> TemplateResult<PathBuf> {
        let output_path = output_path_for(root, &self.options.output_prefix)?;
        let result = self.expand_to_string(root)?;
        OutputSink::new(&self.runtime).write_artifact(&output_path, &result)?;
        Ok(output_path)
    }

    /// Expand `root` and return the result without writing anything.
    pub fn expand_to_string(&self, root: &Path) -> TemplateResult<String> {
        debug!(root = %root.display(), boundaries = self.options.emit_boundaries, "expanding");
        let mut session = ExpansionSession::new(root);
        let result = self.expand_document(root, &mut session);
        debug!(
            cached = session.cache().len(),
            "discarding expansion cache"
        );
        result
    }

    /// Expand one document, recursing into every directive.
    fn expand_document(
        &self,
        path: &Path,
        session: &mut ExpansionSession,
    ) -> TemplateResult<String> {
        let source = self.read_document(path)?;
        let mut out = String::with_capacity(source.len());

        for segment in scan(&source, self.options.max_directive_len) {
            match segment {
                Segment::Text(text) => out.push_str(&text),
                Segment::Directive { filename, indent } => {
                    let resolved = resolve_template_path(&filename, path);
                    debug!(
                        from = %path.display(),
                        template = %resolved.display(),
                        indent,
                        "including template"
                    );
                    let result = self.expand_nested(&resolved, session)?;
                    splice_result(
                        &mut out,
                        &filename,
                        result,
                        indent,
                        self.options.emit_boundaries,
                    );
                }
            }
        }

        Ok(out)
    }

    /// Expand an included document into the session cache and return the cached text.
    fn expand_nested<'s>(
        &self,
        path: &Path,
        session: &'s mut ExpansionSession,
    ) -> TemplateResult<&'s str> {
        session.enter(path, self.options.max_depth)?;
        let result = self.expand_document(path, session);
        session.leave();
        Ok(session.cache_mut().insert(path.to_path_buf(), result?))
    }

    fn read_document(&self, path: &Path) -> TemplateResult<String> {
        let exists = self
            .runtime
            .path_exists(path)
            .map_err(|e| TemplateError::from_read(path, e))?;
        if !exists {
            return Err(TemplateError::MissingTemplate {
                path: path.to_path_buf(),
            });
        }
        self.runtime
            .file_read_string(path)
            .map_err(|e| TemplateError::from_read(path, e))
    }
}
