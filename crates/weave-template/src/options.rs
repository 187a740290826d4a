/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Expansion options.

/// Filename prefix of the artifact written for a top-level document.
pub const DEFAULT_OUTPUT_PREFIX: &str = "t.";

/// Maximum directive payload length before it is demoted to literal text.
pub const MAX_DIRECTIVE_LEN: usize = 255;

/// Default maximum inclusion nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Options controlling one expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Wrap every inclusion in `<!-- name -->` / `<!-- END name -->` markers.
    pub emit_boundaries: bool,

    /// Prefix prepended to the root filename to name the output artifact.
    pub output_prefix: String,

    /// Directive payloads reaching this many characters without `@>` are literal.
    pub max_directive_len: usize,

    /// Maximum inclusion nesting depth before error.
    pub max_depth: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            emit_boundaries: true,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            max_directive_len: MAX_DIRECTIVE_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExpandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable boundary markers.
    pub fn with_boundaries(mut self, emit: bool) -> Self {
        self.emit_boundaries = emit;
        self
    }

    /// Set the output artifact prefix.
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Set the maximum directive payload length.
    pub fn with_max_directive_len(mut self, len: usize) -> Self {
        self.max_directive_len = len;
        self
    }

    /// Set the maximum inclusion nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
