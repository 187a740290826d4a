/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Recursive whole-file inclusion engine.
//!
//! A document may contain directives of the form `<@filename@>`. Expanding the
//! document replaces every directive with the (recursively expanded) contents
//! of the named file, resolved relative to the including document, and
//! re-indents the inserted lines to the indentation of the directive's line.
//!
//! There are no variables, conditionals or loops: whole-file inclusion is the
//! only primitive.
//!
//! # Example
//!
//! ```ignore
//! use weave_template::{ExpandOptions, Expander};
//! use weave_runtime::NativeRuntime;
//!
//! let expander = Expander::new(NativeRuntime::new())
//!     .with_options(ExpandOptions::new().with_boundaries(false));
//!
//! // Writes site/t.index.html
//! let output = expander.expand("site/index.html".as_ref())?;
//! ```

pub mod cache;
pub mod error;
pub mod expander;
pub mod indent;
pub mod options;
pub mod resolver;
pub mod scanner;
pub mod sink;
pub mod splice;

use std::path::{Path, PathBuf};

// Re-export main types at crate root
pub use cache::{ExpansionSession, ResultCache};
pub use error::{TemplateError, TemplateResult};
pub use expander::Expander;
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_PREFIX, ExpandOptions, MAX_DIRECTIVE_LEN};
pub use scanner::{Segment, scan};

/// Expand `root` on the local filesystem and write the output artifact.
pub fn expand_file(root: &Path, options: ExpandOptions) -> TemplateResult<PathBuf> {
    Expander::new(weave_runtime::default_runtime())
        .with_options(options)
        .expand(root)
}
