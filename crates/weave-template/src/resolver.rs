/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template path resolution.

use std::path::{Path, PathBuf};

/// Resolve the path of an included template.
///
/// The filename is taken relative to the directory of the including document.
/// An absolute filename is used as-is.
///
/// # Examples
///
/// ```ignore
/// // Base: /site/index.html, Template: "nav.html"      → /site/nav.html
/// // Base: /site/index.html, Template: "inc/head.html" → /site/inc/head.html
/// // Base: index.html,       Template: "nav.html"      → nav.html
/// ```
pub fn resolve_template_path(filename: &str, base_path: &Path) -> PathBuf {
    let base_dir = base_path.parent().unwrap_or(Path::new(""));
    base_dir.join(filename)
}
