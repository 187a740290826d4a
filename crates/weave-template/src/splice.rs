/*
 * splice.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Splicing expansion results into an including document.

use crate::indent::{indent_block, indent_prefix, line_ending, result_lines};

/// Boundary marker placed before an included block.
pub fn boundary_open(filename: &str) -> String {
    format!("<!-- {} -->", filename)
}

/// Boundary marker placed after an included block.
pub fn boundary_close(filename: &str) -> String {
    format!("<!-- END {} -->", filename)
}

/// Append an expansion result at the current position of `out`.
///
/// `out` is expected to already sit at the directive's column. The spliced
/// block never ends with a line break; the text following the directive in the
/// including document supplies it.
///
/// With boundaries, the open marker takes the directive's place and every
/// content line, plus the close marker, goes on its own line prefixed with
/// `indent` spaces. Without boundaries the first content line takes the
/// directive's place and later lines are prefixed with `indent` spaces.
///
/// Content lines keep their own line endings. The markers are set off with the
/// line ending of `result`, or of `out` when the result has no line break.
pub fn splice_result(
    out: &mut String,
    filename: &str,
    result: &str,
    indent: usize,
    emit_boundaries: bool,
) {
    if !emit_boundaries {
        out.push_str(&indent_block(result, indent, false));
        return;
    }

    let eol = line_ending(result).or_else(|| line_ending(out)).unwrap_or("\n");
    let prefix = indent_prefix(indent);
    out.push_str(&boundary_open(filename));
    out.push_str(eol);
    for line in result_lines(result) {
        out.push_str(&prefix);
        out.push_str(line);
    }
    if !result.is_empty() {
        out.push_str(eol);
    }
    out.push_str(&prefix);
    out.push_str(&boundary_close(filename));
}
