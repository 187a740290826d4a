/*
 * indent.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Indentation tracking and block re-indentation.
//!
//! The indentation level of a source line is the number of space characters
//! between the preceding line break (or start of document) and the first
//! non-space character. Tabs are not counted.

/// Tracks the indentation level of the line currently being scanned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndentTracker {
    level: usize,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new line.
    pub fn reset(&mut self) {
        self.level = 0;
    }

    /// Count one leading space.
    pub fn advance(&mut self) {
        self.level += 1;
    }

    pub fn level(&self) -> usize {
        self.level
    }
}

/// Whitespace prefix for the given level.
pub fn indent_prefix(level: usize) -> String {
    " ".repeat(level)
}

/// Line ending used by `text`, taken from its first line break.
///
/// `None` when the text has no line break at all.
pub fn line_ending(text: &str) -> Option<&'static str> {
    let pos = text.find('\n')?;
    if text[..pos].ends_with('\r') {
        Some("\r\n")
    } else {
        Some("\n")
    }
}

/// Lines of an expansion result, without the single trailing line break.
///
/// Each line keeps its own terminator (`\n` or `\r\n`) except the last, which
/// has none. Empty text has no lines; `"\n"` has one empty line.
pub fn result_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    let trailing_empty = !text.is_empty() && (body.is_empty() || body.ends_with('\n'));
    body.split_inclusive('\n').chain(trailing_empty.then_some(""))
}

/// Re-indent `text` so it lines up under a directive at `level`.
///
/// Every line after the first is prefixed with `level` spaces. The first line
/// is prefixed only when `first_line_prefixed` is set; otherwise it continues
/// at the column already reached in the output. Line endings are kept as they
/// appear in `text`.
pub fn indent_block(text: &str, level: usize, first_line_prefixed: bool) -> String {
    let prefix = indent_prefix(level);
    let mut out = String::with_capacity(text.len() + level);
    for (i, line) in result_lines(text).enumerate() {
        if i > 0 || first_line_prefixed {
            out.push_str(&prefix);
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_counts_and_resets() {
        let mut t = IndentTracker::new();
        t.advance();
        t.advance();
        assert_eq!(t.level(), 2);
        t.reset();
        assert_eq!(t.level(), 0);
    }

    #[test]
    fn test_indent_prefix() {
        assert_eq!(indent_prefix(0), "");
        assert_eq!(indent_prefix(4), "    ");
    }

    #[test]
    fn test_line_ending() {
        assert_eq!(line_ending("X"), None);
        assert_eq!(line_ending("X\nY\r\n"), Some("\n"));
        assert_eq!(line_ending("X\r\nY\n"), Some("\r\n"));
    }

    #[test]
    fn test_result_lines() {
        assert_eq!(result_lines("").count(), 0);
        assert_eq!(result_lines("\n").collect::<Vec<_>>(), vec![""]);
        assert_eq!(result_lines("X\nY\n").collect::<Vec<_>>(), vec!["X\n", "Y"]);
        assert_eq!(result_lines("X\nY").collect::<Vec<_>>(), vec!["X\n", "Y"]);
        assert_eq!(result_lines("X\n\n").collect::<Vec<_>>(), vec!["X\n", ""]);
    }

    #[test]
    fn test_result_lines_crlf() {
        assert_eq!(result_lines("\r\n").collect::<Vec<_>>(), vec![""]);
        assert_eq!(
            result_lines("X\r\nY\r\n").collect::<Vec<_>>(),
            vec!["X\r\n", "Y"]
        );
        assert_eq!(
            result_lines("X\r\n\r\n").collect::<Vec<_>>(),
            vec!["X\r\n", ""]
        );
    }

    #[test]
    fn test_indent_block_first_line_in_place() {
        assert_eq!(indent_block("X\nY\n", 2, false), "X\n  Y");
    }

    #[test]
    fn test_indent_block_all_lines() {
        assert_eq!(indent_block("X\nY\n", 3, true), "   X\n   Y");
    }

    #[test]
    fn test_indent_block_crlf() {
        assert_eq!(indent_block("X\r\nY\r\n", 2, false), "X\r\n  Y");
        assert_eq!(indent_block("X\r\n\r\n", 1, true), " X\r\n ");
    }

    #[test]
    fn test_indent_block_blank_last_line() {
        assert_eq!(indent_block("X\n\n", 2, false), "X\n  ");
    }

    #[test]
    fn test_indent_block_empty() {
        assert_eq!(indent_block("", 4, false), "");
    }
}
