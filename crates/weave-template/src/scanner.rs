/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Directive scanner.
//!
//! Splits a document into literal text and `<@filename@>` directives. The
//! scanner is a small state machine:
//!
//! - `ReadingLineStart`: after a line break (or at start of document), counting
//!   leading spaces into the [`IndentTracker`].
//! - `ReadingText`: copying characters through.
//! - `ReadingDirective`: accumulating a filename after `<@`.
//!
//! A directive found right after a line's leading spaces is entered directly
//! from `ReadingLineStart`, so it carries the indentation of the line it
//! starts on.

use std::iter::Peekable;
use std::str::Chars;

use crate::indent::IndentTracker;

/// Directive start marker.
pub const DIRECTIVE_OPEN: &str = "<@";

/// A piece of a scanned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal output text.
    Text(String),

    /// A well-formed inclusion directive.
    Directive {
        /// Referenced filename, relative to the including document.
        filename: String,
        /// Indentation level of the line the directive starts on.
        indent: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ReadingText,
    ReadingLineStart,
    ReadingDirective,
}

/// Scan `source` into segments.
///
/// Directive payloads reaching `max_directive_len` characters without an end
/// marker, or interrupted by a line break or end of input, are emitted as
/// literal text (`<@` followed by the accumulated characters).
pub fn scan(source: &str, max_directive_len: usize) -> Vec<Segment> {
    Scanner::new(source, max_directive_len).run()
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    max_directive_len: usize,
    indent: IndentTracker,
    segments: Vec<Segment>,
    text: String,
    filename: String,
    filename_len: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, max_directive_len: usize) -> Self {
        Self {
            chars: source.chars().peekable(),
            max_directive_len,
            indent: IndentTracker::new(),
            segments: Vec::new(),
            text: String::with_capacity(source.len()),
            filename: String::new(),
            filename_len: 0,
        }
    }

    fn run(mut self) -> Vec<Segment> {
        let mut state = ScanState::ReadingLineStart;

        loop {
            state = match state {
                ScanState::ReadingLineStart => match self.chars.next() {
                    Some(' ') => {
                        self.text.push(' ');
                        self.indent.advance();
                        ScanState::ReadingLineStart
                    }
                    Some(c) => self.dispatch(c),
                    None => break,
                },
                ScanState::ReadingText => match self.chars.next() {
                    Some(c) => self.dispatch(c),
                    None => break,
                },
                ScanState::ReadingDirective => match self.chars.next() {
                    Some(c) => self.directive_char(c),
                    None => {
                        self.demote_directive();
                        break;
                    }
                },
            };
        }

        self.flush_text();
        self.segments
    }

    /// Normal handling of one character outside a directive.
    fn dispatch(&mut self, c: char) -> ScanState {
        match c {
            '\n' => {
                self.text.push('\n');
                self.indent.reset();
                ScanState::ReadingLineStart
            }
            '<' => match self.chars.peek().copied() {
                Some('@') => {
                    self.chars.next();
                    self.filename.clear();
                    self.filename_len = 0;
                    ScanState::ReadingDirective
                }
                // Leave the line break to normal handling so indentation is tracked.
                Some('\n') | None => {
                    self.text.push('<');
                    ScanState::ReadingText
                }
                Some(next) => {
                    self.chars.next();
                    self.text.push('<');
                    self.text.push(next);
                    ScanState::ReadingText
                }
            },
            c => {
                self.text.push(c);
                ScanState::ReadingText
            }
        }
    }

    fn directive_char(&mut self, c: char) -> ScanState {
        match c {
            '@' if self.chars.peek() == Some(&'>') => {
                self.chars.next();
                self.flush_text();
                self.segments.push(Segment::Directive {
                    filename: std::mem::take(&mut self.filename),
                    indent: self.indent.level(),
                });
                self.filename_len = 0;
                return ScanState::ReadingText;
            }
            '\n' => {
                self.demote_directive();
                return self.dispatch('\n');
            }
            c => {
                self.filename.push(c);
                self.filename_len += 1;
            }
        }

        if self.filename_len >= self.max_directive_len {
            self.demote_directive();
            ScanState::ReadingText
        } else {
            ScanState::ReadingDirective
        }
    }

    /// Emit an unterminated directive verbatim.
    fn demote_directive(&mut self) {
        self.text.push_str(DIRECTIVE_OPEN);
        self.text.push_str(&self.filename);
        self.filename.clear();
        self.filename_len = 0;
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.segments.push(Segment::Text(std::mem::take(&mut self.text)));
        }
    }
}
