#![allow(clippy::module_inception)]

pub mod ast;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location in the source text. `line` and `col` are 1-based, `offset`
/// is the byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    /// Length in bytes.
    pub len: usize,
}

impl Span {
    pub fn new(start: Position, len: usize) -> Self {
        Span { start, len }
    }

    pub fn end_offset(&self) -> usize {
        self.start.offset + self.len
    }

    /// Joins two spans into one covering both, assuming `self` starts first.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start,
            len: other.end_offset().saturating_sub(self.start.offset),
        }
    }

    /// The slice of `source` this span covers, or an empty string if the span
    /// does not belong to `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start.offset..self.end_offset()).unwrap_or("")
    }
}

/// Returns the line number, the text of the line (without the trailing
/// newline) and the byte offset inside that line for `position`.
///
/// Offsets past the end of `source` are clamped to the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, &str, usize) {
    let mut pos = position.min(source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }

    let line_start = source[..pos].rfind('\n').map_or(0, |newline| newline + 1);
    let line_end = source[pos..]
        .find('\n')
        .map_or(source.len(), |newline| pos + newline);
    let line_number = source[..line_start].matches('\n').count() + 1;

    (line_number, &source[line_start..line_end], pos - line_start)
}
