//! Line tokenization for inventory exports
//!
//! Splits export text into logical rows and each row into raw fields. A
//! delimiter only separates fields when it sits outside a quoted span, so
//! `"Ryzen 5, boxed"` stays one field. Quotes are left in place for the
//! decoder to strip. Fields never span lines.

use crate::constants::{DEFAULT_DELIMITER, QUOTE};
use std::iter::Enumerate;
use std::str::Lines;

/// One non-blank line split into raw, still-quoted fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine<'a> {
    /// Physical line number in the source text (1-based)
    pub line_number: usize,
    pub fields: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

impl ScanState {
    fn toggled(self) -> Self {
        match self {
            ScanState::Unquoted => ScanState::Quoted,
            ScanState::Quoted => ScanState::Unquoted,
        }
    }
}

/// Lazy iterator over the tokenized lines of an export, header first
#[derive(Debug)]
pub struct LineTokenizer<'a> {
    lines: Enumerate<Lines<'a>>,
    delimiter: char,
}

impl<'a> LineTokenizer<'a> {
    /// Tokenize comma-delimited text
    pub fn new(text: &'a str) -> Self {
        Self::with_delimiter(text, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(text: &'a str, delimiter: char) -> Self {
        Self {
            lines: text.lines().enumerate(),
            delimiter,
        }
    }
}

impl<'a> Iterator for LineTokenizer<'a> {
    type Item = TokenizedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            if is_blank_line(line) {
                continue;
            }

            return Some(TokenizedLine {
                line_number: index + 1,
                fields: split_fields(line, self.delimiter),
            });
        }

        None
    }
}

/// Whitespace-only lines and lines holding a lone stray quote carry no row
fn is_blank_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || (trimmed.len() == 1 && trimmed.starts_with(QUOTE))
}

/// Split a single line on `delimiter`, ignoring delimiters inside quotes.
///
/// Each quote character flips the scan state, so a doubled `""` escape
/// leaves it unchanged and a delimiter is a split point exactly when an
/// even number of quotes precede it.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut state = ScanState::Unquoted;
    let mut field_start = 0;

    for (offset, ch) in line.char_indices() {
        if ch == QUOTE {
            state = state.toggled();
        } else if ch == delimiter && state == ScanState::Unquoted {
            fields.push(&line[field_start..offset]);
            field_start = offset + ch.len_utf8();
        }
    }

    fields.push(&line[field_start..]);
    fields
}
