use crate::cursor::Cursor;
use thiserror::Error;

/// Result of running a parser: `Ok` carries the parsed value, `Err` the reason
/// the input was rejected
pub type ParsingResult<T> = Result<T, ParsingError>;

/// Every way a parse can fail
///
/// The set is closed. Combinators pass errors through unchanged so the
/// position of the first failure survives to the caller. The `Display`
/// implementation is the user-facing rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    /// Input remained after a parse that had to consume everything
    #[error("Expected end of input at index {offset}, got {remaining}")]
    ExpectedEoi { offset: usize, remaining: String },

    /// Input ended where more was required
    #[error("Unexpected end of input at index {offset}, expected {expected}")]
    UnexpectedEoi { offset: usize, expected: String },

    /// A concrete symbol did not match
    #[error("Unexpected symbol '{symbol}' at index {offset}, expected {expected}")]
    UnexpectedSymbol {
        offset: usize,
        symbol: String,
        expected: String,
    },

    /// A semantic check failed after a successful syntactic match
    #[error("{0}")]
    Custom(String),
}

impl ParsingError {
    pub fn expected_eoi(cursor: &Cursor<'_>) -> Self {
        ParsingError::ExpectedEoi {
            offset: cursor.offset(),
            remaining: cursor.tail().to_string(),
        }
    }

    pub fn unexpected_eoi(cursor: &Cursor<'_>, expected: impl Into<String>) -> Self {
        ParsingError::UnexpectedEoi {
            offset: cursor.offset(),
            expected: expected.into(),
        }
    }

    /// The offending symbol is the last one consumed before the failure
    pub fn unexpected_symbol(cursor: &Cursor<'_>, expected: impl Into<String>) -> Self {
        ParsingError::UnexpectedSymbol {
            offset: cursor.offset(),
            symbol: cursor
                .lookbehind(1)
                .map(String::from)
                .unwrap_or_else(|| "<unknown>".to_string()),
            expected: expected.into(),
        }
    }

    pub fn custom(message: impl Into<String>) -> Self {
        ParsingError::Custom(message.into())
    }

    /// Byte offset the error refers to, if it carries one
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParsingError::ExpectedEoi { offset, .. }
            | ParsingError::UnexpectedEoi { offset, .. }
            | ParsingError::UnexpectedSymbol { offset, .. } => Some(*offset),
            ParsingError::Custom(_) => None,
        }
    }

    /// Render the error together with the lines of `input` around it
    ///
    /// Falls back to the plain message for errors without a position.
    pub fn report(&self, input: &str) -> String {
        let mut out = self.to_string();
        if let Some(offset) = self.offset() {
            let lines = context_lines(input, offset);
            if !lines.is_empty() {
                out.push_str("\n\n");
                out.push_str(&lines.join("\n"));
            }
        }
        out
    }
}

/// Render an error with the fixed one-line templates
pub fn prettify(error: &ParsingError) -> String {
    error.to_string()
}

#[derive(Debug, PartialEq, Eq)]
struct ReadablePosition {
    line: usize,
    column: usize,
}

/// 1-based line and character column of a byte offset
fn readable_position(input: &str, offset: usize) -> ReadablePosition {
    let mut line = 1;
    let mut line_start = 0;

    for (i, symbol) in input.char_indices() {
        if i >= offset {
            break;
        }
        if symbol == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let end = offset.min(input.len());
    let column = input.get(line_start..end).map_or(0, |s| s.chars().count()) + 1;
    ReadablePosition { line, column }
}

/// Up to 2 lines before and after the error line, with a pointer under the
/// error column
fn context_lines(input: &str, offset: usize) -> Vec<String> {
    let pos = readable_position(input, offset);
    let mut lines = Vec::new();

    // An offset just past a trailing newline points at the empty last row
    for (index, content) in input.split('\n').enumerate() {
        let current_line = index + 1;
        if current_line < pos.line.saturating_sub(2) || current_line > pos.line + 2 {
            continue;
        }
        let prefix = if current_line == pos.line {
            format!("  > {} | ", current_line)
        } else {
            format!("    {} | ", current_line)
        };
        lines.push(format!("{}{}", prefix, content.trim_end_matches('\r')));

        if current_line == pos.line {
            let pointer_offset = prefix.len() + pos.column - 1;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines
}
