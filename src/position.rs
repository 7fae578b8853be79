use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// A location in the input
///
/// `offset` is the authoritative byte index into the input. `row` and `column`
/// are 1-based and only kept up to date for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// The position before the first symbol of any input
    pub fn start() -> Self {
        Position {
            row: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

/// A span in the source text with start and end byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the slice of `source` that this span covers
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

/// A parser combinator that captures the span of a successful parse
///
/// Whitespace a leaf parser skips before matching is not part of the span.
/// Combinators skip inside their own attempt, so their span starts where they
/// were called.
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<P> Parser for Spanned<P>
where
    P: Parser,
{
    type Output = (P::Output, Span);

    fn tag(&self) -> Cow<'_, str> {
        self.parser.tag()
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        if self.parser.skips_whitespace() {
            cursor.skip_whitespace();
        }
        let start = cursor.offset();
        let output = self.parser.attempt(cursor)?;
        Ok((output, Span::new(start, cursor.offset())))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpannedExt: Parser + Sized {
    /// Wrap this parser to capture its span
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<P> SpannedExt for P where P: Parser {}

/// Convenience function to create a Spanned combinator
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::range::range;

    #[test]
    fn test_span_basic() {
        let span = Span::new(0, 5);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.slice("hello"), "hello");
    }

    #[test]
    fn test_span_empty() {
        let span = Span::new(3, 3);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice("hello"), "");
    }

    #[test]
    fn test_reversed_span_is_empty() {
        let span = Span::new(5, 2);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice("hello"), "");
    }

    #[test]
    fn test_span_out_of_bounds_is_empty_slice() {
        assert_eq!(Span::new(4, 10).slice("abc"), "");
    }

    #[test]
    fn test_spanned_excludes_leading_whitespace() {
        let input = "   hello world";
        let mut cursor = Cursor::new(input);
        let (matched, span) = literal("hello").spanned().parse(&mut cursor).unwrap();
        assert_eq!(matched, "hello");
        assert_eq!(cursor.offset(), 8);
        assert_eq!(span, Span::new(3, 8));
        assert_eq!(span.slice(input), "hello");
    }

    #[test]
    fn test_spanned_consecutive() {
        let input = "abc";
        let mut cursor = Cursor::new(input);

        let (_, first) = spanned(range('a', 'a')).parse(&mut cursor).unwrap();
        let (_, second) = spanned(range('b', 'b')).parse(&mut cursor).unwrap();
        assert_eq!(first, Span::new(0, 1));
        assert_eq!(second, Span::new(1, 2));
        assert_eq!(second.slice(input), "b");
    }

    #[test]
    fn test_spanned_error_propagation() {
        let result = literal("x").spanned().parse_str("abc");
        assert!(result.is_err());
    }

    #[test]
    fn test_position_start() {
        let start = Position::start();
        assert_eq!(start, Position::default());
        assert_eq!((start.row, start.column, start.offset), (1, 1, 0));
    }
}
