use crate::cursor::Cursor;
use crate::error::{ParsingError, ParsingResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that consumes one symbol within an inclusive code point range
#[derive(Debug, Clone, Copy)]
pub struct Range {
    low: char,
    high: char,
}

impl Range {
    pub fn new(low: char, high: char) -> Self {
        Range { low, high }
    }
}

impl Parser for Range {
    type Output = char;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("[{}-{}]", self.low, self.high))
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        match cursor.advance() {
            Some(symbol) if (self.low..=self.high).contains(&symbol) => Ok(symbol),
            _ => Err(ParsingError::unexpected_symbol(cursor, self.tag())),
        }
    }
}

/// Convenience function to create a Range parser
pub fn range(low: char, high: char) -> Range {
    Range::new(low, high)
}

/// A range holding exactly one symbol
pub fn symbol(expected: char) -> Range {
    Range::new(expected, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_within_bounds() {
        assert_eq!(range('a', 'f').parse_str("b").unwrap(), 'b');
        assert_eq!(range('a', 'f').parse_str("a").unwrap(), 'a');
        assert_eq!(range('a', 'f').parse_str("f").unwrap(), 'f');
    }

    #[test]
    fn test_range_rejects_adjacent_symbols() {
        assert!(range('b', 'e').parse_str("a").is_err());
        assert!(range('b', 'e').parse_str("f").is_err());
        assert!(range('a', 'f').parse_str("z").is_err());
    }

    #[test]
    fn test_range_consumes_exactly_one() {
        let mut cursor = Cursor::new("123");
        assert_eq!(range('0', '9').parse(&mut cursor).unwrap(), '1');
        assert_eq!(cursor.tail(), "23");
    }

    #[test]
    fn test_range_error_names_interval() {
        let error = range('0', '9').parse_str("e").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unexpected symbol 'e' at index 1, expected [0-9]"
        );
    }

    #[test]
    fn test_end_of_input_is_out_of_range() {
        let error = range('a', 'z').parse_str("").unwrap_err();
        assert!(matches!(error, ParsingError::UnexpectedSymbol { .. }));
    }

    #[test]
    fn test_symbol() {
        assert_eq!(symbol('-').parse_str("-").unwrap(), '-');
        assert!(symbol('-').parse_str("_").is_err());
    }

    #[test]
    fn test_non_ascii_range() {
        assert_eq!(range('α', 'ω').parse_str("λ").unwrap(), 'λ');
    }
}
