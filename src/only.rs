use crate::cursor::Cursor;
use crate::error::{ParsingError, ParsingResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that requires its inner parser to consume the whole input
pub struct Only<P> {
    parser: P,
}

impl<P> Only<P> {
    pub fn new(parser: P) -> Self {
        Only { parser }
    }
}

impl<P> Parser for Only<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("only({})", self.parser.tag()))
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let value = cursor.speculate(|cursor| self.parser.parse(cursor))?;
        if !cursor.is_at_end() {
            return Err(ParsingError::expected_eoi(cursor));
        }
        Ok(value)
    }
}

/// Convenience function to create an Only parser
pub fn only<P>(parser: P) -> Only<P>
where
    P: Parser,
{
    Only::new(parser)
}
