use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::many::repeat;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Sequence<P> {
    parser: P,
}

impl<P> Sequence<P> {
    pub fn new(parser: P) -> Self {
        Sequence { parser }
    }
}

impl<P> Parser for Sequence<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("sequence({})", self.parser.tag()))
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        // First parse must succeed
        let first = self.parser.parse(cursor)?;
        let mut results = vec![first];
        repeat(&self.parser, cursor, &mut results);
        Ok(results)
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<P>(parser: P) -> Sequence<P>
where
    P: Parser,
{
    Sequence::new(parser)
}
