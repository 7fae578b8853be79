use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that treats its inner parser as a single token
///
/// Whitespace is skipped once before the token; inside it nothing skips, so
/// the inner parser sees every symbol including spaces.
pub struct Verbatim<P> {
    parser: P,
}

impl<P> Verbatim<P> {
    pub fn new(parser: P) -> Self {
        Verbatim { parser }
    }
}

impl<P> Parser for Verbatim<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn tag(&self) -> Cow<'_, str> {
        self.parser.tag()
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        cursor.enter_verbatim();
        let result = self.parser.parse(cursor);
        cursor.exit_verbatim();
        result
    }
}

/// Extension trait to add .verbatim() method support for parsers
pub trait VerbatimExt: Parser + Sized {
    fn verbatim(self) -> Verbatim<Self> {
        Verbatim::new(self)
    }
}

impl<P> VerbatimExt for P where P: Parser {}

/// Convenience function to create a Verbatim parser
pub fn verbatim<P>(parser: P) -> Verbatim<P>
where
    P: Parser,
{
    Verbatim::new(parser)
}
