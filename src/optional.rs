use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that makes its inner parser optional
///
/// A failed attempt is rolled back and yields `None`; `Optional` itself never
/// fails. The inner parser stays reachable through [`Optional::inner`] so
/// callers can schedule it differently, as the command layer does for
/// optional arguments.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }

    /// The parser this one was built on
    pub fn inner(&self) -> &P {
        &self.parser
    }

    pub fn into_inner(self) -> P {
        self.parser
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed("optional")
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        Ok(cursor.speculate(|cursor| self.parser.parse(cursor)).ok())
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}
