use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that transforms the output of a successful parse
///
/// The mapping function sees the cursor after the inner parse and may itself
/// reject the value, which is how semantic checks (range limits and the like)
/// sit on top of a syntactic match. Failures of the inner parser are returned
/// untouched and the mapping function is not called.
pub struct Map<P, F> {
    tag: Cow<'static, str>,
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(tag: impl Into<Cow<'static, str>>, parser: P, mapper: F) -> Self {
        Map {
            tag: tag.into(),
            parser,
            mapper,
        }
    }

    /// The parser this one was built on
    pub fn wrapped(&self) -> &P {
        &self.parser
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(&mut Cursor<'_>, P::Output) -> ParsingResult<U>,
{
    type Output = U;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.tag)
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let value = self.parser.parse(cursor)?;
        (self.mapper)(cursor, value)
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(tag: impl Into<Cow<'static, str>>, parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(&mut Cursor<'_>, P::Output) -> ParsingResult<U>,
{
    Map::new(tag, parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, tag: impl Into<Cow<'static, str>>, mapper: F) -> Map<Self, F>
    where
        F: Fn(&mut Cursor<'_>, Self::Output) -> ParsingResult<U>,
    {
        Map::new(tag, self, mapper)
    }
}

impl<P> MapExt for P where P: Parser {}
