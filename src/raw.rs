use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser built from a hand-written parse function
pub struct Raw<F> {
    tag: Cow<'static, str>,
    parse: F,
}

impl<F> Raw<F> {
    pub fn new(tag: impl Into<Cow<'static, str>>, parse: F) -> Self {
        Raw {
            tag: tag.into(),
            parse,
        }
    }
}

impl<F, T> Parser for Raw<F>
where
    F: Fn(&mut Cursor<'_>) -> ParsingResult<T>,
{
    type Output = T;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.tag)
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        (self.parse)(cursor)
    }
}

/// Lift a parse function into a parser
pub fn raw<F, T>(tag: impl Into<Cow<'static, str>>, parse: F) -> Raw<F>
where
    F: Fn(&mut Cursor<'_>) -> ParsingResult<T>,
{
    Raw::new(tag, parse)
}
