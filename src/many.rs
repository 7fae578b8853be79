use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Each attempt runs under a checkpoint, so a failing attempt leaves the
/// cursor where the previous one ended. `Many` itself never fails.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// Apply `parser` until it fails, collecting every success
///
/// An attempt that succeeds without consuming input would succeed forever, so
/// it ends the loop after being recorded.
pub(crate) fn repeat<P>(parser: &P, cursor: &mut Cursor<'_>, results: &mut Vec<P::Output>)
where
    P: Parser + ?Sized,
{
    loop {
        let before = cursor.offset();
        match cursor.speculate(|cursor| parser.parse(cursor)) {
            Ok(value) => {
                results.push(value);
                if cursor.offset() == before {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("many({})", self.parser.tag()))
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let mut results = Vec::new();
        repeat(&self.parser, cursor, &mut results);
        Ok(results)
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}
