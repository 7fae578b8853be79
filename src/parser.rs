use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::literal::match_literal;
use std::borrow::Cow;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is built once and reused for any number of parses. It holds no
/// per-parse state: everything mutable lives in the [`Cursor`].
pub trait Parser {
    type Output;

    /// Diagnostic name of this parser
    fn tag(&self) -> Cow<'_, str>;

    /// Match at the current cursor position, without skipping whitespace first
    ///
    /// On failure the cursor may have moved; callers that need the input back
    /// run the attempt under a checkpoint.
    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output>;

    /// Whether `parse` skips whitespace before attempting a match
    ///
    /// Leaf parsers skip; combinators return false and let their leaves do it.
    fn skips_whitespace(&self) -> bool {
        true
    }

    /// Skip leading whitespace if this parser does so, then attempt a match
    fn parse(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        if self.skips_whitespace() {
            cursor.skip_whitespace();
        }
        self.attempt(cursor)
    }

    /// Parse `input` from its start with a fresh cursor
    fn parse_str(&self, input: &str) -> ParsingResult<Self::Output> {
        let mut cursor = Cursor::new(input);
        let result = self.parse(&mut cursor);
        debug_assert_eq!(cursor.depth(), 0, "unbalanced checkpoints in {}", self.tag());
        result
    }

    /// Erase the concrete type of this parser
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

/// A type-erased, shareable parser
pub type BoxedParser<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

impl<P> Parser for Arc<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn tag(&self) -> Cow<'_, str> {
        (**self).tag()
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        (**self).attempt(cursor)
    }

    fn skips_whitespace(&self) -> bool {
        (**self).skips_whitespace()
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn tag(&self) -> Cow<'_, str> {
        (**self).tag()
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        (**self).attempt(cursor)
    }

    fn skips_whitespace(&self) -> bool {
        (**self).skips_whitespace()
    }
}

/// A string slice parses as the literal text it contains
impl Parser for &'static str {
    type Output = String;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        match_literal(self, cursor)
    }

    fn skips_whitespace(&self) -> bool {
        crate::literal::skips_before(self)
    }
}
