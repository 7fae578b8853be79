use crate::branches::Branches;
use crate::cursor::Cursor;
use crate::error::{ParsingError, ParsingResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that tries alternatives in declaration order
///
/// Each alternative runs under its own checkpoint. The first one that
/// succeeds wins and later ones are never tried, even if they would match
/// more input.
pub struct Pick<B> {
    branches: B,
}

impl<B> Pick<B> {
    pub fn new(branches: B) -> Self {
        Pick { branches }
    }
}

impl<B> Parser for Pick<B>
where
    B: Branches,
{
    type Output = B::Output;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("pick({})", self.branches.describe()))
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        for index in 0..self.branches.count() {
            let attempt = cursor.speculate(|cursor| self.branches.parse_branch(index, cursor));
            if attempt.is_ok() {
                return attempt;
            }
        }
        Err(ParsingError::unexpected_eoi(cursor, self.tag()))
    }
}

/// Convenience function to create a Pick parser from a tuple or vector of parsers
pub fn pick<B>(branches: B) -> Pick<B>
where
    B: Branches,
{
    Pick::new(branches)
}
