use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// A fixed list of parsers that run one after another
///
/// Implemented for tuples of up to eight parsers; the output is the tuple of
/// their outputs, in order.
pub trait Chain {
    type Output;

    fn parse_chain(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output>;
}

macro_rules! impl_chain {
    ($($parser:ident $index:tt),+) => {
        impl<$($parser),+> Chain for ($($parser,)+)
        where
            $($parser: Parser,)+
        {
            type Output = ($($parser::Output,)+);

            fn parse_chain(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
                Ok(($(self.$index.parse(cursor)?,)+))
            }
        }
    };
}

impl_chain!(A 0);
impl_chain!(A 0, B 1);
impl_chain!(A 0, B 1, C 2);
impl_chain!(A 0, B 1, C 2, D 3);
impl_chain!(A 0, B 1, C 2, D 3, E 4);
impl_chain!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_chain!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_chain!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// Parser combinator that runs a heterogeneous sequence of parsers
///
/// The first failure is returned as is. Parsers that succeeded before it stay
/// consumed; callers that need the input back run `Few` under a checkpoint.
pub struct Few<C> {
    chain: C,
}

impl<C> Few<C> {
    pub fn new(chain: C) -> Self {
        Few { chain }
    }
}

impl<C> Parser for Few<C>
where
    C: Chain,
{
    type Output = C::Output;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed("few")
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        self.chain.parse_chain(cursor)
    }
}

/// Convenience function to create a Few parser from a tuple of parsers
pub fn few<C>(chain: C) -> Few<C>
where
    C: Chain,
{
    Few::new(chain)
}
