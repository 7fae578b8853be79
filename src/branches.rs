use crate::cursor::Cursor;
use crate::error::{ParsingError, ParsingResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// A list of interchangeable parsers sharing one output type
///
/// Implemented for vectors and for tuples of up to eight parsers, so both a
/// fixed grammar (`("+", "-")`) and a list built at runtime (command aliases)
/// can feed [`pick`](crate::pick::pick) and [`unordered`](crate::unordered::unordered).
pub trait Branches {
    type Output;

    fn count(&self) -> usize;

    /// Parse with the branch at `index`, in declaration order
    fn parse_branch(&self, index: usize, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output>;

    fn branch_tag(&self, index: usize) -> Cow<'_, str>;

    /// Tags of every branch joined for diagnostics
    fn describe(&self) -> String {
        (0..self.count())
            .map(|index| self.branch_tag(index).into_owned())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn missing_branch(index: usize) -> ParsingError {
    ParsingError::custom(format!("no branch at index {}", index))
}

impl<P> Branches for Vec<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn count(&self) -> usize {
        self.len()
    }

    fn parse_branch(&self, index: usize, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        match self.get(index) {
            Some(parser) => parser.parse(cursor),
            None => Err(missing_branch(index)),
        }
    }

    fn branch_tag(&self, index: usize) -> Cow<'_, str> {
        self.get(index)
            .map_or(Cow::Borrowed("?"), |parser| parser.tag())
    }
}

macro_rules! impl_branches {
    ($count:expr; $($parser:ident $index:tt),+) => {
        impl<T, $($parser),+> Branches for ($($parser,)+)
        where
            $($parser: Parser<Output = T>,)+
        {
            type Output = T;

            fn count(&self) -> usize {
                $count
            }

            fn parse_branch(&self, index: usize, cursor: &mut Cursor<'_>) -> ParsingResult<T> {
                match index {
                    $($index => self.$index.parse(cursor),)+
                    _ => Err(missing_branch(index)),
                }
            }

            fn branch_tag(&self, index: usize) -> Cow<'_, str> {
                match index {
                    $($index => self.$index.tag(),)+
                    _ => Cow::Borrowed("?"),
                }
            }
        }
    };
}

impl_branches!(1; A 0);
impl_branches!(2; A 0, B 1);
impl_branches!(3; A 0, B 1, C 2);
impl_branches!(4; A 0, B 1, C 2, D 3);
impl_branches!(5; A 0, B 1, C 2, D 3, E 4);
impl_branches!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_branches!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_branches!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
