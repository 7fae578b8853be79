use crate::branches::Branches;
use crate::cursor::Cursor;
use crate::error::{ParsingError, ParsingResult};
use crate::parser::Parser;
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that matches every branch exactly once, in any order
///
/// Resolution works in passes over the unresolved branches, in declaration
/// order. The first branch that matches is recorded and the pass restarts from
/// the top of the now smaller set. A pass in which no branch matches fails
/// the whole combinator. At most n passes of at most n attempts each, so the
/// cost is quadratic in the number of branches rather than factorial.
///
/// A branch that matches without consuming input counts as a match too, so an
/// `optional` branch declared early resolves to `None` on the first pass in
/// which its own input is not next.
///
/// The output holds one value per branch, indexed by declaration order
/// regardless of the order the input presented them in.
pub struct Unordered<B> {
    branches: B,
}

impl<B> Unordered<B> {
    pub fn new(branches: B) -> Self {
        Unordered { branches }
    }
}

impl<B> Parser for Unordered<B>
where
    B: Branches,
{
    type Output = Vec<B::Output>;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("unordered({})", self.branches.describe()))
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let count = self.branches.count();
        let mut results: Vec<Option<B::Output>> = (0..count).map(|_| None).collect();
        let mut unresolved: Vec<usize> = (0..count).collect();

        while !unresolved.is_empty() {
            let resolved = unresolved.iter().enumerate().find_map(|(slot, &index)| {
                cursor
                    .speculate(|cursor| self.branches.parse_branch(index, cursor))
                    .ok()
                    .map(|value| (slot, index, value))
            });

            let Some((slot, index, value)) = resolved else {
                let remaining: Vec<_> = unresolved
                    .iter()
                    .map(|&index| self.branches.branch_tag(index))
                    .collect();
                trace!(offset = cursor.offset(), ?remaining, "unordered pass resolved nothing");
                return Err(ParsingError::unexpected_symbol(
                    cursor,
                    "one of the remaining patterns",
                ));
            };

            results[index] = Some(value);
            unresolved.remove(slot);
        }

        Ok(results.into_iter().flatten().collect())
    }
}

/// Convenience function to create an Unordered parser from a tuple or vector of parsers
pub fn unordered<B>(branches: B) -> Unordered<B>
where
    B: Branches,
{
    Unordered::new(branches)
}
