use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Output = P::Output;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed("lazy")
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::few::few;
    use crate::map::MapExt;
    use crate::optional::optional;
    use crate::parser::BoxedParser;

    // nested := "(" nested? ")"
    fn nested() -> BoxedParser<usize> {
        few(("(", optional(lazy(nested)), ")"))
            .map("nested", |_, (_, inner, _)| Ok(inner.map_or(1, |depth| depth + 1)))
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| "a");
        let mut cursor = Cursor::new("aaaa");
        assert_eq!(parser.parse(&mut cursor).unwrap(), "a");
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_lazy_recursion() {
        assert_eq!(nested().parse_str("((( )))").unwrap(), 3);
        assert!(nested().parse_str("(()").is_err());
    }
}
