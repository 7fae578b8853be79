use crate::cursor::{Cursor, is_whitespace};
use crate::error::{ParsingError, ParsingResult};
use crate::few::few;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::pick::pick;
use crate::range::symbol;
use crate::raw::raw;
use crate::sequence::sequence;
use crate::text::chars::alphanumeric;
use crate::verbatim::verbatim;
use std::borrow::Cow;

/// A run of non-whitespace symbols
pub fn word() -> impl Parser<Output = String> {
    let solid = raw("non-whitespace", |cursor: &mut Cursor<'_>| match cursor.advance() {
        Some(symbol) if !is_whitespace(symbol) => Ok(symbol),
        _ => Err(ParsingError::unexpected_symbol(cursor, "non-whitespace symbol")),
    });
    verbatim(sequence(solid)).map("word", |_, symbols| {
        Ok(symbols.into_iter().collect::<String>())
    })
}

/// A backslash escape: `\"`, `\'`, `\\`, `\n`, `\t` or `\r`
pub fn escape() -> impl Parser<Output = char> {
    verbatim(few(("\\", pick(("\"", "'", "\\", "n", "t", "r"))))).map(
        "escape",
        |_, (_, escaped)| {
            Ok(match escaped.as_str() {
                "n" => '\n',
                "t" => '\t',
                "r" => '\r',
                "'" => '\'',
                "\\" => '\\',
                _ => '"',
            })
        },
    )
}

/// Text between two `delimiter` symbols, with escapes resolved
///
/// A backslash that does not start a known escape is kept as is.
pub fn quoted(delimiter: char) -> impl Parser<Output = String> {
    let inner = raw("quoted symbol", move |cursor: &mut Cursor<'_>| {
        match cursor.advance() {
            Some(symbol) if symbol != delimiter => Ok(symbol),
            Some(_) => Err(ParsingError::unexpected_symbol(
                cursor,
                format!("any symbol but {}", delimiter),
            )),
            None => Err(ParsingError::unexpected_eoi(
                cursor,
                format!("closing {}", delimiter),
            )),
        }
    });
    verbatim(few((
        symbol(delimiter),
        many(pick((escape(), inner))),
        symbol(delimiter),
    )))
    .map("quoted", |_, (_, symbols, _)| {
        Ok(symbols.into_iter().collect::<String>())
    })
}

/// A double or single quoted string
pub fn quoted_string() -> impl Parser<Output = String> {
    pick((quoted('"'), quoted('\'')))
}

/// A quoted string, or a bare word when no quote opens the value
pub fn string() -> impl Parser<Output = String> {
    pick((quoted_string(), word()))
}

/// Parser that takes everything left in the input, whitespace included
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyString;

impl Parser for GreedyString {
    type Output = String;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed("greedy string")
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let rest = cursor.tail();
        cursor.consume(rest.len());
        Ok(rest.to_string())
    }
}

pub fn greedy_string() -> GreedyString {
    GreedyString
}

/// ASCII letters, digits, `-` and `_`
pub fn identifier() -> impl Parser<Output = String> {
    verbatim(sequence(pick((alphanumeric(), symbol('-'), symbol('_')))))
        .map("identifier", |_, symbols| {
            Ok(symbols.into_iter().collect::<String>())
        })
}
