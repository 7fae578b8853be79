use crate::cursor::{Cursor, is_whitespace};
use crate::error::{ParsingError, ParsingResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string symbol by symbol
#[derive(Debug, Clone)]
pub struct Literal {
    text: Cow<'static, str>,
}

impl Literal {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Literal { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Parser for Literal {
    type Output = String;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        match_literal(&self.text, cursor)
    }

    fn skips_whitespace(&self) -> bool {
        skips_before(&self.text)
    }
}

/// Empty literals and literals that are themselves whitespace match in place
pub(crate) fn skips_before(text: &str) -> bool {
    text.chars().next().is_some_and(|first| !is_whitespace(first))
}

pub(crate) fn match_literal(text: &str, cursor: &mut Cursor<'_>) -> ParsingResult<String> {
    for expected in text.chars() {
        // Running out of input is a mismatch like any other symbol
        if cursor.advance() != Some(expected) {
            return Err(ParsingError::unexpected_symbol(
                cursor,
                format!("{} (full string: {})", expected, text),
            ));
        }
    }
    Ok(text.to_string())
}

/// Convenience function to create a Literal parser
pub fn literal(text: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(text)
}
