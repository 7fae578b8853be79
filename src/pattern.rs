use crate::cursor::Cursor;
use crate::error::{ParsingError, ParsingResult};
use crate::parser::Parser;
use regex::Regex;
use std::borrow::Cow;

/// Compile `source` so it can only match at the start of the haystack
fn anchored(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", source))
}

/// Parser that matches a regular expression at the cursor and returns the
/// matched text
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Pattern {
            source: source.to_string(),
            regex: anchored(source)?,
        })
    }
}

impl Parser for Pattern {
    type Output = String;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/{}/", self.source))
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let remaining = cursor.tail();
        let Some(found) = self.regex.find(remaining) else {
            return Err(ParsingError::unexpected_symbol(
                cursor,
                format!("pattern /{}/, got {}", self.source, remaining),
            ));
        };
        cursor.consume(found.end());
        Ok(found.as_str().to_string())
    }
}

/// Full match of a [`Capture`] and its groups in order
///
/// Groups that did not take part in the match are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub matched: String,
    pub groups: Vec<String>,
}

/// Parser that matches a regular expression at the cursor and returns the
/// match together with its capture groups
#[derive(Debug, Clone)]
pub struct Capture {
    source: String,
    regex: Regex,
}

impl Capture {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Capture {
            source: source.to_string(),
            regex: anchored(source)?,
        })
    }
}

impl Parser for Capture {
    type Output = Captured;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/{}/", self.source))
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        let remaining = cursor.tail();
        let Some(captures) = self.regex.captures(remaining) else {
            return Err(ParsingError::unexpected_symbol(
                cursor,
                format!("pattern /{}/, got {}", self.source, remaining),
            ));
        };

        let mut groups = captures.iter().map(|group| {
            group
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        });
        // Group 0 is the whole match and always participates
        let matched = groups.next().unwrap_or_default();
        let groups: Vec<String> = groups.collect();

        cursor.consume(matched.len());
        Ok(Captured { matched, groups })
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(source: &str) -> Result<Pattern, regex::Error> {
    Pattern::new(source)
}

/// Convenience function to create a Capture parser
pub fn capture(source: &str) -> Result<Capture, regex::Error> {
    Capture::new(source)
}
