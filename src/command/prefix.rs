use crate::few::few;
use crate::literal::literal;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::Parser;
use crate::pick::pick;
use serde::Deserialize;
use std::borrow::Cow;

/// Mention of the bot that also counts as a command prefix
pub const DEFAULT_MENTION: &str = "<@1384657966061326406>";

/// How a message has to start to be read as a command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrefixConfig {
    pub mention: String,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        PrefixConfig {
            mention: DEFAULT_MENTION.to_string(),
        }
    }
}

/// `/`, `$`, or `mention` with at most one space after it
///
/// The matched text, space included, is the output.
pub fn prefix(mention: impl Into<Cow<'static, str>>) -> impl Parser<Output = String> {
    let mention = few((literal(mention), optional(" "))).map("mention", |_, (mention, space)| {
        Ok(mention + space.as_deref().unwrap_or_default())
    });
    pick(("/", "$", mention))
}
