//! Chat commands: a prefix, one of several aliases, named arguments in any
//! order and free text after them

pub mod argument;
pub mod mention;
pub mod prefix;
pub mod value;

use crate::cursor::Cursor;
use crate::error::ParsingResult;
use crate::few::few;
use crate::literal::{Literal, literal};
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::{BoxedParser, Parser};
use crate::pick::pick;
use crate::text::chars::skip;
use crate::text::string::greedy_string;
use crate::unordered::unordered;
use argument::{Argument, IntoArgument};
use prefix::{PrefixConfig, prefix};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, trace};
use value::Value;

/// A parsed command invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// The prefix exactly as written, e.g. `/` or a mention with its space
    pub prefix: String,
    /// Which alias was used
    pub label: String,
    /// Every declared argument; absent optional ones are [`Value::Null`]
    pub args: BTreeMap<String, Value>,
    /// Text after the arguments, internal whitespace kept
    pub remaining: String,
}

impl Command {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// The argument `name` if it holds a string
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

/// Whitespace and then everything up to the end of input
fn remainder() -> impl Parser<Output = Value> {
    optional(few((skip(), greedy_string()))).map("remainder", |_, rest| {
        Ok(Value::Str(rest.map(|(_, text)| text).unwrap_or_default()))
    })
}

/// Start declaring a command answering to any of `aliases`
///
/// Aliases are tried in the order given; the first one that matches wins.
pub fn command<I, S>(aliases: I) -> CommandBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    CommandBuilder {
        aliases: aliases.into_iter().map(literal).collect(),
        arguments: Vec::new(),
        prefix: PrefixConfig::default(),
    }
}

pub struct CommandBuilder {
    aliases: Vec<Literal>,
    arguments: Vec<Argument>,
    prefix: PrefixConfig,
}

impl CommandBuilder {
    /// Declare the argument `name`, written as `-name value`
    ///
    /// Wrap the value parser in [`optional`] to make the argument optional.
    /// Declaring a name twice replaces the first declaration.
    pub fn arg<M>(mut self, name: &str, parser: impl IntoArgument<M>) -> Self {
        self.arguments.retain(|argument| argument.name() != name);
        self.arguments.push(parser.into_argument(name));
        self
    }

    /// Use `mention` instead of the built-in bot mention as a prefix
    pub fn mention(mut self, mention: impl Into<String>) -> Self {
        self.prefix.mention = mention.into();
        self
    }

    pub fn config(mut self, config: &PrefixConfig) -> Self {
        self.prefix = config.clone();
        self
    }

    pub fn build(self) -> CommandParser {
        let names: Vec<String> = self
            .arguments
            .iter()
            .map(|argument| argument.name().to_string())
            .collect();
        let required: Vec<String> = self
            .arguments
            .iter()
            .filter(|argument| argument.is_required())
            .map(|argument| argument.name().to_string())
            .collect();
        debug!(
            aliases = ?self.aliases.iter().map(Literal::text).collect::<Vec<_>>(),
            arguments = ?names,
            ?required,
            mention = %self.prefix.mention,
            "building command grammar"
        );

        let mut entries: Vec<BoxedParser<Value>> = self
            .arguments
            .iter()
            .map(|argument| argument.parser().clone())
            .collect();
        entries.push(remainder().boxed());

        let grammar = few((
            prefix(self.prefix.mention),
            pick(self.aliases),
            unordered(entries),
        ))
        .map("command", move |_, (prefix, label, mut values)| {
            let remaining = match values.pop() {
                Some(Value::Str(text)) => text,
                _ => String::new(),
            };
            let command = Command {
                prefix,
                label,
                args: names.iter().cloned().zip(values).collect(),
                remaining,
            };
            trace!(?command, "parsed command");
            Ok(command)
        })
        .boxed();

        CommandParser { grammar, required }
    }
}

/// A compiled command grammar
///
/// Immutable once built and safe to share between threads.
#[derive(Clone)]
pub struct CommandParser {
    grammar: BoxedParser<Command>,
    required: Vec<String>,
}

impl CommandParser {
    /// Names of the arguments every message must supply, in declaration order
    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn parse_message(&self, message: &str) -> ParsingResult<Command> {
        self.parse_str(message)
    }
}

impl Parser for CommandParser {
    type Output = Command;

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed("command")
    }

    fn skips_whitespace(&self) -> bool {
        false
    }

    fn attempt(&self, cursor: &mut Cursor<'_>) -> ParsingResult<Self::Output> {
        self.grammar.parse(cursor)
    }
}
