//! # ChatComb - Chat Command Parser Combinators
//!
//! A backtracking parser combinator engine for turning free-form chat messages
//! into structured command invocations.
//!
//! Parsers are small immutable values that run against a [`Cursor`], a read
//! position over the input with a stack of checkpoints for backtracking. They
//! combine into larger grammars, up to a complete command:
//!
//! ```
//! use chatcomb::{command, optional, string};
//!
//! let ping = command(["ping", "pong"])
//!     .arg("user", string())
//!     .arg("reason", optional(string()))
//!     .build();
//!
//! let parsed = ping.parse_message(r#"/ping -user hm -reason "heh" and more"#).unwrap();
//! assert_eq!(parsed.label, "ping");
//! assert_eq!(parsed.str("user"), Some("hm"));
//! assert_eq!(parsed.remaining, "and more");
//! ```
//!
//! The library emphasizes:
//!
//! - **Zero panics**: every failure is a [`ParsingError`] carrying the offset it happened at
//! - **Whitespace-insensitive tokens**: leaf parsers skip whitespace before matching
//! - **Order-free arguments**: [`unordered`] resolves flags in any order in quadratic time

pub mod branches;
pub mod command;
pub mod cursor;
pub mod error;
pub mod few;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod only;
pub mod optional;
pub mod parser;
pub mod pattern;
pub mod pick;
pub mod position;
pub mod range;
pub mod raw;
pub mod sequence;
pub mod text;
pub mod unordered;
pub mod verbatim;

pub use command::argument::{Argument, IntoArgument, flag, positional};
pub use command::mention::{Mention, MentionKind, channel_mention, snowflake, user_mention};
pub use command::prefix::{DEFAULT_MENTION, PrefixConfig, prefix};
pub use command::value::Value;
pub use command::{Command, CommandBuilder, CommandParser, command};
pub use cursor::Cursor;
pub use error::{ParsingError, ParsingResult, prettify};
pub use few::few;
pub use lazy::lazy;
pub use literal::{Literal, literal};
pub use many::many;
pub use map::{MapExt, map};
pub use only::only;
pub use optional::optional;
pub use parser::{BoxedParser, Parser};
pub use pattern::{Captured, capture, pattern};
pub use pick::pick;
pub use position::{Position, Span, SpannedExt, spanned};
pub use range::{range, symbol};
pub use raw::raw;
pub use sequence::sequence;
pub use text::{
    alpha, alphanumeric, digit, escape, gap, greedy_string, identifier, int, lowercase, nat, quoted,
    quoted_string, skip, string, uppercase, whitespace, word,
};
pub use unordered::unordered;
pub use verbatim::{VerbatimExt, verbatim};
