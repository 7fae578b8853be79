//! Ready-made parsers for chat text: character classes, numbers and strings

pub mod chars;
pub mod number;
pub mod string;

pub use chars::{alpha, alphanumeric, digit, gap, lowercase, skip, uppercase, whitespace};
pub use number::{int, nat};
pub use string::{escape, greedy_string, identifier, quoted, quoted_string, string, word};
