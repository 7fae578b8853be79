use crate::many::{Many, many};
use crate::pick::{Pick, pick};
use crate::range::{Range, range};
use crate::sequence::{Sequence, sequence};

pub type Whitespace = Pick<(&'static str, &'static str, &'static str, &'static str)>;

/// One ASCII decimal digit
pub fn digit() -> Range {
    range('0', '9')
}

pub fn lowercase() -> Range {
    range('a', 'z')
}

pub fn uppercase() -> Range {
    range('A', 'Z')
}

/// One ASCII letter, either case
pub fn alpha() -> Pick<(Range, Range)> {
    pick((lowercase(), uppercase()))
}

/// One ASCII letter or digit
pub fn alphanumeric() -> Pick<(Pick<(Range, Range)>, Range)> {
    pick((alpha(), digit()))
}

/// A single space, tab, carriage return or newline
pub fn whitespace() -> Whitespace {
    pick((" ", "\t", "\r", "\n"))
}

/// Any amount of whitespace, including none
pub fn skip() -> Many<Whitespace> {
    many(whitespace())
}

/// At least one whitespace symbol
pub fn gap() -> Sequence<Whitespace> {
    sequence(whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::only::only;
    use crate::parser::Parser;
    use rstest::rstest;

    #[test]
    fn test_digit_accepts_every_digit() {
        for symbol in '0'..='9' {
            assert_eq!(digit().parse_str(&symbol.to_string()).unwrap(), symbol);
        }
    }

    #[test]
    fn test_letters_accept_their_case() {
        for symbol in 'a'..='z' {
            assert!(lowercase().parse_str(&symbol.to_string()).is_ok());
            assert!(uppercase().parse_str(&symbol.to_string()).is_err());
        }
        for symbol in 'A'..='Z' {
            assert!(uppercase().parse_str(&symbol.to_string()).is_ok());
            assert!(lowercase().parse_str(&symbol.to_string()).is_err());
        }
    }

    #[rstest]
    #[case("e", false)]
    #[case("/", false)]
    #[case(":", false)]
    #[case("0", true)]
    #[case("9", true)]
    fn test_digit_bounds(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(digit().parse_str(input).is_ok(), accepted);
    }

    #[rstest]
    #[case("a", true)]
    #[case("A", true)]
    #[case("0", false)]
    #[case("_", false)]
    fn test_alpha(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(alpha().parse_str(input).is_ok(), accepted);
    }

    #[rstest]
    #[case("a", true)]
    #[case("A", true)]
    #[case("0", true)]
    #[case("_", false)]
    fn test_alphanumeric(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(alphanumeric().parse_str(input).is_ok(), accepted);
    }

    #[test]
    fn test_greedy_alphanumeric() {
        assert!(many(alphanumeric()).parse_str("Hello420").is_ok());
        assert_eq!(many(alphanumeric()).parse_str("Hello420").unwrap().len(), 8);
        assert!(only(many(alphanumeric())).parse_str("Hello!").is_err());
    }

    #[test]
    fn test_whitespace_matches_in_place() {
        for input in [" ", "\t", "\r", "\n"] {
            assert_eq!(whitespace().parse_str(input).unwrap(), input);
        }
        assert!(whitespace().parse_str("x").is_err());
    }

    #[test]
    fn test_skip_and_gap() {
        assert_eq!(skip().parse_str(" \t\n x").unwrap().len(), 4);
        assert!(skip().parse_str("x").unwrap().is_empty());
        assert_eq!(gap().parse_str("  x").unwrap().len(), 2);
        assert!(gap().parse_str("x").is_err());
    }
}
