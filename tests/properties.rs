use chatcomb::{
    Cursor, Parser, command, int, literal, many, nat, only, optional, quoted, string, unordered,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn empty_literal_never_consumes(input in ".*") {
        let mut cursor = Cursor::new(&input);
        prop_assert_eq!(literal("").parse(&mut cursor).unwrap(), "");
        prop_assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn many_never_fails(input in ".*") {
        let mut cursor = Cursor::new(&input);
        prop_assert!(many(literal("a")).parse(&mut cursor).is_ok());
        prop_assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn optional_never_fails(input in ".*") {
        prop_assert!(optional(nat()).parse_str(&input).is_ok());
    }

    #[test]
    fn nat_round_trips(value in any::<u64>()) {
        prop_assert_eq!(nat().parse_str(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn int_round_trips(value in any::<i64>()) {
        prop_assert_eq!(int().parse_str(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn only_rejects_trailing_input(value in any::<u64>(), trailing in "[ a-z]{1,8}") {
        let input = format!("{}{}", value, trailing);
        prop_assert!(nat().parse_str(&input).is_ok());
        prop_assert!(only(nat()).parse_str(&input).is_err());
    }

    #[test]
    fn quoted_round_trips(text in "[^\"\\\\]*") {
        let input = format!("\"{}\"", text);
        prop_assert_eq!(quoted('"').parse_str(&input).unwrap(), text);
    }

    #[test]
    fn unordered_accepts_any_permutation(
        order in Just(vec!["alpha", "beta", "gamma", "delta", "omega"]).prop_shuffle()
    ) {
        let parser = unordered(vec![
            literal("alpha"),
            literal("beta"),
            literal("gamma"),
            literal("delta"),
            literal("omega"),
        ]);
        let parsed = parser.parse_str(&order.join(" ")).unwrap();
        prop_assert_eq!(parsed, vec!["alpha", "beta", "gamma", "delta", "omega"]);
    }

    #[test]
    fn checkpoints_balance_after_any_parse(input in ".*") {
        let parser = command(["ping"])
            .arg("user", string())
            .arg("reason", optional(string()))
            .build();
        let mut cursor = Cursor::new(&input);
        let _ = parser.parse(&mut cursor);
        prop_assert_eq!(cursor.depth(), 0);
        prop_assert!(!cursor.is_verbatim());
    }

    #[test]
    fn arguments_parse_in_any_order(
        user in "[a-z]{1,8}",
        reason in "[a-z]{1,8}",
        user_first in any::<bool>(),
    ) {
        let parser = command(["ping"])
            .arg("user", string())
            .arg("reason", optional(string()))
            .build();
        let message = if user_first {
            format!("/ping -user {} -reason {}", user, reason)
        } else {
            format!("/ping -reason {} -user {}", reason, user)
        };
        let parsed = parser.parse_message(&message).unwrap();
        prop_assert_eq!(parsed.str("user"), Some(user.as_str()));
        prop_assert_eq!(parsed.str("reason"), Some(reason.as_str()));
        prop_assert_eq!(parsed.remaining, "");
    }
}
