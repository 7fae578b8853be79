use chatcomb::{
    Command, CommandParser, DEFAULT_MENTION, MentionKind, ParsingError, Value, command, int, nat,
    optional, string, user_mention,
};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::thread;

static PING: Lazy<CommandParser> = Lazy::new(|| {
    command(["ping", "pong"])
        .arg("user", string())
        .arg("reason", optional(string()))
        .build()
});

fn expected(
    prefix: &str,
    label: &str,
    args: &[(&str, Value)],
    remaining: &str,
) -> Command {
    Command {
        prefix: prefix.to_string(),
        label: label.to_string(),
        args: args
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect::<BTreeMap<_, _>>(),
        remaining: remaining.to_string(),
    }
}

#[test]
fn test_every_argument_and_trailing_text() {
    let parsed = PING
        .parse_message(r#"/ping -user hm -reason "heh" tailing content"#)
        .unwrap();
    assert_eq!(
        parsed,
        expected(
            "/",
            "ping",
            &[("user", Value::from("hm")), ("reason", Value::from("heh"))],
            "tailing content"
        )
    );
}

#[test]
fn test_optional_argument_left_out() {
    let parsed = PING.parse_message("/ping -user john").unwrap();
    assert_eq!(
        parsed,
        expected(
            "/",
            "ping",
            &[("user", Value::from("john")), ("reason", Value::Null)],
            ""
        )
    );
}

#[test]
fn test_required_argument_left_out() {
    let error = PING.parse_message(r#"/ping -reason "uh""#).unwrap_err();
    assert_eq!(
        error.to_string(),
        format!(
            "Unexpected symbol '\"' at index {}, expected one of the remaining patterns",
            r#"/ping -reason "uh""#.len()
        )
    );
}

#[test]
fn test_every_prefix() {
    for (message, prefix) in [
        ("/pong -user a", "/"),
        ("$pong -user a", "$"),
        ("<@1384657966061326406>pong -user a", DEFAULT_MENTION),
        ("<@1384657966061326406> pong -user a", "<@1384657966061326406> "),
    ] {
        let parsed = PING.parse_message(message).unwrap();
        assert_eq!(parsed.prefix, prefix, "{}", message);
        assert_eq!(parsed.label, "pong");
        assert_eq!(parsed.str("user"), Some("a"));
    }
}

#[test]
fn test_not_a_command() {
    for message in ["", "ping -user a", "!ping -user a", "/ -user a", "/pin -user a"] {
        assert!(PING.parse_message(message).is_err(), "{:?}", message);
    }
}

#[test]
fn test_quoted_values_keep_spaces_and_escapes() {
    let parsed = PING
        .parse_message(r#"/ping -reason 'two words' -user "say \"hi\"\n""#)
        .unwrap();
    assert_eq!(parsed.str("reason"), Some("two words"));
    assert_eq!(parsed.str("user"), Some("say \"hi\"\n"));
}

#[test]
fn test_remaining_keeps_internal_whitespace() {
    let parsed = PING
        .parse_message("/ping -user a   first  line\nsecond\tline ")
        .unwrap();
    assert_eq!(parsed.remaining, "first  line\nsecond\tline ");
}

#[test]
fn test_flags_need_whitespace_before_value() {
    assert!(PING.parse_message("/ping -userjohn").is_err());
}

#[test]
fn test_arguments_cannot_repeat() {
    let parsed = PING.parse_message("/ping -user a -user b").unwrap();
    assert_eq!(parsed.str("user"), Some("a"));
    assert_eq!(parsed.remaining, "-user b");
}

#[test]
fn test_typed_arguments() {
    let roll = command(["roll"])
        .arg("sides", nat())
        .arg("bonus", optional(int()))
        .arg("target", optional(user_mention()))
        .build();

    let parsed = roll
        .parse_message("/roll -sides 20 -bonus -3 -target <@42>")
        .unwrap();
    assert_eq!(parsed.get("sides"), Some(&Value::Nat(20)));
    assert_eq!(parsed.get("bonus"), Some(&Value::Int(-3)));
    let target = parsed.get("target").and_then(Value::as_mention).unwrap();
    assert_eq!((target.kind, target.id), (MentionKind::User, 42));

    let parsed = roll.parse_message("/roll -sides 6").unwrap();
    assert!(parsed.get("bonus").unwrap().is_null());
    assert!(parsed.get("target").unwrap().is_null());
}

#[test]
fn test_semantic_errors_surface() {
    let roll = command(["roll"]).arg("sides", nat()).build();
    assert!(roll.parse_message("/roll -sides six").is_err());

    let kick = command(["kick"]).arg("who", user_mention()).build();
    assert!(kick.parse_message("/kick -who <@9223372036854775808>").is_err());
}

#[test]
fn test_optional_arguments_resolve_in_declaration_order() {
    let names = ["a", "b", "c"];
    let mut builder = command(["opts"]);
    for name in names {
        builder = builder.arg(name, optional(string()));
    }
    let parser = builder.build();

    let parsed = parser.parse_message("/opts -a A -b B -c C").unwrap();
    for name in names {
        assert_eq!(parsed.str(name), Some(name.to_uppercase().as_str()));
    }
    assert_eq!(parsed.remaining, "");

    // Each pass settles the first optional whose flag is not next as absent
    let parsed = parser.parse_message("/opts -c C -b B -a A").unwrap();
    assert!(parsed.get("a").unwrap().is_null());
    assert!(parsed.get("b").unwrap().is_null());
    assert_eq!(parsed.str("c"), Some("C"));
    assert_eq!(parsed.remaining, "-b B -a A");
}

#[test]
fn test_first_alias_wins() {
    let parser = command(["p", "ping"]).build();
    let parsed = parser.parse_message("/ping").unwrap();
    assert_eq!(parsed.label, "p");
    assert_eq!(parsed.remaining, "ing");
}

#[test]
fn test_report_points_into_message() {
    let message = "/ping\n-reason x";
    let error = PING.parse_message(message).unwrap_err();
    assert!(matches!(error, ParsingError::UnexpectedSymbol { .. }));
    let report = error.report(message);
    assert!(report.contains("  > 2 | -reason x"), "{}", report);
}

#[test]
fn test_grammar_is_shared_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let parsed = PING
                    .parse_message(&format!("/ping -user u{} rest {}", i, i))
                    .unwrap();
                (parsed.str("user").map(str::to_string), parsed.remaining)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (user, remaining) = handle.join().unwrap();
        assert_eq!(user, Some(format!("u{}", i)));
        assert_eq!(remaining, format!("rest {}", i));
    }
}
