//! Integration tests for the primitive arguments.

use tradepost_command::{
    ArgsReader, CommandArgument, CommandContext, CommandInput, IntegerArgument, LiteralArgument,
    ParseError, StringArgument,
};

fn parse(
    argument: &dyn CommandArgument,
    tokens: &[&str],
) -> Result<(CommandContext, usize), ParseError> {
    let input = CommandInput::new("tester");
    let mut ctx = CommandContext::new();
    let mut reader = ArgsReader::new(tokens);
    argument
        .parse(&input, &mut ctx, &mut reader)
        .map(|()| (ctx, reader.position()))
}

fn complete(argument: &dyn CommandArgument, tokens: &[&str]) -> Vec<String> {
    let input = CommandInput::new("tester");
    let ctx = CommandContext::new();
    let reader = ArgsReader::new(tokens);
    argument.complete(&input, &ctx, &reader)
}

// =============================================================================
// IntegerArgument
// =============================================================================

#[test]
fn integer_accepts_signed_decimal() {
    let argument = IntegerArgument::new("count");

    for (token, expected) in [("0", 0), ("42", 42), ("+5", 5), ("-7", -7)] {
        let (ctx, consumed) = parse(&argument, &[token]).unwrap();
        assert_eq!(ctx.get_int("count"), Some(expected), "token {token:?}");
        assert_eq!(consumed, 1);
    }
}

#[test]
fn integer_accepts_i64_extremes() {
    let argument = IntegerArgument::new("count");

    let max = i64::MAX.to_string();
    let (ctx, _) = parse(&argument, &[&max]).unwrap();
    assert_eq!(ctx.get_int("count"), Some(i64::MAX));

    let min = i64::MIN.to_string();
    let (ctx, _) = parse(&argument, &[&min]).unwrap();
    assert_eq!(ctx.get_int("count"), Some(i64::MIN));
}

#[test]
fn integer_rejects_overflow_and_garbage() {
    let argument = IntegerArgument::new("count");

    for token in ["9223372036854775808", "abc", "1.5", "", "--3"] {
        let err = parse(&argument, &[token]).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidArgument {
                name: "count".to_string(),
                raw: token.to_string(),
            },
            "token {token:?}"
        );
    }
}

#[test]
fn integer_missing_names_the_argument() {
    let argument = IntegerArgument::new("count");
    let err = parse(&argument, &[]).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingArgument {
            name: "count".to_string(),
        }
    );
}

#[test]
fn integer_offers_no_completions() {
    let argument = IntegerArgument::new("count");
    assert!(complete(&argument, &["4"]).is_empty());
    assert!(complete(&argument, &[""]).is_empty());
}

// =============================================================================
// StringArgument
// =============================================================================

#[test]
fn string_takes_tokens_verbatim() {
    let argument = StringArgument::new("perm");

    for token in ["trade.bakery", "UPPER", "-", "?", "a_b-c"] {
        let (ctx, consumed) = parse(&argument, &[token]).unwrap();
        assert_eq!(ctx.get_str("perm"), Some(token));
        assert_eq!(consumed, 1);
    }
}

#[test]
fn string_accepts_an_explicit_empty_token() {
    let argument = StringArgument::new("perm");
    let (ctx, consumed) = parse(&argument, &[""]).unwrap();
    assert_eq!(ctx.get_str("perm"), Some(""));
    assert_eq!(consumed, 1);
}

#[test]
fn string_missing_is_still_a_failure() {
    let argument = StringArgument::new("perm");
    let err = parse(&argument, &[]).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingArgument {
            name: "perm".to_string(),
        }
    );
}

// =============================================================================
// LiteralArgument
// =============================================================================

#[test]
fn literal_matches_loosely_and_binds_a_flag() {
    let argument = LiteralArgument::new("remove");

    for token in ["remove", "REMOVE", "Re-Move", "re_move"] {
        let (ctx, consumed) = parse(&argument, &[token]).unwrap();
        assert_eq!(ctx.get_bool("remove"), Some(true), "token {token:?}");
        assert_eq!(consumed, 1);
    }
}

#[test]
fn literal_rejects_near_misses() {
    let argument = LiteralArgument::new("remove");

    for token in ["removes", "remov", "delete", ""] {
        assert!(parse(&argument, &[token]).is_err(), "token {token:?}");
    }
}

#[test]
fn punctuation_literals_do_not_collapse() {
    let query = LiteralArgument::new("?");
    let dash = LiteralArgument::new("-");

    assert!(parse(&query, &["?"]).is_ok());
    assert!(parse(&query, &["-"]).is_err());
    assert!(parse(&dash, &["-"]).is_ok());
    assert!(parse(&dash, &["_"]).is_ok());
    assert!(parse(&dash, &["?"]).is_err());
}

#[test]
fn literal_aliases_bind_the_primary_name() {
    let argument = LiteralArgument::new("remove").with_alias("rm");
    let (ctx, _) = parse(&argument, &["rm"]).unwrap();
    assert!(ctx.has("remove"));
    assert!(!ctx.has("rm"));
}

#[test]
fn literal_completion_is_prefix_filtered() {
    let argument = LiteralArgument::new("remove");

    assert_eq!(complete(&argument, &["re"]), vec!["remove"]);
    assert_eq!(complete(&argument, &["RE-M"]), vec!["remove"]);
    assert_eq!(complete(&argument, &[""]), vec!["remove"]);
    assert!(complete(&argument, &["xy"]).is_empty());
}
