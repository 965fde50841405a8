//! Property tests over the engine's structural guarantees.

use proptest::prelude::*;
use tradepost_command::{
    ArgsReader, Command, CommandArgument, CommandContext, CommandInput, FirstOfArgument,
    IntegerArgument, LiteralArgument, OptionalArgument, StringArgument, text,
};

fn tester() -> CommandInput {
    CommandInput::new("tester")
}

/// Strategy for arbitrary whitespace-free tokens, including empty ones.
fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9?_.-]{0,12}"
}

proptest! {
    #[test]
    fn integers_round_trip_through_parsing(n in any::<i64>()) {
        let argument = IntegerArgument::new("count");
        let rendered = n.to_string();
        let tokens = [rendered.as_str()];
        let mut ctx = CommandContext::new();
        let mut reader = ArgsReader::new(&tokens);

        argument.parse(&tester(), &mut ctx, &mut reader).unwrap();
        prop_assert_eq!(ctx.get_int("count"), Some(n));
        prop_assert_eq!(reader.position(), 1);
    }

    #[test]
    fn strings_pass_through_verbatim(raw in token()) {
        let argument = StringArgument::new("value");
        let tokens = [raw.as_str()];
        let mut ctx = CommandContext::new();
        let mut reader = ArgsReader::new(&tokens);

        argument.parse(&tester(), &mut ctx, &mut reader).unwrap();
        prop_assert_eq!(ctx.get_str("value"), Some(raw.as_str()));
    }

    #[test]
    fn failed_parses_leave_reader_and_context_untouched(raw in token()) {
        // An alternation of things `raw` may or may not satisfy; whenever
        // the whole slot fails, the reader and context must be pristine.
        let slot = FirstOfArgument::new("slot")
            .or(LiteralArgument::new("remove"))
            .or(IntegerArgument::new("count"));

        let tokens = [raw.as_str()];
        let mut ctx = CommandContext::new();
        let mut reader = ArgsReader::new(&tokens);

        if slot.parse(&tester(), &mut ctx, &mut reader).is_err() {
            prop_assert_eq!(reader.position(), 0);
            prop_assert!(ctx.is_empty());
        } else {
            prop_assert_eq!(reader.position(), 1);
            prop_assert_eq!(ctx.len(), 1);
        }
    }

    #[test]
    fn optional_never_fails(raw in token()) {
        let argument = OptionalArgument::new(IntegerArgument::new("count"));
        let tokens = [raw.as_str()];
        let mut ctx = CommandContext::new();
        let mut reader = ArgsReader::new(&tokens);

        prop_assert!(argument.parse(&tester(), &mut ctx, &mut reader).is_ok());
    }

    #[test]
    fn normalize_is_idempotent(raw in "[a-zA-Z0-9_ -]{0,20}") {
        let once = text::normalize(&raw);
        let twice = text::normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn identifier_matching_is_reflexive_for_nonblank(raw in "[a-zA-Z0-9]{1,12}") {
        prop_assert!(text::matches_identifier(&raw, &raw));
    }

    #[test]
    fn completion_never_panics_and_never_errors(a in token(), b in token()) {
        let command = Command::new("settradeperm")
            .add_argument(StringArgument::new("shop"))
            .add_argument(OptionalArgument::new(
                FirstOfArgument::new("permarg")
                    .or(LiteralArgument::new("?"))
                    .or(LiteralArgument::new("-"))
                    .or(StringArgument::new("perm")),
            ));

        let tokens = [a.as_str(), b.as_str()];
        let candidates = command.completions(&tester(), &tokens);
        // Candidates are unique.
        for (i, c) in candidates.iter().enumerate() {
            prop_assert!(!candidates[..i].contains(c));
        }
    }

    #[test]
    fn parse_consumes_everything_or_fails(a in token(), b in token()) {
        let command = Command::new("pair")
            .add_argument(StringArgument::new("first"))
            .add_argument(StringArgument::new("second"));

        let tokens = [a.as_str(), b.as_str()];
        let ctx = command.parse(&tester(), &tokens).unwrap();
        prop_assert_eq!(ctx.get_str("first"), Some(a.as_str()));
        prop_assert_eq!(ctx.get_str("second"), Some(b.as_str()));
    }
}
