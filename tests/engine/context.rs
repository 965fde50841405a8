//! Integration tests for the parse context.

use tradepost_command::CommandContext;
use tradepost_foundation::{ObjectId, Value};

#[test]
fn typed_access_round_trips() {
    let mut ctx = CommandContext::new();
    ctx.put("count", Value::Int(12));
    ctx.put("perm", Value::from("trade.bakery"));
    ctx.put("shop", Value::ObjectRef(ObjectId::new(3)));
    ctx.put("-", Value::Bool(true));

    assert_eq!(ctx.get_int("count"), Some(12));
    assert_eq!(ctx.get_str("perm"), Some("trade.bakery"));
    assert_eq!(ctx.get_object("shop"), Some(ObjectId::new(3)));
    assert_eq!(ctx.get_bool("-"), Some(true));

    assert_eq!(ctx.require_int("count").unwrap(), 12);
    assert_eq!(ctx.require_str("perm").unwrap(), "trade.bakery");
    assert_eq!(ctx.require_object("shop").unwrap(), ObjectId::new(3));
}

#[test]
fn typed_access_does_not_coerce() {
    let mut ctx = CommandContext::new();
    ctx.put("count", Value::Int(12));

    assert_eq!(ctx.get_str("count"), None);
    assert_eq!(ctx.get_bool("count"), None);
    assert!(ctx.require_str("count").is_err());
}

#[test]
fn missing_keys_are_distinguishable_from_mismatches() {
    let mut ctx = CommandContext::new();
    ctx.put("perm", Value::from("x"));

    let missing = ctx.require_int("absent").unwrap_err();
    assert!(missing.to_string().contains("missing"));

    let mismatch = ctx.require_int("perm").unwrap_err();
    assert!(mismatch.to_string().contains("expected int"));
}

#[test]
fn insertion_order_survives_overwrites_and_restores() {
    let mut ctx = CommandContext::new();
    ctx.put("first", Value::Int(1));
    ctx.put("second", Value::Int(2));
    let snapshot = ctx.snapshot();

    ctx.put("third", Value::Int(3));
    ctx.put("first", Value::Int(10));

    let keys: Vec<&str> = ctx.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["first", "second", "third"]);

    ctx.restore(&snapshot);
    let keys: Vec<&str> = ctx.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["first", "second"]);
    assert_eq!(ctx.get_int("first"), Some(1));
}

#[test]
fn snapshots_are_independent_of_later_changes() {
    let mut ctx = CommandContext::new();
    ctx.put("a", Value::Int(1));
    let early = ctx.snapshot();
    ctx.put("b", Value::Int(2));
    let late = ctx.snapshot();

    ctx.restore(&early);
    assert_eq!(ctx.len(), 1);
    ctx.restore(&late);
    assert_eq!(ctx.len(), 2);
    assert_eq!(ctx.get_int("b"), Some(2));
}
