//! Integration tests for the token reader.

use tradepost_command::ArgsReader;

#[test]
fn sequential_consumption() {
    let mut reader = ArgsReader::new(&["a", "b", "c"]);

    assert_eq!(reader.len(), 3);
    assert_eq!(reader.remaining(), 3);
    assert_eq!(reader.peek(), Some("a"));
    assert_eq!(reader.next().unwrap(), "a");
    assert_eq!(reader.next().unwrap(), "b");
    assert_eq!(reader.remaining(), 1);
    assert_eq!(reader.next().unwrap(), "c");
    assert!(!reader.has_next());
    assert!(reader.next().is_err());
}

#[test]
fn peek_does_not_consume() {
    let mut reader = ArgsReader::new(&["only"]);

    assert_eq!(reader.peek(), Some("only"));
    assert_eq!(reader.peek(), Some("only"));
    assert_eq!(reader.position(), 0);
    assert_eq!(reader.next().unwrap(), "only");
    assert_eq!(reader.peek(), None);
}

#[test]
fn checkpoint_restores_the_exact_position() {
    let mut reader = ArgsReader::new(&["a", "b", "c", "d"]);

    reader.next().unwrap();
    let checkpoint = reader.checkpoint();
    reader.next().unwrap();
    reader.next().unwrap();
    assert_eq!(reader.position(), 3);

    reader.reset(checkpoint);
    assert_eq!(reader.position(), 1);
    assert_eq!(reader.peek(), Some("b"));
}

#[test]
fn checkpoints_nest_in_any_order() {
    let mut reader = ArgsReader::new(&["a", "b", "c"]);

    let outer = reader.checkpoint();
    reader.next().unwrap();
    let inner = reader.checkpoint();
    reader.next().unwrap();

    reader.reset(inner);
    assert_eq!(reader.peek(), Some("b"));
    reader.reset(outer);
    assert_eq!(reader.peek(), Some("a"));
}

#[test]
fn empty_tokens_are_real_tokens() {
    let mut reader = ArgsReader::new(&["", "x"]);

    assert_eq!(reader.remaining(), 2);
    assert_eq!(reader.next().unwrap(), "");
    assert_eq!(reader.next().unwrap(), "x");
}

#[test]
fn empty_reader_reports_exhaustion() {
    let mut reader = ArgsReader::new(&[]);

    assert!(reader.is_empty());
    assert!(!reader.has_next());
    assert_eq!(reader.peek(), None);
    assert!(reader.next().is_err());
}
