use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{arbitrary::JsonNumber, utils::render};
use crate::{ParserOptions, Value, parser::Parser};

fn iterations() -> u64 {
    #[cfg(not(any(miri, feature = "test-fast")))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(any(miri, feature = "test-fast"))]
    let tests = 10;
    tests
}

fn parse_and_check_scratch(input: &[u8], options: ParserOptions) -> bool {
    let mut parser = Parser::new(input, options);
    let _ = parser.parse_document();
    parser.scratch_usage() == 0
}

/// Property: arbitrary bytes never panic the parser and never leave anything
/// on the scratch stacks.
#[test]
fn arbitrary_bytes_drain_scratch() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        parse_and_check_scratch(&bytes, ParserOptions::default())
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: every prefix of a valid document, and the document with one byte
/// replaced, parses or fails without leaking scratch space.
#[test]
fn damaged_documents_drain_scratch() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, cut: usize, patch: u8, depth: u8) -> bool {
        let text = render(&value).into_bytes();
        let options = ParserOptions {
            max_depth: usize::from(depth % 6),
        };
        let cut = if text.is_empty() { 0 } else { cut % text.len() };
        if !parse_and_check_scratch(&text[..cut], options) {
            return false;
        }
        let mut patched = text;
        if let Some(b) = patched.get_mut(cut) {
            *b = patch;
        }
        parse_and_check_scratch(&patched, options)
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Value, usize, u8, u8) -> bool);
}

/// A strict prefix of an array is never accepted.
#[test]
fn truncated_containers_are_rejected() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(items: Vec<JsonNumber>, cut: usize) -> bool {
        let value = Value::from(items.iter().map(|n| Value::Number(n.0)).collect::<Vec<_>>());
        let text = render(&value);
        let cut = cut % text.len();
        crate::parse(&text[..cut]).is_err()
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<JsonNumber>, usize) -> bool);
}
