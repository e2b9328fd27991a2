#![cfg(feature = "text")]
//! Integration tests for character grammars.
//!
//! The centerpiece is a context-sensitive format: a decimal count followed
//! by exactly that many letters, repeated until the input ends.

use isogram::Error;
use isogram::control::Either;
use isogram::grammar::text::{alpha, chars_to_string, digit, integer};
use isogram::grammar::{
    Grammar, adapt, bind, bind_checked, both, choose, def, eof, many, many1, parse, print,
    replicate, seq_left, symbol, try_parse,
};
use isogram::optics::{Iso, iso};
use isogram::sequence::ConsList;
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Fixtures
// =============================================================================

#[allow(clippy::ptr_arg)]
fn word_length(word: &String) -> i64 {
    i64::try_from(word.chars().count()).unwrap_or(i64::MAX)
}

fn letters(count: i64) -> impl Grammar<String, Value = String> + Clone {
    let count = usize::try_from(count).unwrap_or(0);
    adapt(chars_to_string().to_prism(), replicate(count, alpha()))
}

fn count_prefixed() -> impl Grammar<String, Value = Vec<String>> + Clone {
    seq_left(many(bind(integer(), letters, word_length)), eof())
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

// =============================================================================
// Count-prefixed words
// =============================================================================

#[rstest]
fn test_count_prefixed_parses_words() {
    let count_prefixed = count_prefixed();
    assert_eq!(
        parse(&count_prefixed, "1a2bc3def".to_string()),
        Some(words(&["a", "bc", "def"]))
    );
}

#[rstest]
#[case("abcdef")]
#[case("2a")]
#[case("1ab")]
#[case("1a2")]
fn test_count_prefixed_rejects(#[case] input: &str) {
    let count_prefixed = count_prefixed();
    assert_eq!(parse(&count_prefixed, input.to_string()), None);
    assert_eq!(
        try_parse(&count_prefixed, input.to_string()),
        Err(Error::NoMatch)
    );
}

#[rstest]
fn test_count_prefixed_accepts_empty() {
    let count_prefixed = count_prefixed();
    assert_eq!(parse(&count_prefixed, String::new()), Some(vec![]));
}

#[rstest]
fn test_count_prefixed_prints_words() {
    let count_prefixed = count_prefixed();
    assert_eq!(
        print(&count_prefixed, words(&["bob", "jane", "nancy", "martha"])),
        Ok("3bob4jane5nancy6martha".to_string())
    );
}

#[rstest]
fn test_count_prefixed_refuses_non_letters() {
    let count_prefixed = count_prefixed();
    assert_eq!(
        print(&count_prefixed, words(&["ok", "n0"])),
        Err(Error::CannotBuild)
    );
}

#[rstest]
fn test_zero_length_word_merges_into_next_count() {
    let printed = print(&count_prefixed(), words(&["", "x"])).unwrap();
    assert_eq!(printed, "01x");
    assert_eq!(parse(&count_prefixed(), printed), Some(words(&["x"])));

    let checked = seq_left(many(bind_checked(integer(), letters, word_length)), eof());
    assert_eq!(
        print(&checked, words(&["", "x"])),
        Err(Error::InconsistentDriver)
    );
}

#[rstest]
fn test_count_prefixed_long_word() {
    let length = 50_000;
    let word = "a".repeat(length);
    let input = format!("{length}{word}");

    let parsed = parse(&count_prefixed(), input.clone());
    assert_eq!(parsed, Some(vec![word.clone()]));
    assert_eq!(print(&count_prefixed(), vec![word]), Ok(input));
}

#[rstest]
fn test_count_prefixed_negative_count_reads_as_empty() {
    let count_prefixed = count_prefixed();
    assert_eq!(parse(&count_prefixed, "-3".to_string()), Some(words(&[""])));
}

#[rstest]
fn test_checked_bind_over_words() {
    let checked = seq_left(
        many(bind_checked(integer(), letters, word_length)),
        eof(),
    );
    assert_eq!(
        print(&checked, words(&["bob", "jane"])),
        Ok("3bob4jane".to_string())
    );
}

// =============================================================================
// Integers
// =============================================================================

#[rstest]
fn test_integer_round_trip() {
    assert_eq!(parse(&integer(), "-42".to_string()), Some(-42));
    assert_eq!(print::<String, _>(&integer(), -42), Ok("-42".to_string()));
}

#[rstest]
fn test_integer_over_cons_list() {
    let printed: ConsList<char> = print(&integer(), 90210).unwrap();
    assert_eq!(printed.to_string(), "90210");
    assert_eq!(parse(&integer(), printed), Some(90210));
}

#[rstest]
#[case("", Some(0))]
#[case("7", Some(7))]
#[case("x", Some(0))]
fn test_default_integer_parse(#[case] input: &str, #[case] expected: Option<i64>) {
    assert_eq!(parse(&def(0, integer()), input.to_string()), expected);
}

#[rstest]
#[case(0, "")]
#[case(7, "7")]
#[case(-7, "-7")]
fn test_default_integer_print(#[case] value: i64, #[case] expected: &str) {
    assert_eq!(
        print::<String, _>(&def(0, integer()), value),
        Ok(expected.to_string())
    );
}

// =============================================================================
// Character classes
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
struct Identifier {
    head: char,
    tail: Vec<char>,
}

impl Identifier {
    fn new(head: char, tail: &str) -> Self {
        Self {
            head,
            tail: tail.chars().collect(),
        }
    }
}

/// A letter followed by any mix of letters and digits.
fn identifier() -> impl Grammar<String, Value = Identifier> + Clone {
    adapt(
        iso(
            |(head, tail): (char, Vec<Either<char, char>>)| Identifier {
                head,
                tail: tail.into_iter().map(Either::into_inner).collect(),
            },
            |identifier: Identifier| {
                let tail = identifier
                    .tail
                    .into_iter()
                    .map(|c| {
                        if c.is_ascii_alphabetic() {
                            Either::Left(c)
                        } else {
                            Either::Right(c)
                        }
                    })
                    .collect();
                (identifier.head, tail)
            },
        )
        .to_prism(),
        both(alpha(), many(choose(alpha(), digit()))),
    )
}

#[rstest]
fn test_identifier_parse() {
    let whole = seq_left(identifier(), eof());
    assert_eq!(
        parse(&whole, "x1y2".to_string()),
        Some(Identifier::new('x', "1y2"))
    );
    assert_eq!(parse(&whole, "1x".to_string()), None);
}

#[rstest]
fn test_identifier_print_tags_by_class() {
    assert_eq!(
        print::<String, _>(&identifier(), Identifier::new('a', "9b")),
        Ok("a9b".to_string())
    );
    assert_eq!(
        print::<String, _>(&identifier(), Identifier::new('a', "-")),
        Err(Error::CannotBuild)
    );
}

#[rstest]
fn test_many1_digits() {
    let digits = many1(digit());
    assert_eq!(parse(&digits, String::new()), None);
    assert_eq!(
        parse(&digits, "12a".to_string()).map(|digits| digits.len()),
        Some(2)
    );
}

// =============================================================================
// Round-trip laws
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_print_then_parse(value: i64) {
        let printed = print::<String, _>(&integer(), value).unwrap();
        prop_assert_eq!(parse(&integer(), printed), Some(value));
    }

    #[test]
    fn prop_integer_parse_then_print(text in "-?[1-9][0-9]{0,17}|0") {
        let whole = seq_left(integer(), eof());
        let value = parse(&whole, text.clone()).unwrap();
        prop_assert_eq!(print::<String, _>(&whole, value), Ok(text));
    }

    #[test]
    fn prop_count_prefixed_print_then_parse(
        items in prop::collection::vec("[a-zA-Z]{1,12}", 0..8)
    ) {
        let grammar = count_prefixed();
        let printed = print(&grammar, items.clone()).unwrap();
        prop_assert_eq!(parse(&grammar, printed), Some(items));
    }

    #[test]
    fn prop_count_prefixed_parse_then_print(
        items in prop::collection::vec("[a-zA-Z]{1,12}", 0..8)
    ) {
        let canonical: String = items
            .iter()
            .map(|item| format!("{}{item}", item.len()))
            .collect();
        let grammar = count_prefixed();
        let parsed = parse(&grammar, canonical.clone()).unwrap();
        prop_assert_eq!(print(&grammar, parsed), Ok(canonical));
    }

    #[test]
    fn prop_choice_prefers_first(c in "[a-z]") {
        let grammar = choose(alpha(), symbol(c.chars().next().unwrap_or('a')));
        let parsed = parse(&grammar, c).unwrap();
        prop_assert!(parsed.is_left());
    }

    #[test]
    fn prop_many_is_greedy(text in "[a-z0-9]{0,30}") {
        let (_, rest) = many(alpha()).parse_step(text).unwrap();
        prop_assert!(parse(&alpha(), rest).is_none());
    }

    #[test]
    fn prop_replicate_fails_without_enough_matches(count in 1_usize..10, text in "[a-z]{0,9}") {
        let matched = parse(&replicate(count, alpha()), text.clone());
        if text.len() < count {
            prop_assert_eq!(matched, None);
        } else {
            prop_assert_eq!(matched.map(|letters| letters.len()), Some(count));
        }
    }
}
