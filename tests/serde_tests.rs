#![cfg(feature = "serde")]
//! Serialization of the values grammars produce.

use isogram::control::{Either, NonEmpty};
use rstest::rstest;

#[rstest]
#[case(Either::Left(1), r#"{"Left":1}"#)]
#[case(Either::Right("x".to_string()), r#"{"Right":"x"}"#)]
fn test_either_json(#[case] value: Either<i32, String>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);

    let restored: Either<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_non_empty_json() {
    let value = NonEmpty::new('a', vec!['b', 'c']);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"head":"a","tail":["b","c"]}"#);

    let restored: NonEmpty<char> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}
