//! Invertible grammars: one description, two directions.
//!
//! A [`Grammar`] over a sequence type `S` is the grammar-shaped prism from
//! `S` onto `(value, leftover)`. Running it forward ([`parse`]) consumes a
//! prefix of the input and produces a value; running it backward
//! ([`print`]) turns a value back into the sequence it was parsed from.
//!
//! # Building Blocks
//!
//! | Combinator | Parses | Prints |
//! |------------|--------|--------|
//! | [`element`] | any one element | the element |
//! | [`satisfy`], [`symbol`] | one element passing a test | the element, if it passes |
//! | [`literal`], [`matching`] | a fixed value, discarded | the fixed value |
//! | [`success`] | nothing, yields a constant | nothing |
//! | [`failure`] | never matches | never prints |
//! | [`eof`] | an empty remainder | nothing |
//! | [`adapt`] | a grammar's value through a prism | the prism's review |
//! | [`both`] | two grammars in sequence | both, right to left |
//! | [`choose`] | first grammar, else second | the tagged branch |
//! | [`many`], [`many1`], [`replicate`] | repetitions | each element |
//! | [`bind`], [`bind_checked`] | a driver, then a grammar chosen by it | both |
//! | [`opt`], [`def`] | an optional match | present values / non-default values |
//! | [`lazy`] | a grammar constructed on demand | same |
//!
//! # Laws
//!
//! For every grammar `g` built from these combinators:
//!
//! 1. **Print-Parse**: if `print(g, value) == Ok(s)` then
//!    `parse(g, s) == Some(value)`, except where [`def`] collapses a value
//!    onto its default.
//! 2. **Parse-Print**: if `g` ends in [`eof`] and `parse(g, s) == Some(value)`
//!    then `print(g, value)` is a sequence that parses to the same value
//!    (identical to `s` when `s` is written canonically).
//!
//! # Example
//!
//! ```
//! use isogram::grammar::{bind, eof, many, parse, print, replicate, seq_left};
//! use isogram::grammar::text::{alpha, chars_to_string, integer};
//! use isogram::grammar::adapt;
//! use isogram::optics::Iso;
//!
//! // A count `n`, then exactly `n` letters, repeated until the input ends.
//! let words = seq_left(
//!     many(bind(
//!         integer(),
//!         |count: i64| {
//!             let count = usize::try_from(count).unwrap_or(0);
//!             adapt(chars_to_string().to_prism(), replicate(count, alpha()))
//!         },
//!         |word: &String| i64::try_from(word.chars().count()).unwrap_or(i64::MAX),
//!     )),
//!     eof(),
//! );
//!
//! assert_eq!(
//!     parse(&words, "1a2bc3def".to_string()),
//!     Some(vec!["a".to_string(), "bc".to_string(), "def".to_string()])
//! );
//! assert_eq!(parse(&words, "abcdef".to_string()), None);
//!
//! let printed: String = print(&words, vec!["bob".to_string(), "jane".to_string()]).unwrap();
//! assert_eq!(printed, "3bob4jane");
//! ```

mod adapt;
mod bind;
mod combinator;
mod primitive;
mod repeat;
mod runner;

#[cfg(feature = "text")]
pub mod text;

use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;
use crate::sequence::Cons;

pub use adapt::Adapt;
pub use adapt::adapt;

pub use bind::Bind;
pub use bind::BindChecked;
pub use bind::Lazy;
pub use bind::bind;
pub use bind::bind_checked;
pub use bind::lazy;

pub use combinator::Both;
pub use combinator::Choose;
pub use combinator::between;
pub use combinator::both;
pub use combinator::choose;
pub use combinator::def;
pub use combinator::literal;
pub use combinator::matching;
pub use combinator::opt;
pub use combinator::seq_left;
pub use combinator::seq_right;

pub use primitive::Element;
pub use primitive::Eof;
pub use primitive::Failure;
pub use primitive::FromPrism;
pub use primitive::Satisfy;
pub use primitive::Success;
pub use primitive::Uncons;
pub use primitive::element;
pub use primitive::eof;
pub use primitive::failure;
pub use primitive::from_prism;
pub use primitive::satisfy;
pub use primitive::success;
pub use primitive::symbol;

pub use repeat::Many;
pub use repeat::Replicate;
pub use repeat::many;
pub use repeat::many1;
pub use repeat::replicate;

pub use runner::parse;
pub use runner::print;
pub use runner::try_parse;

/// A grammar relating sequences `S` to values of type [`Grammar::Value`].
///
/// `parse_step` is the matching direction of the underlying prism: it
/// consumes a prefix of `input` and returns the value together with the
/// unconsumed remainder. `print_step` is the building direction: it
/// prepends the printed form of `value` to `rest`.
///
/// Implementations hold no mutable state; a grammar can be run any number
/// of times, from any number of threads when its parts are `Sync`.
pub trait Grammar<S> {
    /// The value this grammar parses into and prints from.
    type Value;

    /// Matches a prefix of `input`, returning the value and the leftover.
    fn parse_step(&self, input: S) -> Option<(Self::Value, S)>;

    /// Prepends the printed form of `value` to `rest`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotBuild`](crate::Error::CannotBuild) when the
    /// grammar has no printed form for `value`, and
    /// [`Error::InconsistentDriver`](crate::Error::InconsistentDriver) when a
    /// checked bind detects that its output would not parse back.
    fn print_step(&self, value: Self::Value, rest: S) -> Result<S>;

    /// Runs the grammar as a parser. See [`parse`].
    fn parse(&self, input: S) -> Option<Self::Value>
    where
        Self: Sized,
    {
        runner::parse(self, input)
    }

    /// Runs the grammar as a printer. See [`print`].
    ///
    /// # Errors
    ///
    /// Same as [`Grammar::print_step`].
    fn print(&self, value: Self::Value) -> Result<S>
    where
        Self: Sized,
        S: Cons,
    {
        runner::print(self, value)
    }

    /// Erases the grammar's type.
    ///
    /// Useful for recursive grammars and for storing grammars of different
    /// shapes side by side.
    fn boxed<'a>(self) -> BoxedGrammar<'a, S, Self::Value>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Erases the grammar's type behind an `Arc` so it can be shared across
    /// threads.
    fn shared<'a>(self) -> SharedGrammar<'a, S, Self::Value>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Arc::new(self)
    }
}

/// A type-erased grammar.
pub type BoxedGrammar<'a, S, A> = Box<dyn Grammar<S, Value = A> + 'a>;

/// A type-erased grammar that can be shared across threads.
pub type SharedGrammar<'a, S, A> = Arc<dyn Grammar<S, Value = A> + Send + Sync + 'a>;

macro_rules! forward_grammar {
    ($($pointer:ty),+ $(,)?) => {
        $(
            impl<S, G> Grammar<S> for $pointer
            where
                G: Grammar<S> + ?Sized,
            {
                type Value = G::Value;

                fn parse_step(&self, input: S) -> Option<(Self::Value, S)> {
                    (**self).parse_step(input)
                }

                fn print_step(&self, value: Self::Value, rest: S) -> Result<S> {
                    (**self).print_step(value, rest)
                }
            }
        )+
    };
}

forward_grammar!(&G, Box<G>, Rc<G>, Arc<G>);

mod assertions {
    use std::sync::Arc;

    use static_assertions::assert_impl_all;

    use super::{Element, Eof, Grammar, Many, Replicate, Uncons};

    assert_impl_all!(Element: Grammar<String>, Grammar<Vec<u8>>, Send, Sync, Copy);
    assert_impl_all!(Eof: Grammar<String>, Send, Sync, Copy);
    assert_impl_all!(Uncons: Send, Sync, Copy);
    assert_impl_all!(Many<Element>: Grammar<String>, Send, Sync, Clone);
    assert_impl_all!(Replicate<Element>: Grammar<String>, Send, Sync, Clone);
    assert_impl_all!(Arc<Many<Element>>: Grammar<String>, Send, Sync, Clone);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_boxed_grammar_runs_both_directions() {
        let boxed: BoxedGrammar<'_, String, Vec<char>> = many(element()).boxed();

        assert_eq!(boxed.parse_step("ab".to_string()), Some((vec!['a', 'b'], String::new())));
        assert_eq!(boxed.print_step(vec!['x'], "y".to_string()), Ok("xy".to_string()));
    }

    #[test]
    fn test_shared_grammar_across_threads() {
        let shared: SharedGrammar<'static, String, char> = symbol('q').shared();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let grammar = Arc::clone(&shared);
                std::thread::spawn(move || parse(&grammar, "qq".to_string()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some('q'));
        }
    }

    #[test]
    fn test_provided_methods_match_runner() {
        let grammar = symbol('a');
        assert_eq!(Grammar::<String>::parse(&grammar, "a".to_string()), Some('a'));

        let printed: Result<String> = grammar.print('a');
        assert_eq!(printed, Ok("a".to_string()));

        let refused: Result<String> = grammar.print('b');
        assert_eq!(refused, Err(Error::CannotBuild));
    }
}
