//! Running a grammar from the outside.

use tracing::trace;

use super::Grammar;
use crate::error::{Error, Result};
use crate::sequence::Cons;

/// Parses `input`, discarding whatever the grammar leaves unconsumed.
///
/// Trailing input is not an error; end a grammar with
/// [`eof`](super::eof) to demand that the whole input matches.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{element, parse};
///
/// assert_eq!(parse(&element(), "ab".to_string()), Some('a'));
/// ```
pub fn parse<S, G>(grammar: &G, input: S) -> Option<G::Value>
where
    G: Grammar<S> + ?Sized,
{
    let parsed = grammar.parse_step(input).map(|(value, _)| value);
    trace!(target: "isogram::runner", matched = parsed.is_some(), "parse");
    parsed
}

/// Like [`parse`], but reports a failed match as [`Error::NoMatch`].
///
/// # Errors
///
/// Returns [`Error::NoMatch`] when the grammar does not match a prefix of
/// `input`.
pub fn try_parse<S, G>(grammar: &G, input: S) -> Result<G::Value>
where
    G: Grammar<S> + ?Sized,
{
    parse(grammar, input).ok_or(Error::NoMatch)
}

/// Prints `value` into a fresh sequence.
///
/// # Errors
///
/// Returns [`Error::CannotBuild`] when some part of the grammar has no
/// printed form for its part of `value`, and [`Error::InconsistentDriver`]
/// when a [`bind_checked`](super::bind_checked) rejects its own output.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{element, many, print};
///
/// let printed: String = print(&many(element()), vec!['h', 'i']).unwrap();
/// assert_eq!(printed, "hi");
/// ```
pub fn print<S, G>(grammar: &G, value: G::Value) -> Result<S>
where
    S: Cons,
    G: Grammar<S> + ?Sized,
{
    let printed = grammar.print_step(value, S::empty());
    match &printed {
        Ok(_) => trace!(target: "isogram::runner", "print"),
        Err(error) => trace!(target: "isogram::runner", %error, "print failed"),
    }
    printed
}
