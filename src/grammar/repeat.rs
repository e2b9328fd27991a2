//! Repetition: zero or more, one or more, exactly `n`.

use super::Grammar;
use super::adapt::adapt;
use super::combinator::both;
use crate::control::NonEmpty;
use crate::error::{Error, Result};
use crate::optics::{Iso, iso_non_empty};

/// Zero or more repetitions of a grammar.
///
/// See [`many`].
#[derive(Clone, Copy, Debug)]
pub struct Many<G> {
    grammar: G,
}

/// Repeats `grammar` as often as it matches, collecting the values.
///
/// Repetition is greedy and never backtracks: it stops at the first
/// failed attempt, leaving that input unconsumed, and always succeeds.
/// Printing prints the elements right to left so that they appear in
/// order.
///
/// `grammar` must consume input whenever it succeeds. A grammar that can
/// succeed on the empty prefix makes parsing loop forever; common ways to
/// get one are [`success`](super::success), [`opt`](super::opt),
/// [`def`](super::def) and `many` itself. Put the optionality outside
/// the repetition instead: `opt(many1(g))` where `many(opt(g))` was meant.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{many, parse, print, symbol};
///
/// let stars = many(symbol('*'));
/// assert_eq!(parse(&stars, "**x".to_string()), Some(vec!['*', '*']));
/// assert_eq!(parse(&stars, "x".to_string()), Some(vec![]));
/// assert_eq!(print::<String, _>(&stars, vec!['*'; 3]), Ok("***".to_string()));
/// ```
#[must_use]
pub const fn many<G>(grammar: G) -> Many<G> {
    Many { grammar }
}

impl<S, G> Grammar<S> for Many<G>
where
    S: Clone,
    G: Grammar<S>,
{
    type Value = Vec<G::Value>;

    fn parse_step(&self, mut input: S) -> Option<(Self::Value, S)> {
        let mut values = Vec::new();
        while let Some((value, rest)) = self.grammar.parse_step(input.clone()) {
            values.push(value);
            input = rest;
        }
        Some((values, input))
    }

    fn print_step(&self, values: Self::Value, rest: S) -> Result<S> {
        values
            .into_iter()
            .rev()
            .try_fold(rest, |rest, value| self.grammar.print_step(value, rest))
    }
}

/// One or more repetitions of a grammar.
///
/// Parsing fails when the first attempt fails. The non-empty result type
/// makes an empty value unprintable by construction.
///
/// # Examples
///
/// ```
/// use isogram::control::NonEmpty;
/// use isogram::grammar::{many1, parse, symbol};
///
/// let stars = many1(symbol('*'));
/// assert_eq!(parse(&stars, "**".to_string()), Some(NonEmpty::new('*', vec!['*'])));
/// assert_eq!(parse(&stars, "x".to_string()), None);
/// ```
pub fn many1<S, G>(grammar: G) -> impl Grammar<S, Value = NonEmpty<G::Value>> + Clone
where
    S: Clone,
    G: Grammar<S> + Clone,
{
    adapt(
        iso_non_empty().to_prism(),
        both(grammar.clone(), many(grammar)),
    )
}

/// Exactly `count` repetitions of a grammar.
///
/// See [`replicate`].
#[derive(Clone, Copy, Debug)]
pub struct Replicate<G> {
    count: usize,
    grammar: G,
}

/// Repeats `grammar` exactly `count` times.
///
/// Parsing fails if fewer than `count` repetitions match; any further
/// input is left alone. Printing requires a list of exactly `count`
/// values and fails with [`Error::CannotBuild`] otherwise.
///
/// Behaves as `adapt(iso_list, choose(both(grammar, replicate(count - 1,
/// grammar)), failure()))`, unrolled into a loop so that `count` may come
/// straight from untrusted input.
///
/// # Examples
///
/// ```
/// use isogram::Error;
/// use isogram::grammar::{element, parse, print, replicate};
///
/// let pair = replicate(2, element());
/// assert_eq!(parse(&pair, "abc".to_string()), Some(vec!['a', 'b']));
/// assert_eq!(parse(&pair, "a".to_string()), None);
/// assert_eq!(print::<String, _>(&pair, vec!['x']), Err(Error::CannotBuild));
/// ```
#[must_use]
pub const fn replicate<G>(count: usize, grammar: G) -> Replicate<G> {
    Replicate { count, grammar }
}

impl<S, G> Grammar<S> for Replicate<G>
where
    G: Grammar<S>,
{
    type Value = Vec<G::Value>;

    fn parse_step(&self, mut input: S) -> Option<(Self::Value, S)> {
        let mut values = Vec::new();
        for _ in 0..self.count {
            let (value, rest) = self.grammar.parse_step(input)?;
            values.push(value);
            input = rest;
        }
        Some((values, input))
    }

    fn print_step(&self, values: Self::Value, rest: S) -> Result<S> {
        if values.len() != self.count {
            return Err(Error::CannotBuild);
        }
        values
            .into_iter()
            .rev()
            .try_fold(rest, |rest, value| self.grammar.print_step(value, rest))
    }
}
