//! Sequencing, ordered choice and the combinators derived from them.

use super::Grammar;
use super::adapt::adapt;
use super::primitive::{success, symbol};
use crate::control::Either;
use crate::error::Result;
use crate::optics::{Iso, iso};
use crate::sequence::Cons;

/// Two grammars in sequence, pairing their values.
///
/// See [`both`].
#[derive(Clone, Copy, Debug)]
pub struct Both<G1, G2> {
    first: G1,
    second: G2,
}

/// Runs `first`, then `second` on what `first` left over.
///
/// Printing works right to left: `second` prints onto the leftover, then
/// `first` prints in front of that.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{both, element, parse, print, symbol};
///
/// let pair = both(symbol('<'), element());
/// assert_eq!(parse(&pair, "<x>".to_string()), Some(('<', 'x')));
/// assert_eq!(print::<String, _>(&pair, ('<', 'y')), Ok("<y".to_string()));
/// ```
#[must_use]
pub const fn both<G1, G2>(first: G1, second: G2) -> Both<G1, G2> {
    Both { first, second }
}

impl<S, G1, G2> Grammar<S> for Both<G1, G2>
where
    G1: Grammar<S>,
    G2: Grammar<S>,
{
    type Value = (G1::Value, G2::Value);

    fn parse_step(&self, input: S) -> Option<(Self::Value, S)> {
        let (left, rest) = self.first.parse_step(input)?;
        let (right, rest) = self.second.parse_step(rest)?;
        Some(((left, right), rest))
    }

    fn print_step(&self, (left, right): Self::Value, rest: S) -> Result<S> {
        let rest = self.second.print_step(right, rest)?;
        self.first.print_step(left, rest)
    }
}

/// Ordered choice between two grammars.
///
/// See [`choose`].
#[derive(Clone, Copy, Debug)]
pub struct Choose<G1, G2> {
    first: G1,
    second: G2,
}

/// Tries `first`; only if it fails, tries `second` on the same input.
///
/// The result is tagged `Left` or `Right` by the branch that matched, and
/// printing dispatches on that tag. The choice is biased: when both
/// branches could match, `first` wins and `second` is never tried.
///
/// # Examples
///
/// ```
/// use isogram::control::Either;
/// use isogram::grammar::{choose, parse, print, symbol};
///
/// let sign = choose(symbol('+'), symbol('-'));
/// assert_eq!(parse(&sign, "-1".to_string()), Some(Either::Right('-')));
/// assert_eq!(print::<String, _>(&sign, Either::Left('+')), Ok("+".to_string()));
/// ```
#[must_use]
pub const fn choose<G1, G2>(first: G1, second: G2) -> Choose<G1, G2> {
    Choose { first, second }
}

impl<S, G1, G2> Grammar<S> for Choose<G1, G2>
where
    S: Clone,
    G1: Grammar<S>,
    G2: Grammar<S>,
{
    type Value = Either<G1::Value, G2::Value>;

    fn parse_step(&self, input: S) -> Option<(Self::Value, S)> {
        match self.first.parse_step(input.clone()) {
            Some((value, rest)) => Some((Either::Left(value), rest)),
            None => self
                .second
                .parse_step(input)
                .map(|(value, rest)| (Either::Right(value), rest)),
        }
    }

    fn print_step(&self, value: Self::Value, rest: S) -> Result<S> {
        match value {
            Either::Left(value) => self.first.print_step(value, rest),
            Either::Right(value) => self.second.print_step(value, rest),
        }
    }
}

/// Sequences two grammars and keeps the left value.
///
/// `right` must have unit value so printing can reproduce it without
/// further information.
pub fn seq_left<S, G1, G2>(left: G1, right: G2) -> impl Grammar<S, Value = G1::Value> + Clone
where
    G1: Grammar<S> + Clone,
    G2: Grammar<S, Value = ()> + Clone,
{
    adapt(
        iso(
            |(value, ()): (G1::Value, ())| value,
            |value: G1::Value| (value, ()),
        )
        .to_prism(),
        both(left, right),
    )
}

/// Sequences two grammars and keeps the right value.
pub fn seq_right<S, G1, G2>(left: G1, right: G2) -> impl Grammar<S, Value = G2::Value> + Clone
where
    G1: Grammar<S, Value = ()> + Clone,
    G2: Grammar<S> + Clone,
{
    adapt(
        iso(
            |((), value): ((), G2::Value)| value,
            |value: G2::Value| ((), value),
        )
        .to_prism(),
        both(left, right),
    )
}

/// Brackets `middle` between two unit grammars.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{between, element, literal, parse, print};
///
/// let quoted = between(literal('"'), literal('"'), element());
/// assert_eq!(parse(&quoted, "\"q\"".to_string()), Some('q'));
/// assert_eq!(print::<String, _>(&quoted, 'r'), Ok("\"r\"".to_string()));
/// ```
pub fn between<S, L, R, G>(left: L, right: R, middle: G) -> impl Grammar<S, Value = G::Value> + Clone
where
    L: Grammar<S, Value = ()> + Clone,
    R: Grammar<S, Value = ()> + Clone,
    G: Grammar<S> + Clone,
{
    seq_right(left, seq_left(middle, right))
}

/// Runs `grammar` and discards its value; prints `value` through it.
pub fn matching<S, G>(grammar: G, value: G::Value) -> impl Grammar<S, Value = ()> + Clone
where
    G: Grammar<S> + Clone,
    G::Value: Clone,
{
    adapt(
        iso(|_: G::Value| (), move |(): ()| value.clone()).to_prism(),
        grammar,
    )
}

/// Matches exactly `expected` and yields `()`.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{literal, parse, print};
///
/// assert_eq!(parse(&literal('!'), "!".to_string()), Some(()));
/// assert_eq!(parse(&literal('!'), "?".to_string()), None);
/// assert_eq!(print::<String, _>(&literal('!'), ()), Ok("!".to_string()));
/// ```
pub fn literal<S, T>(expected: T) -> impl Grammar<S, Value = ()> + Clone
where
    S: Cons<Item = T>,
    T: PartialEq + Clone,
{
    matching(symbol(expected.clone()), expected)
}

/// Makes a grammar optional.
///
/// A failed match yields `None` without consuming input; printing `None`
/// emits nothing.
pub fn opt<S, G>(grammar: G) -> impl Grammar<S, Value = Option<G::Value>> + Clone
where
    S: Clone,
    G: Grammar<S> + Clone,
{
    adapt(
        iso(Either::into_option, |option: Option<G::Value>| {
            Either::from(option)
        })
        .to_prism(),
        choose(grammar, success(())),
    )
}

/// Makes a grammar optional with a default value.
///
/// A failed match yields `default`. Printing emits nothing for a value
/// equal to `default` and prints any other value through `grammar`, so
/// the default never appears in the output.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{def, parse, print, satisfy};
///
/// let digit = satisfy(|c: &char| c.is_ascii_digit());
/// let grammar = def('0', digit);
///
/// assert_eq!(parse(&grammar, "7".to_string()), Some('7'));
/// assert_eq!(parse(&grammar, "x".to_string()), Some('0'));
/// assert_eq!(print::<String, _>(&grammar, '0'), Ok(String::new()));
/// assert_eq!(print::<String, _>(&grammar, '5'), Ok("5".to_string()));
/// ```
pub fn def<S, G>(default: G::Value, grammar: G) -> impl Grammar<S, Value = G::Value> + Clone
where
    S: Clone,
    G: Grammar<S> + Clone,
    G::Value: Clone + PartialEq,
{
    let omitted = default.clone();
    adapt(
        iso(Either::into_inner, move |value: G::Value| {
            if value == omitted {
                Either::Right(value)
            } else {
                Either::Left(value)
            }
        })
        .to_prism(),
        choose(grammar, success(default)),
    )
}
