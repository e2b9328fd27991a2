//! Grammars that touch the sequence directly.

use std::fmt;
use std::marker::PhantomData;

use super::Grammar;
use crate::error::{Error, Result};
use crate::optics::Prism;
use crate::sequence::Cons;

/// The prism from a sequence onto its first element and the remainder.
///
/// `preview` fails on the empty sequence; `review` prepends.
///
/// # Examples
///
/// ```
/// use isogram::grammar::Uncons;
/// use isogram::optics::Prism;
///
/// assert_eq!(Uncons.preview("ab".to_string()), Some(('a', "b".to_string())));
/// assert_eq!(Prism::<String, _>::preview(&Uncons, String::new()), None);
/// assert_eq!(Uncons.review(('z', "y".to_string())), "zy");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Uncons;

impl<S: Cons> Prism<S, (S::Item, S)> for Uncons {
    fn preview(&self, source: S) -> Option<(S::Item, S)> {
        source.uncons()
    }

    fn review(&self, (item, rest): (S::Item, S)) -> S {
        S::cons(item, rest)
    }
}

/// Lifts any prism of the shape `S -> (A, S)` into a grammar.
///
/// A prism's review is total, so printing never fails.
pub struct FromPrism<P, A> {
    prism: P,
    _marker: PhantomData<fn(A) -> A>,
}

/// Wraps a prism from `S` to `(A, S)` as a grammar.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{Uncons, from_prism, parse, print};
///
/// let first = from_prism(Uncons);
/// assert_eq!(parse(&first, "xy".to_string()), Some('x'));
/// assert_eq!(print::<String, _>(&first, 'x'), Ok("x".to_string()));
/// ```
#[must_use]
pub const fn from_prism<P, A>(prism: P) -> FromPrism<P, A> {
    FromPrism {
        prism,
        _marker: PhantomData,
    }
}

impl<S, A, P> Grammar<S> for FromPrism<P, A>
where
    P: Prism<S, (A, S)>,
{
    type Value = A;

    fn parse_step(&self, input: S) -> Option<(A, S)> {
        self.prism.preview(input)
    }

    fn print_step(&self, value: A, rest: S) -> Result<S> {
        Ok(self.prism.review((value, rest)))
    }
}

impl<P: Clone, A> Clone for FromPrism<P, A> {
    fn clone(&self) -> Self {
        from_prism(self.prism.clone())
    }
}

impl<P: Copy, A> Copy for FromPrism<P, A> {}

impl<P: fmt::Debug, A> fmt::Debug for FromPrism<P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FromPrism")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Consumes exactly one element, whatever it is.
///
/// This is [`Uncons`] viewed as a grammar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Element;

/// Returns the grammar of a single arbitrary element.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{element, parse};
///
/// assert_eq!(parse(&element(), "abc".to_string()), Some('a'));
/// assert_eq!(parse(&element(), String::new()), None);
/// ```
#[must_use]
pub const fn element() -> Element {
    Element
}

impl<S: Cons> Grammar<S> for Element {
    type Value = S::Item;

    fn parse_step(&self, input: S) -> Option<(S::Item, S)> {
        Uncons.preview(input)
    }

    fn print_step(&self, value: S::Item, rest: S) -> Result<S> {
        Ok(Uncons.review((value, rest)))
    }
}

/// Consumes nothing and always yields a constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Success<A> {
    value: A,
}

/// Returns a grammar that matches the empty prefix and yields `value`.
///
/// Printing ignores the value handed to it and emits nothing, so a
/// `success` only round-trips the value it was constructed with.
#[must_use]
pub const fn success<A>(value: A) -> Success<A> {
    Success { value }
}

impl<S, A: Clone> Grammar<S> for Success<A> {
    type Value = A;

    fn parse_step(&self, input: S) -> Option<(A, S)> {
        Some((self.value.clone(), input))
    }

    fn print_step(&self, _value: A, rest: S) -> Result<S> {
        Ok(rest)
    }
}

/// Never matches and never prints.
pub struct Failure<A> {
    _marker: PhantomData<fn() -> A>,
}

/// Returns the grammar that rejects every input.
///
/// # Examples
///
/// ```
/// use isogram::Error;
/// use isogram::grammar::{failure, parse, print};
///
/// assert_eq!(parse(&failure::<()>(), String::new()), None);
/// assert_eq!(print::<String, _>(&failure(), ()), Err(Error::CannotBuild));
/// ```
#[must_use]
pub const fn failure<A>() -> Failure<A> {
    Failure {
        _marker: PhantomData,
    }
}

impl<S, A> Grammar<S> for Failure<A> {
    type Value = A;

    fn parse_step(&self, _input: S) -> Option<(A, S)> {
        None
    }

    fn print_step(&self, _value: A, _rest: S) -> Result<S> {
        Err(Error::CannotBuild)
    }
}

impl<A> Clone for Failure<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Failure<A> {}

impl<A> fmt::Debug for Failure<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Failure")
    }
}

/// Matches only when no input remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eof;

/// Returns the end-of-input grammar.
///
/// Placing it last turns a prefix match into a whole-input match.
#[must_use]
pub const fn eof() -> Eof {
    Eof
}

impl<S: Cons> Grammar<S> for Eof {
    type Value = ();

    fn parse_step(&self, input: S) -> Option<((), S)> {
        match input.uncons() {
            None => Some(((), S::empty())),
            Some(_) => None,
        }
    }

    fn print_step(&self, (): (), rest: S) -> Result<S> {
        Ok(rest)
    }
}

/// Consumes one element that passes a predicate.
#[derive(Clone, Copy)]
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    /// Creates the grammar from a predicate over elements.
    #[must_use]
    pub const fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

/// Returns a grammar matching one element for which `predicate` holds.
///
/// Printing checks the same predicate and refuses values that fail it.
///
/// # Examples
///
/// ```
/// use isogram::Error;
/// use isogram::grammar::{parse, print, satisfy};
///
/// let vowel = satisfy(|c: &char| "aeiou".contains(*c));
/// assert_eq!(parse(&vowel, "ox".to_string()), Some('o'));
/// assert_eq!(parse(&vowel, "xo".to_string()), None);
/// assert_eq!(print::<String, _>(&vowel, 'x'), Err(Error::CannotBuild));
/// ```
#[must_use]
pub const fn satisfy<F>(predicate: F) -> Satisfy<F> {
    Satisfy::new(predicate)
}

/// Returns a grammar matching exactly `expected`.
#[must_use]
pub fn symbol<T>(expected: T) -> Satisfy<impl Fn(&T) -> bool + Clone>
where
    T: PartialEq + Clone,
{
    satisfy(move |candidate: &T| *candidate == expected)
}

impl<S, F> Grammar<S> for Satisfy<F>
where
    S: Cons,
    F: Fn(&S::Item) -> bool,
{
    type Value = S::Item;

    fn parse_step(&self, input: S) -> Option<(S::Item, S)> {
        Element
            .parse_step(input)
            .filter(|(item, _)| (self.predicate)(item))
    }

    fn print_step(&self, value: S::Item, rest: S) -> Result<S> {
        if (self.predicate)(&value) {
            Element.print_step(value, rest)
        } else {
            Err(Error::CannotBuild)
        }
    }
}

impl<F> fmt::Debug for Satisfy<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Satisfy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::ConsList;
    use rstest::rstest;

    #[rstest]
    #[case("abc", Some(('a', "bc")))]
    #[case("a", Some(('a', "")))]
    #[case("", None)]
    fn test_element_parse_step(#[case] input: &str, #[case] expected: Option<(char, &str)>) {
        let expected = expected.map(|(item, rest)| (item, rest.to_string()));
        assert_eq!(element().parse_step(input.to_string()), expected);
    }

    #[rstest]
    fn test_element_over_cons_list() {
        let input = ConsList::from("hi");
        let (first, rest) = element().parse_step(input).unwrap();
        assert_eq!(first, 'h');
        assert_eq!(rest.to_string(), "i");
    }

    #[rstest]
    fn test_element_print_prepends() {
        assert_eq!(element().print_step(1_u8, vec![2, 3]), Ok(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_success_consumes_nothing() {
        assert_eq!(success(7).parse_step("xyz".to_string()), Some((7, "xyz".to_string())));
        assert_eq!(success(7).print_step(99, "rest".to_string()), Ok("rest".to_string()));
    }

    #[rstest]
    fn test_failure_never_matches() {
        assert_eq!(failure::<char>().parse_step("a".to_string()), None);
        assert_eq!(
            failure::<char>().print_step('a', String::new()),
            Err(Error::CannotBuild)
        );
    }

    #[rstest]
    #[case("", true)]
    #[case("x", false)]
    fn test_eof(#[case] input: &str, #[case] matches: bool) {
        assert_eq!(eof().parse_step(input.to_string()).is_some(), matches);
    }

    #[rstest]
    fn test_eof_prints_nothing() {
        assert_eq!(eof().print_step((), "tail".to_string()), Ok("tail".to_string()));
    }

    #[rstest]
    #[case('a', "ab", Some("b"))]
    #[case('a', "ba", None)]
    #[case('a', "", None)]
    fn test_symbol_parse_step(
        #[case] expected: char,
        #[case] input: &str,
        #[case] rest: Option<&str>,
    ) {
        let result = symbol(expected).parse_step(input.to_string());
        assert_eq!(result, rest.map(|rest| (expected, rest.to_string())));
    }

    #[rstest]
    fn test_satisfy_print_checks_predicate() {
        let even = satisfy(|n: &u32| n % 2 == 0);
        assert_eq!(even.print_step(4, vec![]), Ok(vec![4]));
        assert_eq!(even.print_step(3, vec![]), Err(Error::CannotBuild));
    }

    #[rstest]
    fn test_from_prism_matches_element() {
        let lifted = from_prism(Uncons);
        assert_eq!(
            lifted.parse_step("ab".to_string()),
            element().parse_step("ab".to_string())
        );
        assert_eq!(lifted.print_step('a', "b".to_string()), Ok("ab".to_string()));
    }
}
