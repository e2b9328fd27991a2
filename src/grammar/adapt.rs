//! Changing what a grammar means without changing what it matches.

use std::fmt;
use std::marker::PhantomData;

use super::Grammar;
use crate::error::Result;
use crate::optics::{Aside, ComposedPrism, IsoAsPrism, Prism, Swapped};

/// A grammar whose value is viewed through a prism.
///
/// See [`adapt`].
pub struct Adapt<G, P, B> {
    grammar: G,
    prism: P,
    _marker: PhantomData<fn(B) -> B>,
}

/// Maps a grammar's value through a prism.
///
/// Parsing runs `grammar` and previews its value through `prism`; if the
/// preview fails, the whole parse fails. Printing reviews the value back
/// into the inner grammar's value space and prints that.
///
/// Internally the prism is lifted onto `(value, leftover)` pairs: swap the
/// pair, apply the prism beside the leftover, swap back. The leftover is
/// never inspected.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{adapt, element, parse, print};
/// use isogram::optics::prism;
///
/// let digit_value = prism(
///     |value: u32| char::from_digit(value, 10).unwrap_or('?'),
///     |c: char| c.to_digit(10),
/// );
/// let grammar = adapt(digit_value, element());
///
/// assert_eq!(parse(&grammar, "7".to_string()), Some(7));
/// assert_eq!(parse(&grammar, "x".to_string()), None);
/// assert_eq!(print::<String, _>(&grammar, 3), Ok("3".to_string()));
/// ```
#[must_use]
pub const fn adapt<G, P, B>(prism: P, grammar: G) -> Adapt<G, P, B> {
    Adapt {
        grammar,
        prism,
        _marker: PhantomData,
    }
}

const fn swapped<X, Y>() -> IsoAsPrism<Swapped, (X, Y), (Y, X)> {
    IsoAsPrism::new(Swapped)
}

impl<G, P, B> Adapt<G, P, B> {
    /// The prism lifted from `A <-> B` to `(A, S) <-> (B, S)`.
    fn focus<S, A>(&self) -> impl Prism<(A, S), (B, S)>
    where
        P: Prism<A, B>,
    {
        let beside: ComposedPrism<_, _, (S, A)> =
            ComposedPrism::new(swapped::<A, S>(), Aside::new(&self.prism));
        ComposedPrism::<_, _, (S, B)>::new(beside, swapped::<S, B>())
    }
}

impl<S, G, P, B> Grammar<S> for Adapt<G, P, B>
where
    G: Grammar<S>,
    P: Prism<G::Value, B>,
{
    type Value = B;

    fn parse_step(&self, input: S) -> Option<(B, S)> {
        let parsed = self.grammar.parse_step(input)?;
        self.focus::<S, G::Value>().preview(parsed)
    }

    fn print_step(&self, value: B, rest: S) -> Result<S> {
        let (inner, rest) = self.focus::<S, G::Value>().review((value, rest));
        self.grammar.print_step(inner, rest)
    }
}

impl<G: Clone, P: Clone, B> Clone for Adapt<G, P, B> {
    fn clone(&self) -> Self {
        adapt(self.prism.clone(), self.grammar.clone())
    }
}

impl<G: fmt::Debug, P: fmt::Debug, B> fmt::Debug for Adapt<G, P, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Adapt")
            .field("grammar", &self.grammar)
            .field("prism", &self.prism)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::grammar::{both, element, symbol};
    use crate::optics::{Iso, iso, prism};
    use rstest::rstest;

    fn vowel_index() -> impl Prism<char, usize> + Clone {
        prism(
            |index: usize| ['a', 'e', 'i', 'o', 'u'][index % 5],
            |c: char| "aeiou".find(c),
        )
    }

    #[rstest]
    #[case("e!", Some((1, "!")))]
    #[case("u", Some((4, "")))]
    #[case("x", None)]
    #[case("", None)]
    fn test_adapt_parse_step(#[case] input: &str, #[case] expected: Option<(usize, &str)>) {
        let grammar = adapt(vowel_index(), element());
        let expected = expected.map(|(value, rest)| (value, rest.to_string()));
        assert_eq!(grammar.parse_step(input.to_string()), expected);
    }

    #[rstest]
    fn test_adapt_print_reviews_then_prints() {
        let grammar = adapt(vowel_index(), element());
        assert_eq!(grammar.print_step(2, "!".to_string()), Ok("i!".to_string()));
    }

    #[rstest]
    fn test_adapt_leaves_leftover_untouched() {
        let pair = adapt(
            iso(|(a, b): (char, char)| format!("{a}{b}"), |s: String| {
                let mut chars = s.chars();
                (chars.next().unwrap_or(' '), chars.next().unwrap_or(' '))
            })
            .to_prism(),
            both(element(), element()),
        );
        assert_eq!(
            pair.parse_step("xyz".to_string()),
            Some(("xy".to_string(), "z".to_string()))
        );
    }

    #[rstest]
    fn test_adapt_print_propagates_inner_failure() {
        let grammar = adapt(iso(|c: char| c, |c: char| c).to_prism(), symbol('a'));
        assert_eq!(grammar.print_step('b', String::new()), Err(Error::CannotBuild));
    }
}
