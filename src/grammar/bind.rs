//! Context-sensitive grammars: the value of one grammar selects the next.

use std::fmt;

use tracing::debug;

use super::Grammar;
use crate::error::{Error, Result};

/// A grammar whose second half depends on the value of its first half.
///
/// See [`bind`].
#[derive(Clone, Copy)]
pub struct Bind<G, F, H> {
    grammar: G,
    continuation: F,
    driver_of: H,
}

/// Parses a driver with `grammar`, then parses the rest with the grammar
/// `continuation(driver)`, yielding only the second value.
///
/// The driver is not part of the result, so printing needs `driver_of` to
/// recover it from the value. Printing computes `driver = driver_of(&value)`,
/// prints `value` with `continuation(driver)` and prints the driver in
/// front of that. Nothing checks that `driver_of` agrees with
/// `continuation`; a mismatch produces output that does not parse back.
/// [`bind_checked`] verifies the output instead.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{bind, element, parse, print, replicate};
///
/// // A length byte followed by that many bytes.
/// let frame = bind(
///     element(),
///     |length: u8| replicate(usize::from(length), element()),
///     |payload: &Vec<u8>| u8::try_from(payload.len()).unwrap_or(u8::MAX),
/// );
///
/// assert_eq!(parse(&frame, vec![2, 7, 9, 1]), Some(vec![7, 9]));
/// assert_eq!(print::<Vec<u8>, _>(&frame, vec![5, 6, 7]), Ok(vec![3, 5, 6, 7]));
/// ```
#[must_use]
pub const fn bind<G, F, H>(grammar: G, continuation: F, driver_of: H) -> Bind<G, F, H> {
    Bind {
        grammar,
        continuation,
        driver_of,
    }
}

impl<S, G, F, H, G2> Grammar<S> for Bind<G, F, H>
where
    G: Grammar<S>,
    G::Value: Clone,
    F: Fn(G::Value) -> G2,
    G2: Grammar<S>,
    H: Fn(&G2::Value) -> G::Value,
{
    type Value = G2::Value;

    fn parse_step(&self, input: S) -> Option<(G2::Value, S)> {
        let (driver, rest) = self.grammar.parse_step(input)?;
        (self.continuation)(driver).parse_step(rest)
    }

    fn print_step(&self, value: G2::Value, rest: S) -> Result<S> {
        let driver = (self.driver_of)(&value);
        let rest = (self.continuation)(driver.clone()).print_step(value, rest)?;
        self.grammar.print_step(driver, rest)
    }
}

impl<G: fmt::Debug, F, H> fmt::Debug for Bind<G, F, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bind")
            .field("grammar", &self.grammar)
            .finish_non_exhaustive()
    }
}

/// A [`Bind`] that verifies its printed output parses back.
///
/// See [`bind_checked`].
#[derive(Clone, Copy)]
pub struct BindChecked<G, F, H> {
    inner: Bind<G, F, H>,
}

/// Like [`bind`], but printing re-parses what it printed and fails with
/// [`Error::InconsistentDriver`] unless the driver and the value come back
/// unchanged.
///
/// This catches a `driver_of` that disagrees with `continuation`, and a
/// dependent grammar that would read past its own output into `rest`. It
/// costs one extra parse per printed value.
///
/// # Examples
///
/// ```
/// use isogram::Error;
/// use isogram::grammar::{bind_checked, element, many, print, symbol};
///
/// // "#" followed by everything up to the end of input.
/// let section = bind_checked(symbol('#'), |_: char| many(element()), |_: &Vec<char>| '#');
///
/// assert_eq!(print::<String, _>(&section, vec!['a', 'b']), Ok("#ab".to_string()));
///
/// // A second section would be swallowed by the first one's `many`.
/// assert_eq!(
///     print::<String, _>(&many(section), vec![vec!['a'], vec!['b']]),
///     Err(Error::InconsistentDriver)
/// );
/// ```
#[must_use]
pub const fn bind_checked<G, F, H>(
    grammar: G,
    continuation: F,
    driver_of: H,
) -> BindChecked<G, F, H> {
    BindChecked {
        inner: bind(grammar, continuation, driver_of),
    }
}

impl<S, G, F, H, G2> Grammar<S> for BindChecked<G, F, H>
where
    S: Clone,
    G: Grammar<S>,
    G::Value: Clone + PartialEq,
    F: Fn(G::Value) -> G2,
    G2: Grammar<S>,
    G2::Value: Clone + PartialEq,
    H: Fn(&G2::Value) -> G::Value,
{
    type Value = G2::Value;

    fn parse_step(&self, input: S) -> Option<(G2::Value, S)> {
        self.inner.parse_step(input)
    }

    fn print_step(&self, value: G2::Value, rest: S) -> Result<S> {
        let Bind {
            grammar,
            continuation,
            driver_of,
        } = &self.inner;

        let driver = driver_of(&value);
        let segment = continuation(driver.clone()).print_step(value.clone(), rest)?;
        let output = grammar.print_step(driver.clone(), segment)?;

        let reproduced = grammar
            .parse_step(output.clone())
            .filter(|(reparsed, _)| *reparsed == driver)
            .and_then(|(reparsed, remainder)| continuation(reparsed).parse_step(remainder))
            .is_some_and(|(reparsed, _)| reparsed == value);

        if reproduced {
            Ok(output)
        } else {
            debug!(
                target: "isogram::grammar",
                "bind output does not parse back to the printed driver and value"
            );
            Err(Error::InconsistentDriver)
        }
    }
}

impl<G: fmt::Debug, F, H> fmt::Debug for BindChecked<G, F, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BindChecked")
            .field("inner", &self.inner)
            .finish()
    }
}

/// A grammar built on first use, for grammars that refer to themselves.
///
/// See [`lazy`].
#[derive(Clone, Copy)]
pub struct Lazy<F> {
    build: F,
}

/// Defers construction of a grammar until it runs.
///
/// The closure is called on every parse and print step, so it should only
/// assemble combinators. Recursive grammars need a type-erased handle to
/// themselves; [`Grammar::boxed`] provides one.
///
/// # Examples
///
/// ```
/// use isogram::grammar::{
///     BoxedGrammar, Grammar, adapt, between, choose, lazy, literal, parse, print,
/// };
/// use isogram::control::Either;
/// use isogram::optics::iso;
/// use isogram::optics::Iso;
///
/// // depth ::= "(" depth ")" | "."
/// fn depth() -> BoxedGrammar<'static, String, usize> {
///     adapt(
///         iso(
///             |tagged: Either<usize, ()>| tagged.fold(|inner| inner + 1, |()| 0),
///             |depth: usize| match depth {
///                 0 => Either::Right(()),
///                 nested => Either::Left(nested - 1),
///             },
///         )
///         .to_prism(),
///         choose(between(literal('('), literal(')'), lazy(depth)), literal('.')),
///     )
///     .boxed()
/// }
///
/// assert_eq!(parse(&depth(), "((.))".to_string()), Some(2));
/// assert_eq!(print(&depth(), 3), Ok("(((.)))".to_string()));
/// ```
#[must_use]
pub const fn lazy<F>(build: F) -> Lazy<F> {
    Lazy { build }
}

impl<S, F, G> Grammar<S> for Lazy<F>
where
    F: Fn() -> G,
    G: Grammar<S>,
{
    type Value = G::Value;

    fn parse_step(&self, input: S) -> Option<(G::Value, S)> {
        (self.build)().parse_step(input)
    }

    fn print_step(&self, value: G::Value, rest: S) -> Result<S> {
        (self.build)().print_step(value, rest)
    }
}

impl<F> fmt::Debug for Lazy<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lazy").finish_non_exhaustive()
    }
}
