//! Partial conversions: recognise a focus inside a source, or build a source
//! from a focus.
//!
//! A [`Prism`] is the shape every grammar step has. Parsing an input
//! `S` into `(value, leftover)` may fail, which is `preview`; printing a
//! value onto a leftover always yields some input, which is `review`. The
//! combinators in [`crate::grammar`] are compositions of prisms.
//!
//! The laws a prism owes:
//!
//! - `prism.preview(prism.review(value)) == Some(value)`
//! - when `prism.preview(source) == Some(value)`, `prism.review(value)`
//!   previews to the same value, though it may differ from `source`
//!
//! # Examples
//!
//! ```
//! use isogram::optics::{Prism, prism};
//!
//! let decimal = prism(
//!     |number: i64| number.to_string(),
//!     |text: String| text.parse::<i64>().ok(),
//! );
//!
//! assert_eq!(decimal.preview("-17".to_string()), Some(-17));
//! assert_eq!(decimal.preview("abc".to_string()), None);
//! assert_eq!(decimal.review(42), "42");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A partial isomorphism from `S` onto `A`.
///
/// Implementations must satisfy `preview(review(a)) == Some(a)`.
pub trait Prism<S, A> {
    /// Recognises the focus in `source`, or `None` when it is absent.
    fn preview(&self, source: S) -> Option<A>;

    /// Builds a source holding `value`.
    fn review(&self, value: A) -> S;

    /// Rebuilds `source` with an edited focus, or `None` when there is no
    /// focus to edit.
    ///
    /// ```
    /// use isogram::optics::{Prism, prism};
    ///
    /// let decimal = prism(
    ///     |number: i64| number.to_string(),
    ///     |text: String| text.parse::<i64>().ok(),
    /// );
    ///
    /// assert_eq!(decimal.modify_option("20".to_string(), |n| n + 1), Some("21".to_string()));
    /// assert_eq!(decimal.modify_option("x".to_string(), |n| n + 1), None);
    /// ```
    fn modify_option<F>(&self, source: S, edit: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.preview(source)?;
        Some(self.review(edit(value)))
    }

    /// Focuses further into `A` through `next`.
    ///
    /// Recognition stops at the first stage that fails. Building runs
    /// `next` first, then this prism.
    ///
    /// ```
    /// use isogram::optics::{Prism, prism};
    ///
    /// let trimmed = prism(
    ///     |text: String| text,
    ///     |text: String| {
    ///         let trimmed = text.trim();
    ///         (!trimmed.is_empty()).then(|| trimmed.to_string())
    ///     },
    /// );
    /// let decimal = prism(
    ///     |number: i64| number.to_string(),
    ///     |text: String| text.parse::<i64>().ok(),
    /// );
    ///
    /// let number = trimmed.compose(decimal);
    /// assert_eq!(number.preview("  12 ".to_string()), Some(12));
    /// assert_eq!(number.preview("   ".to_string()), None);
    /// ```
    fn compose<B, P>(self, next: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, next)
    }
}

impl<S, A, P> Prism<S, A> for &P
where
    P: Prism<S, A> + ?Sized,
{
    fn preview(&self, source: S) -> Option<A> {
        P::preview(self, source)
    }

    fn review(&self, value: A) -> S {
        P::review(self, value)
    }
}

/// Pairs a total `build` and a partial `recognise` function into a prism.
///
/// The argument order follows the direction a grammar prints in: the
/// constructor comes first, the matcher second.
#[must_use]
pub const fn prism<S, A, Re, Pr>(build: Re, recognise: Pr) -> FunctionPrism<S, A, Re, Pr>
where
    Re: Fn(A) -> S,
    Pr: Fn(S) -> Option<A>,
{
    FunctionPrism::new(build, recognise)
}

/// The prism built by [`prism`] and [`prism!`](crate::prism!).
pub struct FunctionPrism<S, A, Re, Pr> {
    build: Re,
    recognise: Pr,
    _marker: PhantomData<fn(S, A) -> (S, A)>,
}

impl<S, A, Re, Pr> FunctionPrism<S, A, Re, Pr>
where
    Re: Fn(A) -> S,
    Pr: Fn(S) -> Option<A>,
{
    /// Pairs the two functions.
    #[must_use]
    pub const fn new(build: Re, recognise: Pr) -> Self {
        Self {
            build,
            recognise,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Re, Pr> Prism<S, A> for FunctionPrism<S, A, Re, Pr>
where
    Re: Fn(A) -> S,
    Pr: Fn(S) -> Option<A>,
{
    fn preview(&self, source: S) -> Option<A> {
        (self.recognise)(source)
    }

    fn review(&self, value: A) -> S {
        (self.build)(value)
    }
}

impl<S, A, Re: Clone, Pr: Clone> Clone for FunctionPrism<S, A, Re, Pr> {
    fn clone(&self) -> Self {
        Self {
            build: self.build.clone(),
            recognise: self.recognise.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Re, Pr> fmt::Debug for FunctionPrism<S, A, Re, Pr> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FunctionPrism(..)")
    }
}

/// The prism returned by [`Prism::compose`]; `A` is where the two stages
/// meet.
pub struct ComposedPrism<P1, P2, A> {
    outer: P1,
    inner: P2,
    _via: PhantomData<fn(A) -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Chains `outer` into `inner`.
    #[must_use]
    pub const fn new(outer: P1, inner: P2) -> Self {
        Self {
            outer,
            inner,
            _via: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: S) -> Option<B> {
        let middle = self.outer.preview(source)?;
        self.inner.preview(middle)
    }

    fn review(&self, value: B) -> S {
        self.outer.review(self.inner.review(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<P1: fmt::Debug, P2: fmt::Debug, A> fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ComposedPrism")
            .field(&self.outer)
            .field(&self.inner)
            .finish()
    }
}

/// Runs a prism on the second half of a pair, carrying the first half
/// through unchanged.
///
/// `Aside<P>` is a `Prism<(E, A), (E, B)>` whenever `P: Prism<A, B>`.
///
/// ```
/// use isogram::optics::{Aside, Prism, prism};
///
/// let decimal = prism(
///     |number: i64| number.to_string(),
///     |text: String| text.parse::<i64>().ok(),
/// );
/// let aside = Aside::new(decimal);
///
/// assert_eq!(aside.preview(('x', "5".to_string())), Some(('x', 5)));
/// assert_eq!(aside.preview(('x', "five".to_string())), None);
/// assert_eq!(aside.review(('y', 6)), ('y', "6".to_string()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Aside<P>(P);

impl<P> Aside<P> {
    /// Lifts `prism` onto the second half of a pair.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self(prism)
    }
}

impl<E, A, B, P> Prism<(E, A), (E, B)> for Aside<P>
where
    P: Prism<A, B>,
{
    fn preview(&self, (kept, source): (E, A)) -> Option<(E, B)> {
        Some((kept, self.0.preview(source)?))
    }

    fn review(&self, (kept, value): (E, B)) -> (E, A) {
        (kept, self.0.review(value))
    }
}

/// A prism onto one single-field tuple variant of an enum.
///
/// ```
/// use isogram::optics::Prism;
/// use isogram::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Token {
///     Number(i64),
///     Word(String),
/// }
///
/// let number = prism!(Token, Number);
///
/// assert_eq!(number.preview(Token::Number(3)), Some(3));
/// assert_eq!(number.preview(Token::Word("x".to_string())), None);
/// assert_eq!(number.review(4), Token::Number(4));
/// ```
#[macro_export]
macro_rules! prism {
    (@variant $full:ty, $name:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |value| $name::$variant(value),
            |source: $full| match source {
                $name::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
    ($name:ident < $($parameter:tt),+ >, $variant:ident) => {
        $crate::prism!(@variant $name<$($parameter),+>, $name, $variant)
    };
    ($name:ident, $variant:ident) => {
        $crate::prism!(@variant $name, $name, $variant)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    enum Token {
        Count(u32),
        Letters(String),
    }

    fn count() -> impl Prism<Token, u32> + Clone {
        prism(Token::Count, |token: Token| match token {
            Token::Count(count) => Some(count),
            Token::Letters(_) => None,
        })
    }

    #[rstest]
    #[case(Token::Count(5), Some(5))]
    #[case(Token::Letters("ab".to_string()), None)]
    fn test_preview(#[case] token: Token, #[case] expected: Option<u32>) {
        assert_eq!(count().preview(token), expected);
    }

    #[rstest]
    fn test_review_builds_variant() {
        assert_eq!(count().review(10), Token::Count(10));
    }

    #[rstest]
    fn test_compose_stops_at_first_failure() {
        let small = prism(|n: u8| u32::from(n), |n: u32| u8::try_from(n).ok());
        let small_count = count().compose(small);

        assert_eq!(small_count.preview(Token::Count(200)), Some(200));
        assert_eq!(small_count.preview(Token::Count(300)), None);
        assert_eq!(small_count.preview(Token::Letters(String::new())), None);
        assert_eq!(small_count.review(8), Token::Count(8));
    }

    #[rstest]
    fn test_aside_carries_leftover() {
        let aside = Aside::new(count());
        assert_eq!(aside.preview(("rest", Token::Count(1))), Some(("rest", 1)));
        assert_eq!(aside.review(("rest", 2)), ("rest", Token::Count(2)));
    }

    #[rstest]
    fn test_macro_matches_named_variant() {
        let letters = crate::prism!(Token, Letters);
        assert_eq!(
            letters.preview(Token::Letters("x".to_string())),
            Some("x".to_string())
        );
        assert_eq!(letters.preview(Token::Count(3)), None);
        assert_eq!(letters.review("y".to_string()), Token::Letters("y".to_string()));
    }
}
