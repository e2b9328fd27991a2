//! Lossless conversions between two representations of the same data.
//!
//! Grammars produce values in the shape their combinators dictate: pairs
//! from [`both`](crate::grammar::both), vectors from
//! [`many`](crate::grammar::many). An [`Iso`] reshapes such a value into a
//! domain type and back, so that adapting a grammar never loses the ability
//! to print.
//!
//! Whoever writes the two directions owes the round-trip laws:
//!
//! - `iso.reverse_get(iso.get(source)) == source`
//! - `iso.get(iso.reverse_get(value)) == value`
//!
//! Nothing checks them at runtime.
//!
//! # Examples
//!
//! ```
//! use isogram::optics::{Iso, iso};
//!
//! let tagged = iso(
//!     |(tag, body): (char, String)| format!("{tag}{body}"),
//!     |text: String| {
//!         let mut chars = text.chars();
//!         let tag = chars.next().unwrap_or(' ');
//!         (tag, chars.collect())
//!     },
//! );
//!
//! assert_eq!(tagged.get(('#', "bob".to_string())), "#bob");
//! assert_eq!(tagged.reverse_get("#bob".to_string()), ('#', "bob".to_string()));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::Prism;

/// A total, invertible mapping from `S` to `A`.
///
/// Implementations must satisfy `reverse_get(get(s)) == s` and
/// `get(reverse_get(a)) == a`.
pub trait Iso<S, A> {
    /// Maps a source into the target representation.
    fn get(&self, source: S) -> A;

    /// Maps a target back into the source representation.
    fn reverse_get(&self, value: A) -> S;

    /// Swaps the roles of source and target.
    ///
    /// ```
    /// use isogram::optics::{Iso, iso};
    ///
    /// let cents = iso(|euros: i64| euros * 100, |cents: i64| cents / 100);
    /// assert_eq!(cents.reverse().get(1200), 12);
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso(self)
    }

    /// Edits a source through its target representation.
    fn modify<F>(&self, source: S, edit: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(edit(self.get(source)))
    }

    /// Follows this Iso with `next`, giving an Iso from `S` to `B`.
    ///
    /// ```
    /// use isogram::optics::{Iso, iso};
    ///
    /// let letters = iso(
    ///     |letters: Vec<char>| letters.into_iter().collect::<String>(),
    ///     |word: String| word.chars().collect::<Vec<_>>(),
    /// );
    /// let shouted = iso(|word: String| word.to_uppercase(), |word: String| word.to_lowercase());
    ///
    /// let shouted_letters = letters.compose(shouted);
    /// assert_eq!(shouted_letters.get(vec!['o', 'k']), "OK");
    /// assert_eq!(shouted_letters.reverse_get("OK".to_string()), vec!['o', 'k']);
    /// ```
    fn compose<B, I>(self, next: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, next)
    }

    /// Views this Iso as a Prism that never rejects a source.
    fn to_prism(self) -> IsoAsPrism<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

impl<S, A, I> Iso<S, A> for &I
where
    I: Iso<S, A> + ?Sized,
{
    fn get(&self, source: S) -> A {
        I::get(self, source)
    }

    fn reverse_get(&self, value: A) -> S {
        I::reverse_get(self, value)
    }
}

/// Pairs a `forward` and a `backward` function into an Iso.
///
/// The functions must be total and inverse to each other.
///
/// ```
/// use isogram::optics::{Iso, iso};
///
/// let drop_unit = iso(|(count, ()): (u8, ())| count, |count: u8| (count, ()));
/// assert_eq!(drop_unit.get((7, ())), 7);
/// assert_eq!(drop_unit.reverse_get(7), (7, ()));
/// ```
#[must_use]
pub const fn iso<S, A, G, Rg>(forward: G, backward: Rg) -> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    FunctionIso::new(forward, backward)
}

/// The Iso built by [`iso`] and [`iso!`](crate::iso!).
pub struct FunctionIso<S, A, G, Rg> {
    forward: G,
    backward: Rg,
    _marker: PhantomData<fn(S, A) -> (S, A)>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Pairs the two directions.
    #[must_use]
    pub const fn new(forward: G, backward: Rg) -> Self {
        Self {
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.forward)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.backward)(value)
    }
}

impl<S, A, G: Clone, Rg: Clone> Clone for FunctionIso<S, A, G, Rg> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> fmt::Debug for FunctionIso<S, A, G, Rg> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FunctionIso(..)")
    }
}

/// The Iso returned by [`Iso::reverse`].
#[derive(Clone, Copy, Debug)]
pub struct ReversedIso<I>(I);

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, value: A) -> S {
        self.0.reverse_get(value)
    }

    fn reverse_get(&self, source: S) -> A {
        self.0.get(source)
    }
}

/// The Iso returned by [`Iso::compose`]; `A` is the representation the two
/// halves meet at.
pub struct ComposedIso<I1, I2, A> {
    outer: I1,
    inner: I2,
    _via: PhantomData<fn(A) -> A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Chains `outer` into `inner`.
    #[must_use]
    pub const fn new(outer: I1, inner: I2) -> Self {
        Self {
            outer,
            inner,
            _via: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.inner.get(self.outer.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.outer.reverse_get(self.inner.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<I1: fmt::Debug, I2: fmt::Debug, A> fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ComposedIso")
            .field(&self.outer)
            .field(&self.inner)
            .finish()
    }
}

/// The Prism returned by [`Iso::to_prism`].
pub struct IsoAsPrism<I, S, A> {
    iso: I,
    _marker: PhantomData<fn(S, A) -> (S, A)>,
}

impl<I, S, A> IsoAsPrism<I, S, A> {
    /// Lifts `iso` into a Prism.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Prism<S, A> for IsoAsPrism<I, S, A>
where
    I: Iso<S, A>,
{
    fn preview(&self, source: S) -> Option<A> {
        Some(self.iso.get(source))
    }

    fn review(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

impl<I: Clone, S, A> Clone for IsoAsPrism<I, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone())
    }
}

impl<I: fmt::Debug, S, A> fmt::Debug for IsoAsPrism<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("IsoAsPrism").field(&self.iso).finish()
    }
}

/// Shorthand for [`iso`] usable in expression position from any module.
///
/// ```
/// use isogram::optics::Iso;
///
/// let flip = isogram::iso!(
///     |(count, word): (usize, String)| (word, count),
///     |(word, count): (String, usize)| (count, word)
/// );
///
/// assert_eq!(flip.get((3, "bob".to_string())), ("bob".to_string(), 3));
/// ```
#[macro_export]
macro_rules! iso {
    ($forward:expr, $backward:expr $(,)?) => {
        $crate::optics::FunctionIso::new($forward, $backward)
    };
}
