//! The tagged sum produced by ordered choice.
//!
//! [`choose`](crate::grammar::choose) tags its result with the branch that
//! matched: `Left` for the first grammar, `Right` for the second. Printing
//! dispatches on the same tag, so the tag is what makes choice invertible.
//!
//! # Examples
//!
//! ```rust
//! use isogram::control::Either;
//!
//! let matched: Either<char, u32> = Either::Left('x');
//!
//! let described = matched.fold(
//!     |c| format!("first branch: {c}"),
//!     |n| format!("second branch: {n}"),
//! );
//! assert_eq!(described, "first branch: x");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which branch of a choice produced a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// Produced by the first branch.
    Left(L),
    /// Produced by the second branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Whether the first branch matched.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether the second branch matched.
    #[inline]
    pub const fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// The first-branch value, if that is the branch that matched.
    ///
    /// ```rust
    /// use isogram::control::Either;
    ///
    /// assert_eq!(Either::<u8, char>::Left(7).left(), Some(7));
    /// assert_eq!(Either::<u8, char>::Right('r').left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// Collapses both branches into one type.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
        }
    }
}

impl<T> Either<T, T> {
    /// Forgets which branch matched when both produce the same type.
    ///
    /// ```rust
    /// use isogram::control::Either;
    ///
    /// let parsed: Either<i64, i64> = Either::Right(0);
    /// assert_eq!(parsed.into_inner(), 0);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        let (Self::Left(value) | Self::Right(value)) = self;
        value
    }
}

impl<L> Either<L, ()> {
    /// Reads a `Right(())` as absence.
    ///
    /// This is the shape `opt` parses into before it becomes an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<L> {
        self.left()
    }
}

impl<L> From<Option<L>> for Either<L, ()> {
    /// `Some(l)` becomes `Left(l)` and `None` becomes `Right(())`.
    #[inline]
    fn from(option: Option<L>) -> Self {
        option.map_or(Self::Right(()), Self::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(1), true)]
    #[case(Either::Right("one"), false)]
    fn test_either_tag(#[case] value: Either<i32, &str>, #[case] expected_left: bool) {
        assert_eq!(value.is_left(), expected_left);
        assert_eq!(value.is_right(), !expected_left);
    }

    #[rstest]
    fn test_fold_picks_matching_branch() {
        let width = |tagged: Either<char, &str>| tagged.fold(|_| 1, str::len);
        assert_eq!(width(Either::Left('x')), 1);
        assert_eq!(width(Either::Right("abc")), 3);
    }

    #[rstest]
    #[case(Some(3), Either::Left(3))]
    #[case(None, Either::Right(()))]
    fn test_option_conversion_roundtrip(
        #[case] option: Option<i32>,
        #[case] expected: Either<i32, ()>,
    ) {
        let either = Either::from(option);
        assert_eq!(either, expected);
        assert_eq!(either.into_option(), option);
    }

    #[rstest]
    fn test_into_inner_ignores_tag() {
        assert_eq!(Either::<u8, u8>::Left(4).into_inner(), 4);
        assert_eq!(Either::<u8, u8>::Right(5).into_inner(), 5);
    }
}
