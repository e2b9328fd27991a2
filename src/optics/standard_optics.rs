//! Standard isos used to reshape grammar results.
//!
//! These are the structural conversions the combinators rely on: swapping a
//! pair so a prism can act on the right component, and folding the
//! recursive `Either<(A, Vec<A>), ()>` shape of repetition into a list.

use crate::control::{Either, NonEmpty};

use super::{FunctionIso, Iso};

/// Creates an identity Iso.
///
/// # Example
///
/// ```
/// use isogram::optics::{Iso, iso_identity};
///
/// let identity = iso_identity::<i32>();
/// assert_eq!(identity.get(42), 42);
/// assert_eq!(identity.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|x: T| x, |x: T| x)
}

/// The Iso that swaps the two components of a pair.
///
/// `Swapped` is its own inverse and works for every pair type, which lets
/// it appear on both sides of a prism chain without extra type parameters.
///
/// # Example
///
/// ```
/// use isogram::optics::{Iso, Swapped};
///
/// let swapped = Swapped.get((1, "one"));
/// assert_eq!(swapped, ("one", 1));
/// assert_eq!(Swapped.reverse_get(swapped), (1, "one"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Swapped;

impl<A, B> Iso<(A, B), (B, A)> for Swapped {
    fn get(&self, (first, second): (A, B)) -> (B, A) {
        (second, first)
    }

    fn reverse_get(&self, (second, first): (B, A)) -> (A, B) {
        (first, second)
    }
}

/// Creates the Iso that swaps the elements of a tuple.
#[must_use]
pub const fn iso_swap() -> Swapped {
    Swapped
}

/// The Iso between one unrolled step of a list and the list itself.
///
/// `Left((head, tail))` is the cons cell and `Right(())` is the empty list.
///
/// # Example
///
/// ```
/// use isogram::control::Either;
/// use isogram::optics::{Iso, iso_list};
///
/// let list = iso_list::<char>();
///
/// assert_eq!(list.get(Either::Left(('a', vec!['b']))), vec!['a', 'b']);
/// assert_eq!(list.get(Either::Right(())), Vec::<char>::new());
/// assert_eq!(list.reverse_get(vec!['x']), Either::Left(('x', vec![])));
/// ```
#[must_use]
pub fn iso_list<A>() -> impl Iso<Either<(A, Vec<A>), ()>, Vec<A>> + Clone {
    FunctionIso::new(
        |step: Either<(A, Vec<A>), ()>| {
            step.fold(
                |(head, mut tail)| {
                    tail.insert(0, head);
                    tail
                },
                |()| Vec::new(),
            )
        },
        |mut list: Vec<A>| {
            if list.is_empty() {
                Either::Right(())
            } else {
                let head = list.remove(0);
                Either::Left((head, list))
            }
        },
    )
}

/// The Iso between a `(head, tail)` pair and a [`NonEmpty`] list.
///
/// # Example
///
/// ```
/// use isogram::control::NonEmpty;
/// use isogram::optics::{Iso, iso_non_empty};
///
/// let non_empty = iso_non_empty::<i32>().get((1, vec![2, 3]));
/// assert_eq!(non_empty.len(), 3);
/// assert_eq!(iso_non_empty().reverse_get(non_empty), (1, vec![2, 3]));
/// ```
#[must_use]
pub fn iso_non_empty<A>() -> impl Iso<(A, Vec<A>), NonEmpty<A>> + Clone {
    FunctionIso::new(
        |(head, tail): (A, Vec<A>)| NonEmpty::new(head, tail),
        NonEmpty::into_parts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_identity() {
        let identity_iso = iso_identity::<String>();
        let value = "hello".to_string();
        assert_eq!(identity_iso.get(value.clone()), value);
    }

    #[test]
    fn test_swapped_roundtrip() {
        let tuple = (42, "hello".to_string());
        let roundtrip = iso_swap().reverse_get(iso_swap().get(tuple.clone()));
        assert_eq!(roundtrip, tuple);
    }

    #[test]
    fn test_iso_list_roundtrip() {
        let list = iso_list::<i32>();
        for value in [vec![], vec![1], vec![1, 2, 3]] {
            assert_eq!(list.get(list.reverse_get(value.clone())), value);
        }
    }

    #[test]
    fn test_iso_non_empty_roundtrip() {
        let pair = ('a', vec!['b', 'c']);
        let non_empty = iso_non_empty::<char>();
        assert_eq!(non_empty.reverse_get(non_empty.get(pair.clone())), pair);
    }
}
