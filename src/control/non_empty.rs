//! A list with at least one element.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A list that always holds at least one element.
///
/// Produced by [`many1`](crate::grammar::many1); the first match lives in
/// `head`, the rest in `tail`.
///
/// # Examples
///
/// ```rust
/// use isogram::control::NonEmpty;
///
/// let letters = NonEmpty::new('a', vec!['b', 'c']);
/// assert_eq!(letters.first(), &'a');
/// assert_eq!(letters.len(), 3);
/// assert_eq!(letters.into_vec(), vec!['a', 'b', 'c']);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NonEmpty<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmpty<A> {
    /// Creates a list from its first element and the remaining ones.
    #[inline]
    #[must_use]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// Creates a one-element list.
    #[inline]
    #[must_use]
    pub const fn singleton(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// Converts a `Vec`, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isogram::control::NonEmpty;
    ///
    /// assert!(NonEmpty::<i32>::from_vec(vec![]).is_none());
    /// assert_eq!(NonEmpty::from_vec(vec![1, 2]).map(|list| list.len()), Some(2));
    /// ```
    #[must_use]
    pub fn from_vec(mut elements: Vec<A>) -> Option<Self> {
        if elements.is_empty() {
            None
        } else {
            let head = elements.remove(0);
            Some(Self::new(head, elements))
        }
    }

    /// Returns the first element.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.head
    }

    /// Returns the elements after the first.
    #[inline]
    pub fn rest(&self) -> &[A] {
        &self.tail
    }

    /// Returns the number of elements, never zero.
    #[inline]
    pub const fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`; present for API symmetry with other collections.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Splits the list back into its first element and the rest.
    #[inline]
    pub fn into_parts(self) -> (A, Vec<A>) {
        (self.head, self.tail)
    }

    /// Flattens the list into a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<A> {
        let mut elements = Vec::with_capacity(self.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }
}

impl<A> From<NonEmpty<A>> for Vec<A> {
    fn from(list: NonEmpty<A>) -> Self {
        list.into_vec()
    }
}

impl<A: fmt::Debug> fmt::Debug for NonEmpty<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}
