//! Structurally shared singly-linked list.
//!
//! [`ConsList`] is the sequence type grammars run fastest on: splitting off
//! the first element, prepending one and cloning the whole list are all
//! O(1), because every tail is shared through `Rc` rather than copied.
//!
//! ```text
//! list:         a -> b -> c -> nil
//! list.tail():       [b -> c -> nil]   // shared, not copied
//! ```
//!
//! # Examples
//!
//! ```rust
//! use isogram::sequence::ConsList;
//!
//! let list: ConsList<char> = "abc".chars().collect();
//! assert_eq!(list.head(), Some(&'a'));
//! assert_eq!(list.len(), 3);
//!
//! let extended = list.prepend('z');
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.to_string(), "zabc");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent singly-linked list with O(1) `prepend`, `split_first` and
/// `clone`.
#[derive(Clone)]
pub struct ConsList<T> {
    head: Option<Rc<Node<T>>>,
    /// Cached so `len` stays O(1).
    length: usize,
}

impl<T> ConsList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns a new list with `element` in front, sharing this list as its
    /// tail.
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element; empty stays empty.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Borrows the first element and returns the shared tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isogram::sequence::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=2).collect();
    /// let (first, rest) = list.split_first().unwrap();
    /// assert_eq!(*first, 1);
    /// assert_eq!(rest.head(), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn split_first(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, tail)
        })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates over the elements front to back.
    #[must_use]
    pub fn iter(&self) -> ConsListIterator<'_, T> {
        ConsListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }
}

/// An iterator over references to the elements of a [`ConsList`].
pub struct ConsListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ConsListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ConsListIterator<'_, T> {}

impl<T> Drop for ConsList<T> {
    // Unlinks uniquely owned nodes one at a time so dropping a long list does
    // not recurse once per node.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => current = owned.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for ConsList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = ConsListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&str> for ConsList<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Concatenates the elements without separators, so a `ConsList<char>`
/// displays as the text it holds.
impl<T: fmt::Display> fmt::Display for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}
