//! Sequences grammars consume and produce.
//!
//! The grammar core needs exactly three things from a container: an empty
//! value to print into, splitting off the first element, and prepending an
//! element. [`Cons`] captures that and nothing more.
//!
//! | Type           | `uncons` | `cons` | `clone` |
//! |----------------|----------|--------|---------|
//! | `String`       | O(n)     | O(n)   | O(n)    |
//! | `Vec<T>`       | O(n)     | O(n)   | O(n)    |
//! | `VecDeque<T>`  | O(1)     | O(1)   | O(n)    |
//! | [`ConsList<T>`]| O(1)     | O(1)   | O(1)    |
//!
//! Ordered choice and repetition clone the remaining input before each
//! attempt, so [`ConsList`] is the natural choice for long inputs.
//!
//! # Examples
//!
//! ```rust
//! use isogram::sequence::Cons;
//!
//! let (first, rest) = "abc".to_string().uncons().unwrap();
//! assert_eq!(first, 'a');
//! assert_eq!(rest, "bc");
//! assert_eq!(String::cons('z', rest), "zbc");
//! ```

mod list;

use std::collections::VecDeque;

pub use list::ConsList;
pub use list::ConsListIterator;

/// A finite sequence that can be split at its first element and rebuilt by
/// prepending one.
///
/// # Laws
///
/// - `S::empty().uncons() == None`
/// - `S::cons(item, rest).uncons() == Some((item, rest))`
/// - if `s.uncons() == Some((item, rest))` then `S::cons(item, rest) == s`
pub trait Cons: Clone {
    /// The element type.
    type Item;

    /// Returns the empty sequence; printing starts from it.
    fn empty() -> Self;

    /// Splits off the first element, or returns `None` when empty.
    fn uncons(self) -> Option<(Self::Item, Self)>;

    /// Prepends an element.
    fn cons(item: Self::Item, rest: Self) -> Self;
}

impl Cons for String {
    type Item = char;

    fn empty() -> Self {
        Self::new()
    }

    fn uncons(mut self) -> Option<(char, Self)> {
        if self.is_empty() {
            None
        } else {
            let first = self.remove(0);
            Some((first, self))
        }
    }

    fn cons(item: char, mut rest: Self) -> Self {
        rest.insert(0, item);
        rest
    }
}

impl<T: Clone> Cons for Vec<T> {
    type Item = T;

    fn empty() -> Self {
        Self::new()
    }

    fn uncons(mut self) -> Option<(T, Self)> {
        if self.is_empty() {
            None
        } else {
            let first = self.remove(0);
            Some((first, self))
        }
    }

    fn cons(item: T, mut rest: Self) -> Self {
        rest.insert(0, item);
        rest
    }
}

impl<T: Clone> Cons for VecDeque<T> {
    type Item = T;

    fn empty() -> Self {
        Self::new()
    }

    fn uncons(mut self) -> Option<(T, Self)> {
        let first = self.pop_front()?;
        Some((first, self))
    }

    fn cons(item: T, mut rest: Self) -> Self {
        rest.push_front(item);
        rest
    }
}

impl<T: Clone> Cons for ConsList<T> {
    type Item = T;

    fn empty() -> Self {
        Self::new()
    }

    fn uncons(self) -> Option<(T, Self)> {
        let (head, tail) = self.split_first()?;
        Some((head.clone(), tail))
    }

    fn cons(item: T, rest: Self) -> Self {
        rest.prepend(item)
    }
}
