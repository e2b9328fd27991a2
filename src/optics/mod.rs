//! Optics: the invertible mappings grammars are built from.
//!
//! Two kinds of optic, one strictly stronger than the other:
//!
//! - [`Iso`] converts totally in both directions, and converts into a
//!   [`Prism`] through [`Iso::to_prism`]
//! - [`Prism`] recognises partially (`preview`) and builds totally (`review`)
//!
//! A grammar over a sequence `S` producing `A` is a prism from `S` onto
//! `(A, S)`, the produced value paired with the unconsumed input. Mapping a
//! grammar through an Iso or a Prism, sequencing two grammars, or choosing
//! between them are all expressed by composing optics from this module.
//!
//! # Example
//!
//! ```
//! use isogram::optics::{Iso, Prism, iso, prism};
//!
//! let chars_string = iso(
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//!     |string: String| string.chars().collect::<Vec<_>>(),
//! );
//! let decimal = prism(
//!     |number: i64| number.to_string(),
//!     |text: String| text.parse::<i64>().ok(),
//! );
//!
//! let chars_number = chars_string.to_prism().compose(decimal);
//!
//! assert_eq!(chars_number.preview(vec!['4', '2']), Some(42));
//! assert_eq!(chars_number.preview(vec!['x']), None);
//! assert_eq!(chars_number.review(7), vec!['7']);
//! ```
//!
//! The round-trip laws each optic owes are stated on [`Iso`] and [`Prism`].

mod iso;
mod prism;
mod standard_optics;

pub use iso::{ComposedIso, FunctionIso, Iso, IsoAsPrism, ReversedIso, iso};
pub use prism::{Aside, ComposedPrism, FunctionPrism, Prism, prism};
pub use standard_optics::{Swapped, iso_identity, iso_list, iso_non_empty, iso_swap};
