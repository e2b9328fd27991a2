//! Structural values carried between grammar combinators.
//!
//! - [`Either`]: the tagged result of ordered choice
//! - [`NonEmpty`]: the result of one-or-more repetition
//!
//! Pairs are plain tuples, absence is `Option`, and the unit result of
//! grammars such as `literal` and `eof` is `()`.
//!
//! # Examples
//!
//! ```rust
//! use isogram::control::{Either, NonEmpty};
//!
//! let branch: Either<NonEmpty<char>, ()> = Either::Left(NonEmpty::singleton('a'));
//! assert!(branch.is_left());
//! ```

mod either;
mod non_empty;

pub use either::Either;
pub use non_empty::NonEmpty;
