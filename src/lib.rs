//! # isogram
//!
//! Invertible grammar combinators: a single grammar description that both
//! parses a sequence into a value and prints a value back into a sequence.
//!
//! ## Overview
//!
//! Grammars are built from isomorphisms and prisms, so every combinator
//! knows how to run backwards:
//!
//! - **Optics**: [`Iso`](optics::Iso) and [`Prism`](optics::Prism), the
//!   reversible conversions grammars are built from
//! - **Grammar**: primitives, sequencing, ordered choice, repetition and
//!   context-sensitive binding, plus `parse` and `print`
//! - **Text**: digits, letters and signed integers over `char` sequences
//! - **Sequence**: the [`Cons`](sequence::Cons) abstraction over inputs,
//!   with a structurally shared [`ConsList`](sequence::ConsList)
//! - **Control**: [`Either`](control::Either) and
//!   [`NonEmpty`](control::NonEmpty), the values combinators produce
//!
//! ## Feature Flags
//!
//! - `optics`: Iso and Prism
//! - `grammar`: the grammar combinators (implies `optics`)
//! - `text`: character grammars (implies `grammar`)
//! - `serde`: `Serialize`/`Deserialize` for `Either` and `NonEmpty`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use isogram::prelude::*;
//!
//! // An optional sign, then digits, then the end of input.
//! let number = seq_left(integer(), eof());
//!
//! assert_eq!(parse(&number, "-17".to_string()), Some(-17));
//! assert_eq!(parse(&number, "-17x".to_string()), None);
//! assert_eq!(print::<String, _>(&number, 256), Ok("256".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the grammar combinators, the optics they are built from,
/// and the value types they produce.
///
/// # Usage
///
/// ```rust
/// use isogram::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::sequence::*;
    pub use crate::Error;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "grammar")]
    pub use crate::grammar::*;

    #[cfg(feature = "text")]
    pub use crate::grammar::text::*;
}

mod error;

pub use error::Error;
pub use error::Result;

pub mod control;

pub mod sequence;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "grammar")]
pub mod grammar;
