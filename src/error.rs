//! The failure kinds of running a grammar.
//!
//! Failure carries no diagnostic payload: there is no position and no set of
//! expected elements. A grammar either matches or it does not, and a value
//! either prints or it does not.

use thiserror::Error;

/// Represents the ways running a grammar can fail.
///
/// # Examples
///
/// ```rust
/// use isogram::Error;
///
/// assert_eq!(Error::NoMatch.to_string(), "input does not match the grammar");
/// assert_eq!(Error::CannotBuild.to_string(), "value cannot be printed by the grammar");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Parsing found no match.
    #[error("input does not match the grammar")]
    NoMatch,

    /// Printing found no way to build a sequence for the value.
    #[error("value cannot be printed by the grammar")]
    CannotBuild,

    /// A checked `bind` printed output that does not parse back to the same
    /// driver and value.
    #[error("bind driver recovered while printing does not reproduce the printed value")]
    InconsistentDriver,
}

/// Result alias used by printing.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::NoMatch, "input does not match the grammar")]
    #[case(Error::CannotBuild, "value cannot be printed by the grammar")]
    #[case(
        Error::InconsistentDriver,
        "bind driver recovered while printing does not reproduce the printed value"
    )]
    fn test_error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
