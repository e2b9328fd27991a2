//! Character-level grammars.
//!
//! Everything here works over any sequence of `char`: `String`,
//! `Vec<char>`, `VecDeque<char>` or [`ConsList<char>`](crate::sequence::ConsList).
//!
//! # Examples
//!
//! ```
//! use isogram::grammar::text::integer;
//! use isogram::grammar::{parse, print};
//!
//! assert_eq!(parse(&integer(), "-42rest".to_string()), Some(-42));
//! assert_eq!(print::<String, _>(&integer(), 1337), Ok("1337".to_string()));
//! ```

use super::Grammar;
use super::adapt::adapt;
use super::combinator::{both, opt};
use super::primitive::{Satisfy, symbol};
use super::repeat::many;
use crate::optics::{Iso, Prism, iso, prism};
use crate::sequence::Cons;

/// A single character from a fixed class.
pub type CharClass = Satisfy<fn(&char) -> bool>;

/// One ASCII decimal digit, `0` through `9`.
#[must_use]
pub fn digit() -> CharClass {
    Satisfy::new(char::is_ascii_digit)
}

/// One ASCII letter, `a` through `z` or `A` through `Z`.
#[must_use]
pub fn alpha() -> CharClass {
    Satisfy::new(char::is_ascii_alphabetic)
}

/// Converts between a list of characters and the string they spell.
///
/// # Examples
///
/// ```
/// use isogram::grammar::text::chars_to_string;
/// use isogram::optics::Iso;
///
/// assert_eq!(chars_to_string().get(vec!['o', 'k']), "ok");
/// assert_eq!(chars_to_string().reverse_get("ok".to_string()), vec!['o', 'k']);
/// ```
pub fn chars_to_string() -> impl Iso<Vec<char>, String> + Clone {
    iso(
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
        |text: String| text.chars().collect::<Vec<_>>(),
    )
}

/// Reads a decimal integer from a string and writes one back.
///
/// `preview` accepts exactly what `i64`'s `FromStr` accepts and fails on
/// anything else, including overflow. `review` writes the canonical form,
/// with no leading `+` and no leading zeros.
pub fn int_to_string() -> impl Prism<String, i64> + Clone {
    prism(
        |number: i64| number.to_string(),
        |text: String| text.parse::<i64>().ok(),
    )
}

/// Joins an optional sign onto the digits that follow it.
///
/// `reverse_get` splits a leading `-` off again so that this is a true
/// inverse on the strings [`integer`] prints.
fn signed_digits() -> impl Iso<(Option<char>, Vec<char>), Vec<char>> + Clone {
    iso(
        |(sign, mut digits): (Option<char>, Vec<char>)| {
            if let Some(sign) = sign {
                digits.insert(0, sign);
            }
            digits
        },
        |mut chars: Vec<char>| {
            if chars.first() == Some(&'-') {
                let sign = chars.remove(0);
                (Some(sign), chars)
            } else {
                (None, chars)
            }
        },
    )
}

/// An optionally negative decimal integer.
///
/// Parses an optional `-` followed by as many digits as are present, then
/// converts through [`int_to_string`]. A lone `-`, no digits at all, or a
/// value outside `i64` fails to parse. Leading zeros are accepted when
/// parsing and never printed.
///
/// # Examples
///
/// ```
/// use isogram::grammar::text::integer;
/// use isogram::grammar::{parse, print};
///
/// assert_eq!(parse(&integer(), "007".to_string()), Some(7));
/// assert_eq!(parse(&integer(), "-".to_string()), None);
/// assert_eq!(parse(&integer(), "x1".to_string()), None);
/// assert_eq!(print::<String, _>(&integer(), -8), Ok("-8".to_string()));
/// ```
pub fn integer<S>() -> impl Grammar<S, Value = i64> + Clone
where
    S: Cons<Item = char>,
{
    let number = signed_digits()
        .compose(chars_to_string())
        .to_prism()
        .compose(int_to_string());
    adapt(number, both(opt(symbol('-')), many(digit())))
}
