//! Fixed, contiguous alphabets

use super::defaults::{ALPHABET_RANGE_SEPARATOR, DEFAULT_ALPHABET_FIRST, DEFAULT_ALPHABET_LAST};
use crate::exceptions::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// A contiguous range of code points, `first..=last`
///
/// Symbol `i` of the alphabet is the code point `first + i`. Shifting a
/// symbol moves it along the range and wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    first: char,
    last: char,
}

impl Alphabet {
    /// Create an alphabet spanning `first..=last`
    pub fn new(first: char, last: char) -> Result<Self> {
        if first > last {
            return Err(CipherError::InvalidAlphabet(format!(
                "'{first}' comes after '{last}'"
            )));
        }
        if (first as u32) < SURROGATE_START && (last as u32) > SURROGATE_END {
            return Err(CipherError::InvalidAlphabet(format!(
                "range {first:?}..={last:?} is not contiguous (spans the surrogate block)"
            )));
        }
        Ok(Self { first, last })
    }

    /// The 26 uppercase ASCII letters
    pub const fn uppercase() -> Self {
        Self {
            first: DEFAULT_ALPHABET_FIRST,
            last: DEFAULT_ALPHABET_LAST,
        }
    }

    /// First symbol (the base code point)
    pub fn first(&self) -> char {
        self.first
    }

    /// Last symbol
    pub fn last(&self) -> char {
        self.last
    }

    /// Number of symbols
    pub fn len(&self) -> u32 {
        self.last as u32 - self.first as u32 + 1
    }

    /// Always false; an alphabet holds at least one symbol
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `c` belongs to the alphabet
    pub fn contains(&self, c: char) -> bool {
        (self.first..=self.last).contains(&c)
    }

    /// Move `c` by `amount` positions, wrapping in both directions
    ///
    /// Characters outside the alphabet are first folded into it by their
    /// distance from the base, so the result is always a member.
    pub fn shift(&self, c: char, amount: i64) -> char {
        let size = i64::from(self.len());
        let offset = (i64::from(c as u32) - i64::from(self.first as u32)).rem_euclid(size);
        let target = (offset + amount.rem_euclid(size)).rem_euclid(size);
        // new() rejects ranges that cross the surrogate block
        char::from_u32(self.first as u32 + target as u32).unwrap_or(c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::uppercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, ALPHABET_RANGE_SEPARATOR, self.last)
    }
}

impl FromStr for Alphabet {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [first, sep, last] if *sep == ALPHABET_RANGE_SEPARATOR => Self::new(*first, *last),
            _ => Err(CipherError::InvalidAlphabet(format!(
                "expected '<first>{ALPHABET_RANGE_SEPARATOR}<last>', got '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
