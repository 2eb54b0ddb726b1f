// Operation descriptor and single-token grammar

use crate::cipher::defaults::{
    ARGUMENT_SEPARATOR, DEFAULT_AMOUNT, NEGATIVE_SIGN, PREFIX_DUPLICATE, PREFIX_ROTATE,
    PREFIX_SHIFT, PREFIX_TRADE,
};
use crate::exceptions::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One transformation with its parameters
///
/// Fields are parsed from 32-bit decimal text and widened, so negating an
/// amount never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Move the symbol at `index` by `amount` places in the alphabet
    Shift { index: i64, amount: i64 },
    /// Rotate the whole message right by `amount` (left when negative)
    Rotate { amount: i64 },
    /// Insert `amount` copies of the symbol at `index` after it, or remove
    /// `-amount` symbols after it when negative
    Duplicate { index: i64, amount: i64 },
    /// Swap the symbols at two positions
    Trade { index1: i64, index2: i64 },
}

impl Operation {
    /// Grammar prefix of this operation
    pub fn prefix(&self) -> char {
        match self {
            Operation::Shift { .. } => PREFIX_SHIFT,
            Operation::Rotate { .. } => PREFIX_ROTATE,
            Operation::Duplicate { .. } => PREFIX_DUPLICATE,
            Operation::Trade { .. } => PREFIX_TRADE,
        }
    }

    /// Returns the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Shift { .. } => "shift",
            Operation::Rotate { .. } => "rotate",
            Operation::Duplicate { .. } => "duplicate",
            Operation::Trade { .. } => "trade",
        }
    }

    /// The operation that undoes this one
    ///
    /// Amounts are negated; trade is its own inverse.
    pub fn inverse(&self) -> Operation {
        match *self {
            Operation::Shift { index, amount } => Operation::Shift {
                index,
                amount: -amount,
            },
            Operation::Rotate { amount } => Operation::Rotate { amount: -amount },
            Operation::Duplicate { index, amount } => Operation::Duplicate {
                index,
                amount: -amount,
            },
            trade @ Operation::Trade { .. } => trade,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.prefix();
        let sep = ARGUMENT_SEPARATOR;
        match self {
            Operation::Shift { index, amount } | Operation::Duplicate { index, amount } => {
                write!(f, "{p}{index}{sep}{amount}")
            }
            Operation::Rotate { amount } => write!(f, "{p}{amount}"),
            Operation::Trade { index1, index2 } => write!(f, "{p}{index1}{sep}{index2}"),
        }
    }
}

impl FromStr for Operation {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        parse_operation(s)
    }
}

/// Parse a single operation token such as `S2,-3`, `R`, `D0` or `T1,4`
pub fn parse_operation(token: &str) -> Result<Operation> {
    parse_token(0, token)
}

/// Parse a token that sits at `position` in an operation list
pub(crate) fn parse_token(position: usize, token: &str) -> Result<Operation> {
    let (prefix, fields) =
        tokenize(token).map_err(|reason| CipherError::malformed(position, token, reason))?;

    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        let value =
            parse_field(field).map_err(|reason| CipherError::malformed(position, token, reason))?;
        values.push(value);
    }

    let op = match (prefix, values.as_slice()) {
        (PREFIX_SHIFT, [index]) => Operation::Shift {
            index: *index,
            amount: DEFAULT_AMOUNT,
        },
        (PREFIX_SHIFT, [index, amount]) => Operation::Shift {
            index: *index,
            amount: *amount,
        },
        (PREFIX_ROTATE, []) => Operation::Rotate {
            amount: DEFAULT_AMOUNT,
        },
        (PREFIX_ROTATE, [amount]) => Operation::Rotate { amount: *amount },
        (PREFIX_DUPLICATE, [index]) => Operation::Duplicate {
            index: *index,
            amount: DEFAULT_AMOUNT,
        },
        (PREFIX_DUPLICATE, [index, amount]) => Operation::Duplicate {
            index: *index,
            amount: *amount,
        },
        (PREFIX_TRADE, [index1, index2]) => Operation::Trade {
            index1: *index1,
            index2: *index2,
        },
        // tokenize() already enforced the arity of every prefix
        _ => {
            return Err(CipherError::malformed(
                position,
                token,
                "unexpected number of arguments",
            ));
        }
    };

    log::trace!("🔍 Parsed token {position}: '{token}' -> {op:?}");
    Ok(op)
}

/// Split a token into its prefix and raw argument fields
///
/// Checks the prefix and the number of fields for that prefix, but not the
/// field contents. Shared by the parser and the validators so both accept
/// exactly the same shapes.
pub(crate) fn tokenize(token: &str) -> std::result::Result<(char, Vec<&str>), String> {
    let mut chars = token.chars();
    let Some(prefix) = chars.next() else {
        return Err("empty operation".to_string());
    };
    let body = chars.as_str();
    let fields: Vec<&str> = if body.is_empty() {
        Vec::new()
    } else {
        body.split(ARGUMENT_SEPARATOR).collect()
    };

    let (min, max, usage) = match prefix {
        PREFIX_SHIFT => (1, 2, "S<index>[,<amount>]"),
        PREFIX_ROTATE => (0, 1, "R[<amount>]"),
        PREFIX_DUPLICATE => (1, 2, "D<index>[,<amount>]"),
        PREFIX_TRADE => (2, 2, "T<index1>,<index2>"),
        other => {
            return Err(format!(
                "unknown operation '{other}' (expected one of S, R, D, T)"
            ));
        }
    };

    if fields.len() < min || fields.len() > max {
        return Err(format!(
            "expected {usage}, got {} argument(s)",
            fields.len()
        ));
    }
    Ok((prefix, fields))
}

/// Whether `field` is an optionally negative run of ASCII digits
pub(crate) fn is_integer_field(field: &str) -> bool {
    let digits = field.strip_prefix(NEGATIVE_SIGN).unwrap_or(field);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a numeric argument
fn parse_field(field: &str) -> std::result::Result<i64, String> {
    if field.is_empty() {
        return Err("empty argument".to_string());
    }
    if !is_integer_field(field) {
        return Err(format!("'{field}' is not an integer"));
    }
    field
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| format!("'{field}' does not fit in 32 bits"))
}
