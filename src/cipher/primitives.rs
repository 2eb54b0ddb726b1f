//! The four message transformations
//!
//! Each primitive edits the message in place. Failing primitives leave the
//! message untouched and report the operation as it was attempted.

use super::alphabet::Alphabet;
use super::defaults::MAX_MESSAGE_LENGTH;
use super::operations::Operation;
use crate::exceptions::{CipherError, Result};
use std::cmp::Ordering;
use std::iter;

/// Resolve `index` to a position inside `msg`
fn checked_index(msg: &[char], index: i64, operation: Operation) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < msg.len())
        .ok_or(CipherError::IndexOutOfRange {
            operation,
            length: msg.len(),
        })
}

/// Move the symbol at `index` by `amount` places, wrapping around the alphabet
pub fn shift(msg: &mut [char], index: i64, amount: i64, alphabet: &Alphabet) -> Result<()> {
    let i = checked_index(msg, index, Operation::Shift { index, amount })?;
    msg[i] = alphabet.shift(msg[i], amount);
    Ok(())
}

/// Rotate right by `amount` positions, left when negative
///
/// Equivalent to moving the last symbol to the front `amount` times, done as
/// one rotation by `amount mod len`.
pub fn rotate(msg: &mut [char], amount: i64) {
    if msg.is_empty() {
        return;
    }
    let len = msg.len() as i64;
    let steps = amount.rem_euclid(len) as usize;
    msg.rotate_right(steps);
}

/// Insert `amount` copies of the symbol at `index` right after it
///
/// A negative `amount` removes `-amount` symbols following `index`, which
/// undoes an earlier duplication. Removal is refused with
/// [`CipherError::UnsupportedInverse`] unless `undoable` is set. Growth past
/// [`MAX_MESSAGE_LENGTH`] is refused with [`CipherError::MessageTooLarge`].
pub fn duplicate(msg: &mut Vec<char>, index: i64, amount: i64, undoable: bool) -> Result<()> {
    duplicate_within(msg, index, amount, undoable, MAX_MESSAGE_LENGTH)
}

fn duplicate_within(
    msg: &mut Vec<char>,
    index: i64,
    amount: i64,
    undoable: bool,
    limit: usize,
) -> Result<()> {
    let operation = Operation::Duplicate { index, amount };
    if amount < 0 && !undoable {
        return Err(CipherError::UnsupportedInverse { operation });
    }
    let i = checked_index(msg, index, operation)?;

    match amount.cmp(&0) {
        Ordering::Equal => {}
        Ordering::Greater => {
            let too_large = CipherError::MessageTooLarge {
                operation,
                length: msg.len(),
                limit,
            };
            let count = usize::try_from(amount).unwrap_or(usize::MAX);
            if msg.len().checked_add(count).is_none_or(|len| len > limit) {
                return Err(too_large);
            }
            msg.try_reserve(count).map_err(|_| too_large)?;
            let symbol = msg[i];
            let tail = msg.split_off(i + 1);
            msg.extend(iter::repeat_n(symbol, count));
            msg.extend(tail);
        }
        Ordering::Less => {
            let count = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX);
            let end = (i + 1)
                .checked_add(count)
                .filter(|&end| end <= msg.len())
                .ok_or(CipherError::IndexOutOfRange {
                    operation,
                    length: msg.len(),
                })?;
            msg.drain(i + 1..end);
        }
    }
    Ok(())
}

/// Swap the symbols at `index1` and `index2`
pub fn trade(msg: &mut [char], index1: i64, index2: i64) -> Result<()> {
    let operation = Operation::Trade { index1, index2 };
    let a = checked_index(msg, index1, operation)?;
    let b = checked_index(msg, index2, operation)?;
    msg.swap(a, b);
    Ok(())
}
