//! Advisory input checks run before the engine
//!
//! These only look at the shape of the input. The engine repeats whatever
//! checks it needs, so skipping them (`sanitized_input`) never lets bad
//! input through silently; it only changes which error is reported.

use super::alphabet::Alphabet;
use super::defaults::OPERATION_SEPARATOR;
use super::operations::operation::{is_integer_field, tokenize};
use crate::exceptions::{CipherError, Result};
use log::debug;

/// True iff every character of `message` is in `alphabet`
pub fn is_well_formed_message(message: &str, alphabet: &Alphabet) -> bool {
    validate_message(message, alphabet).is_ok()
}

/// True iff every `;`-separated token matches the operation grammar
pub fn is_well_formed_operation_list(commands: &str) -> bool {
    validate_operation_list(commands).is_ok()
}

/// Report the first character of `message` outside `alphabet`
pub fn validate_message(message: &str, alphabet: &Alphabet) -> Result<()> {
    match message
        .chars()
        .enumerate()
        .find(|(_, c)| !alphabet.contains(*c))
    {
        Some((position, character)) => {
            debug!("❌ Message rejected at {position}: {character:?} not in {alphabet}");
            Err(CipherError::MalformedMessage {
                position,
                character,
            })
        }
        None => Ok(()),
    }
}

/// Report the first token of `commands` that does not match the grammar
///
/// Numeric fields are checked for shape only (optional `-`, then digits);
/// range limits are left to the parser.
pub fn validate_operation_list(commands: &str) -> Result<()> {
    if commands.is_empty() {
        return Err(CipherError::malformed(0, commands, "empty operation list"));
    }

    for (position, token) in commands.split(OPERATION_SEPARATOR).enumerate() {
        let (_, fields) =
            tokenize(token).map_err(|reason| CipherError::malformed(position, token, reason))?;
        if let Some(bad) = fields.iter().find(|f| !is_integer_field(f)) {
            let reason = if bad.is_empty() {
                "empty argument".to_string()
            } else {
                format!("'{bad}' is not an integer")
            };
            debug!("❌ Operation list rejected at token {position}: {reason}");
            return Err(CipherError::malformed(position, token, reason));
        }
    }
    Ok(())
}
