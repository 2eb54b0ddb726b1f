//! Standard exit codes for the transcipher binary
//!
//! Input errors get their own codes so scripts driving the binary can tell
//! a bad operation string from a bad index without parsing stderr.

use crate::exceptions::CipherError;

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (file not found, permission denied, closed stdin)
pub const EXIT_IO_ERROR: i32 = 106;

/// Configuration error (bad config file, bad alphabet)
pub const EXIT_CONFIG_ERROR: i32 = 109;

/// Operation string does not match the grammar
pub const EXIT_MALFORMED_OPERATION: i32 = 111;

/// Operation addressed a position outside the message
pub const EXIT_INDEX_OUT_OF_RANGE: i32 = 112;

/// Duplicate removal attempted while disabled
pub const EXIT_UNSUPPORTED_INVERSE: i32 = 113;

/// Message contains characters outside the alphabet
pub const EXIT_MALFORMED_MESSAGE: i32 = 114;

/// Duplicate would grow the message past the length limit
pub const EXIT_MESSAGE_TOO_LARGE: i32 = 115;

/// Map an error to the exit code the binary reports for it
pub fn exit_code_for(err: &CipherError) -> i32 {
    match err {
        CipherError::MalformedOperation { .. } => EXIT_MALFORMED_OPERATION,
        CipherError::IndexOutOfRange { .. } => EXIT_INDEX_OUT_OF_RANGE,
        CipherError::UnsupportedInverse { .. } => EXIT_UNSUPPORTED_INVERSE,
        CipherError::MalformedMessage { .. } => EXIT_MALFORMED_MESSAGE,
        CipherError::MessageTooLarge { .. } => EXIT_MESSAGE_TOO_LARGE,
        CipherError::InvalidAlphabet(_) | CipherError::Config(_) | CipherError::Json(_) => {
            EXIT_CONFIG_ERROR
        }
        CipherError::Io(_) => EXIT_IO_ERROR,
    }
}
