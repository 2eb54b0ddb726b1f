//! Error types for transcipher

use crate::cipher::operations::Operation;

/// Main error type for cipher operations
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    /// A token does not match the operation grammar
    #[error("Malformed operation '{token}' at position {position}: {reason}")]
    MalformedOperation {
        /// 0-based position of the token in the operation list
        position: usize,
        /// The offending token text
        token: String,
        /// What is wrong with it
        reason: String,
    },

    /// An operation addressed a position outside the current message
    #[error("Index out of range: {operation} on a message of length {length}")]
    IndexOutOfRange {
        /// The operation that failed, as it was executed
        operation: Operation,
        /// Message length at the point of failure
        length: usize,
    },

    /// A duplicate removal was attempted while duplicates are not undoable
    #[error("Operation not reversible: {operation} (duplicate removal is disabled)")]
    UnsupportedInverse {
        /// The removal that was refused
        operation: Operation,
    },

    /// A duplicate would grow the message past what can be held
    #[error("Message too large: {operation} would grow a message of length {length} past {limit} characters")]
    MessageTooLarge {
        /// The duplicate that was refused
        operation: Operation,
        /// Message length before the duplicate
        length: usize,
        /// Largest message length allowed
        limit: usize,
    },

    /// A message character is outside the configured alphabet
    #[error("Malformed message: '{character}' at position {position} is outside the alphabet")]
    MalformedMessage {
        /// 0-based character position
        position: usize,
        /// The offending character
        character: char,
    },

    /// Alphabet definition is unusable
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CipherError {
    /// Create a malformed operation error
    pub fn malformed(position: usize, token: &str, reason: impl Into<String>) -> Self {
        Self::MalformedOperation {
            position,
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true for errors caused by user input that can be corrected
    /// and retried
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedOperation { .. }
                | Self::IndexOutOfRange { .. }
                | Self::UnsupportedInverse { .. }
                | Self::MessageTooLarge { .. }
                | Self::MalformedMessage { .. }
        )
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
