//! Reversible message transformations
//!
//! A message is a sequence of symbols from a fixed [`Alphabet`]. An
//! operation list such as `S0,1;R1;T0,4` is parsed into [`Operation`]s and
//! run by the [`Engine`], either forward (encrypt) or backward with each
//! operation inverted (decrypt).

pub mod alphabet;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod operations;
pub mod primitives;
pub mod validation;

pub use alphabet::Alphabet;
pub use config::CipherConfig;
pub use engine::Engine;
pub use operations::{Operation, format_operations, parse_operation, parse_operations};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction an operation list is applied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Apply operations in order with their literal parameters
    Encrypt,
    /// Apply inverted operations in reverse order
    Decrypt,
}

impl Mode {
    /// Parse a mode selector (`E`, `D`, `encrypt`, `decrypt`; case insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "e" | "encrypt" => Some(Self::Encrypt),
            "d" | "decrypt" => Some(Self::Decrypt),
            _ => None,
        }
    }

    /// Convert mode to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
