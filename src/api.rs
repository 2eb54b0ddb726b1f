//! High-level API: validate, parse and transform in one call

use crate::cipher::validation::{validate_message, validate_operation_list};
use crate::cipher::{CipherConfig, Engine, Mode};
use crate::exceptions::Result;
use serde::Serialize;

/// Outcome of a successful transformation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub mode: Mode,
    pub input: String,
    pub operations: String,
    pub output: String,
}

/// Check `message` and `commands` against the configured grammar
///
/// A no-op when the config marks input as sanitized.
pub fn check_input(message: &str, commands: &str, config: &CipherConfig) -> Result<()> {
    if !config.validates_input() {
        log::trace!("Input marked sanitized, skipping validation");
        return Ok(());
    }
    validate_message(message, &config.alphabet)?;
    validate_operation_list(commands)?;
    Ok(())
}

/// Validate (unless sanitized), then run `commands` over `message`
pub fn transform(
    mode: Mode,
    message: &str,
    commands: &str,
    config: &CipherConfig,
) -> Result<TransformResult> {
    check_input(message, commands, config)?;
    let engine = Engine::new(config.clone());
    let output = engine.run(mode, message, commands)?;
    Ok(TransformResult {
        mode,
        input: message.to_string(),
        operations: commands.to_string(),
        output,
    })
}

/// Encrypt `message` with `commands`
pub fn encrypt(message: &str, commands: &str, config: &CipherConfig) -> Result<String> {
    transform(Mode::Encrypt, message, commands, config).map(|r| r.output)
}

/// Decrypt `message` with the same `commands` used to encrypt it
pub fn decrypt(message: &str, commands: &str, config: &CipherConfig) -> Result<String> {
    transform(Mode::Decrypt, message, commands, config).map(|r| r.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceptions::CipherError;

    #[test]
    fn test_encrypt_decrypt() {
        let config = CipherConfig::default();
        let encrypted = encrypt("HELLO", "S0,1;R1;T0,4", &config).unwrap();
        assert_eq!(encrypted, "LIELO");
        assert_eq!(decrypt(&encrypted, "S0,1;R1;T0,4", &config).unwrap(), "HELLO");
    }

    #[test]
    fn test_validation_rejects_lowercase_message() {
        let config = CipherConfig::default();
        assert!(matches!(
            encrypt("hello", "R1", &config),
            Err(CipherError::MalformedMessage { position: 0, .. })
        ));
    }

    #[test]
    fn test_sanitized_input_skips_validation() {
        let config = CipherConfig {
            sanitized_input: true,
            ..CipherConfig::default()
        };
        // Rotation does not care about the alphabet
        assert_eq!(encrypt("hello", "R1", &config).unwrap(), "ohell");
        // The parser still rejects what the validator would have
        assert!(matches!(
            encrypt("HELLO", "R1,2", &config),
            Err(CipherError::MalformedOperation { .. })
        ));
    }

    #[test]
    fn test_transform_result() {
        let result = transform(Mode::Encrypt, "ABC", "T0,2", &CipherConfig::default()).unwrap();
        assert_eq!(result.output, "CBA");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "encrypt");
        assert_eq!(json["output"], "CBA");
    }
}
