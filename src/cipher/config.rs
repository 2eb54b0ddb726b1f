//! Engine and validator configuration

use super::alphabet::Alphabet;
use super::defaults::{
    DEFAULT_DUPLICATE_UNDOABLE, DEFAULT_SANITIZED_INPUT, ENV_ALPHABET, ENV_DUPLICATE_UNDOABLE,
    ENV_SANITIZED_INPUT,
};
use crate::exceptions::{CipherError, Result};
use crate::utils::env_flag;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Settings fixed for the lifetime of an [`Engine`](super::Engine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CipherConfig {
    /// Symbols a message may contain
    pub alphabet: Alphabet,
    /// Allow decrypt to remove characters added by a duplicate
    pub duplicate_undoable: bool,
    /// Input is trusted; skip the validators
    pub sanitized_input: bool,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            duplicate_undoable: DEFAULT_DUPLICATE_UNDOABLE,
            sanitized_input: DEFAULT_SANITIZED_INPUT,
        }
    }
}

impl CipherConfig {
    /// Defaults overridden by `TRANSCIPHER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Load a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("📄 Loading config from {:?}", path);
        let data = std::fs::read_to_string(path)?;
        let config: CipherConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Apply environment overrides on top of `self`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(value) = env_flag(ENV_DUPLICATE_UNDOABLE) {
            self.duplicate_undoable = value;
        } else if env::var(ENV_DUPLICATE_UNDOABLE).is_ok() {
            warn!("⚠️ Ignoring {ENV_DUPLICATE_UNDOABLE}: not a boolean");
        }

        if let Some(value) = env_flag(ENV_SANITIZED_INPUT) {
            self.sanitized_input = value;
        } else if env::var(ENV_SANITIZED_INPUT).is_ok() {
            warn!("⚠️ Ignoring {ENV_SANITIZED_INPUT}: not a boolean");
        }

        if let Ok(spec) = env::var(ENV_ALPHABET) {
            self.alphabet = spec
                .parse()
                .map_err(|e| CipherError::config(format!("{ENV_ALPHABET}: {e}")))?;
        }

        debug!(
            "🔧 Config: alphabet={} duplicate_undoable={} sanitized_input={}",
            self.alphabet, self.duplicate_undoable, self.sanitized_input
        );
        Ok(self)
    }

    /// Whether input should be checked before reaching the engine
    pub fn validates_input(&self) -> bool {
        !self.sanitized_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CipherConfig::default();
        assert_eq!(config.alphabet, Alphabet::uppercase());
        assert!(config.duplicate_undoable);
        assert!(!config.sanitized_input);
        assert!(config.validates_input());
    }

    #[test]
    fn test_from_file_partial() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cipher.json");
        fs::write(&path, r#"{ "duplicate_undoable": false }"#).unwrap();

        let config = CipherConfig::from_file(&path).unwrap();
        assert!(!config.duplicate_undoable);
        assert!(!config.sanitized_input);
        assert_eq!(config.alphabet, Alphabet::uppercase());
    }

    #[test]
    fn test_from_file_full() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cipher.json");
        fs::write(
            &path,
            r#"{ "alphabet": "a-z", "duplicate_undoable": true, "sanitized_input": true }"#,
        )
        .unwrap();

        let config = CipherConfig::from_file(&path).unwrap();
        assert_eq!(config.alphabet.first(), 'a');
        assert!(config.sanitized_input);
        assert!(!config.validates_input());
    }

    #[test]
    fn test_from_file_rejects_bad_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cipher.json");

        fs::write(&path, r#"{ "alphabet": "Z-A" }"#).unwrap();
        assert!(matches!(
            CipherConfig::from_file(&path),
            Err(CipherError::Json(_))
        ));

        fs::write(&path, r#"{ "undoable": true }"#).unwrap();
        assert!(CipherConfig::from_file(&path).is_err());

        assert!(matches!(
            CipherConfig::from_file(&temp_dir.path().join("missing.json")),
            Err(CipherError::Io(_))
        ));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = CipherConfig {
            alphabet: "0-9".parse().unwrap(),
            duplicate_undoable: false,
            sanitized_input: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CipherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
