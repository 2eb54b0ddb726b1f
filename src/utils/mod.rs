//! Utility functions for transcipher

use std::env;

/// Read a boolean flag from the environment
///
/// Returns `None` when the variable is unset or holds neither a truthy
/// ("1", "true", "on", "yes", "t") nor a falsy ("0", "false", "off", "no",
/// "f") value.
pub fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|val| parse_flag(&val))
}

/// Parse a truthy/falsy string (case insensitive)
pub fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" | "t" => Some(true),
        "0" | "false" | "off" | "no" | "f" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" yes "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_unset_env_flag() {
        assert_eq!(env_flag("TRANSCIPHER_TEST_UNSET_FLAG_9f2c"), None);
    }
}
