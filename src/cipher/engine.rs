//! Runs operation lists over a message

use super::Mode;
use super::config::CipherConfig;
use super::operations::{Operation, invert_operations, parse_operations};
use super::primitives;
use crate::exceptions::Result;
use log::{debug, trace};

/// Applies operation lists under a fixed [`CipherConfig`]
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: CipherConfig,
}

impl Engine {
    /// Create an engine with the given configuration
    pub fn new(config: CipherConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine runs with
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Apply `operations` to `message`
    ///
    /// Encrypt runs the list in order. Decrypt runs it backwards with every
    /// operation inverted, so decrypting an encrypted message restores it.
    /// Stops at the first failing operation; on error no output is produced.
    pub fn apply(&self, mode: Mode, message: &str, operations: &[Operation]) -> Result<String> {
        let plan = match mode {
            Mode::Encrypt => operations.to_vec(),
            Mode::Decrypt => invert_operations(operations),
        };
        debug!(
            "🚀 Applying {} operation(s): mode={} length={}",
            plan.len(),
            mode,
            message.chars().count()
        );

        let mut msg: Vec<char> = message.chars().collect();
        for (step, op) in plan.iter().enumerate() {
            if let Err(e) = self.step(&mut msg, *op) {
                debug!("❌ Step {step} ({}) failed: {e}", op.name());
                return Err(e);
            }
            trace!(
                "🔧 Step {step}: {} {op} -> {}",
                op.name(),
                msg.iter().collect::<String>()
            );
        }

        let output: String = msg.into_iter().collect();
        debug!("✅ Transformation complete: length={}", output.chars().count());
        Ok(output)
    }

    /// Parse `commands` and apply them to `message`
    pub fn run(&self, mode: Mode, message: &str, commands: &str) -> Result<String> {
        let operations = parse_operations(commands)?;
        self.apply(mode, message, &operations)
    }

    fn step(&self, msg: &mut Vec<char>, op: Operation) -> Result<()> {
        match op {
            Operation::Shift { index, amount } => {
                primitives::shift(msg, index, amount, &self.config.alphabet)
            }
            Operation::Rotate { amount } => {
                primitives::rotate(msg, amount);
                Ok(())
            }
            Operation::Duplicate { index, amount } => {
                primitives::duplicate(msg, index, amount, self.config.duplicate_undoable)
            }
            Operation::Trade { index1, index2 } => primitives::trade(msg, index1, index2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Alphabet;
    use crate::exceptions::CipherError;

    fn engine() -> Engine {
        Engine::default()
    }

    #[test]
    fn test_hello_scenario() {
        let e = engine();
        assert_eq!(
            e.run(Mode::Encrypt, "HELLO", "S0,1;R1;T0,4").unwrap(),
            "LIELO"
        );
        assert_eq!(
            e.run(Mode::Decrypt, "LIELO", "S0,1;R1;T0,4").unwrap(),
            "HELLO"
        );
    }

    #[test]
    fn test_encrypt_steps_in_order() {
        let e = engine();
        assert_eq!(e.run(Mode::Encrypt, "HELLO", "S0,1").unwrap(), "IELLO");
        assert_eq!(e.run(Mode::Encrypt, "HELLO", "S0,1;R1").unwrap(), "OIELL");
    }

    #[test]
    fn test_duplicate_round_trip() {
        let e = engine();
        let ops = "D1,2;S3,5;R-2;T0,3";
        let encrypted = e.run(Mode::Encrypt, "ABC", ops).unwrap();
        assert_eq!(encrypted.len(), 5);
        assert_eq!(e.run(Mode::Decrypt, &encrypted, ops).unwrap(), "ABC");
    }

    #[test]
    fn test_index_checked_against_current_length() {
        let e = engine();
        // D grows the message, so index 4 is valid by the time T runs
        assert_eq!(e.run(Mode::Encrypt, "ABC", "D0,2;T0,4").unwrap(), "CAABA");
        assert!(matches!(
            e.run(Mode::Encrypt, "ABC", "T0,4"),
            Err(CipherError::IndexOutOfRange { length: 3, .. })
        ));
    }

    #[test]
    fn test_malformed_operation() {
        assert!(matches!(
            engine().run(Mode::Encrypt, "HELLO", "X1"),
            Err(CipherError::MalformedOperation { .. })
        ));
    }

    #[test]
    fn test_index_out_of_range_reports_operation() {
        match engine().run(Mode::Encrypt, "HELLO", "S0;T0,10;R1") {
            Err(CipherError::IndexOutOfRange { operation, length }) => {
                assert_eq!(operation.to_string(), "T0,10");
                assert_eq!(length, 5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decrypt_reports_inverted_operation() {
        match engine().run(Mode::Decrypt, "AB", "D1,3") {
            Err(CipherError::IndexOutOfRange { operation, length }) => {
                assert_eq!(operation.to_string(), "D1,-3");
                assert_eq!(length, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_inverse() {
        let e = Engine::new(CipherConfig {
            duplicate_undoable: false,
            ..CipherConfig::default()
        });
        assert!(matches!(
            e.run(Mode::Decrypt, "AAABC", "D0,2"),
            Err(CipherError::UnsupportedInverse { .. })
        ));
        // Encrypting with the same list is still allowed
        assert_eq!(e.run(Mode::Encrypt, "ABC", "D0,2").unwrap(), "AAABC");
    }

    #[test]
    fn test_custom_alphabet() {
        let e = Engine::new(CipherConfig {
            alphabet: Alphabet::new('0', '9').unwrap(),
            ..CipherConfig::default()
        });
        assert_eq!(e.run(Mode::Encrypt, "1999", "S1,1;R-1").unwrap(), "0991");
        assert_eq!(e.run(Mode::Decrypt, "0991", "S1,1;R-1").unwrap(), "1999");
    }

    #[test]
    fn test_empty_message_rotates() {
        assert_eq!(engine().run(Mode::Encrypt, "", "R3").unwrap(), "");
    }
}
