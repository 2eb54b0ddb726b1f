//! Interactive prompt loop
//!
//! Asks for a mode, a message and an operation list, prints the result and
//! starts over until the user quits or input ends. Every error is reported
//! and followed by a new prompt.

use crate::cipher::validation::{validate_message, validate_operation_list};
use crate::cipher::{CipherConfig, Engine, Mode};
use crate::exceptions::{CipherError, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

const MODE_PROMPT: &str = "Enter operation: (E)ncrypt, (D)ecrypt or (Q)uit? ";
const MESSAGE_PROMPT: &str = "Enter message to be encrypted/decrypted: ";
const OPERATIONS_PROMPT: &str = "Enter encryption/decryption transformations: ";
const OPERATIONS_GUIDANCE: &str = "Please see transformation string guidelines for correct input syntax: \
     S<index>[,<amount>], R[<amount>], D<index>[,<amount>], T<index1>,<index2>, joined with ';'.";

/// What to tell the user after the engine rejects a request
fn guidance(err: &CipherError) -> &'static str {
    match err {
        CipherError::MalformedOperation { .. } => OPERATIONS_GUIDANCE,
        CipherError::UnsupportedInverse { .. } => {
            "Duplicate removal is disabled, so this list cannot be decrypted. Enable undoable duplicates or use another list."
        }
        CipherError::MessageTooLarge { .. } => "Please use smaller duplicate amounts.",
        _ => "Please check the operation indices and try again.",
    }
}

/// Line-oriented front end for an [`Engine`]
#[derive(Debug)]
pub struct Shell<R, W> {
    engine: Engine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading from `input` and writing prompts to `output`
    pub fn new(config: CipherConfig, input: R, output: W) -> Self {
        Self {
            engine: Engine::new(config),
            input,
            output,
        }
    }

    /// Run until `Q` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("🔐 Shell started");
        loop {
            let Some(choice) = self.prompt(MODE_PROMPT)? else {
                break;
            };
            let mode = match choice.trim() {
                "Q" | "q" => {
                    writeln!(self.output, "Exiting")?;
                    break;
                }
                other => match Mode::parse(other) {
                    Some(mode) => mode,
                    None => {
                        writeln!(self.output, "Please enter E, D or Q.")?;
                        continue;
                    }
                },
            };

            if !self.round(mode)? {
                break;
            }
        }
        info!("👋 Shell finished");
        Ok(())
    }

    /// One encrypt/decrypt request. Returns false when input ran out.
    fn round(&mut self, mode: Mode) -> Result<bool> {
        let validate = self.engine.config().validates_input();

        let message = loop {
            let Some(message) = self.prompt(MESSAGE_PROMPT)? else {
                return Ok(false);
            };
            if !validate {
                break message;
            }
            match validate_message(&message, &self.engine.config().alphabet) {
                Ok(()) => break message,
                Err(e) => {
                    debug!("Rejected message: {e}");
                    writeln!(
                        self.output,
                        "Please enter a message consisting only of {}.",
                        self.engine.config().alphabet
                    )?;
                }
            }
        };

        let commands = loop {
            let Some(commands) = self.prompt(OPERATIONS_PROMPT)? else {
                return Ok(false);
            };
            if !validate {
                break commands;
            }
            match validate_operation_list(&commands) {
                Ok(()) => break commands,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    writeln!(self.output, "{OPERATIONS_GUIDANCE}")?;
                }
            }
        };

        match self.engine.run(mode, &message, &commands) {
            Ok(transformed) => writeln!(self.output, "Transformed message: {transformed}")?,
            Err(e) if e.is_input_error() => {
                writeln!(self.output, "Error: {e}")?;
                writeln!(self.output, "{}", guidance(&e))?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    /// Print `text` and read one line without its line ending
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
