//! transcipher command-line binary

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::{panic, path::PathBuf, process};
use transcipher::cipher::validation::{validate_message, validate_operation_list};
use transcipher::exit_codes::{
    EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_PANIC, EXIT_SUCCESS, exit_code_for,
};
use transcipher::{CipherConfig, CipherError, Mode, Shell, transform};

const VERSION: &str = transcipher::version::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "transcipher",
    version = VERSION,
    about = "Encrypt and decrypt messages with reversible string operations"
)]
struct Cli {
    /// JSON config file (alphabet, duplicate_undoable, sanitized_input)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Alphabet as a code point range, e.g. A-Z
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Refuse to remove duplicated characters when decrypting
    #[arg(long, global = true)]
    no_undo_duplicates: bool,

    /// Trust the input and skip validation
    #[arg(long, global = true)]
    sanitized_input: bool,

    /// Log level (trace, debug, info, warn, error, json:<level>)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply an operation list to a message
    Encrypt {
        #[arg(short, long)]
        message: String,
        /// Operation list, e.g. "S0,1;R1;T0,4"
        #[arg(short, long)]
        ops: String,
    },
    /// Undo an operation list applied by encrypt
    Decrypt {
        #[arg(short, long)]
        message: String,
        /// The operation list used to encrypt
        #[arg(short, long)]
        ops: String,
    },
    /// Validate a message and/or operation list without transforming
    Check {
        #[arg(short, long)]
        message: Option<String>,
        #[arg(short, long)]
        ops: Option<String>,
    },
    /// Interactive prompt loop
    Shell,
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in transcipher");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                EXIT_INVALID_ARGS
            } else {
                EXIT_SUCCESS
            };
        }
    };

    if let Some(ref level) = cli.log_level {
        transcipher::logger::JsonLogger::init_with_level(level, "CLI --log-level");
    } else {
        transcipher::logger::JsonLogger::init();
    }
    log::debug!("🚀 transcipher {} starting", transcipher::version::full_version());

    match execute(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            match e.downcast_ref::<CipherError>() {
                Some(cipher_err) => exit_code_for(cipher_err),
                None => EXIT_ERROR,
            }
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Encrypt { message, ops } => {
            print_transform(cli, Mode::Encrypt, message, ops, &config)
        }
        Commands::Decrypt { message, ops } => {
            print_transform(cli, Mode::Decrypt, message, ops, &config)
        }
        Commands::Check { message, ops } => {
            if message.is_none() && ops.is_none() {
                anyhow::bail!("nothing to check: pass --message and/or --ops");
            }
            if let Some(message) = message {
                validate_message(message, &config.alphabet)?;
            }
            if let Some(ops) = ops {
                validate_operation_list(ops)?;
            }
            if cli.json {
                println!("{}", serde_json::json!({ "ok": true }));
            } else {
                println!("input well formed");
            }
            Ok(())
        }
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(config, stdin.lock(), stdout.lock())
                .run()
                .context("interactive session failed")?;
            io::stdout().flush().context("failed to flush stdout")?;
            Ok(())
        }
    }
}

fn print_transform(
    cli: &Cli,
    mode: Mode,
    message: &str,
    ops: &str,
    config: &CipherConfig,
) -> anyhow::Result<()> {
    let result = transform(mode, message, ops, config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.output);
    }
    Ok(())
}

/// Defaults, then config file, then environment, then command-line flags
fn load_config(cli: &Cli) -> anyhow::Result<CipherConfig> {
    let base = match &cli.config {
        Some(path) => CipherConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CipherConfig::default(),
    };
    let mut config = base.with_env_overrides()?;

    if let Some(ref spec) = cli.alphabet {
        config.alphabet = spec.parse()?;
    }
    if cli.no_undo_duplicates {
        config.duplicate_undoable = false;
    }
    if cli.sanitized_input {
        config.sanitized_input = true;
    }
    Ok(config)
}
