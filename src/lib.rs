//! transcipher - reversible, index-addressed string transformations
//!
//! A message over a fixed alphabet is run through an operation list such as
//! `S0,1;R1;T0,4` (shift, rotate, duplicate, trade). Decrypting with the
//! same list undoes the encryption.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_enum_variant,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![allow(
    // Grammar constants and enum fields are self-describing
    missing_docs,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod api;
pub mod cipher;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod shell;
pub mod utils;
pub mod version;

// Re-export main API functions
pub use api::{TransformResult, check_input, decrypt, encrypt, transform};
pub use cipher::{Alphabet, CipherConfig, Engine, Mode, Operation};
pub use exceptions::{CipherError, Result};
pub use shell::Shell;
