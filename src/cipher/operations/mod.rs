// Operation grammar: single tokens and `;`-separated lists

pub mod chain;
pub mod operation;

pub use chain::{format_operations, invert_operations, parse_operations};
pub use operation::{Operation, parse_operation};
