// Operation list parsing and rendering

use super::operation::{Operation, parse_token};
use crate::cipher::defaults::OPERATION_SEPARATOR;
use crate::exceptions::{CipherError, Result};

/// Parse a `;`-separated operation list, keeping its order
pub fn parse_operations(commands: &str) -> Result<Vec<Operation>> {
    if commands.is_empty() {
        return Err(CipherError::malformed(0, commands, "empty operation list"));
    }

    let operations = commands
        .split(OPERATION_SEPARATOR)
        .enumerate()
        .map(|(position, token)| parse_token(position, token))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "📋 Parsed operation list: count={} operations={}",
        operations.len(),
        format_operations(&operations)
    );
    Ok(operations)
}

/// Render operations back into canonical list syntax (`S0,1;R1;T0,4`)
pub fn format_operations(operations: &[Operation]) -> String {
    operations
        .iter()
        .map(Operation::to_string)
        .collect::<Vec<_>>()
        .join(OPERATION_SEPARATOR.to_string().as_str())
}

/// The list that undoes `operations`: reversed, each operation inverted
pub fn invert_operations(operations: &[Operation]) -> Vec<Operation> {
    operations.iter().rev().map(Operation::inverse).collect()
}
