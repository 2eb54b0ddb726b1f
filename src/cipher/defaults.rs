// Centralized default values and grammar constants

// =================================
// Feature toggles
// =================================
pub const DEFAULT_DUPLICATE_UNDOABLE: bool = true; // Decrypt may remove duplicated characters
pub const DEFAULT_SANITIZED_INPUT: bool = false; // Input is untrusted, validators run

// =================================
// Alphabet
// =================================
pub const DEFAULT_ALPHABET_FIRST: char = 'A';
pub const DEFAULT_ALPHABET_LAST: char = 'Z';
pub const ALPHABET_RANGE_SEPARATOR: char = '-'; // "A-Z"

// =================================
// Operation grammar
// =================================
pub const OPERATION_SEPARATOR: char = ';';
pub const ARGUMENT_SEPARATOR: char = ',';
pub const NEGATIVE_SIGN: char = '-';

pub const PREFIX_SHIFT: char = 'S';
pub const PREFIX_ROTATE: char = 'R';
pub const PREFIX_DUPLICATE: char = 'D';
pub const PREFIX_TRADE: char = 'T';

pub const DEFAULT_AMOUNT: i64 = 1; // Used when S, R or D omit the amount

// =================================
// Limits
// =================================
pub const MAX_MESSAGE_LENGTH: usize = 1 << 24; // Characters a duplicate may grow a message to

// =================================
// Environment variables
// =================================
pub const ENV_DUPLICATE_UNDOABLE: &str = "TRANSCIPHER_DUPLICATE_UNDOABLE";
pub const ENV_SANITIZED_INPUT: &str = "TRANSCIPHER_SANITIZED_INPUT";
pub const ENV_ALPHABET: &str = "TRANSCIPHER_ALPHABET";
