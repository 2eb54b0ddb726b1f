//! End-to-end scenarios through the public API

use transcipher::cipher::primitives;
use transcipher::cipher::validation::{is_well_formed_message, is_well_formed_operation_list};
use transcipher::{Alphabet, CipherConfig, CipherError, Engine, Mode, decrypt, encrypt};

fn run_primitive(s: &str, f: impl FnOnce(&mut Vec<char>)) -> String {
    let mut msg: Vec<char> = s.chars().collect();
    f(&mut msg);
    msg.into_iter().collect()
}

#[test]
fn hello_encrypts_to_lielo_and_back() {
    let config = CipherConfig::default();
    let ops = "S0,1;R1;T0,4";

    let encrypted = encrypt("HELLO", ops, &config).unwrap();
    assert_eq!(encrypted, "LIELO");
    assert_eq!(decrypt(&encrypted, ops, &config).unwrap(), "HELLO");
}

#[test]
fn primitive_examples() {
    let abc = Alphabet::uppercase();

    assert_eq!(
        run_primitive("A", |m| primitives::shift(m, 0, 1, &abc).unwrap()),
        "B"
    );
    assert_eq!(
        run_primitive("A", |m| primitives::shift(m, 0, -1, &abc).unwrap()),
        "Z"
    );
    assert_eq!(
        run_primitive("Z", |m| primitives::shift(m, 0, 1, &abc).unwrap()),
        "A"
    );

    assert_eq!(run_primitive("ABCDE", |m| primitives::rotate(m, 1)), "EABCD");
    assert_eq!(run_primitive("ABCDE", |m| primitives::rotate(m, -1)), "BCDEA");
    assert_eq!(run_primitive("ABCDE", |m| primitives::rotate(m, 5)), "ABCDE");

    let grown = run_primitive("ABC", |m| primitives::duplicate(m, 1, 2, true).unwrap());
    assert_eq!(grown, "ABBBC");
    assert_eq!(
        run_primitive(&grown, |m| primitives::duplicate(m, 1, -2, true).unwrap()),
        "ABC"
    );

    let traded = run_primitive("ABCDE", |m| primitives::trade(m, 1, 3).unwrap());
    assert_eq!(
        run_primitive(&traded, |m| primitives::trade(m, 1, 3).unwrap()),
        "ABCDE"
    );
}

#[test]
fn unknown_prefix_is_malformed() {
    let result = encrypt("HELLO", "X1", &CipherConfig::default());
    assert!(matches!(result, Err(CipherError::MalformedOperation { .. })));
}

#[test]
fn unknown_prefix_is_malformed_without_validation() {
    let config = CipherConfig {
        sanitized_input: true,
        ..CipherConfig::default()
    };
    let result = encrypt("HELLO", "X1", &config);
    assert!(matches!(result, Err(CipherError::MalformedOperation { .. })));
}

#[test]
fn trade_past_end_is_out_of_range() {
    let result = encrypt("HELLO", "T0,10", &CipherConfig::default());
    assert!(matches!(
        result,
        Err(CipherError::IndexOutOfRange { length: 5, .. })
    ));
}

#[test]
fn duplicate_inverse_can_be_disabled() {
    let config = CipherConfig {
        duplicate_undoable: false,
        ..CipherConfig::default()
    };
    let result = decrypt("AAABC", "D0,2", &config);
    assert!(matches!(
        result,
        Err(CipherError::UnsupportedInverse { .. })
    ));
}

#[test]
fn failure_stops_at_first_bad_operation() {
    let engine = Engine::default();
    // R1 would succeed, but T9,0 fails first
    match engine.run(Mode::Encrypt, "ABC", "S0;T9,0;T8,0;R1") {
        Err(CipherError::IndexOutOfRange { operation, .. }) => {
            assert_eq!(operation.to_string(), "T9,0");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn longer_round_trip() {
    let config = CipherConfig::default();
    let ops = "D2,3;S5,-40;R-9;T0,6;S0;D0;R100;T3,3;S7,1000";
    let encrypted = encrypt("RUSTACEAN", ops, &config).unwrap();
    assert_eq!(encrypted.chars().count(), "RUSTACEAN".len() + 4);
    assert_eq!(decrypt(&encrypted, ops, &config).unwrap(), "RUSTACEAN");
}

#[test]
fn validators() {
    let abc = Alphabet::uppercase();
    assert!(is_well_formed_message("HELLO", &abc));
    assert!(!is_well_formed_message("Hello", &abc));
    assert!(is_well_formed_operation_list("S0,1;R1;T0,4"));
    assert!(is_well_formed_operation_list("S1,-2;R-3;D0"));
    assert!(!is_well_formed_operation_list("R1,2"));
    assert!(!is_well_formed_operation_list("S0;;R1"));
}

#[test]
fn oversized_duplicate_is_an_error() {
    let config = CipherConfig::default();
    assert!(is_well_formed_operation_list("D0,2147483647"));
    assert!(matches!(
        encrypt("A", "D0,2147483647", &config),
        Err(CipherError::MessageTooLarge { length: 1, .. })
    ));
    // The engine is still usable afterwards
    assert_eq!(encrypt("A", "D0,2", &config).unwrap(), "AAA");
}
