// integration tests for the symbol-escaping commands

use crate::common::run_condex_stdout;

#[test]
fn test_escape_reserved_symbols() {
    assert_eq!(
        run_condex_stdout(&["escape", "a[0] >= 1 && b"]),
        "a@left0@right @higher@equal 1 @and b"
    );
}

#[test]
fn test_unescape_is_case_insensitive() {
    assert_eq!(run_condex_stdout(&["unescape", "a@LEFT0@Right"]), "a[0]");
}

#[test]
fn test_escape_unescape_round_trip() {
    let original = "items[3].price > 10 && tag == ok";
    let escaped = run_condex_stdout(&["escape", original]);
    assert_eq!(run_condex_stdout(&["unescape", &escaped]), original);
}
