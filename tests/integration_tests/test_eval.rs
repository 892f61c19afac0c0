// integration tests for condition evaluation

use crate::common::{run_condex, run_condex_stdout};

#[test]
fn test_eval_true_condition() {
    assert_eq!(run_condex_stdout(&["eval", "5 > 3"]), "true");
}

#[test]
fn test_eval_false_condition_exits_one() {
    let output = run_condex(&["eval", "3 > 5"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}

#[test]
fn test_eval_composed_condition() {
    assert_eq!(
        run_condex_stdout(&["eval", "(1 > 0 && 2 > 1) || 0 > 1"]),
        "true"
    );
    assert_eq!(
        run_condex_stdout(&["eval", "1 > 0 || (2 < 1 && 3 < 1)"]),
        "true"
    );
}

#[test]
fn test_eval_structural_equality() {
    assert_eq!(
        run_condex_stdout(&["eval", "{\"x\":1} == { \"x\": 1 }"]),
        "true"
    );
}

#[test]
fn test_eval_malformed_fails_closed() {
    let output = run_condex(&["eval", "not a valid && expr ("]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}

#[test]
fn test_eval_quiet_prints_nothing() {
    let output = run_condex(&["--quiet", "eval", "5 > 3"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_eval_verbose_shows_reduced_form() {
    let output = run_condex(&["--verbose", "eval", "5 > 3 && 2 < 1"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("true&&false"), "stdout={}", stdout);
}
