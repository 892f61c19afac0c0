// integration tests for fuzzy word suggestions

use crate::common::{run_condex, run_condex_stdout};

#[test]
fn test_suggest_closest_candidate() {
    assert_eq!(
        run_condex_stdout(&["suggest", "evl", "eval", "escape", "parse"]),
        "eval"
    );
}

#[test]
fn test_suggest_exact_match_wins() {
    assert_eq!(
        run_condex_stdout(&["suggest", "parse", "eval", "escape", "parse"]),
        "parse"
    );
}

#[test]
fn test_suggest_requires_candidates() {
    let output = run_condex(&["suggest", "word"]);
    assert!(!output.status.success());
}
