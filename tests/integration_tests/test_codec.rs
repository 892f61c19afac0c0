// integration tests for the inspect codec and path lookup commands

use crate::common::{run_condex, run_condex_stdout};

#[test]
fn test_inspect_object() {
    assert_eq!(
        run_condex_stdout(&["inspect", "{\"a\": 1, \"b\": \"x\"}"]),
        "{ \"a\": 1, \"b\": \"x\" }"
    );
}

#[test]
fn test_inspect_preserves_key_order() {
    assert_eq!(
        run_condex_stdout(&["inspect", "{\"z\": 1, \"a\": 2}"]),
        "{ \"z\": 1, \"a\": 2 }"
    );
}

#[test]
fn test_parse_back_to_json() {
    assert_eq!(
        run_condex_stdout(&["parse", "{ \"a\": [1, true, null] }"]),
        "{\"a\":[1,true,null]}"
    );
}

#[test]
fn test_inspect_then_parse_round_trip() {
    let inspected = run_condex_stdout(&["inspect", "{\"n\": 2.5, \"list\": [\"x\", false]}"]);
    let json = run_condex_stdout(&["parse", &inspected]);
    assert_eq!(json, "{\"n\":2.5,\"list\":[\"x\",false]}");
}

#[test]
fn test_inspect_rejects_invalid_json() {
    let output = run_condex(&["inspect", "{broken"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_get_path() {
    let json = "{\"user\": {\"tags\": [\"admin\", \"ops\"]}}";
    assert_eq!(run_condex_stdout(&["get", json, "user.tags[1]"]), "ops");
    assert_eq!(
        run_condex_stdout(&["get", json, "user.tags", "--raw"]),
        "[\"admin\",\"ops\"]"
    );
}

#[test]
fn test_get_missing_path_prints_undefined() {
    assert_eq!(
        run_condex_stdout(&["get", "{\"a\": 1}", "b.c"]),
        "undefined"
    );
}
