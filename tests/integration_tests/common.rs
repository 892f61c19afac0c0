// shared utilities for integration tests

use std::env;
use std::path::PathBuf;
use std::process::{Command, Output};

/// get path to the built condex binary
pub fn condex_binary_path() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    let release_path = manifest_dir.join("target/release/condex");
    if release_path.exists() {
        return release_path;
    }

    let debug_path = manifest_dir.join("target/debug/condex");
    if debug_path.exists() {
        return debug_path;
    }

    panic!("Could not find condex binary");
}

/// run condex and capture output
pub fn run_condex(args: &[&str]) -> Output {
    Command::new(condex_binary_path())
        .args(args)
        .output()
        .expect("Failed to run condex")
}

/// run condex and return trimmed stdout, asserting success
pub fn run_condex_stdout(args: &[&str]) -> String {
    let output = run_condex(args);
    assert!(
        output.status.success(),
        "condex {:?} failed: stdout={} stderr={}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
