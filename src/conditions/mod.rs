//! condition expression evaluation
//!
//! a condition is a boolean formula whose atoms are comparisons
//! (`==`, `!=`, `>`, `<`, `>=`, `<=`) over bare tokens or inspect-form
//! values, joined by `&&`/`||` and parentheses. evaluation runs in two
//! stages: the solver rewrites every comparison to a boolean literal,
//! then the boolean evaluator computes the result. the whole pipeline
//! is fail-closed - malformed input yields `false`, never an error.

pub mod boolexpr;
pub mod solver;

pub use solver::{solve, solve_and, solve_comparison, solve_or, CompareOp};

/// evaluate a condition expression, failing closed
///
/// any failure at any stage - unresolvable fragments, unbalanced
/// parentheses, evaluator rejection - yields `false`. no error or
/// panic ever escapes this call.
pub fn evaluate(input: &str) -> bool {
    // a text input is already in canonical form (serializing a string
    // is the identity), so normalization goes straight to the solver
    match solver::solve(input) {
        Ok(reduced) => boolexpr::eval(&reduced).unwrap_or(false),
        Err(_) => false,
    }
}
