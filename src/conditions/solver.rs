//! condition solver - reduces comparison atoms to boolean literals
//!
//! the solver is a string rewriter: it walks an expression bracket
//! group by bracket group, replaces every comparison it can resolve
//! with `true`/`false`, and leaves everything else untouched for the
//! boolean evaluator to reject. several quirks of the reduction are
//! load-bearing for existing condition text and are preserved exactly:
//!
//! - the operator scan runs in fixed order `==, !=, >, <, >=, <=`, so
//!   `>=`/`<=` are always captured by the bare `>`/`<` first and the
//!   stray `=` lands in the right operand (which then compares false)
//! - `solve_and` delegates `||`-bearing fragments to `solve_or`, but
//!   `solve_or` never delegates back, so `&&` nested inside an `||`
//!   fragment is not independently resolved
//! - a sub-condition keeps at most one trailing `)`, and text after the
//!   first `)` of a fragment is dropped from the resolved form; the
//!   final balance repair appends any missing `)` at the very end

use anyhow::{bail, Result};

use crate::value::uninspect;

/// comparison operators in their fixed scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// equality: ==
    Eq,
    /// inequality: !=
    Ne,
    /// greater than: >
    Gt,
    /// less than: <
    Lt,
    /// greater than or equal: >=
    Gte,
    /// less than or equal: <=
    Lte,
}

impl CompareOp {
    /// scan priority; `Gte`/`Lte` sit after the single-character forms
    /// and are therefore shadowed by them during the scan
    pub const SCAN_ORDER: [CompareOp; 6] = [
        CompareOp::Eq,
        CompareOp::Ne,
        CompareOp::Gt,
        CompareOp::Lt,
        CompareOp::Gte,
        CompareOp::Lte,
    ];

    /// the operator's literal text
    pub fn text(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }

    /// first operator (in scan order) whose text occurs in the fragment
    pub fn first_in(fragment: &str) -> Option<CompareOp> {
        Self::SCAN_ORDER
            .into_iter()
            .find(|op| fragment.contains(op.text()))
    }
}

/// an operand of an ordering comparison: numeric if it parses, text
/// otherwise
#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Num(f64),
    Text(String),
}

fn to_operand(raw: &str) -> Operand {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        if let Ok(n) = trimmed.parse::<f64>() {
            if !n.is_nan() {
                return Operand::Num(n);
            }
        }
    }
    Operand::Text(trimmed.to_string())
}

/// resolve a single comparison fragment to a boolean
///
/// the fragment is split on the operator text; only the first two
/// pieces take part, any further occurrences are ignored.
pub fn solve_comparison(fragment: &str, op: CompareOp) -> bool {
    let mut pieces = fragment.split(op.text());
    let lhs = pieces.next().unwrap_or("");
    let rhs = pieces.next().unwrap_or("");

    match op {
        // equality decodes both operands and compares structurally;
        // anything that fails to line up is simply not equal
        CompareOp::Eq => uninspect(lhs.trim()) == uninspect(rhs.trim()),
        CompareOp::Ne => uninspect(lhs.trim()) != uninspect(rhs.trim()),
        CompareOp::Gt | CompareOp::Lt | CompareOp::Gte | CompareOp::Lte => {
            solve_ordering(op, to_operand(lhs), to_operand(rhs))
        }
    }
}

fn solve_ordering(op: CompareOp, lhs: Operand, rhs: Operand) -> bool {
    let ordering = match (&lhs, &rhs) {
        (Operand::Num(a), Operand::Num(b)) => a.partial_cmp(b),
        (Operand::Text(a), Operand::Text(b)) => Some(a.cmp(b)),
        // mixed number/text never orders, so every operator reads false
        _ => None,
    };

    match ordering {
        Some(ord) => match op {
            CompareOp::Gt => ord.is_gt(),
            CompareOp::Lt => ord.is_lt(),
            CompareOp::Gte => ord.is_ge(),
            CompareOp::Lte => ord.is_le(),
            CompareOp::Eq | CompareOp::Ne => unreachable!("handled in solve_comparison"),
        },
        None => false,
    }
}

/// resolve every comparison in an `&&`-joined segment
pub fn solve_and(segment: &str) -> String {
    let mut resolved: Vec<String> = Vec::new();

    for condition in segment.split("&&") {
        let trimmed = condition.trim();
        if trimmed.is_empty() {
            resolved.push(String::new());
            continue;
        }

        let suffix = if trimmed.contains(')') { ")" } else { "" };
        let clean = trimmed.split(')').next().unwrap_or("");

        if clean.contains("||") {
            resolved.push(format!("{}{}", solve_or(clean), suffix));
        } else if let Some(op) = CompareOp::first_in(clean) {
            resolved.push(format!("{}{}", solve_comparison(clean, op), suffix));
        } else {
            // presumed boolean literal or unresolved fragment
            resolved.push(trimmed.to_string());
        }
    }

    resolved.join("&&")
}

/// resolve every comparison in an `||`-joined segment
///
/// unlike `solve_and` this never delegates to the other joiner: an
/// `&&` nested inside one of these fragments is not resolved pairwise,
/// the whole fragment goes through the single-operator scan instead.
pub fn solve_or(segment: &str) -> String {
    let mut resolved: Vec<String> = Vec::new();

    for condition in segment.split("||") {
        let trimmed = condition.trim();
        if trimmed.is_empty() {
            resolved.push(String::new());
            continue;
        }

        let suffix = if trimmed.contains(')') { ")" } else { "" };
        let clean = trimmed.split(')').next().unwrap_or("");

        if let Some(op) = CompareOp::first_in(clean) {
            resolved.push(format!("{}{}", solve_comparison(clean, op), suffix));
        } else {
            resolved.push(trimmed.to_string());
        }
    }

    resolved.join("||")
}

/// reduce a whole expression to boolean literals and joiners
///
/// segments between `(` markers are resolved independently, then the
/// parenthesis balance is repaired by appending any missing `)` at the
/// end of the string. an excess of closers cannot be repaired and is
/// an error (the fail-closed wrapper turns it into `false`).
pub fn solve(expression: &str) -> Result<String> {
    let mut segments: Vec<String> = Vec::new();

    for part in expression.split('(') {
        if part.trim().is_empty() {
            segments.push(String::new());
        } else {
            segments.push(solve_and(part));
        }
    }

    let mut result = segments.join("(");

    let openers = result.matches('(').count();
    let closers = result.matches(')').count();
    if openers > closers {
        result.push_str(&")".repeat(openers - closers));
    } else if closers > openers {
        bail!("unbalanced condition: {} unmatched ')'", closers - openers);
    }

    Ok(result)
}
