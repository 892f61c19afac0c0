//! dynamic property path lookup
//!
//! resolves `a.b[0].c` style paths against a value. this is a small
//! explicit parser and walker over a closed grammar (dot segments,
//! numeric `[0]` indexes, quoted `["key"]` bracket keys); there is no
//! code evaluation anywhere. every failure mode - bad syntax, missing
//! key, index past the end, walking into a scalar - resolves to
//! `undefined` rather than an error.

use std::sync::LazyLock;

use regex::Regex;

use super::codec::inspect;
use super::Value;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// resolve a path against a value, yielding `Undefined` on any failure
///
/// an empty (or all-whitespace) path yields the value itself.
pub fn lookup(object: &Value, path: &str) -> Value {
    let path = path.trim();
    if path.is_empty() {
        return object.clone();
    }

    let segments = match parse_path(path) {
        Some(segments) => segments,
        None => return Value::Undefined,
    };

    let mut current = object;
    for segment in &segments {
        let next = match segment {
            Segment::Key(key) => current.get(key),
            Segment::Index(idx) => current.index(*idx),
        };
        match next {
            Some(v) => current = v,
            None => return Value::Undefined,
        }
    }

    current.clone()
}

/// resolve a path and render the result in canonical text form
///
/// failures read as the literal text `undefined`.
pub fn lookup_serialized(object: &Value, path: &str) -> String {
    inspect(&lookup(object, path))
}

fn parse_path(path: &str) -> Option<Vec<Segment>> {
    let mut segments = Vec::new();
    let chars: Vec<char> = path.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        match chars[pos] {
            '[' => {
                let close = chars[pos..].iter().position(|&c| c == ']')? + pos;
                let inner: String = chars[pos + 1..close].iter().collect();
                segments.push(parse_bracket(inner.trim())?);
                pos = close + 1;
            }
            '.' => {
                // a dot must sit between segments, never lead or trail
                if segments.is_empty() || pos + 1 >= chars.len() {
                    return None;
                }
                pos += 1;
                let (identifier, next) = take_identifier(&chars, pos)?;
                segments.push(Segment::Key(identifier));
                pos = next;
            }
            _ => {
                // a bare identifier is only valid at the start of the path
                if !segments.is_empty() {
                    return None;
                }
                let (identifier, next) = take_identifier(&chars, pos)?;
                segments.push(Segment::Key(identifier));
                pos = next;
            }
        }
    }

    Some(segments)
}

fn take_identifier(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut end = start;
    while end < chars.len() && chars[end] != '.' && chars[end] != '[' {
        end += 1;
    }
    let identifier: String = chars[start..end].iter().collect();
    if IDENTIFIER.is_match(&identifier) {
        Some((identifier, end))
    } else {
        None
    }
}

fn parse_bracket(inner: &str) -> Option<Segment> {
    if inner.is_empty() {
        return None;
    }

    if let Ok(idx) = inner.parse::<usize>() {
        return Some(Segment::Index(idx));
    }

    // quoted bracket keys: ["name"] or ['name']
    if inner.len() >= 2
        && ((inner.starts_with('"') && inner.ends_with('"'))
            || (inner.starts_with('\'') && inner.ends_with('\'')))
    {
        return Some(Segment::Key(inner[1..inner.len() - 1].to_string()));
    }

    None
}
