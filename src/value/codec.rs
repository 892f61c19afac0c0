//! the inspect codec - canonical text form of structured values
//!
//! `inspect` renders a value as deterministic text; `uninspect` parses
//! that text back. the parser is a single pass over the characters,
//! tracking quote state and bracket depth, and never fails: malformed
//! trailing fragments are dropped and unknown tokens come back as raw
//! text. callers must not read "it parsed" as "it was well-formed".

use super::Value;

/// serialize a value to its canonical text form
///
/// objects render as `{ "key": value, ... }` in insertion order, arrays
/// as `[a, b]`. a string at the top level renders as its literal text;
/// strings nested inside a container are double-quoted so they survive
/// the round trip.
pub fn inspect(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => inspect_nested(other),
    }
}

fn inspect_nested(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(*n),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(inspect_nested).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("\"{}\": {}", k, inspect_nested(v)))
                .collect();
            format!("{{ {} }}", parts.join(", "))
        }
    }
}

fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // negative zero prints as plain zero
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

/// parse canonical text back into a value
///
/// dispatches on the trimmed text's first/last characters: `{...}` to
/// the object parser, `[...]` to the array parser, everything else to
/// the primitive parser.
pub fn uninspect(text: &str) -> Value {
    let trimmed = text.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') && trimmed.len() >= 2 {
        parse_object(trimmed)
    } else if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() >= 2 {
        parse_array(trimmed)
    } else {
        parse_primitive(trimmed)
    }
}

fn parse_object(text: &str) -> Value {
    let mut obj = Value::Object(Vec::new());
    let mut key = String::new();
    let mut value = String::new();
    let mut parsing_key = true;
    let mut in_string = false;
    let mut delimiter = '"';
    let mut depth: i32 = 0;

    // scan between the outer braces
    for ch in text[1..text.len() - 1].chars() {
        if ch == '"' || ch == '\'' {
            if in_string && delimiter == ch {
                in_string = false;
            } else if !in_string {
                in_string = true;
                delimiter = ch;
            }
        }

        if in_string {
            if parsing_key {
                key.push(ch);
            } else {
                value.push(ch);
            }
        } else {
            if ch == '{' || ch == '[' {
                depth += 1;
            } else if ch == '}' || ch == ']' {
                depth -= 1;
            }

            if depth == 0 && ch == ':' && parsing_key {
                parsing_key = false;
            } else if depth == 0 && ch == ',' && !parsing_key {
                obj.insert(parse_key(&key), uninspect(value.trim()));
                key.clear();
                value.clear();
                parsing_key = true;
            } else if parsing_key {
                key.push(ch);
            } else {
                value.push(ch);
            }
        }
    }

    // a pending pair with an empty key or empty value is dropped
    if !key.is_empty() && !value.is_empty() {
        obj.insert(parse_key(&key), uninspect(value.trim()));
    }

    obj
}

fn parse_array(text: &str) -> Value {
    let mut items = Vec::new();
    let mut value = String::new();
    let mut in_string = false;
    let mut delimiter = '"';
    let mut depth: i32 = 0;

    for ch in text[1..text.len() - 1].chars() {
        if ch == '"' || ch == '\'' {
            if in_string && delimiter == ch {
                in_string = false;
            } else if !in_string {
                in_string = true;
                delimiter = ch;
            }
        }

        if in_string {
            value.push(ch);
        } else {
            if ch == '{' || ch == '[' {
                depth += 1;
            } else if ch == '}' || ch == ']' {
                depth -= 1;
            }

            if depth == 0 && ch == ',' {
                items.push(uninspect(value.trim()));
                value.clear();
            } else {
                value.push(ch);
            }
        }
    }

    if !value.trim().is_empty() {
        items.push(uninspect(value.trim()));
    }

    Value::Array(items)
}

fn parse_primitive(text: &str) -> Value {
    match text {
        "undefined" => return Value::Undefined,
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if !text.is_empty() {
        if let Ok(n) = text.parse::<f64>() {
            if !n.is_nan() {
                return Value::Number(n);
            }
        }
    }

    if text.len() >= 2
        && ((text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\'')))
    {
        return Value::String(text[1..text.len() - 1].to_string());
    }

    // bare tokens fall back to the raw text
    Value::String(text.to_string())
}

/// trim a raw key fragment and strip one surrounding quote of either kind
fn parse_key(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed
        .strip_prefix('"')
        .or_else(|| trimmed.strip_prefix('\''))
        .unwrap_or(trimmed);
    stripped
        .strip_suffix('"')
        .or_else(|| stripped.strip_suffix('\''))
        .unwrap_or(stripped)
        .to_string()
}
