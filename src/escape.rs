//! reversible symbol escaping for condition text
//!
//! lets a condition travel through an outer template context that
//! reserves characters like `[`, `:` or `&&`. `escape` applies a fixed
//! sequence of literal replacements; `unescape` applies the inverse
//! mapping case-insensitively. the contract is one-shot: text that
//! already contains an emitted token (a literal `@right`, say) is not
//! guaranteed to survive the round trip, and escaping twice is not
//! idempotent.

use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

/// replace reserved symbols with their `@` token forms
pub fn escape(text: &str) -> String {
    text.replace('@', "@at")
        .replace(']', "@right")
        .replace('[', "@left")
        .replace(';', "@semi")
        .replace(':', "@colon")
        .replace('=', "@equal")
        .replace("||", "@or")
        .replace("&&", "@and")
        .replace('>', "@higher")
        .replace('<', "@lower")
        .replace('$', "@dollar")
}

static UNESCAPE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("@at", "@"),
        ("@left", "["),
        ("@right", "]"),
        ("@semi", ";"),
        ("@colon", ":"),
        ("@equal", "="),
        ("@or", "||"),
        ("@and", "&&"),
        ("@higher", ">"),
        ("@lower", "<"),
        ("@left_parent", ")"),
        ("@right_parent", "("),
        ("@dollar", "$"),
    ]
    .into_iter()
    .map(|(token, symbol)| {
        let pattern = RegexBuilder::new(&regex::escape(token))
            .case_insensitive(true)
            .build()
            .expect("valid token pattern");
        (pattern, symbol)
    })
    .collect()
});

/// replace `@` tokens with the symbols they stand for
///
/// token matching ignores case. the `@left_parent`/`@right_parent`
/// rules are carried over from the inherited table but are unreachable:
/// `@left`/`@right` run earlier and always consume their prefix first.
pub fn unescape(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, symbol) in UNESCAPE_RULES.iter() {
        result = pattern.replace_all(&result, NoExpand(symbol)).into_owned();
    }
    result
}
