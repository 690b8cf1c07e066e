//! Text normalization shared by the matcher and the gap analyzer.
//!
//! Two variants exist because the two consumers compare against catalog
//! content differently:
//! - `normalize_phrase` keeps `[a-z0-9-]` and is used for containment checks
//!   over whole resume bodies.
//! - `normalize_token` keeps `[a-z0-9+]` and is used for exact skill equality
//!   ("C++" stays distinguishable from "C").
//!
//! Both are total: any input yields a lowercase string made of kept characters
//! separated by single spaces, with no leading or trailing whitespace.

use std::borrow::Cow;

use serde_json::Value;

/// Loose normalization used when scoring free text against the catalog.
pub fn normalize_phrase(text: &str) -> String {
    fold(text, |c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Strict normalization used when comparing individual skill names.
pub fn normalize_token(text: &str) -> String {
    fold(text, |c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+')
}

/// Renders any JSON value as text so that non-string tokens can be normalized.
/// `null` becomes the empty string.
pub fn coerce_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Lowercases `text`, keeps characters accepted by `keep`, and turns every run
/// of rejected characters into a single separating space.
fn fold(text: &str, keep: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if keep(c) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}
