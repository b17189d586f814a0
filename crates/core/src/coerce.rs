//! Text token → typed value conversion.
//!
//! Every whitespace-separated token of an input line passes through
//! [`coerce`] exactly once. Rules applied in order:
//! 1. `False` / `True` → `Value::Bool`
//! 2. a full-token bracketed comma-separated run of digit groups, e.g.
//!    `[1,2,3]` → array of `Value::Int`
//! 3. a full-token run of ASCII digits that fits `i64` → `Value::Int`
//! 4. everything else → `Value::String`, unchanged
//!
//! The bracket-list rule anchors both ends of the token: `[1,2]x`, `[1,,2]`,
//! and `[]` all fall through to the string rule rather than yielding a
//! partial list.

use crate::value::Value;

/// Convert a single input token into a typed value.
///
/// Pure and total: no token panics or fails, the string rule catches
/// everything the earlier rules reject.
pub fn coerce(token: &str) -> Value {
    if token == "False" {
        return Value::Bool(false);
    }
    if token == "True" {
        return Value::Bool(true);
    }
    if let Some(items) = parse_int_list(token) {
        return Value::Array(items.into_iter().map(Value::Int).collect());
    }
    if is_digits(token) {
        if let Ok(i) = token.parse::<i64>() {
            return Value::Int(i);
        }
    }
    Value::String(token.to_string())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse `[d,d,...,d]` where each `d` is a non-empty digit run. Any
/// deviation, including integer overflow in a group, rejects the whole
/// token.
fn parse_int_list(s: &str) -> Option<Vec<i64>> {
    let inner = s.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }
    let mut items = Vec::new();
    for group in inner.split(',') {
        if !is_digits(group) {
            return None;
        }
        items.push(group.parse().ok()?);
    }
    Some(items)
}
