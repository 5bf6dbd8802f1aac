//! Tag value extraction from parsed documents.
//!
//! Documents from every format are deserialized to `serde_json::Value` and
//! walked through this single path.

use std::collections::BTreeSet;

use serde_json::Value;

/// Walk `node` and add every value stored under `key` to `acc`.
///
/// - In a mapping, an entry whose key equals `key` contributes its value; a
///   sequence value contributes each element separately (one level only).
///   Any other entry is recursed into.
/// - A sequence is recursed into element by element.
/// - A scalar reached without passing through `key` contributes nothing.
///
/// Values found under `key` are not searched further, so a nested `key`
/// inside such a value is never visited.
pub fn extract(node: &Value, key: &str, acc: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) => {
            for (k, val) in map {
                if k == key {
                    match val {
                        Value::Array(items) => acc.extend(items.iter().map(tag_string)),
                        other => {
                            acc.insert(tag_string(other));
                        }
                    }
                } else {
                    extract(val, key, acc);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                extract(item, key, acc);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Run [`extract`] with a fresh accumulator.
#[must_use]
pub fn extract_values(node: &Value, key: &str) -> BTreeSet<String> {
    let mut acc = BTreeSet::new();
    extract(node, key, &mut acc);
    acc
}

/// Canonical string form of a collected value.
///
/// Strings are taken verbatim, numbers use their shortest decimal form,
/// booleans are `true`/`false` and null is `null`. Mappings and sequences
/// (only reachable as nested structure under the key) become compact JSON.
///
/// Numbers are rendered from the parsed value, not the source text: integers
/// outside the `i64`/`u64` range arrive as floats and keep only float
/// precision (`123456789012345678901234567890` becomes
/// `1.2345678901234568e29`). Quote such tags in YAML to keep them verbatim.
#[must_use]
pub fn tag_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_owned(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
