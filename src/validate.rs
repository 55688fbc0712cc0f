//! Structural validation of parsed candidates.

use serde_json::Value;

/// Checks that `value` is object-like and carries every required top-level
/// key.
///
/// Presence-only: a required key whose value is `null` or of an unexpected
/// type still passes. With required fields an object is implied, so arrays
/// fail; with none, any object or array is acceptable. Primitives and `null`
/// never validate.
pub fn is_structurally_valid(value: &Value, required_fields: &[String]) -> bool {
    match value {
        Value::Object(map) => required_fields.iter().all(|field| map.contains_key(field)),
        Value::Array(_) => required_fields.is_empty(),
        _ => false,
    }
}
