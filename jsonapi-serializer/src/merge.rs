//! Structural merge of JSON objects.

use serde_json::{Map, Value};

/// Merges `overlay` into `base`.
///
/// For each key of `overlay`, nested objects present on both sides are merged
/// recursively; anything else (scalars, arrays, or an object meeting a
/// non-object) is replaced by the overlay's value. Keys found only in `base`
/// are kept. Arrays are never merged element-wise.
pub fn deep_merge(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, incoming) in overlay {
        if let Some(Value::Object(existing)) = base.get_mut(&key) {
            if let Value::Object(incoming) = incoming {
                let merged = deep_merge(std::mem::take(existing), incoming);
                *existing = merged;
                continue;
            }
        }
        // Replacing an existing key keeps its position.
        base.insert(key, incoming);
    }
    base
}
