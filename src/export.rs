//! Depth-limited export of subtrees for debug dumping.

use serde_json::{json, Value};

/// How deep [`export`] copies before truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Copy the whole subtree.
    Unlimited,
    /// Copy this many container levels, then replace deeper containers with
    /// the `["..."]` truncation marker.
    Limited(usize),
}

/// Depth used by dumps when the caller has no opinion.
pub const DEFAULT_DUMP_DEPTH: Depth = Depth::Limited(2);

/// Pure, depth-limited copy of `value`.
///
/// Scalars pass through untouched at every depth. A container hit at depth
/// zero collapses to `["..."]`, discarding its real contents; above that,
/// containers are rebuilt entry by entry with the remaining depth, keeping
/// key order.
pub fn export(value: &Value, max_depth: Depth) -> Value {
    let remaining = match (value, max_depth) {
        (Value::Object(_) | Value::Array(_), Depth::Limited(remaining)) => remaining,
        _ => return value.clone(),
    };
    if remaining == 0 {
        return json!(["..."]);
    }

    let next = Depth::Limited(remaining - 1);
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), export(child, next)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.iter().map(|child| export(child, next)).collect())
        }
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_export_is_a_deep_copy() {
        let value = json!({"a": {"b": [1, {"c": null}]}, "d": "x"});
        assert_eq!(export(&value, Depth::Unlimited), value);
    }

    #[test]
    fn test_zero_depth_collapses_any_container_to_the_marker() {
        assert_eq!(export(&json!({"a": {"b": 1}}), Depth::Limited(0)), json!(["..."]));
        assert_eq!(export(&json!([[1, 2], 3]), Depth::Limited(0)), json!(["..."]));
    }

    #[test]
    fn test_scalars_pass_through_at_every_depth() {
        assert_eq!(export(&json!("text"), Depth::Limited(0)), json!("text"));
        assert_eq!(export(&json!(5), Depth::Unlimited), json!(5));
        assert_eq!(export(&json!(null), Depth::Limited(3)), json!(null));
    }

    #[test]
    fn test_truncation_happens_exactly_at_the_requested_depth() {
        let value = json!({"level1": {"level2": {"level3": "deep"}, "flat": 1}});

        assert_eq!(
            export(&value, Depth::Limited(2)),
            json!({"level1": {"level2": ["..."], "flat": 1}})
        );
        assert_eq!(export(&value, Depth::Limited(3)), value);
    }

    #[test]
    fn test_export_keeps_mapping_key_order() {
        let value = json!({"z": 1, "a": 2, "m": {"x": 1}});
        let exported = export(&value, Depth::Limited(1));

        let keys: Vec<&String> = exported.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
