//! Deterministic parameter serialization used as signature input
//!
//! The exchange recomputes the signature from the JSON `params` it receives,
//! so this output must match its rule byte for byte:
//!
//! - keys are visited in lexicographic order at every nesting level
//! - `null` values are dropped together with their key
//! - a scalar emits `key` followed by its string form
//! - an object emits `key` followed by its own canonical form
//! - an array emits `key`, then for each element its index followed by the
//!   element's canonical form
//!
//! No separators are inserted.

use serde_json::{Map, Value};

use crate::error::{AuthError, AuthResult};

/// Deepest nesting accepted before the input is treated as malformed
const MAX_DEPTH: usize = 16;

/// Canonicalize a parameter map
pub fn canonicalize(params: &Map<String, Value>) -> AuthResult<String> {
    let mut out = String::new();
    write_map(params, 0, &mut out)?;
    Ok(out)
}

/// Canonicalize an arbitrary `params` value
///
/// `null` is treated as an empty map. Any other non-object value is rejected.
pub fn canonicalize_value(params: &Value) -> AuthResult<String> {
    match params {
        Value::Object(map) => canonicalize(map),
        Value::Null => Ok(String::new()),
        other => Err(AuthError::Signing(format!(
            "params must be a JSON object, got {}",
            kind(other)
        ))),
    }
}

fn write_map(map: &Map<String, Value>, depth: usize, out: &mut String) -> AuthResult<()> {
    if depth > MAX_DEPTH {
        return Err(AuthError::Signing(format!(
            "params nested deeper than {MAX_DEPTH} levels"
        )));
    }

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    for key in keys {
        let value = &map[key.as_str()];
        if value.is_null() {
            continue;
        }
        out.push_str(key);
        write_value(value, depth, out)?;
    }
    Ok(())
}

fn write_value(value: &Value, depth: usize, out: &mut String) -> AuthResult<()> {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Object(map) => write_map(map, depth + 1, out)?,
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if item.is_null() {
                    continue;
                }
                out.push_str(&index.to_string());
                write_value(item, depth + 1, out)?;
            }
        }
    }
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canon(v: Value) -> String {
        canonicalize_value(&v).unwrap()
    }

    #[test]
    fn test_flat_params_sorted() {
        assert_eq!(
            canon(json!({"limit": 100, "instrument_name": "CRO_USD", "end_time": 2000})),
            "end_time2000instrument_nameCRO_USDlimit100"
        );
    }

    #[test]
    fn test_insertion_order_is_irrelevant() {
        let mut a = Map::new();
        a.insert("side".into(), json!("BUY"));
        a.insert("price".into(), json!("0.14"));
        a.insert("quantity".into(), json!("100"));

        let mut b = Map::new();
        b.insert("quantity".into(), json!("100"));
        b.insert("side".into(), json!("BUY"));
        b.insert("price".into(), json!("0.14"));

        assert_eq!(canonicalize(&a).unwrap(), canonicalize(&b).unwrap());
    }

    #[test]
    fn test_null_values_are_excluded() {
        assert_eq!(
            canon(json!({"instrument_name": null, "start_time": 1})),
            "start_time1"
        );
        assert_eq!(canon(json!({"a": null})), "");
    }

    #[test]
    fn test_nested_map() {
        assert_eq!(
            canon(json!({"z": 1, "filter": {"b": "2", "a": "1"}})),
            "filtera1b2z1"
        );
    }

    #[test]
    fn test_array_of_maps_prefixed_by_index() {
        assert_eq!(
            canon(json!({
                "order_list": [
                    {"side": "BUY", "price": "1"},
                    {"side": "SELL", "price": "2"}
                ]
            })),
            "order_list0price1sideBUY1price2sideSELL"
        );
    }

    #[test]
    fn test_array_of_scalars_prefixed_by_index() {
        assert_eq!(
            canon(json!({"ids": ["a", "b", null, "d"]})),
            "ids0a1b3d"
        );
    }

    #[test]
    fn test_scalar_forms() {
        assert_eq!(
            canon(json!({"flag": true, "off": false, "f": 1.5, "n": -3})),
            "f1.5flagtruen-3offfalse"
        );
    }

    #[test]
    fn test_empty_and_null_params() {
        assert_eq!(canon(json!({})), "");
        assert_eq!(canon(Value::Null), "");
    }

    #[test]
    fn test_rejects_non_object_params() {
        let err = canonicalize_value(&json!(["a"])).unwrap_err();
        assert!(matches!(err, AuthError::Signing(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_rejects_runaway_nesting() {
        let mut v = json!({"leaf": 1});
        for _ in 0..(MAX_DEPTH + 2) {
            v = json!({ "n": v });
        }
        assert!(canonicalize_value(&v).is_err());
    }
}
