use serde_json::{Map, Value};

/// Drops nulls and empty objects so unset flags never shadow file values.
pub fn clean_json(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let cleaned: Map<String, Value> = map
                .into_iter()
                .filter_map(|(key, value)| {
                    let value = clean_json(value);
                    let empty = match &value {
                        Value::Null => true,
                        Value::Object(map) => map.is_empty(),
                        _ => false,
                    };
                    (!empty).then_some((key, value))
                })
                .collect();
            Value::Object(cleaned)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(clean_json).collect()),
        _ => value,
    }
}
