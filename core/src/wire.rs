//! Storage format of picker values.
//!
//! Single values travel as a bare scalar or `null`, multiple values as a
//! list and ranges as an object with configurable start/end keys. Decoding
//! always produces the configured mode's shape, whatever arrives.

use alloc::vec::Vec;

use serde_json::{Map, Value};

use crate::{PickerConfig, PickerValue, RangeKeys, RangeValue, Scalar, SelectionMode};

/// Encodes a value into its storage form.
#[must_use]
pub fn encode(value: &PickerValue, keys: &RangeKeys) -> Value {
    match value {
        PickerValue::Single(scalar) => scalar.as_ref().map_or(Value::Null, scalar_to_json),
        PickerValue::Multiple(values) => Value::Array(values.iter().map(scalar_to_json).collect()),
        PickerValue::Range(range) => {
            let mut object = Map::new();
            object.insert(keys.start.clone(), range.start().map_or(Value::Null, scalar_to_json));
            object.insert(keys.end.clone(), range.end().map_or(Value::Null, scalar_to_json));
            Value::Object(object)
        }
    }
}

/// Decodes a stored value into the shape of `config.mode`.
///
/// Members are canonicalized; members with no representation in the
/// picker's domain are dropped.
#[must_use]
pub fn decode(json: &Value, config: &PickerConfig) -> PickerValue {
    let member = |json: &Value| json_to_scalar(json).and_then(|scalar| config.canonicalize(scalar));
    match config.mode {
        SelectionMode::Single => PickerValue::Single(match json {
            Value::Array(_) | Value::Object(_) => None,
            other => member(other),
        }),
        SelectionMode::Multiple => PickerValue::Multiple(match json {
            Value::Array(items) => items.iter().filter_map(member).collect(),
            Value::Null | Value::Object(_) => Vec::new(),
            scalar => member(scalar).into_iter().collect(),
        }),
        SelectionMode::Range => PickerValue::Range(match json {
            Value::Object(object) => RangeValue::new(
                object.get(&config.range_keys.start).and_then(member),
                object.get(&config.range_keys.end).and_then(member),
            ),
            _ => RangeValue::default(),
        }),
    }
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Int(value) => Value::from(*value),
        Scalar::Text(value) => Value::from(value.as_str()),
    }
}

fn json_to_scalar(json: &Value) -> Option<Scalar> {
    match json {
        Value::Number(number) => number.as_i64().map(Scalar::Int),
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(Scalar::Text(text.clone())),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PickerKind;
    use alloc::vec;
    use serde_json::json;

    fn config(mode: SelectionMode) -> PickerConfig {
        PickerConfig::builder(PickerKind::Month).mode(mode).build()
    }

    #[test]
    fn range_uses_configured_keys() {
        let keys = RangeKeys {
            start: "from".into(),
            end: "to".into(),
        };
        let value = PickerValue::Range(RangeValue::new(
            Some("2024-01".into()),
            Some("2024-03".into()),
        ));
        assert_eq!(encode(&value, &keys), json!({"from": "2024-01", "to": "2024-03"}));
    }

    #[test]
    fn bare_scalar_becomes_singleton_list() {
        let value = decode(&json!("2024-02"), &config(SelectionMode::Multiple));
        assert_eq!(value, PickerValue::Multiple(vec!["2024-02".into()]));
    }

    #[test]
    fn wrong_shapes_decode_to_empty() {
        assert_eq!(
            decode(&json!(["2024-02"]), &config(SelectionMode::Single)),
            PickerValue::Single(None)
        );
        assert_eq!(
            decode(&json!("2024-02"), &config(SelectionMode::Range)),
            PickerValue::empty(SelectionMode::Range)
        );
        assert_eq!(
            decode(&json!(true), &config(SelectionMode::Single)),
            PickerValue::Single(None)
        );
    }

    #[test]
    fn malformed_members_are_dropped() {
        let value = decode(&json!(["2024-02", "soon", 7]), &config(SelectionMode::Multiple));
        assert_eq!(value, PickerValue::Multiple(vec!["2024-02".into()]));
    }

    #[test]
    fn integer_domains_accept_numeric_text() {
        let config = PickerConfig::builder(PickerKind::Year).build();
        assert_eq!(decode(&json!("2024"), &config), PickerValue::Single(Some(2024.into())));
    }
}
