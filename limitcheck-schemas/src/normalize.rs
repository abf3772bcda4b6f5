//! Record Normalization
//!
//! ## Overview
//!
//! One pass over a raw record, applying a [`FieldMap`], produces a
//! [`NormalizedParameter`]: the first alias whose value is a usable scalar
//! wins each slot. Everything downstream (the monitor, the evaluator) then
//! works with explicit fields and never probes alternative spellings again.
//!
//! ## Scalar Handling
//!
//! Limits stay raw text after normalization - the evaluator applies its own
//! lenient parsing, so a `"12.5"` string and a `12.5` number normalize to
//! the same thing. A field counts as *present* when its value is a non-null,
//! non-empty scalar; numeric `0` is a real limit and is kept. Null, empty
//! strings, and structured values (arrays, objects) fall through to the
//! next alias.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{FieldMap, SchemaError};
use limitcheck_core::ParameterBinding;

/// Payload members that may carry the parameter list, in lookup order.
pub const LIST_KEYS: &[&str] = &["dcParameterList", "parameters"];

/// One parameter record reduced to the fields the engine needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedParameter {
    /// Data-collection parameter name.
    pub name: Option<String>,
    /// Declared minimum, raw text.
    pub min: Option<String>,
    /// Declared maximum, raw text.
    pub max: Option<String>,
}

impl NormalizedParameter {
    /// Whether at least one limit is declared.
    pub fn has_limits(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Fill absent fields from a fallback record.
    ///
    /// Row-level data wins; a stored parameter-list entry only supplies
    /// what the row leaves open.
    pub fn merge(primary: &Self, fallback: &Self) -> Self {
        Self {
            name: primary.name.clone().or_else(|| fallback.name.clone()),
            min: primary.min.clone().or_else(|| fallback.min.clone()),
            max: primary.max.clone().or_else(|| fallback.max.clone()),
        }
    }

    /// View as a borrowed binding for the field monitor.
    pub fn binding(&self) -> ParameterBinding<'_> {
        ParameterBinding {
            name: self.name.as_deref(),
            min: self.min.as_deref(),
            max: self.max.as_deref(),
        }
    }
}

/// Render a usable scalar to raw text; `None` for anything else.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// First alias holding a usable scalar wins.
fn pick(record: &Map<String, Value>, aliases: &[String]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| record.get(alias).and_then(scalar_text))
        .next()
}

/// Normalize one parameter record with the given field map.
pub fn normalize(record: &Value, map: &FieldMap) -> Result<NormalizedParameter, SchemaError> {
    let object = record.as_object().ok_or(SchemaError::NotARecord)?;
    Ok(NormalizedParameter {
        name: pick(object, &map.parameter_aliases),
        min: pick(object, &map.min_aliases),
        max: pick(object, &map.max_aliases),
    })
}

/// Normalize a whole host payload.
///
/// Accepts the shapes the host context bus publishes: an object carrying
/// the list under one of [`LIST_KEYS`], or the bare list itself.
pub fn normalize_payload(
    payload: &Value,
    map: &FieldMap,
) -> Result<Vec<NormalizedParameter>, SchemaError> {
    let list = match payload {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(object) => LIST_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .ok_or(SchemaError::NoParameterList)?,
        _ => return Err(SchemaError::NoParameterList),
    };

    list.iter().map(|record| normalize(record, map)).collect()
}

/// Look up a normalized parameter by name.
pub fn find_parameter<'a>(
    parameters: &'a [NormalizedParameter],
    name: &str,
) -> Option<&'a NormalizedParameter> {
    parameters
        .iter()
        .find(|parameter| parameter.name.as_deref() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_alias_wins() {
        let record = json!({
            "parameterName": "WEIGHT",
            "dcParameter": "SHADOWED",
            "minValue": "1",
            "lowerLimit": "999",
        });
        let parameter = normalize(&record, &FieldMap::pod_row_v1()).unwrap();
        assert_eq!(parameter.name.as_deref(), Some("WEIGHT"));
        assert_eq!(parameter.min.as_deref(), Some("1"));
    }

    #[test]
    fn null_and_empty_fall_through() {
        let record = json!({
            "minValue": null,
            "lowerLimit": "",
            "minLimit": "2.5",
        });
        let parameter = normalize(&record, &FieldMap::pod_row_v1()).unwrap();
        assert_eq!(parameter.min.as_deref(), Some("2.5"));
    }

    #[test]
    fn numbers_render_to_text() {
        let record = json!({"parameterName": "TEMP", "minValue": 1.5, "maxValue": 10});
        let parameter = normalize(&record, &FieldMap::dc_parameter_v1()).unwrap();
        assert_eq!(parameter.min.as_deref(), Some("1.5"));
        assert_eq!(parameter.max.as_deref(), Some("10"));
    }

    #[test]
    fn zero_limit_is_kept() {
        // 0 is a real bound, not an absent field
        let record = json!({"parameterName": "OFFSET", "minValue": 0});
        let parameter = normalize(&record, &FieldMap::dc_parameter_v1()).unwrap();
        assert_eq!(parameter.min.as_deref(), Some("0"));
    }

    #[test]
    fn structured_values_are_ignored() {
        let record = json!({
            "minValue": {"nested": 1},
            "lowerLimit": [1, 2],
            "maxValue": "10",
        });
        let parameter = normalize(&record, &FieldMap::pod_row_v1()).unwrap();
        assert_eq!(parameter.min, None);
        assert_eq!(parameter.max.as_deref(), Some("10"));
    }

    #[test]
    fn non_object_record_errors() {
        assert_eq!(
            normalize(&json!("text"), &FieldMap::pod_row_v1()),
            Err(SchemaError::NotARecord)
        );
    }

    #[test]
    fn payload_shapes() {
        let map = FieldMap::dc_parameter_v1();
        let entry = json!({"parameterName": "WEIGHT", "minValue": "1"});

        let wrapped = json!({"dcParameterList": [entry]});
        assert_eq!(normalize_payload(&wrapped, &map).unwrap().len(), 1);

        let alternate = json!({"parameters": [entry]});
        assert_eq!(normalize_payload(&alternate, &map).unwrap().len(), 1);

        let bare = json!([entry]);
        assert_eq!(normalize_payload(&bare, &map).unwrap().len(), 1);

        assert_eq!(
            normalize_payload(&json!({"other": 1}), &map),
            Err(SchemaError::NoParameterList)
        );
    }

    #[test]
    fn merge_prefers_primary() {
        let row = NormalizedParameter {
            name: Some("WEIGHT".into()),
            min: Some("2".into()),
            max: None,
        };
        let stored = NormalizedParameter {
            name: Some("WEIGHT".into()),
            min: Some("1".into()),
            max: Some("10".into()),
        };
        let merged = NormalizedParameter::merge(&row, &stored);
        assert_eq!(merged.min.as_deref(), Some("2"));
        assert_eq!(merged.max.as_deref(), Some("10"));
    }

    #[test]
    fn find_by_name() {
        let parameters = vec![
            NormalizedParameter {
                name: Some("WEIGHT".into()),
                ..Default::default()
            },
            NormalizedParameter {
                name: Some("TEMP".into()),
                ..Default::default()
            },
        ];
        assert!(find_parameter(&parameters, "TEMP").is_some());
        assert!(find_parameter(&parameters, "PRESSURE").is_none());
    }

    #[test]
    fn binding_borrows_fields() {
        let parameter = NormalizedParameter {
            name: Some("WEIGHT".into()),
            min: Some("1".into()),
            max: Some("10".into()),
        };
        let binding = parameter.binding();
        assert_eq!(binding.name, Some("WEIGHT"));
        assert_eq!(binding.min, Some("1"));
        assert_eq!(binding.max, Some("10"));
    }
}
