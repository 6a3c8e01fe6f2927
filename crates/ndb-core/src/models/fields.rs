// ABOUTME: Field extraction helpers for building value objects from JSON maps
// ABOUTME: Coerces scalars to strings and integers, resolving absent fields to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The service is loose about scalar types: the same field may arrive as
//! `"1"` in one response and `1` in another. These helpers accept both.

use serde_json::{Map, Value};

use crate::errors::{NdbError, NdbResult};

/// Untyped string-keyed mapping produced by JSON parsing
pub type FieldMap = Map<String, Value>;

/// Borrow `value` as an object, or fail with a malformed-response error
///
/// # Errors
///
/// Returns `NdbError::MalformedResponse` if `value` is not a JSON object
pub fn as_object<'a>(value: &'a Value, context: &'static str) -> NdbResult<&'a FieldMap> {
    value
        .as_object()
        .ok_or_else(|| NdbError::malformed(context, format!("expected object, found {}", kind(value))))
}

/// Render a scalar as text; `None` for arrays and objects
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read a non-negative integer given either as a number or a numeric string
#[must_use]
pub fn scalar_to_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a string field that must be present
///
/// # Errors
///
/// Returns `MissingField` if absent, `InvalidField` if not a scalar
pub fn required_string(map: &FieldMap, entity: &'static str, field: &'static str) -> NdbResult<String> {
    let value = map
        .get(field)
        .ok_or(NdbError::MissingField { entity, field })?;
    scalar_to_string(value).ok_or(NdbError::InvalidField {
        entity,
        field,
        expected: "string",
    })
}

/// Read a string field, defaulting to empty when absent or null
///
/// # Errors
///
/// Returns `InvalidField` if the value is an array or object
pub fn optional_string(map: &FieldMap, entity: &'static str, field: &'static str) -> NdbResult<String> {
    map.get(field).map_or_else(
        || Ok(String::new()),
        |value| {
            scalar_to_string(value).ok_or(NdbError::InvalidField {
                entity,
                field,
                expected: "string",
            })
        },
    )
}

/// Read an integer field that must be present
///
/// # Errors
///
/// Returns `MissingField` if absent, `InvalidField` if not a non-negative integer
pub fn required_u64(map: &FieldMap, entity: &'static str, field: &'static str) -> NdbResult<u64> {
    let value = map
        .get(field)
        .ok_or(NdbError::MissingField { entity, field })?;
    scalar_to_u64(value).ok_or(NdbError::InvalidField {
        entity,
        field,
        expected: "non-negative integer",
    })
}

/// Read an array field that must be present
///
/// # Errors
///
/// Returns `MissingField` if absent, `InvalidField` if not an array
pub fn required_array<'a>(
    map: &'a FieldMap,
    entity: &'static str,
    field: &'static str,
) -> NdbResult<&'a [Value]> {
    let value = map
        .get(field)
        .ok_or(NdbError::MissingField { entity, field })?;
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or(NdbError::InvalidField {
            entity,
            field,
            expected: "array",
        })
}

/// Read an array field, treating absent or null as empty
///
/// # Errors
///
/// Returns `InvalidField` if present and neither null nor an array
pub fn optional_array<'a>(
    map: &'a FieldMap,
    entity: &'static str,
    field: &'static str,
) -> NdbResult<&'a [Value]> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(NdbError::InvalidField {
            entity,
            field,
            expected: "array or null",
        }),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> FieldMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_scalars_render_as_json_text() {
        assert_eq!(scalar_to_string(&json!("µg")).as_deref(), Some("µg"));
        assert_eq!(scalar_to_string(&json!(0.89)).as_deref(), Some("0.89"));
        assert_eq!(scalar_to_string(&json!(2)).as_deref(), Some("2"));
        assert_eq!(scalar_to_string(&Value::Null).as_deref(), Some(""));
        assert_eq!(scalar_to_string(&json!([1])), None);
    }

    #[test]
    fn test_integer_accepts_numeric_strings() {
        assert_eq!(scalar_to_u64(&json!(12)), Some(12));
        assert_eq!(scalar_to_u64(&json!("12")), Some(12));
        assert_eq!(scalar_to_u64(&json!(-1)), None);
        assert_eq!(scalar_to_u64(&json!("twelve")), None);
    }

    #[test]
    fn test_optional_array_null_and_absent() {
        let fields = map(json!({"measures": null}));
        assert!(optional_array(&fields, "Nutrient", "measures").unwrap().is_empty());
        assert!(optional_array(&fields, "Nutrient", "other").unwrap().is_empty());

        let bad = map(json!({"measures": "none"}));
        assert!(matches!(
            optional_array(&bad, "Nutrient", "measures"),
            Err(NdbError::InvalidField { field: "measures", .. })
        ));
    }

    #[test]
    fn test_as_object_rejects_arrays() {
        let err = as_object(&json!([]), "report.food").unwrap_err();
        assert!(err.to_string().contains("expected object, found array"));
    }
}
