// ABOUTME: Measure value object for nutrient quantities per serving unit
// ABOUTME: Built from a food report's measures array with empty-string defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::fields::{self, FieldMap};
use crate::errors::NdbResult;

const ENTITY: &str = "Measure";

/// A nutrient quantity expressed in a particular serving unit (e.g. "1 cup")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Measure {
    label: String,
    eqv: String,
    qty: String,
    value: String,
}

impl Measure {
    /// Create a measure from its four fields
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        eqv: impl Into<String>,
        qty: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            eqv: eqv.into(),
            qty: qty.into(),
            value: value.into(),
        }
    }

    /// Build from a JSON mapping; every field is optional
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if a field holds an array or object
    pub fn from_map(map: &FieldMap) -> NdbResult<Self> {
        Ok(Self {
            label: fields::optional_string(map, ENTITY, "label")?,
            eqv: fields::optional_string(map, ENTITY, "eqv")?,
            qty: fields::optional_string(map, ENTITY, "qty")?,
            value: fields::optional_string(map, ENTITY, "value")?,
        })
    }

    /// Build from a JSON value that must be an object
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if `value` is not an object
    pub fn from_value(value: &Value) -> NdbResult<Self> {
        Self::from_map(fields::as_object(value, "measure")?)
    }

    /// Serving label, e.g. "cup"
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Equivalent quantity in grams
    #[must_use]
    pub fn eqv(&self) -> &str {
        &self.eqv
    }

    /// Number of servings
    #[must_use]
    pub fn qty(&self) -> &str {
        &self.qty
    }

    /// Nutrient value for this serving
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_back_all_fields() {
        let measure = Measure::from_value(&json!({
            "label": "cup", "eqv": "240", "qty": "1", "value": "100"
        }))
        .unwrap();

        assert_eq!(measure.label(), "cup");
        assert_eq!(measure.eqv(), "240");
        assert_eq!(measure.qty(), "1");
        assert_eq!(measure.value(), "100");
        assert_eq!(measure.to_string(), "cup");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let measure = Measure::from_value(&json!({"label": "oz"})).unwrap();
        assert_eq!(measure, Measure::new("oz", "", "", ""));
    }

    #[test]
    fn test_numeric_fields_keep_json_text() {
        let measure = Measure::from_value(&json!({
            "label": "cup, sliced", "eqv": 150, "qty": 1.0, "value": 1.34
        }))
        .unwrap();
        assert_eq!(measure.eqv(), "150");
        assert_eq!(measure.qty(), "1.0");
        assert_eq!(measure.value(), "1.34");
    }
}
