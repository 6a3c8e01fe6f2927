// ABOUTME: FoodReport value object for a food and its reported nutrients
// ABOUTME: Requires name, ndbno, and nutrients; nutrients map element-wise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::fields::{self, FieldMap};
use super::Nutrient;
use crate::errors::NdbResult;

const ENTITY: &str = "FoodReport";

/// Nutrient report for a single food
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodReport {
    name: String,
    ndbno: String,
    nutrients: Vec<Nutrient>,
}

impl FoodReport {
    /// Create a report from its fields
    #[must_use]
    pub fn new(name: impl Into<String>, ndbno: impl Into<String>, nutrients: Vec<Nutrient>) -> Self {
        Self {
            name: name.into(),
            ndbno: ndbno.into(),
            nutrients,
        }
    }

    /// Build from a report response's `report.food` object
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if `name`, `ndbno`, or `nutrients` is absent,
    /// or any error raised while mapping an individual nutrient
    pub fn from_map(map: &FieldMap) -> NdbResult<Self> {
        let name = fields::required_string(map, ENTITY, "name")?;
        let ndbno = fields::required_string(map, ENTITY, "ndbno")?;
        let nutrients = fields::required_array(map, ENTITY, "nutrients")?
            .iter()
            .map(Nutrient::from_value)
            .collect::<NdbResult<Vec<_>>>()?;

        Ok(Self {
            name,
            ndbno,
            nutrients,
        })
    }

    /// Build from a JSON value that must be an object
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if `value` is not an object, otherwise as
    /// [`FoodReport::from_map`]
    pub fn from_value(value: &Value) -> NdbResult<Self> {
        Self::from_map(fields::as_object(value, "report.food")?)
    }

    /// Food name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database food identifier
    #[must_use]
    pub fn ndbno(&self) -> &str {
        &self.ndbno
    }

    /// Nutrients in source order
    #[must_use]
    pub fn nutrients(&self) -> &[Nutrient] {
        &self.nutrients
    }

    /// Find a nutrient by its nutrient number
    #[must_use]
    pub fn nutrient(&self, nutrient_id: &str) -> Option<&Nutrient> {
        self.nutrients.iter().find(|n| n.nutrient_id() == nutrient_id)
    }
}

impl fmt::Display for FoodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Report", self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::NdbError;
    use serde_json::json;

    #[test]
    fn test_from_value_maps_nutrients() {
        let report = FoodReport::from_value(&json!({
            "name": "Bananas, raw",
            "ndbno": "09040",
            "nutrients": [
                {"nutrient_id": "255", "name": "Water", "unit": "g", "value": "74.91"},
                {"nutrient_id": "208", "name": "Energy", "unit": "kcal", "value": "89", "measures": null}
            ]
        }))
        .unwrap();

        assert_eq!(report.name(), "Bananas, raw");
        assert_eq!(report.ndbno(), "09040");
        assert_eq!(report.nutrients().len(), 2);
        assert_eq!(report.nutrients()[0].name(), "Water");
        assert_eq!(report.nutrient("208").map(Nutrient::value), Some("89"));
        assert_eq!(report.to_string(), "Bananas, raw Report");
    }

    #[test]
    fn test_missing_nutrients_fails() {
        let err = FoodReport::from_value(&json!({"name": "Bananas, raw", "ndbno": "09040"}))
            .unwrap_err();
        assert!(matches!(
            err,
            NdbError::MissingField {
                entity: "FoodReport",
                field: "nutrients"
            }
        ));
    }

    #[test]
    fn test_nutrients_must_be_an_array() {
        let err = FoodReport::from_value(&json!({
            "name": "Bananas, raw", "ndbno": "09040", "nutrients": null
        }))
        .unwrap_err();
        assert!(matches!(err, NdbError::InvalidField { field: "nutrients", .. }));
    }
}
