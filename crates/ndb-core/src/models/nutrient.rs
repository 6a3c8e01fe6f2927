// ABOUTME: Nutrient value object for one row of a food report
// ABOUTME: Every scalar defaults to empty and measures default to an empty list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::fields::{self, FieldMap};
use super::Measure;
use crate::errors::NdbResult;

const ENTITY: &str = "Nutrient";

/// A nutrient reported for a food, with its per-serving measures
///
/// `unit` is a regular UTF-8 string, so symbols such as `µg` round-trip as-is.
#[allow(clippy::struct_field_names)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Nutrient {
    nutrient_id: String,
    name: String,
    group: String,
    unit: String,
    value: String,
    sourcecode: String,
    dp: String,
    se: String,
    measures: Vec<Measure>,
}

impl Nutrient {
    /// Create a nutrient with an id and name; remaining fields start empty
    #[must_use]
    pub fn new(nutrient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            nutrient_id: nutrient_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the nutrient group
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the unit and value
    #[must_use]
    pub fn with_amount(mut self, value: impl Into<String>, unit: impl Into<String>) -> Self {
        self.value = value.into();
        self.unit = unit.into();
        self
    }

    /// Set the source code
    #[must_use]
    pub fn with_sourcecode(mut self, sourcecode: impl Into<String>) -> Self {
        self.sourcecode = sourcecode.into();
        self
    }

    /// Set decimal precision and standard error
    #[must_use]
    pub fn with_statistics(mut self, dp: impl Into<String>, se: impl Into<String>) -> Self {
        self.dp = dp.into();
        self.se = se.into();
        self
    }

    /// Set the per-serving measures
    #[must_use]
    pub fn with_measures(mut self, measures: Vec<Measure>) -> Self {
        self.measures = measures;
        self
    }

    /// Build from one element of a report's `nutrients` array
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if a scalar field holds an array or object, or
    /// if `measures` is neither null nor an array of objects
    pub fn from_map(map: &FieldMap) -> NdbResult<Self> {
        let measures = fields::optional_array(map, ENTITY, "measures")?
            .iter()
            .map(Measure::from_value)
            .collect::<NdbResult<Vec<_>>>()?;

        Ok(Self {
            nutrient_id: fields::optional_string(map, ENTITY, "nutrient_id")?,
            name: fields::optional_string(map, ENTITY, "name")?,
            group: fields::optional_string(map, ENTITY, "group")?,
            unit: fields::optional_string(map, ENTITY, "unit")?,
            value: fields::optional_string(map, ENTITY, "value")?,
            sourcecode: fields::optional_string(map, ENTITY, "sourcecode")?,
            dp: fields::optional_string(map, ENTITY, "dp")?,
            se: fields::optional_string(map, ENTITY, "se")?,
            measures,
        })
    }

    /// Build from a JSON value that must be an object
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if `value` is not an object
    pub fn from_value(value: &Value) -> NdbResult<Self> {
        Self::from_map(fields::as_object(value, "nutrient")?)
    }

    /// Nutrient number, e.g. "255" for water
    #[must_use]
    pub fn nutrient_id(&self) -> &str {
        &self.nutrient_id
    }

    /// Nutrient name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nutrient group, e.g. "Proximates"
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Unit of measure, e.g. "g" or "µg"
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Value per 100 g of food
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Code describing how the value was obtained
    #[must_use]
    pub fn sourcecode(&self) -> &str {
        &self.sourcecode
    }

    /// Number of data points
    #[must_use]
    pub fn dp(&self) -> &str {
        &self.dp
    }

    /// Standard error
    #[must_use]
    pub fn se(&self) -> &str {
        &self.se
    }

    /// Measures in source order
    #[must_use]
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
