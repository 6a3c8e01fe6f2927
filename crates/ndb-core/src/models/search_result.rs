// ABOUTME: SearchResult value object for a single keyword search hit
// ABOUTME: Requires name, ndbno, offset, and group; missing keys fail fast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::fields::{self, FieldMap};
use crate::errors::NdbResult;

const ENTITY: &str = "SearchResult";

/// One food item matched by a keyword search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    name: String,
    ndbno: String,
    offset: u64,
    group: String,
}

impl SearchResult {
    /// Create a search result from its fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ndbno: impl Into<String>,
        offset: u64,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ndbno: ndbno.into(),
            offset,
            group: group.into(),
        }
    }

    /// Build from one item of a search response's `list.item` array
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if any of `name`, `ndbno`, `offset`, or `group`
    /// is absent, and `InvalidField` if one has the wrong shape
    pub fn from_map(map: &FieldMap) -> NdbResult<Self> {
        Ok(Self {
            name: fields::required_string(map, ENTITY, "name")?,
            ndbno: fields::required_string(map, ENTITY, "ndbno")?,
            offset: fields::required_u64(map, ENTITY, "offset")?,
            group: fields::required_string(map, ENTITY, "group")?,
        })
    }

    /// Build from a JSON value that must be an object
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if `value` is not an object, otherwise as
    /// [`SearchResult::from_map`]
    pub fn from_value(value: &Value) -> NdbResult<Self> {
        Self::from_map(fields::as_object(value, "list.item")?)
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

    /// Row position of this hit within the full result set
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Food group label, e.g. "Fruits and Fruit Juices"
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
