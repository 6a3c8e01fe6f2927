// ABOUTME: Request options for keyword search and food report calls
// ABOUTME: SearchOptions, SortOrder, ReportOptions, and ReportType with their query encodings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use ndb_core::constants::search;
use ndb_core::{NdbError, NdbResult};

/// Search result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    /// Alphabetical by food name (`n`)
    #[serde(rename = "n")]
    Name,
    /// By search relevance (`r`)
    #[default]
    #[serde(rename = "r")]
    Relevance,
}

impl SortOrder {
    /// Wire code sent in the `sort` parameter
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Name => "n",
            Self::Relevance => "r",
        }
    }
}

impl FromStr for SortOrder {
    type Err = NdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" | "name" => Ok(Self::Name),
            "r" | "relevance" => Ok(Self::Relevance),
            other => Err(NdbError::invalid_input(format!(
                "unknown sort order '{other}' (expected n or r)"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Optional parameters for a keyword search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    /// Food group id filter; empty means all groups
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fg: String,
    /// Result ordering
    pub sort: SortOrder,
    /// First row of the result set to return
    pub offset: u32,
    /// Maximum number of rows to return
    pub max: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fg: String::new(),
            sort: SortOrder::default(),
            offset: search::DEFAULT_OFFSET,
            max: search::DEFAULT_MAX,
        }
    }
}

impl SearchOptions {
    /// Restrict results to a food group
    #[must_use]
    pub fn with_food_group(mut self, fg: impl Into<String>) -> Self {
        self.fg = fg.into();
        self
    }

    /// Set result ordering
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set the starting row
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the page size
    #[must_use]
    pub const fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    /// Check the options against the service limits
    ///
    /// # Errors
    ///
    /// Returns `NdbError::InvalidInput` if `max` is outside `1..=1500`
    pub fn validate(&self) -> NdbResult<()> {
        if self.max == 0 || self.max > search::MAX_ROWS_LIMIT {
            return Err(NdbError::invalid_input(format!(
                "max must be between 1 and {}, got {}",
                search::MAX_ROWS_LIMIT,
                self.max
            )));
        }
        Ok(())
    }
}

/// Food report detail level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ReportType {
    /// Basic report (`b`)
    #[default]
    #[serde(rename = "b")]
    Basic,
    /// Full report (`f`)
    #[serde(rename = "f")]
    Full,
    /// Statistics report (`s`)
    #[serde(rename = "s")]
    Stats,
}

impl ReportType {
    /// Wire code sent in the `type` parameter
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Basic => "b",
            Self::Full => "f",
            Self::Stats => "s",
        }
    }
}

impl FromStr for ReportType {
    type Err = NdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "b" | "basic" => Ok(Self::Basic),
            "f" | "full" => Ok(Self::Full),
            "s" | "stats" => Ok(Self::Stats),
            other => Err(NdbError::invalid_input(format!(
                "unknown report type '{other}' (expected b, f, or s)"
            ))),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Optional parameters for a food report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportOptions {
    /// Report detail level
    #[serde(rename = "type")]
    pub report_type: ReportType,
}

impl ReportOptions {
    /// Options requesting the given report type
    #[must_use]
    pub const fn new(report_type: ReportType) -> Self {
        Self { report_type }
    }
}
