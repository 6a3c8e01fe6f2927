// ABOUTME: Value objects mapped from NDB JSON responses
// ABOUTME: SearchResult, FoodReport, Nutrient, and Measure with their field helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models
//!
//! Immutable value objects built from untyped JSON mappings. `SearchResult`
//! and `FoodReport` require their keys to be present; `Nutrient` and `Measure`
//! fall back to empty defaults for anything missing.

/// Field extraction and coercion shared by the factories
pub mod fields;

mod food_report;
mod measure;
mod nutrient;
mod search_result;

pub use food_report::FoodReport;
pub use measure::Measure;
pub use nutrient::Nutrient;
pub use search_result::SearchResult;
