// ABOUTME: Core types and constants for the NDB nutrition database client
// ABOUTME: Foundation crate with error handling, value objects, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NDB Core
//!
//! Foundation crate providing shared types for the NDB client. It carries no
//! HTTP logic of its own, so the value objects can be built from any JSON source.
//!
//! ## Modules
//!
//! - **errors**: `NdbError`, `ErrorCode`, and the `NdbResult` alias
//! - **constants**: endpoint names, defaults, and environment variable names
//! - **models**: `SearchResult`, `FoodReport`, `Nutrient`, and `Measure`

/// Unified error handling with numbered error codes
pub mod errors;

/// Service constants and defaults organized by domain
pub mod constants;

/// Immutable value objects mapped from service JSON
pub mod models;

pub use errors::{ErrorCode, NdbError, NdbResult};
pub use models::{FoodReport, Measure, Nutrient, SearchResult};
