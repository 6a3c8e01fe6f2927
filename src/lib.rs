// ABOUTME: Library root for the USDA NDB nutrition database client
// ABOUTME: Re-exports the client, options, envelopes, and core value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NDB Client
//!
//! Client for the USDA National Nutrient Database (NDB) API. It runs keyword
//! searches and fetches food reports over HTTP, mapping the JSON responses into
//! typed values: [`SearchResult`], [`FoodReport`], [`Nutrient`], and [`Measure`].
//!
//! Pagination is left to the caller through [`SearchOptions::offset`]. There is
//! no caching, retrying, or rate limiting; every failure is returned as an
//! [`NdbError`].

/// HTTP client and the `FoodDatabase` abstraction
pub mod client;

/// Client configuration (API key, base URL, timeouts)
pub mod config;

/// HTTP client construction with timeouts
pub mod http_client;

/// Logging setup for binaries
pub mod logging;

/// In-memory `FoodDatabase` for tests and offline use
pub mod mock;

/// Search and report request options
pub mod options;

/// Search and food report envelopes
pub mod responses;

pub use client::{FoodDatabase, NdbClient};
pub use config::NdbClientConfig;
pub use mock::MockNdbClient;
pub use options::{ReportOptions, ReportType, SearchOptions, SortOrder};
pub use responses::{FoodReportResponse, SearchResponse};

pub use ndb_core::{ErrorCode, FoodReport, Measure, NdbError, NdbResult, Nutrient, SearchResult};
