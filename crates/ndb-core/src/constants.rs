// ABOUTME: Constants for the NDB client organized by domain
// ABOUTME: Endpoint names, default URLs and timeouts, search limits, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service endpoints and request format
pub mod endpoints {
    /// Default base URL of the NDB API
    pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/ndb";
    /// Keyword search endpoint
    pub const SEARCH: &str = "search";
    /// Food report endpoint
    pub const REPORTS: &str = "reports";
    /// Response format requested on every call
    pub const FORMAT_JSON: &str = "json";
}

/// HTTP client timeouts
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Keyword search defaults and limits
pub mod search {
    /// Default number of rows returned
    pub const DEFAULT_MAX: u32 = 50;
    /// Largest `max` the service accepts
    pub const MAX_ROWS_LIMIT: u32 = 1500;
    /// Default starting row
    pub const DEFAULT_OFFSET: u32 = 0;
}

/// Environment variable names read by the client configuration
pub mod env_vars {
    /// API key issued by the service operator
    pub const API_KEY: &str = "NDB_API_KEY";
    /// Base URL override
    pub const BASE_URL: &str = "NDB_BASE_URL";
    /// Request timeout override (seconds)
    pub const TIMEOUT_SECS: &str = "NDB_TIMEOUT_SECS";
    /// Connection timeout override (seconds)
    pub const CONNECT_TIMEOUT_SECS: &str = "NDB_CONNECT_TIMEOUT_SECS";
}

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "ndb-client";
