// ABOUTME: HTTP client construction with request and connection timeouts
// ABOUTME: One reqwest client per NdbClient, built from NdbClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};

use crate::config::NdbClientConfig;
use ndb_core::{NdbError, NdbResult};

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for NDB API calls
///
/// The client pools connections, so one instance should be reused for the
/// lifetime of an `NdbClient`.
///
/// # Errors
///
/// Returns `NdbError::Config` if the TLS backend cannot be initialized
pub fn build_http_client(config: &NdbClientConfig) -> NdbResult<Client> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| NdbError::config(format!("failed to build HTTP client: {e}")))
}
