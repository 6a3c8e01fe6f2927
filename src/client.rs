// ABOUTME: NDB API client for keyword search and food report retrieval
// ABOUTME: Builds GET requests, checks status and service errors, and maps JSON into typed envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! USDA NDB API Client
//!
//! Every call issues exactly one GET to `{base_url}/{endpoint}/?format=json`
//! and resolves once the whole body has been received and mapped. The client
//! holds no mutable state, so one instance can be shared freely across tasks.
//!
//! # Example
//! ```rust,no_run
//! use ndb_client::{NdbClient, SearchOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NdbClient::new("your_api_key")?;
//! let results = client.search_keyword("banana", &SearchOptions::default()).await?;
//! for item in &results {
//!     println!("{} {}", item.ndbno(), item.name());
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::NdbClientConfig;
use crate::http_client::build_http_client;
use crate::options::{ReportOptions, SearchOptions};
use crate::responses::{service_error_message, FoodReportResponse, SearchResponse};
use ndb_core::constants::endpoints;
use ndb_core::{NdbError, NdbResult};

/// Operations offered by a nutrition database backend
#[async_trait]
pub trait FoodDatabase: Send + Sync {
    /// Search foods by keyword
    async fn search_keyword(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> NdbResult<SearchResponse>;

    /// Fetch the nutrient report for one food
    async fn food_report(
        &self,
        ndbno: &str,
        options: &ReportOptions,
    ) -> NdbResult<FoodReportResponse>;
}

/// HTTP client for the NDB API
#[derive(Debug, Clone)]
pub struct NdbClient {
    config: NdbClientConfig,
    http_client: Client,
}

impl NdbClient {
    /// Create a client with the default base URL and timeouts
    ///
    /// # Errors
    ///
    /// Returns `NdbError::Config` if the key is empty or the HTTP client
    /// cannot be built
    pub fn new(api_key: impl Into<String>) -> NdbResult<Self> {
        Self::with_config(NdbClientConfig::new(api_key))
    }

    /// Create a client from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `NdbError::Config` if the configuration fails validation or
    /// the HTTP client cannot be built
    pub fn with_config(config: NdbClientConfig) -> NdbResult<Self> {
        config.validate()?;
        let http_client = build_http_client(&config)?;
        debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "NDB client created");
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &NdbClientConfig {
        &self.config
    }

    /// Search the database by keyword
    ///
    /// # Arguments
    /// * `query` - Search terms (e.g., "banana", "cheddar cheese")
    /// * `options` - Food group filter, sort order, offset, and page size
    ///
    /// # Returns
    /// The search envelope; `offset` echoes `options.offset`
    ///
    /// # Errors
    /// Returns `InvalidInput` if `options.max` is out of range, `Transport` on
    /// network failure, `HttpStatus`/`Api` when the service rejects the call,
    /// and `MalformedResponse`/`MissingField` when the body does not match
    #[instrument(
        skip(self, options),
        fields(api_call = "search_keyword", offset = options.offset, max = options.max)
    )]
    pub async fn search_keyword(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> NdbResult<SearchResponse> {
        options.validate()?;

        let body = self
            .get_json(endpoints::SEARCH, &[("q", query)], options)
            .await?;
        let response = SearchResponse::from_body(&body, options.offset)?;

        info!(
            items = response.len(),
            total = response.total,
            "NDB keyword search completed"
        );
        Ok(response)
    }

    /// Fetch a food report by NDB number
    ///
    /// # Arguments
    /// * `ndbno` - Food identifier, e.g. "09040"
    /// * `options` - Report type (basic, full, or stats)
    ///
    /// # Errors
    /// Returns `InvalidInput` if `ndbno` is empty, plus the same failure kinds
    /// as [`NdbClient::search_keyword`]
    #[instrument(skip(self, options), fields(api_call = "food_report", report_type = %options.report_type))]
    pub async fn food_report(
        &self,
        ndbno: &str,
        options: &ReportOptions,
    ) -> NdbResult<FoodReportResponse> {
        if ndbno.trim().is_empty() {
            return Err(NdbError::invalid_input("ndbno cannot be empty"));
        }

        let body = self
            .get_json(endpoints::REPORTS, &[("ndbno", ndbno)], options)
            .await?;
        let response = FoodReportResponse::from_body(&body)?;

        info!(
            food = %response.food.name(),
            nutrients = response.food.nutrients().len(),
            "NDB food report retrieved"
        );
        Ok(response)
    }

    /// Nutrient report lookup. Not offered by this client.
    ///
    /// # Errors
    /// Always returns `NdbError::NotImplemented`
    #[allow(clippy::unused_self)]
    pub fn search_nutrient_report(&self) -> NdbResult<()> {
        Err(NdbError::NotImplemented {
            operation: "search_nutrient_report",
        })
    }

    /// List lookup (food groups, nutrients). Not offered by this client.
    ///
    /// # Errors
    /// Always returns `NdbError::NotImplemented`
    #[allow(clippy::unused_self)]
    pub fn search_list(&self) -> NdbResult<()> {
        Err(NdbError::NotImplemented {
            operation: "search_list",
        })
    }

    /// Issue a GET against `endpoint` and decode the JSON body
    async fn get_json<O: Serialize + Sync + ?Sized>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
        options: &O,
    ) -> NdbResult<Value> {
        let url = self.config.endpoint_url(endpoint);
        debug!(endpoint, url = %url, "Sending NDB API request");

        let response = self
            .http_client
            .get(&url)
            .query(&[("format", endpoints::FORMAT_JSON)])
            .query(params)
            .query(options)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            let parsed = serde_json::from_slice::<Value>(&bytes).ok();
            if let Some(message) = parsed.as_ref().and_then(service_error_message) {
                warn!(endpoint, status = status.as_u16(), %message, "NDB API returned an error");
                return Err(NdbError::Api { message });
            }
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(endpoint, status = status.as_u16(), "NDB API request failed");
            return Err(NdbError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| NdbError::Json {
            context: endpoint,
            source,
        })
    }
}

/// Transport errors render their URL, which carries the API key
fn transport_error(error: reqwest::Error) -> NdbError {
    NdbError::Transport(error.without_url())
}

#[async_trait]
impl FoodDatabase for NdbClient {
    async fn search_keyword(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> NdbResult<SearchResponse> {
        Self::search_keyword(self, query, options).await
    }

    async fn food_report(
        &self,
        ndbno: &str,
        options: &ReportOptions,
    ) -> NdbResult<FoodReportResponse> {
        Self::food_report(self, ndbno, options).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        assert!(matches!(NdbClient::new(""), Err(NdbError::Config(_))));
    }

    #[test]
    fn test_unimplemented_operations() {
        let client = NdbClient::new("demo-key").unwrap();
        assert!(matches!(
            client.search_nutrient_report(),
            Err(NdbError::NotImplemented {
                operation: "search_nutrient_report"
            })
        ));
        assert!(matches!(
            client.search_list(),
            Err(NdbError::NotImplemented {
                operation: "search_list"
            })
        ));
    }
}
