// ABOUTME: Client configuration for the NDB API: key, base URL, and timeouts
// ABOUTME: Provides defaults, environment loading, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! NDB client configuration
//!
//! The API key is the only required setting. Everything else has a default and
//! can be overridden from the environment (see [`NdbClientConfig::from_env`]).

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use ndb_core::constants::{endpoints, env_vars, timeouts};
use ndb_core::{NdbError, NdbResult};

/// NDB API client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct NdbClientConfig {
    /// API key issued by the service operator
    pub api_key: String,
    /// Base URL, without the endpoint segment (default: <https://api.nal.usda.gov/ndb>)
    pub base_url: String,
    /// Whole-request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connection timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
}

impl Default for NdbClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: endpoints::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: timeouts::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: timeouts::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

// Keeps the key out of logs
impl fmt::Debug for NdbClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdbClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl NdbClientConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from `NDB_API_KEY`, `NDB_BASE_URL`,
    /// `NDB_TIMEOUT_SECS`, and `NDB_CONNECT_TIMEOUT_SECS`
    ///
    /// Unset variables keep their defaults. The result is not validated, so a
    /// caller may still fill in the key from another source.
    ///
    /// # Errors
    ///
    /// Returns `NdbError::Config` if a timeout variable is not a number
    pub fn from_env() -> NdbResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            api_key: env::var(env_vars::API_KEY).unwrap_or_default(),
            base_url: env::var(env_vars::BASE_URL).unwrap_or(defaults.base_url),
            timeout_secs: parse_env(env_vars::TIMEOUT_SECS, defaults.timeout_secs)?,
            connect_timeout_secs: parse_env(
                env_vars::CONNECT_TIMEOUT_SECS,
                defaults.connect_timeout_secs,
            )?,
        })
    }

    /// Check that the configuration can be used to make requests
    ///
    /// # Errors
    ///
    /// Returns `NdbError::Config` if the API key is empty, a timeout is zero,
    /// or the base URL is not http(s)
    pub fn validate(&self) -> NdbResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(NdbError::config(format!(
                "API key is required (set {})",
                env_vars::API_KEY
            )));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(NdbError::config("timeouts must be at least one second"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(NdbError::config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Full URL for an endpoint, e.g. `https://api.nal.usda.gov/ndb/search/`
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}/", self.base_url.trim_end_matches('/'))
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> NdbResult<T> {
    env::var(name).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|_| NdbError::config(format!("{name} must be a number, got '{raw}'")))
    })
}
