// ABOUTME: Shared fixtures for NDB client integration tests
// ABOUTME: Canned service bodies and a helper pointing NdbClient at a wiremock server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ndb_client::{NdbClient, NdbClientConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Client whose base URL points at `server`
pub fn client_for(server: &MockServer) -> NdbClient {
    NdbClient::with_config(config_for(server)).expect("client should build")
}

/// Config whose base URL points at `server`
pub fn config_for(server: &MockServer) -> NdbClientConfig {
    NdbClientConfig {
        base_url: format!("{}/ndb", server.uri()),
        ..NdbClientConfig::new(TEST_API_KEY)
    }
}

/// Single-hit search body for "ban"
pub fn banana_search_body() -> Value {
    json!({"list": {
        "q": "ban", "start": 0, "end": 1, "total": "1", "sr": "28", "sort": "r", "group": "",
        "item": [{"name": "Banana, raw", "ndbno": "09040", "offset": 0, "group": "Fruits"}]
    }})
}

/// Three-hit search body, numbers encoded as the service usually does
pub fn cheese_search_body() -> Value {
    json!({"list": {
        "q": "cheddar", "sr": "Legacy", "ds": "any", "start": 0, "end": 3, "total": 41,
        "group": "", "sort": "n",
        "item": [
            {"offset": 0, "group": "Dairy and Egg Products", "name": "Cheese, cheddar", "ndbno": "01009", "ds": "SR", "manu": "none"},
            {"offset": 1, "group": "Dairy and Egg Products", "name": "Cheese, cheddar, sharp, sliced", "ndbno": "01270", "ds": "SR", "manu": "none"},
            {"offset": 2, "group": "Dairy and Egg Products", "name": "Cheese, low fat, cheddar or colby", "ndbno": "01168", "ds": "SR", "manu": "none"}
        ]
    }})
}

/// Basic food report for bananas with one null-measure nutrient
pub fn banana_report_body() -> Value {
    json!({"report": {
        "sr": "Legacy",
        "type": "Basic",
        "food": {
            "ndbno": "09040",
            "name": "Bananas, raw",
            "ds": "Standard Reference",
            "ru": "g",
            "nutrients": [
                {
                    "nutrient_id": "255", "name": "Water", "group": "Proximates", "unit": "g",
                    "value": "74.91",
                    "measures": [
                        {"label": "cup, mashed", "eqv": 225.0, "eunit": "g", "qty": 1.0, "value": "168.55"},
                        {"label": "cup, sliced", "eqv": 150.0, "eunit": "g", "qty": 1.0, "value": "112.36"}
                    ]
                },
                {
                    "nutrient_id": 418, "name": "Vitamin B-12", "group": "Vitamins", "unit": "µg",
                    "value": 0.0, "sourcecode": "1", "dp": 0, "se": "", "measures": null
                },
                {"name": "Energy"}
            ]
        },
        "footnotes": []
    }})
}
