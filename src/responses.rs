// ABOUTME: Result envelopes for search and food report calls
// ABOUTME: Parses raw JSON bodies into SearchResponse/FoodReportResponse and detects service errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Response envelopes
//!
//! Search responses arrive under a top-level `list` key and food reports under
//! `report`. Either key missing is a malformed response. Bodies that carry the
//! service's own error structure are turned into `NdbError::Api` first.

use std::slice;

use serde::Serialize;
use serde_json::Value;

use ndb_core::models::fields::{self, FieldMap};
use ndb_core::{FoodReport, NdbError, NdbResult, SearchResult};

const SEARCH_ENTITY: &str = "SearchResponse";
const REPORT_ENTITY: &str = "FoodReportResponse";

/// Envelope returned by a keyword search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    /// Terms the service used for the search
    pub query: String,
    /// Matching foods, in response order
    pub items: Vec<SearchResult>,
    /// Index of the first item in this page
    pub start: u64,
    /// Index one past the last item in this page
    pub end: u64,
    /// Offset requested by the caller
    pub offset: u32,
    /// Total number of matches across all pages
    pub total: u64,
    /// Sort order applied (`n` or `r`)
    pub sort: String,
    /// Food group filter applied
    pub group: String,
    /// Standard Release version of the data
    pub sr: String,
}

impl SearchResponse {
    /// Parse a search body; `offset` is echoed from the request options
    ///
    /// # Errors
    ///
    /// Returns `NdbError::Api` for a service error body, `MalformedResponse`
    /// if `list` is missing, or any error from mapping an item
    pub fn from_body(body: &Value, offset: u32) -> NdbResult<Self> {
        check_service_error(body)?;
        let list = top_level(body, "list")?;

        let items = fields::optional_array(list, SEARCH_ENTITY, "item")?
            .iter()
            .map(SearchResult::from_value)
            .collect::<NdbResult<Vec<_>>>()?;

        let group = match list.get("group") {
            Some(_) => fields::optional_string(list, SEARCH_ENTITY, "group")?,
            None => fields::optional_string(list, SEARCH_ENTITY, "fg")?,
        };

        Ok(Self {
            query: fields::optional_string(list, SEARCH_ENTITY, "q")?,
            items,
            start: fields::required_u64(list, SEARCH_ENTITY, "start")?,
            end: fields::required_u64(list, SEARCH_ENTITY, "end")?,
            offset,
            total: fields::required_u64(list, SEARCH_ENTITY, "total")?,
            sort: fields::required_string(list, SEARCH_ENTITY, "sort")?,
            group,
            sr: fields::required_string(list, SEARCH_ENTITY, "sr")?,
        })
    }

    /// Iterate the items; can be called any number of times
    pub fn iter(&self) -> slice::Iter<'_, SearchResult> {
        self.items.iter()
    }

    /// Number of items in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchResponse {
    type Item = &'a SearchResult;
    type IntoIter = slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Envelope returned by a food report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodReportResponse {
    /// The food and its nutrients
    pub food: FoodReport,
    /// Standard Release version of the data
    pub sr: String,
    /// Report type served (`b`, `f`, or `s`)
    #[serde(rename = "type")]
    pub report_type: String,
    /// Footnotes, passed through as-is (`null` when absent)
    pub footnotes: Value,
}

impl FoodReportResponse {
    /// Parse a food report body
    ///
    /// # Errors
    ///
    /// Returns `NdbError::Api` for a service error body, `MalformedResponse`
    /// if `report` is missing, or any error from mapping `report.food`
    pub fn from_body(body: &Value) -> NdbResult<Self> {
        check_service_error(body)?;
        let report = top_level(body, "report")?;

        let food = report.get("food").ok_or(NdbError::MissingField {
            entity: REPORT_ENTITY,
            field: "food",
        })?;

        Ok(Self {
            food: FoodReport::from_value(food)?,
            sr: fields::required_string(report, REPORT_ENTITY, "sr")?,
            report_type: fields::required_string(report, REPORT_ENTITY, "type")?,
            footnotes: report.get("footnotes").cloned().unwrap_or(Value::Null),
        })
    }
}

/// Extract the error message from a service error body, if it is one.
///
/// Recognizes the NDB format `{"errors": {"error": [{"message": ..}]}}` and the
/// API gateway format `{"error": {"code": .., "message": ..}}`.
#[must_use]
pub fn service_error_message(body: &Value) -> Option<String> {
    if let Some(errors) = body.pointer("/errors/error").and_then(Value::as_array) {
        let messages: Vec<String> = errors
            .iter()
            .filter_map(|e| {
                let message = e.get("message")?.as_str()?;
                Some(e.get("parameter").and_then(Value::as_str).map_or_else(
                    || message.to_owned(),
                    |parameter| format!("{parameter}: {message}"),
                ))
            })
            .collect();
        if !messages.is_empty() {
            return Some(messages.join("; "));
        }
    }

    let error = body.get("error")?;
    let message = error.get("message").and_then(Value::as_str)?;
    Some(error.get("code").and_then(Value::as_str).map_or_else(
        || message.to_owned(),
        |code| format!("{code}: {message}"),
    ))
}

fn check_service_error(body: &Value) -> NdbResult<()> {
    service_error_message(body).map_or(Ok(()), |message| Err(NdbError::Api { message }))
}

fn top_level<'a>(body: &'a Value, key: &'static str) -> NdbResult<&'a FieldMap> {
    let value = body
        .get(key)
        .ok_or_else(|| NdbError::malformed(key, format!("missing top-level '{key}' key")))?;
    fields::as_object(value, key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_envelope_fields() {
        let body = json!({"list": {
            "q": "ban", "sr": "28", "ds": "any", "start": 0, "end": 1,
            "total": "1", "group": "", "sort": "r",
            "item": [{"name": "Banana, raw", "ndbno": "09040", "offset": 0, "group": "Fruits"}]
        }});

        let response = SearchResponse::from_body(&body, 0).unwrap();
        assert_eq!(response.query, "ban");
        assert_eq!(response.total, 1);
        assert_eq!(response.start, 0);
        assert_eq!(response.end, 1);
        assert_eq!(response.sr, "28");
        assert_eq!(response.len(), 1);
        assert_eq!(response.items[0].name(), "Banana, raw");
    }

    #[test]
    fn test_items_iterate_twice() {
        let body = json!({"list": {
            "start": 0, "end": 2, "total": 2, "sort": "n", "sr": "28",
            "item": [
                {"name": "A", "ndbno": "1", "offset": 0, "group": "g"},
                {"name": "B", "ndbno": "2", "offset": 1, "group": "g"}
            ]
        }});
        let response = SearchResponse::from_body(&body, 0).unwrap();

        let first: Vec<&str> = response.iter().map(SearchResult::name).collect();
        let second: Vec<&str> = (&response).into_iter().map(SearchResult::name).collect();
        assert_eq!(first, ["A", "B"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_item_key_is_empty_page() {
        let body = json!({"list": {"start": 0, "end": 0, "total": 0, "sort": "r", "sr": "28", "fg": "0900"}});
        let response = SearchResponse::from_body(&body, 100).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.offset, 100);
        assert_eq!(response.group, "0900");
    }

    #[test]
    fn test_missing_list_is_malformed() {
        let err = SearchResponse::from_body(&json!({"report": {}}), 0).unwrap_err();
        assert!(matches!(err, NdbError::MalformedResponse { context: "list", .. }));
    }

    #[test]
    fn test_ndb_error_body() {
        let body = json!({"errors": {"error": [{
            "status": 400, "parameter": "results",
            "message": "Your search resulted in zero results."
        }]}});
        let err = SearchResponse::from_body(&body, 0).unwrap_err();
        match err {
            NdbError::Api { message } => {
                assert_eq!(message, "results: Your search resulted in zero results.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_gateway_error_body() {
        let body = json!({"error": {"code": "API_KEY_INVALID", "message": "An invalid api_key was supplied."}});
        assert_eq!(
            service_error_message(&body).as_deref(),
            Some("API_KEY_INVALID: An invalid api_key was supplied.")
        );
    }

    #[test]
    fn test_report_envelope_passes_footnotes_through() {
        let body = json!({"report": {
            "sr": "28", "type": "Basic",
            "food": {"name": "Bananas, raw", "ndbno": "09040", "nutrients": []},
            "footnotes": [{"idv": "a", "desc": "note"}]
        }});
        let response = FoodReportResponse::from_body(&body).unwrap();
        assert_eq!(response.report_type, "Basic");
        assert_eq!(response.footnotes, json!([{"idv": "a", "desc": "note"}]));
        assert!(response.food.nutrients().is_empty());
    }

    #[test]
    fn test_report_without_food_fails() {
        let err = FoodReportResponse::from_body(&json!({"report": {"sr": "28", "type": "b"}})).unwrap_err();
        assert!(matches!(err, NdbError::MissingField { field: "food", .. }));
    }
}
