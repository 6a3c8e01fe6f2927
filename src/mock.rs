// ABOUTME: In-memory FoodDatabase with canned foods for tests and offline use
// ABOUTME: Mirrors NdbClient search paging and report lookup without network calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::FoodDatabase;
use crate::options::{ReportOptions, SearchOptions, SortOrder};
use crate::responses::{FoodReportResponse, SearchResponse};
use ndb_core::{FoodReport, Measure, NdbError, NdbResult, Nutrient, SearchResult};

/// Standard Release label reported by the mock
const MOCK_SR: &str = "Legacy";

/// A canned food entry
#[derive(Debug, Clone)]
struct MockFood {
    group: String,
    report: FoodReport,
}

/// Mock NDB client for testing (no API calls)
#[derive(Debug, Clone)]
pub struct MockNdbClient {
    foods: BTreeMap<String, MockFood>,
}

impl MockNdbClient {
    /// Create a mock client with predefined test data
    #[must_use]
    pub fn new() -> Self {
        let mut mock = Self::empty();

        // Mock food: Banana (NDB 09040)
        mock.insert(
            "Fruits and Fruit Juices",
            FoodReport::new(
                "Bananas, raw",
                "09040",
                vec![
                    Nutrient::new("255", "Water")
                        .with_group("Proximates")
                        .with_amount("74.91", "g")
                        .with_measures(vec![Measure::new("cup, mashed", "225.0", "1.0", "168.55")]),
                    Nutrient::new("208", "Energy")
                        .with_group("Proximates")
                        .with_amount("89", "kcal")
                        .with_measures(vec![Measure::new("cup, mashed", "225.0", "1.0", "200")]),
                    Nutrient::new("418", "Vitamin B-12")
                        .with_group("Vitamins")
                        .with_amount("0.00", "µg"),
                ],
            ),
        );

        // Mock food: Apple (NDB 09003)
        mock.insert(
            "Fruits and Fruit Juices",
            FoodReport::new(
                "Apples, raw, with skin",
                "09003",
                vec![
                    Nutrient::new("255", "Water")
                        .with_group("Proximates")
                        .with_amount("85.56", "g"),
                    Nutrient::new("208", "Energy")
                        .with_group("Proximates")
                        .with_amount("52", "kcal")
                        .with_measures(vec![Measure::new("cup, sliced", "109.0", "1.0", "57")]),
                ],
            ),
        );

        // Mock food: Cheddar (NDB 01009)
        mock.insert(
            "Dairy and Egg Products",
            FoodReport::new(
                "Cheese, cheddar",
                "01009",
                vec![Nutrient::new("203", "Protein")
                    .with_group("Proximates")
                    .with_amount("22.87", "g")],
            ),
        );

        mock
    }

    /// Create a mock client with no foods
    #[must_use]
    pub fn empty() -> Self {
        Self {
            foods: BTreeMap::new(),
        }
    }

    /// Add or replace a canned food
    pub fn insert(&mut self, group: impl Into<String>, report: FoodReport) {
        self.foods.insert(
            report.ndbno().to_owned(),
            MockFood {
                group: group.into(),
                report,
            },
        );
    }
}

impl Default for MockNdbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodDatabase for MockNdbClient {
    async fn search_keyword(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> NdbResult<SearchResponse> {
        options.validate()?;

        let query_lower = query.to_lowercase();
        let mut matches: Vec<&MockFood> = self
            .foods
            .values()
            .filter(|food| food.report.name().to_lowercase().contains(&query_lower))
            .collect();
        if options.sort == SortOrder::Name {
            matches.sort_by(|a, b| a.report.name().cmp(b.report.name()));
        }

        let total = matches.len() as u64;
        let items: Vec<SearchResult> = matches
            .into_iter()
            .enumerate()
            .skip(options.offset as usize)
            .take(options.max as usize)
            .map(|(offset, food)| {
                SearchResult::new(
                    food.report.name(),
                    food.report.ndbno(),
                    offset as u64,
                    food.group.clone(),
                )
            })
            .collect();

        let start = u64::from(options.offset).min(total);
        Ok(SearchResponse {
            query: query.to_owned(),
            start,
            end: start + items.len() as u64,
            items,
            offset: options.offset,
            total,
            sort: options.sort.code().to_owned(),
            group: options.fg.clone(),
            sr: MOCK_SR.to_owned(),
        })
    }

    async fn food_report(
        &self,
        ndbno: &str,
        options: &ReportOptions,
    ) -> NdbResult<FoodReportResponse> {
        let food = self.foods.get(ndbno).ok_or_else(|| NdbError::Api {
            message: format!("ndbno: No food found for {ndbno}"),
        })?;

        Ok(FoodReportResponse {
            food: food.report.clone(),
            sr: MOCK_SR.to_owned(),
            report_type: options.report_type.code().to_owned(),
            footnotes: Value::Array(Vec::new()),
        })
    }
}
