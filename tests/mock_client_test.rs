// ABOUTME: Tests for the in-memory MockNdbClient through the FoodDatabase trait
// ABOUTME: Validates search filtering, sorting, paging, and report lookup without network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ndb_client::{
    FoodDatabase, FoodReport, MockNdbClient, NdbError, Nutrient, ReportOptions, ReportType, SearchOptions,
    SearchResult, SortOrder,
};

async fn search(db: &dyn FoodDatabase, query: &str, options: SearchOptions) -> Vec<String> {
    db.search_keyword(query, &options)
        .await
        .unwrap()
        .iter()
        .map(SearchResult::name)
        .map(str::to_owned)
        .collect()
}

#[tokio::test]
async fn test_mock_search_is_case_insensitive() {
    let mock = MockNdbClient::new();
    let names = search(&mock, "BANANA", SearchOptions::default()).await;
    assert_eq!(names, ["Bananas, raw"]);
}

#[tokio::test]
async fn test_mock_search_sort_and_paging() {
    let mock = MockNdbClient::new();

    let sorted = search(&mock, "raw", SearchOptions::default().with_sort(SortOrder::Name)).await;
    assert_eq!(sorted, ["Apples, raw, with skin", "Bananas, raw"]);

    let response = mock
        .search_keyword(
            "raw",
            &SearchOptions::default()
                .with_sort(SortOrder::Name)
                .with_offset(1)
                .with_max(1),
        )
        .await
        .unwrap();
    assert_eq!(response.total, 2);
    assert_eq!(response.start, 1);
    assert_eq!(response.end, 2);
    assert_eq!(response.offset, 1);
    assert_eq!(response.items[0].name(), "Bananas, raw");
    assert_eq!(response.items[0].offset(), 1);
}

#[tokio::test]
async fn test_mock_report_lookup() {
    let mock = MockNdbClient::new();
    let response = mock
        .food_report("09040", &ReportOptions::new(ReportType::Stats))
        .await
        .unwrap();

    assert_eq!(response.report_type, "s");
    assert_eq!(response.food.name(), "Bananas, raw");
    assert_eq!(response.food.nutrient("418").map(Nutrient::unit), Some("µg"));
}

#[tokio::test]
async fn test_mock_unknown_food() {
    let mock = MockNdbClient::empty();
    let err = mock
        .food_report("09040", &ReportOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, NdbError::Api { .. }));
}

#[tokio::test]
async fn test_mock_insert_custom_food() {
    let mut mock = MockNdbClient::empty();
    mock.insert("Vegetables", FoodReport::new("Kale, raw", "11233", Vec::new()));

    let names = search(&mock, "kale", SearchOptions::default()).await;
    assert_eq!(names, ["Kale, raw"]);

    let response = mock
        .search_keyword("kale", &SearchOptions::default())
        .await
        .unwrap();
    assert_eq!(response.items[0].group(), "Vegetables");
}
