// ABOUTME: Command-line front end for the NDB client
// ABOUTME: Runs keyword searches and food reports and prints them as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Search by keyword (API key from NDB_API_KEY)
//! ndb search banana --max 10
//!
//! # Alphabetical, second page
//! ndb search cheese --sort n --offset 25 --max 25
//!
//! # Full food report as JSON
//! ndb report 09040 --type f --json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use ndb_client::logging::LoggingConfig;
use ndb_client::{
    FoodReportResponse, NdbClient, NdbClientConfig, ReportOptions, ReportType, SearchOptions,
    SearchResponse, SortOrder,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "ndb",
    version,
    about = "Query the USDA National Nutrient Database",
    long_about = "Keyword search and food reports against the USDA NDB API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API key (defaults to NDB_API_KEY)
    #[arg(long, global = true, env = "NDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print the full response envelope as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search foods by keyword
    Search {
        /// Search terms
        query: String,

        /// Food group id filter
        #[arg(long, default_value = "")]
        fg: String,

        /// Sort by name (n) or relevance (r)
        #[arg(long, default_value_t = SortOrder::Relevance)]
        sort: SortOrder,

        /// First row to return
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Maximum rows to return
        #[arg(long, default_value_t = 50)]
        max: u32,
    },
    /// Show the nutrient report for a food
    Report {
        /// NDB number, e.g. 09040
        ndbno: String,

        /// Report type: basic (b), full (f), or stats (s)
        #[arg(long = "type", default_value_t = ReportType::Basic)]
        report_type: ReportType,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let client = NdbClient::with_config(build_config(&cli)?)?;

    match cli.command {
        Command::Search {
            ref query,
            ref fg,
            sort,
            offset,
            max,
        } => {
            let options = SearchOptions::default()
                .with_food_group(fg.as_str())
                .with_sort(sort)
                .with_offset(offset)
                .with_max(max);
            let response = client.search_keyword(query, &options).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_search(&response);
            }
        }
        Command::Report {
            ref ndbno,
            report_type,
        } => {
            let response = client
                .food_report(ndbno, &ReportOptions::new(report_type))
                .await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_report(&response);
            }
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<NdbClientConfig> {
    let mut config = NdbClientConfig::from_env()?;
    if let Some(api_key) = &cli.api_key {
        config.api_key.clone_from(api_key);
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    debug!(?config, "Resolved client configuration");
    Ok(config)
}

fn print_search(response: &SearchResponse) {
    println!(
        "{} of {} matches for '{}' (rows {}-{}, SR {})",
        response.len(),
        response.total,
        response.query,
        response.start,
        response.end,
        response.sr
    );
    for item in response {
        println!("{}  {}  [{}]", item.ndbno(), item.name(), item.group());
    }
}

fn print_report(response: &FoodReportResponse) {
    println!("{} ({}, SR {})", response.food, response.food.ndbno(), response.sr);
    for nutrient in response.food.nutrients() {
        println!("  {}: {} {}", nutrient.name(), nutrient.value(), nutrient.unit());
    }
}
