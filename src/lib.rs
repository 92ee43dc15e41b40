// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # webjobs - client SDK for remote web-data jobs
//!
//! Every expensive operation of the API (scrape, extract, crawl, batch
//! scrape, browser and computer agents) is a job: one call starts it, a
//! status route reports progress and a result route returns the data. This
//! crate turns that into a single awaited call.
//!
//! ## Features
//!
//! - Start-and-wait for every job family, async or blocking
//! - Fixed-cadence status polling with a wall-clock budget
//! - Bounded retry of idempotent fetches with a fixed delay
//! - Page-by-page collection of crawl and batch results in order
//! - Errors that name the operation that failed and keep the cause
//!
//! ## Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use webjobs::{Client, WaitOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::from_env()?;
//!
//!     let crawl = client
//!         .crawl()
//!         .start_and_wait(&json!({"url": "https://example.com"}), &WaitOptions::default())
//!         .await?;
//!
//!     println!("{} items over {} pages", crawl.data.len(), crawl.total_page_batches);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod jobs;
pub mod polling;

#[cfg(test)]
mod testing;

// Clients
pub use client::{BlockingClient, Client, ClientConfig};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{ApiResponse, BlockingHttpClient, BlockingTransport, HttpClient, Transport};

// Jobs
pub use jobs::{BlockingJobs, BlockingPagedJobs, JobFamily, Jobs, PagedJobs};
pub use jobs::{
    ActionResponse, JobPageResponse, JobResponse, JobStatusResponse, PaginatedJobResponse,
    StartJobResponse,
};

// Polling
pub use polling::{PageProgress, PageSource, PollPolicy, RetryPolicy, Sleeper, WaitOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
