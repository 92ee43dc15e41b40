// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Top-level API clients
//!
//! [`Client`] and [`BlockingClient`] own one HTTP transport and hand out a
//! job service per family.

mod blocking;
mod config;

pub use blocking::BlockingClient;
pub use config::{ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};

use crate::error::Result;
use crate::http::HttpClient;
use crate::jobs::{JobFamily, Jobs, PagedJobs};
use crate::polling::TokioSleeper;

/// Async client for the webjobs API
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client for the default base URL
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new().api_key(api_key))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }

    /// Create a client from `WEBJOBS_API_KEY` and `WEBJOBS_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Job service for a family whose result arrives in one fetch
    pub fn jobs(&self, family: JobFamily) -> Jobs<'_, HttpClient> {
        Jobs::new(&self.http, TokioSleeper, family)
    }

    /// Job service for a paginated family
    pub fn paged_jobs(&self, family: JobFamily) -> PagedJobs<'_, HttpClient> {
        PagedJobs::new(&self.http, TokioSleeper, family)
    }

    pub fn scrape(&self) -> Jobs<'_, HttpClient> {
        self.jobs(JobFamily::SCRAPE)
    }

    pub fn extract(&self) -> Jobs<'_, HttpClient> {
        self.jobs(JobFamily::EXTRACT)
    }

    pub fn crawl(&self) -> PagedJobs<'_, HttpClient> {
        self.paged_jobs(JobFamily::CRAWL)
    }

    pub fn batch_scrape(&self) -> PagedJobs<'_, HttpClient> {
        self.paged_jobs(JobFamily::BATCH_SCRAPE)
    }

    pub fn browser_agent(&self) -> Jobs<'_, HttpClient> {
        self.jobs(JobFamily::BROWSER_AGENT)
    }

    pub fn computer_agent(&self) -> Jobs<'_, HttpClient> {
        self.jobs(JobFamily::COMPUTER_AGENT)
    }
}
