// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Blocking API client

use super::config::ClientConfig;
use crate::error::Result;
use crate::http::BlockingHttpClient;
use crate::jobs::{BlockingJobs, BlockingPagedJobs, JobFamily};

/// Blocking client for the webjobs API
///
/// Must not be used from inside an async runtime.
#[derive(Clone)]
pub struct BlockingClient {
    http: BlockingHttpClient,
}

impl BlockingClient {
    /// Create a client for the default base URL
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new().api_key(api_key))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: BlockingHttpClient::with_config(config)?,
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
    pub fn http(&self) -> &BlockingHttpClient {
        &self.http
    }

    pub fn jobs(&self, family: JobFamily) -> BlockingJobs<'_, BlockingHttpClient> {
        BlockingJobs::new(&self.http, family)
    }

    pub fn paged_jobs(&self, family: JobFamily) -> BlockingPagedJobs<'_, BlockingHttpClient> {
        BlockingPagedJobs::new(&self.http, family)
    }

    pub fn scrape(&self) -> BlockingJobs<'_, BlockingHttpClient> {
        self.jobs(JobFamily::SCRAPE)
    }

    pub fn extract(&self) -> BlockingJobs<'_, BlockingHttpClient> {
        self.jobs(JobFamily::EXTRACT)
    }

    pub fn crawl(&self) -> BlockingPagedJobs<'_, BlockingHttpClient> {
        self.paged_jobs(JobFamily::CRAWL)
    }

    pub fn batch_scrape(&self) -> BlockingPagedJobs<'_, BlockingHttpClient> {
        self.paged_jobs(JobFamily::BATCH_SCRAPE)
    }

    pub fn browser_agent(&self) -> BlockingJobs<'_, BlockingHttpClient> {
        self.jobs(JobFamily::BROWSER_AGENT)
    }

    pub fn computer_agent(&self) -> BlockingJobs<'_, BlockingHttpClient> {
        self.jobs(JobFamily::COMPUTER_AGENT)
    }
}
