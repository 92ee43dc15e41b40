// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Blocking HTTP client implementation

use std::time::Instant;

use bytes::Bytes;
use reqwest::blocking::Client;
use reqwest::Method;
use serde_json::Value;

use super::response::ApiResponse;
use super::transport::BlockingTransport;
use crate::client::ClientConfig;
use crate::error::Result;

/// Blocking HTTP client for the webjobs API
///
/// Must not be used from inside an async runtime.
#[derive(Clone)]
pub struct BlockingHttpClient {
    client: Client,
    config: ClientConfig,
}

impl BlockingHttpClient {
    /// Create a new blocking client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new blocking client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .default_headers(config.header_map()?)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request against a route
    pub fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let url = self.config.endpoint(path)?;
        let start = Instant::now();

        let mut builder = self.client.request(method.clone(), url.clone());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let body: Bytes = response.bytes()?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "API request finished"
        );

        ApiResponse::from_parts(status, url.as_str(), &body)
    }
}

impl BlockingTransport for BlockingHttpClient {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        self.execute(Method::GET, path, query, None)
    }

    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.execute(Method::POST, path, &[], Some(body))
    }

    fn put(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Method::PUT, path, &[], None)
    }
}
