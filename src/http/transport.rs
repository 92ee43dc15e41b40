// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport traits consumed by the job services

use async_trait::async_trait;
use serde_json::Value;

use super::response::ApiResponse;
use crate::error::Result;

/// Awaitable API transport
///
/// Paths are relative to the configured base URL, e.g. `/scrape/job_1`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET path?query`
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse>;

    /// `POST path` with a JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse>;

    /// `PUT path` without a body
    async fn put(&self, path: &str) -> Result<ApiResponse>;
}

/// Blocking API transport
pub trait BlockingTransport: Send + Sync {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse>;

    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse>;

    fn put(&self, path: &str) -> Result<ApiResponse>;
}

impl<T: BlockingTransport + ?Sized> BlockingTransport for &T {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        (**self).get(path, query)
    }

    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        (**self).post(path, body)
    }

    fn put(&self, path: &str) -> Result<ApiResponse> {
        (**self).put(path)
    }
}

/// Presents a blocking transport as an awaitable one.
///
/// The returned futures finish their I/O on the first poll, so they are
/// only meant to be driven by `futures::executor::block_on`.
#[derive(Debug, Clone)]
pub struct BlockOn<T>(pub T);

#[async_trait]
impl<T: BlockingTransport> Transport for BlockOn<T> {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        self.0.get(path, query)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.0.post(path, body)
    }

    async fn put(&self, path: &str) -> Result<ApiResponse> {
        self.0.put(path)
    }
}
