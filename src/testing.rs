// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-memory doubles for the transport and sleep capabilities

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::{ApiResponse, BlockingTransport, Transport};
use crate::polling::Sleeper;

/// Records requested sleeps without suspending
#[derive(Debug, Default)]
pub(crate) struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().push(duration);
    }
}

/// Transport answering from per-request queues.
///
/// Requests are keyed as `"GET /crawl/job_1?page=2"`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    script: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a successful answer for `key`
    pub(crate) fn respond(&self, key: &str, data: Value) -> &Self {
        self.push(key, Ok(data))
    }

    /// Queue a failure for `key`
    pub(crate) fn fail(&self, key: &str, error: Error) -> &Self {
        self.push(key, Err(error))
    }

    fn push(&self, key: &str, answer: Result<Value>) -> &Self {
        self.script
            .lock()
            .entry(key.to_string())
            .or_default()
            .push_back(answer);
        self
    }

    /// Every request seen so far, in order
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Number of requests seen for `key`
    pub(crate) fn count(&self, key: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == key).count()
    }

    /// JSON bodies of every POST, in order
    pub(crate) fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().clone()
    }

    fn dispatch(&self, method: &str, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        let mut key = format!("{method} {path}");
        if !query.is_empty() {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            key = format!("{key}?{}", pairs.join("&"));
        }
        self.calls.lock().push(key.clone());

        let answer = self
            .script
            .lock()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        match answer {
            Some(Ok(data)) => Ok(ApiResponse::new(StatusCode::OK, data)),
            Some(Err(err)) => Err(err),
            None => Err(Error::network(format!("no scripted answer for {key}"))),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        self.dispatch("GET", path, query)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.bodies.lock().push(body.clone());
        self.dispatch("POST", path, &[])
    }

    async fn put(&self, path: &str) -> Result<ApiResponse> {
        self.dispatch("PUT", path, &[])
    }
}

impl BlockingTransport for ScriptedTransport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        self.dispatch("GET", path, query)
    }

    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.bodies.lock().push(body.clone());
        self.dispatch("POST", path, &[])
    }

    fn put(&self, path: &str) -> Result<ApiResponse> {
        self.dispatch("PUT", path, &[])
    }
}
