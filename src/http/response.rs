// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API response type and parser

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Decoded answer of one API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Response status code
    pub status: StatusCode,
    /// Decoded JSON body (`Null` for an empty body)
    pub data: Value,
}

impl ApiResponse {
    /// Create a new response
    pub fn new(status: StatusCode, data: Value) -> Self {
        Self { status, data }
    }

    /// Build a response from raw parts.
    ///
    /// Non-success statuses become [`Error::Status`] carrying the API's own
    /// message when the body has one.
    pub fn from_parts(status: StatusCode, url: &str, body: &[u8]) -> Result<Self> {
        let data = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice(body) {
                Ok(data) => data,
                Err(e) if status.is_success() => return Err(Error::Serialization(e)),
                Err(_) => Value::String(String::from_utf8_lossy(body).into_owned()),
            }
        };

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message: error_message(&data, status),
            });
        }

        Ok(Self { status, data })
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body into `T`, naming `operation` on a shape mismatch
    pub fn parse<T: DeserializeOwned>(self, operation: &str) -> Result<T> {
        serde_json::from_value(self.data).map_err(|e| Error::parse(operation, e))
    }
}

fn error_message(data: &Value, status: StatusCode) -> String {
    let from_body = match data {
        Value::Object(map) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    };

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}
