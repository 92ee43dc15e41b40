// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP transport layer for the webjobs API
//!
//! Provides async and blocking reqwest clients behind the [`Transport`] and
//! [`BlockingTransport`] traits, the [`ApiResponse`] parser, and the route
//! builders used by the job services.

mod blocking;
mod client;
mod response;
pub mod routes;
mod transport;

pub use blocking::BlockingHttpClient;
pub use client::HttpClient;
pub use response::ApiResponse;
pub use transport::{BlockOn, BlockingTransport, Transport};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("webjobs-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP headers used by the clients
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const API_KEY: &str = "x-api-key";
}
