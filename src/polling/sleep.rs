// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Suspension primitives used between attempts, checks and pages

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Suspend-for-duration capability
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend the current call chain for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Cooperative sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Blocking sleeper that parks the calling thread
///
/// Only meant for futures driven by [`futures::executor::block_on`]; inside
/// an async runtime it would stall the worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

#[async_trait]
impl Sleeper for ThreadSleeper {
    async fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[async_trait]
impl<S: Sleeper + ?Sized> Sleeper for Arc<S> {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}
