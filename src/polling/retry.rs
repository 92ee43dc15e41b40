// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fixed-delay retry of a single idempotent operation

use std::future::Future;

use super::options::RetryPolicy;
use super::sleep::Sleeper;
use crate::error::{Error, Result};

/// Run `op` until it succeeds or the attempt budget is spent.
///
/// Attempts are numbered from 1 through `policy.max_attempts`. Every failure
/// but the last is followed by exactly one `policy.delay` suspension. The
/// last failure is wrapped in [`Error::AttemptsExhausted`] unless it already
/// names its own operation, in which case it is returned as-is.
pub async fn retry<T, F, Fut, S>(
    operation: &str,
    policy: &RetryPolicy,
    sleeper: &S,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    S: Sleeper + ?Sized,
{
    let max_attempts = policy.attempts();
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(operation, attempt, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) if attempt >= max_attempts => {
                tracing::warn!(operation, attempt, error = %err, "Giving up on operation");
                if err.is_labelled() {
                    return Err(err);
                }
                return Err(Error::attempts_exhausted(operation, max_attempts, err));
            }
            Err(err) => {
                tracing::warn!(
                    operation,
                    attempt,
                    max_attempts,
                    error = %err,
                    "Attempt failed, retrying"
                );
                sleeper.sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}
