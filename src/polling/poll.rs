// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Status polling until a terminal value is observed

use std::fmt::Debug;
use std::future::Future;

use super::deadline::Deadline;
use super::options::PollPolicy;
use super::sleep::Sleeper;
use crate::error::{Error, Result};

/// Poll `get_status` until `is_terminal` accepts a freshly fetched value.
///
/// Returns that terminal value without fetching it again. The wait budget is
/// checked before every status check, and consecutive check failures reset
/// on each success. Between checks the engine sleeps the full interval
/// regardless of how long the check took.
pub async fn poll_until_terminal<St, F, Fut, P, S>(
    operation: &str,
    policy: &PollPolicy,
    sleeper: &S,
    mut get_status: F,
    is_terminal: P,
) -> Result<St>
where
    St: Debug,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<St>>,
    P: Fn(&St) -> bool,
    S: Sleeper + ?Sized,
{
    let deadline = Deadline::start(policy.max_wait);
    let max_failures = policy.failure_cap();
    let mut failures = 0;
    let mut checks = 0u32;

    loop {
        deadline.check(operation)?;

        checks += 1;
        match get_status().await {
            Ok(status) => {
                failures = 0;
                if is_terminal(&status) {
                    tracing::debug!(operation, checks, status = ?status, "Reached terminal status");
                    return Ok(status);
                }
                tracing::debug!(operation, checks, status = ?status, "Job still running");
            }
            Err(err) => {
                failures += 1;
                tracing::warn!(
                    operation,
                    failures,
                    max_failures,
                    error = %err,
                    "Status check failed"
                );
                if failures >= max_failures {
                    return Err(Error::poll_failures(operation, failures, err));
                }
            }
        }

        sleeper.sleep(policy.interval).await;
    }
}
