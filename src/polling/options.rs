// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Polling, retry and wait configuration

use std::time::Duration;

/// Default delay between status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default wait budget for a job
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(600);

/// Shared attempt budget for fetch retries and consecutive status failures
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// Default delay between retry attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Retry engine knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_ATTEMPTS,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Create a retry policy
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Attempt budget, never below one
    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Poll engine knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between status checks
    pub interval: Duration,
    /// Wait budget, `None` for unbounded
    pub max_wait: Option<Duration>,
    /// Consecutive status-check failures tolerated
    pub max_failures: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: Some(DEFAULT_MAX_WAIT),
            max_failures: DEFAULT_ATTEMPTS,
        }
    }
}

impl PollPolicy {
    /// Failure cap, never below one
    pub(crate) fn failure_cap(&self) -> u32 {
        self.max_failures.max(1)
    }
}

/// Per-call options for `start_and_wait`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    /// Delay between status checks
    pub poll_interval: Duration,
    /// Wait budget for polling and for page collection, `None` for unbounded
    pub max_wait: Option<Duration>,
    /// Consecutive status-check failures tolerated
    pub max_status_failures: u32,
    /// Attempts per result or page fetch
    pub retry_attempts: u32,
    /// Delay between fetch attempts
    pub retry_delay: Duration,
    /// Drain every page of a paginated job instead of returning the first fetch
    pub return_all_pages: bool,
    /// Batch size requested for each page fetch
    pub page_size: Option<u32>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: Some(DEFAULT_MAX_WAIT),
            max_status_failures: DEFAULT_ATTEMPTS,
            retry_attempts: DEFAULT_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            return_all_pages: true,
            page_size: None,
        }
    }
}

impl WaitOptions {
    /// Create default wait options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set poll interval
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set wait budget
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Wait until the job finishes, however long it takes
    pub fn unbounded(mut self) -> Self {
        self.max_wait = None;
        self
    }

    /// Set consecutive status failure cap
    pub fn max_status_failures(mut self, failures: u32) -> Self {
        self.max_status_failures = failures;
        self
    }

    /// Set fetch retry budget
    pub fn retry(mut self, attempts: u32, delay: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_delay = delay;
        self
    }

    /// Return every page or only the first fetch
    pub fn return_all_pages(mut self, all: bool) -> Self {
        self.return_all_pages = all;
        self
    }

    /// Set page batch size
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Derive the poll engine policy
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: self.poll_interval,
            max_wait: self.max_wait,
            max_failures: self.max_status_failures,
        }
    }

    /// Derive the retry engine policy
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_attempts, self.retry_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WaitOptions::default();
        assert_eq!(options.poll_interval, Duration::from_secs(2));
        assert_eq!(options.max_wait, Some(Duration::from_secs(600)));
        assert_eq!(options.max_status_failures, DEFAULT_ATTEMPTS);
        assert!(options.return_all_pages);
    }

    #[test]
    fn test_builder_derives_policies() {
        let options = WaitOptions::new()
            .poll_interval(Duration::from_millis(10))
            .unbounded()
            .max_status_failures(3)
            .retry(2, Duration::from_millis(1));

        let poll = options.poll_policy();
        assert_eq!(poll.interval, Duration::from_millis(10));
        assert_eq!(poll.max_wait, None);
        assert_eq!(poll.max_failures, 3);

        let retry = options.retry_policy();
        assert_eq!(retry.max_attempts, 2);
        assert_eq!(retry.delay, Duration::from_millis(1));
    }

    #[test]
    fn test_zero_budgets_clamp_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).attempts(), 1);
        let poll = PollPolicy {
            max_failures: 0,
            ..PollPolicy::default()
        };
        assert_eq!(poll.failure_cap(), 1);
    }
}
