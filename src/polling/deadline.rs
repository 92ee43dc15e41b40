// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Advisory wall-clock budget for polling and pagination

use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Wait budget anchored to the moment a polling or collection round began
///
/// Checked between suspensions only; an in-flight request may run past it.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    max_wait: Option<Duration>,
}

impl Deadline {
    /// Start the clock now. `None` means unbounded.
    pub fn start(max_wait: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            max_wait,
        }
    }

    /// Configured budget
    pub fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }

    /// Time spent since the clock started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whether the elapsed time is past the budget
    pub fn is_exceeded(&self) -> bool {
        match self.max_wait {
            Some(max_wait) => self.elapsed() > max_wait,
            None => false,
        }
    }

    /// Fail with a timeout naming `operation` once the budget is spent
    pub fn check(&self, operation: &str) -> Result<()> {
        match self.max_wait {
            Some(max_wait) if self.is_exceeded() => Err(Error::timeout(operation, max_wait)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_expires() {
        let deadline = Deadline::start(None);
        assert!(!deadline.is_exceeded());
        assert!(deadline.check("crawl job job_1").is_ok());
    }

    #[test]
    fn test_expired_deadline() {
        let deadline = Deadline::start(Some(Duration::from_millis(5)));
        std::thread::sleep(Duration::from_millis(15));

        let err = deadline.check("crawl job job_1").unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.operation(), Some("crawl job job_1"));
    }
}
