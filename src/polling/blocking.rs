// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Blocking-thread variants of the polling engines
//!
//! Each function drives the async engine to completion on the calling
//! thread with [`ThreadSleeper`], so both modes share one algorithm. Do not
//! call these from inside an async runtime.

use std::fmt::Debug;
use std::future;
use std::time::Duration;

use async_trait::async_trait;
use futures::executor::block_on;

use super::options::{PollPolicy, RetryPolicy};
use super::paginate::{PageProgress, PageSource};
use super::sleep::ThreadSleeper;
use crate::error::Result;

/// Blocking [`super::retry`]
pub fn retry<T, F>(operation: &str, policy: &RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    block_on(super::retry(operation, policy, &ThreadSleeper, || {
        future::ready(op())
    }))
}

/// Blocking [`super::poll_until_terminal`]
pub fn poll_until_terminal<St, F, P>(
    operation: &str,
    policy: &PollPolicy,
    mut get_status: F,
    is_terminal: P,
) -> Result<St>
where
    St: Debug,
    F: FnMut() -> Result<St>,
    P: Fn(&St) -> bool,
{
    block_on(super::poll_until_terminal(
        operation,
        policy,
        &ThreadSleeper,
        || future::ready(get_status()),
        is_terminal,
    ))
}

/// Synchronous counterpart of [`PageSource`]
pub trait BlockingPageSource: Send + Sync {
    type Page: Send;

    fn fetch_page(&self, page: u32) -> Result<Self::Page>;

    fn read_progress(&self, page: &Self::Page) -> PageProgress;

    fn on_page(&mut self, page: Self::Page);
}

struct Blocking<'a, P: ?Sized>(&'a mut P);

#[async_trait]
impl<'a, P> PageSource for Blocking<'a, P>
where
    P: BlockingPageSource + ?Sized,
{
    type Page = P::Page;

    async fn fetch_page(&self, page: u32) -> Result<Self::Page> {
        self.0.fetch_page(page)
    }

    fn read_progress(&self, page: &Self::Page) -> PageProgress {
        self.0.read_progress(page)
    }

    fn on_page(&mut self, page: Self::Page) {
        self.0.on_page(page);
    }
}

/// Blocking [`super::collect_pages`]
pub fn collect_pages<P>(
    operation: &str,
    source: &mut P,
    max_wait: Option<Duration>,
    policy: &RetryPolicy,
) -> Result<u32>
where
    P: BlockingPageSource + ?Sized,
{
    let mut adapter = Blocking(source);
    block_on(super::collect_pages(
        operation,
        &mut adapter,
        max_wait,
        policy,
        &ThreadSleeper,
    ))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Instant;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_blocking_retry_sleeps_between_attempts() {
        let calls = Cell::new(0u32);
        let start = Instant::now();

        let value = retry("op", &RetryPolicy::new(3, Duration::from_millis(20)), || {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Err(Error::network("flaky"))
            } else {
                Ok("done")
            }
        })
        .unwrap();

        assert_eq!(value, "done");
        assert_eq!(calls.get(), 3);
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_blocking_poll_matches_async_semantics() {
        let mut statuses = vec!["completed", "pending", "pending"];
        let policy = PollPolicy {
            interval: Duration::from_millis(1),
            max_wait: Some(Duration::from_secs(5)),
            max_failures: 2,
        };

        let status = poll_until_terminal(
            "scrape job job_1",
            &policy,
            || Ok(statuses.pop().expect("script exhausted").to_string()),
            |s: &String| s == "completed",
        )
        .unwrap();

        assert_eq!(status, "completed");
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_blocking_poll_failure_cap() {
        let calls = Cell::new(0u32);
        let policy = PollPolicy {
            interval: Duration::from_millis(1),
            max_wait: None,
            max_failures: 3,
        };

        let err = poll_until_terminal(
            "scrape job job_2",
            &policy,
            || {
                calls.set(calls.get() + 1);
                Err::<String, _>(Error::network("down"))
            },
            |s: &String| s == "completed",
        )
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        assert!(matches!(err, Error::PollFailures { failures: 3, .. }));
    }

    #[test]
    fn test_blocking_poll_times_out() {
        let calls = Cell::new(0u32);
        let policy = PollPolicy {
            interval: Duration::from_millis(10),
            max_wait: Some(Duration::from_millis(50)),
            max_failures: 5,
        };
        let start = Instant::now();

        let err = poll_until_terminal(
            "browser agent task task_1",
            &policy,
            || {
                calls.set(calls.get() + 1);
                Ok("running".to_string())
            },
            |s: &String| s == "completed",
        )
        .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.operation(), Some("browser agent task task_1"));
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert!(calls.get() >= 2);
    }

    struct Letters {
        pages: Vec<&'static str>,
        merged: Vec<&'static str>,
    }

    impl BlockingPageSource for Letters {
        type Page = (u32, &'static str);

        fn fetch_page(&self, page: u32) -> Result<Self::Page> {
            Ok((page, self.pages[page as usize - 1]))
        }

        fn read_progress(&self, page: &Self::Page) -> PageProgress {
            PageProgress::new(page.0, self.pages.len() as u32)
        }

        fn on_page(&mut self, page: Self::Page) {
            self.merged.push(page.1);
        }
    }

    #[test]
    fn test_blocking_collect_pages() {
        let mut source = Letters {
            pages: vec!["x", "y", "z"],
            merged: Vec::new(),
        };

        let pages =
            collect_pages("crawl job job_3", &mut source, None, &RetryPolicy::default()).unwrap();

        assert_eq!(pages, 3);
        assert_eq!(source.merged, vec!["x", "y", "z"]);
    }
}
