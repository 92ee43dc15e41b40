// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Sequential page collection into a caller-owned aggregate

use std::time::Duration;

use async_trait::async_trait;

use super::deadline::Deadline;
use super::options::RetryPolicy;
use super::retry::retry;
use super::sleep::Sleeper;
use crate::error::Result;

/// Position of one fetched page within the whole result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageProgress {
    /// 1-based index of the fetched page (0 for an empty result)
    pub current: u32,
    /// Pages reported by the most recent fetch
    pub total: u32,
}

impl PageProgress {
    pub fn new(current: u32, total: u32) -> Self {
        Self { current, total }
    }

    /// Whether no further page should be requested
    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }
}

/// The three operations the collector needs from a paginated job
///
/// The source owns the aggregate: [`PageSource::on_page`] merges each page
/// into it, so a failed collection never hands out a partial result.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// One page of results
    type Page: Send;

    /// Fetch page `page` (1-based)
    async fn fetch_page(&self, page: u32) -> Result<Self::Page>;

    /// Read the page counters off a fetched page
    fn read_progress(&self, page: &Self::Page) -> PageProgress;

    /// Merge a fetched page into the aggregate
    fn on_page(&mut self, page: Self::Page);
}

/// Fetch pages 1, 2, ... through the retry engine and merge each one, until
/// a page reports `current >= total`.
///
/// Returns the number of pages merged. The wait budget starts when
/// collection begins and is checked before every page fetch.
pub async fn collect_pages<P, S>(
    operation: &str,
    source: &mut P,
    max_wait: Option<Duration>,
    policy: &RetryPolicy,
    sleeper: &S,
) -> Result<u32>
where
    P: PageSource + ?Sized,
    S: Sleeper + ?Sized,
{
    let deadline = Deadline::start(max_wait);
    let mut page = 1;

    loop {
        deadline.check(operation)?;

        let label = format!("Fetching page batch {page} for {operation}");
        let fetched = {
            let source = &*source;
            retry(&label, policy, sleeper, || source.fetch_page(page)).await?
        };

        let progress = source.read_progress(&fetched);
        source.on_page(fetched);
        tracing::debug!(
            operation,
            page,
            current = progress.current,
            total = progress.total,
            "Merged page batch"
        );

        if progress.is_last() {
            return Ok(page);
        }
        page += 1;
    }
}
