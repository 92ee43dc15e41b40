// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Job service for families whose result is spread over pages

use async_trait::async_trait;
use serde::Serialize;

use super::family::JobFamily;
use super::models::{JobPageResponse, JobStatusResponse, PaginatedJobResponse, StartJobResponse};
use super::service::Jobs;
use crate::error::Result;
use crate::http::{routes, Transport};
use crate::polling::{
    collect_pages, retry, PageProgress, PageSource, Sleeper, TokioSleeper, WaitOptions,
};

/// Calls for one paginated job family over an awaitable transport
pub struct PagedJobs<'c, T: ?Sized, S = TokioSleeper> {
    jobs: Jobs<'c, T, S>,
}

impl<'c, T, S> PagedJobs<'c, T, S>
where
    T: Transport + ?Sized,
    S: Sleeper,
{
    /// Create a paginated job service
    pub fn new(transport: &'c T, sleeper: S, family: JobFamily) -> Self {
        Self {
            jobs: Jobs::new(transport, sleeper, family),
        }
    }

    /// Family served by this service
    pub fn family(&self) -> &JobFamily {
        self.jobs.family()
    }

    /// Start a job without waiting for it
    pub async fn start<P>(&self, params: &P) -> Result<StartJobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.jobs.start(params).await
    }

    /// Current status of a job
    pub async fn get_status(&self, job_id: &str) -> Result<JobStatusResponse> {
        self.jobs.get_status(job_id).await
    }

    /// Fetch one page of results. Without `page` the service picks the first.
    pub async fn get_page(
        &self,
        job_id: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<JobPageResponse> {
        let family = self.jobs.family();
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = page_size {
            query.push(("batchSize", size.to_string()));
        }

        self.jobs
            .transport()
            .get(&routes::job(family.route_prefix, job_id), &query)
            .await?
            .parse(&family.operation_label(job_id))
    }

    /// Start a job, poll it to a terminal status and gather its result.
    ///
    /// With `options.return_all_pages` every page is merged into one
    /// response; otherwise the first fetch is returned as-is.
    pub async fn start_and_wait<P>(
        &self,
        params: &P,
        options: &WaitOptions,
    ) -> Result<PaginatedJobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        let job_id = self.jobs.start_job(params).await?;
        let label = self.family().operation_label(&job_id);

        let status = self.jobs.wait_for_terminal(&job_id, &label, options).await?;

        if !options.return_all_pages {
            let page = retry(
                &format!("Fetching {label}"),
                &options.retry_policy(),
                self.jobs.sleeper(),
                || self.get_page(&job_id, None, options.page_size),
            )
            .await?;
            return Ok(page.into());
        }

        let mut pages = JobPages {
            service: self,
            job_id: &job_id,
            page_size: options.page_size,
            aggregate: PaginatedJobResponse::new(job_id.as_str(), status),
        };
        collect_pages(
            &label,
            &mut pages,
            options.max_wait,
            &options.retry_policy(),
            self.jobs.sleeper(),
        )
        .await?;

        Ok(pages.aggregate)
    }
}

/// Page source filling one job's aggregate
struct JobPages<'a, 'c, T: ?Sized, S> {
    service: &'a PagedJobs<'c, T, S>,
    job_id: &'a str,
    page_size: Option<u32>,
    aggregate: PaginatedJobResponse,
}

#[async_trait]
impl<'a, 'c, T, S> PageSource for JobPages<'a, 'c, T, S>
where
    T: Transport + ?Sized,
    S: Sleeper,
{
    type Page = JobPageResponse;

    async fn fetch_page(&self, page: u32) -> Result<JobPageResponse> {
        self.service
            .get_page(self.job_id, Some(page), self.page_size)
            .await
    }

    fn read_progress(&self, page: &JobPageResponse) -> PageProgress {
        PageProgress::new(page.current_page_batch, page.total_page_batches)
    }

    fn on_page(&mut self, page: JobPageResponse) {
        self.aggregate.merge_page(page);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::{json, Value};

    use super::*;
    use crate::error::Error;
    use crate::testing::{RecordingSleeper, ScriptedTransport};

    type TestJobs<'c> = PagedJobs<'c, ScriptedTransport, Arc<RecordingSleeper>>;

    fn fast() -> WaitOptions {
        WaitOptions::new()
            .poll_interval(Duration::from_millis(5))
            .retry(2, Duration::from_millis(1))
    }

    fn jobs(transport: &ScriptedTransport, family: JobFamily) -> TestJobs<'_> {
        PagedJobs::new(transport, Arc::new(RecordingSleeper::default()), family)
    }

    fn page(current: u32, total: u32, data: Value) -> Value {
        json!({
            "jobId": "job_1",
            "status": "completed",
            "data": data,
            "currentPageBatch": current,
            "totalPageBatches": total,
            "totalPages": total,
            "batchSize": 1
        })
    }

    fn started(transport: &ScriptedTransport) {
        transport
            .respond("POST /crawl", json!({"jobId": "job_1"}))
            .respond("GET /crawl/job_1/status", json!({"status": "running"}))
            .respond("GET /crawl/job_1/status", json!({"status": "completed"}));
    }

    #[tokio::test]
    async fn test_merges_all_pages_in_order() {
        let transport = ScriptedTransport::new();
        started(&transport);
        transport
            .respond("GET /crawl/job_1?page=1", page(1, 3, json!([{"url": "x"}])))
            .respond("GET /crawl/job_1?page=2", page(2, 3, json!([{"url": "y"}])))
            .respond("GET /crawl/job_1?page=3", page(3, 3, json!([{"url": "z"}])));
        let crawl = jobs(&transport, JobFamily::CRAWL);

        let result = crawl
            .start_and_wait(&json!({"url": "https://example.com"}), &fast())
            .await
            .unwrap();

        assert_eq!(result.job_id, "job_1");
        assert_eq!(result.status, "completed");
        assert_eq!(
            result.data,
            vec![json!({"url": "x"}), json!({"url": "y"}), json!({"url": "z"})]
        );
        assert_eq!((result.current_page_batch, result.total_page_batches), (3, 3));
        assert_eq!(transport.count("GET /crawl/job_1?page=4"), 0);
    }

    #[tokio::test]
    async fn test_latest_total_decides_when_to_stop() {
        let transport = ScriptedTransport::new();
        started(&transport);
        transport
            .respond("GET /crawl/job_1?page=1", page(1, 5, json!(["x"])))
            .respond("GET /crawl/job_1?page=2", page(2, 2, json!(["y"])))
            .respond("GET /crawl/job_1?page=3", page(3, 5, json!(["z"])));
        let crawl = jobs(&transport, JobFamily::CRAWL);

        let result = crawl.start_and_wait(&json!({}), &fast()).await.unwrap();

        assert_eq!(result.data, vec![json!("x"), json!("y")]);
        assert_eq!((result.current_page_batch, result.total_page_batches), (2, 2));
        assert_eq!(result.total_pages, Some(2));
        assert_eq!(transport.count("GET /crawl/job_1?page=3"), 0);
    }

    #[tokio::test]
    async fn test_empty_result_fetches_one_page() {
        let transport = ScriptedTransport::new();
        started(&transport);
        transport.respond("GET /crawl/job_1?page=1", page(0, 0, Value::Null));
        let crawl = jobs(&transport, JobFamily::CRAWL);

        let result = crawl.start_and_wait(&json!({}), &fast()).await.unwrap();

        assert!(result.data.is_empty());
        assert_eq!(transport.count("GET /crawl/job_1?page=1"), 1);
        assert_eq!(transport.count("GET /crawl/job_1?page=2"), 0);
    }

    #[tokio::test]
    async fn test_first_fetch_only() {
        let transport = ScriptedTransport::new();
        started(&transport);
        transport.respond("GET /crawl/job_1?batchSize=10", page(1, 4, json!(["a"])));
        let crawl = jobs(&transport, JobFamily::CRAWL);

        let options = fast().return_all_pages(false).page_size(10);
        let result = crawl.start_and_wait(&json!({}), &options).await.unwrap();

        assert_eq!(result.data, vec![json!("a")]);
        assert_eq!((result.current_page_batch, result.total_page_batches), (1, 4));
        assert_eq!(
            transport.calls().last().map(String::as_str),
            Some("GET /crawl/job_1?batchSize=10")
        );
    }

    #[tokio::test]
    async fn test_page_failure_returns_no_partial_result() {
        let transport = ScriptedTransport::new();
        started(&transport);
        transport
            .respond("GET /crawl/job_1?page=1", page(1, 3, json!(["x"])))
            .fail("GET /crawl/job_1?page=2", Error::network("reset"))
            .fail("GET /crawl/job_1?page=2", Error::network("reset again"));
        let crawl = jobs(&transport, JobFamily::CRAWL);

        let err = crawl.start_and_wait(&json!({}), &fast()).await.unwrap_err();

        match err {
            Error::AttemptsExhausted {
                operation,
                attempts,
                source,
            } => {
                assert_eq!(operation, "Fetching page batch 2 for crawl job job_1");
                assert_eq!(attempts, 2);
                assert_eq!(source.to_string(), "Network error: reset again");
            }
            other => panic!("Expected AttemptsExhausted, got {other:?}"),
        }
        assert_eq!(transport.count("GET /crawl/job_1?page=3"), 0);
    }

    #[tokio::test]
    async fn test_batch_scrape_uses_its_prefix() {
        let transport = ScriptedTransport::new();
        transport
            .respond("POST /scrape/batch", json!({"jobId": "b1"}))
            .respond("GET /scrape/batch/b1/status", json!({"status": "failed"}))
            .respond(
                "GET /scrape/batch/b1?page=1",
                json!({
                    "jobId": "b1",
                    "status": "failed",
                    "error": "quota",
                    "currentPageBatch": 1,
                    "totalPageBatches": 1
                }),
            );
        let batch = jobs(&transport, JobFamily::BATCH_SCRAPE);

        let result = batch.start_and_wait(&json!({"urls": []}), &fast()).await.unwrap();

        assert_eq!(result.status, "failed");
        assert_eq!(result.error.as_deref(), Some("quota"));
    }
}
