// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response models shared by every job family

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Answer of a start call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartJobResponse {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StartJobResponse {
    /// Job id, if the service returned a non-empty one
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Answer of a status call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub status: String,
}

/// Answer of a stop call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full result of a non-paginated job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    #[serde(default)]
    pub job_id: String,
    pub status: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of a paginated job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPageResponse {
    #[serde(default)]
    pub job_id: String,
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub current_page_batch: u32,
    #[serde(default)]
    pub total_page_batches: u32,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub batch_size: Option<u32>,
}

/// Every page of a paginated job, merged in page order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedJobResponse {
    pub job_id: String,
    pub status: String,
    pub data: Vec<Value>,
    pub error: Option<String>,
    pub current_page_batch: u32,
    pub total_page_batches: u32,
    pub total_pages: Option<u32>,
    pub batch_size: Option<u32>,
}

impl PaginatedJobResponse {
    /// Empty aggregate (page 0 of 0) for a job that reached `status`
    pub fn new(job_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    /// Append a page's items and take over its counters
    pub fn merge_page(&mut self, page: JobPageResponse) {
        self.data.extend(page.data);
        if !page.status.is_empty() {
            self.status = page.status;
        }
        if page.error.is_some() {
            self.error = page.error;
        }
        self.current_page_batch = page.current_page_batch;
        self.total_page_batches = page.total_page_batches;
        if page.total_pages.is_some() {
            self.total_pages = page.total_pages;
        }
        if page.batch_size.is_some() {
            self.batch_size = page.batch_size;
        }
    }

    /// Whether the last merged page was the final one
    pub fn is_complete(&self) -> bool {
        self.current_page_batch >= self.total_page_batches
    }
}

impl From<JobPageResponse> for PaginatedJobResponse {
    fn from(page: JobPageResponse) -> Self {
        let mut aggregate = PaginatedJobResponse::new(page.job_id.clone(), page.status.clone());
        aggregate.merge_page(page);
        aggregate
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_start_response_job_id() {
        let started: StartJobResponse =
            serde_json::from_value(json!({"jobId": "job_123"})).unwrap();
        assert_eq!(started.job_id(), Some("job_123"));

        let empty: StartJobResponse = serde_json::from_value(json!({"jobId": ""})).unwrap();
        assert_eq!(empty.job_id(), None);

        let missing: StartJobResponse = serde_json::from_value(json!({"ok": true})).unwrap();
        assert_eq!(missing.job_id(), None);
        assert_eq!(missing.extra.get("ok"), Some(&json!(true)));
    }

    #[test]
    fn test_page_response_camel_case() {
        let page: JobPageResponse = serde_json::from_value(json!({
            "jobId": "job_1",
            "status": "completed",
            "data": null,
            "currentPageBatch": 0,
            "totalPageBatches": 0
        }))
        .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.current_page_batch, 0);
        assert_eq!(page.total_page_batches, 0);
    }

    #[test]
    fn test_merge_pages_in_order() {
        let mut aggregate = PaginatedJobResponse::new("job_1", "completed");
        assert_eq!((aggregate.current_page_batch, aggregate.total_page_batches), (0, 0));

        for (i, item) in ["x", "y", "z"].into_iter().enumerate() {
            aggregate.merge_page(JobPageResponse {
                job_id: "job_1".to_string(),
                status: "completed".to_string(),
                data: vec![json!(item)],
                error: None,
                current_page_batch: i as u32 + 1,
                total_page_batches: 3,
                total_pages: Some(3),
                batch_size: Some(1),
            });
        }

        assert_eq!(aggregate.data, vec![json!("x"), json!("y"), json!("z")]);
        assert!(aggregate.is_complete());
        assert_eq!(aggregate.total_pages, Some(3));
    }

    #[test]
    fn test_job_response_keeps_extra_fields() {
        let resp: JobResponse = serde_json::from_value(json!({
            "jobId": "task_1",
            "status": "stopped",
            "data": {"finalResult": "done"},
            "liveUrl": "https://live.example/abc"
        }))
        .unwrap();

        assert_eq!(resp.status, "stopped");
        assert_eq!(resp.extra.get("liveUrl"), Some(&json!("https://live.example/abc")));
    }
}
