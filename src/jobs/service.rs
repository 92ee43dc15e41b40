// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Job service for families whose result arrives in one fetch

use serde::Serialize;

use super::family::JobFamily;
use super::models::{ActionResponse, JobResponse, JobStatusResponse, StartJobResponse};
use crate::error::{Error, Result};
use crate::http::{routes, Transport};
use crate::polling::{poll_until_terminal, retry, Sleeper, TokioSleeper, WaitOptions};

/// Calls for one job family over an awaitable transport
pub struct Jobs<'c, T: ?Sized, S = TokioSleeper> {
    transport: &'c T,
    sleeper: S,
    family: JobFamily,
}

impl<'c, T, S> Jobs<'c, T, S>
where
    T: Transport + ?Sized,
    S: Sleeper,
{
    /// Create a job service
    pub fn new(transport: &'c T, sleeper: S, family: JobFamily) -> Self {
        Self {
            transport,
            sleeper,
            family,
        }
    }

    /// Family served by this service
    pub fn family(&self) -> &JobFamily {
        &self.family
    }

    pub(crate) fn transport(&self) -> &'c T {
        self.transport
    }

    pub(crate) fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Start a job without waiting for it
    pub async fn start<P>(&self, params: &P) -> Result<StartJobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        let body = serde_json::to_value(params)?;
        self.transport
            .post(self.family.route_prefix, &body)
            .await?
            .parse(&format!("Starting {} job", self.family.name))
    }

    /// Current status of a job
    pub async fn get_status(&self, job_id: &str) -> Result<JobStatusResponse> {
        let route = routes::status(self.family.route_prefix, job_id);
        self.transport
            .get(&route, &[])
            .await?
            .parse(&self.family.operation_label(job_id))
    }

    /// Result of a job in its current state
    pub async fn get(&self, job_id: &str) -> Result<JobResponse> {
        let route = routes::job(self.family.route_prefix, job_id);
        self.transport
            .get(&route, &[])
            .await?
            .parse(&self.family.operation_label(job_id))
    }

    /// Ask the service to stop a running task
    pub async fn stop(&self, job_id: &str) -> Result<ActionResponse> {
        if !self.family.stoppable {
            return Err(Error::config(format!(
                "{} jobs cannot be stopped",
                self.family.name
            )));
        }
        let route = routes::action(self.family.route_prefix, job_id, routes::STOP);
        self.transport
            .put(&route)
            .await?
            .parse(&format!("Stopping {}", self.family.operation_label(job_id)))
    }

    /// Start a job, poll it to a terminal status and fetch its result.
    pub async fn start_and_wait<P>(&self, params: &P, options: &WaitOptions) -> Result<JobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        let job_id = self.start_job(params).await?;
        let label = self.family.operation_label(&job_id);

        self.wait_for_terminal(&job_id, &label, options).await?;

        retry(
            &format!("Fetching {label}"),
            &options.retry_policy(),
            &self.sleeper,
            || self.get(&job_id),
        )
        .await
    }

    /// Start a job and return its id, failing fast when there is none
    pub(crate) async fn start_job<P>(&self, params: &P) -> Result<String>
    where
        P: Serialize + ?Sized + Sync,
    {
        let started = self.start(params).await?;
        let job_id = started
            .job_id()
            .ok_or_else(|| Error::missing_job_id(self.family.start_error))?
            .to_string();

        tracing::info!(family = self.family.name, job_id = %job_id, "Job started");
        Ok(job_id)
    }

    /// Poll a job until this family considers its status terminal
    pub(crate) async fn wait_for_terminal(
        &self,
        job_id: &str,
        label: &str,
        options: &WaitOptions,
    ) -> Result<String> {
        let status = poll_until_terminal(
            label,
            &options.poll_policy(),
            &self.sleeper,
            || async move { self.get_status(job_id).await.map(|resp| resp.status) },
            |status: &String| self.family.is_terminal(status),
        )
        .await?;

        tracing::info!(family = self.family.name, job_id, status = %status, "Job finished");
        Ok(status)
    }
}
