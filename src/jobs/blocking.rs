// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Blocking job services
//!
//! Both services wrap the async ones over [`BlockOn`] and drive them with
//! `futures::executor::block_on`, sleeping on the calling thread.

use futures::executor::block_on;
use serde::Serialize;

use super::family::JobFamily;
use super::models::{
    ActionResponse, JobPageResponse, JobResponse, JobStatusResponse, PaginatedJobResponse,
    StartJobResponse,
};
use super::paged::PagedJobs;
use super::service::Jobs;
use crate::error::Result;
use crate::http::{BlockOn, BlockingTransport};
use crate::polling::{ThreadSleeper, WaitOptions};

/// Blocking [`Jobs`]
pub struct BlockingJobs<'c, T: ?Sized> {
    transport: BlockOn<&'c T>,
    family: JobFamily,
}

impl<'c, T> BlockingJobs<'c, T>
where
    T: BlockingTransport + ?Sized,
{
    pub fn new(transport: &'c T, family: JobFamily) -> Self {
        Self {
            transport: BlockOn(transport),
            family,
        }
    }

    pub fn family(&self) -> &JobFamily {
        &self.family
    }

    fn engine(&self) -> Jobs<'_, BlockOn<&'c T>, ThreadSleeper> {
        Jobs::new(&self.transport, ThreadSleeper, self.family)
    }

    /// Start a job without waiting for it
    pub fn start<P>(&self, params: &P) -> Result<StartJobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        block_on(self.engine().start(params))
    }

    /// Current status of a job
    pub fn get_status(&self, job_id: &str) -> Result<JobStatusResponse> {
        block_on(self.engine().get_status(job_id))
    }

    /// Result of a job in its current state
    pub fn get(&self, job_id: &str) -> Result<JobResponse> {
        block_on(self.engine().get(job_id))
    }

    /// Ask the service to stop a running task
    pub fn stop(&self, job_id: &str) -> Result<ActionResponse> {
        block_on(self.engine().stop(job_id))
    }

    /// Start a job, poll it to a terminal status and fetch its result
    pub fn start_and_wait<P>(&self, params: &P, options: &WaitOptions) -> Result<JobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        block_on(self.engine().start_and_wait(params, options))
    }
}

/// Blocking [`PagedJobs`]
pub struct BlockingPagedJobs<'c, T: ?Sized> {
    transport: BlockOn<&'c T>,
    family: JobFamily,
}

impl<'c, T> BlockingPagedJobs<'c, T>
where
    T: BlockingTransport + ?Sized,
{
    pub fn new(transport: &'c T, family: JobFamily) -> Self {
        Self {
            transport: BlockOn(transport),
            family,
        }
    }

    pub fn family(&self) -> &JobFamily {
        &self.family
    }

    fn engine(&self) -> PagedJobs<'_, BlockOn<&'c T>, ThreadSleeper> {
        PagedJobs::new(&self.transport, ThreadSleeper, self.family)
    }

    /// Start a job without waiting for it
    pub fn start<P>(&self, params: &P) -> Result<StartJobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        block_on(self.engine().start(params))
    }

    /// Current status of a job
    pub fn get_status(&self, job_id: &str) -> Result<JobStatusResponse> {
        block_on(self.engine().get_status(job_id))
    }

    /// Fetch one page of results
    pub fn get_page(
        &self,
        job_id: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<JobPageResponse> {
        block_on(self.engine().get_page(job_id, page, page_size))
    }

    /// Start a job, poll it to a terminal status and gather its pages
    pub fn start_and_wait<P>(
        &self,
        params: &P,
        options: &WaitOptions,
    ) -> Result<PaginatedJobResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        block_on(self.engine().start_and_wait(params, options))
    }
}
