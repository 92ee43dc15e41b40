// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Job orchestration per family
//!
//! A job is started with one call, polled until its status is terminal and
//! then fetched, either in one response ([`Jobs`]) or page by page
//! ([`PagedJobs`]).

mod blocking;
mod family;
mod models;
mod paged;
mod service;

pub use blocking::{BlockingJobs, BlockingPagedJobs};
pub use family::{JobFamily, AGENT_TERMINAL_STATUSES, JOB_TERMINAL_STATUSES};
pub use models::{
    ActionResponse, JobPageResponse, JobResponse, JobStatusResponse, PaginatedJobResponse,
    StartJobResponse,
};
pub use paged::PagedJobs;
pub use service::Jobs;
