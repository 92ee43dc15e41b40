// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Route builders for job endpoints

/// Suffix of the stop action on stoppable jobs
pub const STOP: &str = "/stop";

/// `{prefix}/{job_id}`
pub fn job(prefix: &str, job_id: &str) -> String {
    format!("{prefix}/{job_id}")
}

/// `{prefix}/{job_id}/status`
pub fn status(prefix: &str, job_id: &str) -> String {
    format!("{prefix}/{job_id}/status")
}

/// `{prefix}/{job_id}{suffix}`
pub fn action(prefix: &str, job_id: &str, suffix: &str) -> String {
    format!("{prefix}/{job_id}{suffix}")
}
