// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-family job constants

/// Terminal statuses of scrape, extract, crawl and batch jobs
pub const JOB_TERMINAL_STATUSES: &[&str] = &["completed", "failed"];

/// Terminal statuses of agent tasks
pub const AGENT_TERMINAL_STATUSES: &[&str] = &["completed", "failed", "stopped"];

/// Everything the job services need to know about one kind of job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobFamily {
    /// Short name, also accepted on the command line
    pub name: &'static str,
    /// Route prefix of the family's endpoints
    pub route_prefix: &'static str,
    /// Status values after which the job never changes again
    pub terminal_statuses: &'static [&'static str],
    /// Error message when the start call returns no job id
    pub start_error: &'static str,
    /// Prefix of the operation label used in diagnostics
    pub label_prefix: &'static str,
    /// Results are fetched page by page
    pub paginated: bool,
    /// Supports `PUT {prefix}/{id}/stop`
    pub stoppable: bool,
}

impl JobFamily {
    pub const SCRAPE: JobFamily = JobFamily {
        name: "scrape",
        route_prefix: "/scrape",
        terminal_statuses: JOB_TERMINAL_STATUSES,
        start_error: "Failed to start scrape job",
        label_prefix: "scrape job ",
        paginated: false,
        stoppable: false,
    };

    pub const EXTRACT: JobFamily = JobFamily {
        name: "extract",
        route_prefix: "/extract",
        terminal_statuses: JOB_TERMINAL_STATUSES,
        start_error: "Failed to start extract job",
        label_prefix: "extract job ",
        paginated: false,
        stoppable: false,
    };

    pub const CRAWL: JobFamily = JobFamily {
        name: "crawl",
        route_prefix: "/crawl",
        terminal_statuses: JOB_TERMINAL_STATUSES,
        start_error: "Failed to start crawl job",
        label_prefix: "crawl job ",
        paginated: true,
        stoppable: false,
    };

    pub const BATCH_SCRAPE: JobFamily = JobFamily {
        name: "batch-scrape",
        route_prefix: "/scrape/batch",
        terminal_statuses: JOB_TERMINAL_STATUSES,
        start_error: "Failed to start batch scrape job",
        label_prefix: "batch scrape job ",
        paginated: true,
        stoppable: false,
    };

    pub const BROWSER_AGENT: JobFamily = JobFamily {
        name: "browser-agent",
        route_prefix: "/task/browser-agent",
        terminal_statuses: AGENT_TERMINAL_STATUSES,
        start_error: "Failed to start browser agent task",
        label_prefix: "browser agent task ",
        paginated: false,
        stoppable: true,
    };

    pub const COMPUTER_AGENT: JobFamily = JobFamily {
        name: "computer-agent",
        route_prefix: "/task/computer-agent",
        terminal_statuses: AGENT_TERMINAL_STATUSES,
        start_error: "Failed to start computer agent task",
        label_prefix: "computer agent task ",
        paginated: false,
        stoppable: true,
    };

    /// Every known family
    pub const ALL: [JobFamily; 6] = [
        Self::SCRAPE,
        Self::EXTRACT,
        Self::CRAWL,
        Self::BATCH_SCRAPE,
        Self::BROWSER_AGENT,
        Self::COMPUTER_AGENT,
    ];

    /// Look a family up by its short name
    pub fn from_name(name: &str) -> Option<JobFamily> {
        Self::ALL.into_iter().find(|family| family.name == name)
    }

    /// Diagnostic label for one job of this family
    pub fn operation_label(&self, job_id: &str) -> String {
        format!("{}{}", self.label_prefix, job_id)
    }

    /// Whether `status` ends the job
    pub fn is_terminal(&self, status: &str) -> bool {
        self.terminal_statuses.iter().any(|s| *s == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_sets_differ_per_family() {
        assert!(JobFamily::SCRAPE.is_terminal("completed"));
        assert!(JobFamily::SCRAPE.is_terminal("failed"));
        assert!(!JobFamily::SCRAPE.is_terminal("stopped"));
        assert!(!JobFamily::CRAWL.is_terminal("running"));
        assert!(JobFamily::BROWSER_AGENT.is_terminal("stopped"));
    }

    #[test]
    fn test_operation_label() {
        assert_eq!(JobFamily::CRAWL.operation_label("job_123"), "crawl job job_123");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(JobFamily::from_name("batch-scrape"), Some(JobFamily::BATCH_SCRAPE));
        assert_eq!(JobFamily::from_name("nope"), None);
        for family in JobFamily::ALL {
            assert_eq!(JobFamily::from_name(family.name), Some(family));
        }
    }
}
