// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Job polling and pagination engine
//!
//! Turns a fire-and-forget job into an awaited result:
//! - [`retry`] - run one idempotent fetch up to a fixed attempt budget
//! - [`poll_until_terminal`] - check status until a terminal value shows up
//! - [`collect_pages`] - drain every result page into a caller-owned aggregate
//!
//! The engines are written once against the [`Sleeper`] capability. The
//! [`blocking`] module drives the same code on the current thread.

pub mod blocking;
mod deadline;
mod options;
mod paginate;
mod poll;
mod retry;
mod sleep;

pub use deadline::Deadline;
pub use options::{
    PollPolicy, RetryPolicy, WaitOptions, DEFAULT_ATTEMPTS, DEFAULT_MAX_WAIT,
    DEFAULT_POLL_INTERVAL, DEFAULT_RETRY_DELAY,
};
pub use paginate::{collect_pages, PageProgress, PageSource};
pub use poll::poll_until_terminal;
pub use retry::retry;
pub use sleep::{Sleeper, ThreadSleeper, TokioSleeper};
