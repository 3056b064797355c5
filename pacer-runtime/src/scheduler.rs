// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use core::time::Duration;
use pacer_core::TimerToken;

/// A unit of deferred work.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Deferred-execution primitive.
///
/// A scheduler runs each job once, no earlier than `delay` after it was
/// scheduled, without blocking the caller of [`schedule`](Scheduler::schedule).
/// Jobs whose deadlines expire together run in the order they were scheduled.
///
/// Cancelling a job that has not started is total: the job is dropped and
/// never runs. Cancelling a job that already ran, or an unknown token,
/// returns `false` and has no effect.
pub trait Scheduler: Timer {
    fn schedule(&self, delay: Duration, job: Job) -> TimerToken;

    fn cancel(&self, token: TimerToken) -> bool;
}
