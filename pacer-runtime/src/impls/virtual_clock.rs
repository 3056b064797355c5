// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Manually advanced scheduler for deterministic tests and simulations.
//!
//! Nothing happens on its own: jobs run only while [`VirtualScheduler::advance`],
//! [`VirtualScheduler::advance_to`] or [`VirtualScheduler::run_until_idle`] is
//! executing, on the calling thread.
//!
//! # Example
//!
//! ```
//! use pacer_runtime::impls::virtual_clock::VirtualScheduler;
//! use pacer_runtime::scheduler::Scheduler;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&fired);
//!
//! scheduler.schedule(Duration::from_millis(300), Box::new(move || flag.store(true, Ordering::SeqCst)));
//!
//! scheduler.advance(Duration::from_millis(299));
//! assert!(!fired.load(Ordering::SeqCst));
//!
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.load(Ordering::SeqCst));
//! ```

use crate::scheduler::{Job, Scheduler};
use crate::timer::Timer;
use core::fmt;
use core::ops::{Add, Sub};
use core::time::Duration;
use pacer_core::TimerToken;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Point on a [`VirtualScheduler`] clock, measured from its origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    pub const ORIGIN: Self = Self(Duration::ZERO);

    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Time elapsed between the clock origin and this instant.
    pub const fn since_origin(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for VirtualInstant {
    type Output = Self;

    /// Saturates at `Duration::MAX`, so an unbounded delay parks the job
    /// in the far future instead of overflowing.
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub<VirtualInstant> for VirtualInstant {
    type Output = Duration;

    /// Saturates at zero, like `tokio::time::Instant`.
    fn sub(self, rhs: VirtualInstant) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

/// Scheduler driven by an explicit virtual clock.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    inner: Arc<Mutex<VirtualState>>,
}

#[derive(Default)]
struct VirtualState {
    now: VirtualInstant,
    next_id: u64,
    queue: BTreeMap<(VirtualInstant, u64), Job>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock origin.
    pub fn elapsed(&self) -> Duration {
        self.inner.lock().now.since_origin()
    }

    /// Number of jobs waiting to run.
    pub fn pending_jobs(&self) -> usize {
        self.inner.lock().queue.len()
    }

    /// Deadline of the earliest waiting job.
    pub fn next_deadline(&self) -> Option<VirtualInstant> {
        self.inner
            .lock()
            .queue
            .keys()
            .next()
            .map(|(deadline, _)| *deadline)
    }

    /// Move the clock forward by `by`, running every job that falls due.
    ///
    /// The clock stops at the far end of its range rather than wrapping.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Move the clock forward to `target`, running every job that falls due.
    ///
    /// While a job runs, the clock reads that job's deadline. Jobs scheduled
    /// by a running job are picked up in the same pass if they fall due
    /// before `target`. The clock never moves backwards.
    pub fn advance_to(&self, target: VirtualInstant) {
        while let Some(job) = self.pop_due(target) {
            job();
        }

        let mut state = self.inner.lock();
        if state.now < target {
            state.now = target;
        }
    }

    /// Run jobs until the queue is empty, advancing the clock as needed.
    ///
    /// Does not return if jobs keep rescheduling themselves.
    pub fn run_until_idle(&self) {
        while let Some(deadline) = self.next_deadline() {
            self.advance_to(deadline);
        }
    }

    fn pop_due(&self, target: VirtualInstant) -> Option<Job> {
        let mut state = self.inner.lock();
        let entry = state.queue.first_entry()?;
        if entry.key().0 > target {
            return None;
        }

        let ((deadline, id), job) = entry.remove_entry();
        if state.now < deadline {
            state.now = deadline;
        }
        pacer_core::trace!("virtual clock: running job {} at {:?}", id, deadline);
        Some(job)
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &state.now)
            .field("pending_jobs", &state.queue.len())
            .finish()
    }
}

impl Timer for VirtualScheduler {
    type Instant = VirtualInstant;

    fn now(&self) -> Self::Instant {
        self.inner.lock().now
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> TimerToken {
        let mut state = self.inner.lock();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now + delay;
        state.queue.insert((deadline, id), job);
        TimerToken::new(id)
    }

    fn cancel(&self, token: TimerToken) -> bool {
        let mut state = self.inner.lock();
        let key = state
            .queue
            .keys()
            .find(|(_, id)| *id == token.id())
            .copied();
        key.and_then(|key| state.queue.remove(&key)).is_some()
    }
}
