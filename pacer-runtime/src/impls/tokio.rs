// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

#[cfg(feature = "runtime-tokio")]
use crate::{
    scheduler::{Job, Scheduler},
    timer::Timer,
};

#[cfg(feature = "runtime-tokio")]
use pacer_core::{PacerError, Result, TimerToken};

#[cfg(feature = "runtime-tokio")]
use tokio::{runtime::Handle, task::AbortHandle};

/// Scheduler that runs each deferred job on its own Tokio task.
///
/// The clock is `tokio::time::Instant`, so tests can freeze and advance time
/// with `tokio::time::pause` and `tokio::time::advance`.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
    registry: Arc<Registry>,
}

#[cfg(feature = "runtime-tokio")]
#[derive(Debug, Default)]
struct Registry {
    next_id: AtomicU64,
    tasks: parking_lot::Mutex<HashMap<u64, AbortHandle>>,
}

#[cfg(feature = "runtime-tokio")]
impl TokioScheduler {
    /// Scheduler bound to the runtime of the calling context.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, like `tokio::spawn`.
    pub fn current() -> Self {
        Self::with_handle(Handle::current())
    }

    /// Scheduler bound to the runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::RuntimeUnavailable`] when no Tokio runtime is running.
    pub fn try_current() -> Result<Self> {
        Handle::try_current()
            .map(Self::with_handle)
            .map_err(|err| PacerError::runtime_unavailable(err.to_string()))
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            registry: Arc::new(Registry::default()),
        }
    }

    /// Number of jobs scheduled but not yet run or cancelled.
    ///
    /// A job whose runtime shuts down before its delay elapses is never run
    /// and stays counted here, because its task is dropped without reaching
    /// the registry cleanup.
    pub fn pending_jobs(&self) -> usize {
        self.registry.tasks.lock().len()
    }
}

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioScheduler {
    type Instant = tokio::time::Instant;

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> TimerToken {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let registry = Arc::clone(&self.registry);

        // Registered before the task can observe the map.
        let mut tasks = self.registry.tasks.lock();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let armed = registry.tasks.lock().remove(&id).is_some();
            if armed {
                job();
            }
        });
        tasks.insert(id, task.abort_handle());

        TimerToken::new(id)
    }

    fn cancel(&self, token: TimerToken) -> bool {
        let removed = self.registry.tasks.lock().remove(&token.id());
        match removed {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}
