// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Delay-coalescing wrapper around a callback.
//!
//! A [`Debounce`] waits for a pause in triggers of at least the configured
//! delay before invoking its callback with the arguments of the latest
//! trigger. If a new trigger arrives before the delay elapses, the pending
//! invocation is cancelled and the delay starts over.
//!
//! This implements **trailing debounce** semantics:
//! - When a trigger arrives, start/restart the timer
//! - If no new trigger arrives before the timer expires, invoke with the latest arguments
//! - If a new trigger arrives, discard the pending arguments and restart the timer
//!
//! The invocation runs on the scheduler, so its outcome is not observable at
//! the trigger site. A panic raised by the callback surfaces wherever the
//! scheduler runs the job.
//!
//! # Example
//!
//! ```
//! use pacer::Debounce;
//! use pacer_runtime::impls::virtual_clock::VirtualScheduler;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let searches = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&searches);
//!
//! let search = Debounce::new(
//!     move |query: String| sink.lock().unwrap().push(query),
//!     Duration::from_millis(300),
//!     scheduler.clone(),
//! );
//!
//! search.trigger("r".to_string());
//! scheduler.advance(Duration::from_millis(100));
//! search.trigger("ru".to_string());
//! scheduler.advance(Duration::from_millis(50));
//! search.trigger("rust".to_string());
//!
//! scheduler.advance(Duration::from_millis(300));
//! assert_eq!(*searches.lock().unwrap(), vec!["rust".to_string()]);
//! ```

use core::fmt;
use core::time::Duration;
use pacer_core::TimerToken;
use pacer_runtime::scheduler::Scheduler;
use parking_lot::Mutex;
use std::sync::Arc;

type Callback<C, A> = Box<dyn Fn(C, A) + Send + Sync + 'static>;

/// Debounced handle onto a callback.
///
/// Clones share the same pending invocation. The pending job keeps the
/// wrapper alive, so dropping every handle does not cancel it; use
/// [`cancel`](Debounce::cancel) for that.
///
/// `C` is the invocation context handed back to the callback unchanged
/// (the receiver the trigger was issued on); `A` is the argument payload.
pub struct Debounce<C, A, S: Scheduler> {
    shared: Arc<Shared<C, A, S>>,
}

struct Shared<C, A, S: Scheduler> {
    callback: Callback<C, A>,
    delay: Duration,
    scheduler: S,
    state: Mutex<DebounceState<C, A>>,
}

struct DebounceState<C, A> {
    /// Identifies the only deferred job allowed to fire.
    generation: u64,
    token: Option<TimerToken>,
    pending: Option<(C, A)>,
}

impl<A, S> Debounce<(), A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    /// Wraps a callback that takes no invocation context.
    ///
    /// # Arguments
    ///
    /// * `callback` - Invoked with the arguments of the last trigger of each burst
    /// * `delay` - The duration of required inactivity before invoking
    /// * `scheduler` - Deferred-execution primitive hosting the pending invocation
    pub fn new<F>(callback: F, delay: Duration, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_context(move |(), args| callback(args), delay, scheduler)
    }

    /// Registers a trigger. Shorthand for `call((), args)`.
    pub fn trigger(&self, args: A) {
        self.call((), args);
    }
}

impl<C, A, S> Debounce<C, A, S>
where
    C: Send + 'static,
    A: Send + 'static,
    S: Scheduler,
{
    /// Wraps a callback that receives the context of each trigger.
    pub fn with_context<F>(callback: F, delay: Duration, scheduler: S) -> Self
    where
        F: Fn(C, A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                callback: Box::new(callback),
                delay,
                scheduler,
                state: Mutex::new(DebounceState {
                    generation: 0,
                    token: None,
                    pending: None,
                }),
            }),
        }
    }

    /// Registers a trigger.
    ///
    /// Cancels any scheduled, not-yet-fired invocation and schedules
    /// `callback(context, args)` to run once `delay` passes without another
    /// call. A zero delay fires on the next scheduler tick.
    pub fn call(&self, context: C, args: A) {
        let generation = {
            let mut state = self.shared.state.lock();
            if let Some(token) = state.token.take() {
                self.shared.scheduler.cancel(token);
                pacer_core::trace!("debounce: cancelled pending {}", token);
            }
            state.generation = state.generation.wrapping_add(1);
            state.pending = Some((context, args));
            state.generation
        };

        let shared = Arc::clone(&self.shared);
        let token = self
            .shared
            .scheduler
            .schedule(self.shared.delay, Box::new(move || shared.fire(generation)));

        let mut state = self.shared.state.lock();
        if state.generation == generation && state.pending.is_some() {
            state.token = Some(token);
            pacer_core::trace!("debounce: scheduled {} after {:?}", token, self.shared.delay);
        } else {
            // Superseded by a concurrent trigger before the token was recorded.
            drop(state);
            self.shared.scheduler.cancel(token);
        }
    }

    /// Drops the pending invocation without running it.
    ///
    /// Returns `true` if an invocation was pending.
    pub fn cancel(&self) -> bool {
        let mut state = self.shared.state.lock();
        let pending = state.pending.take();
        if let Some(token) = state.token.take() {
            self.shared.scheduler.cancel(token);
        }
        state.generation = state.generation.wrapping_add(1);
        pending.is_some()
    }

    /// Runs the pending invocation immediately on the calling thread.
    ///
    /// The scheduled timer is cancelled. Returns `true` if an invocation was
    /// pending. A panic raised by the callback unwinds into the caller.
    pub fn flush(&self) -> bool {
        let pending = {
            let mut state = self.shared.state.lock();
            let pending = state.pending.take();
            if pending.is_some() {
                if let Some(token) = state.token.take() {
                    self.shared.scheduler.cancel(token);
                }
                state.generation = state.generation.wrapping_add(1);
            }
            pending
        };

        match pending {
            Some((context, args)) => {
                (self.shared.callback)(context, args);
                true
            }
            None => false,
        }
    }

    /// Whether an invocation is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.shared.delay
    }
}

impl<C, A, S: Scheduler> Shared<C, A, S> {
    fn fire(&self, generation: u64) {
        let pending = {
            let mut state = self.state.lock();
            if state.generation != generation {
                return;
            }
            state.token = None;
            state.pending.take()
        };

        if let Some((context, args)) = pending {
            pacer_core::trace!("debounce: firing after {:?} of quiet", self.delay);
            (self.callback)(context, args);
        }
    }
}

impl<C, A, S: Scheduler> Clone for Debounce<C, A, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C, A, S: Scheduler> fmt::Debug for Debounce<C, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Debounce")
            .field("delay", &self.shared.delay)
            .field("pending", &state.pending.is_some())
            .field("token", &state.token)
            .finish()
    }
}
