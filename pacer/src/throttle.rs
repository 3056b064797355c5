// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Rate-limiting wrapper around a callback.
//!
//! A [`Throttle`] invokes its callback on the first trigger, then drops every
//! trigger until the configured interval has elapsed since that invocation.
//!
//! This implements **leading throttle** semantics:
//! - When a trigger arrives and we are not throttling:
//!   - Invoke the callback immediately, on the caller's thread
//!   - Start the cooldown window
//! - Triggers inside the window are dropped, not queued
//! - There is no trailing-edge replay of the last dropped trigger

use core::fmt;
use core::time::Duration;
use pacer_core::TimerToken;
use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Callback<C, A> = Box<dyn Fn(C, A) + Send + Sync + 'static>;

/// How a [`Throttle`] tracks its cooldown window.
///
/// Both strategies fire on the leading edge and drop triggers inside the
/// window. They differ only for a zero interval: `Flag` still suppresses
/// triggers until the scheduler's next tick, `Timestamp` never suppresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThrottleStrategy {
    /// Set a cooldown flag on each invocation and schedule a job that
    /// clears it after the interval.
    #[default]
    Flag,
    /// Compare the scheduler clock against the last invocation time.
    Timestamp,
}

/// Throttled handle onto a callback.
///
/// Clones share the same cooldown window.
pub struct Throttle<C, A, S: Scheduler> {
    shared: Arc<Shared<C, A, S>>,
}

struct Shared<C, A, S: Scheduler> {
    callback: Callback<C, A>,
    interval: Duration,
    strategy: ThrottleStrategy,
    scheduler: S,
    state: Mutex<ThrottleState<S::Instant>>,
}

struct ThrottleState<I> {
    cooling_down: bool,
    rearm: Option<TimerToken>,
    generation: u64,
    last_fired: Option<I>,
}

impl<A, S> Throttle<(), A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    /// Wraps a context-free callback using [`ThrottleStrategy::Flag`].
    pub fn new<F>(callback: F, interval: Duration, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_context(
            move |(), args| callback(args),
            interval,
            ThrottleStrategy::Flag,
            scheduler,
        )
    }

    /// Wraps a context-free callback using [`ThrottleStrategy::Timestamp`].
    pub fn timestamped<F>(callback: F, interval: Duration, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_context(
            move |(), args| callback(args),
            interval,
            ThrottleStrategy::Timestamp,
            scheduler,
        )
    }

    /// Shorthand for `call((), args)`.
    pub fn trigger(&self, args: A) -> bool {
        self.call((), args)
    }
}

impl<C, A, S> Throttle<C, A, S>
where
    C: Send + 'static,
    A: Send + 'static,
    S: Scheduler,
{
    pub fn with_context<F>(
        callback: F,
        interval: Duration,
        strategy: ThrottleStrategy,
        scheduler: S,
    ) -> Self
    where
        F: Fn(C, A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                callback: Box::new(callback),
                interval,
                strategy,
                scheduler,
                state: Mutex::new(ThrottleState {
                    cooling_down: false,
                    rearm: None,
                    generation: 0,
                    last_fired: None,
                }),
            }),
        }
    }

    /// Registers a trigger.
    ///
    /// Invokes `callback(context, args)` on the calling thread unless the
    /// wrapper is inside its cooldown window, in which case the trigger is
    /// dropped. Returns whether the callback ran. A panic raised by the
    /// callback unwinds into the caller; the window it opened stays open.
    pub fn call(&self, context: C, args: A) -> bool {
        let admitted = match self.shared.strategy {
            ThrottleStrategy::Flag => self.admit_flag(),
            ThrottleStrategy::Timestamp => self.admit_timestamp(),
        };

        if admitted {
            pacer_core::trace!("throttle: firing, window of {:?} opened", self.shared.interval);
            (self.shared.callback)(context, args);
        } else {
            pacer_core::trace!("throttle: trigger dropped inside window");
        }
        admitted
    }

    fn admit_flag(&self) -> bool {
        let generation = {
            let mut state = self.shared.state.lock();
            if state.cooling_down {
                return false;
            }
            state.cooling_down = true;
            state.last_fired = Some(self.shared.scheduler.now());
            state.generation = state.generation.wrapping_add(1);
            state.generation
        };

        let weak = Arc::downgrade(&self.shared);
        let token = self.shared.scheduler.schedule(
            self.shared.interval,
            Box::new(move || Shared::rearm(&weak, generation)),
        );

        let mut state = self.shared.state.lock();
        if state.generation == generation && state.cooling_down {
            state.rearm = Some(token);
        } else {
            drop(state);
            self.shared.scheduler.cancel(token);
        }
        true
    }

    fn admit_timestamp(&self) -> bool {
        let now = self.shared.scheduler.now();
        let mut state = self.shared.state.lock();
        match state.last_fired {
            Some(last) if now - last < self.shared.interval => false,
            _ => {
                state.last_fired = Some(now);
                true
            }
        }
    }

    /// Closes the cooldown window so the next trigger fires immediately.
    pub fn reset(&self) {
        let mut state = self.shared.state.lock();
        state.cooling_down = false;
        state.last_fired = None;
        state.generation = state.generation.wrapping_add(1);
        if let Some(token) = state.rearm.take() {
            self.shared.scheduler.cancel(token);
        }
    }

    /// Whether a trigger issued now would be dropped.
    pub fn is_cooling_down(&self) -> bool {
        let state = self.shared.state.lock();
        match self.shared.strategy {
            ThrottleStrategy::Flag => state.cooling_down,
            ThrottleStrategy::Timestamp => state
                .last_fired
                .is_some_and(|last| self.shared.scheduler.now() - last < self.shared.interval),
        }
    }

    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    pub fn strategy(&self) -> ThrottleStrategy {
        self.shared.strategy
    }
}

impl<C, A, S: Scheduler> Shared<C, A, S> {
    fn rearm(weak: &Weak<Self>, generation: u64) {
        // Wrapper already dropped, nobody left to re-arm.
        let Some(shared) = weak.upgrade() else {
            return;
        };

        let mut state = shared.state.lock();
        if state.generation == generation {
            state.cooling_down = false;
            state.rearm = None;
        }
    }
}

impl<C, A, S: Scheduler> Clone for Throttle<C, A, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C, A, S: Scheduler> fmt::Debug for Throttle<C, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Throttle")
            .field("interval", &self.shared.interval)
            .field("strategy", &self.shared.strategy)
            .field("cooling_down", &state.cooling_down)
            .field("last_fired", &state.last_fired)
            .finish()
    }
}
