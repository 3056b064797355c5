// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::timer::Timer;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Records each invocation of a wrapped callback together with the time it ran.
#[derive(Debug, Clone)]
pub struct CallRecorder<T, TM: Timer> {
    clock: TM,
    calls: Arc<Mutex<Vec<(TM::Instant, T)>>>,
}

impl<T, TM> CallRecorder<T, TM>
where
    T: Clone + Send + 'static,
    TM: Timer,
{
    pub fn new(clock: TM) -> Self {
        Self {
            clock,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that appends its argument to this recorder.
    pub fn callback(&self) -> impl Fn(T) + Send + Sync + 'static {
        let clock = self.clock.clone();
        let calls = Arc::clone(&self.calls);
        move |value| {
            let now = clock.now();
            calls.lock().push((now, value));
        }
    }

    pub fn calls(&self) -> Vec<(TM::Instant, T)> {
        self.calls.lock().clone()
    }

    pub fn values(&self) -> Vec<T> {
        self.calls
            .lock()
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn times(&self) -> Vec<TM::Instant> {
        self.calls.lock().iter().map(|(at, _)| *at).collect()
    }

    /// Invocation times measured from `origin`.
    pub fn offsets_from(&self, origin: TM::Instant) -> Vec<Duration> {
        self.calls.lock().iter().map(|(at, _)| *at - origin).collect()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl<C, A, TM> CallRecorder<(C, A), TM>
where
    C: Clone + Send + 'static,
    A: Clone + Send + 'static,
    TM: Timer,
{
    /// A two-argument callback recording the invocation context alongside the arguments.
    pub fn context_callback(&self) -> impl Fn(C, A) + Send + Sync + 'static {
        let record = self.callback();
        move |context, args| record((context, args))
    }
}
