// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// Handle to a deferred invocation, returned by a scheduler.
///
/// Tokens are only meaningful to the scheduler that issued them. Passing a
/// token to `cancel` after its job has run (or been cancelled) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Wrap a raw scheduler-assigned id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id assigned by the scheduler.
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}
