// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! ```
//! use pacer::prelude::*;
//! ```

pub use crate::{Debounce, Throttle, ThrottleStrategy, TriggerSink, TriggerStreamExt};

pub use pacer_runtime::impls::virtual_clock::VirtualScheduler;
pub use pacer_runtime::scheduler::Scheduler;
pub use pacer_runtime::timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use crate::TokioScheduler;
