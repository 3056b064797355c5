// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for callbacks, with a runtime-agnostic scheduler.
//!
//! Each wrapper owns its callback, its interval and its private scheduling
//! state, and controls how often the callback runs relative to a stream of
//! triggers. Deferred work goes through an injected
//! [`Scheduler`](pacer_runtime::scheduler::Scheduler), so the same logic runs
//! on Tokio or on a manually advanced virtual clock.
//!
//! # Overview
//!
//! - **[`Debounce`]** - Invoke only after a quiet period, with the latest arguments
//! - **[`Throttle`]** - Invoke at most once per interval, dropping triggers in between
//! - **[`ThrottleStrategy`]** - Re-arming flag or last-fire timestamp
//! - **[`TriggerStreamExt`]** - Feed a `Stream` of events into a wrapper
//! - **[`duration_from_millis`]** - Signed milliseconds to `Duration`, negatives as zero
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioScheduler` and the [`debounce`]/[`throttle`] constructors
//! - `VirtualScheduler` is always available for tests and simulations
//! - `tracing` - route internal diagnostics to the `tracing` crate
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! use std::time::Duration;
//!
//! let on_resize = pacer::throttle(
//!     |(width, height): (u32, u32)| println!("resized to {width}x{height}"),
//!     Duration::from_millis(200),
//! );
//! on_resize.trigger((800, 600));
//! on_resize.trigger((801, 600)); // dropped
//!
//! let on_input = pacer::debounce(
//!     |query: String| println!("searching for: {query}"),
//!     Duration::from_millis(300),
//! );
//! on_input.trigger("rust".to_string());
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

mod debounce;
mod drive;
mod duration;
mod throttle;

pub mod prelude;

pub use debounce::Debounce;
pub use drive::{drive, TriggerSink, TriggerStreamExt};
pub use duration::duration_from_millis;
pub use throttle::{Throttle, ThrottleStrategy};

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::impls::tokio::TokioScheduler;

/// Scheduler used by the convenience constructors.
#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = TokioScheduler;

/// Debounces `callback` by `delay` on the current Tokio runtime.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<A, F>(callback: F, delay: core::time::Duration) -> Debounce<(), A, DefaultScheduler>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounce::new(callback, delay, TokioScheduler::current())
}

/// Throttles `callback` to once per `interval` on the current Tokio runtime,
/// using [`ThrottleStrategy::Flag`].
///
/// # Panics
///
/// Panics when called outside a Tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<A, F>(callback: F, interval: core::time::Duration) -> Throttle<(), A, DefaultScheduler>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Throttle::new(callback, interval, TokioScheduler::current())
}
