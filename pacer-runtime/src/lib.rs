// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scheduler abstraction used by the debounce and throttle wrappers.
//!
//! - [`timer::Timer`] - monotonic clock
//! - [`scheduler::Scheduler`] - deferred execution with cancellation
//! - [`impls::virtual_clock::VirtualScheduler`] - manually advanced clock for tests
//! - [`impls::tokio::TokioScheduler`] - Tokio-backed scheduler (`runtime-tokio`)

pub mod impls;
pub mod scheduler;
pub mod timer;
