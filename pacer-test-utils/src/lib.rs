// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the pacer workspace.
//!
//! This crate is designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! - [`CallRecorder`] - Callback that records every invocation with the scheduler time
//! - [`test_data`] - `TriggerEvent` fixtures modelled on UI events
//! - [`trigger_channel`] - Sender plus `Stream` pair for driving wrappers from a source
//!
//! # Example
//!
//! ```rust
//! use pacer_runtime::impls::virtual_clock::{VirtualInstant, VirtualScheduler};
//! use pacer_test_utils::CallRecorder;
//!
//! let scheduler = VirtualScheduler::new();
//! let recorder = CallRecorder::new(scheduler.clone());
//! let callback = recorder.callback();
//!
//! callback(42);
//! assert_eq!(recorder.calls(), vec![(VirtualInstant::ORIGIN, 42)]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod recorder;
pub mod test_data;

use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use recorder::CallRecorder;
pub use test_data::TriggerEvent;

/// Creates an unbounded channel whose receiving half is a `Stream` of triggers.
///
/// Dropping the sender ends the stream.
pub fn trigger_channel<T>() -> (mpsc::UnboundedSender<T>, UnboundedReceiverStream<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
