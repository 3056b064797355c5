// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Feeding a stream of trigger events into a wrapper.
//!
//! The event source is any [`Stream`]; each item becomes one trigger. This is
//! the equivalent of registering a wrapped callback as an event handler.

use crate::{Debounce, Throttle};
use core::future::Future;
use futures::{Stream, StreamExt};
use pacer_runtime::scheduler::Scheduler;

/// Something that accepts trigger events.
pub trait TriggerSink<A> {
    fn accept(&self, args: A);
}

impl<A, S> TriggerSink<A> for Debounce<(), A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    fn accept(&self, args: A) {
        self.trigger(args);
    }
}

impl<A, S> TriggerSink<A> for Throttle<(), A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    fn accept(&self, args: A) {
        self.trigger(args);
    }
}

/// Calls `handler` for every item of `events` until the stream ends.
///
/// Returns the number of events delivered.
pub async fn drive<St, F>(events: St, mut handler: F) -> usize
where
    St: Stream,
    F: FnMut(St::Item),
{
    let mut events = std::pin::pin!(events);
    let mut delivered = 0;
    while let Some(event) = events.next().await {
        handler(event);
        delivered += 1;
    }
    delivered
}

/// Extension trait connecting an event stream to a [`TriggerSink`].
pub trait TriggerStreamExt: Stream + Sized {
    /// Delivers every item of the stream to `sink`.
    ///
    /// Resolves to the number of events delivered once the stream ends.
    fn drive_into<'a, K>(self, sink: &'a K) -> impl Future<Output = usize> + 'a
    where
        K: TriggerSink<Self::Item> + 'a,
        Self: 'a,
    {
        drive(self, move |event| sink.accept(event))
    }
}

impl<St: Stream> TriggerStreamExt for St {}
