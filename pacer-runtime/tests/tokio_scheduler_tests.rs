// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use pacer_core::PacerError;
use pacer_runtime::impls::tokio::TokioScheduler;
use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{advance, pause};

fn counting_job(counter: &Arc<AtomicUsize>) -> Box<dyn FnOnce() + Send> {
    let counter = Arc::clone(counter);
    Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_job_fires_after_delay() -> anyhow::Result<()> {
    // Arrange
    pause();
    let scheduler = TokioScheduler::try_current()?;
    let counter = Arc::new(AtomicUsize::new(0));
    scheduler.schedule(Duration::from_millis(300), counting_job(&counter));

    // Act & Assert
    advance(Duration::from_millis(299)).await;
    settle().await;
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(scheduler.pending_jobs(), 1);

    advance(Duration::from_millis(1)).await;
    settle().await;
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(scheduler.pending_jobs(), 0);

    Ok(())
}

#[tokio::test]
async fn test_cancelled_job_never_fires() -> anyhow::Result<()> {
    // Arrange
    pause();
    let scheduler = TokioScheduler::current();
    let counter = Arc::new(AtomicUsize::new(0));
    let token = scheduler.schedule(Duration::from_millis(100), counting_job(&counter));

    // Act
    let cancelled = scheduler.cancel(token);
    advance(Duration::from_millis(500)).await;
    settle().await;

    // Assert
    assert!(cancelled);
    assert!(!scheduler.cancel(token));
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn test_clock_follows_paused_time() -> anyhow::Result<()> {
    // Arrange
    pause();
    let scheduler = TokioScheduler::current();
    let start = scheduler.now();

    // Act
    advance(Duration::from_millis(750)).await;

    // Assert
    assert_eq!(scheduler.now() - start, Duration::from_millis(750));

    Ok(())
}

#[test]
fn test_try_current_outside_runtime_fails() {
    let result = TokioScheduler::try_current();
    assert!(matches!(result, Err(PacerError::RuntimeUnavailable { .. })));
}
