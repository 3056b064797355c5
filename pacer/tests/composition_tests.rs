// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::prelude::*;
use pacer_runtime::impls::virtual_clock::VirtualInstant;
use pacer_test_utils::test_data::{keystroke, typing};
use pacer_test_utils::CallRecorder;
use std::time::Duration;

#[test]
fn test_debounce_of_debounce_waits_for_both_quiet_periods() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new(scheduler.clone());
    let inner = Debounce::new(recorder.callback(), Duration::from_millis(200), scheduler.clone());
    let outer = Debounce::new(
        move |event| inner.trigger(event),
        Duration::from_millis(100),
        scheduler.clone(),
    );

    // Act
    outer.trigger(keystroke("a"));
    scheduler.advance(Duration::from_millis(50));
    outer.trigger(keystroke("ab"));
    scheduler.run_until_idle();

    // Assert
    assert_eq!(
        recorder.calls(),
        vec![(VirtualInstant::from_millis(350), keystroke("ab"))]
    );
}

#[test]
fn test_throttle_of_throttle_uses_the_longer_window() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new(scheduler.clone());
    let inner = Throttle::timestamped(recorder.callback(), Duration::from_millis(300), scheduler.clone());
    let outer = Throttle::new(
        move |n: u32| {
            inner.trigger(n);
        },
        Duration::from_millis(100),
        scheduler.clone(),
    );

    // Act
    for n in 0..10 {
        outer.trigger(n);
        scheduler.advance(Duration::from_millis(100));
    }

    // Assert
    assert_eq!(recorder.values(), vec![0, 3, 6, 9]);
}

#[test]
fn test_throttle_feeding_debounce_emits_after_burst() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new(scheduler.clone());
    let debounced = Debounce::new(recorder.callback(), Duration::from_millis(250), scheduler.clone());
    let throttled = Throttle::new(
        move |event| debounced.trigger(event),
        Duration::from_millis(100),
        scheduler.clone(),
    );

    // Act
    for event in typing("pacer") {
        throttled.trigger(event);
        scheduler.advance(Duration::from_millis(60));
    }
    scheduler.run_until_idle();

    // Assert
    // Admitted at t=0, 120, 240 ("p", "pac", "pacer"); debounced 250ms after the last.
    assert_eq!(
        recorder.calls(),
        vec![(VirtualInstant::from_millis(490), keystroke("pacer"))]
    );
}
