// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::executor::block_on;
use futures::stream;
use pacer::prelude::*;
use pacer::drive;
use pacer_test_utils::test_data::{click, keystroke, typing};
use pacer_test_utils::CallRecorder;
use std::time::Duration;

#[test]
fn test_drive_delivers_every_event_to_handler() {
    // Arrange
    let mut seen = Vec::new();

    // Act
    let delivered = block_on(drive(stream::iter(typing("abc")), |event| seen.push(event)));

    // Assert
    assert_eq!(delivered, 3);
    assert_eq!(seen, typing("abc"));
}

#[test]
fn test_drive_into_throttle_drops_burst() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new(scheduler.clone());
    let throttled = Throttle::new(recorder.callback(), Duration::from_millis(100), scheduler.clone());
    let events = stream::iter(vec![click(0, 0), click(1, 1), click(2, 2)]);

    // Act
    let delivered = block_on(events.drive_into(&throttled));

    // Assert
    assert_eq!(delivered, 3);
    assert_eq!(recorder.values(), vec![click(0, 0)]);
}

#[test]
fn test_drive_into_debounce_coalesces_burst() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new(scheduler.clone());
    let debounced = Debounce::new(recorder.callback(), Duration::from_millis(300), scheduler.clone());

    // Act
    let delivered = block_on(stream::iter(typing("rust")).drive_into(&debounced));
    scheduler.advance(Duration::from_millis(300));

    // Assert
    assert_eq!(delivered, 4);
    assert_eq!(recorder.values(), vec![keystroke("rust")]);
}

#[test]
fn test_drive_empty_stream_delivers_nothing() {
    let delivered = block_on(drive(stream::empty::<u32>(), |_| {}));
    assert_eq!(delivered, 0);
}
