// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

/// Converts signed milliseconds into a [`Duration`], treating negatives as zero.
///
/// A zero debounce delay fires on the next scheduler tick and a zero throttle
/// interval suppresses nothing beyond that tick.
///
/// ```
/// use pacer::duration_from_millis;
/// use std::time::Duration;
///
/// assert_eq!(duration_from_millis(250), Duration::from_millis(250));
/// assert_eq!(duration_from_millis(-40), Duration::ZERO);
/// ```
pub fn duration_from_millis(millis: i64) -> Duration {
    match u64::try_from(millis) {
        Ok(millis) => Duration::from_millis(millis),
        Err(_) => {
            pacer_core::warn!("negative duration of {}ms clamped to zero", millis);
            Duration::ZERO
        }
    }
}
