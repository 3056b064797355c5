// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use pacer::prelude::*;
use std::hint::black_box;
use std::time::Duration;

pub fn bench_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("throttle_overhead");
    let strategies = [ThrottleStrategy::Flag, ThrottleStrategy::Timestamp];

    for &strategy in &strategies {
        group.throughput(Throughput::Elements(256));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", strategy)),
            &strategy,
            |bencher, &strategy| {
                bencher.iter(|| {
                    let scheduler = VirtualScheduler::new();
                    let throttled = Throttle::with_context(
                        |(), value: u64| {
                            black_box(value);
                        },
                        Duration::from_millis(50),
                        strategy,
                        scheduler.clone(),
                    );

                    for value in 0..256 {
                        black_box(throttled.trigger(value));
                        scheduler.advance(Duration::from_millis(1));
                    }
                });
            },
        );
    }

    group.finish();
}
