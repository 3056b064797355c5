// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use pacer::prelude::*;
use std::hint::black_box;
use std::time::Duration;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_burst");
    let bursts = [1u64, 16, 256];

    for &burst in &bursts {
        group.throughput(Throughput::Elements(burst));
        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |bencher, &burst| {
            bencher.iter(|| {
                let scheduler = VirtualScheduler::new();
                let debounced = Debounce::new(
                    |value: u64| {
                        black_box(value);
                    },
                    Duration::from_millis(100),
                    scheduler.clone(),
                );

                // Every trigger lands inside the quiet period, only the last one fires
                for value in 0..burst {
                    debounced.trigger(value);
                    scheduler.advance(Duration::from_millis(10));
                }
                scheduler.run_until_idle();
            });
        });
    }

    group.finish();
}
