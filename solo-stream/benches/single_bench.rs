// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::{
    stream::{self, StreamExt},
    Stream,
};
use solo_core::Signal;
use solo_stream::SingleExt;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn make_stream(size: usize, payload_size: usize) -> impl Stream<Item = Signal<Vec<u8>>> {
    let items: Vec<Vec<u8>> = (0..size).map(|i| vec![i as u8; payload_size]).collect();
    stream::iter(items).map(Signal::Value)
}

pub fn bench_single_where(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("single_where");
    let sizes = [100usize, 1000, 10000];
    let payload_sizes = [16usize, 64];

    for &size in &sizes {
        for &payload_size in &payload_sizes {
            let id = BenchmarkId::from_parameter(format!("m{size}_p{payload_size}"));
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(id, &(size, payload_size), |bencher, &(size, payload_size)| {
                let setup = move || {
                    // Never-matching predicate with a fallback, so the
                    // operator scans every element before its one emission.
                    make_stream(size, payload_size)
                        .single_where_or(|payload| Ok(payload.is_empty()), Vec::new())
                };

                bencher.iter_with_setup(setup, |extraction| {
                    rt.block_on(async move {
                        let mut s = Box::pin(extraction);
                        while let Some(v) = s.next().await {
                            black_box(v);
                        }
                    });
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_single_where);
criterion_main!(benches);
