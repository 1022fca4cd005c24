use crate::common::{configure_criterion, simulate_db_query, small_metadata};
use criterion::{criterion_group, Criterion};
use helpful_errors::traits::ResultExt;
use helpful_errors::{with_helpful_error, WrapOptions};
use std::hint::black_box;

#[cfg(feature = "async")]
use crate::common::simulate_remote_call;
#[cfg(feature = "async")]
use helpful_errors::with_helpful_error_async;
#[cfg(feature = "async")]
use tokio::runtime::Runtime;

/// Overhead of the wrap combinator on both paths.
pub fn bench_sync_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap/sync");

    let wrapped = with_helpful_error(
        simulate_db_query,
        WrapOptions::new("could not load user").with_metadata(small_metadata()),
    );

    group.bench_function("success_path", |b| b.iter(|| black_box(wrapped(black_box(1)))));
    group.bench_function("error_path", |b| b.iter(|| black_box(wrapped(black_box(100)))));

    // eager options vs options built only on failure
    group.bench_function("result_ext_eager", |b| {
        b.iter(|| {
            black_box(
                simulate_db_query(black_box(1)).helpful(
                    WrapOptions::new("could not load user").with_metadata(small_metadata()),
                ),
            )
        })
    });
    group.bench_function("result_ext_lazy", |b| {
        b.iter(|| {
            black_box(simulate_db_query(black_box(1)).helpful_with(|| {
                WrapOptions::new("could not load user").with_metadata(small_metadata())
            }))
        })
    });

    group.finish();
}

#[cfg(feature = "async")]
pub fn bench_async_wrap(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("wrap/async");

    let wrapped = with_helpful_error_async(
        simulate_remote_call,
        WrapOptions::new("remote call failed").with_metadata(small_metadata()),
    );

    group.bench_function("success_path", |b| {
        b.iter(|| rt.block_on(async { black_box(wrapped(black_box(1)).await) }))
    });
    group.bench_function("error_path", |b| {
        b.iter(|| rt.block_on(async { black_box(wrapped(black_box(100)).await) }))
    });

    group.finish();
}

#[cfg(feature = "async")]
criterion_group! {
    name = wrap_benches;
    config = configure_criterion();
    targets = bench_sync_wrap, bench_async_wrap,
}

#[cfg(not(feature = "async"))]
criterion_group! {
    name = wrap_benches;
    config = configure_criterion();
    targets = bench_sync_wrap,
}
