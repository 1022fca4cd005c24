use crate::common::{configure_criterion, request_metadata, wide_metadata};
use criterion::{criterion_group, BenchmarkId, Criterion};
use helpful_errors::config::{override_env_options, EnvOptions};
use helpful_errors::{ErrorCode, HelpfulError};
use std::hint::black_box;

/// Compact vs pretty metadata blocks.
pub fn bench_expand_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/expand");

    for expand in [false, true] {
        let _guard = override_env_options(EnvOptions::new().expand(expand));
        group.bench_with_input(BenchmarkId::from_parameter(expand), &expand, |b, _| {
            b.iter(|| black_box(<HelpfulError>::with_metadata("request failed", request_metadata())))
        });
    }

    group.finish();
}

/// Rendering cost as the number of metadata fields grows.
pub fn bench_format_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/scaling");

    for fields in [1usize, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(fields), &fields, |b, &fields| {
            b.iter(|| black_box(<HelpfulError>::with_metadata("wide", wide_metadata(fields))))
        });
    }

    group.finish();
}

pub fn bench_json_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/json");

    let plain: HelpfulError = HelpfulError::with_metadata("request failed", request_metadata());
    let coded: HelpfulError = HelpfulError::with_metadata(
        "request failed",
        request_metadata().with_code(ErrorCode::http(503).with_slug("UPSTREAM_DOWN")),
    );

    group.bench_function("without_slug", |b| {
        b.iter(|| black_box(serde_json::to_string(&plain)))
    });
    group.bench_function("with_slug", |b| b.iter(|| black_box(serde_json::to_string(&coded))));
    group.bench_function("display", |b| b.iter(|| black_box(plain.to_string())));

    group.finish();
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets =
        bench_expand_modes,
        bench_format_scaling,
        bench_json_serialization,
}
