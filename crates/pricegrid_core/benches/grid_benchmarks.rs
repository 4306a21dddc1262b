//! Criterion benchmarks for pricegrid_core sweeps
//!
//! Run with: cargo bench -p pricegrid_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pricegrid_core::analysis::{AxisSpec, ColorScale, build_grid, to_csv};
use pricegrid_core::compute;
use pricegrid_core::model::{InputField, OutputMetric, ScenarioInputs};

/// Spread x OID axes with `n` samples each
fn square_axes(n: usize) -> (AxisSpec, AxisSpec) {
    let spread_step = 400.0 / n as f64;
    let oid_step = 3.0 / n as f64;
    (
        AxisSpec::new(
            InputField::Spread,
            200.0,
            200.0 + spread_step * (n - 1) as f64,
            spread_step,
        )
        .expect("valid spread axis"),
        AxisSpec::new(InputField::Oid, 0.0, oid_step * (n - 1) as f64, oid_step)
            .expect("valid oid axis"),
    )
}

fn bench_single_scenario(c: &mut Criterion) {
    let inputs = ScenarioInputs::default();

    c.bench_function("single_scenario", |b| b.iter(|| compute(black_box(&inputs))));
}

fn bench_build_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_grid");
    let base = ScenarioInputs::default();

    for n in [10, 50, 200].iter() {
        let (axis1, axis2) = square_axes(*n);
        group.bench_with_input(BenchmarkId::new("side", n), n, |b, _| {
            b.iter(|| build_grid(black_box(&base), black_box(&axis1), black_box(&axis2)))
        });
    }

    group.finish();
}

fn bench_render_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pipeline");
    let (axis1, axis2) = square_axes(50);
    let grid = build_grid(&ScenarioInputs::default(), &axis1, &axis2).expect("grid builds");

    group.bench_function("color_scale", |b| {
        b.iter(|| {
            let scale = ColorScale::for_metric(black_box(&grid), OutputMetric::Leverage);
            scale.map(|s| {
                grid.metric_values(OutputMetric::Leverage)
                    .filter_map(|v| s.color(v))
                    .count()
            })
        })
    });

    group.bench_function("csv_export", |b| b.iter(|| to_csv(black_box(&grid))));

    group.finish();
}

criterion_group!(
    benches,
    bench_single_scenario,
    bench_build_grid,
    bench_render_pipeline,
);
criterion_main!(benches);
