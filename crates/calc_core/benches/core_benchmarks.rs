//! Criterion benchmarks for the calc_core schedule engines.
//!
//! Measures amortization and depreciation schedule generation across term
//! lengths, and bracket evaluation against the closed-form quick tax.

use calc_core::math::{
    AmortizationSchedule, BracketTable, DepreciationMethod, DepreciationSchedule, RepaymentMethod,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark amortization schedules for each repayment method.
fn bench_amortization(c: &mut Criterion) {
    let mut group = c.benchmark_group("amortization");

    for months in [12u32, 120, 360, 480] {
        for method in [
            RepaymentMethod::EqualPayment,
            RepaymentMethod::EqualPrincipal,
            RepaymentMethod::InterestOnlyBalloon,
        ] {
            group.bench_with_input(
                BenchmarkId::new(method.name(), months),
                &months,
                |b, &months| {
                    b.iter(|| {
                        AmortizationSchedule::generate(
                            black_box(300_000_000.0),
                            black_box(0.035 / 12.0),
                            months,
                            method,
                        )
                        .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark depreciation schedules over long useful lives.
fn bench_depreciation(c: &mut Criterion) {
    let mut group = c.benchmark_group("depreciation");

    for life in [5u32, 40, 200] {
        for method in DepreciationMethod::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", method), life),
                &life,
                |b, &life| {
                    b.iter(|| {
                        DepreciationSchedule::generate(
                            black_box(50_000_000.0),
                            black_box(2_500_000.0),
                            life,
                            method,
                        )
                        .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark bracket evaluation against the quick-deduction lookup.
fn bench_brackets(c: &mut Criterion) {
    let mut group = c.benchmark_group("brackets");
    let table = BracketTable::progressive(&[
        (Some(12_000_000.0), 0.06),
        (Some(46_000_000.0), 0.15),
        (Some(88_000_000.0), 0.24),
        (Some(150_000_000.0), 0.35),
        (Some(300_000_000.0), 0.38),
        (Some(500_000_000.0), 0.40),
        (Some(1_000_000_000.0), 0.42),
        (None, 0.45),
    ])
    .unwrap();
    let amounts: Vec<f64> = (0..100).map(|i| i as f64 * 15_000_000.0).collect();

    group.bench_function("evaluate_100", |b| {
        b.iter(|| {
            for &amount in &amounts {
                black_box(table.evaluate(black_box(amount)));
            }
        });
    });

    group.bench_function("quick_tax_100", |b| {
        b.iter(|| {
            for &amount in &amounts {
                black_box(table.quick_tax(black_box(amount)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_amortization, bench_depreciation, bench_brackets);
criterion_main!(benches);
