//! Benchmarks for schedule generation and bond pricing.
//!
//! Run with: cargo bench -p fixbond-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fixbond_bonds::cashflows::ScheduleGenerator;
use fixbond_bonds::{BondPricer, FixedCouponBond};
use fixbond_core::types::{Date, Frequency};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_bond(frequency: Frequency, years: i32) -> FixedCouponBond {
    // 2055-10-29 is a Friday; the valuation date walks back from it.
    let maturity = Date::from_ymd(2055, 10, 29).unwrap();
    let valuation = Date::from_ymd(2055 - years, 10, 29).unwrap();

    FixedCouponBond::builder()
        .notional(1_000_000.0)
        .annual_coupon_rate(0.045)
        .frequency(frequency)
        .discount_rate(0.04)
        .valuation_date(valuation)
        .maturity_date(maturity)
        .build()
        .unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_schedule_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_generation");

    for years in [1, 10, 30] {
        let bond = create_test_bond(Frequency::Monthly, years);
        group.bench_with_input(BenchmarkId::new("monthly", years), &bond, |b, bond| {
            b.iter(|| ScheduleGenerator::generate(black_box(bond)).unwrap());
        });
    }

    group.finish();
}

fn bench_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("price");

    for frequency in [Frequency::Annual, Frequency::Quarterly, Frequency::Monthly] {
        let bond = create_test_bond(frequency, 10);
        group.bench_with_input(
            BenchmarkId::new("10y", frequency.token()),
            &bond,
            |b, bond| {
                b.iter(|| BondPricer::price(black_box(bond)).unwrap());
            },
        );
    }

    group.finish();
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(pricing, bench_schedule_generation, bench_price);

criterion_main!(pricing);
