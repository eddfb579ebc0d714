use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fastdiv::{decimal::remove_trailing_zeros, tables, DivisionConstants, Divisor};
use rand::{distributions::Uniform, thread_rng, Rng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = thread_rng();

    let by_five = tables::DIV_BY_5_U128;
    let dis = Uniform::new(0, by_five.threshold());

    c.bench_function("u128 hardware div 5", |b| {
        b.iter_batched(
            || rng.sample(dis),
            |v| black_box(v) / black_box(5u128),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("u128 fast div 5", |b| {
        b.iter_batched(
            || rng.sample(dis),
            |v| by_five.fast_divide(black_box(v)),
            BatchSize::SmallInput,
        );
    });

    let by_pow10 = DivisionConstants::<u128>::new(Divisor::PowerOfTen(19)).unwrap();
    let divisor = by_pow10.divisor();
    let dis = Uniform::new(0, by_pow10.threshold());

    c.bench_function("u128 hardware div 10^19", |b| {
        b.iter_batched(
            || rng.sample(dis),
            |v| black_box(v) / black_box(divisor),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("u128 fast div 10^19", |b| {
        b.iter_batched(
            || rng.sample(dis),
            |v| by_pow10.fast_divide(black_box(v)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("u64 remove trailing zeros", |b| {
        b.iter_batched(
            || rng.gen_range(1..=1_000_000u64) * 10u64.pow(rng.gen_range(0..=12)),
            |v| remove_trailing_zeros(black_box(v)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
