use criterion::{black_box, Criterion, criterion_group};

use relp_rational::Rational64;

pub fn construct(c: &mut Criterion) {
    c.bench_function("construct and reduce", |b| b.iter(|| {
        Rational64::new(black_box(1_234_567_890), black_box(-987_654_330))
    }));
}

pub fn add(c: &mut Criterion) {
    let left = Rational64::new(355, 113).unwrap();
    let right = Rational64::new(-22, 7).unwrap();
    c.bench_function("add with distinct denominators", |b| b.iter(|| {
        black_box(left).checked_add(black_box(right))
    }));
}

pub fn multiply(c: &mut Criterion) {
    let left = Rational64::new(2_147_483_647, 6).unwrap();
    let right = Rational64::new(9, 2_147_483_647).unwrap();
    c.bench_function("multiply with cancellation", |b| b.iter(|| {
        black_box(left).checked_mul(black_box(right))
    }));
}

pub fn pow(c: &mut Criterion) {
    let base = Rational64::new(-3, 2).unwrap();
    c.bench_function("raise to the 39th power", |b| b.iter(|| {
        black_box(base).pow(black_box(39))
    }));
}

criterion_group!(arithmetic,
    construct,
    add,
    multiply,
    pow,
);
