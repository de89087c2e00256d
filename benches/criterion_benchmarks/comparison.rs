use criterion::{black_box, Criterion, criterion_group};

use relp_rational::Rational64;

pub fn compare_close(c: &mut Criterion) {
    let left = Rational64::new(i64::MAX, i64::MAX - 1).unwrap();
    let right = Rational64::new(i64::MAX - 1, i64::MAX - 2).unwrap();
    c.bench_function("compare close values near the maximum", |b| b.iter(|| {
        black_box(left).cmp(&black_box(right))
    }));
}

pub fn compare_convergents(c: &mut Criterion) {
    let left = Rational64::new(1_146_408, 364_913).unwrap();
    let right = Rational64::new(4_272_943, 1_360_120).unwrap();
    c.bench_function("compare continued fraction convergents", |b| b.iter(|| {
        black_box(left).cmp(&black_box(right))
    }));
}

pub fn parse(c: &mut Criterion) {
    c.bench_function("parse a decimal", |b| b.iter(|| {
        black_box("-31415.92653").parse::<Rational64>()
    }));
}

criterion_group!(comparison,
    compare_close,
    compare_convergents,
    parse,
);
