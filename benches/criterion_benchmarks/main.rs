use criterion::criterion_main;

mod arithmetic;
mod comparison;

criterion_main!(
    arithmetic::arithmetic,
    comparison::comparison,
);
