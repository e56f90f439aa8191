use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sect113fun::{Curve, FieldElement};

fn lookup(c: &mut Criterion) {
    let curve = Curve::sect113r2().unwrap();
    let mut group = c.benchmark_group("lookup");

    for size in [4usize, 16, 64] {
        let points = (0..size)
            .map(|_| {
                curve.create_point(
                    FieldElement::random(&mut rand::thread_rng()),
                    FieldElement::random(&mut rand::thread_rng()),
                    false,
                )
            })
            .collect::<Vec<_>>();
        let table = curve.create_lookup_table(&points, 0, size).unwrap();

        group.bench_with_input(BenchmarkId::new("constant_time", size), &table, |b, table| {
            b.iter(|| table.lookup(size / 2))
        });
        group.bench_with_input(BenchmarkId::new("variable_time", size), &table, |b, table| {
            b.iter(|| table.lookup_var(size / 2))
        });
    }
}

fn build(c: &mut Criterion) {
    let curve = Curve::sect113r2().unwrap();
    let points = (0..16)
        .map(|_| {
            curve.create_point(
                FieldElement::random(&mut rand::thread_rng()),
                FieldElement::random(&mut rand::thread_rng()),
                false,
            )
        })
        .collect::<Vec<_>>();
    c.bench_function("create_lookup_table_16", |b| {
        b.iter(|| curve.create_lookup_table(&points, 0, 16))
    });
}

criterion_group!(benches, lookup, build);
criterion_main!(benches);
