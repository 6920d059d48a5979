use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use numex::compile;
use std::time::Duration;

const EXPRESSION: &str = "((((4 * 2) + (3 * 5)) / (8 - 5)) - (7 + 3)) * (2 / (1 + 1))";

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("nested arithmetic", |b| {
        b.iter(|| black_box(compile(black_box(EXPRESSION))))
    });

    // A long left-leaning chain: a0 + a1 + ... + a999
    let chain = (0..1000)
        .map(|i| format!("a{i}"))
        .collect::<Vec<_>>()
        .join(" + ");
    group.bench_function("1000-term chain", |b| {
        b.iter_batched(
            || chain.clone(),
            |source| black_box(compile(&source)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
