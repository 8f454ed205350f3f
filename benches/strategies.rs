//! Serial versus quadrant-parallel evaluation of the Gaussian field.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gaussfield::{Domain, FieldEvaluator, GaussianKernel, ParallelConfig, Strategy};

fn bench_strategies(c: &mut Criterion) {
    let domain = Domain::new(-2.0, 2.0, -2.0, 2.0).expect("valid domain");
    let kernel = GaussianKernel::new(1.0).expect("valid sigma");

    let mut group = c.benchmark_group("gaussian_field");
    group.sample_size(10);

    for step in [0.01, 0.004] {
        let evaluator = FieldEvaluator::new(domain, step, kernel)
            .expect("valid step")
            .with_parallel(ParallelConfig::with_threads(4));

        for strategy in [Strategy::Serial, Strategy::Embarrassing, Strategy::Partitioned] {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), step),
                &strategy,
                |b, &strategy| {
                    b.iter(|| black_box(evaluator.run(strategy).expect("evaluation succeeds")))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
