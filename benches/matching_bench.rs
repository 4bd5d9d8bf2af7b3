use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use votematch::{
    DemoElection, DemoParams, DistanceMetric, MatchingAlgorithm, MatchingAlgorithmOptions,
    MissingValueMethod, MissingValueOptions,
};

fn election(candidates: usize, sub_group: usize) -> DemoElection {
    DemoElection::new(DemoParams {
        candidates,
        questions: 30,
        likert_scale: 5,
        voter_answer: 2,
        missing: 3,
        sub_group,
    })
    .expect("valid demo params")
}

fn algorithm(metric: DistanceMetric, use_parallel: bool) -> MatchingAlgorithm {
    MatchingAlgorithm::new(
        MatchingAlgorithmOptions::new(
            metric,
            MissingValueOptions::new(MissingValueMethod::RelativeMaximum),
        )
        .with_parallel(use_parallel),
    )
}

/// Benchmark every metric over growing candidate sets
fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_metrics");

    for size in [10usize, 100, 1_000] {
        let election = election(size, 0);
        group.throughput(Throughput::Elements(size as u64));

        for metric in [
            DistanceMetric::Manhattan,
            DistanceMetric::Directional,
            DistanceMetric::Euclidean,
        ] {
            let algorithm = algorithm(metric, false);
            group.bench_with_input(
                BenchmarkId::new(format!("{metric:?}"), size),
                &election,
                |b, election| b.iter(|| black_box(election.run(&algorithm).expect("match"))),
            );
        }
    }

    group.finish();
}

/// Sequential vs rayon measurement on a large candidate set
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_parallel");
    let election = election(10_000, 0);
    group.throughput(Throughput::Elements(10_000));

    for use_parallel in [false, true] {
        let algorithm = algorithm(DistanceMetric::Manhattan, use_parallel);
        let label = if use_parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(election.run(&algorithm).expect("match")))
        });
    }

    group.finish();
}

/// Cost of sub-group distances on top of the global one
fn bench_sub_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_sub_groups");

    for sub_group in [0usize, 10, 30] {
        let election = election(1_000, sub_group);
        let algorithm = algorithm(DistanceMetric::Directional, false);
        group.bench_with_input(
            BenchmarkId::from_parameter(sub_group),
            &election,
            |b, election| b.iter(|| black_box(election.run(&algorithm).expect("match"))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_metrics, bench_parallel, bench_sub_groups);
criterion_main!(benches);
