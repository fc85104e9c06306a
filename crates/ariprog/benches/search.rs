use ariprog::{find_progressions, BisquareTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for bound in [50usize, 250] {
        group.throughput(Throughput::Elements(((bound + 1) * (bound + 1)) as u64));
        group.bench_function(format!("bound_{}", bound), |b| {
            b.iter(|| black_box(BisquareTable::build(black_box(bound))))
        });
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for (length, bound) in [(5usize, 50usize), (10, 100)] {
        let table = BisquareTable::build(bound);
        group.bench_function(format!("n{}_m{}", length, bound), |b| {
            b.iter(|| black_box(find_progressions(&table, black_box(length))))
        });
    }
}

criterion_group!(search, bench_build, bench_search);
criterion_main!(search);
