use criterion::{black_box, criterion_group, criterion_main, Criterion};
use junban::{compile, Wrr};

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    // Coprime-ish weights so the GCD reduction doesn't shrink the table.
    let sizes = [8, 64, 512];

    for &size in &sizes {
        let weights: Vec<i64> = (0..size).map(|i| (i % 17) as i64 + 1).collect();
        group.bench_function(format!("slots_{}", size), |b| {
            b.iter(|| {
                let cycle = compile(black_box(&weights)).expect("valid weights");
                black_box(cycle.len());
            })
        });
    }

    let scaled: Vec<i64> = (0..64).map(|i| ((i % 17) as i64 + 1) * 1_000).collect();
    group.bench_function("slots_64_gcd_1000", |b| {
        b.iter(|| {
            let cycle = compile(black_box(&scaled)).expect("valid weights");
            black_box(cycle.len());
        })
    });
    group.finish();
}

fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");
    let sizes = [2, 8, 256];

    for &size in &sizes {
        let slots: Vec<(usize, i64)> = (0..size).map(|i| (i, (i % 5) as i64 + 1)).collect();
        let wrr = Wrr::from_vec(slots).expect("valid weights");
        group.bench_function(format!("slots_{}", size), |b| {
            b.iter(|| {
                black_box(wrr.next());
            })
        });
    }
    group.finish();
}

fn bench_next_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_contended");
    let threads = 4;
    let per_thread = 10_000;

    let slots: Vec<(usize, i64)> = (0..8).map(|i| (i, i as i64 + 1)).collect();
    let wrr = Wrr::from_vec(slots).expect("valid weights");

    group.bench_function(format!("threads_{}_x{}", threads, per_thread), |b| {
        b.iter(|| {
            std::thread::scope(|s| {
                for _ in 0..threads {
                    s.spawn(|| {
                        for _ in 0..per_thread {
                            black_box(wrr.next_index());
                        }
                    });
                }
            });
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compile, bench_next, bench_next_contended);
criterion_main!(benches);
