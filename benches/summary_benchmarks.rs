use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitcalc::{process_packages, read_package, Package};

/// Benchmarks for dispatch and summary calculation over growing batches

fn create_package_batch(size: usize) -> Vec<Package> {
    (0..size)
        .map(|i| match i % 3 {
            0 => Package::new("SWM", vec![720.0 + i as f64, 1.0, 80.0, 25.0, 40.0]),
            1 => Package::new("RUN", vec![15000.0 + i as f64, 1.0, 75.0]),
            _ => Package::new("WLK", vec![9000.0 + i as f64, 1.0, 75.0, 180.0]),
        })
        .collect()
}

fn bench_single_summary(c: &mut Criterion) {
    c.bench_function("read_package_and_summarize", |b| {
        b.iter(|| {
            let training = read_package(black_box("WLK"), black_box(&[9000.0, 1.0, 75.0, 180.0]));
            training.map(|t| t.summarize())
        });
    });
}

fn bench_batch_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Processing");

    for &size in &[10, 100, 1000] {
        let packages = create_package_batch(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("process_packages", size),
            &packages,
            |b, packages| {
                b.iter(|| process_packages(black_box(packages)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_summary, bench_batch_processing);
criterion_main!(benches);
