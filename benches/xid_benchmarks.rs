use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use xid::{Generator, Xid};

pub fn generation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");
    let generator = Generator::new();

    group.bench_function("generate", |b| {
        b.iter(|| black_box(generator.generate()));
    });

    group.bench_function("generate_encoded", |b| {
        b.iter(|| black_box(generator.generate_encoded()));
    });

    group.bench_function("generate_string", |b| {
        b.iter(|| black_box(generator.generate_string()));
    });

    group.bench_function("default_generator", |b| {
        b.iter(|| black_box(xid::new()));
    });

    group.finish();
}

pub fn component_extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Extraction");
    let id = Generator::new().generate();

    group.bench_function("extract_components", |b| {
        b.iter(|| black_box(black_box(id).decompose()));
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let generator = Arc::new(Generator::new());
            b.iter(|| {
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let gen = Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        for _ in 0..100 {
                            black_box(gen.generate());
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

pub fn comparison_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Comparison");
    let generator = Generator::new();
    let a: Xid = generator.generate();
    let b_id: Xid = generator.generate();

    group.bench_function("cmp_raw", |b| {
        b.iter(|| black_box(black_box(a) < black_box(b_id)));
    });

    group.bench_function("cmp_text", |b| {
        let (sa, sb) = (a.to_string(), b_id.to_string());
        b.iter(|| black_box(black_box(&sa) < black_box(&sb)));
    });

    group.finish();
}

criterion_group!(
    benches,
    generation_benchmarks,
    concurrent_benchmarks,
    component_extraction_benchmarks,
    comparison_benchmarks
);
criterion_main!(benches);
