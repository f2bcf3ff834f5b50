// In numpipe-core/benches/pipeline_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use numpipe::{number_stream, summarize, Engine};

// --- Benchmark Suite ---

const BENCH_DATA_LEN: usize = 65536;

fn bench_pipelines(c: &mut Criterion) {
    // --- Setup Data ---
    let data: Vec<f64> = number_stream(BENCH_DATA_LEN).collect();

    let mut engine = Engine::new();
    engine
        .build_pipeline("smooth", &["center", "square", "clip_0_2"])
        .unwrap();
    engine.build_pipeline("boost", &["sqrt_plus_one", "square"]).unwrap();
    let long_steps = ["center", "square", "sqrt_plus_one", "clip_0_2", "normalize_0_1"].repeat(4);
    engine.build_pipeline("long", long_steps.as_slice()).unwrap();

    // --- Create a Benchmark Group ---
    let mut group = c.benchmark_group("Pipeline Execution");
    group.throughput(criterion::Throughput::Elements(BENCH_DATA_LEN as u64));

    for name in ["smooth", "boost", "long"] {
        let pipe = engine.pipeline(name).unwrap();
        group.bench_function(format!("run [{}] ({} steps)", name, pipe.len()), |b| {
            b.iter(|| black_box(pipe.run(black_box(&data))))
        });
    }

    group.bench_function("run_with_context [boost]", |b| {
        b.iter(|| black_box(engine.run_with_context("boost", black_box(&data))))
    });
    group.bench_function("summarize", |b| {
        b.iter(|| black_box(summarize(black_box(&data))))
    });
    group.bench_function("number_stream", |b| {
        b.iter(|| black_box(number_stream(black_box(BENCH_DATA_LEN)).sum::<f64>()))
    });

    group.finish();
}

// These two lines generate the main function and register the benchmark group.
criterion_group!(benches, bench_pipelines);
criterion_main!(benches);
