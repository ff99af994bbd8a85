//! Benchmarks for workflow conversion
//!
//! Run with: cargo bench -p wfgraph-task-graph

#![allow(clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wfgraph_task_graph::{GraphBuilder, TaskRecord, build};

/// Generate a fan-out/fan-in workflow: one split task, `width` workers that
/// each read a chunk of its output, one merge task reading every result.
fn generate_fork_join(width: usize) -> Vec<TaskRecord> {
    let mut split = TaskRecord::new("split", 1.0);
    let mut merge = TaskRecord::new("merge", 1.0);
    let mut workers = Vec::with_capacity(width);

    for i in 0..width {
        let chunk = format!("chunk_{i}.dat");
        let result = format!("result_{i}.dat");
        split = split
            .with_output(chunk.clone(), 1024)
            .with_child(format!("work_{i}"));
        workers.push(
            TaskRecord::new(format!("work_{i}"), 10.0)
                .with_input(chunk, 1024)
                .with_input("reference.db", 1 << 20)
                .with_output(result.clone(), 256)
                .with_child("merge"),
        );
        merge = merge.with_input(result, 256);
    }

    let mut records = Vec::with_capacity(width + 2);
    records.push(split);
    records.extend(workers);
    records.push(merge);
    records
}

/// Generate a linear pipeline where each stage reads the previous output.
fn generate_chain(depth: usize) -> Vec<TaskRecord> {
    (0..depth)
        .map(|i| {
            let mut task = TaskRecord::new(format!("stage_{i}"), 1.0)
                .with_output(format!("stage_{i}.out"), 4096);
            if i > 0 {
                task = task.with_input(format!("stage_{}.out", i - 1), 4096);
            }
            if i + 1 < depth {
                task = task.with_child(format!("stage_{}", i + 1));
            }
            task
        })
        .collect()
}

fn benchmark_build_fork_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_fork_join");

    for width in [50, 100, 200, 500] {
        let records = generate_fork_join(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &records, |b, records| {
            b.iter(|| black_box(build(records).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_build_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chain");

    for depth in [100, 500, 1000] {
        let records = generate_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &records, |b, records| {
            b.iter(|| black_box(build(records).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_index_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_only");

    for width in [100, 500] {
        let records = generate_fork_join(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &records, |b, records| {
            b.iter(|| black_box(GraphBuilder::index(records).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("levels");

    for width in [100, 500] {
        let graph = build(&generate_fork_join(width)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(width), &graph, |b, graph| {
            b.iter(|| black_box(graph.levels().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_build_fork_join,
    benchmark_build_chain,
    benchmark_index_only,
    benchmark_levels,
);

criterion_main!(benches);
