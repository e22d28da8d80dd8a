//! Layout construction benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use xsdoc_bench::{SYNTHETIC_TYPES, synthetic_layout};
use xsdoc_model::Layout;
use xsdoc_schema::{parse_document, parse_type_table};

fn benchmark_parse(c: &mut Criterion) {
    let xml = synthetic_layout(20, 10);
    let mut group = c.benchmark_group("parse_document");
    group.throughput(Throughput::Bytes(xml.len() as u64));

    group.bench_function("20x10", |b| {
        b.iter(|| parse_document(black_box(&xml)).expect("parse"))
    });

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    let types = parse_type_table(SYNTHETIC_TYPES).expect("parse types");
    let mut group = c.benchmark_group("layout_build");

    for groups in [5, 20, 80] {
        let document = parse_document(&synthetic_layout(groups, 10)).expect("parse");
        group.bench_with_input(BenchmarkId::from_parameter(groups), &document, |b, document| {
            b.iter(|| Layout::build(black_box(document), &types).expect("build"))
        });
    }

    group.finish();
}

fn benchmark_rule_references(c: &mut Criterion) {
    let types = parse_type_table(SYNTHETIC_TYPES).expect("parse types");
    let document = parse_document(&synthetic_layout(20, 10)).expect("parse");
    let layout = Layout::build(&document, &types).expect("build");

    c.bench_function("rule_references", |b| {
        b.iter(|| black_box(layout.rule_references()))
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_build,
    benchmark_rule_references,
);
criterion_main!(benches);
