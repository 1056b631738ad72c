use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gimlet_json::{JsonValue, Parser, WriteOptions};

fn sample_tree() -> JsonValue {
    let mut entries = String::from("{\"entries\":[");
    for i in 0..256 {
        if i > 0 {
            entries.push(',');
        }
        entries.push_str(&format!(
            "{{\"id\":{i},\"name\":\"entry-{i}\",\"note\":\"héllo \\u00e9\",\"active\":false}}"
        ));
    }
    entries.push_str("]}");
    Parser::new().parse_str(&entries).unwrap()
}

fn benchmark_write_compact(c: &mut Criterion) {
    let tree = sample_tree();
    c.bench_function("compact write", |b| {
        b.iter(|| black_box(gimlet_json::to_vec(black_box(&tree), WriteOptions::COMPACT)))
    });
}

fn benchmark_write_escaped(c: &mut Criterion) {
    let tree = sample_tree();
    c.bench_function("unicode-escaped write", |b| {
        b.iter(|| {
            black_box(gimlet_json::to_vec(
                black_box(&tree),
                WriteOptions::ESCAPE_UNICODE,
            ))
        })
    });
}

fn benchmark_write_pretty(c: &mut Criterion) {
    let tree = sample_tree();
    c.bench_function("pretty write", |b| {
        b.iter(|| black_box(gimlet_json::to_vec(black_box(&tree), WriteOptions::PRETTY)))
    });
}

criterion_group!(
    benches,
    benchmark_write_compact,
    benchmark_write_escaped,
    benchmark_write_pretty
);
criterion_main!(benches);
