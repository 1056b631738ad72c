use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gimlet_json::Parser;

fn sample_document() -> String {
    let mut entries = String::from("{\"entries\":[");
    for i in 0..256 {
        if i > 0 {
            entries.push(',');
        }
        entries.push_str(&format!(
            "{{\"id\":{i},\"name\":\"entry-{i}\",\"score\":{i}.{i}e+2,\"tags\":[\"a\",\"b\"],\"active\":true}}"
        ));
    }
    entries.push_str("]}");
    entries
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn benchmark_parse_utf8(c: &mut Criterion) {
    let document = sample_document();
    c.bench_function("parse of utf-8 document", |b| {
        b.iter(|| {
            let parser = Parser::new();
            black_box(parser.parse_str(black_box(&document)))
        })
    });
}

fn benchmark_parse_utf16le(c: &mut Criterion) {
    let document = utf16le(&sample_document());
    c.bench_function("parse of utf-16le document", |b| {
        b.iter(|| {
            let parser = Parser::new();
            black_box(parser.parse_bytes(black_box(&document)))
        })
    });
}

criterion_group!(benches, benchmark_parse_utf8, benchmark_parse_utf16le);
criterion_main!(benches);
