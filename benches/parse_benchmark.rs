use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csvpush::{CsvParser, RowSink};

/// Sink that only counts events, so the benchmark measures the parser
struct CountingSink {
    rows: u64,
    values: u64,
}

impl RowSink for CountingSink {
    fn start(&mut self) {}

    fn value(&mut self, _key: &str, value: &str) -> bool {
        self.values += 1;
        black_box(value);
        true
    }

    fn end(&mut self) {
        self.rows += 1;
    }
}

fn build_document(rows: usize) -> String {
    let mut doc = String::with_capacity(rows * 40);
    doc.push_str("id,name,score,active\n");
    for i in 0..rows {
        doc.push_str(&format!("{},\"Name_{}\",{},true\n", i, i, i * 100));
    }
    doc
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let doc = build_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut sink = CountingSink { rows: 0, values: 0 };
                let mut parser = CsvParser::new();
                parser.parse(black_box(&doc), &mut sink).unwrap();
                black_box(sink.rows);
            });
        });
    }

    group.finish();
}

fn benchmark_quoted_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_quoted");

    for size in [1_000, 10_000].iter() {
        let mut doc = String::from("text,more\n");
        for i in 0..*size {
            doc.push_str(&format!("\"line {}, with \"\"quotes\"\"\",plain\n", i));
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut sink = CountingSink { rows: 0, values: 0 };
                let mut parser = CsvParser::new();
                parser.parse(black_box(&doc), &mut sink).unwrap();
                black_box(sink.values);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_quoted_heavy);
criterion_main!(benches);
