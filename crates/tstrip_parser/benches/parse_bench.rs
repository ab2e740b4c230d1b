//! Parser benchmark.

use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tstrip_core::intern::StringInterner;
use tstrip_parser::{Parser, ParserOptions};

fn sample_source() -> String {
    let mut source = String::new();
    for i in 0..500 {
        source.push_str(&format!(
            "\
function compute{i}(a: number, b: number): number {{
    const partial = a * {i} + b;
    return partial < 100 ? partial : partial % 100;
}}
const table{i} = new Map<string, number[]>();
",
            i = i
        ));
    }
    source
}

fn bench_parse(c: &mut Criterion) {
    let source = sample_source();
    let interner = StringInterner::new();
    c.bench_function("parse_functions_and_generics", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let parser = Parser::new(
                &arena,
                &interner,
                "bench.ts",
                black_box(&source),
                ParserOptions::default(),
            );
            let (source_file, diagnostics) = parser.parse_source_file();
            black_box((source_file.statements.len(), diagnostics.len()))
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
