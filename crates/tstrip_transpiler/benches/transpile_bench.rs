//! End-to-end transpile benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tstrip_transpiler::{transpile_source, TranspileOptions};

fn sample_source() -> String {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!(
            "\
interface Shape{i} {{
    kind: string;
    size: number;
}}
enum State{i} {{
    Idle,
    Busy
}}
export class Worker{i}<T> {{
    constructor(private queue: T[], readonly id: number) {{}}
    take(): T | undefined {{
        return this.queue.pop();
    }}
}}
const pick{i} = <T>(xs: T[]): T => xs[0];
const less{i} = {i} < 10;
",
            i = i
        ));
    }
    source
}

fn bench_transpile(c: &mut Criterion) {
    let source = sample_source();
    let options = TranspileOptions::default();
    c.bench_function("transpile_mixed_constructs", |b| {
        b.iter(|| {
            let output = transpile_source("bench.ts", black_box(&source), &options);
            black_box(output.js.len())
        })
    });
}

criterion_group!(benches, bench_transpile);
criterion_main!(benches);
