//! End-to-end pipeline tests over larger, mixed-construct programs.

use tstrip_transpiler::{transpile_source, TranspileOptions};

fn transpile(source: &str) -> String {
    let output = transpile_source("program.ts", source, &TranspileOptions::default());
    assert!(
        output.is_valid(),
        "unexpected diagnostics: {:?}",
        output.diagnostics.diagnostics()
    );
    output.js
}

#[test]
fn test_small_service_program() {
    let source = "\
import { EventEmitter } from \"./events\";
import type { Logger } from \"./logging\";

interface ServiceOptions {
    name: string;
    retries?: number;
}

enum State {
    Stopped,
    Starting,
    Running
}

export class Service extends EventEmitter {
    private state: State = State.Stopped;

    constructor(private options: ServiceOptions, readonly id: number) {
        super();
    }

    async start(): Promise<void> {
        this.state = State.Starting;
        await this.connect();
        this.state = State.Running;
    }

    get running(): boolean {
        return this.state === State.Running;
    }

    private connect(): Promise<void> {
        return Promise.resolve();
    }
}
";
    let js = transpile(source);

    assert!(js.contains("import { EventEmitter } from \"./events\";"));
    assert!(!js.contains("Logger"));
    assert!(!js.contains("interface"));
    assert!(!js.contains(": State"));
    assert!(js.contains("var State;"));
    assert!(js.contains("State[State[\"Running\"] = 2] = \"Running\";"));
    assert!(js.contains("class Service extends EventEmitter {"));
    assert!(js.contains("this.options = options;"));
    assert!(js.contains("this.id = id;"));
    assert!(js.contains("super();"));
    assert!(js.contains("async start() {"));
    assert!(js.contains("await this.connect();"));
    assert!(js.contains("get running() {"));
}

#[test]
fn test_generics_heavy_program() {
    let source = "\
function identity<T>(x: T): T {
    return x;
}
const first = identity<Array<number>>([1, 2, 3])[0];
const pairs = new Map<string, Set<number>>();
const pick = <K extends string, V>(record: Record<K, V>, key: K): V => record[key];
const below = first < 10;
";
    let js = transpile(source);

    assert_eq!(
        js,
        "\
function identity(x) {
    return x;
}
const first = identity([1, 2, 3])[0];
const pairs = new Map();
const pick = (record, key) => record[key];
const below = first < 10;
"
    );
}

#[test]
fn test_async_generator_program() {
    let source = "\
async function* paginate(fetcher: Fetcher, pages: number) {
    for (let page = 0; page < pages; page++) {
        const batch = await fetcher.fetch(page);
        yield* batch.items;
    }
}
async function collect(fetcher: Fetcher): Promise<unknown[]> {
    const out: unknown[] = [];
    for await (const item of paginate(fetcher, 3)) {
        out.push(item);
    }
    return out;
}
";
    let js = transpile(source);

    assert!(js.contains("async function* paginate(fetcher, pages) {"));
    assert!(js.contains("yield* batch.items;"));
    assert!(js.contains("for await (const item of paginate(fetcher, 3)) {"));
    assert!(!js.contains("Promise<"));
    assert!(!js.contains(": unknown"));
}

#[test]
fn test_namespace_with_enum_and_nested_namespace() {
    let source = "\
namespace App.Config {
    export enum Level {
        Debug,
        Info
    }
    export const defaults = { level: Level.Info };
}
";
    let js = transpile(source);

    assert!(js.contains("var App;"));
    assert!(js.contains("(function (App) {"));
    assert!(js.contains("var Config;"));
    assert!(js.contains("App.Config = Config;"));
    assert!(js.contains("var Level;"));
    assert!(js.contains("Config.Level = Level;"));
    assert!(js.contains("Config.defaults = defaults;"));
}

#[test]
fn test_expression_zoo_round_trips() {
    let source = "\
const re = /ab[/]c/gi;
const chained = a?.b?.[c]?.();
const merged = left ?? right;
label: for (const key in table) {
    if (key === stop) {
        break label;
    }
    delete table[key];
}
const big = 9007199254740993n;
const spread = [...xs, ...ys];
const call = fn(...args);
switch (kind) {
    case \"a\":
        handle();
        break;
    default:
        fallback();
}
try {
    risky();
} catch (error) {
    report(error);
} finally {
    cleanup();
}
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_catch_annotation_strips() {
    assert_eq!(
        transpile("\
try {
    risky();
} catch (error: unknown) {
    report(error);
}
"),
        "\
try {
    risky();
} catch (error) {
    report(error);
}
"
    );
}

#[test]
fn test_parallel_batch_results_keep_input_order() {
    use std::io::Write;

    let dir = std::env::temp_dir().join(format!("tstrip_batch_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let mut paths = Vec::new();
    for i in 0..8 {
        let path = dir.join(format!("mod{}.ts", i));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "export const value{}: number = {};", i, i).unwrap();
        paths.push(path);
    }

    let results = tstrip_transpiler::transpile_files(&paths, &TranspileOptions::default());
    assert_eq!(results.len(), 8);
    for (i, result) in results.iter().enumerate() {
        let output = result.as_ref().unwrap();
        assert!(output.is_valid());
        assert_eq!(output.js, format!("export const value{} = {};\n", i, i));
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_lookahead_budget_is_enforced() {
    // A pathological parameter-list-like prefix that never closes; the
    // disambiguator must fail loudly rather than scan forever.
    let mut source = String::from("const f = (");
    for i in 0..600 {
        source.push_str(&format!("a{}, ", i));
    }
    source.push_str("x");
    let output = transpile_source(
        "deep.ts",
        &source,
        &TranspileOptions {
            jsx: None,
            max_lookahead: 64,
        },
    );
    assert!(!output.is_valid());
    assert!(output
        .diagnostics
        .diagnostics()
        .iter()
        .any(|d| d.code == 9501 || d.code == 1005));
}
