//! Emitter tests driving parse → emit directly, below the transpiler
//! facade.

use bumpalo::Bump;
use tstrip_ast::node::LanguageVariant;
use tstrip_core::intern::StringInterner;
use tstrip_emitter::{Emitter, EmitterOptions};
use tstrip_parser::{Parser, ParserOptions};

fn emit(source: &str) -> String {
    emit_with(source, EmitterOptions::default())
}

fn emit_with(source: &str, options: EmitterOptions) -> String {
    let arena = Bump::new();
    let interner = StringInterner::new();
    let parser = Parser::new(
        &arena,
        &interner,
        "emit.ts",
        source,
        ParserOptions {
            variant: LanguageVariant::Standard,
            max_lookahead: 256,
        },
    );
    let (source_file, diagnostics) = parser.parse_source_file();
    assert!(
        !diagnostics.has_errors(),
        "unexpected diagnostics: {:?}",
        diagnostics.diagnostics()
    );
    let mut emitter = Emitter::with_options(&interner, options);
    emitter.emit_source_file(&source_file)
}

#[test]
fn test_statement_layout() {
    assert_eq!(
        emit("const a = 1; const b = 2;"),
        "const a = 1;\nconst b = 2;\n"
    );
}

#[test]
fn test_block_indentation() {
    assert_eq!(
        emit("function f() { if (x) { g(); } }"),
        "\
function f() {
    if (x) {
        g();
    }
}
"
    );
}

#[test]
fn test_empty_block_stays_compact() {
    assert_eq!(emit("function noop() {}"), "function noop() {}\n");
}

#[test]
fn test_custom_indent_and_newline() {
    let output = emit_with(
        "function f() { return 1; }",
        EmitterOptions {
            indent: "  ".to_string(),
            newline: "\n".to_string(),
            trailing_newline: false,
        },
    );
    assert_eq!(output, "function f() {\n  return 1;\n}");
}

#[test]
fn test_string_quote_styles_preserved() {
    assert_eq!(
        emit("const a = 'single'; const b = \"double\";"),
        "const a = 'single';\nconst b = \"double\";\n"
    );
}

#[test]
fn test_escape_sequences_survive_verbatim() {
    assert_eq!(
        emit(r#"const s = "a\nb\t\"q\"";"#),
        "const s = \"a\\nb\\t\\\"q\\\"\";\n"
    );
}

#[test]
fn test_operator_spacing() {
    assert_eq!(
        emit("const v = a + b * c === d ? e : f;"),
        "const v = a + b * c === d ? e : f;\n"
    );
}

#[test]
fn test_comma_operator_formatting() {
    assert_eq!(emit("const v = (a, b, c);"), "const v = (a, b, c);\n");
}

#[test]
fn test_erasable_wrappers_leave_operand_only() {
    assert_eq!(
        emit("const v = ((value as Wide)!).inner;"),
        "const v = ((value)).inner;\n"
    );
}

#[test]
fn test_type_only_statements_produce_no_blank_lines() {
    assert_eq!(
        emit("\
const first = 1;
interface Gap {
    x: number;
}
const second = 2;
"),
        "const first = 1;\nconst second = 2;\n"
    );
}

#[test]
fn test_file_of_only_types_emits_nothing() {
    assert_eq!(emit("interface A { x: number; }\ntype B = A;\n"), "");
}
