//! Parser integration tests.
//!
//! Structural assertions over the built tree, with emphasis on the
//! context-sensitive resolutions: arrow vs comparison, type arguments vs
//! relational operators, contextual keywords, binding patterns.

use bumpalo::Bump;
use tstrip_ast::node::*;
use tstrip_ast::syntax_kind::SyntaxKind;
use tstrip_core::intern::StringInterner;
use tstrip_parser::{Parser, ParserOptions};

fn parse_with<'a, R>(
    source: &str,
    options: ParserOptions,
    check: impl FnOnce(&SourceFile<'_>, &StringInterner) -> R,
) -> R {
    let arena = Bump::new();
    let interner = StringInterner::new();
    let parser = Parser::new(&arena, &interner, "test.ts", source, options);
    let (source_file, diagnostics) = parser.parse_source_file();
    assert!(
        !diagnostics.has_errors(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        diagnostics.diagnostics()
    );
    check(&source_file, &interner)
}

fn parse<R>(source: &str, check: impl FnOnce(&SourceFile<'_>, &StringInterner) -> R) -> R {
    parse_with(source, ParserOptions::default(), check)
}

fn statement_count(source: &str) -> usize {
    parse(source, |sf, _| sf.statements.len())
}

fn first_initializer<'b>(source_file: &'b SourceFile<'b>) -> &'b Expression<'b> {
    match &source_file.statements[0] {
        Statement::VariableStatement(v) => v.declaration_list.declarations[0]
            .initializer
            .expect("expected an initializer"),
        other => panic!("expected a variable statement, got {:?}", other.kind()),
    }
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_parse_variable_statements() {
    assert_eq!(statement_count("const x = 42;"), 1);
    assert_eq!(statement_count("let y = 'hello';"), 1);
    assert_eq!(statement_count("var z = true, w = false;"), 1);
    assert_eq!(statement_count("const a = 1; let b = 2; var c = 3;"), 3);
    assert_eq!(statement_count("const x: number = 42;"), 1);
}

#[test]
fn test_parse_functions_and_classes() {
    assert_eq!(statement_count("function foo() {}"), 1);
    assert_eq!(
        statement_count("function add(a: number, b: number): number { return a + b; }"),
        1
    );
    assert_eq!(statement_count("async function go() { return await f(); }"), 1);
    assert_eq!(statement_count("function* gen() { yield 1; }"), 1);
    assert_eq!(
        statement_count("class Person extends Base implements Named { name: string; }"),
        1
    );
}

#[test]
fn test_parse_type_declarations() {
    assert_eq!(statement_count("interface Foo { bar: string; }"), 1);
    assert_eq!(statement_count("type Name = string;"), 1);
    assert_eq!(statement_count("type R = A | B & C;"), 1);
    assert_eq!(
        statement_count("type IsString<T> = T extends string ? true : false;"),
        1
    );
    assert_eq!(
        statement_count("type Readonly2<T> = { readonly [P in keyof T]: T[P] };"),
        1
    );
    assert_eq!(statement_count("enum Color { Red, Green, Blue }"), 1);
}

#[test]
fn test_parse_control_flow() {
    let source = "\
if (a) { b(); } else if (c) { d(); }
for (let i = 0; i < n; i++) { work(i); }
for (const k in obj) { visit(k); }
for (const v of list) { use(v); }
while (cond) { spin(); }
do { once(); } while (again);
switch (x) { case 1: break; default: break; }
try { run(); } catch (e) { log(e); } finally { done(); }
";
    assert_eq!(statement_count(source), 8);
}

// ============================================================================
// Arrow vs comparison
// ============================================================================

#[test]
fn test_less_than_parses_as_binary_comparison() {
    parse("const isLessThan = 5 < 10;", |sf, _| {
        match first_initializer(sf) {
            Expression::Binary(binary) => {
                assert_eq!(binary.operator, SyntaxKind::LessThanToken);
            }
            other => panic!("expected a comparison, got {:?}", other.kind()),
        }
    });
}

#[test]
fn test_generic_arrow_parses_as_arrow_function() {
    parse("const identity = <T>(x: T): T => x;", |sf, _| {
        match first_initializer(sf) {
            Expression::ArrowFunction(arrow) => {
                assert!(arrow.type_parameters.is_some());
                assert!(arrow.parenthesized);
                assert_eq!(arrow.parameters.len(), 1);
                assert!(arrow.parameters[0].type_annotation.is_some());
                assert!(arrow.return_type.is_some());
            }
            other => panic!("expected an arrow function, got {:?}", other.kind()),
        }
    });
}

#[test]
fn test_bare_parameter_arrow_keeps_bare_form() {
    parse("const f = x => x;", |sf, _| match first_initializer(sf) {
        Expression::ArrowFunction(arrow) => {
            assert!(!arrow.parenthesized);
            assert!(arrow.type_parameters.is_none());
        }
        other => panic!("expected an arrow function, got {:?}", other.kind()),
    });
}

#[test]
fn test_parenthesized_expression_is_not_an_arrow() {
    parse("const v = (a + b);", |sf, _| match first_initializer(sf) {
        Expression::Parenthesized(_) => {}
        other => panic!("expected a parenthesized expression, got {:?}", other.kind()),
    });
}

#[test]
fn test_async_arrow_and_async_identifier() {
    parse("const f = async (x: number) => x;", |sf, _| {
        match first_initializer(sf) {
            Expression::ArrowFunction(arrow) => {
                assert!(arrow
                    .data
                    .modifier_flags
                    .contains(tstrip_ast::flags::ModifierFlags::ASYNC));
            }
            other => panic!("expected an async arrow, got {:?}", other.kind()),
        }
    });
    parse("const total = async + 1;", |sf, interner| {
        match first_initializer(sf) {
            Expression::Binary(binary) => match binary.left {
                Expression::Identifier(id) => {
                    assert_eq!(interner.resolve(id.text), "async");
                }
                other => panic!("expected identifier, got {:?}", other.kind()),
            },
            other => panic!("expected a binary expression, got {:?}", other.kind()),
        }
    });
}

// ============================================================================
// Call-site type arguments vs relational operators
// ============================================================================

#[test]
fn test_call_type_arguments_commit_only_before_call() {
    parse("identity<Array<number>>(value);", |sf, _| {
        match &sf.statements[0] {
            Statement::ExpressionStatement(statement) => match statement.expression {
                Expression::Call(call) => {
                    let arguments = call.type_arguments.expect("expected type arguments");
                    assert_eq!(arguments.len(), 1);
                    assert_eq!(call.arguments.len(), 1);
                }
                other => panic!("expected a call, got {:?}", other.kind()),
            },
            other => panic!("expected an expression statement, got {:?}", other.kind()),
        }
    });
}

#[test]
fn test_less_than_without_call_is_relational() {
    parse("const r = a < b > c;", |sf, _| match first_initializer(sf) {
        // `(a < b) > c` — two relational operators, no type arguments.
        Expression::Binary(outer) => {
            assert_eq!(outer.operator, SyntaxKind::GreaterThanToken);
            match outer.left {
                Expression::Binary(inner) => {
                    assert_eq!(inner.operator, SyntaxKind::LessThanToken)
                }
                other => panic!("expected nested comparison, got {:?}", other.kind()),
            }
        }
        other => panic!("expected a comparison, got {:?}", other.kind()),
    });
}

// ============================================================================
// Contextual keywords
// ============================================================================

#[test]
fn test_contextual_keywords_as_property_names() {
    parse("const box = { await: 42, yield: 7, type: 1, as: 2 };", |sf, _| {
        match first_initializer(sf) {
            Expression::ObjectLiteral(object) => assert_eq!(object.properties.len(), 4),
            other => panic!("expected an object literal, got {:?}", other.kind()),
        }
    });
}

#[test]
fn test_await_identifier_outside_async() {
    parse("const await = 1;", |sf, interner| match &sf.statements[0] {
        Statement::VariableStatement(v) => {
            match &v.declaration_list.declarations[0].name {
                BindingName::Identifier(id) => {
                    assert_eq!(interner.resolve(id.text), "await")
                }
                other => panic!("expected identifier binding, got {:?}", other.kind()),
            }
        }
        other => panic!("expected a variable statement, got {:?}", other.kind()),
    });
}

#[test]
fn test_await_expression_inside_async() {
    parse(
        "async function go() { const v = await p; return v; }",
        |sf, _| match &sf.statements[0] {
            Statement::FunctionDeclaration(function) => {
                let body = function.body.as_ref().expect("expected a body");
                match &body.statements[0] {
                    Statement::VariableStatement(v) => {
                        match v.declaration_list.declarations[0].initializer.unwrap() {
                            Expression::Await(_) => {}
                            other => panic!("expected await, got {:?}", other.kind()),
                        }
                    }
                    other => panic!("expected variable statement, got {:?}", other.kind()),
                }
            }
            other => panic!("expected a function, got {:?}", other.kind()),
        },
    );
}

#[test]
fn test_of_as_binding_in_for_of() {
    assert_eq!(statement_count("for (const of of list) { use(of); }"), 1);
}

#[test]
fn test_get_set_in_object_literals() {
    parse(
        "const o = { get value() { return 1; }, set value(v) {}, get: 1 };",
        |sf, _| match first_initializer(sf) {
            Expression::ObjectLiteral(object) => {
                assert!(matches!(
                    object.properties[0],
                    ObjectLiteralElement::GetAccessor(_)
                ));
                assert!(matches!(
                    object.properties[1],
                    ObjectLiteralElement::SetAccessor(_)
                ));
                assert!(matches!(
                    object.properties[2],
                    ObjectLiteralElement::PropertyAssignment(_)
                ));
            }
            other => panic!("expected an object literal, got {:?}", other.kind()),
        },
    );
}

// ============================================================================
// Destructuring vs literals
// ============================================================================

#[test]
fn test_binding_position_parses_patterns() {
    parse("const { a, b } = obj;", |sf, _| match &sf.statements[0] {
        Statement::VariableStatement(v) => {
            assert!(matches!(
                v.declaration_list.declarations[0].name,
                BindingName::ObjectPattern(_)
            ));
        }
        other => panic!("expected a variable statement, got {:?}", other.kind()),
    });
}

#[test]
fn test_expression_position_parses_literals() {
    parse("const obj = { a: 1, b: 2 };", |sf, _| {
        assert!(matches!(
            first_initializer(sf),
            Expression::ObjectLiteral(_)
        ));
    });
}

// ============================================================================
// Templates and regex re-lexing
// ============================================================================

#[test]
fn test_tagged_template_requires_adjacency() {
    parse("tag`a ${1} b`;", |sf, _| match &sf.statements[0] {
        Statement::ExpressionStatement(statement) => {
            assert!(matches!(statement.expression, Expression::TaggedTemplate(_)));
        }
        other => panic!("expected an expression statement, got {:?}", other.kind()),
    });
}

#[test]
fn test_template_spans_carry_text() {
    parse("const s = `a ${x} b ${y} c`;", |sf, _| {
        match first_initializer(sf) {
            Expression::Template(template) => {
                assert_eq!(template.head_text, "a ");
                assert_eq!(template.spans.len(), 2);
                assert_eq!(template.spans[0].literal_text, " b ");
                assert_eq!(template.spans[1].literal_text, " c");
            }
            other => panic!("expected a template, got {:?}", other.kind()),
        }
    });
}

#[test]
fn test_slash_rescans_to_regex_at_expression_start() {
    parse("const re = /a[/]b/g;", |sf, _| match first_initializer(sf) {
        Expression::RegularExpressionLiteral(regex) => {
            assert_eq!(regex.text, "/a[/]b/g");
        }
        other => panic!("expected a regex, got {:?}", other.kind()),
    });
}

#[test]
fn test_slash_is_division_after_expression() {
    parse("const half = total / 2;", |sf, _| {
        match first_initializer(sf) {
            Expression::Binary(binary) => {
                assert_eq!(binary.operator, SyntaxKind::SlashToken)
            }
            other => panic!("expected division, got {:?}", other.kind()),
        }
    });
}

// ============================================================================
// Enum value recording
// ============================================================================

#[test]
fn test_enum_values_recorded_at_parse_time() {
    parse(
        "enum E { A, B = 10, C, D = A + C, S = \"text\", X = compute() }",
        |sf, _| match &sf.statements[0] {
            Statement::EnumDeclaration(e) => {
                assert_eq!(e.members[0].value, EnumMemberValue::Number(0.0));
                assert_eq!(e.members[1].value, EnumMemberValue::Number(10.0));
                assert_eq!(e.members[2].value, EnumMemberValue::Number(11.0));
                assert_eq!(e.members[3].value, EnumMemberValue::Number(11.0));
                assert_eq!(
                    e.members[4].value,
                    EnumMemberValue::String("text".to_string())
                );
                assert_eq!(e.members[5].value, EnumMemberValue::Computed);
            }
            other => panic!("expected an enum, got {:?}", other.kind()),
        },
    );
}

// ============================================================================
// JSX mode
// ============================================================================

#[test]
fn test_jsx_element_in_jsx_mode() {
    parse_with(
        "const app = <div id=\"root\">{content}</div>;",
        ParserOptions {
            variant: LanguageVariant::Jsx,
            max_lookahead: 256,
        },
        |sf, _| match first_initializer(sf) {
            Expression::JsxElement(element) => {
                assert_eq!(element.attributes.len(), 1);
                assert_eq!(element.children.len(), 1);
            }
            other => panic!("expected a JSX element, got {:?}", other.kind()),
        },
    );
}

#[test]
fn test_angle_bracket_assertion_in_standard_mode() {
    parse("const n = <num>value;", |sf, _| {
        assert!(matches!(
            first_initializer(sf),
            Expression::TypeAssertion(_)
        ));
    });
}

#[test]
fn test_parenthesized_assertion_in_jsx_mode() {
    parse_with(
        "const n = <num>(value);",
        ParserOptions {
            variant: LanguageVariant::Jsx,
            max_lookahead: 256,
        },
        |sf, _| {
            assert!(matches!(
                first_initializer(sf),
                Expression::TypeAssertion(_)
            ));
        },
    );
}

// ============================================================================
// Imports and exports
// ============================================================================

#[test]
fn test_import_forms() {
    let source = "\
import def from \"./a\";
import def2, { one, two as three } from \"./b\";
import * as ns from \"./c\";
import type { OnlyTypes } from \"./d\";
import { type Mixed, value } from \"./e\";
import \"./side-effect\";
";
    parse(source, |sf, _| {
        assert_eq!(sf.statements.len(), 6);
        match &sf.statements[3] {
            Statement::ImportDeclaration(import) => {
                assert!(import.import_clause.as_ref().unwrap().is_type_only);
            }
            other => panic!("expected an import, got {:?}", other.kind()),
        }
        match &sf.statements[4] {
            Statement::ImportDeclaration(import) => {
                let clause = import.import_clause.as_ref().unwrap();
                assert!(!clause.is_type_only);
                match clause.named_bindings.as_ref().unwrap() {
                    NamedImportBindings::Named(specifiers) => {
                        assert!(specifiers[0].is_type_only);
                        assert!(!specifiers[1].is_type_only);
                    }
                    other => panic!("expected named imports, got {:?}", other),
                }
            }
            other => panic!("expected an import, got {:?}", other.kind()),
        }
    });
}

#[test]
fn test_export_forms() {
    let source = "\
export const a = 1;
export { a as b };
export * as everything from \"./m\";
export default a;
export type { T } from \"./t\";
";
    assert_eq!(statement_count(source), 5);
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn test_unbalanced_brace_is_a_structural_error() {
    let arena = Bump::new();
    let interner = StringInterner::new();
    let parser = Parser::new(
        &arena,
        &interner,
        "bad.ts",
        "function broken( {",
        ParserOptions::default(),
    );
    let (_, diagnostics) = parser.parse_source_file();
    assert!(diagnostics.has_errors());
}

#[test]
fn test_recovery_continues_after_bad_statement() {
    let arena = Bump::new();
    let interner = StringInterner::new();
    let parser = Parser::new(
        &arena,
        &interner,
        "bad.ts",
        "const x = ;\nconst y = 2;",
        ParserOptions::default(),
    );
    let (source_file, diagnostics) = parser.parse_source_file();
    assert!(diagnostics.has_errors());
    assert_eq!(source_file.statements.len(), 2);
}
