//! Erasure property tests.
//!
//! Each test pins the exact JavaScript a TypeScript input erases to,
//! covering the contextual-grammar resolutions (arrow vs comparison,
//! type arguments vs relational operators, contextual keywords, binding
//! patterns vs literals) and the zero-residue guarantees.

use tstrip_transpiler::{transpile_source, TranspileOptions};

fn transpile(source: &str) -> String {
    let output = transpile_source("test.ts", source, &TranspileOptions::default());
    assert!(
        output.is_valid(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        output.diagnostics.diagnostics()
    );
    output.js
}

fn transpile_tsx(source: &str) -> String {
    let output = transpile_source("test.tsx", source, &TranspileOptions::default());
    assert!(
        output.is_valid(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        output.diagnostics.diagnostics()
    );
    output.js
}

// ============================================================================
// Erasure idempotence: plain JavaScript passes through unchanged
// ============================================================================

#[test]
fn test_plain_javascript_is_unchanged() {
    let source = "\
const x = 1;
function add(a, b) {
    return a + b;
}
const doubled = [1, 2, 3].map(v => v * 2);
if (x > 0) {
    console.log(\"positive\");
} else {
    console.log(\"non-positive\");
}
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_plain_loops_and_control_flow_unchanged() {
    let source = "\
for (let i = 0; i < 10; i++) {
    console.log(i);
}
for (const item of items) {
    console.log(item);
}
while (ready) {
    tick();
}
do {
    step();
} while (more());
";
    assert_eq!(transpile(source), source);
}

// ============================================================================
// Contextual-keyword identifier property
// ============================================================================

#[test]
fn test_contextual_keywords_stay_identifiers_as_property_names() {
    let source = "const box = { await: 42, yield: \"hello\" };\n";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_contextual_keywords_stay_identifiers_as_bindings() {
    let source = "\
const type = 1;
const namespace = type + 1;
const of = [namespace];
const async = of.length;
console.log(async);
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_await_is_identifier_outside_async_functions() {
    let source = "\
function sync(await) {
    return await + 1;
}
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_await_is_operator_inside_async_functions() {
    let source = "\
async function load() {
    return await fetch(\"/data\");
}
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_yield_is_operator_only_in_generators() {
    let source = "\
function* numbers() {
    yield 1;
    yield* rest();
}
const yield = 0;
";
    let expected = "\
function* numbers() {
    yield 1;
    yield* rest();
}
const yield = 0;
";
    assert_eq!(transpile(source), expected);
}

#[test]
fn test_of_shadowed_inside_for_of_head() {
    let source = "\
for (const of of list) {
    console.log(of);
}
";
    assert_eq!(transpile(source), source);
}

// ============================================================================
// Generic-vs-comparison property
// ============================================================================

#[test]
fn test_less_than_stays_a_comparison() {
    let source = "const isLessThan = 5 < 10;\n";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_generic_arrow_erases_to_plain_arrow() {
    assert_eq!(
        transpile("const identity = <T>(x: T): T => x;\n"),
        "const identity = (x) => x;\n"
    );
}

#[test]
fn test_arrow_and_comparison_resolve_independently_in_one_scope() {
    let source = "\
const comparison = 1 < 2;
const genericArrow = <T>(x: T) => x;
";
    let expected = "\
const comparison = 1 < 2;
const genericArrow = (x) => x;
";
    assert_eq!(transpile(source), expected);
}

#[test]
fn test_shift_operators_survive_rescanning() {
    let source = "\
const a = x >> 2;
const b = x >>> 2;
const c = x >= y;
";
    assert_eq!(transpile(source), source);
}

// ============================================================================
// Type-argument stripping property
// ============================================================================

#[test]
fn test_call_type_arguments_vanish_with_arguments_untouched() {
    assert_eq!(
        transpile("identity<Array<number>>([1, 2, 3].filter(x => x < 3));\n"),
        "identity([1, 2, 3].filter(x => x < 3));\n"
    );
}

#[test]
fn test_nested_generic_closers_split() {
    assert_eq!(
        transpile("const m = new Map<string, Array<number>>();\n"),
        "const m = new Map();\n"
    );
}

#[test]
fn test_less_than_call_without_closing_angle_is_comparison() {
    let source = "const r = f < g, h = i > (2);\n";
    // `f < g` and `i > (2)` are comparisons; the commas separate
    // declarators, not type arguments.
    assert_eq!(transpile(source), source);
}

// ============================================================================
// Destructuring-position property
// ============================================================================

#[test]
fn test_binding_pattern_vs_object_literal() {
    let source = "\
const { a, b } = obj;
const obj2 = { a: 1, b: 2 };
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_nested_patterns_with_defaults_and_rest() {
    let source = "\
const { a: { b = 1 }, ...rest } = value;
const [first, , third = 3] = items;
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_annotated_destructuring_loses_only_the_annotation() {
    assert_eq!(
        transpile("const { a, b }: Pair = obj;\n"),
        "const { a, b } = obj;\n"
    );
}

// ============================================================================
// Tagged-template scenario
// ============================================================================

#[test]
fn test_tagged_template_is_preserved() {
    let source = "tag`hello ${42} world`;\n";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_tagged_template_with_type_arguments() {
    assert_eq!(
        transpile("tag<string>`value: ${x}`;\n"),
        "tag`value: ${x}`;\n"
    );
}

#[test]
fn test_untagged_template_is_a_plain_expression() {
    let source = "const s = `a ${b} c ${d} e`;\n";
    assert_eq!(transpile(source), source);
}

// ============================================================================
// Annotation and wrapper stripping
// ============================================================================

#[test]
fn test_variable_and_parameter_annotations_strip() {
    assert_eq!(
        transpile("\
const n: number = 1;
function scale(value: number, factor: number = 2): number {
    return value * factor;
}
"),
        "\
const n = 1;
function scale(value, factor = 2) {
    return value * factor;
}
"
    );
}

#[test]
fn test_as_satisfies_and_nonnull_wrappers_strip() {
    assert_eq!(
        transpile("\
const a = input as number;
const b = { port: 8080 } satisfies Config;
const c = maybe!;
"),
        "\
const a = input;
const b = { port: 8080 };
const c = maybe;
"
    );
}

#[test]
fn test_angle_bracket_assertion_strips() {
    assert_eq!(
        transpile("const len = (<string>value).length;\n"),
        "const len = (value).length;\n"
    );
}

#[test]
fn test_definite_assignment_assertion_strips() {
    assert_eq!(transpile("let ready!: boolean;\n"), "let ready;\n");
}

#[test]
fn test_interface_and_type_alias_erase_completely() {
    assert_eq!(
        transpile("\
interface Shape {
    kind: string;
    area(): number;
}
type Alias = Shape | null;
type Conditional<T> = T extends string ? T : never;
const live = 1;
"),
        "const live = 1;\n"
    );
}

#[test]
fn test_declare_statements_erase_completely() {
    assert_eq!(
        transpile("\
declare const env: string;
declare function impure(): void;
declare module \"fake\" {
    const x: number;
}
const live = 2;
"),
        "const live = 2;\n"
    );
}

#[test]
fn test_overload_signatures_erase() {
    assert_eq!(
        transpile("\
function pick(value: string): string;
function pick(value: number): number;
function pick(value: any) {
    return value;
}
"),
        "\
function pick(value) {
    return value;
}
"
    );
}

#[test]
fn test_this_parameter_erases() {
    assert_eq!(
        transpile("\
function tagOf(this: Element, suffix: string) {
    return this.tagName + suffix;
}
"),
        "\
function tagOf(suffix) {
    return this.tagName + suffix;
}
"
    );
}

// ============================================================================
// Imports and exports
// ============================================================================

#[test]
fn test_type_only_import_erases_entirely() {
    assert_eq!(
        transpile("\
import type { Config } from \"./config\";
const c = 1;
"),
        "const c = 1;\n"
    );
}

#[test]
fn test_type_only_specifiers_erase_individually() {
    assert_eq!(
        transpile("import { type Config, loadConfig } from \"./config\";\n"),
        "import { loadConfig } from \"./config\";\n"
    );
}

#[test]
fn test_named_import_with_only_type_specifiers_vanishes() {
    assert_eq!(
        transpile("\
import { type A, type B } from \"./types\";
const ok = true;
"),
        "const ok = true;\n"
    );
}

#[test]
fn test_value_imports_survive() {
    let source = "\
import defaultThing, { named, other as renamed } from \"./things\";
import * as ns from \"./ns\";
import \"./side-effect\";
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_export_declarations() {
    let source = "\
export const shared = 1;
export function helper() {
    return shared;
}
export { helper as util };
export * from \"./reexports\";
export default shared;
";
    assert_eq!(transpile(source), source);
}

#[test]
fn test_type_only_exports_erase() {
    assert_eq!(
        transpile("\
export type { Config } from \"./config\";
export interface Props {
    id: number;
}
export const live = 3;
"),
        "export const live = 3;\n"
    );
}

// ============================================================================
// Runtime materializations
// ============================================================================

#[test]
fn test_numeric_enum_materializes_with_reverse_mappings() {
    assert_eq!(
        transpile("\
enum Color {
    Red,
    Green,
    Blue
}
"),
        "\
var Color;
(function (Color) {
    Color[Color[\"Red\"] = 0] = \"Red\";
    Color[Color[\"Green\"] = 1] = \"Green\";
    Color[Color[\"Blue\"] = 2] = \"Blue\";
})(Color || (Color = {}));
"
    );
}

#[test]
fn test_enum_initializers_constant_fold() {
    assert_eq!(
        transpile("\
enum Flags {
    None = 0,
    Read = 1 << 0,
    Write = 1 << 1,
    All = Read | Write
}
"),
        "\
var Flags;
(function (Flags) {
    Flags[Flags[\"None\"] = 0] = \"None\";
    Flags[Flags[\"Read\"] = 1] = \"Read\";
    Flags[Flags[\"Write\"] = 2] = \"Write\";
    Flags[Flags[\"All\"] = 3] = \"All\";
})(Flags || (Flags = {}));
"
    );
}

#[test]
fn test_string_enum_has_no_reverse_mapping() {
    assert_eq!(
        transpile("\
enum Direction {
    Up = \"UP\",
    Down = \"DOWN\"
}
"),
        "\
var Direction;
(function (Direction) {
    Direction[\"Up\"] = \"UP\";
    Direction[\"Down\"] = \"DOWN\";
})(Direction || (Direction = {}));
"
    );
}

#[test]
fn test_namespace_materializes_with_export_assignments() {
    assert_eq!(
        transpile("\
namespace Geometry {
    export const PI = 3.14;
    export function area(r: number): number {
        return PI * r * r;
    }
    const hidden = 1;
}
"),
        "\
var Geometry;
(function (Geometry) {
    const PI = 3.14;
    Geometry.PI = PI;
    function area(r) {
        return PI * r * r;
    }
    Geometry.area = area;
    const hidden = 1;
})(Geometry || (Geometry = {}));
"
    );
}

#[test]
fn test_type_only_namespace_vanishes() {
    assert_eq!(
        transpile("\
namespace Types {
    export interface A {
        x: number;
    }
    export type B = A;
}
const live = 4;
"),
        "const live = 4;\n"
    );
}

#[test]
fn test_parameter_properties_materialize() {
    assert_eq!(
        transpile("\
class Point {
    constructor(private x: number, private y: number) {}
}
"),
        "\
class Point {
    constructor(x, y) {
        this.x = x;
        this.y = y;
    }
}
"
    );
}

#[test]
fn test_parameter_properties_follow_super_call() {
    assert_eq!(
        transpile("\
class Point3 extends Point {
    constructor(x: number, y: number, private z: number) {
        super(x, y);
    }
}
"),
        "\
class Point3 extends Point {
    constructor(x, y, z) {
        super(x, y);
        this.z = z;
    }
}
"
    );
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_erasure_keeps_runtime_members() {
    assert_eq!(
        transpile("\
abstract class Shape implements Drawable {
    abstract area(): number;
    readonly name: string = \"shape\";
    private count?: number;
    [key: string]: unknown;
    describe(): string {
        return this.name;
    }
    static origin = 0;
    get label(): string {
        return this.name;
    }
}
"),
        "\
class Shape {
    name = \"shape\";
    count;
    describe() {
        return this.name;
    }
    static origin = 0;
    get label() {
        return this.name;
    }
}
"
    );
}

#[test]
fn test_generic_class_erases_type_parameters() {
    assert_eq!(
        transpile("\
class Box<T> {
    value: T;
    constructor(value: T) {
        this.value = value;
    }
}
const box = new Box<string>(\"hi\");
"),
        "\
class Box {
    value;
    constructor(value) {
        this.value = value;
    }
}
const box = new Box(\"hi\");
"
    );
}

// ============================================================================
// JSX vs assertion resolution
// ============================================================================

#[test]
fn test_jsx_element_preserved_in_jsx_mode() {
    let source = "const app = <div className=\"root\">{count}</div>;\n";
    assert_eq!(transpile_tsx(source), source);
}

#[test]
fn test_jsx_self_closing_and_fragment() {
    let source = "const app = <>{items}<br /></>;\n";
    assert_eq!(transpile_tsx(source), source);
}

#[test]
fn test_parenthesized_angle_assertion_in_jsx_mode() {
    // `<T>(expr)` — parenthesized immediately — is a type assertion even
    // with JSX enabled.
    assert_eq!(
        transpile_tsx("const n = <num>(value);\n"),
        "const n = (value);\n"
    );
}

#[test]
fn test_angle_assertion_in_standard_mode() {
    assert_eq!(
        transpile("const n = <num>value;\n"),
        "const n = value;\n"
    );
}

// ============================================================================
// Discriminated tags need no runtime machinery
// ============================================================================

#[test]
fn test_tag_narrowing_erases_to_field_checks() {
    assert_eq!(
        transpile("\
type Shape = { kind: \"circle\"; r: number } | { kind: \"square\"; s: number };
function area(shape: Shape): number {
    if (shape.kind === \"circle\") {
        return 3.14 * shape.r * shape.r;
    }
    return shape.s * shape.s;
}
"),
        "\
function area(shape) {
    if (shape.kind === \"circle\") {
        return 3.14 * shape.r * shape.r;
    }
    return shape.s * shape.s;
}
"
    );
}
