//! AST node definitions.
//!
//! Nodes reference child nodes via arena-allocated references (`&'a T`,
//! `&'a [T]`). Type-position nodes (`TypeNode` and friends) hang off
//! executable nodes only through optional annotation edges; the emitter
//! never follows those edges, which is what guarantees zero type residue in
//! the output.

use crate::flags::{ModifierFlags, NodeFlags};
use crate::syntax_kind::SyntaxKind;
use tstrip_core::intern::InternedString;
use tstrip_core::text::TextRange;

// ============================================================================
// Core node header
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range (diagnostics only).
    pub range: TextRange,
    /// Node flags.
    pub flags: NodeFlags,
    /// Modifier flags (for declarations).
    pub modifier_flags: ModifierFlags,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
            modifier_flags: ModifierFlags::NONE,
        }
    }

    pub fn with_modifiers(kind: SyntaxKind, pos: u32, end: u32, modifiers: ModifierFlags) -> Self {
        let mut data = Self::new(kind, pos, end);
        data.modifier_flags = modifiers;
        data
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// Access to the common node header, implemented by every node enum.
pub trait AstNode {
    fn data(&self) -> &NodeData;

    fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    fn range(&self) -> TextRange {
        self.data().range
    }
}

// ============================================================================
// Source file
// ============================================================================

/// Language variant: plain TypeScript or TypeScript with JSX enabled.
/// Decides how `<` resolves at expression start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageVariant {
    Standard,
    Jsx,
}

#[derive(Debug)]
pub struct SourceFile<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
    pub file_name: String,
    pub variant: LanguageVariant,
}

// ============================================================================
// Identifiers and names
// ============================================================================

#[derive(Debug, Clone)]
pub struct Identifier {
    pub data: NodeData,
    /// The interned text of this identifier.
    pub text: InternedString,
}

#[derive(Debug)]
pub enum EntityName<'a> {
    Identifier(Identifier),
    Qualified(&'a QualifiedName<'a>),
}

#[derive(Debug)]
pub struct QualifiedName<'a> {
    pub data: NodeData,
    pub left: EntityName<'a>,
    pub right: Identifier,
}

#[derive(Debug)]
pub struct ComputedPropertyName<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub enum PropertyName<'a> {
    Identifier(Identifier),
    PrivateIdentifier(Identifier),
    StringLiteral(StringLiteral),
    NumericLiteral(NumericLiteral),
    Computed(&'a ComputedPropertyName<'a>),
}

#[derive(Debug)]
pub enum MemberName {
    Identifier(Identifier),
    PrivateIdentifier(Identifier),
}

// ============================================================================
// Binding patterns
// ============================================================================

#[derive(Debug)]
pub enum BindingName<'a> {
    Identifier(Identifier),
    ObjectPattern(&'a ObjectBindingPattern<'a>),
    ArrayPattern(&'a ArrayBindingPattern<'a>),
}

#[derive(Debug)]
pub struct ObjectBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, BindingElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, ArrayBindingElement<'a>>,
}

#[derive(Debug)]
pub enum ArrayBindingElement<'a> {
    Element(BindingElement<'a>),
    /// An elided slot: `[, a]`.
    Hole(NodeData),
}

#[derive(Debug)]
pub struct BindingElement<'a> {
    pub data: NodeData,
    pub dot_dot_dot: bool,
    pub property_name: Option<PropertyName<'a>>,
    pub name: BindingName<'a>,
    pub initializer: Option<&'a Expression<'a>>,
}

// ============================================================================
// Type positions (erasable; the emitter never serializes these)
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    Keyword(KeywordTypeNode),
    TypeReference(TypeReferenceNode<'a>),
    Function(FunctionTypeNode<'a>),
    Constructor(ConstructorTypeNode<'a>),
    TypeQuery(TypeQueryNode<'a>),
    TypeLiteral(TypeLiteralNode<'a>),
    Array(ArrayTypeNode<'a>),
    Tuple(TupleTypeNode<'a>),
    Optional(OptionalTypeNode<'a>),
    Rest(RestTypeNode<'a>),
    Union(UnionTypeNode<'a>),
    Intersection(IntersectionTypeNode<'a>),
    Conditional(ConditionalTypeNode<'a>),
    Infer(InferTypeNode<'a>),
    Parenthesized(ParenthesizedTypeNode<'a>),
    This(ThisTypeNode),
    TypeOperator(TypeOperatorNode<'a>),
    IndexedAccess(IndexedAccessTypeNode<'a>),
    Mapped(MappedTypeNode<'a>),
    Literal(LiteralTypeNode<'a>),
    NamedTupleMember(NamedTupleMemberNode<'a>),
    TemplateLiteral(TemplateLiteralTypeNode<'a>),
    Predicate(TypePredicateNode<'a>),
}

#[derive(Debug)]
pub struct KeywordTypeNode {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct TypeReferenceNode<'a> {
    pub data: NodeData,
    pub type_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

#[derive(Debug)]
pub struct FunctionTypeNode<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct ConstructorTypeNode<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TypeQueryNode<'a> {
    pub data: NodeData,
    pub expr_name: EntityName<'a>,
}

#[derive(Debug)]
pub struct TypeLiteralNode<'a> {
    pub data: NodeData,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayTypeNode<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TupleTypeNode<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct OptionalTypeNode<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct RestTypeNode<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct UnionTypeNode<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct IntersectionTypeNode<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

/// `T extends U ? X : Y` — only legal inside a type position; has no runtime
/// representation at all.
#[derive(Debug)]
pub struct ConditionalTypeNode<'a> {
    pub data: NodeData,
    pub check_type: &'a TypeNode<'a>,
    pub extends_type: &'a TypeNode<'a>,
    pub true_type: &'a TypeNode<'a>,
    pub false_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct InferTypeNode<'a> {
    pub data: NodeData,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
}

#[derive(Debug)]
pub struct ParenthesizedTypeNode<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct ThisTypeNode {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct TypeOperatorNode<'a> {
    pub data: NodeData,
    /// KeyOfKeyword, UniqueKeyword, or ReadonlyKeyword.
    pub operator: SyntaxKind,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct IndexedAccessTypeNode<'a> {
    pub data: NodeData,
    pub object_type: &'a TypeNode<'a>,
    pub index_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct MappedTypeNode<'a> {
    pub data: NodeData,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
    pub name_type: Option<&'a TypeNode<'a>>,
    pub type_node: Option<&'a TypeNode<'a>>,
}

#[derive(Debug)]
pub struct LiteralTypeNode<'a> {
    pub data: NodeData,
    pub literal: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct NamedTupleMemberNode<'a> {
    pub data: NodeData,
    pub dot_dot_dot: bool,
    pub name: Identifier,
    pub question: bool,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TemplateLiteralTypeNode<'a> {
    pub data: NodeData,
    pub head_text: String,
    pub spans: NodeList<'a, TemplateLiteralTypeSpan<'a>>,
}

#[derive(Debug)]
pub struct TemplateLiteralTypeSpan<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub literal_text: String,
}

/// `x is T` / `asserts x is T` in a return-type position.
#[derive(Debug)]
pub struct TypePredicateNode<'a> {
    pub data: NodeData,
    pub asserts: bool,
    pub parameter_name: Identifier,
    pub type_node: Option<&'a TypeNode<'a>>,
}

/// Heritage clause entry: an expression with optional type arguments
/// (`extends Base<T>`). The expression half is executable; the type
/// arguments are erasable.
#[derive(Debug)]
pub struct ExpressionWithTypeArguments<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

// ============================================================================
// Type members (interface / type-literal bodies)
// ============================================================================

#[derive(Debug)]
pub enum TypeElement<'a> {
    PropertySignature(PropertySignatureNode<'a>),
    MethodSignature(MethodSignatureNode<'a>),
    CallSignature(CallSignatureNode<'a>),
    ConstructSignature(ConstructSignatureNode<'a>),
    IndexSignature(IndexSignatureNode<'a>),
}

#[derive(Debug)]
pub struct PropertySignatureNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub question: bool,
    pub type_annotation: Option<&'a TypeNode<'a>>,
}

#[derive(Debug)]
pub struct MethodSignatureNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub question: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
}

#[derive(Debug)]
pub struct CallSignatureNode<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ConstructSignatureNode<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
}

#[derive(Debug)]
pub struct IndexSignatureNode<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub type_annotation: Option<&'a TypeNode<'a>>,
}

// ============================================================================
// Signature elements
// ============================================================================

#[derive(Debug)]
pub struct TypeParameterDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub constraint: Option<&'a TypeNode<'a>>,
    pub default: Option<&'a TypeNode<'a>>,
}

/// A parameter. `modifier_flags` in the header records parameter-property
/// modifiers on constructor parameters; the type annotation and `question`
/// marker are erasable, the name/rest/initializer are executable.
#[derive(Debug)]
pub struct ParameterDeclaration<'a> {
    pub data: NodeData,
    pub dot_dot_dot: bool,
    pub name: BindingName<'a>,
    pub question: bool,
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub initializer: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct Decorator<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumericLiteral(NumericLiteral),
    BigIntLiteral(BigIntLiteral),
    RegularExpressionLiteral(RegularExpressionLiteral),
    NoSubstitutionTemplateLiteral(NoSubstitutionTemplateLiteral),
    Template(TemplateExpression<'a>),
    ArrayLiteral(ArrayLiteralExpression<'a>),
    ObjectLiteral(ObjectLiteralExpression<'a>),
    PropertyAccess(PropertyAccessExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    TaggedTemplate(TaggedTemplateExpression<'a>),
    TypeAssertion(TypeAssertionExpression<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    FunctionExpression(FunctionExpression<'a>),
    ArrowFunction(ArrowFunction<'a>),
    ClassExpression(ClassExpression<'a>),
    Delete(DeleteExpression<'a>),
    TypeOf(TypeOfExpression<'a>),
    Void(VoidExpression<'a>),
    Await(AwaitExpression<'a>),
    PrefixUnary(PrefixUnaryExpression<'a>),
    PostfixUnary(PostfixUnaryExpression<'a>),
    Binary(BinaryExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Yield(YieldExpression<'a>),
    Spread(SpreadElement<'a>),
    Omitted(NodeData),
    As(AsExpression<'a>),
    Satisfies(SatisfiesExpression<'a>),
    NonNull(NonNullExpression<'a>),
    MetaProperty(MetaPropertyExpression),
    ImportCall(ImportCallExpression<'a>),
    JsxElement(&'a JsxElement<'a>),
    JsxSelfClosing(&'a JsxSelfClosingElement<'a>),
    JsxFragment(&'a JsxFragment<'a>),
    This(NodeData),
    Super(NodeData),
    Null(NodeData),
    True(NodeData),
    False(NodeData),
}

// -- Literals --

#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub data: NodeData,
    /// Literal body with escape sequences kept verbatim (no quotes).
    pub text: String,
    pub is_single_quote: bool,
}

#[derive(Debug, Clone)]
pub struct NumericLiteral {
    pub data: NodeData,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct BigIntLiteral {
    pub data: NodeData,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct RegularExpressionLiteral {
    pub data: NodeData,
    /// Full literal text including slashes and flags.
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct NoSubstitutionTemplateLiteral {
    pub data: NodeData,
    /// Template body with escapes and line breaks kept verbatim.
    pub text: String,
}

#[derive(Debug)]
pub struct TemplateExpression<'a> {
    pub data: NodeData,
    /// Text before the first `${`.
    pub head_text: String,
    pub spans: NodeList<'a, TemplateSpan<'a>>,
}

/// One `${expr}text` unit of a template expression.
#[derive(Debug)]
pub struct TemplateSpan<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    /// Text between this substitution and the next (or the closing backtick).
    pub literal_text: String,
}

// -- Compound expressions --

#[derive(Debug)]
pub struct ArrayLiteralExpression<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ObjectLiteralExpression<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, ObjectLiteralElement<'a>>,
}

#[derive(Debug)]
pub enum ObjectLiteralElement<'a> {
    PropertyAssignment(PropertyAssignment<'a>),
    Shorthand(ShorthandPropertyAssignment<'a>),
    Spread(SpreadAssignment<'a>),
    Method(MethodDeclaration<'a>),
    GetAccessor(GetAccessorDeclaration<'a>),
    SetAccessor(SetAccessorDeclaration<'a>),
}

#[derive(Debug)]
pub struct PropertyAssignment<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ShorthandPropertyAssignment<'a> {
    pub data: NodeData,
    pub name: Identifier,
    /// `{ x = 1 }` in destructuring-assignment position.
    pub initializer: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct SpreadAssignment<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PropertyAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    pub name: MemberName,
}

#[derive(Debug)]
pub struct ElementAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    pub argument_expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    /// Erasable: call-site type arguments.
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    /// `new Foo` with no argument list at all is legal.
    pub arguments: Option<NodeList<'a, Expression<'a>>>,
}

#[derive(Debug)]
pub struct TaggedTemplateExpression<'a> {
    pub data: NodeData,
    pub tag: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    /// NoSubstitutionTemplateLiteral or Template.
    pub template: &'a Expression<'a>,
}

/// `<T>expr` — erasable wrapper; only the operand survives emission.
#[derive(Debug)]
pub struct TypeAssertionExpression<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct FunctionExpression<'a> {
    pub data: NodeData,
    pub name: Option<Identifier>,
    pub asterisk: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
    pub body: &'a Block<'a>,
}

#[derive(Debug)]
pub struct ArrowFunction<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    /// Whether the parameter list was written with parentheses. A single
    /// bare parameter keeps its bare form through emission.
    pub parenthesized: bool,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
    pub body: ArrowFunctionBody<'a>,
}

#[derive(Debug)]
pub enum ArrowFunctionBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct ClassExpression<'a> {
    pub data: NodeData,
    pub name: Option<Identifier>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub heritage_clauses: NodeList<'a, HeritageClause<'a>>,
    pub members: NodeList<'a, ClassElement<'a>>,
}

#[derive(Debug)]
pub struct DeleteExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TypeOfExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct VoidExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct AwaitExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PrefixUnaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PostfixUnaryExpression<'a> {
    pub data: NodeData,
    pub operand: &'a Expression<'a>,
    pub operator: SyntaxKind,
}

#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct YieldExpression<'a> {
    pub data: NodeData,
    pub asterisk: bool,
    pub expression: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct SpreadElement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `expr as T` — erasable wrapper.
#[derive(Debug)]
pub struct AsExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_node: &'a TypeNode<'a>,
}

/// `expr satisfies T` — erasable wrapper.
#[derive(Debug)]
pub struct SatisfiesExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_node: &'a TypeNode<'a>,
}

/// `expr!` — erasable wrapper.
#[derive(Debug)]
pub struct NonNullExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `new.target` / `import.meta`.
#[derive(Debug)]
pub struct MetaPropertyExpression {
    pub data: NodeData,
    pub keyword: SyntaxKind,
    pub name: Identifier,
}

/// Dynamic `import(...)`.
#[derive(Debug)]
pub struct ImportCallExpression<'a> {
    pub data: NodeData,
    pub arguments: NodeList<'a, Expression<'a>>,
}

// ============================================================================
// JSX
// ============================================================================

#[derive(Debug)]
pub struct JsxElement<'a> {
    pub data: NodeData,
    pub tag_name: EntityName<'a>,
    pub attributes: NodeList<'a, JsxAttributeLike<'a>>,
    pub children: NodeList<'a, JsxChild<'a>>,
}

#[derive(Debug)]
pub struct JsxSelfClosingElement<'a> {
    pub data: NodeData,
    pub tag_name: EntityName<'a>,
    pub attributes: NodeList<'a, JsxAttributeLike<'a>>,
}

#[derive(Debug)]
pub struct JsxFragment<'a> {
    pub data: NodeData,
    pub children: NodeList<'a, JsxChild<'a>>,
}

#[derive(Debug)]
pub enum JsxAttributeLike<'a> {
    Attribute(JsxAttribute<'a>),
    Spread(JsxSpreadAttribute<'a>),
}

#[derive(Debug)]
pub struct JsxAttribute<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub value: Option<JsxAttributeValue<'a>>,
}

#[derive(Debug)]
pub enum JsxAttributeValue<'a> {
    StringLiteral(StringLiteral),
    Expression(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct JsxSpreadAttribute<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub enum JsxChild<'a> {
    /// Raw text between tags, kept verbatim.
    Text(String),
    /// `{expr}` — the expression may be absent (`{}` or `{/* comment */}`).
    Expression(Option<&'a Expression<'a>>),
    Element(&'a Expression<'a>),
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    VariableStatement(VariableStatement<'a>),
    FunctionDeclaration(FunctionDeclaration<'a>),
    ClassDeclaration(ClassDeclaration<'a>),
    InterfaceDeclaration(InterfaceDeclaration<'a>),
    TypeAliasDeclaration(TypeAliasDeclaration<'a>),
    EnumDeclaration(EnumDeclaration<'a>),
    ModuleDeclaration(ModuleDeclaration<'a>),
    ImportDeclaration(ImportDeclaration<'a>),
    ExportDeclaration(ExportDeclaration<'a>),
    ExportDefault(ExportDefaultStatement<'a>),
    Block(Block<'a>),
    Empty(NodeData),
    ExpressionStatement(ExpressionStatement<'a>),
    If(IfStatement<'a>),
    Do(DoStatement<'a>),
    While(WhileStatement<'a>),
    For(ForStatement<'a>),
    ForIn(ForInStatement<'a>),
    ForOf(ForOfStatement<'a>),
    Continue(ContinueStatement),
    Break(BreakStatement),
    Return(ReturnStatement<'a>),
    With(WithStatement<'a>),
    Switch(SwitchStatement<'a>),
    Labeled(LabeledStatement<'a>),
    Throw(ThrowStatement<'a>),
    Try(TryStatement<'a>),
    Debugger(NodeData),
}

impl<'a> Statement<'a> {
    /// Whether this statement is type-level only and erased entirely:
    /// interfaces, type aliases, ambient `declare` statements, bodiless
    /// overload signatures, and type-only import/export forms.
    pub fn is_type_only(&self) -> bool {
        if self.data().modifier_flags.contains(ModifierFlags::AMBIENT) {
            return true;
        }
        match self {
            Statement::InterfaceDeclaration(_) | Statement::TypeAliasDeclaration(_) => true,
            Statement::FunctionDeclaration(f) => f.body.is_none(),
            Statement::ImportDeclaration(i) => {
                i.import_clause.as_ref().is_some_and(|c| c.is_type_only)
            }
            Statement::ExportDeclaration(e) => e.is_type_only,
            Statement::ModuleDeclaration(m) => m.body.is_none() || m.is_ambient_module(),
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct VariableStatement<'a> {
    pub data: NodeData,
    pub declaration_list: VariableDeclarationList<'a>,
}

#[derive(Debug)]
pub struct VariableDeclarationList<'a> {
    /// Flags carry LET/CONST; neither means `var`.
    pub data: NodeData,
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    pub name: BindingName<'a>,
    /// Definite-assignment assertion `x!: T` — erasable.
    pub exclamation: bool,
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub initializer: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub then_statement: &'a Statement<'a>,
    pub else_statement: Option<&'a Statement<'a>>,
}

#[derive(Debug)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub statement: &'a Statement<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub enum ForInitializer<'a> {
    VariableDeclarationList(VariableDeclarationList<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub initializer: Option<ForInitializer<'a>>,
    pub condition: Option<&'a Expression<'a>>,
    pub incrementor: Option<&'a Expression<'a>>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ForInStatement<'a> {
    pub data: NodeData,
    pub initializer: ForInitializer<'a>,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ForOfStatement<'a> {
    pub data: NodeData,
    pub await_modifier: bool,
    pub initializer: ForInitializer<'a>,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ContinueStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug)]
pub struct BreakStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct WithStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub clauses: NodeList<'a, CaseOrDefaultClause<'a>>,
}

#[derive(Debug)]
pub enum CaseOrDefaultClause<'a> {
    Case(CaseClause<'a>),
    Default(DefaultClause<'a>),
}

#[derive(Debug)]
pub struct CaseClause<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct DefaultClause<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct LabeledStatement<'a> {
    pub data: NodeData,
    pub label: Identifier,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub try_block: Block<'a>,
    pub catch_clause: Option<CatchClause<'a>>,
    pub finally_block: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct CatchClause<'a> {
    pub data: NodeData,
    pub name: Option<BindingName<'a>>,
    /// `catch (e: unknown)` — erasable.
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub block: Block<'a>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug)]
pub struct FunctionDeclaration<'a> {
    pub data: NodeData,
    pub name: Option<Identifier>,
    pub asterisk: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
    /// None for overload signatures and ambient declarations, which have no
    /// runtime representation.
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct ClassDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: Option<Identifier>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub heritage_clauses: NodeList<'a, HeritageClause<'a>>,
    pub members: NodeList<'a, ClassElement<'a>>,
}

#[derive(Debug)]
pub struct HeritageClause<'a> {
    pub data: NodeData,
    /// ExtendsKeyword (executable) or ImplementsKeyword (erasable).
    pub token: SyntaxKind,
    pub types: NodeList<'a, ExpressionWithTypeArguments<'a>>,
}

#[derive(Debug)]
pub enum ClassElement<'a> {
    Property(PropertyDeclarationNode<'a>),
    Method(MethodDeclaration<'a>),
    Constructor(ConstructorDeclaration<'a>),
    GetAccessor(GetAccessorDeclaration<'a>),
    SetAccessor(SetAccessorDeclaration<'a>),
    IndexSignature(IndexSignatureNode<'a>),
    StaticBlock(ClassStaticBlockDeclaration<'a>),
    Semicolon(NodeData),
}

#[derive(Debug)]
pub struct PropertyDeclarationNode<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: PropertyName<'a>,
    pub question: bool,
    pub exclamation: bool,
    pub type_annotation: Option<&'a TypeNode<'a>>,
    pub initializer: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct MethodDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: PropertyName<'a>,
    pub question: bool,
    pub asterisk: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: Option<&'a TypeNode<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct ConstructorDeclaration<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct GetAccessorDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: PropertyName<'a>,
    pub return_type: Option<&'a TypeNode<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct SetAccessorDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: PropertyName<'a>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct ClassStaticBlockDeclaration<'a> {
    pub data: NodeData,
    pub body: Block<'a>,
}

#[derive(Debug)]
pub struct InterfaceDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub heritage_clauses: NodeList<'a, HeritageClause<'a>>,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct TypeAliasDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub type_node: &'a TypeNode<'a>,
}

/// The runtime value of an enum member, computed at parse time. The emitter
/// materializes the member list as a runtime object from these.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumMemberValue {
    Number(f64),
    String(String),
    /// The initializer is not a compile-time constant; the emitter falls
    /// back to emitting the initializer expression itself.
    Computed,
}

#[derive(Debug)]
pub struct EnumDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub members: NodeList<'a, EnumMember<'a>>,
}

#[derive(Debug)]
pub struct EnumMember<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: Option<&'a Expression<'a>>,
    pub value: EnumMemberValue,
}

#[derive(Debug)]
pub enum ModuleName {
    Identifier(Identifier),
    /// `declare module "specifier"` — ambient, fully erased.
    StringLiteral(StringLiteral),
}

#[derive(Debug)]
pub struct ModuleDeclaration<'a> {
    pub data: NodeData,
    pub name: ModuleName,
    pub body: Option<NodeList<'a, Statement<'a>>>,
}

impl<'a> ModuleDeclaration<'a> {
    pub fn is_ambient_module(&self) -> bool {
        matches!(self.name, ModuleName::StringLiteral(_))
    }
}

// ============================================================================
// Import / Export
// ============================================================================

#[derive(Debug)]
pub struct ImportDeclaration<'a> {
    pub data: NodeData,
    /// None for bare side-effect imports: `import "./polyfill";`.
    pub import_clause: Option<ImportClause<'a>>,
    pub module_specifier: StringLiteral,
}

#[derive(Debug)]
pub struct ImportClause<'a> {
    pub data: NodeData,
    /// `import type { ... }` — the whole clause is erasable.
    pub is_type_only: bool,
    pub name: Option<Identifier>,
    pub named_bindings: Option<NamedImportBindings<'a>>,
}

#[derive(Debug)]
pub enum NamedImportBindings<'a> {
    /// `* as ns`
    Namespace(Identifier),
    Named(NodeList<'a, ImportSpecifier>),
}

#[derive(Debug)]
pub struct ImportSpecifier {
    pub data: NodeData,
    /// `import { type T }` — this one specifier is erasable.
    pub is_type_only: bool,
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ExportDeclaration<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    /// None for `export * from "m"`; Namespace(None) is plain `*`.
    pub export_clause: Option<NamedExportBindings<'a>>,
    pub module_specifier: Option<StringLiteral>,
}

#[derive(Debug)]
pub enum NamedExportBindings<'a> {
    /// `export * as ns from "m"`
    Namespace(Identifier),
    Named(NodeList<'a, ExportSpecifier>),
}

#[derive(Debug)]
pub struct ExportSpecifier {
    pub data: NodeData,
    pub is_type_only: bool,
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

/// `export default <expr>;`
#[derive(Debug)]
pub struct ExportDefaultStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// AstNode impls
// ============================================================================

impl AstNode for Expression<'_> {
    fn data(&self) -> &NodeData {
        match self {
            Expression::Identifier(n) => &n.data,
            Expression::StringLiteral(n) => &n.data,
            Expression::NumericLiteral(n) => &n.data,
            Expression::BigIntLiteral(n) => &n.data,
            Expression::RegularExpressionLiteral(n) => &n.data,
            Expression::NoSubstitutionTemplateLiteral(n) => &n.data,
            Expression::Template(n) => &n.data,
            Expression::ArrayLiteral(n) => &n.data,
            Expression::ObjectLiteral(n) => &n.data,
            Expression::PropertyAccess(n) => &n.data,
            Expression::ElementAccess(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::TaggedTemplate(n) => &n.data,
            Expression::TypeAssertion(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::FunctionExpression(n) => &n.data,
            Expression::ArrowFunction(n) => &n.data,
            Expression::ClassExpression(n) => &n.data,
            Expression::Delete(n) => &n.data,
            Expression::TypeOf(n) => &n.data,
            Expression::Void(n) => &n.data,
            Expression::Await(n) => &n.data,
            Expression::PrefixUnary(n) => &n.data,
            Expression::PostfixUnary(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::Yield(n) => &n.data,
            Expression::Spread(n) => &n.data,
            Expression::Omitted(n) => n,
            Expression::As(n) => &n.data,
            Expression::Satisfies(n) => &n.data,
            Expression::NonNull(n) => &n.data,
            Expression::MetaProperty(n) => &n.data,
            Expression::ImportCall(n) => &n.data,
            Expression::JsxElement(n) => &n.data,
            Expression::JsxSelfClosing(n) => &n.data,
            Expression::JsxFragment(n) => &n.data,
            Expression::This(n)
            | Expression::Super(n)
            | Expression::Null(n)
            | Expression::True(n)
            | Expression::False(n) => n,
        }
    }
}

impl AstNode for Statement<'_> {
    fn data(&self) -> &NodeData {
        match self {
            Statement::VariableStatement(n) => &n.data,
            Statement::FunctionDeclaration(n) => &n.data,
            Statement::ClassDeclaration(n) => &n.data,
            Statement::InterfaceDeclaration(n) => &n.data,
            Statement::TypeAliasDeclaration(n) => &n.data,
            Statement::EnumDeclaration(n) => &n.data,
            Statement::ModuleDeclaration(n) => &n.data,
            Statement::ImportDeclaration(n) => &n.data,
            Statement::ExportDeclaration(n) => &n.data,
            Statement::ExportDefault(n) => &n.data,
            Statement::Block(n) => &n.data,
            Statement::Empty(n) => n,
            Statement::ExpressionStatement(n) => &n.data,
            Statement::If(n) => &n.data,
            Statement::Do(n) => &n.data,
            Statement::While(n) => &n.data,
            Statement::For(n) => &n.data,
            Statement::ForIn(n) => &n.data,
            Statement::ForOf(n) => &n.data,
            Statement::Continue(n) => &n.data,
            Statement::Break(n) => &n.data,
            Statement::Return(n) => &n.data,
            Statement::With(n) => &n.data,
            Statement::Switch(n) => &n.data,
            Statement::Labeled(n) => &n.data,
            Statement::Throw(n) => &n.data,
            Statement::Try(n) => &n.data,
            Statement::Debugger(n) => n,
        }
    }
}

impl AstNode for TypeNode<'_> {
    fn data(&self) -> &NodeData {
        match self {
            TypeNode::Keyword(n) => &n.data,
            TypeNode::TypeReference(n) => &n.data,
            TypeNode::Function(n) => &n.data,
            TypeNode::Constructor(n) => &n.data,
            TypeNode::TypeQuery(n) => &n.data,
            TypeNode::TypeLiteral(n) => &n.data,
            TypeNode::Array(n) => &n.data,
            TypeNode::Tuple(n) => &n.data,
            TypeNode::Optional(n) => &n.data,
            TypeNode::Rest(n) => &n.data,
            TypeNode::Union(n) => &n.data,
            TypeNode::Intersection(n) => &n.data,
            TypeNode::Conditional(n) => &n.data,
            TypeNode::Infer(n) => &n.data,
            TypeNode::Parenthesized(n) => &n.data,
            TypeNode::This(n) => &n.data,
            TypeNode::TypeOperator(n) => &n.data,
            TypeNode::IndexedAccess(n) => &n.data,
            TypeNode::Mapped(n) => &n.data,
            TypeNode::Literal(n) => &n.data,
            TypeNode::NamedTupleMember(n) => &n.data,
            TypeNode::TemplateLiteral(n) => &n.data,
            TypeNode::Predicate(n) => &n.data,
        }
    }
}

impl AstNode for EntityName<'_> {
    fn data(&self) -> &NodeData {
        match self {
            EntityName::Identifier(n) => &n.data,
            EntityName::Qualified(n) => &n.data,
        }
    }
}

impl AstNode for BindingName<'_> {
    fn data(&self) -> &NodeData {
        match self {
            BindingName::Identifier(n) => &n.data,
            BindingName::ObjectPattern(n) => &n.data,
            BindingName::ArrayPattern(n) => &n.data,
        }
    }
}

impl AstNode for PropertyName<'_> {
    fn data(&self) -> &NodeData {
        match self {
            PropertyName::Identifier(n) => &n.data,
            PropertyName::PrivateIdentifier(n) => &n.data,
            PropertyName::StringLiteral(n) => &n.data,
            PropertyName::NumericLiteral(n) => &n.data,
            PropertyName::Computed(n) => &n.data,
        }
    }
}
