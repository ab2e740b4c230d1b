//! The recursive descent parser.
//!
//! Consumes tokens from the scanner and builds an arena-allocated syntax
//! tree. Every context-sensitive decision point calls into the
//! disambiguator (sibling module); everything here is straight grammar.

use bumpalo::Bump;
use tstrip_ast::flags::{ModifierFlags, NodeFlags, TokenFlags};
use tstrip_ast::node::*;
use tstrip_ast::syntax_kind::SyntaxKind;
use tstrip_core::collections::OrderedMap;
use tstrip_core::intern::{InternedString, StringInterner};
use tstrip_core::text::TextSpan;
use tstrip_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use tstrip_scanner::Scanner;

use crate::context::ParseContext;
use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};

/// Maximum recursion depth, guarding against stack overflow on deeply
/// nested input.
const MAX_RECURSION_DEPTH: u32 = 200;

/// Options controlling a single file's parse.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// JSX mode: decides how `<` resolves at expression start.
    pub variant: LanguageVariant,
    /// Token budget for each speculative lookahead. Exhausting it is a hard
    /// parse error, never a silent guess.
    pub max_lookahead: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            variant: LanguageVariant::Standard,
            max_lookahead: 256,
        }
    }
}

/// The parser produces a `SourceFile` tree from TypeScript source text.
pub struct Parser<'a> {
    pub(crate) arena: &'a Bump,
    pub(crate) interner: StringInterner,
    pub(crate) scanner: Scanner,
    pub(crate) file_name: String,
    pub(crate) source_len: u32,
    pub(crate) variant: LanguageVariant,
    pub(crate) max_lookahead: usize,
    pub(crate) diagnostics: DiagnosticCollection,
    recursion_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(
        arena: &'a Bump,
        interner: &StringInterner,
        file_name: &str,
        source_text: &str,
        options: ParserOptions,
    ) -> Self {
        Self {
            arena,
            interner: interner.clone(),
            scanner: Scanner::new(source_text),
            file_name: file_name.to_string(),
            source_len: source_text.chars().count() as u32,
            variant: options.variant,
            max_lookahead: options.max_lookahead,
            diagnostics: DiagnosticCollection::new(),
            recursion_depth: 0,
        }
    }

    /// Parse the whole file. Returns the tree and every diagnostic the
    /// scanner and parser produced.
    pub fn parse_source_file(mut self) -> (SourceFile<'a>, DiagnosticCollection) {
        self.scanner.skip_shebang();
        self.next_token();

        let statements = self.parse_statements(ParseContext::NONE);
        if self.current_token() != SyntaxKind::EndOfFileToken {
            self.error(&messages::DECLARATION_OR_STATEMENT_EXPECTED, &[]);
        }
        let end = self.source_len;

        let source_file = SourceFile {
            data: NodeData::new(SyntaxKind::SourceFile, 0, end),
            statements,
            file_name: self.file_name.clone(),
            variant: self.variant,
        };

        let mut diagnostics = self.scanner.take_diagnostics();
        diagnostics.extend(self.diagnostics);
        (source_file, diagnostics)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    pub(crate) fn current_token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    #[inline]
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.scanner.scan()
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.token_start() as u32
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.token_end() as u32
    }

    #[inline]
    fn token_value(&self) -> &str {
        self.scanner.token_value()
    }

    #[inline]
    fn has_line_break_before(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    fn intern_token_value(&self) -> InternedString {
        self.interner.intern(self.scanner.token_value())
    }

    /// Look at the token after the current one without consuming anything.
    pub(crate) fn peek_token(&mut self) -> SyntaxKind {
        self.scanner.look_ahead(|s| s.scan())
    }

    fn expect(&mut self, kind: SyntaxKind) {
        if self.current_token() == kind {
            self.next_token();
        } else {
            let expected = kind.operator_text();
            if expected.is_empty() {
                self.error(&messages::UNEXPECTED_TOKEN, &[]);
            } else {
                self.error(&messages::_0_EXPECTED, &[expected]);
            }
        }
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.current_token() == kind {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume a statement-terminating semicolon, applying automatic
    /// semicolon insertion: a `}`, end of file, or a preceding line break
    /// also terminates the statement.
    fn parse_semicolon(&mut self) {
        if self.current_token() == SyntaxKind::SemicolonToken {
            self.next_token();
        } else if self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
            && !self.has_line_break_before()
        {
            self.error(&messages::_0_EXPECTED, &[";"]);
        }
    }

    pub(crate) fn error(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let span = TextSpan::from_bounds(self.token_pos(), self.token_end());
        self.diagnostics.add(Diagnostic::with_location(
            self.file_name.clone(),
            span,
            message,
            args,
        ));
    }

    // ========================================================================
    // Arena helpers
    // ========================================================================

    #[inline]
    pub(crate) fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    pub(crate) fn alloc_vec<T>(&self, values: Vec<T>) -> &'a [T] {
        if values.is_empty() {
            return &[];
        }
        self.arena.alloc_slice_fill_iter(values)
    }

    // ========================================================================
    // Identifiers and names
    // ========================================================================

    /// Whether the current token can be used as an identifier in this
    /// context. Contextual keywords qualify everywhere except that `yield`
    /// and `await` lose identifier-hood inside generators and async
    /// functions respectively.
    pub(crate) fn is_identifier_candidate(&self, cx: ParseContext) -> bool {
        match self.current_token() {
            SyntaxKind::Identifier => true,
            SyntaxKind::YieldKeyword => !cx.contains(ParseContext::YIELD),
            SyntaxKind::AwaitKeyword => !cx.contains(ParseContext::AWAIT),
            kind => kind.is_contextual_keyword(),
        }
    }

    pub(crate) fn parse_identifier(&mut self, cx: ParseContext) -> Identifier {
        let pos = self.token_pos();
        if self.is_identifier_candidate(cx) {
            let end = self.token_end();
            let text = self.intern_token_value();
            self.next_token();
            Identifier {
                data: NodeData::new(SyntaxKind::Identifier, pos, end),
                text,
            }
        } else {
            self.error(&messages::IDENTIFIER_EXPECTED, &[]);
            Identifier {
                data: NodeData::new(SyntaxKind::Identifier, pos, pos),
                text: self.interner.intern(""),
            }
        }
    }

    /// Parse an identifier in name position: any keyword is allowed here
    /// (`x.default`, `{ await: 42 }`).
    pub(crate) fn parse_identifier_name(&mut self) -> Identifier {
        let pos = self.token_pos();
        if self.current_token() == SyntaxKind::Identifier || self.current_token().is_keyword() {
            let end = self.token_end();
            let text = self.intern_token_value();
            self.next_token();
            Identifier {
                data: NodeData::new(SyntaxKind::Identifier, pos, end),
                text,
            }
        } else {
            self.error(&messages::IDENTIFIER_EXPECTED, &[]);
            Identifier {
                data: NodeData::new(SyntaxKind::Identifier, pos, pos),
                text: self.interner.intern(""),
            }
        }
    }

    fn parse_private_identifier(&mut self) -> Identifier {
        let pos = self.token_pos();
        let end = self.token_end();
        let text = self.intern_token_value();
        self.next_token();
        Identifier {
            data: NodeData::new(SyntaxKind::PrivateIdentifier, pos, end),
            text,
        }
    }

    pub(crate) fn parse_entity_name(&mut self, cx: ParseContext) -> EntityName<'a> {
        let mut name = EntityName::Identifier(self.parse_identifier(cx));
        while self.parse_optional(SyntaxKind::DotToken) {
            let pos = name.data().range.pos;
            let right = self.parse_identifier_name();
            let end = right.data.range.end;
            name = EntityName::Qualified(self.alloc(QualifiedName {
                data: NodeData::new(SyntaxKind::QualifiedName, pos, end),
                left: name,
                right,
            }));
        }
        name
    }

    /// Whether the current token can begin a property name.
    fn is_property_name_start(&self) -> bool {
        matches!(
            self.current_token(),
            SyntaxKind::Identifier
                | SyntaxKind::PrivateIdentifier
                | SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
                | SyntaxKind::OpenBracketToken
        ) || self.current_token().is_keyword()
    }

    fn parse_property_name(&mut self, cx: ParseContext) -> PropertyName<'a> {
        match self.current_token() {
            SyntaxKind::StringLiteral => {
                let lit = self.parse_string_literal_token();
                PropertyName::StringLiteral(lit)
            }
            SyntaxKind::NumericLiteral => {
                let pos = self.token_pos();
                let end = self.token_end();
                let text = self.token_value().to_string();
                self.next_token();
                PropertyName::NumericLiteral(NumericLiteral {
                    data: NodeData::new(SyntaxKind::NumericLiteral, pos, end),
                    text,
                })
            }
            SyntaxKind::OpenBracketToken => {
                let pos = self.token_pos();
                self.next_token();
                let expression = self.parse_assignment_expression_alloc(cx.allow_in());
                let end = self.token_end();
                self.expect(SyntaxKind::CloseBracketToken);
                PropertyName::Computed(self.alloc(ComputedPropertyName {
                    data: NodeData::new(SyntaxKind::ComputedPropertyName, pos, end),
                    expression,
                }))
            }
            SyntaxKind::PrivateIdentifier => {
                PropertyName::PrivateIdentifier(self.parse_private_identifier())
            }
            _ => PropertyName::Identifier(self.parse_identifier_name()),
        }
    }

    fn parse_string_literal_token(&mut self) -> StringLiteral {
        let pos = self.token_pos();
        let end = self.token_end();
        let text = self.token_value().to_string();
        let is_single_quote = self.scanner.token_flags().contains(TokenFlags::SINGLE_QUOTE);
        self.next_token();
        StringLiteral {
            data: NodeData::new(SyntaxKind::StringLiteral, pos, end),
            text,
            is_single_quote,
        }
    }

    // ========================================================================
    // Binding names and patterns
    // ========================================================================

    pub(crate) fn parse_binding_name(&mut self, cx: ParseContext) -> BindingName<'a> {
        match self.current_token() {
            SyntaxKind::OpenBraceToken => {
                let pattern = self.parse_object_binding_pattern(cx);
                BindingName::ObjectPattern(self.alloc(pattern))
            }
            SyntaxKind::OpenBracketToken => {
                let pattern = self.parse_array_binding_pattern(cx);
                BindingName::ArrayPattern(self.alloc(pattern))
            }
            _ => BindingName::Identifier(self.parse_identifier(cx)),
        }
    }

    fn parse_object_binding_pattern(&mut self, cx: ParseContext) -> ObjectBindingPattern<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBraceToken);
        let mut elements = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            elements.push(self.parse_object_binding_element(cx));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        ObjectBindingPattern {
            data: NodeData::new(SyntaxKind::ObjectBindingPattern, pos, end),
            elements: self.alloc_vec(elements),
        }
    }

    fn parse_object_binding_element(&mut self, cx: ParseContext) -> BindingElement<'a> {
        let pos = self.token_pos();
        let dot_dot_dot = self.parse_optional(SyntaxKind::DotDotDotToken);
        if dot_dot_dot {
            let name = BindingName::Identifier(self.parse_identifier(cx));
            let end = self.token_end();
            return BindingElement {
                data: NodeData::new(SyntaxKind::BindingElement, pos, end),
                dot_dot_dot,
                property_name: None,
                name,
                initializer: None,
            };
        }

        // `{ a }`, `{ a: b }`, `{ a: { nested } }`, `{ "x": y }`, `{ [k]: v }`
        let name_or_property = self.parse_property_name(cx);
        let (property_name, name) = if self.parse_optional(SyntaxKind::ColonToken) {
            (Some(name_or_property), self.parse_binding_name(cx))
        } else {
            match name_or_property {
                PropertyName::Identifier(id) => (None, BindingName::Identifier(id)),
                other => {
                    self.error(&messages::IDENTIFIER_EXPECTED, &[]);
                    let pos2 = other.data().range.pos;
                    (
                        Some(other),
                        BindingName::Identifier(Identifier {
                            data: NodeData::new(SyntaxKind::Identifier, pos2, pos2),
                            text: self.interner.intern(""),
                        }),
                    )
                }
            }
        };
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_assignment_expression_alloc(cx.allow_in()))
        } else {
            None
        };
        let end = self.token_end();
        BindingElement {
            data: NodeData::new(SyntaxKind::BindingElement, pos, end),
            dot_dot_dot: false,
            property_name,
            name,
            initializer,
        }
    }

    fn parse_array_binding_pattern(&mut self, cx: ParseContext) -> ArrayBindingPattern<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBracketToken);
        let mut elements = Vec::new();
        while self.current_token() != SyntaxKind::CloseBracketToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            if self.current_token() == SyntaxKind::CommaToken {
                let hpos = self.token_pos();
                elements.push(ArrayBindingElement::Hole(NodeData::new(
                    SyntaxKind::OmittedExpression,
                    hpos,
                    hpos,
                )));
                self.next_token();
                continue;
            }
            let epos = self.token_pos();
            let dot_dot_dot = self.parse_optional(SyntaxKind::DotDotDotToken);
            let name = self.parse_binding_name(cx);
            let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(self.parse_assignment_expression_alloc(cx.allow_in()))
            } else {
                None
            };
            let eend = self.token_end();
            elements.push(ArrayBindingElement::Element(BindingElement {
                data: NodeData::new(SyntaxKind::BindingElement, epos, eend),
                dot_dot_dot,
                property_name: None,
                name,
                initializer,
            }));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBracketToken);
        ArrayBindingPattern {
            data: NodeData::new(SyntaxKind::ArrayBindingPattern, pos, end),
            elements: self.alloc_vec(elements),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statements(&mut self, cx: ParseContext) -> &'a [Statement<'a>] {
        let mut statements = Vec::new();
        while self.current_token() != SyntaxKind::EndOfFileToken
            && self.current_token() != SyntaxKind::CloseBraceToken
        {
            let saved_pos = self.scanner.token_start();
            let statement = self.parse_statement(cx);
            statements.push(statement);

            // Error recovery: if the statement failed to advance, skip to
            // the next statement-starting token so one failure does not
            // cascade into an infinite loop.
            if self.scanner.token_start() == saved_pos {
                self.skip_to_next_statement();
            }
        }
        self.alloc_vec(statements)
    }

    fn skip_to_next_statement(&mut self) {
        loop {
            match self.current_token() {
                SyntaxKind::EndOfFileToken
                | SyntaxKind::VarKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::InterfaceKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::TypeKeyword
                | SyntaxKind::IfKeyword
                | SyntaxKind::ForKeyword
                | SyntaxKind::WhileKeyword
                | SyntaxKind::DoKeyword
                | SyntaxKind::SwitchKeyword
                | SyntaxKind::ReturnKeyword
                | SyntaxKind::ThrowKeyword
                | SyntaxKind::TryKeyword
                | SyntaxKind::BreakKeyword
                | SyntaxKind::ContinueKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::CloseBraceToken => return,
                _ => {
                    self.next_token();
                }
            }
        }
    }

    fn parse_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        match self.current_token() {
            SyntaxKind::SemicolonToken => {
                let pos = self.token_pos();
                let end = self.token_end();
                self.next_token();
                Statement::Empty(NodeData::new(SyntaxKind::EmptyStatement, pos, end))
            }
            SyntaxKind::OpenBraceToken => Statement::Block(self.parse_block(cx)),
            SyntaxKind::VarKeyword => self.parse_variable_statement(cx, ModifierFlags::NONE),
            SyntaxKind::ConstKeyword => {
                if self.peek_token() == SyntaxKind::EnumKeyword {
                    let pos = self.token_pos();
                    self.next_token();
                    self.parse_enum_declaration(cx, ModifierFlags::CONST, pos)
                } else {
                    self.parse_variable_statement(cx, ModifierFlags::NONE)
                }
            }
            SyntaxKind::LetKeyword if self.is_let_declaration() => {
                self.parse_variable_statement(cx, ModifierFlags::NONE)
            }
            SyntaxKind::FunctionKeyword => {
                let pos = self.token_pos();
                self.parse_function_declaration(cx, ModifierFlags::NONE, pos)
            }
            SyntaxKind::ClassKeyword => {
                let pos = self.token_pos();
                self.parse_class_declaration(cx, ModifierFlags::NONE, &[], pos)
            }
            SyntaxKind::AtToken => {
                let pos = self.token_pos();
                let decorators = self.parse_decorators(cx);
                let modifiers = self.parse_leading_declaration_modifiers();
                self.parse_class_declaration(cx, modifiers, decorators, pos)
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(cx),
            SyntaxKind::DoKeyword => self.parse_do_statement(cx),
            SyntaxKind::WhileKeyword => self.parse_while_statement(cx),
            SyntaxKind::ForKeyword => self.parse_for_statement(cx),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(cx),
            SyntaxKind::WithKeyword => self.parse_with_statement(cx),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(cx),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(cx),
            SyntaxKind::TryKeyword => self.parse_try_statement(cx),
            SyntaxKind::BreakKeyword => self.parse_break_or_continue(cx, true),
            SyntaxKind::ContinueKeyword => self.parse_break_or_continue(cx, false),
            SyntaxKind::DebuggerKeyword => {
                let pos = self.token_pos();
                let end = self.token_end();
                self.next_token();
                self.parse_semicolon();
                Statement::Debugger(NodeData::new(SyntaxKind::DebuggerStatement, pos, end))
            }
            SyntaxKind::ImportKeyword
                if !matches!(
                    self.peek_token(),
                    SyntaxKind::OpenParenToken | SyntaxKind::DotToken
                ) =>
            {
                self.parse_import_declaration(cx)
            }
            SyntaxKind::ExportKeyword => self.parse_export_statement(cx),
            SyntaxKind::InterfaceKeyword if self.next_token_is_identifier(cx) => {
                let pos = self.token_pos();
                self.parse_interface_declaration(cx, ModifierFlags::NONE, pos)
            }
            SyntaxKind::TypeKeyword if self.is_type_alias_start(cx) => {
                let pos = self.token_pos();
                self.parse_type_alias_declaration(cx, ModifierFlags::NONE, pos)
            }
            SyntaxKind::EnumKeyword => {
                let pos = self.token_pos();
                self.parse_enum_declaration(cx, ModifierFlags::NONE, pos)
            }
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword
                if self.next_token_is_module_name(cx) =>
            {
                let pos = self.token_pos();
                self.parse_module_declaration(cx, ModifierFlags::NONE, pos)
            }
            SyntaxKind::DeclareKeyword if self.next_token_starts_declaration() => {
                let pos = self.token_pos();
                self.next_token();
                self.parse_declaration(
                    cx | ParseContext::AMBIENT,
                    ModifierFlags::AMBIENT,
                    pos,
                )
            }
            SyntaxKind::AbstractKeyword if self.peek_token() == SyntaxKind::ClassKeyword => {
                let pos = self.token_pos();
                self.next_token();
                self.parse_class_declaration(cx, ModifierFlags::ABSTRACT, &[], pos)
            }
            SyntaxKind::AsyncKeyword if self.is_async_function_start() => {
                let pos = self.token_pos();
                self.next_token();
                self.parse_function_declaration(cx, ModifierFlags::ASYNC, pos)
            }
            SyntaxKind::Identifier if self.is_labeled_statement() => {
                self.parse_labeled_statement(cx)
            }
            _ => self.parse_expression_statement(cx),
        }
    }

    /// `let` starts a declaration only when followed by a binding; `let`
    /// alone remains usable as an identifier.
    fn is_let_declaration(&mut self) -> bool {
        matches!(
            self.peek_token(),
            SyntaxKind::Identifier | SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken
        ) || self.scanner.look_ahead(|s| s.scan().is_contextual_keyword())
    }

    fn next_token_is_identifier(&mut self, cx: ParseContext) -> bool {
        let next = self.peek_token();
        next == SyntaxKind::Identifier
            || (next.is_contextual_keyword()
                && !(next == SyntaxKind::YieldKeyword && cx.contains(ParseContext::YIELD))
                && !(next == SyntaxKind::AwaitKeyword && cx.contains(ParseContext::AWAIT)))
    }

    /// `type` begins an alias only as `type Name =` or `type Name<...> =`.
    fn is_type_alias_start(&mut self, cx: ParseContext) -> bool {
        if !self.next_token_is_identifier(cx) {
            return false;
        }
        self.scanner.look_ahead(|s| {
            s.scan(); // the name
            matches!(
                s.scan(),
                SyntaxKind::EqualsToken | SyntaxKind::LessThanToken
            )
        })
    }

    fn next_token_is_module_name(&mut self, cx: ParseContext) -> bool {
        self.next_token_is_identifier(cx) || self.peek_token() == SyntaxKind::StringLiteral
    }

    fn next_token_starts_declaration(&mut self) -> bool {
        matches!(
            self.peek_token(),
            SyntaxKind::VarKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::InterfaceKeyword
                | SyntaxKind::TypeKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::NamespaceKeyword
                | SyntaxKind::ModuleKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
        )
    }

    fn is_async_function_start(&mut self) -> bool {
        self.scanner.look_ahead(|s| {
            let next = s.scan();
            next == SyntaxKind::FunctionKeyword && !s.has_preceding_line_break()
        })
    }

    fn is_labeled_statement(&mut self) -> bool {
        self.peek_token() == SyntaxKind::ColonToken
    }

    /// Dispatch after leading modifiers (`export`, `declare`, …) have been
    /// consumed into `modifiers`.
    fn parse_declaration(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> Statement<'a> {
        match self.current_token() {
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword => {
                self.parse_variable_statement(cx, modifiers)
            }
            SyntaxKind::ConstKeyword => {
                if self.peek_token() == SyntaxKind::EnumKeyword {
                    self.next_token();
                    self.parse_enum_declaration(cx, modifiers | ModifierFlags::CONST, pos)
                } else {
                    self.parse_variable_statement(cx, modifiers)
                }
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(cx, modifiers, pos),
            SyntaxKind::ClassKeyword => self.parse_class_declaration(cx, modifiers, &[], pos),
            SyntaxKind::AbstractKeyword if self.peek_token() == SyntaxKind::ClassKeyword => {
                self.next_token();
                self.parse_class_declaration(cx, modifiers | ModifierFlags::ABSTRACT, &[], pos)
            }
            SyntaxKind::AsyncKeyword if self.is_async_function_start() => {
                self.next_token();
                self.parse_function_declaration(cx, modifiers | ModifierFlags::ASYNC, pos)
            }
            SyntaxKind::InterfaceKeyword => self.parse_interface_declaration(cx, modifiers, pos),
            SyntaxKind::TypeKeyword => self.parse_type_alias_declaration(cx, modifiers, pos),
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(cx, modifiers, pos),
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword => {
                self.parse_module_declaration(cx, modifiers, pos)
            }
            _ => {
                self.error(&messages::DECLARATION_OR_STATEMENT_EXPECTED, &[]);
                self.parse_expression_statement(cx)
            }
        }
    }

    /// Consume modifiers that can precede a decorated class declaration.
    fn parse_leading_declaration_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        loop {
            match self.current_token() {
                SyntaxKind::ExportKeyword => {
                    modifiers |= ModifierFlags::EXPORT;
                    self.next_token();
                }
                SyntaxKind::DefaultKeyword => {
                    modifiers |= ModifierFlags::DEFAULT;
                    self.next_token();
                }
                SyntaxKind::AbstractKeyword if self.peek_token() == SyntaxKind::ClassKeyword => {
                    modifiers |= ModifierFlags::ABSTRACT;
                    self.next_token();
                }
                SyntaxKind::DeclareKeyword => {
                    modifiers |= ModifierFlags::AMBIENT;
                    self.next_token();
                }
                _ => return modifiers,
            }
        }
    }

    fn parse_block(&mut self, cx: ParseContext) -> Block<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBraceToken);
        let statements = self.parse_statements(cx);
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        Block {
            data: NodeData::new(SyntaxKind::Block, pos, end),
            statements,
        }
    }

    fn parse_variable_statement(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
    ) -> Statement<'a> {
        let pos = self.token_pos();
        let declaration_list = self.parse_variable_declaration_list(cx);
        let end = self.token_end();
        self.parse_semicolon();
        Statement::VariableStatement(VariableStatement {
            data: NodeData::with_modifiers(SyntaxKind::VariableStatement, pos, end, modifiers),
            declaration_list,
        })
    }

    fn parse_variable_declaration_list(&mut self, cx: ParseContext) -> VariableDeclarationList<'a> {
        let pos = self.token_pos();
        let mut flags = NodeFlags::NONE;
        match self.current_token() {
            SyntaxKind::LetKeyword => flags |= NodeFlags::LET,
            SyntaxKind::ConstKeyword => flags |= NodeFlags::CONST,
            _ => {}
        }
        self.next_token(); // var / let / const

        let mut declarations = Vec::new();
        loop {
            declarations.push(self.parse_variable_declaration(cx));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let end = self.token_end();
        let mut data = NodeData::new(SyntaxKind::VariableDeclarationList, pos, end);
        data.flags = flags;
        VariableDeclarationList {
            data,
            declarations: self.alloc_vec(declarations),
        }
    }

    fn parse_variable_declaration(&mut self, cx: ParseContext) -> VariableDeclaration<'a> {
        let pos = self.token_pos();
        let name = self.parse_binding_name(cx);
        let exclamation = !self.has_line_break_before()
            && self.current_token() == SyntaxKind::ExclamationToken
            && self.peek_token() == SyntaxKind::ColonToken
            && self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = self.parse_type_annotation(cx);
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_assignment_expression_alloc(cx))
        } else {
            None
        };
        let end = self.token_end();
        VariableDeclaration {
            data: NodeData::new(SyntaxKind::VariableDeclaration, pos, end),
            name,
            exclamation,
            type_annotation,
            initializer,
        }
    }

    /// Parse `: T` if present.
    fn parse_type_annotation(&mut self, cx: ParseContext) -> Option<&'a TypeNode<'a>> {
        if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_type_alloc(cx))
        } else {
            None
        }
    }

    fn parse_if_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::IfKeyword);
        self.expect(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression_alloc(cx.allow_in());
        self.expect(SyntaxKind::CloseParenToken);
        let then_statement = {
            let s = self.parse_statement(cx);
            &*self.alloc(s)
        };
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            let s = self.parse_statement(cx);
            Some(&*self.alloc(s))
        } else {
            None
        };
        let end = self.token_end();
        Statement::If(IfStatement {
            data: NodeData::new(SyntaxKind::IfStatement, pos, end),
            expression,
            then_statement,
            else_statement,
        })
    }

    fn parse_do_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::DoKeyword);
        let statement = {
            let s = self.parse_statement(cx);
            self.alloc(s)
        };
        self.expect(SyntaxKind::WhileKeyword);
        self.expect(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression_alloc(cx.allow_in());
        let end = self.token_end();
        self.expect(SyntaxKind::CloseParenToken);
        self.parse_optional(SyntaxKind::SemicolonToken);
        Statement::Do(DoStatement {
            data: NodeData::new(SyntaxKind::DoStatement, pos, end),
            statement,
            expression,
        })
    }

    fn parse_while_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::WhileKeyword);
        self.expect(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression_alloc(cx.allow_in());
        self.expect(SyntaxKind::CloseParenToken);
        let statement = {
            let s = self.parse_statement(cx);
            self.alloc(s)
        };
        let end = self.token_end();
        Statement::While(WhileStatement {
            data: NodeData::new(SyntaxKind::WhileStatement, pos, end),
            expression,
            statement,
        })
    }

    fn parse_for_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::ForKeyword);
        let await_modifier = self.parse_optional(SyntaxKind::AwaitKeyword);
        self.expect(SyntaxKind::OpenParenToken);

        let head_cx = cx | ParseContext::DISALLOW_IN;
        let initializer = if self.current_token() == SyntaxKind::SemicolonToken {
            None
        } else if matches!(
            self.current_token(),
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword
        ) || (self.current_token() == SyntaxKind::LetKeyword && self.is_let_declaration())
        {
            Some(ForInitializer::VariableDeclarationList(
                self.parse_variable_declaration_list(head_cx),
            ))
        } else {
            Some(ForInitializer::Expression(
                self.parse_expression_alloc(head_cx),
            ))
        };

        // `of` and `in` decide the loop form; the context flag above kept a
        // binary `in` out of the initializer.
        if self.current_token() == SyntaxKind::OfKeyword {
            self.next_token();
            let expression = self.parse_assignment_expression_alloc(cx.allow_in());
            self.expect(SyntaxKind::CloseParenToken);
            let statement = {
                let s = self.parse_statement(cx);
                self.alloc(s)
            };
            let end = self.token_end();
            return Statement::ForOf(ForOfStatement {
                data: NodeData::new(SyntaxKind::ForOfStatement, pos, end),
                await_modifier,
                initializer: initializer.unwrap_or_else(|| {
                    ForInitializer::Expression(self.alloc(Expression::Omitted(NodeData::new(
                        SyntaxKind::OmittedExpression,
                        pos,
                        pos,
                    ))))
                }),
                expression,
                statement,
            });
        }

        if self.current_token() == SyntaxKind::InKeyword {
            self.next_token();
            let expression = self.parse_expression_alloc(cx.allow_in());
            self.expect(SyntaxKind::CloseParenToken);
            let statement = {
                let s = self.parse_statement(cx);
                self.alloc(s)
            };
            let end = self.token_end();
            return Statement::ForIn(ForInStatement {
                data: NodeData::new(SyntaxKind::ForInStatement, pos, end),
                initializer: initializer.unwrap_or_else(|| {
                    ForInitializer::Expression(self.alloc(Expression::Omitted(NodeData::new(
                        SyntaxKind::OmittedExpression,
                        pos,
                        pos,
                    ))))
                }),
                expression,
                statement,
            });
        }

        self.expect(SyntaxKind::SemicolonToken);
        let condition = if self.current_token() != SyntaxKind::SemicolonToken {
            Some(self.parse_expression_alloc(cx.allow_in()))
        } else {
            None
        };
        self.expect(SyntaxKind::SemicolonToken);
        let incrementor = if self.current_token() != SyntaxKind::CloseParenToken {
            Some(self.parse_expression_alloc(cx.allow_in()))
        } else {
            None
        };
        self.expect(SyntaxKind::CloseParenToken);
        let statement = {
            let s = self.parse_statement(cx);
            self.alloc(s)
        };
        let end = self.token_end();
        Statement::For(ForStatement {
            data: NodeData::new(SyntaxKind::ForStatement, pos, end),
            initializer,
            condition,
            incrementor,
            statement,
        })
    }

    fn parse_return_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::ReturnKeyword);
        let expression = if self.current_token() != SyntaxKind::SemicolonToken
            && self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
            && !self.has_line_break_before()
        {
            Some(self.parse_expression_alloc(cx.allow_in()))
        } else {
            None
        };
        let end = self.token_end();
        self.parse_semicolon();
        Statement::Return(ReturnStatement {
            data: NodeData::new(SyntaxKind::ReturnStatement, pos, end),
            expression,
        })
    }

    fn parse_with_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::WithKeyword);
        self.expect(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression_alloc(cx.allow_in());
        self.expect(SyntaxKind::CloseParenToken);
        let statement = {
            let s = self.parse_statement(cx);
            self.alloc(s)
        };
        let end = self.token_end();
        Statement::With(WithStatement {
            data: NodeData::new(SyntaxKind::WithStatement, pos, end),
            expression,
            statement,
        })
    }

    fn parse_switch_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::SwitchKeyword);
        self.expect(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression_alloc(cx.allow_in());
        self.expect(SyntaxKind::CloseParenToken);
        self.expect(SyntaxKind::OpenBraceToken);

        let mut clauses = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            let cpos = self.token_pos();
            match self.current_token() {
                SyntaxKind::CaseKeyword => {
                    self.next_token();
                    let clause_expr = self.parse_expression_alloc(cx.allow_in());
                    self.expect(SyntaxKind::ColonToken);
                    let statements = self.parse_case_clause_statements(cx);
                    let cend = self.token_end();
                    clauses.push(CaseOrDefaultClause::Case(CaseClause {
                        data: NodeData::new(SyntaxKind::CaseClause, cpos, cend),
                        expression: clause_expr,
                        statements,
                    }));
                }
                SyntaxKind::DefaultKeyword => {
                    self.next_token();
                    self.expect(SyntaxKind::ColonToken);
                    let statements = self.parse_case_clause_statements(cx);
                    let cend = self.token_end();
                    clauses.push(CaseOrDefaultClause::Default(DefaultClause {
                        data: NodeData::new(SyntaxKind::DefaultClause, cpos, cend),
                        statements,
                    }));
                }
                _ => {
                    self.error(&messages::CASE_OR_DEFAULT_EXPECTED, &[]);
                    self.next_token();
                }
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        Statement::Switch(SwitchStatement {
            data: NodeData::new(SyntaxKind::SwitchStatement, pos, end),
            expression,
            clauses: self.alloc_vec(clauses),
        })
    }

    fn parse_case_clause_statements(&mut self, cx: ParseContext) -> &'a [Statement<'a>] {
        let mut statements = Vec::new();
        while !matches!(
            self.current_token(),
            SyntaxKind::CaseKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        ) {
            let saved_pos = self.scanner.token_start();
            statements.push(self.parse_statement(cx));
            if self.scanner.token_start() == saved_pos {
                self.next_token();
            }
        }
        self.alloc_vec(statements)
    }

    fn parse_throw_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::ThrowKeyword);
        if self.has_line_break_before() {
            self.error(&messages::LINE_BREAK_NOT_PERMITTED_HERE, &[]);
        }
        let expression = self.parse_expression_alloc(cx.allow_in());
        let end = self.token_end();
        self.parse_semicolon();
        Statement::Throw(ThrowStatement {
            data: NodeData::new(SyntaxKind::ThrowStatement, pos, end),
            expression,
        })
    }

    fn parse_try_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::TryKeyword);
        let try_block = self.parse_block(cx);

        let catch_clause = if self.current_token() == SyntaxKind::CatchKeyword {
            let cpos = self.token_pos();
            self.next_token();
            let (name, type_annotation) = if self.parse_optional(SyntaxKind::OpenParenToken) {
                let name = self.parse_binding_name(cx);
                let annotation = self.parse_type_annotation(cx);
                self.expect(SyntaxKind::CloseParenToken);
                (Some(name), annotation)
            } else {
                (None, None)
            };
            let block = self.parse_block(cx);
            let cend = block.data.range.end;
            Some(CatchClause {
                data: NodeData::new(SyntaxKind::CatchClause, cpos, cend),
                name,
                type_annotation,
                block,
            })
        } else {
            None
        };

        let finally_block = if self.parse_optional(SyntaxKind::FinallyKeyword) {
            Some(self.parse_block(cx))
        } else {
            None
        };

        let end = self.token_end();
        Statement::Try(TryStatement {
            data: NodeData::new(SyntaxKind::TryStatement, pos, end),
            try_block,
            catch_clause,
            finally_block,
        })
    }

    fn parse_break_or_continue(&mut self, cx: ParseContext, is_break: bool) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let label = if self.is_identifier_candidate(cx) && !self.has_line_break_before() {
            Some(self.parse_identifier(cx))
        } else {
            None
        };
        let end = self.token_end();
        self.parse_semicolon();
        let kind = if is_break {
            SyntaxKind::BreakStatement
        } else {
            SyntaxKind::ContinueStatement
        };
        if is_break {
            Statement::Break(BreakStatement {
                data: NodeData::new(kind, pos, end),
                label,
            })
        } else {
            Statement::Continue(ContinueStatement {
                data: NodeData::new(kind, pos, end),
                label,
            })
        }
    }

    fn parse_labeled_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        let label = self.parse_identifier(cx);
        self.expect(SyntaxKind::ColonToken);
        let statement = {
            let s = self.parse_statement(cx);
            self.alloc(s)
        };
        let end = self.token_end();
        Statement::Labeled(LabeledStatement {
            data: NodeData::new(SyntaxKind::LabeledStatement, pos, end),
            label,
            statement,
        })
    }

    fn parse_expression_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        let expression = self.parse_expression_alloc(cx.allow_in());
        let end = self.token_end();
        self.parse_semicolon();
        Statement::ExpressionStatement(ExpressionStatement {
            data: NodeData::new(SyntaxKind::ExpressionStatement, pos, end),
            expression,
        })
    }

    // ========================================================================
    // Function and class declarations
    // ========================================================================

    fn parse_function_declaration(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> Statement<'a> {
        self.expect(SyntaxKind::FunctionKeyword);
        let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
        let name = if self.is_identifier_candidate(cx) {
            Some(self.parse_identifier(cx))
        } else {
            None
        };
        let type_parameters = self.parse_type_parameters(cx);
        let body_cx = cx.function_body(modifiers.contains(ModifierFlags::ASYNC), asterisk);
        let parameters = self.parse_parameter_list(body_cx);
        let return_type = self.parse_type_annotation(cx);
        let body = if self.current_token() == SyntaxKind::OpenBraceToken {
            Some(self.parse_block(body_cx))
        } else {
            // Overload signature or ambient declaration.
            self.parse_semicolon();
            None
        };
        let end = self.token_end();
        Statement::FunctionDeclaration(FunctionDeclaration {
            data: NodeData::with_modifiers(SyntaxKind::FunctionDeclaration, pos, end, modifiers),
            name,
            asterisk,
            type_parameters,
            parameters,
            return_type,
            body,
        })
    }

    fn parse_decorators(&mut self, cx: ParseContext) -> &'a [Decorator<'a>] {
        let mut decorators = Vec::new();
        while self.current_token() == SyntaxKind::AtToken {
            let pos = self.token_pos();
            self.next_token();
            let expression = {
                let e = self.parse_left_hand_side_expression(cx);
                self.alloc(e)
            };
            let end = self.token_end();
            decorators.push(Decorator {
                data: NodeData::new(SyntaxKind::Decorator, pos, end),
                expression,
            });
        }
        self.alloc_vec(decorators)
    }

    fn parse_class_declaration(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        decorators: &'a [Decorator<'a>],
        pos: u32,
    ) -> Statement<'a> {
        self.expect(SyntaxKind::ClassKeyword);
        let name = if self.is_identifier_candidate(cx)
            && self.current_token() != SyntaxKind::ExtendsKeyword
        {
            Some(self.parse_identifier(cx))
        } else {
            None
        };
        let type_parameters = self.parse_type_parameters(cx);
        let heritage_clauses = self.parse_heritage_clauses(cx);
        let members = self.parse_class_members(cx);
        let end = self.token_end();
        Statement::ClassDeclaration(ClassDeclaration {
            data: NodeData::with_modifiers(SyntaxKind::ClassDeclaration, pos, end, modifiers),
            decorators,
            name,
            type_parameters,
            heritage_clauses,
            members,
        })
    }

    fn parse_heritage_clauses(&mut self, cx: ParseContext) -> &'a [HeritageClause<'a>] {
        let mut clauses = Vec::new();
        while matches!(
            self.current_token(),
            SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
        ) {
            let pos = self.token_pos();
            let token = self.current_token();
            self.next_token();
            let mut types = Vec::new();
            loop {
                types.push(self.parse_expression_with_type_arguments(cx));
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
            let end = self.token_end();
            clauses.push(HeritageClause {
                data: NodeData::new(SyntaxKind::HeritageClause, pos, end),
                token,
                types: self.alloc_vec(types),
            });
        }
        self.alloc_vec(clauses)
    }

    fn parse_expression_with_type_arguments(
        &mut self,
        cx: ParseContext,
    ) -> ExpressionWithTypeArguments<'a> {
        let pos = self.token_pos();
        let expression = {
            let e = self.parse_left_hand_side_expression(cx);
            self.alloc(e)
        };
        let type_arguments = if self.current_token() == SyntaxKind::LessThanToken {
            self.parse_type_argument_list(cx)
        } else {
            None
        };
        let end = self.token_end();
        ExpressionWithTypeArguments {
            data: NodeData::new(SyntaxKind::ExpressionWithTypeArguments, pos, end),
            expression,
            type_arguments,
        }
    }

    fn parse_class_members(&mut self, cx: ParseContext) -> &'a [ClassElement<'a>] {
        self.expect(SyntaxKind::OpenBraceToken);
        let mut members = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            let saved_pos = self.scanner.token_start();
            members.push(self.parse_class_member(cx));
            if self.scanner.token_start() == saved_pos {
                self.next_token();
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
        self.alloc_vec(members)
    }

    fn parse_class_member(&mut self, cx: ParseContext) -> ClassElement<'a> {
        let pos = self.token_pos();

        if self.current_token() == SyntaxKind::SemicolonToken {
            let end = self.token_end();
            self.next_token();
            return ClassElement::Semicolon(NodeData::new(
                SyntaxKind::SemicolonClassElement,
                pos,
                end,
            ));
        }

        let decorators = self.parse_decorators(cx);
        let modifiers = self.parse_member_modifiers();

        // `static { ... }` initialization block
        if modifiers.contains(ModifierFlags::STATIC)
            && self.current_token() == SyntaxKind::OpenBraceToken
        {
            let body = self.parse_block(cx.function_body(false, false));
            let end = body.data.range.end;
            return ClassElement::StaticBlock(ClassStaticBlockDeclaration {
                data: NodeData::with_modifiers(
                    SyntaxKind::ClassStaticBlockDeclaration,
                    pos,
                    end,
                    modifiers,
                ),
                body,
            });
        }

        // Index signature: `[key: string]: T`
        if self.current_token() == SyntaxKind::OpenBracketToken && self.is_index_signature_start() {
            let sig = self.parse_index_signature(cx, modifiers, pos);
            return ClassElement::IndexSignature(sig);
        }

        // Accessors: `get name()` / `set name(v)`
        if matches!(
            self.current_token(),
            SyntaxKind::GetKeyword | SyntaxKind::SetKeyword
        ) && self.next_token_starts_property_name()
        {
            let is_get = self.current_token() == SyntaxKind::GetKeyword;
            self.next_token();
            return self.parse_accessor_member(cx, modifiers, decorators, pos, is_get);
        }

        // Generator method: `*name() {}`
        let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);

        // Constructor
        if !asterisk
            && self.current_token() == SyntaxKind::ConstructorKeyword
            && self.peek_token() == SyntaxKind::OpenParenToken
        {
            self.next_token();
            let parameters = self.parse_parameter_list(cx.function_body(false, false));
            let body = if self.current_token() == SyntaxKind::OpenBraceToken {
                Some(self.parse_block(cx.function_body(false, false)))
            } else {
                self.parse_semicolon();
                None
            };
            let end = self.token_end();
            return ClassElement::Constructor(ConstructorDeclaration {
                data: NodeData::with_modifiers(SyntaxKind::Constructor, pos, end, modifiers),
                parameters,
                body,
            });
        }

        let name = self.parse_property_name(cx);
        let question = self.parse_optional(SyntaxKind::QuestionToken);

        if matches!(
            self.current_token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            // Method
            let type_parameters = self.parse_type_parameters(cx);
            let body_cx = cx.function_body(modifiers.contains(ModifierFlags::ASYNC), asterisk);
            let parameters = self.parse_parameter_list(body_cx);
            let return_type = self.parse_type_annotation(cx);
            let body = if self.current_token() == SyntaxKind::OpenBraceToken {
                Some(self.parse_block(body_cx))
            } else {
                self.parse_semicolon();
                None
            };
            let end = self.token_end();
            return ClassElement::Method(MethodDeclaration {
                data: NodeData::with_modifiers(SyntaxKind::MethodDeclaration, pos, end, modifiers),
                decorators,
                name,
                question,
                asterisk,
                type_parameters,
                parameters,
                return_type,
                body,
            });
        }

        // Property
        let exclamation = self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = self.parse_type_annotation(cx);
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_assignment_expression_alloc(cx.allow_in()))
        } else {
            None
        };
        let end = self.token_end();
        self.parse_semicolon();
        ClassElement::Property(PropertyDeclarationNode {
            data: NodeData::with_modifiers(SyntaxKind::PropertyDeclaration, pos, end, modifiers),
            decorators,
            name,
            question,
            exclamation,
            type_annotation,
            initializer,
        })
    }

    fn parse_accessor_member(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        decorators: &'a [Decorator<'a>],
        pos: u32,
        is_get: bool,
    ) -> ClassElement<'a> {
        let name = self.parse_property_name(cx);
        let body_cx = cx.function_body(false, false);
        let parameters = self.parse_parameter_list(body_cx);
        let return_type = self.parse_type_annotation(cx);
        let body = if self.current_token() == SyntaxKind::OpenBraceToken {
            Some(self.parse_block(body_cx))
        } else {
            self.parse_semicolon();
            None
        };
        let end = self.token_end();
        if is_get {
            if !parameters.is_empty() {
                self.error(&messages::A_GET_ACCESSOR_CANNOT_HAVE_PARAMETERS, &[]);
            }
            ClassElement::GetAccessor(GetAccessorDeclaration {
                data: NodeData::with_modifiers(SyntaxKind::GetAccessor, pos, end, modifiers),
                decorators,
                name,
                return_type,
                body,
            })
        } else {
            if parameters.len() != 1 {
                self.error(&messages::A_SET_ACCESSOR_MUST_HAVE_EXACTLY_ONE_PARAMETER, &[]);
            }
            ClassElement::SetAccessor(SetAccessorDeclaration {
                data: NodeData::with_modifiers(SyntaxKind::SetAccessor, pos, end, modifiers),
                decorators,
                name,
                parameters,
                body,
            })
        }
    }

    /// Consume class member modifiers. A modifier keyword only counts as a
    /// modifier when what follows can still be a member; otherwise it is
    /// the member name itself (`static = 1;`).
    fn parse_member_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        loop {
            let flag = match self.current_token() {
                SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
                SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
                SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
                SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
                SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
                SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
                SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
                SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
                SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
                SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
                _ => return modifiers,
            };
            if !self.next_token_continues_member(flag) {
                return modifiers;
            }
            modifiers |= flag;
            self.next_token();
        }
    }

    fn next_token_continues_member(&mut self, flag: ModifierFlags) -> bool {
        let is_async = flag == ModifierFlags::ASYNC;
        self.scanner.look_ahead(|s| {
            let next = s.scan();
            if is_async && s.has_preceding_line_break() {
                return false;
            }
            matches!(
                next,
                SyntaxKind::Identifier
                    | SyntaxKind::PrivateIdentifier
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::AsteriskToken
                    | SyntaxKind::OpenBraceToken
            ) || next.is_keyword()
        })
    }

    fn next_token_starts_property_name(&mut self) -> bool {
        self.scanner.look_ahead(|s| {
            let next = s.scan();
            matches!(
                next,
                SyntaxKind::Identifier
                    | SyntaxKind::PrivateIdentifier
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::OpenBracketToken
            ) || next.is_keyword()
        })
    }

    /// Lookahead after `[`: an index signature starts `[ident :`.
    fn is_index_signature_start(&mut self) -> bool {
        self.scanner.look_ahead(|s| {
            let first = s.scan();
            if first != SyntaxKind::Identifier && !first.is_contextual_keyword() {
                return false;
            }
            s.scan() == SyntaxKind::ColonToken
        })
    }

    fn parse_index_signature(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> IndexSignatureNode<'a> {
        self.expect(SyntaxKind::OpenBracketToken);
        let mut parameters = Vec::new();
        let ppos = self.token_pos();
        let name = BindingName::Identifier(self.parse_identifier(cx));
        let type_annotation = self.parse_type_annotation(cx);
        let pend = self.token_end();
        parameters.push(ParameterDeclaration {
            data: NodeData::new(SyntaxKind::Parameter, ppos, pend),
            dot_dot_dot: false,
            name,
            question: false,
            type_annotation,
            initializer: None,
        });
        self.expect(SyntaxKind::CloseBracketToken);
        let type_annotation = self.parse_type_annotation(cx);
        let end = self.token_end();
        self.parse_optional(SyntaxKind::SemicolonToken);
        IndexSignatureNode {
            data: NodeData::with_modifiers(SyntaxKind::IndexSignature, pos, end, modifiers),
            parameters: self.alloc_vec(parameters),
            type_annotation,
        }
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Parse `( parameter, ... )`. A `this` parameter is type-level only
    /// and is parsed but not recorded, so it cannot survive into output.
    pub(crate) fn parse_parameter_list(
        &mut self,
        cx: ParseContext,
    ) -> &'a [ParameterDeclaration<'a>] {
        self.expect(SyntaxKind::OpenParenToken);
        let mut parameters = Vec::new();
        while self.current_token() != SyntaxKind::CloseParenToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            if self.current_token() == SyntaxKind::ThisKeyword {
                self.next_token();
                if self.parse_optional(SyntaxKind::ColonToken) {
                    let _ = self.parse_type(cx);
                }
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
                continue;
            }
            parameters.push(self.parse_parameter(cx));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParenToken);
        self.alloc_vec(parameters)
    }

    pub(crate) fn parse_parameter(&mut self, cx: ParseContext) -> ParameterDeclaration<'a> {
        let pos = self.token_pos();
        let mut modifiers = ModifierFlags::NONE;
        loop {
            let flag = match self.current_token() {
                SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
                SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
                SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
                SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
                SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
                _ => break,
            };
            if !self.scanner.look_ahead(|s| {
                let next = s.scan();
                matches!(
                    next,
                    SyntaxKind::Identifier
                        | SyntaxKind::OpenBraceToken
                        | SyntaxKind::OpenBracketToken
                        | SyntaxKind::DotDotDotToken
                ) || next.is_contextual_keyword()
                    || matches!(
                        next,
                        SyntaxKind::PublicKeyword
                            | SyntaxKind::PrivateKeyword
                            | SyntaxKind::ProtectedKeyword
                            | SyntaxKind::ReadonlyKeyword
                            | SyntaxKind::OverrideKeyword
                    )
            }) {
                break;
            }
            modifiers |= flag;
            self.next_token();
        }

        let dot_dot_dot = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = self.parse_binding_name(cx);
        let question = self.parse_optional(SyntaxKind::QuestionToken);
        let type_annotation = self.parse_type_annotation(cx);
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_assignment_expression_alloc(cx.allow_in()))
        } else {
            None
        };
        let end = self.token_end();
        ParameterDeclaration {
            data: NodeData::with_modifiers(SyntaxKind::Parameter, pos, end, modifiers),
            dot_dot_dot,
            name,
            question,
            type_annotation,
            initializer,
        }
    }

    // ========================================================================
    // Interface / type alias / enum / namespace
    // ========================================================================

    fn parse_interface_declaration(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> Statement<'a> {
        self.expect(SyntaxKind::InterfaceKeyword);
        let name = self.parse_identifier(cx);
        let type_parameters = self.parse_type_parameters(cx);
        let heritage_clauses = self.parse_heritage_clauses(cx);
        self.expect(SyntaxKind::OpenBraceToken);
        let mut members = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            let saved_pos = self.scanner.token_start();
            members.push(self.parse_type_member(cx));
            if self.scanner.token_start() == saved_pos {
                self.next_token();
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        Statement::InterfaceDeclaration(InterfaceDeclaration {
            data: NodeData::with_modifiers(SyntaxKind::InterfaceDeclaration, pos, end, modifiers),
            name,
            type_parameters,
            heritage_clauses,
            members: self.alloc_vec(members),
        })
    }

    fn parse_type_alias_declaration(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> Statement<'a> {
        self.expect(SyntaxKind::TypeKeyword);
        let name = self.parse_identifier(cx);
        let type_parameters = self.parse_type_parameters(cx);
        self.expect(SyntaxKind::EqualsToken);
        let type_node = self.parse_type_alloc(cx);
        let end = self.token_end();
        self.parse_semicolon();
        Statement::TypeAliasDeclaration(TypeAliasDeclaration {
            data: NodeData::with_modifiers(SyntaxKind::TypeAliasDeclaration, pos, end, modifiers),
            name,
            type_parameters,
            type_node,
        })
    }

    fn parse_enum_declaration(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> Statement<'a> {
        self.expect(SyntaxKind::EnumKeyword);
        let name = self.parse_identifier(cx);
        self.expect(SyntaxKind::OpenBraceToken);

        // Member values are computed as we go: auto-increment continues
        // from the previous member, and initializers may reference earlier
        // members by name.
        let mut recorded: OrderedMap<String, EnumMemberValue> = OrderedMap::new();
        let mut next_auto: Option<f64> = Some(0.0);
        let mut members = Vec::new();

        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            if !self.is_property_name_start() {
                self.error(&messages::ENUM_MEMBER_EXPECTED, &[]);
                break;
            }
            let mpos = self.token_pos();
            let member_name = self.parse_property_name(cx);
            let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(self.parse_assignment_expression_alloc(cx.allow_in()))
            } else {
                None
            };

            let value = match initializer {
                Some(expr) => self.evaluate_enum_initializer(expr, &recorded),
                None => match next_auto {
                    Some(n) => EnumMemberValue::Number(n),
                    None => {
                        self.error(&messages::ENUM_MEMBER_MUST_HAVE_INITIALIZER, &[]);
                        EnumMemberValue::Computed
                    }
                },
            };
            next_auto = match &value {
                EnumMemberValue::Number(n) => Some(n + 1.0),
                _ => None,
            };
            if let Some(key) = self.enum_member_key(&member_name) {
                recorded.insert(key, value.clone());
            }

            let mend = self.token_end();
            members.push(EnumMember {
                data: NodeData::new(SyntaxKind::EnumMember, mpos, mend),
                name: member_name,
                initializer,
                value,
            });
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        Statement::EnumDeclaration(EnumDeclaration {
            data: NodeData::with_modifiers(SyntaxKind::EnumDeclaration, pos, end, modifiers),
            name,
            members: self.alloc_vec(members),
        })
    }

    fn enum_member_key(&self, name: &PropertyName<'a>) -> Option<String> {
        match name {
            PropertyName::Identifier(id) => Some(self.interner.resolve(id.text).to_string()),
            PropertyName::StringLiteral(s) => Some(s.text.clone()),
            _ => None,
        }
    }

    /// Constant-fold an enum member initializer. Anything outside the
    /// constant subset becomes `Computed` and is emitted as the original
    /// expression.
    fn evaluate_enum_initializer(
        &self,
        expr: &Expression<'a>,
        members: &OrderedMap<String, EnumMemberValue>,
    ) -> EnumMemberValue {
        match expr {
            Expression::NumericLiteral(n) => match parse_numeric_text(&n.text) {
                Some(value) => EnumMemberValue::Number(value),
                None => EnumMemberValue::Computed,
            },
            Expression::StringLiteral(s) => EnumMemberValue::String(s.text.clone()),
            Expression::Parenthesized(p) => self.evaluate_enum_initializer(p.expression, members),
            Expression::Identifier(id) => {
                let name = self.interner.resolve(id.text);
                members
                    .get(&name.to_string())
                    .cloned()
                    .unwrap_or(EnumMemberValue::Computed)
            }
            Expression::PropertyAccess(access) => {
                // `E.A` back references within the declaration being built.
                if let (Expression::Identifier(_), MemberName::Identifier(member)) =
                    (access.expression, &access.name)
                {
                    let name = self.interner.resolve(member.text);
                    members
                        .get(&name.to_string())
                        .cloned()
                        .unwrap_or(EnumMemberValue::Computed)
                } else {
                    EnumMemberValue::Computed
                }
            }
            Expression::PrefixUnary(unary) => {
                match self.evaluate_enum_initializer(unary.operand, members) {
                    EnumMemberValue::Number(n) => match unary.operator {
                        SyntaxKind::MinusToken => EnumMemberValue::Number(-n),
                        SyntaxKind::PlusToken => EnumMemberValue::Number(n),
                        SyntaxKind::TildeToken => {
                            EnumMemberValue::Number(!(to_int32(n)) as f64)
                        }
                        _ => EnumMemberValue::Computed,
                    },
                    _ => EnumMemberValue::Computed,
                }
            }
            Expression::Binary(binary) => {
                let left = self.evaluate_enum_initializer(binary.left, members);
                let right = self.evaluate_enum_initializer(binary.right, members);
                evaluate_constant_binary(binary.operator, &left, &right)
            }
            _ => EnumMemberValue::Computed,
        }
    }

    /// Parse `namespace A.B { ... }` / `module M { ... }` /
    /// `declare module "events" { ... }`. Dotted names nest: the inner
    /// declarations become exported members of the outer namespace.
    fn parse_module_declaration(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> Statement<'a> {
        self.next_token(); // namespace / module
        self.parse_module_declaration_rest(cx, modifiers, pos)
    }

    fn parse_module_declaration_rest(
        &mut self,
        cx: ParseContext,
        modifiers: ModifierFlags,
        pos: u32,
    ) -> Statement<'a> {
        if self.current_token() == SyntaxKind::StringLiteral {
            let name = ModuleName::StringLiteral(self.parse_string_literal_token());
            let body = if self.current_token() == SyntaxKind::OpenBraceToken {
                self.next_token();
                let statements = self.parse_statements(cx);
                self.expect(SyntaxKind::CloseBraceToken);
                Some(statements)
            } else {
                self.parse_semicolon();
                None
            };
            let end = self.token_end();
            return Statement::ModuleDeclaration(ModuleDeclaration {
                data: NodeData::with_modifiers(SyntaxKind::ModuleDeclaration, pos, end, modifiers),
                name,
                body,
            });
        }

        let name = ModuleName::Identifier(self.parse_identifier(cx));

        if self.parse_optional(SyntaxKind::DotToken) {
            // `namespace A.B` is shorthand for nesting.
            let inner_pos = self.token_pos();
            let inner = self.parse_module_declaration_rest(
                cx,
                ModifierFlags::EXPORT,
                inner_pos,
            );
            let end = inner.data().range.end;
            let body = self.alloc_vec(vec![inner]);
            return Statement::ModuleDeclaration(ModuleDeclaration {
                data: NodeData::with_modifiers(SyntaxKind::ModuleDeclaration, pos, end, modifiers),
                name,
                body: Some(body),
            });
        }

        let body = if self.current_token() == SyntaxKind::OpenBraceToken {
            self.next_token();
            let statements = self.parse_statements(cx);
            self.expect(SyntaxKind::CloseBraceToken);
            Some(statements)
        } else {
            self.parse_semicolon();
            None
        };
        let end = self.token_end();
        Statement::ModuleDeclaration(ModuleDeclaration {
            data: NodeData::with_modifiers(SyntaxKind::ModuleDeclaration, pos, end, modifiers),
            name,
            body,
        })
    }

    // ========================================================================
    // Import / export
    // ========================================================================

    fn parse_import_declaration(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::ImportKeyword);

        // Side-effect import: `import "./polyfill";`
        if self.current_token() == SyntaxKind::StringLiteral {
            let module_specifier = self.parse_string_literal_token();
            let end = self.token_end();
            self.parse_semicolon();
            return Statement::ImportDeclaration(ImportDeclaration {
                data: NodeData::new(SyntaxKind::ImportDeclaration, pos, end),
                import_clause: None,
                module_specifier,
            });
        }

        // `import type ...` — type-only unless `type` is itself the
        // imported binding (`import type from "m"` imports a default named
        // `type`).
        let is_type_only = self.current_token() == SyntaxKind::TypeKeyword
            && matches!(
                self.peek_token(),
                SyntaxKind::Identifier
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::AsteriskToken
            )
            && self.parse_optional(SyntaxKind::TypeKeyword);

        let clause_pos = self.token_pos();
        let name = if self.is_identifier_candidate(cx) {
            let id = self.parse_identifier(cx);
            Some(id)
        } else {
            None
        };

        let named_bindings = if name.is_none() || self.parse_optional(SyntaxKind::CommaToken) {
            if self.parse_optional(SyntaxKind::AsteriskToken) {
                self.expect(SyntaxKind::AsKeyword);
                Some(NamedImportBindings::Namespace(self.parse_identifier(cx)))
            } else if self.current_token() == SyntaxKind::OpenBraceToken {
                Some(NamedImportBindings::Named(self.parse_import_specifiers()))
            } else {
                None
            }
        } else {
            None
        };

        let clause_end = self.token_end();
        let import_clause = ImportClause {
            data: NodeData::new(SyntaxKind::ImportClause, clause_pos, clause_end),
            is_type_only,
            name,
            named_bindings,
        };

        self.expect(SyntaxKind::FromKeyword);
        let module_specifier = if self.current_token() == SyntaxKind::StringLiteral {
            self.parse_string_literal_token()
        } else {
            self.error(&messages::STRING_LITERAL_EXPECTED, &[]);
            StringLiteral {
                data: NodeData::new(SyntaxKind::StringLiteral, self.token_pos(), self.token_pos()),
                text: String::new(),
                is_single_quote: false,
            }
        };
        let end = self.token_end();
        self.parse_semicolon();
        Statement::ImportDeclaration(ImportDeclaration {
            data: NodeData::new(SyntaxKind::ImportDeclaration, pos, end),
            import_clause: Some(import_clause),
            module_specifier,
        })
    }

    fn parse_import_specifiers(&mut self) -> &'a [ImportSpecifier] {
        self.expect(SyntaxKind::OpenBraceToken);
        let mut specifiers = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            let pos = self.token_pos();
            // `type foo`, `type foo as bar` mark a single specifier as
            // type-only; a bare `type` or `type as t` is a binding named
            // `type`.
            let is_type_only = self.current_token() == SyntaxKind::TypeKeyword
                && {
                    let next = self.peek_token();
                    (next == SyntaxKind::Identifier || next.is_keyword())
                        && next != SyntaxKind::AsKeyword
                }
                && self.parse_optional(SyntaxKind::TypeKeyword);

            let first = self.parse_identifier_name();
            let (property_name, local_name) = if self.parse_optional(SyntaxKind::AsKeyword) {
                (Some(first), self.parse_identifier_name())
            } else {
                (None, first)
            };
            let end = self.token_end();
            specifiers.push(ImportSpecifier {
                data: NodeData::new(SyntaxKind::ImportSpecifier, pos, end),
                is_type_only,
                property_name,
                name: local_name,
            });
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
        self.alloc_vec(specifiers)
    }

    fn parse_export_statement(&mut self, cx: ParseContext) -> Statement<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::ExportKeyword);

        match self.current_token() {
            SyntaxKind::DefaultKeyword => {
                self.next_token();
                let modifiers = ModifierFlags::EXPORT | ModifierFlags::DEFAULT;
                match self.current_token() {
                    SyntaxKind::FunctionKeyword => {
                        self.parse_function_declaration(cx, modifiers, pos)
                    }
                    SyntaxKind::AsyncKeyword if self.is_async_function_start() => {
                        self.next_token();
                        self.parse_function_declaration(cx, modifiers | ModifierFlags::ASYNC, pos)
                    }
                    SyntaxKind::ClassKeyword => {
                        self.parse_class_declaration(cx, modifiers, &[], pos)
                    }
                    SyntaxKind::AbstractKeyword
                        if self.peek_token() == SyntaxKind::ClassKeyword =>
                    {
                        self.next_token();
                        self.parse_class_declaration(
                            cx,
                            modifiers | ModifierFlags::ABSTRACT,
                            &[],
                            pos,
                        )
                    }
                    _ => {
                        let expression = self.parse_assignment_expression_alloc(cx.allow_in());
                        let end = self.token_end();
                        self.parse_semicolon();
                        Statement::ExportDefault(ExportDefaultStatement {
                            data: NodeData::new(SyntaxKind::ExportDefaultStatement, pos, end),
                            expression,
                        })
                    }
                }
            }
            SyntaxKind::AsteriskToken => {
                self.next_token();
                let export_clause = if self.parse_optional(SyntaxKind::AsKeyword) {
                    Some(NamedExportBindings::Namespace(self.parse_identifier_name()))
                } else {
                    None
                };
                self.expect(SyntaxKind::FromKeyword);
                let module_specifier = if self.current_token() == SyntaxKind::StringLiteral {
                    Some(self.parse_string_literal_token())
                } else {
                    self.error(&messages::STRING_LITERAL_EXPECTED, &[]);
                    None
                };
                let end = self.token_end();
                self.parse_semicolon();
                Statement::ExportDeclaration(ExportDeclaration {
                    data: NodeData::new(SyntaxKind::ExportDeclaration, pos, end),
                    is_type_only: false,
                    export_clause,
                    module_specifier,
                })
            }
            SyntaxKind::OpenBraceToken => self.parse_named_exports(pos, false),
            SyntaxKind::TypeKeyword
                if matches!(
                    self.peek_token(),
                    SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken
                ) =>
            {
                self.next_token();
                if self.current_token() == SyntaxKind::AsteriskToken {
                    self.next_token();
                    let export_clause = if self.parse_optional(SyntaxKind::AsKeyword) {
                        Some(NamedExportBindings::Namespace(self.parse_identifier_name()))
                    } else {
                        None
                    };
                    self.expect(SyntaxKind::FromKeyword);
                    let module_specifier = if self.current_token() == SyntaxKind::StringLiteral {
                        Some(self.parse_string_literal_token())
                    } else {
                        None
                    };
                    let end = self.token_end();
                    self.parse_semicolon();
                    Statement::ExportDeclaration(ExportDeclaration {
                        data: NodeData::new(SyntaxKind::ExportDeclaration, pos, end),
                        is_type_only: true,
                        export_clause,
                        module_specifier,
                    })
                } else {
                    self.parse_named_exports(pos, true)
                }
            }
            SyntaxKind::DeclareKeyword => {
                self.next_token();
                self.parse_declaration(
                    cx | ParseContext::AMBIENT,
                    ModifierFlags::EXPORT | ModifierFlags::AMBIENT,
                    pos,
                )
            }
            SyntaxKind::InterfaceKeyword => {
                self.parse_interface_declaration(cx, ModifierFlags::EXPORT, pos)
            }
            SyntaxKind::TypeKeyword => {
                self.parse_type_alias_declaration(cx, ModifierFlags::EXPORT, pos)
            }
            SyntaxKind::AtToken => {
                let decorators = self.parse_decorators(cx);
                let modifiers =
                    ModifierFlags::EXPORT | self.parse_leading_declaration_modifiers();
                self.parse_class_declaration(cx, modifiers, decorators, pos)
            }
            _ => self.parse_declaration(cx, ModifierFlags::EXPORT, pos),
        }
    }

    fn parse_named_exports(&mut self, pos: u32, is_type_only: bool) -> Statement<'a> {
        self.expect(SyntaxKind::OpenBraceToken);
        let mut specifiers = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            let spos = self.token_pos();
            let spec_type_only = !is_type_only
                && self.current_token() == SyntaxKind::TypeKeyword
                && {
                    let next = self.peek_token();
                    (next == SyntaxKind::Identifier || next.is_keyword())
                        && next != SyntaxKind::AsKeyword
                }
                && self.parse_optional(SyntaxKind::TypeKeyword);
            let first = self.parse_identifier_name();
            let (property_name, name) = if self.parse_optional(SyntaxKind::AsKeyword) {
                (Some(first), self.parse_identifier_name())
            } else {
                (None, first)
            };
            let send = self.token_end();
            specifiers.push(ExportSpecifier {
                data: NodeData::new(SyntaxKind::ExportSpecifier, spos, send),
                is_type_only: spec_type_only,
                property_name,
                name,
            });
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);

        let module_specifier = if self.parse_optional(SyntaxKind::FromKeyword) {
            if self.current_token() == SyntaxKind::StringLiteral {
                Some(self.parse_string_literal_token())
            } else {
                self.error(&messages::STRING_LITERAL_EXPECTED, &[]);
                None
            }
        } else {
            None
        };
        let end = self.token_end();
        self.parse_semicolon();
        Statement::ExportDeclaration(ExportDeclaration {
            data: NodeData::new(SyntaxKind::ExportDeclaration, pos, end),
            is_type_only,
            export_clause: Some(NamedExportBindings::Named(self.alloc_vec(specifiers))),
            module_specifier,
        })
    }
}

// ============================================================================
// Constant folding helpers for enum member values
// ============================================================================

/// Parse a numeric literal's source text into its value, handling radix
/// prefixes and digit separators.
pub(crate) fn parse_numeric_text(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).ok().map(|v| v as f64);
    }
    if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        return u64::from_str_radix(bin, 2).ok().map(|v| v as f64);
    }
    if let Some(oct) = cleaned.strip_prefix("0o").or_else(|| cleaned.strip_prefix("0O")) {
        return u64::from_str_radix(oct, 8).ok().map(|v| v as f64);
    }
    cleaned.parse::<f64>().ok()
}

/// Runtime ToInt32, as the bitwise operators apply it.
pub(crate) fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let m = n.trunc() as i64;
    (m & 0xFFFF_FFFF) as u32 as i32
}

fn evaluate_constant_binary(
    operator: SyntaxKind,
    left: &EnumMemberValue,
    right: &EnumMemberValue,
) -> EnumMemberValue {
    use EnumMemberValue::*;
    match (left, right) {
        (Number(a), Number(b)) => {
            let a = *a;
            let b = *b;
            match operator {
                SyntaxKind::PlusToken => Number(a + b),
                SyntaxKind::MinusToken => Number(a - b),
                SyntaxKind::AsteriskToken => Number(a * b),
                SyntaxKind::SlashToken => Number(a / b),
                SyntaxKind::PercentToken => Number(a % b),
                SyntaxKind::AsteriskAsteriskToken => Number(a.powf(b)),
                SyntaxKind::LessThanLessThanToken => {
                    Number((to_int32(a).wrapping_shl(to_int32(b) as u32 & 31)) as f64)
                }
                SyntaxKind::GreaterThanGreaterThanToken => {
                    Number((to_int32(a).wrapping_shr(to_int32(b) as u32 & 31)) as f64)
                }
                SyntaxKind::GreaterThanGreaterThanGreaterThanToken => {
                    Number(((to_int32(a) as u32).wrapping_shr(to_int32(b) as u32 & 31)) as f64)
                }
                SyntaxKind::AmpersandToken => Number((to_int32(a) & to_int32(b)) as f64),
                SyntaxKind::BarToken => Number((to_int32(a) | to_int32(b)) as f64),
                SyntaxKind::CaretToken => Number((to_int32(a) ^ to_int32(b)) as f64),
                _ => Computed,
            }
        }
        (String(a), String(b)) if operator == SyntaxKind::PlusToken => {
            String(format!("{}{}", a, b))
        }
        _ => Computed,
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression_alloc(&mut self, cx: ParseContext) -> &'a Expression<'a> {
        let expression = self.parse_expression(cx);
        self.alloc(expression)
    }

    pub(crate) fn parse_assignment_expression_alloc(
        &mut self,
        cx: ParseContext,
    ) -> &'a Expression<'a> {
        let expression = self.parse_assignment_expression(cx);
        self.alloc(expression)
    }

    /// Expression including the comma operator.
    pub(crate) fn parse_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        if !self.enter_recursion() {
            self.exit_recursion();
            let pos = self.token_pos();
            return Expression::Identifier(Identifier {
                data: NodeData::new(SyntaxKind::Identifier, pos, pos),
                text: self.interner.intern(""),
            });
        }
        let mut expression = self.parse_assignment_expression(cx);
        while self.current_token() == SyntaxKind::CommaToken {
            let pos = expression.data().range.pos;
            self.next_token();
            let right = self.parse_assignment_expression(cx);
            let end = right.data().range.end;
            let left = self.alloc(expression);
            let right = self.alloc(right);
            expression = Expression::Binary(BinaryExpression {
                data: NodeData::new(SyntaxKind::BinaryExpression, pos, end),
                left,
                operator: SyntaxKind::CommaToken,
                right,
            });
        }
        self.exit_recursion();
        expression
    }

    /// Bump the recursion depth; false means the guard tripped and the
    /// caller must bail out with a placeholder instead of descending.
    fn enter_recursion(&mut self) -> bool {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.error(&messages::EXPRESSION_EXPECTED, &[]);
            false
        } else {
            true
        }
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    pub(crate) fn parse_assignment_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        if self.current_token() == SyntaxKind::YieldKeyword && cx.contains(ParseContext::YIELD) {
            return self.parse_yield_expression(cx);
        }

        // Arrow function heads resolve before anything else commits:
        // `x =>`, `(params) =>`, `async ... =>`, `<T>(params) =>`.
        if self.is_identifier_candidate(cx)
            && self.current_token() != SyntaxKind::AsyncKeyword
            && self.next_is_arrow()
        {
            return self.parse_simple_arrow_function(cx, false);
        }
        if self.current_token() == SyntaxKind::AsyncKeyword {
            if let Some(arrow) = self.try_parse_async_arrow_function(cx) {
                return arrow;
            }
        }
        if self.current_token() == SyntaxKind::OpenParenToken
            && self.is_parenthesized_arrow_function()
        {
            let pos = self.token_pos();
            return self.parse_parenthesized_arrow_function(cx, pos, false, None);
        }
        if self.current_token() == SyntaxKind::LessThanToken
            && self.variant == LanguageVariant::Standard
        {
            if let Some(arrow) = self.try_parse_generic_arrow_function(cx) {
                return arrow;
            }
        }

        let expression = self.parse_conditional_expression(cx);

        if self.current_token().is_assignment_operator() {
            let pos = expression.data().range.pos;
            let operator = self.current_token();
            self.next_token();
            let right = self.parse_assignment_expression(cx);
            let end = right.data().range.end;
            let left = self.alloc(expression);
            let right = self.alloc(right);
            return Expression::Binary(BinaryExpression {
                data: NodeData::new(SyntaxKind::BinaryExpression, pos, end),
                left,
                operator,
                right,
            });
        }

        expression
    }

    fn parse_conditional_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let expression = self.parse_binary_expression(cx, OperatorPrecedence::Lowest);

        if self.current_token() == SyntaxKind::QuestionToken {
            let pos = expression.data().range.pos;
            self.next_token();
            // The true branch re-allows `in` even inside a for-head.
            let when_true = self.parse_assignment_expression(cx.allow_in());
            self.expect(SyntaxKind::ColonToken);
            let when_false = self.parse_assignment_expression(cx);
            let end = when_false.data().range.end;
            let condition = self.alloc(expression);
            let when_true = self.alloc(when_true);
            let when_false = self.alloc(when_false);
            return Expression::Conditional(ConditionalExpression {
                data: NodeData::new(SyntaxKind::ConditionalExpression, pos, end),
                condition,
                when_true,
                when_false,
            });
        }

        expression
    }

    fn parse_binary_expression(
        &mut self,
        cx: ParseContext,
        min_precedence: OperatorPrecedence,
    ) -> Expression<'a> {
        let mut left = self.parse_unary_expression(cx);

        loop {
            // `as` / `satisfies` bind like relational operators but wrap the
            // operand in an erasable assertion instead of building a binary
            // node. A line break before them keeps them as identifiers.
            if matches!(
                self.current_token(),
                SyntaxKind::AsKeyword | SyntaxKind::SatisfiesKeyword
            ) && !self.has_line_break_before()
                && OperatorPrecedence::Relational > min_precedence
            {
                let is_as = self.current_token() == SyntaxKind::AsKeyword;
                let pos = left.data().range.pos;
                self.next_token();
                let type_node = self.parse_type_alloc(cx);
                let end = self.token_end();
                let expression = self.alloc(left);
                left = if is_as {
                    Expression::As(AsExpression {
                        data: NodeData::new(SyntaxKind::AsExpression, pos, end),
                        expression,
                        type_node,
                    })
                } else {
                    Expression::Satisfies(SatisfiesExpression {
                        data: NodeData::new(SyntaxKind::SatisfiesExpression, pos, end),
                        expression,
                        type_node,
                    })
                };
                continue;
            }

            if self.current_token() == SyntaxKind::GreaterThanToken {
                self.scanner.rescan_greater_than_token();
            }
            let operator = self.current_token();
            let precedence = get_binary_operator_precedence(operator);
            if precedence == OperatorPrecedence::Invalid || precedence <= min_precedence {
                break;
            }
            if operator == SyntaxKind::InKeyword && cx.contains(ParseContext::DISALLOW_IN) {
                break;
            }

            let pos = left.data().range.pos;
            self.next_token();
            // Exponentiation is right-associative; everything else binds to
            // the left.
            let right_min = if operator == SyntaxKind::AsteriskAsteriskToken {
                OperatorPrecedence::Multiplicative
            } else {
                precedence
            };
            let right = self.parse_binary_expression(cx, right_min);
            let end = right.data().range.end;
            let left_ref = self.alloc(left);
            let right_ref = self.alloc(right);
            left = Expression::Binary(BinaryExpression {
                data: NodeData::new(SyntaxKind::BinaryExpression, pos, end),
                left: left_ref,
                operator,
                right: right_ref,
            });
        }

        left
    }

    fn parse_unary_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        match self.current_token() {
            SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken => {
                let pos = self.token_pos();
                let operator = self.current_token();
                self.next_token();
                let operand = {
                    let e = self.parse_unary_expression(cx);
                    self.alloc(e)
                };
                let end = operand.data().range.end;
                Expression::PrefixUnary(PrefixUnaryExpression {
                    data: NodeData::new(SyntaxKind::PrefixUnaryExpression, pos, end),
                    operator,
                    operand,
                })
            }
            SyntaxKind::TypeOfKeyword => {
                let pos = self.token_pos();
                self.next_token();
                let expression = {
                    let e = self.parse_unary_expression(cx);
                    self.alloc(e)
                };
                let end = expression.data().range.end;
                Expression::TypeOf(TypeOfExpression {
                    data: NodeData::new(SyntaxKind::TypeOfExpression, pos, end),
                    expression,
                })
            }
            SyntaxKind::DeleteKeyword => {
                let pos = self.token_pos();
                self.next_token();
                let expression = {
                    let e = self.parse_unary_expression(cx);
                    self.alloc(e)
                };
                let end = expression.data().range.end;
                Expression::Delete(DeleteExpression {
                    data: NodeData::new(SyntaxKind::DeleteExpression, pos, end),
                    expression,
                })
            }
            SyntaxKind::VoidKeyword => {
                let pos = self.token_pos();
                self.next_token();
                let expression = {
                    let e = self.parse_unary_expression(cx);
                    self.alloc(e)
                };
                let end = expression.data().range.end;
                Expression::Void(VoidExpression {
                    data: NodeData::new(SyntaxKind::VoidExpression, pos, end),
                    expression,
                })
            }
            // `await` is an operator only inside async functions; anywhere
            // else it stays a plain identifier and falls through below.
            SyntaxKind::AwaitKeyword if cx.contains(ParseContext::AWAIT) => {
                let pos = self.token_pos();
                self.next_token();
                let expression = {
                    let e = self.parse_unary_expression(cx);
                    self.alloc(e)
                };
                let end = expression.data().range.end;
                Expression::Await(AwaitExpression {
                    data: NodeData::new(SyntaxKind::AwaitExpression, pos, end),
                    expression,
                })
            }
            SyntaxKind::LessThanToken => {
                if self.variant == LanguageVariant::Jsx && !self.is_type_assertion_in_jsx() {
                    self.parse_jsx_element_or_fragment(cx, true)
                } else {
                    self.parse_type_assertion_expression(cx)
                }
            }
            _ => self.parse_postfix_expression(cx),
        }
    }

    /// `<T>expr` — an erasable assertion wrapper around the operand.
    fn parse_type_assertion_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::LessThanToken);
        let type_node = self.parse_type_alloc(cx);
        self.expect(SyntaxKind::GreaterThanToken);
        let expression = {
            let e = self.parse_unary_expression(cx);
            self.alloc(e)
        };
        let end = expression.data().range.end;
        Expression::TypeAssertion(TypeAssertionExpression {
            data: NodeData::new(SyntaxKind::TypeAssertionExpression, pos, end),
            type_node,
            expression,
        })
    }

    fn parse_postfix_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let expression = self.parse_left_hand_side_expression(cx);
        if !self.has_line_break_before()
            && matches!(
                self.current_token(),
                SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
            )
        {
            let pos = expression.data().range.pos;
            let operator = self.current_token();
            let end = self.token_end();
            self.next_token();
            let operand = self.alloc(expression);
            return Expression::PostfixUnary(PostfixUnaryExpression {
                data: NodeData::new(SyntaxKind::PostfixUnaryExpression, pos, end),
                operand,
                operator,
            });
        }
        expression
    }

    pub(crate) fn parse_left_hand_side_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let mut expression = if self.current_token() == SyntaxKind::NewKeyword {
            self.parse_new_expression(cx)
        } else {
            self.parse_primary_expression(cx)
        };

        loop {
            match self.current_token() {
                SyntaxKind::DotToken => {
                    let pos = expression.data().range.pos;
                    self.next_token();
                    let name = if self.current_token() == SyntaxKind::PrivateIdentifier {
                        MemberName::PrivateIdentifier(self.parse_private_identifier())
                    } else {
                        MemberName::Identifier(self.parse_identifier_name())
                    };
                    let end = match &name {
                        MemberName::Identifier(id) | MemberName::PrivateIdentifier(id) => {
                            id.data.range.end
                        }
                    };
                    let target = self.alloc(expression);
                    expression = Expression::PropertyAccess(PropertyAccessExpression {
                        data: NodeData::new(SyntaxKind::PropertyAccessExpression, pos, end),
                        expression: target,
                        question_dot: false,
                        name,
                    });
                }
                SyntaxKind::QuestionDotToken => {
                    let pos = expression.data().range.pos;
                    self.next_token();
                    match self.current_token() {
                        SyntaxKind::OpenBracketToken => {
                            self.next_token();
                            let argument = self.parse_expression_alloc(cx.allow_in());
                            let end = self.token_end();
                            self.expect(SyntaxKind::CloseBracketToken);
                            let target = self.alloc(expression);
                            expression = Expression::ElementAccess(ElementAccessExpression {
                                data: NodeData::new(
                                    SyntaxKind::ElementAccessExpression,
                                    pos,
                                    end,
                                ),
                                expression: target,
                                question_dot: true,
                                argument_expression: argument,
                            });
                        }
                        SyntaxKind::OpenParenToken => {
                            let arguments = self.parse_argument_list(cx);
                            let end = self.token_end();
                            let target = self.alloc(expression);
                            expression = Expression::Call(CallExpression {
                                data: NodeData::new(SyntaxKind::CallExpression, pos, end),
                                expression: target,
                                question_dot: true,
                                type_arguments: None,
                                arguments,
                            });
                        }
                        _ => {
                            let name = if self.current_token() == SyntaxKind::PrivateIdentifier {
                                MemberName::PrivateIdentifier(self.parse_private_identifier())
                            } else {
                                MemberName::Identifier(self.parse_identifier_name())
                            };
                            let end = match &name {
                                MemberName::Identifier(id)
                                | MemberName::PrivateIdentifier(id) => id.data.range.end,
                            };
                            let target = self.alloc(expression);
                            expression = Expression::PropertyAccess(PropertyAccessExpression {
                                data: NodeData::new(
                                    SyntaxKind::PropertyAccessExpression,
                                    pos,
                                    end,
                                ),
                                expression: target,
                                question_dot: true,
                                name,
                            });
                        }
                    }
                }
                SyntaxKind::OpenBracketToken => {
                    let pos = expression.data().range.pos;
                    self.next_token();
                    let argument = self.parse_expression_alloc(cx.allow_in());
                    let end = self.token_end();
                    self.expect(SyntaxKind::CloseBracketToken);
                    let target = self.alloc(expression);
                    expression = Expression::ElementAccess(ElementAccessExpression {
                        data: NodeData::new(SyntaxKind::ElementAccessExpression, pos, end),
                        expression: target,
                        question_dot: false,
                        argument_expression: argument,
                    });
                }
                SyntaxKind::OpenParenToken => {
                    let pos = expression.data().range.pos;
                    let arguments = self.parse_argument_list(cx);
                    let end = self.token_end();
                    let target = self.alloc(expression);
                    expression = Expression::Call(CallExpression {
                        data: NodeData::new(SyntaxKind::CallExpression, pos, end),
                        expression: target,
                        question_dot: false,
                        type_arguments: None,
                        arguments,
                    });
                }
                SyntaxKind::ExclamationToken if !self.has_line_break_before() => {
                    let pos = expression.data().range.pos;
                    let end = self.token_end();
                    self.next_token();
                    let target = self.alloc(expression);
                    expression = Expression::NonNull(NonNullExpression {
                        data: NodeData::new(SyntaxKind::NonNullExpression, pos, end),
                        expression: target,
                    });
                }
                SyntaxKind::LessThanToken => {
                    // `f<T>(...)` vs `f < x` — speculative type-argument
                    // parse; commits only when the list closes and a call or
                    // tagged template follows.
                    match self.try_parse_call_type_arguments(cx) {
                        Some(type_arguments) => {
                            let pos = expression.data().range.pos;
                            if self.current_token() == SyntaxKind::OpenParenToken {
                                let arguments = self.parse_argument_list(cx);
                                let end = self.token_end();
                                let target = self.alloc(expression);
                                expression = Expression::Call(CallExpression {
                                    data: NodeData::new(SyntaxKind::CallExpression, pos, end),
                                    expression: target,
                                    question_dot: false,
                                    type_arguments: Some(type_arguments),
                                    arguments,
                                });
                            } else {
                                let template = {
                                    let t = self.parse_template_expression(cx);
                                    self.alloc(t)
                                };
                                let end = template.data().range.end;
                                let tag = self.alloc(expression);
                                expression = Expression::TaggedTemplate(TaggedTemplateExpression {
                                    data: NodeData::new(
                                        SyntaxKind::TaggedTemplateExpression,
                                        pos,
                                        end,
                                    ),
                                    tag,
                                    type_arguments: Some(type_arguments),
                                    template,
                                });
                            }
                        }
                        None => break,
                    }
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    // Tagged template: tag and literal must be adjacent.
                    let pos = expression.data().range.pos;
                    let template = {
                        let t = self.parse_template_expression(cx);
                        self.alloc(t)
                    };
                    let end = template.data().range.end;
                    let tag = self.alloc(expression);
                    expression = Expression::TaggedTemplate(TaggedTemplateExpression {
                        data: NodeData::new(SyntaxKind::TaggedTemplateExpression, pos, end),
                        tag,
                        type_arguments: None,
                        template,
                    });
                }
                _ => break,
            }
        }

        expression
    }

    fn parse_new_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::NewKeyword);

        // `new.target`
        if self.parse_optional(SyntaxKind::DotToken) {
            let name = self.parse_identifier_name();
            let end = name.data.range.end;
            return Expression::MetaProperty(MetaPropertyExpression {
                data: NodeData::new(SyntaxKind::MetaProperty, pos, end),
                keyword: SyntaxKind::NewKeyword,
                name,
            });
        }

        let mut callee = if self.current_token() == SyntaxKind::NewKeyword {
            self.parse_new_expression(cx)
        } else {
            self.parse_primary_expression(cx)
        };

        // Member accesses bind tighter than the `new` argument list.
        loop {
            match self.current_token() {
                SyntaxKind::DotToken => {
                    let cpos = callee.data().range.pos;
                    self.next_token();
                    let name = MemberName::Identifier(self.parse_identifier_name());
                    let cend = match &name {
                        MemberName::Identifier(id) | MemberName::PrivateIdentifier(id) => {
                            id.data.range.end
                        }
                    };
                    let target = self.alloc(callee);
                    callee = Expression::PropertyAccess(PropertyAccessExpression {
                        data: NodeData::new(SyntaxKind::PropertyAccessExpression, cpos, cend),
                        expression: target,
                        question_dot: false,
                        name,
                    });
                }
                SyntaxKind::OpenBracketToken => {
                    let cpos = callee.data().range.pos;
                    self.next_token();
                    let argument = self.parse_expression_alloc(cx.allow_in());
                    let cend = self.token_end();
                    self.expect(SyntaxKind::CloseBracketToken);
                    let target = self.alloc(callee);
                    callee = Expression::ElementAccess(ElementAccessExpression {
                        data: NodeData::new(SyntaxKind::ElementAccessExpression, cpos, cend),
                        expression: target,
                        question_dot: false,
                        argument_expression: argument,
                    });
                }
                _ => break,
            }
        }

        let type_arguments = if self.current_token() == SyntaxKind::LessThanToken {
            self.try_parse_call_type_arguments(cx)
        } else {
            None
        };
        let arguments = if self.current_token() == SyntaxKind::OpenParenToken {
            Some(self.parse_argument_list(cx))
        } else {
            None
        };
        let end = self.token_end();
        let expression = self.alloc(callee);
        Expression::New(NewExpression {
            data: NodeData::new(SyntaxKind::NewExpression, pos, end),
            expression,
            type_arguments,
            arguments,
        })
    }

    fn parse_argument_list(&mut self, cx: ParseContext) -> &'a [Expression<'a>] {
        self.expect(SyntaxKind::OpenParenToken);
        let mut arguments = Vec::new();
        while self.current_token() != SyntaxKind::CloseParenToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            if self.current_token() == SyntaxKind::DotDotDotToken {
                let pos = self.token_pos();
                self.next_token();
                let inner = self.parse_assignment_expression_alloc(cx.allow_in());
                let end = inner.data().range.end;
                arguments.push(Expression::Spread(SpreadElement {
                    data: NodeData::new(SyntaxKind::SpreadElement, pos, end),
                    expression: inner,
                }));
            } else {
                arguments.push(self.parse_assignment_expression(cx.allow_in()));
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParenToken);
        self.alloc_vec(arguments)
    }

    fn parse_primary_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        match self.current_token() {
            SyntaxKind::NumericLiteral => {
                let pos = self.token_pos();
                let end = self.token_end();
                let text = self.token_value().to_string();
                self.next_token();
                Expression::NumericLiteral(NumericLiteral {
                    data: NodeData::new(SyntaxKind::NumericLiteral, pos, end),
                    text,
                })
            }
            SyntaxKind::BigIntLiteral => {
                let pos = self.token_pos();
                let end = self.token_end();
                let text = self.token_value().to_string();
                self.next_token();
                Expression::BigIntLiteral(BigIntLiteral {
                    data: NodeData::new(SyntaxKind::BigIntLiteral, pos, end),
                    text,
                })
            }
            SyntaxKind::StringLiteral => {
                Expression::StringLiteral(self.parse_string_literal_token())
            }
            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                self.parse_template_expression(cx)
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                // Expression start: `/` begins a regex, not division.
                self.scanner.rescan_slash_token();
                let pos = self.token_pos();
                let end = self.token_end();
                let text = self.token_value().to_string();
                self.next_token();
                Expression::RegularExpressionLiteral(RegularExpressionLiteral {
                    data: NodeData::new(SyntaxKind::RegularExpressionLiteral, pos, end),
                    text,
                })
            }
            SyntaxKind::TrueKeyword => self.parse_keyword_expression(Expression::True),
            SyntaxKind::FalseKeyword => self.parse_keyword_expression(Expression::False),
            SyntaxKind::NullKeyword => self.parse_keyword_expression(Expression::Null),
            SyntaxKind::ThisKeyword => self.parse_keyword_expression(Expression::This),
            SyntaxKind::SuperKeyword => self.parse_keyword_expression(Expression::Super),
            SyntaxKind::OpenParenToken => {
                let pos = self.token_pos();
                self.next_token();
                let expression = self.parse_expression_alloc(cx.allow_in());
                let end = self.token_end();
                self.expect(SyntaxKind::CloseParenToken);
                Expression::Parenthesized(ParenthesizedExpression {
                    data: NodeData::new(SyntaxKind::ParenthesizedExpression, pos, end),
                    expression,
                })
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(cx),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(cx),
            SyntaxKind::FunctionKeyword => self.parse_function_expression(cx, false),
            SyntaxKind::ClassKeyword => self.parse_class_expression(cx),
            SyntaxKind::ImportKeyword => {
                let pos = self.token_pos();
                self.next_token();
                if self.parse_optional(SyntaxKind::DotToken) {
                    let name = self.parse_identifier_name();
                    let end = name.data.range.end;
                    Expression::MetaProperty(MetaPropertyExpression {
                        data: NodeData::new(SyntaxKind::MetaProperty, pos, end),
                        keyword: SyntaxKind::ImportKeyword,
                        name,
                    })
                } else {
                    let arguments = self.parse_argument_list(cx);
                    let end = self.token_end();
                    Expression::ImportCall(ImportCallExpression {
                        data: NodeData::new(SyntaxKind::ImportCallExpression, pos, end),
                        arguments,
                    })
                }
            }
            SyntaxKind::AsyncKeyword => {
                // `async` not followed by an arrow or function expression is
                // an ordinary identifier.
                if self.is_async_function_start() {
                    let pos = self.token_pos();
                    self.next_token();
                    let mut expr = self.parse_function_expression(cx, true);
                    if let Expression::FunctionExpression(f) = &mut expr {
                        f.data.range.pos = pos;
                    }
                    expr
                } else {
                    Expression::Identifier(self.parse_identifier(cx))
                }
            }
            _ if self.is_identifier_candidate(cx) => {
                Expression::Identifier(self.parse_identifier(cx))
            }
            _ => {
                self.error(&messages::EXPRESSION_EXPECTED, &[]);
                let pos = self.token_pos();
                let end = self.token_end();
                self.next_token();
                Expression::Identifier(Identifier {
                    data: NodeData::new(SyntaxKind::Identifier, pos, end),
                    text: self.interner.intern(""),
                })
            }
        }
    }

    fn parse_keyword_expression(
        &mut self,
        make: fn(NodeData) -> Expression<'a>,
    ) -> Expression<'a> {
        let kind = match self.current_token() {
            SyntaxKind::TrueKeyword => SyntaxKind::TrueKeyword,
            SyntaxKind::FalseKeyword => SyntaxKind::FalseKeyword,
            SyntaxKind::NullKeyword => SyntaxKind::NullKeyword,
            SyntaxKind::ThisKeyword => SyntaxKind::ThisKeyword,
            _ => SyntaxKind::SuperKeyword,
        };
        let pos = self.token_pos();
        let end = self.token_end();
        self.next_token();
        make(NodeData::new(kind, pos, end))
    }

    fn parse_array_literal(&mut self, cx: ParseContext) -> Expression<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBracketToken);
        let mut elements = Vec::new();
        while self.current_token() != SyntaxKind::CloseBracketToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            if self.current_token() == SyntaxKind::CommaToken {
                let hpos = self.token_pos();
                elements.push(Expression::Omitted(NodeData::new(
                    SyntaxKind::OmittedExpression,
                    hpos,
                    hpos,
                )));
                self.next_token();
                continue;
            }
            if self.current_token() == SyntaxKind::DotDotDotToken {
                let spos = self.token_pos();
                self.next_token();
                let inner = self.parse_assignment_expression_alloc(cx.allow_in());
                let send = inner.data().range.end;
                elements.push(Expression::Spread(SpreadElement {
                    data: NodeData::new(SyntaxKind::SpreadElement, spos, send),
                    expression: inner,
                }));
            } else {
                elements.push(self.parse_assignment_expression(cx.allow_in()));
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBracketToken);
        Expression::ArrayLiteral(ArrayLiteralExpression {
            data: NodeData::new(SyntaxKind::ArrayLiteralExpression, pos, end),
            elements: self.alloc_vec(elements),
        })
    }

    fn parse_object_literal(&mut self, cx: ParseContext) -> Expression<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBraceToken);
        let mut properties = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            properties.push(self.parse_object_literal_element(cx));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        Expression::ObjectLiteral(ObjectLiteralExpression {
            data: NodeData::new(SyntaxKind::ObjectLiteralExpression, pos, end),
            properties: self.alloc_vec(properties),
        })
    }

    fn parse_object_literal_element(&mut self, cx: ParseContext) -> ObjectLiteralElement<'a> {
        let pos = self.token_pos();

        if self.current_token() == SyntaxKind::DotDotDotToken {
            self.next_token();
            let expression = self.parse_assignment_expression_alloc(cx.allow_in());
            let end = expression.data().range.end;
            return ObjectLiteralElement::Spread(SpreadAssignment {
                data: NodeData::new(SyntaxKind::SpreadAssignment, pos, end),
                expression,
            });
        }

        // Accessors: `get name() {}` / `set name(v) {}`. A bare `get`
        // followed by `,`/`:`/`}` is an ordinary property name.
        if matches!(
            self.current_token(),
            SyntaxKind::GetKeyword | SyntaxKind::SetKeyword
        ) && self.next_token_starts_property_name()
        {
            let is_get = self.current_token() == SyntaxKind::GetKeyword;
            self.next_token();
            let name = self.parse_property_name(cx);
            let body_cx = cx.function_body(false, false);
            let parameters = self.parse_parameter_list(body_cx);
            let return_type = self.parse_type_annotation(cx);
            let body = if self.current_token() == SyntaxKind::OpenBraceToken {
                Some(self.parse_block(body_cx))
            } else {
                None
            };
            let end = self.token_end();
            return if is_get {
                ObjectLiteralElement::GetAccessor(GetAccessorDeclaration {
                    data: NodeData::new(SyntaxKind::GetAccessor, pos, end),
                    decorators: &[],
                    name,
                    return_type,
                    body,
                })
            } else {
                ObjectLiteralElement::SetAccessor(SetAccessorDeclaration {
                    data: NodeData::new(SyntaxKind::SetAccessor, pos, end),
                    decorators: &[],
                    name,
                    parameters,
                    body,
                })
            };
        }

        let mut modifiers = ModifierFlags::NONE;
        if self.current_token() == SyntaxKind::AsyncKeyword
            && self.next_token_continues_member(ModifierFlags::ASYNC)
        {
            modifiers |= ModifierFlags::ASYNC;
            self.next_token();
        }
        let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);

        let name = self.parse_property_name(cx);

        if matches!(
            self.current_token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_parameters = self.parse_type_parameters(cx);
            let body_cx = cx.function_body(modifiers.contains(ModifierFlags::ASYNC), asterisk);
            let parameters = self.parse_parameter_list(body_cx);
            let return_type = self.parse_type_annotation(cx);
            let body = if self.current_token() == SyntaxKind::OpenBraceToken {
                Some(self.parse_block(body_cx))
            } else {
                None
            };
            let end = self.token_end();
            return ObjectLiteralElement::Method(MethodDeclaration {
                data: NodeData::with_modifiers(SyntaxKind::MethodDeclaration, pos, end, modifiers),
                decorators: &[],
                name,
                question: false,
                asterisk,
                type_parameters,
                parameters,
                return_type,
                body,
            });
        }

        if self.parse_optional(SyntaxKind::ColonToken) {
            let initializer = self.parse_assignment_expression_alloc(cx.allow_in());
            let end = initializer.data().range.end;
            return ObjectLiteralElement::PropertyAssignment(PropertyAssignment {
                data: NodeData::new(SyntaxKind::PropertyAssignment, pos, end),
                name,
                initializer,
            });
        }

        // Shorthand: `{ x }`, or `{ x = 1 }` in destructuring-assignment
        // position.
        if let PropertyName::Identifier(id) = name {
            let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(self.parse_assignment_expression_alloc(cx.allow_in()))
            } else {
                None
            };
            let end = self.token_end();
            return ObjectLiteralElement::Shorthand(ShorthandPropertyAssignment {
                data: NodeData::new(SyntaxKind::ShorthandPropertyAssignment, pos, end),
                name: id,
                initializer,
            });
        }

        self.error(&messages::PROPERTY_ASSIGNMENT_EXPECTED, &[]);
        let end = self.token_end();
        let missing = self.alloc(Expression::Omitted(NodeData::new(
            SyntaxKind::OmittedExpression,
            end,
            end,
        )));
        ObjectLiteralElement::PropertyAssignment(PropertyAssignment {
            data: NodeData::new(SyntaxKind::PropertyAssignment, pos, end),
            name,
            initializer: missing,
        })
    }

    pub(crate) fn parse_template_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let pos = self.token_pos();
        if self.current_token() == SyntaxKind::NoSubstitutionTemplateLiteral {
            let end = self.token_end();
            let text = self.token_value().to_string();
            self.next_token();
            return Expression::NoSubstitutionTemplateLiteral(NoSubstitutionTemplateLiteral {
                data: NodeData::new(SyntaxKind::NoSubstitutionTemplateLiteral, pos, end),
                text,
            });
        }

        let head_text = self.token_value().to_string();
        let mut spans = Vec::new();
        loop {
            self.next_token(); // first token of the substitution expression
            let spos = self.token_pos();
            let expression = self.parse_expression_alloc(cx.allow_in());
            if self.current_token() != SyntaxKind::CloseBraceToken {
                self.error(&messages::_0_EXPECTED, &["}"]);
                break;
            }
            let kind = self.scanner.rescan_template_token();
            let literal_text = self.token_value().to_string();
            let send = self.token_end();
            spans.push(TemplateSpan {
                data: NodeData::new(SyntaxKind::TemplateSpan, spos, send),
                expression,
                literal_text,
            });
            if kind == SyntaxKind::TemplateTail {
                self.next_token();
                break;
            }
        }
        let end = self.token_end();
        Expression::Template(TemplateExpression {
            data: NodeData::new(SyntaxKind::TemplateExpression, pos, end),
            head_text,
            spans: self.alloc_vec(spans),
        })
    }

    fn parse_function_expression(&mut self, cx: ParseContext, is_async: bool) -> Expression<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::FunctionKeyword);
        let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
        let body_cx = cx.function_body(is_async, asterisk);
        let name = if self.is_identifier_candidate(body_cx) {
            Some(self.parse_identifier(body_cx))
        } else {
            None
        };
        let type_parameters = self.parse_type_parameters(cx);
        let parameters = self.parse_parameter_list(body_cx);
        let return_type = self.parse_type_annotation(cx);
        let body = {
            let b = self.parse_block(body_cx);
            self.alloc(b)
        };
        let end = body.data.range.end;
        let mut data = NodeData::new(SyntaxKind::FunctionExpression, pos, end);
        if is_async {
            data.modifier_flags |= ModifierFlags::ASYNC;
        }
        Expression::FunctionExpression(FunctionExpression {
            data,
            name,
            asterisk,
            type_parameters,
            parameters,
            return_type,
            body,
        })
    }

    fn parse_class_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::ClassKeyword);
        let name = if self.is_identifier_candidate(cx)
            && self.current_token() != SyntaxKind::ExtendsKeyword
        {
            Some(self.parse_identifier(cx))
        } else {
            None
        };
        let type_parameters = self.parse_type_parameters(cx);
        let heritage_clauses = self.parse_heritage_clauses(cx);
        let members = self.parse_class_members(cx);
        let end = self.token_end();
        Expression::ClassExpression(ClassExpression {
            data: NodeData::new(SyntaxKind::ClassExpression, pos, end),
            name,
            type_parameters,
            heritage_clauses,
            members,
        })
    }

    fn parse_yield_expression(&mut self, cx: ParseContext) -> Expression<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::YieldKeyword);
        let asterisk = !self.has_line_break_before()
            && self.parse_optional(SyntaxKind::AsteriskToken);
        let expression = if !self.has_line_break_before()
            && !matches!(
                self.current_token(),
                SyntaxKind::SemicolonToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::ColonToken
                    | SyntaxKind::EndOfFileToken
            ) {
            Some(self.parse_assignment_expression_alloc(cx))
        } else {
            None
        };
        let end = expression
            .map(|e| e.data().range.end)
            .unwrap_or_else(|| self.token_pos());
        Expression::Yield(YieldExpression {
            data: NodeData::new(SyntaxKind::YieldExpression, pos, end),
            asterisk,
            expression,
        })
    }

    // ------------------------------------------------------------------------
    // Arrow functions
    // ------------------------------------------------------------------------

    /// `x => body` — a single bare parameter without annotation needs no
    /// parentheses.
    pub(crate) fn parse_simple_arrow_function(
        &mut self,
        cx: ParseContext,
        is_async: bool,
    ) -> Expression<'a> {
        let pos = self.token_pos();
        let id = self.parse_identifier(cx);
        let param_data = id.data.clone();
        let parameter = ParameterDeclaration {
            data: NodeData::new(SyntaxKind::Parameter, param_data.range.pos, param_data.range.end),
            dot_dot_dot: false,
            name: BindingName::Identifier(id),
            question: false,
            type_annotation: None,
            initializer: None,
        };
        let parameters = self.alloc_vec(vec![parameter]);
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        let body = self.parse_arrow_body(cx.function_body(is_async, false));
        let end = self.arrow_body_end(&body);
        let mut data = NodeData::new(SyntaxKind::ArrowFunction, pos, end);
        if is_async {
            data.modifier_flags |= ModifierFlags::ASYNC;
        }
        Expression::ArrowFunction(ArrowFunction {
            data,
            type_parameters: None,
            parenthesized: false,
            parameters,
            return_type: None,
            body,
        })
    }

    /// `(params) => body`, optionally with a return-type annotation. Called
    /// after the disambiguator has confirmed the arrow interpretation.
    pub(crate) fn parse_parenthesized_arrow_function(
        &mut self,
        cx: ParseContext,
        pos: u32,
        is_async: bool,
        type_parameters: Option<&'a [TypeParameterDeclaration<'a>]>,
    ) -> Expression<'a> {
        let body_cx = cx.function_body(is_async, false);
        let parameters = self.parse_parameter_list(body_cx);
        let return_type = self.parse_type_annotation(cx);
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        let body = self.parse_arrow_body(body_cx);
        let end = self.arrow_body_end(&body);
        let mut data = NodeData::new(SyntaxKind::ArrowFunction, pos, end);
        if is_async {
            data.modifier_flags |= ModifierFlags::ASYNC;
        }
        Expression::ArrowFunction(ArrowFunction {
            data,
            type_parameters,
            parenthesized: true,
            parameters,
            return_type,
            body,
        })
    }

    pub(crate) fn parse_arrow_body(&mut self, body_cx: ParseContext) -> ArrowFunctionBody<'a> {
        if self.current_token() == SyntaxKind::OpenBraceToken {
            let block = self.parse_block(body_cx);
            ArrowFunctionBody::Block(self.alloc(block))
        } else {
            let expression = self.parse_assignment_expression(body_cx);
            ArrowFunctionBody::Expression(self.alloc(expression))
        }
    }

    fn arrow_body_end(&self, body: &ArrowFunctionBody<'a>) -> u32 {
        match body {
            ArrowFunctionBody::Block(b) => b.data.range.end,
            ArrowFunctionBody::Expression(e) => e.data().range.end,
        }
    }
}

// ============================================================================
// Type positions
// ============================================================================

impl<'a> Parser<'a> {
    pub(crate) fn parse_type_alloc(&mut self, cx: ParseContext) -> &'a TypeNode<'a> {
        let type_node = self.parse_type(cx);
        self.alloc(type_node)
    }

    pub(crate) fn parse_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        if !self.enter_recursion() {
            self.exit_recursion();
            let pos = self.token_pos();
            return TypeNode::Keyword(KeywordTypeNode {
                data: NodeData::new(SyntaxKind::AnyKeyword, pos, pos),
            });
        }
        let result = self.parse_type_inner(cx);
        self.exit_recursion();
        result
    }

    fn parse_type_inner(&mut self, cx: ParseContext) -> TypeNode<'a> {
        // Type predicates: `asserts x`, `asserts x is T`, `x is T`,
        // `this is T`. Only meaningful in return-type position; parsed
        // leniently anywhere since every type position is erased.
        if self.current_token() == SyntaxKind::AssertsKeyword {
            let next = self.peek_token();
            if next == SyntaxKind::ThisKeyword
                || next == SyntaxKind::Identifier
                || next.is_contextual_keyword()
            {
                return self.parse_asserts_predicate(cx);
            }
        }
        if (self.is_identifier_candidate(cx) || self.current_token() == SyntaxKind::ThisKeyword)
            && self.peek_token() == SyntaxKind::IsKeyword
        {
            let pos = self.token_pos();
            let parameter_name = self.parse_predicate_name(cx);
            self.expect(SyntaxKind::IsKeyword);
            let type_node = self.parse_type_alloc(cx);
            let end = type_node.data().range.end;
            return TypeNode::Predicate(TypePredicateNode {
                data: NodeData::new(SyntaxKind::TypePredicate, pos, end),
                asserts: false,
                parameter_name,
                type_node: Some(type_node),
            });
        }

        // Function-type forms: `<T>(x) => R`, `new (x) => R`, `(x) => R`.
        if self.current_token() == SyntaxKind::LessThanToken {
            let pos = self.token_pos();
            let type_parameters = self.parse_type_parameters(cx);
            return self.parse_function_type_rest(cx, pos, type_parameters);
        }
        if self.current_token() == SyntaxKind::NewKeyword {
            return self.parse_constructor_type(cx);
        }
        if self.current_token() == SyntaxKind::OpenParenToken && self.is_start_of_function_type() {
            let pos = self.token_pos();
            return self.parse_function_type_rest(cx, pos, None);
        }

        let checked = self.parse_union_or_intersection_type(cx);

        // Conditional type: `T extends U ? X : Y` — pure type-level, no
        // runtime representation at all.
        if self.current_token() == SyntaxKind::ExtendsKeyword {
            let pos = checked.data().range.pos;
            self.next_token();
            let extends_type = {
                let t = self.parse_union_or_intersection_type(cx);
                self.alloc(t)
            };
            self.expect(SyntaxKind::QuestionToken);
            let true_type = self.parse_type_alloc(cx);
            self.expect(SyntaxKind::ColonToken);
            let false_type = self.parse_type_alloc(cx);
            let end = false_type.data().range.end;
            let check_type = self.alloc(checked);
            return TypeNode::Conditional(ConditionalTypeNode {
                data: NodeData::new(SyntaxKind::ConditionalType, pos, end),
                check_type,
                extends_type,
                true_type,
                false_type,
            });
        }

        checked
    }

    fn parse_predicate_name(&mut self, cx: ParseContext) -> Identifier {
        if self.current_token() == SyntaxKind::ThisKeyword {
            let pos = self.token_pos();
            let end = self.token_end();
            self.next_token();
            Identifier {
                data: NodeData::new(SyntaxKind::Identifier, pos, end),
                text: self.interner.intern("this"),
            }
        } else {
            self.parse_identifier(cx)
        }
    }

    fn parse_asserts_predicate(&mut self, cx: ParseContext) -> TypeNode<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::AssertsKeyword);
        let parameter_name = self.parse_predicate_name(cx);
        let type_node = if self.parse_optional(SyntaxKind::IsKeyword) {
            Some(self.parse_type_alloc(cx))
        } else {
            None
        };
        let end = self.token_end();
        TypeNode::Predicate(TypePredicateNode {
            data: NodeData::new(SyntaxKind::TypePredicate, pos, end),
            asserts: true,
            parameter_name,
            type_node,
        })
    }

    fn parse_function_type_rest(
        &mut self,
        cx: ParseContext,
        pos: u32,
        type_parameters: Option<&'a [TypeParameterDeclaration<'a>]>,
    ) -> TypeNode<'a> {
        let parameters = self.parse_parameter_list(cx);
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        let return_type = self.parse_type_alloc(cx);
        let end = return_type.data().range.end;
        TypeNode::Function(FunctionTypeNode {
            data: NodeData::new(SyntaxKind::FunctionType, pos, end),
            type_parameters,
            parameters,
            return_type,
        })
    }

    fn parse_constructor_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::NewKeyword);
        let type_parameters = self.parse_type_parameters(cx);
        let parameters = self.parse_parameter_list(cx);
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        let return_type = self.parse_type_alloc(cx);
        let end = return_type.data().range.end;
        TypeNode::Constructor(ConstructorTypeNode {
            data: NodeData::new(SyntaxKind::ConstructorType, pos, end),
            type_parameters,
            parameters,
            return_type,
        })
    }

    fn parse_union_or_intersection_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        self.parse_optional(SyntaxKind::BarToken);
        let first = self.parse_intersection_type(cx);

        if self.current_token() == SyntaxKind::BarToken {
            let pos = first.data().range.pos;
            let mut types = vec![first];
            while self.parse_optional(SyntaxKind::BarToken) {
                types.push(self.parse_intersection_type(cx));
            }
            let end = types.last().map(|t| t.data().range.end).unwrap_or(pos);
            return TypeNode::Union(UnionTypeNode {
                data: NodeData::new(SyntaxKind::UnionType, pos, end),
                types: self.alloc_vec(types),
            });
        }

        first
    }

    fn parse_intersection_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        self.parse_optional(SyntaxKind::AmpersandToken);
        let first = self.parse_type_operator(cx);

        if self.current_token() == SyntaxKind::AmpersandToken {
            let pos = first.data().range.pos;
            let mut types = vec![first];
            while self.parse_optional(SyntaxKind::AmpersandToken) {
                types.push(self.parse_type_operator(cx));
            }
            let end = types.last().map(|t| t.data().range.end).unwrap_or(pos);
            return TypeNode::Intersection(IntersectionTypeNode {
                data: NodeData::new(SyntaxKind::IntersectionType, pos, end),
                types: self.alloc_vec(types),
            });
        }

        first
    }

    /// `keyof T`, `unique symbol`, `readonly T[]` — prefix type operators.
    fn parse_type_operator(&mut self, cx: ParseContext) -> TypeNode<'a> {
        match self.current_token() {
            operator @ (SyntaxKind::KeyOfKeyword
            | SyntaxKind::UniqueKeyword
            | SyntaxKind::ReadonlyKeyword) => {
                let pos = self.token_pos();
                self.next_token();
                let type_node = {
                    let t = self.parse_type_operator(cx);
                    self.alloc(t)
                };
                let end = type_node.data().range.end;
                TypeNode::TypeOperator(TypeOperatorNode {
                    data: NodeData::new(SyntaxKind::TypeOperator, pos, end),
                    operator,
                    type_node,
                })
            }
            SyntaxKind::InferKeyword => {
                let pos = self.token_pos();
                self.next_token();
                let tp_pos = self.token_pos();
                let name = self.parse_identifier(cx);
                let tp_end = name.data.range.end;
                let type_parameter = self.alloc(TypeParameterDeclaration {
                    data: NodeData::new(SyntaxKind::TypeParameter, tp_pos, tp_end),
                    name,
                    constraint: None,
                    default: None,
                });
                let end = self.token_end();
                TypeNode::Infer(InferTypeNode {
                    data: NodeData::new(SyntaxKind::InferType, pos, end),
                    type_parameter,
                })
            }
            _ => self.parse_postfix_type(cx),
        }
    }

    fn parse_postfix_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        let mut type_node = self.parse_primary_type(cx);

        while self.current_token() == SyntaxKind::OpenBracketToken
            && !self.has_line_break_before()
        {
            let pos = type_node.data().range.pos;
            self.next_token();
            if self.current_token() == SyntaxKind::CloseBracketToken {
                let end = self.token_end();
                self.next_token();
                let element_type = self.alloc(type_node);
                type_node = TypeNode::Array(ArrayTypeNode {
                    data: NodeData::new(SyntaxKind::ArrayType, pos, end),
                    element_type,
                });
            } else {
                let index_type = self.parse_type_alloc(cx);
                let end = self.token_end();
                self.expect(SyntaxKind::CloseBracketToken);
                let object_type = self.alloc(type_node);
                type_node = TypeNode::IndexedAccess(IndexedAccessTypeNode {
                    data: NodeData::new(SyntaxKind::IndexedAccessType, pos, end),
                    object_type,
                    index_type,
                });
            }
        }

        type_node
    }

    fn parse_primary_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        match self.current_token() {
            SyntaxKind::AnyKeyword
            | SyntaxKind::UnknownKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::BigIntKeyword
            | SyntaxKind::SymbolKeyword
            | SyntaxKind::ObjectKeyword
            | SyntaxKind::NeverKeyword
            | SyntaxKind::UndefinedKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ConstKeyword => {
                // Keyword types, including `const` from `as const`
                // assertions. `undefined` and friends only act as keyword
                // types when nothing follows that would make them a
                // reference.
                let pos = self.token_pos();
                let kind = self.current_token();
                let end = self.token_end();
                self.next_token();
                TypeNode::Keyword(KeywordTypeNode {
                    data: NodeData::new(kind, pos, end),
                })
            }

            SyntaxKind::ThisKeyword => {
                let pos = self.token_pos();
                let end = self.token_end();
                self.next_token();
                TypeNode::This(ThisTypeNode {
                    data: NodeData::new(SyntaxKind::ThisType, pos, end),
                })
            }

            SyntaxKind::TypeOfKeyword => {
                let pos = self.token_pos();
                self.next_token();
                let expr_name = self.parse_entity_name(cx);
                let end = expr_name.data().range.end;
                TypeNode::TypeQuery(TypeQueryNode {
                    data: NodeData::new(SyntaxKind::TypeQuery, pos, end),
                    expr_name,
                })
            }

            SyntaxKind::OpenBracketToken => self.parse_tuple_type(cx),
            SyntaxKind::OpenParenToken => {
                let pos = self.token_pos();
                self.next_token();
                let inner = self.parse_type_alloc(cx);
                let end = self.token_end();
                self.expect(SyntaxKind::CloseParenToken);
                TypeNode::Parenthesized(ParenthesizedTypeNode {
                    data: NodeData::new(SyntaxKind::ParenthesizedType, pos, end),
                    type_node: inner,
                })
            }
            SyntaxKind::OpenBraceToken => self.parse_type_literal_or_mapped_type(cx),

            SyntaxKind::StringLiteral => {
                let literal = Expression::StringLiteral(self.parse_string_literal_token());
                self.finish_literal_type(literal)
            }
            SyntaxKind::NumericLiteral => {
                let pos = self.token_pos();
                let end = self.token_end();
                let text = self.token_value().to_string();
                self.next_token();
                let literal = Expression::NumericLiteral(NumericLiteral {
                    data: NodeData::new(SyntaxKind::NumericLiteral, pos, end),
                    text,
                });
                self.finish_literal_type(literal)
            }
            SyntaxKind::BigIntLiteral => {
                let pos = self.token_pos();
                let end = self.token_end();
                let text = self.token_value().to_string();
                self.next_token();
                let literal = Expression::BigIntLiteral(BigIntLiteral {
                    data: NodeData::new(SyntaxKind::BigIntLiteral, pos, end),
                    text,
                });
                self.finish_literal_type(literal)
            }
            SyntaxKind::TrueKeyword => {
                let pos = self.token_pos();
                let end = self.token_end();
                self.next_token();
                self.finish_literal_type(Expression::True(NodeData::new(
                    SyntaxKind::TrueKeyword,
                    pos,
                    end,
                )))
            }
            SyntaxKind::FalseKeyword => {
                let pos = self.token_pos();
                let end = self.token_end();
                self.next_token();
                self.finish_literal_type(Expression::False(NodeData::new(
                    SyntaxKind::FalseKeyword,
                    pos,
                    end,
                )))
            }
            SyntaxKind::MinusToken => {
                let pos = self.token_pos();
                self.next_token();
                let npos = self.token_pos();
                let nend = self.token_end();
                let text = self.token_value().to_string();
                self.expect(SyntaxKind::NumericLiteral);
                let operand = self.alloc(Expression::NumericLiteral(NumericLiteral {
                    data: NodeData::new(SyntaxKind::NumericLiteral, npos, nend),
                    text,
                }));
                let literal = Expression::PrefixUnary(PrefixUnaryExpression {
                    data: NodeData::new(SyntaxKind::PrefixUnaryExpression, pos, nend),
                    operator: SyntaxKind::MinusToken,
                    operand,
                });
                self.finish_literal_type(literal)
            }

            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                self.parse_template_literal_type(cx)
            }

            kind if kind == SyntaxKind::Identifier || kind.is_contextual_keyword() => {
                let pos = self.token_pos();
                let type_name = self.parse_entity_name(ParseContext::NONE);
                let type_arguments = if self.current_token() == SyntaxKind::LessThanToken {
                    self.parse_type_argument_list(cx)
                } else {
                    None
                };
                let end = self.token_end();
                TypeNode::TypeReference(TypeReferenceNode {
                    data: NodeData::new(SyntaxKind::TypeReference, pos, end),
                    type_name,
                    type_arguments,
                })
            }

            _ => {
                let pos = self.token_pos();
                let end = self.token_end();
                self.error(&messages::TYPE_EXPECTED, &[]);
                self.next_token();
                TypeNode::Keyword(KeywordTypeNode {
                    data: NodeData::new(SyntaxKind::AnyKeyword, pos, end),
                })
            }
        }
    }

    fn finish_literal_type(&mut self, literal: Expression<'a>) -> TypeNode<'a> {
        let range = literal.data().range;
        let literal = self.alloc(literal);
        TypeNode::Literal(LiteralTypeNode {
            data: NodeData::new(SyntaxKind::LiteralType, range.pos, range.end),
            literal,
        })
    }

    fn parse_tuple_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBracketToken);
        let mut elements = Vec::new();
        while self.current_token() != SyntaxKind::CloseBracketToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            elements.push(self.parse_tuple_member(cx));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBracketToken);
        TypeNode::Tuple(TupleTypeNode {
            data: NodeData::new(SyntaxKind::TupleType, pos, end),
            elements: self.alloc_vec(elements),
        })
    }

    fn parse_tuple_member(&mut self, cx: ParseContext) -> TypeNode<'a> {
        let pos = self.token_pos();
        if self.current_token() == SyntaxKind::DotDotDotToken {
            self.next_token();
            let inner = {
                let t = self.parse_tuple_member(cx);
                self.alloc(t)
            };
            let end = inner.data().range.end;
            return TypeNode::Rest(RestTypeNode {
                data: NodeData::new(SyntaxKind::RestType, pos, end),
                type_node: inner,
            });
        }

        // Named member: `name: T` / `name?: T`
        if (self.current_token() == SyntaxKind::Identifier
            || self.current_token().is_contextual_keyword())
            && self.is_named_tuple_member_start()
        {
            let name = self.parse_identifier_name();
            let question = self.parse_optional(SyntaxKind::QuestionToken);
            self.expect(SyntaxKind::ColonToken);
            let type_node = self.parse_type_alloc(cx);
            let end = type_node.data().range.end;
            return TypeNode::NamedTupleMember(NamedTupleMemberNode {
                data: NodeData::new(SyntaxKind::NamedTupleMember, pos, end),
                dot_dot_dot: false,
                name,
                question,
                type_node,
            });
        }

        let member = self.parse_type(cx);
        if self.current_token() == SyntaxKind::QuestionToken {
            let mpos = member.data().range.pos;
            let end = self.token_end();
            self.next_token();
            let inner = self.alloc(member);
            return TypeNode::Optional(OptionalTypeNode {
                data: NodeData::new(SyntaxKind::OptionalType, mpos, end),
                type_node: inner,
            });
        }
        member
    }

    fn is_named_tuple_member_start(&mut self) -> bool {
        self.scanner.look_ahead(|s| {
            let next = s.scan();
            next == SyntaxKind::ColonToken
                || (next == SyntaxKind::QuestionToken && s.scan() == SyntaxKind::ColonToken)
        })
    }

    fn parse_template_literal_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        let pos = self.token_pos();
        if self.current_token() == SyntaxKind::NoSubstitutionTemplateLiteral {
            let end = self.token_end();
            let text = self.token_value().to_string();
            self.next_token();
            let literal = Expression::NoSubstitutionTemplateLiteral(NoSubstitutionTemplateLiteral {
                data: NodeData::new(SyntaxKind::NoSubstitutionTemplateLiteral, pos, end),
                text,
            });
            return self.finish_literal_type(literal);
        }

        let head_text = self.token_value().to_string();
        let mut spans = Vec::new();
        loop {
            self.next_token();
            let spos = self.token_pos();
            let type_node = self.parse_type_alloc(cx);
            if self.current_token() != SyntaxKind::CloseBraceToken {
                self.error(&messages::_0_EXPECTED, &["}"]);
                break;
            }
            let kind = self.scanner.rescan_template_token();
            let literal_text = self.token_value().to_string();
            let send = self.token_end();
            spans.push(TemplateLiteralTypeSpan {
                data: NodeData::new(SyntaxKind::TemplateLiteralType, spos, send),
                type_node,
                literal_text,
            });
            if kind == SyntaxKind::TemplateTail {
                self.next_token();
                break;
            }
        }
        let end = self.token_end();
        TypeNode::TemplateLiteral(TemplateLiteralTypeNode {
            data: NodeData::new(SyntaxKind::TemplateLiteralType, pos, end),
            head_text,
            spans: self.alloc_vec(spans),
        })
    }

    fn parse_type_literal_or_mapped_type(&mut self, cx: ParseContext) -> TypeNode<'a> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBraceToken);

        if self.is_mapped_type_start() {
            return self.parse_mapped_type(cx, pos);
        }

        let mut members = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken
            && self.current_token() != SyntaxKind::EndOfFileToken
        {
            let saved_pos = self.scanner.token_start();
            members.push(self.parse_type_member(cx));
            if self.scanner.token_start() == saved_pos {
                self.next_token();
            }
        }
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        TypeNode::TypeLiteral(TypeLiteralNode {
            data: NodeData::new(SyntaxKind::TypeLiteral, pos, end),
            members: self.alloc_vec(members),
        })
    }

    /// After `{`: a mapped type starts `[K in`, optionally preceded by a
    /// `+`/`-`/`readonly` modifier run.
    fn is_mapped_type_start(&mut self) -> bool {
        fn ident(kind: SyntaxKind) -> bool {
            kind == SyntaxKind::Identifier || kind.is_contextual_keyword()
        }
        match self.current_token() {
            SyntaxKind::OpenBracketToken => self.scanner.look_ahead(|s| {
                ident(s.scan()) && s.scan() == SyntaxKind::InKeyword
            }),
            SyntaxKind::ReadonlyKeyword => self.scanner.look_ahead(|s| {
                s.scan() == SyntaxKind::OpenBracketToken
                    && ident(s.scan())
                    && s.scan() == SyntaxKind::InKeyword
            }),
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => self.scanner.look_ahead(|s| {
                s.scan() == SyntaxKind::ReadonlyKeyword
                    && s.scan() == SyntaxKind::OpenBracketToken
                    && ident(s.scan())
                    && s.scan() == SyntaxKind::InKeyword
            }),
            _ => false,
        }
    }

    fn parse_mapped_type(&mut self, cx: ParseContext, pos: u32) -> TypeNode<'a> {
        // Readonly modifier with optional +/- prefix; recorded nowhere
        // since the whole construct is erased.
        if matches!(
            self.current_token(),
            SyntaxKind::PlusToken | SyntaxKind::MinusToken
        ) {
            self.next_token();
        }
        self.parse_optional(SyntaxKind::ReadonlyKeyword);

        self.expect(SyntaxKind::OpenBracketToken);
        let tp_pos = self.token_pos();
        let name = self.parse_identifier_name();
        self.expect(SyntaxKind::InKeyword);
        let constraint = self.parse_type_alloc(cx);
        let tp_end = constraint.data().range.end;
        let type_parameter = self.alloc(TypeParameterDeclaration {
            data: NodeData::new(SyntaxKind::TypeParameter, tp_pos, tp_end),
            name,
            constraint: Some(constraint),
            default: None,
        });
        let name_type = if self.parse_optional(SyntaxKind::AsKeyword) {
            Some(self.parse_type_alloc(cx))
        } else {
            None
        };
        self.expect(SyntaxKind::CloseBracketToken);

        if matches!(
            self.current_token(),
            SyntaxKind::PlusToken | SyntaxKind::MinusToken
        ) {
            self.next_token();
        }
        self.parse_optional(SyntaxKind::QuestionToken);

        let type_node = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_type_alloc(cx))
        } else {
            None
        };
        self.parse_optional(SyntaxKind::SemicolonToken);
        let end = self.token_end();
        self.expect(SyntaxKind::CloseBraceToken);
        TypeNode::Mapped(MappedTypeNode {
            data: NodeData::new(SyntaxKind::MappedType, pos, end),
            type_parameter,
            name_type,
            type_node,
        })
    }

    pub(crate) fn parse_type_member(&mut self, cx: ParseContext) -> TypeElement<'a> {
        let pos = self.token_pos();

        match self.current_token() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                let type_parameters = self.parse_type_parameters(cx);
                let parameters = self.parse_parameter_list(cx);
                let return_type = self.parse_type_annotation(cx);
                let end = self.token_end();
                self.parse_type_member_separator();
                TypeElement::CallSignature(CallSignatureNode {
                    data: NodeData::new(SyntaxKind::CallSignature, pos, end),
                    type_parameters,
                    parameters,
                    return_type,
                })
            }
            SyntaxKind::NewKeyword
                if matches!(
                    self.peek_token(),
                    SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
                ) =>
            {
                self.next_token();
                let type_parameters = self.parse_type_parameters(cx);
                let parameters = self.parse_parameter_list(cx);
                let return_type = self.parse_type_annotation(cx);
                let end = self.token_end();
                self.parse_type_member_separator();
                TypeElement::ConstructSignature(ConstructSignatureNode {
                    data: NodeData::new(SyntaxKind::ConstructSignature, pos, end),
                    type_parameters,
                    parameters,
                    return_type,
                })
            }
            SyntaxKind::OpenBracketToken if self.is_index_signature_start() => {
                let signature = self.parse_index_signature(cx, ModifierFlags::NONE, pos);
                TypeElement::IndexSignature(signature)
            }
            SyntaxKind::ReadonlyKeyword if self.next_token_starts_property_name_or_bracket() => {
                self.next_token();
                if self.current_token() == SyntaxKind::OpenBracketToken
                    && self.is_index_signature_start()
                {
                    let signature =
                        self.parse_index_signature(cx, ModifierFlags::READONLY, pos);
                    TypeElement::IndexSignature(signature)
                } else {
                    self.parse_property_or_method_signature(cx, pos)
                }
            }
            SyntaxKind::GetKeyword | SyntaxKind::SetKeyword
                if self.next_token_starts_property_name() =>
            {
                // Accessor signatures are type-level; shape them as method
                // signatures since nothing survives erasure anyway.
                self.next_token();
                self.parse_property_or_method_signature(cx, pos)
            }
            _ => self.parse_property_or_method_signature(cx, pos),
        }
    }

    fn parse_property_or_method_signature(
        &mut self,
        cx: ParseContext,
        pos: u32,
    ) -> TypeElement<'a> {
        let name = self.parse_property_name(cx);
        let question = self.parse_optional(SyntaxKind::QuestionToken);

        if matches!(
            self.current_token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_parameters = self.parse_type_parameters(cx);
            let parameters = self.parse_parameter_list(cx);
            let return_type = self.parse_type_annotation(cx);
            let end = self.token_end();
            self.parse_type_member_separator();
            return TypeElement::MethodSignature(MethodSignatureNode {
                data: NodeData::new(SyntaxKind::MethodSignature, pos, end),
                name,
                question,
                type_parameters,
                parameters,
                return_type,
            });
        }

        let type_annotation = self.parse_type_annotation(cx);
        let end = self.token_end();
        self.parse_type_member_separator();
        TypeElement::PropertySignature(PropertySignatureNode {
            data: NodeData::new(SyntaxKind::PropertySignature, pos, end),
            name,
            question,
            type_annotation,
        })
    }

    fn parse_type_member_separator(&mut self) {
        if !self.parse_optional(SyntaxKind::SemicolonToken) {
            self.parse_optional(SyntaxKind::CommaToken);
        }
    }

    fn next_token_starts_property_name_or_bracket(&mut self) -> bool {
        self.next_token_starts_property_name()
            || self.peek_token() == SyntaxKind::OpenBracketToken
    }

    /// Type parameter declarations: `<T, U extends V = W>`. Returns None
    /// when the current token is not `<`.
    pub(crate) fn parse_type_parameters(
        &mut self,
        cx: ParseContext,
    ) -> Option<&'a [TypeParameterDeclaration<'a>]> {
        if self.current_token() != SyntaxKind::LessThanToken {
            return None;
        }
        self.next_token();
        let mut parameters = Vec::new();
        loop {
            let pos = self.token_pos();
            // Variance and const modifiers: `in`, `out`, `const` — erased.
            while matches!(
                self.current_token(),
                SyntaxKind::InKeyword | SyntaxKind::OutKeyword | SyntaxKind::ConstKeyword
            ) && self.next_token_is_identifier(cx)
            {
                self.next_token();
            }
            let name = self.parse_identifier(cx);
            let constraint = if self.current_token() == SyntaxKind::ExtendsKeyword {
                self.next_token();
                Some(self.parse_type_alloc(cx))
            } else {
                None
            };
            let default = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(self.parse_type_alloc(cx))
            } else {
                None
            };
            let end = self.token_end();
            parameters.push(TypeParameterDeclaration {
                data: NodeData::new(SyntaxKind::TypeParameter, pos, end),
                name,
                constraint,
                default,
            });
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::GreaterThanToken);
        Some(self.alloc_vec(parameters))
    }

    /// Type arguments in an unambiguous position (inside a type, or a
    /// heritage clause): `<` here can only open a type argument list.
    pub(crate) fn parse_type_argument_list(
        &mut self,
        cx: ParseContext,
    ) -> Option<&'a [TypeNode<'a>]> {
        if self.current_token() != SyntaxKind::LessThanToken {
            return None;
        }
        self.next_token();
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.parse_type(cx));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::GreaterThanToken);
        Some(self.alloc_vec(arguments))
    }
}

// ============================================================================
// JSX
// ============================================================================

impl<'a> Parser<'a> {
    /// Parse a JSX element or fragment. The current token must be `<`.
    ///
    /// Protocol: the final `>` of the construct is left as the current
    /// token. A top-level caller (expression position) advances past it
    /// with a normal scan; inside JSX children the parent loop re-enters
    /// JSX scanning from the raw position instead.
    pub(crate) fn parse_jsx_element_or_fragment(
        &mut self,
        cx: ParseContext,
        top_level: bool,
    ) -> Expression<'a> {
        let pos = self.token_pos();
        self.next_token(); // past `<`

        let expression = if self.current_token() == SyntaxKind::GreaterThanToken {
            // `<> ... </>`
            let children = self.parse_jsx_children(cx);
            self.expect_jsx_fragment_close();
            let end = self.token_end();
            let fragment = self.alloc(JsxFragment {
                data: NodeData::new(SyntaxKind::JsxFragment, pos, end),
                children,
            });
            Expression::JsxFragment(fragment)
        } else {
            let tag_name = self.parse_jsx_tag_name();
            let attributes = self.parse_jsx_attributes(cx);

            if self.current_token() == SyntaxKind::SlashToken {
                self.next_token();
                // current should now be `>`
                if self.current_token() != SyntaxKind::GreaterThanToken {
                    self.error(&messages::_0_EXPECTED, &[">"]);
                }
                let end = self.token_end();
                let element = self.alloc(JsxSelfClosingElement {
                    data: NodeData::new(SyntaxKind::JsxSelfClosingElement, pos, end),
                    tag_name,
                    attributes,
                });
                Expression::JsxSelfClosing(element)
            } else {
                if self.current_token() != SyntaxKind::GreaterThanToken {
                    self.error(&messages::_0_EXPECTED, &[">"]);
                }
                let children = self.parse_jsx_children(cx);
                // At `</`; the closing tag name follows with normal scans.
                self.next_token();
                let closing_name = self.parse_jsx_tag_name();
                if !self.jsx_tag_names_equal(&tag_name, &closing_name) {
                    let opening = self.jsx_tag_name_text(&tag_name);
                    self.error(
                        &messages::EXPECTED_CORRESPONDING_JSX_CLOSING_TAG_FOR_0,
                        &[&opening],
                    );
                }
                if self.current_token() != SyntaxKind::GreaterThanToken {
                    self.error(&messages::_0_EXPECTED, &[">"]);
                }
                let end = self.token_end();
                let element = self.alloc(JsxElement {
                    data: NodeData::new(SyntaxKind::JsxElement, pos, end),
                    tag_name,
                    attributes,
                    children,
                });
                Expression::JsxElement(element)
            }
        };

        if top_level {
            self.next_token();
        }
        expression
    }

    fn parse_jsx_tag_name(&mut self) -> EntityName<'a> {
        let mut name = EntityName::Identifier(self.parse_identifier_name());
        while self.current_token() == SyntaxKind::DotToken {
            self.next_token();
            let pos = name.data().range.pos;
            let right = self.parse_identifier_name();
            let end = right.data.range.end;
            name = EntityName::Qualified(self.alloc(QualifiedName {
                data: NodeData::new(SyntaxKind::QualifiedName, pos, end),
                left: name,
                right,
            }));
        }
        name
    }

    fn jsx_tag_name_text(&self, name: &EntityName<'a>) -> String {
        match name {
            EntityName::Identifier(id) => self.interner.resolve(id.text).to_string(),
            EntityName::Qualified(q) => {
                let mut left = self.jsx_tag_name_text(&q.left);
                left.push('.');
                left.push_str(self.interner.resolve(q.right.text));
                left
            }
        }
    }

    fn jsx_tag_names_equal(&self, a: &EntityName<'a>, b: &EntityName<'a>) -> bool {
        self.jsx_tag_name_text(a) == self.jsx_tag_name_text(b)
    }

    fn parse_jsx_attributes(&mut self, cx: ParseContext) -> &'a [JsxAttributeLike<'a>] {
        let mut attributes = Vec::new();
        loop {
            match self.current_token() {
                SyntaxKind::SlashToken
                | SyntaxKind::GreaterThanToken
                | SyntaxKind::EndOfFileToken => break,
                SyntaxKind::OpenBraceToken => {
                    // `{...props}`
                    let pos = self.token_pos();
                    self.next_token();
                    self.expect(SyntaxKind::DotDotDotToken);
                    let expression = self.parse_assignment_expression_alloc(cx.allow_in());
                    let end = self.token_end();
                    self.expect(SyntaxKind::CloseBraceToken);
                    attributes.push(JsxAttributeLike::Spread(JsxSpreadAttribute {
                        data: NodeData::new(SyntaxKind::JsxSpreadAttribute, pos, end),
                        expression,
                    }));
                }
                _ => {
                    let pos = self.token_pos();
                    let name = self.parse_identifier_name();
                    let value = if self.current_token() == SyntaxKind::EqualsToken {
                        // The value is scanned in JSX attribute mode so
                        // quoted strings keep their raw text.
                        self.scanner.scan_jsx_attribute_value();
                        match self.current_token() {
                            SyntaxKind::StringLiteral => Some(JsxAttributeValue::StringLiteral(
                                self.parse_string_literal_token(),
                            )),
                            SyntaxKind::OpenBraceToken => {
                                self.next_token();
                                let expression =
                                    self.parse_assignment_expression_alloc(cx.allow_in());
                                self.expect(SyntaxKind::CloseBraceToken);
                                Some(JsxAttributeValue::Expression(expression))
                            }
                            _ => {
                                self.error(&messages::UNEXPECTED_TOKEN, &[]);
                                None
                            }
                        }
                    } else {
                        None
                    };
                    let end = self.token_end();
                    attributes.push(JsxAttributeLike::Attribute(JsxAttribute {
                        data: NodeData::new(SyntaxKind::JsxAttribute, pos, end),
                        name,
                        value,
                    }));
                }
            }
        }
        self.alloc_vec(attributes)
    }

    /// Parse children until `</`. On return the current token is the
    /// `</` (or end of file).
    fn parse_jsx_children(&mut self, cx: ParseContext) -> &'a [JsxChild<'a>] {
        let mut children = Vec::new();
        loop {
            let kind = self.scanner.scan_jsx_token();
            match kind {
                SyntaxKind::JsxText => {
                    children.push(JsxChild::Text(self.token_value().to_string()));
                }
                SyntaxKind::OpenBraceToken => {
                    self.next_token();
                    if self.current_token() == SyntaxKind::CloseBraceToken {
                        children.push(JsxChild::Expression(None));
                    } else {
                        let expression = self.parse_assignment_expression_alloc(cx.allow_in());
                        if self.current_token() != SyntaxKind::CloseBraceToken {
                            self.error(&messages::_0_EXPECTED, &["}"]);
                        }
                        children.push(JsxChild::Expression(Some(expression)));
                    }
                    // Do not advance past `}` with a normal scan; the loop
                    // re-enters JSX scanning from the raw position.
                }
                SyntaxKind::LessThanToken => {
                    let element = self.parse_jsx_element_or_fragment(cx, false);
                    children.push(JsxChild::Element(self.alloc(element)));
                }
                SyntaxKind::LessThanSlashToken | SyntaxKind::EndOfFileToken => break,
                _ => break,
            }
        }
        children.retain(|child| !matches!(child, JsxChild::Text(t) if t.is_empty()));
        self.alloc_vec(children)
    }

    fn expect_jsx_fragment_close(&mut self) {
        // At `</`; a fragment closes with an immediate `>`.
        self.next_token();
        if self.current_token() != SyntaxKind::GreaterThanToken {
            self.error(&messages::_0_EXPECTED, &[">"]);
        }
    }
}
