//! tstrip_emitter: The type-erasure emitter.
//!
//! Serializes the executable subset of the syntax tree back to JavaScript.
//! Type positions are never visited: annotations, type parameters and
//! arguments, `interface`/`type`/ambient declarations, type-only import and
//! export forms, assertion wrappers, and TypeScript-only modifiers all
//! leave zero residue. Enums and namespaces are the two constructs with a
//! runtime representation; they are materialized the way the reference
//! compiler materializes them.

use tstrip_ast::flags::ModifierFlags;
use tstrip_ast::node::*;
use tstrip_ast::syntax_kind::SyntaxKind;
use tstrip_core::intern::StringInterner;

/// Options for the emitter.
pub struct EmitterOptions {
    /// Indentation string.
    pub indent: String,
    /// Newline string.
    pub newline: String,
    /// Whether to emit a trailing newline.
    pub trailing_newline: bool,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            newline: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// The emitter converts a syntax tree to JavaScript text.
pub struct Emitter<'i> {
    output: String,
    indent_level: u32,
    options: EmitterOptions,
    interner: &'i StringInterner,
    /// Set while emitting a namespace body: the `export` keyword is
    /// suppressed there because exports become property assignments on the
    /// namespace object.
    suppress_export: bool,
}

impl<'i> Emitter<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self::with_options(interner, EmitterOptions::default())
    }

    pub fn with_options(interner: &'i StringInterner, options: EmitterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
            interner,
            suppress_export: false,
        }
    }

    /// Emit a source file to JavaScript text.
    pub fn emit_source_file(&mut self, source_file: &SourceFile<'_>) -> String {
        self.output.clear();
        let mut first = true;
        for statement in source_file.statements.iter() {
            if self.statement_is_erased(statement) {
                continue;
            }
            if !first {
                self.write_newline();
            }
            first = false;
            self.write_indent();
            self.emit_statement(statement);
        }
        if self.options.trailing_newline && !self.output.is_empty() {
            self.write_newline();
        }
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Writer
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.newline);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        self.indent_level -= 1;
    }

    fn resolve(&self, text: tstrip_core::intern::InternedString) -> &'i str {
        self.interner.resolve(text)
    }

    // ========================================================================
    // Erasure classification
    // ========================================================================

    /// Whether a statement is erased with no output at all.
    fn statement_is_erased(&self, statement: &Statement<'_>) -> bool {
        if statement.is_type_only() {
            return true;
        }
        match statement {
            // A namespace whose body holds only type-level declarations is
            // never instantiated and produces no runtime object.
            Statement::ModuleDeclaration(module) => !self.module_has_runtime_statements(module),
            Statement::ImportDeclaration(import) => self.import_fully_erased(import),
            Statement::ExportDeclaration(_) => false,
            _ => false,
        }
    }

    fn module_has_runtime_statements(&self, module: &ModuleDeclaration<'_>) -> bool {
        match module.body {
            None => false,
            Some(statements) => statements.iter().any(|s| match s {
                Statement::ModuleDeclaration(inner) => self.module_has_runtime_statements(inner),
                other => !other.is_type_only(),
            }),
        }
    }

    /// A named import whose specifiers are all type-only vanishes entirely.
    fn import_fully_erased(&self, import: &ImportDeclaration<'_>) -> bool {
        let Some(clause) = &import.import_clause else {
            return false; // bare side-effect import always survives
        };
        if clause.is_type_only {
            return true;
        }
        if clause.name.is_some() {
            return false;
        }
        match &clause.named_bindings {
            Some(NamedImportBindings::Namespace(_)) => false,
            Some(NamedImportBindings::Named(specifiers)) => {
                specifiers.iter().all(|s| s.is_type_only)
            }
            None => true,
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn emit_statement(&mut self, statement: &Statement<'_>) {
        debug_assert!(!statement.is_type_only());
        match statement {
            Statement::Empty(_) => self.write(";"),
            Statement::ExpressionStatement(node) => {
                self.emit_expression(node.expression);
                self.write(";");
            }
            Statement::VariableStatement(node) => {
                self.emit_export_prefix(node.data.modifier_flags);
                self.emit_variable_declaration_list(&node.declaration_list);
                self.write(";");
            }
            Statement::FunctionDeclaration(node) => self.emit_function_declaration(node),
            Statement::ClassDeclaration(node) => self.emit_class_declaration(node),
            Statement::EnumDeclaration(node) => self.emit_enum_declaration(node),
            Statement::ModuleDeclaration(node) => self.emit_module_declaration(node),
            Statement::ImportDeclaration(node) => self.emit_import_declaration(node),
            Statement::ExportDeclaration(node) => self.emit_export_declaration(node),
            Statement::ExportDefault(node) => {
                self.write("export default ");
                self.emit_expression(node.expression);
                self.write(";");
            }
            Statement::Block(node) => self.emit_block(node),
            Statement::If(node) => self.emit_if_statement(node),
            Statement::Do(node) => {
                self.write("do ");
                self.emit_statement(node.statement);
                self.write(" while (");
                self.emit_expression(node.expression);
                self.write(");");
            }
            Statement::While(node) => {
                self.write("while (");
                self.emit_expression(node.expression);
                self.write(") ");
                self.emit_statement(node.statement);
            }
            Statement::For(node) => self.emit_for_statement(node),
            Statement::ForIn(node) => {
                self.write("for (");
                self.emit_for_initializer(&node.initializer);
                self.write(" in ");
                self.emit_expression(node.expression);
                self.write(") ");
                self.emit_statement(node.statement);
            }
            Statement::ForOf(node) => {
                self.write("for ");
                if node.await_modifier {
                    self.write("await ");
                }
                self.write("(");
                self.emit_for_initializer(&node.initializer);
                self.write(" of ");
                self.emit_expression(node.expression);
                self.write(") ");
                self.emit_statement(node.statement);
            }
            Statement::Continue(node) => {
                self.write("continue");
                if let Some(label) = &node.label {
                    self.write(" ");
                    self.emit_identifier(label);
                }
                self.write(";");
            }
            Statement::Break(node) => {
                self.write("break");
                if let Some(label) = &node.label {
                    self.write(" ");
                    self.emit_identifier(label);
                }
                self.write(";");
            }
            Statement::Return(node) => {
                self.write("return");
                if let Some(expression) = node.expression {
                    self.write(" ");
                    self.emit_expression(expression);
                }
                self.write(";");
            }
            Statement::With(node) => {
                self.write("with (");
                self.emit_expression(node.expression);
                self.write(") ");
                self.emit_statement(node.statement);
            }
            Statement::Switch(node) => self.emit_switch_statement(node),
            Statement::Labeled(node) => {
                self.emit_identifier(&node.label);
                self.write(": ");
                self.emit_statement(node.statement);
            }
            Statement::Throw(node) => {
                self.write("throw ");
                self.emit_expression(node.expression);
                self.write(";");
            }
            Statement::Try(node) => self.emit_try_statement(node),
            Statement::Debugger(_) => self.write("debugger;"),
            Statement::InterfaceDeclaration(_) | Statement::TypeAliasDeclaration(_) => {
                debug_assert!(false, "type-only statement reached the emitter");
            }
        }
    }

    fn emit_export_prefix(&mut self, modifiers: ModifierFlags) {
        if self.suppress_export {
            return;
        }
        if modifiers.contains(ModifierFlags::EXPORT) {
            self.write("export ");
        }
        if modifiers.contains(ModifierFlags::DEFAULT) {
            self.write("default ");
        }
    }

    fn emit_variable_declaration_list(&mut self, list: &VariableDeclarationList<'_>) {
        let keyword = if list.data.flags.contains(tstrip_ast::flags::NodeFlags::CONST) {
            "const"
        } else if list.data.flags.contains(tstrip_ast::flags::NodeFlags::LET) {
            "let"
        } else {
            "var"
        };
        self.write(keyword);
        self.write(" ");
        for (i, declaration) in list.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_binding_name(&declaration.name);
            if let Some(initializer) = declaration.initializer {
                self.write(" = ");
                self.emit_expression(initializer);
            }
        }
    }

    fn emit_binding_name(&mut self, name: &BindingName<'_>) {
        match name {
            BindingName::Identifier(id) => self.emit_identifier(id),
            BindingName::ObjectPattern(pattern) => {
                if pattern.elements.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                for (i, element) in pattern.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_binding_element(element);
                }
                self.write(" }");
            }
            BindingName::ArrayPattern(pattern) => {
                self.write("[");
                for (i, element) in pattern.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    match element {
                        ArrayBindingElement::Element(e) => self.emit_binding_element(e),
                        ArrayBindingElement::Hole(_) => {}
                    }
                }
                self.write("]");
            }
        }
    }

    fn emit_binding_element(&mut self, element: &BindingElement<'_>) {
        if element.dot_dot_dot {
            self.write("...");
        }
        if let Some(property_name) = &element.property_name {
            self.emit_property_name(property_name);
            self.write(": ");
        }
        self.emit_binding_name(&element.name);
        if let Some(initializer) = element.initializer {
            self.write(" = ");
            self.emit_expression(initializer);
        }
    }

    fn emit_if_statement(&mut self, node: &IfStatement<'_>) {
        self.write("if (");
        self.emit_expression(node.expression);
        self.write(") ");
        self.emit_statement(node.then_statement);
        if let Some(else_statement) = node.else_statement {
            self.write(" else ");
            self.emit_statement(else_statement);
        }
    }

    fn emit_for_statement(&mut self, node: &ForStatement<'_>) {
        self.write("for (");
        if let Some(initializer) = &node.initializer {
            self.emit_for_initializer(initializer);
        }
        self.write("; ");
        if let Some(condition) = node.condition {
            self.emit_expression(condition);
        }
        self.write("; ");
        if let Some(incrementor) = node.incrementor {
            self.emit_expression(incrementor);
        }
        self.write(") ");
        self.emit_statement(node.statement);
    }

    fn emit_for_initializer(&mut self, initializer: &ForInitializer<'_>) {
        match initializer {
            ForInitializer::VariableDeclarationList(list) => {
                self.emit_variable_declaration_list(list)
            }
            ForInitializer::Expression(expression) => self.emit_expression(expression),
        }
    }

    fn emit_switch_statement(&mut self, node: &SwitchStatement<'_>) {
        self.write("switch (");
        self.emit_expression(node.expression);
        self.write(") {");
        self.increase_indent();
        for clause in node.clauses.iter() {
            self.write_newline();
            self.write_indent();
            match clause {
                CaseOrDefaultClause::Case(case) => {
                    self.write("case ");
                    self.emit_expression(case.expression);
                    self.write(":");
                    self.emit_clause_statements(case.statements);
                }
                CaseOrDefaultClause::Default(default) => {
                    self.write("default:");
                    self.emit_clause_statements(default.statements);
                }
            }
        }
        self.decrease_indent();
        self.write_newline();
        self.write_indent();
        self.write("}");
    }

    fn emit_clause_statements(&mut self, statements: &[Statement<'_>]) {
        self.increase_indent();
        for statement in statements {
            if self.statement_is_erased(statement) {
                continue;
            }
            self.write_newline();
            self.write_indent();
            self.emit_statement(statement);
        }
        self.decrease_indent();
    }

    fn emit_try_statement(&mut self, node: &TryStatement<'_>) {
        self.write("try ");
        self.emit_block(&node.try_block);
        if let Some(catch) = &node.catch_clause {
            self.write(" catch");
            if let Some(name) = &catch.name {
                self.write(" (");
                self.emit_binding_name(name);
                self.write(")");
            }
            self.write(" ");
            self.emit_block(&catch.block);
        }
        if let Some(finally) = &node.finally_block {
            self.write(" finally ");
            self.emit_block(finally);
        }
    }

    fn emit_block(&mut self, block: &Block<'_>) {
        self.write("{");
        let mut emitted = false;
        self.increase_indent();
        for statement in block.statements.iter() {
            if self.statement_is_erased(statement) {
                continue;
            }
            emitted = true;
            self.write_newline();
            self.write_indent();
            self.emit_statement(statement);
        }
        self.decrease_indent();
        if emitted {
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    // ========================================================================
    // Functions and classes
    // ========================================================================

    fn emit_function_declaration(&mut self, node: &FunctionDeclaration<'_>) {
        let modifiers = node.data.modifier_flags;
        self.emit_export_prefix(modifiers);
        if modifiers.contains(ModifierFlags::ASYNC) {
            self.write("async ");
        }
        self.write("function");
        if node.asterisk {
            self.write("*");
        }
        if let Some(name) = &node.name {
            self.write(" ");
            self.emit_identifier(name);
        }
        self.write("(");
        self.emit_parameters(node.parameters);
        self.write(")");
        // Bodiless overload signatures never reach the emitter.
        if let Some(body) = &node.body {
            self.write(" ");
            self.emit_block(body);
        }
    }

    fn emit_parameters(&mut self, parameters: &[ParameterDeclaration<'_>]) {
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if parameter.dot_dot_dot {
                self.write("...");
            }
            self.emit_binding_name(&parameter.name);
            if let Some(initializer) = parameter.initializer {
                self.write(" = ");
                self.emit_expression(initializer);
            }
        }
    }

    fn emit_class_declaration(&mut self, node: &ClassDeclaration<'_>) {
        for decorator in node.decorators.iter() {
            self.write("@");
            self.emit_expression(decorator.expression);
            self.write_newline();
            self.write_indent();
        }
        self.emit_export_prefix(node.data.modifier_flags);
        self.write("class");
        if let Some(name) = &node.name {
            self.write(" ");
            self.emit_identifier(name);
        }
        self.emit_heritage_clauses(node.heritage_clauses);
        self.write(" ");
        self.emit_class_body(node.members);
    }

    fn emit_class_expression(&mut self, node: &ClassExpression<'_>) {
        self.write("class");
        if let Some(name) = &node.name {
            self.write(" ");
            self.emit_identifier(name);
        }
        self.emit_heritage_clauses(node.heritage_clauses);
        self.write(" ");
        self.emit_class_body(node.members);
    }

    /// `extends` survives; `implements` is type-level and vanishes.
    fn emit_heritage_clauses(&mut self, clauses: &[HeritageClause<'_>]) {
        for clause in clauses {
            if clause.token != SyntaxKind::ExtendsKeyword {
                continue;
            }
            self.write(" extends ");
            for (i, ty) in clause.types.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.emit_expression(ty.expression);
            }
        }
    }

    fn emit_class_body(&mut self, members: &[ClassElement<'_>]) {
        self.write("{");
        let mut emitted = false;
        self.increase_indent();
        for member in members {
            if self.class_member_is_erased(member) {
                continue;
            }
            emitted = true;
            self.write_newline();
            self.write_indent();
            self.emit_class_member(member);
        }
        self.decrease_indent();
        if emitted {
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    fn class_member_is_erased(&self, member: &ClassElement<'_>) -> bool {
        match member {
            ClassElement::IndexSignature(_) | ClassElement::Semicolon(_) => true,
            ClassElement::Method(m) => m.body.is_none(),
            ClassElement::GetAccessor(a) => a.body.is_none(),
            ClassElement::SetAccessor(a) => a.body.is_none(),
            ClassElement::Constructor(c) => c.body.is_none(),
            ClassElement::Property(p) => {
                p.data.modifier_flags.contains(ModifierFlags::ABSTRACT)
                    || p.data.modifier_flags.contains(ModifierFlags::AMBIENT)
            }
            ClassElement::StaticBlock(_) => false,
        }
    }

    fn emit_member_modifiers(&mut self, modifiers: ModifierFlags) {
        if modifiers.contains(ModifierFlags::STATIC) {
            self.write("static ");
        }
        if modifiers.contains(ModifierFlags::ACCESSOR) {
            self.write("accessor ");
        }
        if modifiers.contains(ModifierFlags::ASYNC) {
            self.write("async ");
        }
    }

    fn emit_class_member(&mut self, member: &ClassElement<'_>) {
        match member {
            ClassElement::Property(property) => {
                for decorator in property.decorators.iter() {
                    self.write("@");
                    self.emit_expression(decorator.expression);
                    self.write_newline();
                    self.write_indent();
                }
                self.emit_member_modifiers(property.data.modifier_flags);
                self.emit_property_name(&property.name);
                if let Some(initializer) = property.initializer {
                    self.write(" = ");
                    self.emit_expression(initializer);
                }
                self.write(";");
            }
            ClassElement::Method(method) => {
                for decorator in method.decorators.iter() {
                    self.write("@");
                    self.emit_expression(decorator.expression);
                    self.write_newline();
                    self.write_indent();
                }
                self.emit_member_modifiers(method.data.modifier_flags);
                if method.asterisk {
                    self.write("*");
                }
                self.emit_property_name(&method.name);
                self.write("(");
                self.emit_parameters(method.parameters);
                self.write(")");
                if let Some(body) = &method.body {
                    self.write(" ");
                    self.emit_block(body);
                }
            }
            ClassElement::Constructor(constructor) => self.emit_constructor(constructor),
            ClassElement::GetAccessor(accessor) => {
                self.emit_member_modifiers(accessor.data.modifier_flags);
                self.write("get ");
                self.emit_property_name(&accessor.name);
                self.write("()");
                if let Some(body) = &accessor.body {
                    self.write(" ");
                    self.emit_block(body);
                }
            }
            ClassElement::SetAccessor(accessor) => {
                self.emit_member_modifiers(accessor.data.modifier_flags);
                self.write("set ");
                self.emit_property_name(&accessor.name);
                self.write("(");
                self.emit_parameters(accessor.parameters);
                self.write(")");
                if let Some(body) = &accessor.body {
                    self.write(" ");
                    self.emit_block(body);
                }
            }
            ClassElement::StaticBlock(block) => {
                self.write("static ");
                self.emit_block(&block.body);
            }
            ClassElement::IndexSignature(_) | ClassElement::Semicolon(_) => {
                debug_assert!(false, "erasable class member reached the emitter");
            }
        }
    }

    /// A constructor with parameter properties gets a prologue assigning
    /// each such parameter onto `this`, after a leading `super(...)` call
    /// when one is present.
    fn emit_constructor(&mut self, constructor: &ConstructorDeclaration<'_>) {
        self.write("constructor(");
        self.emit_parameters(constructor.parameters);
        self.write(")");
        let Some(body) = &constructor.body else {
            return;
        };

        let property_names: Vec<&str> = constructor
            .parameters
            .iter()
            .filter(|p| {
                p.data
                    .modifier_flags
                    .intersects(ModifierFlags::PARAMETER_PROPERTY_MODIFIER)
            })
            .filter_map(|p| match &p.name {
                BindingName::Identifier(id) => Some(self.resolve(id.text)),
                _ => None,
            })
            .collect();

        if property_names.is_empty() {
            self.write(" ");
            self.emit_block(body);
            return;
        }

        self.write(" {");
        self.increase_indent();

        let mut statements = body.statements.iter().peekable();
        if let Some(Statement::ExpressionStatement(first)) = statements.peek() {
            if is_super_call(first.expression) {
                self.write_newline();
                self.write_indent();
                let first = statements.next().unwrap();
                self.emit_statement(first);
            }
        }
        for name in &property_names {
            self.write_newline();
            self.write_indent();
            self.write("this.");
            self.write(name);
            self.write(" = ");
            self.write(name);
            self.write(";");
        }
        for statement in statements {
            if self.statement_is_erased(statement) {
                continue;
            }
            self.write_newline();
            self.write_indent();
            self.emit_statement(statement);
        }

        self.decrease_indent();
        self.write_newline();
        self.write_indent();
        self.write("}");
    }

    // ========================================================================
    // Enum materialization
    // ========================================================================

    /// Enums are the one type-level construct with a runtime value:
    ///
    /// ```text
    /// var Color;
    /// (function (Color) {
    ///     Color[Color["Red"] = 0] = "Red";
    ///     Color["Up"] = "UP";
    /// })(Color || (Color = {}));
    /// ```
    fn emit_enum_declaration(&mut self, node: &EnumDeclaration<'_>) {
        let name = self.resolve(node.name.text).to_string();
        self.emit_export_prefix(node.data.modifier_flags);
        self.write("var ");
        self.write(&name);
        self.write(";");
        self.write_newline();
        self.write_indent();
        self.write("(function (");
        self.write(&name);
        self.write(") {");
        self.increase_indent();
        for member in node.members.iter() {
            self.write_newline();
            self.write_indent();
            self.emit_enum_member(&name, member);
        }
        self.decrease_indent();
        self.write_newline();
        self.write_indent();
        self.write("})(");
        self.write(&name);
        self.write(" || (");
        self.write(&name);
        self.write(" = {}));");
    }

    fn emit_enum_member(&mut self, enum_name: &str, member: &EnumMember<'_>) {
        let key = self.enum_member_text(&member.name);
        match &member.value {
            EnumMemberValue::String(_) => {
                // String members get no reverse mapping.
                self.write(enum_name);
                self.write("[\"");
                self.write(&key);
                self.write("\"] = ");
                match member.initializer {
                    Some(initializer) => self.emit_expression(initializer),
                    None => self.write("\"\""),
                }
                self.write(";");
            }
            EnumMemberValue::Number(value) => {
                self.write(enum_name);
                self.write("[");
                self.write(enum_name);
                self.write("[\"");
                self.write(&key);
                self.write("\"] = ");
                let formatted = format_number(*value);
                self.write(&formatted);
                self.write("] = \"");
                self.write(&key);
                self.write("\";");
            }
            EnumMemberValue::Computed => {
                self.write(enum_name);
                self.write("[");
                self.write(enum_name);
                self.write("[\"");
                self.write(&key);
                self.write("\"] = ");
                match member.initializer {
                    Some(initializer) => self.emit_expression(initializer),
                    None => self.write("void 0"),
                }
                self.write("] = \"");
                self.write(&key);
                self.write("\";");
            }
        }
    }

    fn enum_member_text(&self, name: &PropertyName<'_>) -> String {
        match name {
            PropertyName::Identifier(id) => self.resolve(id.text).to_string(),
            PropertyName::StringLiteral(s) => s.text.clone(),
            PropertyName::NumericLiteral(n) => n.text.clone(),
            _ => String::new(),
        }
    }

    // ========================================================================
    // Namespace materialization
    // ========================================================================

    /// ```text
    /// var N;
    /// (function (N) {
    ///     function f() {}
    ///     N.f = f;
    /// })(N || (N = {}));
    /// ```
    fn emit_module_declaration(&mut self, node: &ModuleDeclaration<'_>) {
        let name = match &node.name {
            ModuleName::Identifier(id) => self.resolve(id.text).to_string(),
            ModuleName::StringLiteral(_) => {
                debug_assert!(false, "ambient module reached the emitter");
                return;
            }
        };
        let Some(body) = node.body else { return };

        self.emit_export_prefix(node.data.modifier_flags);
        self.write("var ");
        self.write(&name);
        self.write(";");
        self.write_newline();
        self.write_indent();
        self.write("(function (");
        self.write(&name);
        self.write(") {");
        self.increase_indent();

        let outer_suppress = self.suppress_export;
        self.suppress_export = true;
        for statement in body.iter() {
            if self.statement_is_erased(statement) {
                continue;
            }
            self.write_newline();
            self.write_indent();
            self.emit_statement(statement);
            if statement
                .data()
                .modifier_flags
                .contains(ModifierFlags::EXPORT)
            {
                for exported in self.exported_names(statement) {
                    self.write_newline();
                    self.write_indent();
                    self.write(&name);
                    self.write(".");
                    self.write(&exported);
                    self.write(" = ");
                    self.write(&exported);
                    self.write(";");
                }
            }
        }
        self.suppress_export = outer_suppress;

        self.decrease_indent();
        self.write_newline();
        self.write_indent();
        self.write("})(");
        self.write(&name);
        self.write(" || (");
        self.write(&name);
        self.write(" = {}));");
    }

    /// The runtime binding names an exported namespace statement declares.
    fn exported_names(&self, statement: &Statement<'_>) -> Vec<String> {
        match statement {
            Statement::VariableStatement(node) => {
                let mut names = Vec::new();
                for declaration in node.declaration_list.declarations.iter() {
                    collect_binding_identifiers(self.interner, &declaration.name, &mut names);
                }
                names
            }
            Statement::FunctionDeclaration(node) => node
                .name
                .as_ref()
                .map(|n| vec![self.resolve(n.text).to_string()])
                .unwrap_or_default(),
            Statement::ClassDeclaration(node) => node
                .name
                .as_ref()
                .map(|n| vec![self.resolve(n.text).to_string()])
                .unwrap_or_default(),
            Statement::EnumDeclaration(node) => {
                vec![self.resolve(node.name.text).to_string()]
            }
            Statement::ModuleDeclaration(node) => match &node.name {
                ModuleName::Identifier(id) => vec![self.resolve(id.text).to_string()],
                ModuleName::StringLiteral(_) => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    // ========================================================================
    // Import / export
    // ========================================================================

    fn emit_import_declaration(&mut self, node: &ImportDeclaration<'_>) {
        self.write("import ");
        if let Some(clause) = &node.import_clause {
            let mut wrote_binding = false;
            if let Some(name) = &clause.name {
                self.emit_identifier(name);
                wrote_binding = true;
            }
            match &clause.named_bindings {
                Some(NamedImportBindings::Namespace(name)) => {
                    if wrote_binding {
                        self.write(", ");
                    }
                    self.write("* as ");
                    self.emit_identifier(name);
                }
                Some(NamedImportBindings::Named(specifiers)) => {
                    if wrote_binding {
                        self.write(", ");
                    }
                    self.emit_import_specifiers(specifiers);
                }
                None => {}
            }
            self.write(" from ");
        }
        self.emit_string_literal(&node.module_specifier);
        self.write(";");
    }

    fn emit_import_specifiers(&mut self, specifiers: &[ImportSpecifier]) {
        let surviving: Vec<&ImportSpecifier> =
            specifiers.iter().filter(|s| !s.is_type_only).collect();
        if surviving.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        for (i, specifier) in surviving.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(property_name) = &specifier.property_name {
                self.emit_identifier(property_name);
                self.write(" as ");
            }
            self.emit_identifier(&specifier.name);
        }
        self.write(" }");
    }

    fn emit_export_declaration(&mut self, node: &ExportDeclaration<'_>) {
        self.write("export ");
        match &node.export_clause {
            None => self.write("*"),
            Some(NamedExportBindings::Namespace(name)) => {
                self.write("* as ");
                self.emit_identifier(name);
            }
            Some(NamedExportBindings::Named(specifiers)) => {
                let surviving: Vec<&ExportSpecifier> =
                    specifiers.iter().filter(|s| !s.is_type_only).collect();
                if surviving.is_empty() {
                    // An empty clause still marks the file as a module.
                    self.write("{}");
                } else {
                    self.write("{ ");
                    for (i, specifier) in surviving.iter().enumerate() {
                        if i > 0 {
                            self.write(", ");
                        }
                        if let Some(property_name) = &specifier.property_name {
                            self.emit_identifier(property_name);
                            self.write(" as ");
                        }
                        self.emit_identifier(&specifier.name);
                    }
                    self.write(" }");
                }
            }
        }
        if let Some(module_specifier) = &node.module_specifier {
            self.write(" from ");
            self.emit_string_literal(module_specifier);
        }
        self.write(";");
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn emit_identifier(&mut self, identifier: &Identifier) {
        let text = self.resolve(identifier.text);
        self.write(text);
    }

    fn emit_property_name(&mut self, name: &PropertyName<'_>) {
        match name {
            PropertyName::Identifier(id) | PropertyName::PrivateIdentifier(id) => {
                self.emit_identifier(id)
            }
            PropertyName::StringLiteral(literal) => self.emit_string_literal(literal),
            PropertyName::NumericLiteral(literal) => self.write(&literal.text),
            PropertyName::Computed(computed) => {
                self.write("[");
                self.emit_expression(computed.expression);
                self.write("]");
            }
        }
    }

    fn emit_string_literal(&mut self, literal: &StringLiteral) {
        let quote = if literal.is_single_quote { "'" } else { "\"" };
        self.write(quote);
        self.write(&literal.text);
        self.write(quote);
    }

    fn emit_expression(&mut self, expression: &Expression<'_>) {
        match expression {
            Expression::Identifier(id) => self.emit_identifier(id),
            Expression::StringLiteral(literal) => self.emit_string_literal(literal),
            Expression::NumericLiteral(literal) => self.write(&literal.text),
            Expression::BigIntLiteral(literal) => self.write(&literal.text),
            Expression::RegularExpressionLiteral(literal) => self.write(&literal.text),
            Expression::NoSubstitutionTemplateLiteral(literal) => {
                self.write("`");
                self.write(&literal.text);
                self.write("`");
            }
            Expression::Template(template) => {
                self.write("`");
                self.write(&template.head_text);
                for span in template.spans.iter() {
                    self.write("${");
                    self.emit_expression(span.expression);
                    self.write("}");
                    self.write(&span.literal_text);
                }
                self.write("`");
            }
            Expression::This(_) => self.write("this"),
            Expression::Super(_) => self.write("super"),
            Expression::Null(_) => self.write("null"),
            Expression::True(_) => self.write("true"),
            Expression::False(_) => self.write("false"),
            Expression::Omitted(_) => {}
            Expression::ArrayLiteral(array) => {
                self.write("[");
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expression(element);
                }
                self.write("]");
            }
            Expression::ObjectLiteral(object) => self.emit_object_literal(object),
            Expression::PropertyAccess(access) => {
                self.emit_expression(access.expression);
                self.write(if access.question_dot { "?." } else { "." });
                match &access.name {
                    MemberName::Identifier(id) | MemberName::PrivateIdentifier(id) => {
                        self.emit_identifier(id)
                    }
                }
            }
            Expression::ElementAccess(access) => {
                self.emit_expression(access.expression);
                if access.question_dot {
                    self.write("?.");
                }
                self.write("[");
                self.emit_expression(access.argument_expression);
                self.write("]");
            }
            Expression::Call(call) => {
                self.emit_expression(call.expression);
                if call.question_dot {
                    self.write("?.");
                }
                // Call-site type arguments vanish; the runtime argument
                // list is untouched.
                self.write("(");
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expression(argument);
                }
                self.write(")");
            }
            Expression::New(new) => {
                self.write("new ");
                self.emit_expression(new.expression);
                if let Some(arguments) = new.arguments {
                    self.write("(");
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            self.write(", ");
                        }
                        self.emit_expression(argument);
                    }
                    self.write(")");
                }
            }
            Expression::TaggedTemplate(tagged) => {
                self.emit_expression(tagged.tag);
                self.emit_expression(tagged.template);
            }
            Expression::ImportCall(call) => {
                self.write("import(");
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expression(argument);
                }
                self.write(")");
            }
            Expression::MetaProperty(meta) => {
                self.write(if meta.keyword == SyntaxKind::NewKeyword {
                    "new."
                } else {
                    "import."
                });
                self.emit_identifier(&meta.name);
            }
            Expression::Parenthesized(paren) => {
                self.write("(");
                self.emit_expression(paren.expression);
                self.write(")");
            }
            Expression::FunctionExpression(function) => {
                if function.data.modifier_flags.contains(ModifierFlags::ASYNC) {
                    self.write("async ");
                }
                self.write("function");
                if function.asterisk {
                    self.write("*");
                }
                if let Some(name) = &function.name {
                    self.write(" ");
                    self.emit_identifier(name);
                }
                self.write("(");
                self.emit_parameters(function.parameters);
                self.write(") ");
                self.emit_block(function.body);
            }
            Expression::ArrowFunction(arrow) => {
                if arrow.data.modifier_flags.contains(ModifierFlags::ASYNC) {
                    self.write("async ");
                }
                if arrow.parenthesized {
                    self.write("(");
                    self.emit_parameters(arrow.parameters);
                    self.write(")");
                } else {
                    self.emit_parameters(arrow.parameters);
                }
                self.write(" => ");
                match &arrow.body {
                    ArrowFunctionBody::Block(block) => self.emit_block(block),
                    ArrowFunctionBody::Expression(expression) => self.emit_expression(expression),
                }
            }
            Expression::ClassExpression(class) => self.emit_class_expression(class),
            Expression::Delete(node) => {
                self.write("delete ");
                self.emit_expression(node.expression);
            }
            Expression::TypeOf(node) => {
                self.write("typeof ");
                self.emit_expression(node.expression);
            }
            Expression::Void(node) => {
                self.write("void ");
                self.emit_expression(node.expression);
            }
            Expression::Await(node) => {
                self.write("await ");
                self.emit_expression(node.expression);
            }
            Expression::PrefixUnary(node) => {
                self.write(node.operator.operator_text());
                self.emit_expression(node.operand);
            }
            Expression::PostfixUnary(node) => {
                self.emit_expression(node.operand);
                self.write(node.operator.operator_text());
            }
            Expression::Binary(node) => {
                self.emit_expression(node.left);
                if node.operator == SyntaxKind::CommaToken {
                    self.write(", ");
                } else {
                    self.write(" ");
                    self.write(node.operator.operator_text());
                    self.write(" ");
                }
                self.emit_expression(node.right);
            }
            Expression::Conditional(node) => {
                self.emit_expression(node.condition);
                self.write(" ? ");
                self.emit_expression(node.when_true);
                self.write(" : ");
                self.emit_expression(node.when_false);
            }
            Expression::Yield(node) => {
                self.write("yield");
                if node.asterisk {
                    self.write("*");
                }
                if let Some(expression) = node.expression {
                    self.write(" ");
                    self.emit_expression(expression);
                }
            }
            Expression::Spread(node) => {
                self.write("...");
                self.emit_expression(node.expression);
            }
            // Erasable wrappers: only the operand survives. Stripping the
            // wrapper never removes or reorders the executable child.
            Expression::As(node) => self.emit_expression(node.expression),
            Expression::Satisfies(node) => self.emit_expression(node.expression),
            Expression::NonNull(node) => self.emit_expression(node.expression),
            Expression::TypeAssertion(node) => self.emit_expression(node.expression),
            Expression::JsxElement(element) => self.emit_jsx_element(element),
            Expression::JsxSelfClosing(element) => self.emit_jsx_self_closing(element),
            Expression::JsxFragment(fragment) => self.emit_jsx_fragment(fragment),
        }
    }

    fn emit_object_literal(&mut self, object: &ObjectLiteralExpression<'_>) {
        if object.properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        for (i, property) in object.properties.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match property {
                ObjectLiteralElement::PropertyAssignment(assignment) => {
                    self.emit_property_name(&assignment.name);
                    self.write(": ");
                    self.emit_expression(assignment.initializer);
                }
                ObjectLiteralElement::Shorthand(shorthand) => {
                    self.emit_identifier(&shorthand.name);
                    if let Some(initializer) = shorthand.initializer {
                        self.write(" = ");
                        self.emit_expression(initializer);
                    }
                }
                ObjectLiteralElement::Spread(spread) => {
                    self.write("...");
                    self.emit_expression(spread.expression);
                }
                ObjectLiteralElement::Method(method) => {
                    if method.data.modifier_flags.contains(ModifierFlags::ASYNC) {
                        self.write("async ");
                    }
                    if method.asterisk {
                        self.write("*");
                    }
                    self.emit_property_name(&method.name);
                    self.write("(");
                    self.emit_parameters(method.parameters);
                    self.write(")");
                    if let Some(body) = &method.body {
                        self.write(" ");
                        self.emit_block(body);
                    }
                }
                ObjectLiteralElement::GetAccessor(accessor) => {
                    self.write("get ");
                    self.emit_property_name(&accessor.name);
                    self.write("()");
                    if let Some(body) = &accessor.body {
                        self.write(" ");
                        self.emit_block(body);
                    }
                }
                ObjectLiteralElement::SetAccessor(accessor) => {
                    self.write("set ");
                    self.emit_property_name(&accessor.name);
                    self.write("(");
                    self.emit_parameters(accessor.parameters);
                    self.write(")");
                    if let Some(body) = &accessor.body {
                        self.write(" ");
                        self.emit_block(body);
                    }
                }
            }
        }
        self.write(" }");
    }

    // ========================================================================
    // JSX (preserve mode: emitted verbatim)
    // ========================================================================

    fn emit_jsx_tag_name(&mut self, name: &EntityName<'_>) {
        match name {
            EntityName::Identifier(id) => self.emit_identifier(id),
            EntityName::Qualified(qualified) => {
                self.emit_jsx_tag_name(&qualified.left);
                self.write(".");
                self.emit_identifier(&qualified.right);
            }
        }
    }

    fn emit_jsx_attributes(&mut self, attributes: &[JsxAttributeLike<'_>]) {
        for attribute in attributes {
            self.write(" ");
            match attribute {
                JsxAttributeLike::Attribute(attr) => {
                    self.emit_identifier(&attr.name);
                    match &attr.value {
                        Some(JsxAttributeValue::StringLiteral(literal)) => {
                            self.write("=");
                            self.emit_string_literal(literal);
                        }
                        Some(JsxAttributeValue::Expression(expression)) => {
                            self.write("={");
                            self.emit_expression(expression);
                            self.write("}");
                        }
                        None => {}
                    }
                }
                JsxAttributeLike::Spread(spread) => {
                    self.write("{...");
                    self.emit_expression(spread.expression);
                    self.write("}");
                }
            }
        }
    }

    fn emit_jsx_children(&mut self, children: &[JsxChild<'_>]) {
        for child in children {
            match child {
                JsxChild::Text(text) => self.write(text),
                JsxChild::Expression(Some(expression)) => {
                    self.write("{");
                    self.emit_expression(expression);
                    self.write("}");
                }
                JsxChild::Expression(None) => self.write("{}"),
                JsxChild::Element(element) => self.emit_expression(element),
            }
        }
    }

    fn emit_jsx_element(&mut self, element: &JsxElement<'_>) {
        self.write("<");
        self.emit_jsx_tag_name(&element.tag_name);
        self.emit_jsx_attributes(element.attributes);
        self.write(">");
        self.emit_jsx_children(element.children);
        self.write("</");
        self.emit_jsx_tag_name(&element.tag_name);
        self.write(">");
    }

    fn emit_jsx_self_closing(&mut self, element: &JsxSelfClosingElement<'_>) {
        self.write("<");
        self.emit_jsx_tag_name(&element.tag_name);
        self.emit_jsx_attributes(element.attributes);
        self.write(" />");
    }

    fn emit_jsx_fragment(&mut self, fragment: &JsxFragment<'_>) {
        self.write("<>");
        self.emit_jsx_children(fragment.children);
        self.write("</>");
    }
}

/// Whether an expression is a direct `super(...)` call.
fn is_super_call(expression: &Expression<'_>) -> bool {
    match expression {
        Expression::Call(call) => matches!(call.expression, Expression::Super(_)),
        _ => false,
    }
}

fn collect_binding_identifiers(
    interner: &StringInterner,
    name: &BindingName<'_>,
    out: &mut Vec<String>,
) {
    match name {
        BindingName::Identifier(id) => out.push(interner.resolve(id.text).to_string()),
        BindingName::ObjectPattern(pattern) => {
            for element in pattern.elements.iter() {
                collect_binding_identifiers(interner, &element.name, out);
            }
        }
        BindingName::ArrayPattern(pattern) => {
            for element in pattern.elements.iter() {
                if let ArrayBindingElement::Element(e) = element {
                    collect_binding_identifiers(interner, &e.name, out);
                }
            }
        }
    }
}

/// Format a runtime number the way JavaScript prints integral doubles.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_default_options() {
        let options = EmitterOptions::default();
        assert_eq!(options.indent, "    ");
        assert_eq!(options.newline, "\n");
        assert!(options.trailing_newline);
    }
}
