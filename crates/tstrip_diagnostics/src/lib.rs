//! tstrip_diagnostics: Diagnostic messages and error reporting.
//!
//! Message templates reuse the reference compiler's error codes where an
//! equivalent exists (10xx/11xx scanner and parser errors); resolutions the
//! reference compiler has no code for — disambiguation failures reported by
//! the lookahead machinery — live in a dedicated 95xx block.

use std::fmt;
use tstrip_core::text::TextSpan;

/// Diagnostic severity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic error code (e.g., 1002).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic error code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic with file and span info.
    pub fn with_location(
        file: String,
        span: TextSpan,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file),
            span: Some(span),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} TS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while processing one file.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Discard diagnostics added after a checkpoint. Speculative parses take
    /// a checkpoint before the attempt and roll back on failure so that an
    /// abandoned interpretation leaves no trace.
    pub fn truncate(&mut self, len: usize) {
        self.diagnostics.truncate(len);
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Lexical errors
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1160, Error, "Unterminated template literal.");
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: DiagnosticMessage = diag!(1161, Error, "Unterminated regular expression literal.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1124, Error, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1125, Error, "Hexadecimal digit expected.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1177, Error, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1178, Error, "Octal digit expected.");
    pub const UNEXPECTED_END_OF_TEXT: DiagnosticMessage = diag!(1126, Error, "Unexpected end of text.");

    // ========================================================================
    // Structural parse errors
    // ========================================================================
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, Error, "Identifier expected.");
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, Error, "Unexpected token.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, Error, "Expression expected.");
    pub const TYPE_EXPECTED: DiagnosticMessage = diag!(1110, Error, "Type expected.");
    pub const STATEMENT_EXPECTED: DiagnosticMessage = diag!(1145, Error, "Statement expected.");
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = diag!(1128, Error, "Declaration or statement expected.");
    pub const CASE_OR_DEFAULT_EXPECTED: DiagnosticMessage = diag!(1130, Error, "'case' or 'default' expected.");
    pub const PROPERTY_OR_SIGNATURE_EXPECTED: DiagnosticMessage = diag!(1131, Error, "Property or signature expected.");
    pub const ENUM_MEMBER_EXPECTED: DiagnosticMessage = diag!(1132, Error, "Enum member expected.");
    pub const VARIABLE_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1134, Error, "Variable declaration expected.");
    pub const PROPERTY_ASSIGNMENT_EXPECTED: DiagnosticMessage = diag!(1136, Error, "Property assignment expected.");
    pub const TYPE_ARGUMENT_EXPECTED: DiagnosticMessage = diag!(1140, Error, "Type argument expected.");
    pub const STRING_LITERAL_EXPECTED: DiagnosticMessage = diag!(1141, Error, "String literal expected.");
    pub const LINE_BREAK_NOT_PERMITTED_HERE: DiagnosticMessage = diag!(1142, Error, "Line break not permitted here.");
    pub const UNEXPECTED_TOKEN_EXPECTED_0_BUT_FOUND_1: DiagnosticMessage = diag!(1179, Error, "Unexpected token. '{0}' expected but '{1}' found.");
    pub const A_REST_PARAMETER_MUST_BE_LAST: DiagnosticMessage = diag!(1014, Error, "A rest parameter must be last in a parameter list.");
    pub const A_GET_ACCESSOR_CANNOT_HAVE_PARAMETERS: DiagnosticMessage = diag!(1054, Error, "A 'get' accessor cannot have parameters.");
    pub const A_SET_ACCESSOR_MUST_HAVE_EXACTLY_ONE_PARAMETER: DiagnosticMessage = diag!(1049, Error, "A 'set' accessor must have exactly one parameter.");
    pub const ENUM_MEMBER_MUST_HAVE_INITIALIZER: DiagnosticMessage = diag!(1061, Error, "Enum member must have initializer.");
    pub const A_YIELD_EXPRESSION_IS_ONLY_ALLOWED_IN_A_GENERATOR_BODY: DiagnosticMessage = diag!(1163, Error, "A 'yield' expression is only allowed in a generator body.");
    pub const EXPECTED_CORRESPONDING_JSX_CLOSING_TAG_FOR_0: DiagnosticMessage = diag!(17002, Error, "Expected corresponding JSX closing tag for '{0}'.");
    pub const STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS: DiagnosticMessage = diag!(1036, Error, "Statements are not allowed in ambient contexts.");

    // ========================================================================
    // Disambiguation failures (transpiler-specific codes)
    // ========================================================================
    pub const LOOKAHEAD_LIMIT_EXHAUSTED_DECIDING_BETWEEN_0_AND_1: DiagnosticMessage = diag!(9501, Error, "Lookahead limit of {2} tokens exhausted while deciding between {0} and {1}.");
    pub const TYPE_ARGUMENT_LIST_DID_NOT_CLOSE: DiagnosticMessage = diag!(9502, Error, "A '<' here could begin a type argument list or a comparison, and neither interpretation parses.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' expected.", &[";"]), "';' expected.");
        assert_eq!(
            format_message("between {0} and {1}.", &["a type argument list", "a comparison"]),
            "between a type argument list and a comparison."
        );
    }

    #[test]
    fn test_collection_truncate() {
        let mut diags = DiagnosticCollection::new();
        diags.add(Diagnostic::new(&messages::UNEXPECTED_TOKEN, &[]));
        let mark = diags.len();
        diags.add(Diagnostic::new(&messages::EXPRESSION_EXPECTED, &[]));
        diags.add(Diagnostic::new(&messages::TYPE_EXPECTED, &[]));
        diags.truncate(mark);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.diagnostics()[0].code, 1012);
    }

    #[test]
    fn test_display_with_location() {
        let d = Diagnostic::with_location(
            "a.ts".to_string(),
            TextSpan::new(4, 1),
            &messages::_0_EXPECTED,
            &[")"],
        );
        assert_eq!(d.to_string(), "a.ts(4): error TS1005: ')' expected.");
    }
}
