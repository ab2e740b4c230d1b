//! Scanner integration tests, focused on the re-lexing entry points the
//! parser depends on for disambiguation.

use tstrip_ast::flags::TokenFlags;
use tstrip_ast::syntax_kind::SyntaxKind;
use tstrip_scanner::Scanner;

fn kinds(source: &str) -> Vec<SyntaxKind> {
    let mut scanner = Scanner::new(source);
    let mut out = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        out.push(kind);
    }
    out
}

#[test]
fn test_token_stream_for_declaration() {
    assert_eq!(
        kinds("const x: number = 1;"),
        vec![
            SyntaxKind::ConstKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::ColonToken,
            SyntaxKind::NumberKeyword,
            SyntaxKind::EqualsToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::SemicolonToken,
        ]
    );
}

#[test]
fn test_contextual_keywords_scan_as_keyword_candidates() {
    assert_eq!(
        kinds("await yield of as satisfies type"),
        vec![
            SyntaxKind::AwaitKeyword,
            SyntaxKind::YieldKeyword,
            SyntaxKind::OfKeyword,
            SyntaxKind::AsKeyword,
            SyntaxKind::SatisfiesKeyword,
            SyntaxKind::TypeKeyword,
        ]
    );
}

#[test]
fn test_nested_generic_closers_come_out_one_at_a_time() {
    // `Array<Array<number>>` — the scanner never merges `>>`, so each
    // closing marker is available individually.
    assert_eq!(
        kinds("Array<Array<number>>"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::NumberKeyword,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanToken,
        ]
    );
}

#[test]
fn test_rescan_greater_than_builds_compound_operators() {
    for (source, expected) in [
        ("a >> b", SyntaxKind::GreaterThanGreaterThanToken),
        ("a >>> b", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
        ("a >= b", SyntaxKind::GreaterThanEqualsToken),
        ("a >>= b", SyntaxKind::GreaterThanGreaterThanEqualsToken),
        ("a >>>= b", SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
    ] {
        let mut scanner = Scanner::new(source);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.rescan_greater_than_token(), expected, "{}", source);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    }
}

#[test]
fn test_rescan_slash_produces_regex_with_flags_and_classes() {
    let mut scanner = Scanner::new("/[a-z/]+\\//giu rest");
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(
        scanner.rescan_slash_token(),
        SyntaxKind::RegularExpressionLiteral
    );
    assert_eq!(scanner.token_value(), "/[a-z/]+\\//giu");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "rest");
}

#[test]
fn test_template_rescan_cycle() {
    let mut scanner = Scanner::new("`x${a}y${b}z`");
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.token_value(), "x");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.token_value(), "y");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.token_value(), "z");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_save_restore_supports_unbounded_reparse() {
    let mut scanner = Scanner::new("a < b > ( c )");
    scanner.scan(); // a
    let checkpoint = scanner.save_state();
    scanner.scan(); // <
    scanner.scan(); // b
    scanner.scan(); // >
    assert_eq!(scanner.scan(), SyntaxKind::OpenParenToken);
    scanner.restore_state(checkpoint);
    assert_eq!(scanner.token(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
}

#[test]
fn test_string_quote_style_is_recorded() {
    let mut scanner = Scanner::new("'single' \"double\"");
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::SINGLE_QUOTE));
    scanner.scan();
    assert!(!scanner.token_flags().contains(TokenFlags::SINGLE_QUOTE));
}

#[test]
fn test_unterminated_literals_flag_and_report() {
    let mut scanner = Scanner::new("'oops");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert!(scanner.token_flags().contains(TokenFlags::UNTERMINATED));
    assert_eq!(scanner.diagnostics().len(), 1);
    assert_eq!(scanner.diagnostics().diagnostics()[0].code, 1002);

    let mut scanner = Scanner::new("`never closed");
    assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert!(scanner.token_flags().contains(TokenFlags::UNTERMINATED));
}

#[test]
fn test_numeric_flags() {
    let mut scanner = Scanner::new("1_000 0xFF 1e9");
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_SEPARATOR));
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::HEX_SPECIFIER));
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::SCIENTIFIC));
}

#[test]
fn test_line_break_tracking_across_trivia() {
    let mut scanner = Scanner::new("a /* inline */ b\nc");
    scanner.scan();
    scanner.scan();
    assert!(!scanner.has_preceding_line_break());
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_conflict_markers_are_trivia() {
    let source = "a\n<<<<<<< ours\nb\n=======\nc\n>>>>>>> theirs\nd";
    let scanned = kinds(source);
    // The marker lines themselves disappear; the code between them stays.
    assert!(scanned.contains(&SyntaxKind::Identifier));
    assert!(!scanned.contains(&SyntaxKind::Unknown));
}

#[test]
fn test_jsx_scanning_splits_text_and_structure() {
    let mut scanner = Scanner::new("hello {x} <b></b>");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
    assert_eq!(scanner.token_value(), "hello ");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::OpenBraceToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanSlashToken);
}
