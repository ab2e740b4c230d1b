//! The contextual disambiguator.
//!
//! Every construct whose grammatical role cannot be read off the current
//! token is resolved here, by speculative parsing over saved scanner state.
//! Each attempt is bounded by the configured lookahead budget; exhausting
//! the budget is a hard diagnostic naming both attempted interpretations —
//! never a silent guess. A failed attempt restores the scanner and rolls
//! back any tentative diagnostics, leaving no trace.

use tstrip_ast::node::*;
use tstrip_ast::syntax_kind::SyntaxKind;
use tstrip_diagnostics::messages;

use crate::context::ParseContext;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Run a speculative parse. On `None` the scanner state and diagnostic
    /// list are restored to their state before the attempt.
    pub(crate) fn speculate<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let state = self.scanner.save_state();
        let diagnostics_mark = self.diagnostics.len();
        let result = f(self);
        if result.is_none() {
            self.scanner.restore_state(state);
            self.diagnostics.truncate(diagnostics_mark);
        }
        result
    }

    fn lookahead_exhausted(&mut self, first: &str, second: &str) {
        let limit = self.max_lookahead.to_string();
        self.error(
            &messages::LOOKAHEAD_LIMIT_EXHAUSTED_DECIDING_BETWEEN_0_AND_1,
            &[first, second, &limit],
        );
    }

    /// Whether the token after the current one is `=>` on the same line.
    pub(crate) fn next_is_arrow(&mut self) -> bool {
        self.scanner.look_ahead(|s| {
            s.scan() == SyntaxKind::EqualsGreaterThanToken && !s.has_preceding_line_break()
        })
    }

    // ========================================================================
    // Arrow function vs parenthesized expression
    // ========================================================================

    /// At `(`: decide whether this opens an arrow function parameter list.
    ///
    /// Resolution: scan to the matching `)` (bounded), then require `=>` —
    /// directly, or after a return-type annotation. `(...` and `()` commit
    /// immediately since neither can start a parenthesized expression.
    pub(crate) fn is_parenthesized_arrow_function(&mut self) -> bool {
        debug_assert_eq!(self.current_token(), SyntaxKind::OpenParenToken);

        let saved = self.scanner.save_state();
        let mut budget = self.max_lookahead;
        let first = self.scanner.scan();

        let result = match first {
            // `()` can only continue as an arrow function.
            SyntaxKind::CloseParenToken => true,
            // A rest parameter can only appear in a parameter list.
            SyntaxKind::DotDotDotToken => true,
            SyntaxKind::EndOfFileToken => false,
            _ => self.scan_to_matching_paren_then_arrow(1, &mut budget, true),
        };

        self.scanner.restore_state(saved);
        result
    }

    /// Scan forward until the bracket depth returns to zero on a `)`, then
    /// check whether `=>` follows (optionally past a `: T` return-type
    /// annotation when `allow_return_annotation` is set).
    ///
    /// The current scanner token is the first token inside the parens.
    fn scan_to_matching_paren_then_arrow(
        &mut self,
        mut depth: u32,
        budget: &mut usize,
        allow_return_annotation: bool,
    ) -> bool {
        loop {
            if *budget == 0 {
                self.lookahead_exhausted(
                    "an arrow function parameter list",
                    "a parenthesized expression",
                );
                return false;
            }
            *budget -= 1;

            match self.scanner.token() {
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseParenToken => {
                    depth -= 1;
                    if depth == 0 {
                        let next = self.scanner.scan();
                        if next == SyntaxKind::EqualsGreaterThanToken {
                            return true;
                        }
                        if next == SyntaxKind::ColonToken && allow_return_annotation {
                            return self.scan_type_annotation_then_arrow(budget);
                        }
                        return false;
                    }
                }
                SyntaxKind::CloseBracketToken | SyntaxKind::CloseBraceToken => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return false;
                    }
                }
                SyntaxKind::EndOfFileToken => return false,
                _ => {}
            }
            self.scanner.scan();
        }
    }

    /// After `):`, skip a return-type annotation and require `=>`. Stops at
    /// any token that could not continue a type at bracket depth zero.
    fn scan_type_annotation_then_arrow(&mut self, budget: &mut usize) -> bool {
        let mut depth: u32 = 0;
        loop {
            if *budget == 0 {
                self.lookahead_exhausted(
                    "an arrow function return type",
                    "a conditional expression branch",
                );
                return false;
            }
            *budget -= 1;

            match self.scanner.scan() {
                SyntaxKind::EqualsGreaterThanToken if depth == 0 => return true,
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::LessThanToken => depth += 1,
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::GreaterThanToken => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                SyntaxKind::SemicolonToken | SyntaxKind::CommaToken
                    if depth == 0 =>
                {
                    return false;
                }
                SyntaxKind::EndOfFileToken => return false,
                _ => {}
            }
        }
    }

    // ========================================================================
    // Generic arrow vs type assertion (`<` at expression start)
    // ========================================================================

    /// At `<` in a non-JSX file: try `<T>(params) => body`. A failure means
    /// the `<` opens a type assertion instead.
    pub(crate) fn try_parse_generic_arrow_function(
        &mut self,
        cx: ParseContext,
    ) -> Option<Expression<'a>> {
        debug_assert_eq!(self.current_token(), SyntaxKind::LessThanToken);
        self.speculate(|p| {
            let pos = p.token_pos();
            let mark = p.diagnostics.len();
            let type_parameters = p.parse_type_parameters(cx)?;
            if p.current_token() != SyntaxKind::OpenParenToken {
                return None;
            }
            if p.diagnostics.len() != mark {
                return None;
            }
            if !p.is_parenthesized_arrow_function() {
                return None;
            }
            let arrow = p.parse_parenthesized_arrow_function(cx, pos, false, Some(type_parameters));
            if p.diagnostics.len() != mark {
                return None;
            }
            Some(arrow)
        })
    }

    /// At `async`: try the arrow forms `async (params) =>`,
    /// `async <T>(params) =>`, and `async x =>`. `async` followed by
    /// anything else stays an ordinary identifier.
    pub(crate) fn try_parse_async_arrow_function(
        &mut self,
        cx: ParseContext,
    ) -> Option<Expression<'a>> {
        debug_assert_eq!(self.current_token(), SyntaxKind::AsyncKeyword);

        let feasible = self.scanner.look_ahead(|s| {
            let next = s.scan();
            if s.has_preceding_line_break() {
                return false;
            }
            matches!(
                next,
                SyntaxKind::OpenParenToken | SyntaxKind::Identifier | SyntaxKind::LessThanToken
            ) || next.is_contextual_keyword()
        });
        if !feasible {
            return None;
        }

        let variant = self.variant;
        self.speculate(|p| {
            let pos = p.token_pos();
            let mark = p.diagnostics.len();
            p.next_token(); // `async`
            match p.current_token() {
                SyntaxKind::OpenParenToken => {
                    // `async(...)` is a plain call; only a clean arrow
                    // parse — `=>` included — commits.
                    if !p.is_parenthesized_arrow_function() {
                        return None;
                    }
                    let arrow = p.parse_parenthesized_arrow_function(cx, pos, true, None);
                    if p.diagnostics.len() != mark {
                        return None;
                    }
                    Some(arrow)
                }
                SyntaxKind::LessThanToken if variant == LanguageVariant::Standard => {
                    let type_parameters = p.parse_type_parameters(cx)?;
                    if p.current_token() != SyntaxKind::OpenParenToken
                        || p.diagnostics.len() != mark
                        || !p.is_parenthesized_arrow_function()
                    {
                        return None;
                    }
                    let arrow = p.parse_parenthesized_arrow_function(
                        cx,
                        pos,
                        true,
                        Some(type_parameters),
                    );
                    if p.diagnostics.len() != mark {
                        return None;
                    }
                    Some(arrow)
                }
                _ if p.is_identifier_candidate(cx) && p.next_is_arrow() => {
                    Some(p.parse_simple_arrow_function(cx, true))
                }
                _ => None,
            }
        })
    }

    // ========================================================================
    // Call-site type arguments vs relational comparison
    // ========================================================================

    /// At `<` after an expression: try to parse a type argument list. The
    /// attempt commits only when the list parses cleanly, closes with `>`,
    /// and is followed by a token that continues a call (`(`) or a tagged
    /// template. Anything else restores and leaves `<` as less-than.
    ///
    /// Nested generics close one `>` at a time because the scanner never
    /// merges consecutive `>` characters, so `Array<Array<number>>` needs
    /// no compound-token splitting here.
    pub(crate) fn try_parse_call_type_arguments(
        &mut self,
        cx: ParseContext,
    ) -> Option<&'a [TypeNode<'a>]> {
        if self.current_token() != SyntaxKind::LessThanToken {
            return None;
        }
        self.speculate(|p| {
            let mark = p.diagnostics.len();
            p.next_token();
            let mut arguments = Vec::new();
            loop {
                arguments.push(p.parse_type(cx));
                if !p.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
            if p.current_token() != SyntaxKind::GreaterThanToken {
                return None;
            }
            if p.diagnostics.len() != mark {
                return None;
            }
            p.next_token();
            match p.current_token() {
                SyntaxKind::OpenParenToken
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead => Some(p.alloc_vec(arguments)),
                _ => None,
            }
        })
    }

    // ========================================================================
    // Type assertion vs JSX element
    // ========================================================================

    /// In a JSX file, `<T>(expr)` — the `>` immediately followed by `(` —
    /// is a type assertion; everything else starting with `<` is a JSX
    /// element or fragment.
    pub(crate) fn is_type_assertion_in_jsx(&mut self) -> bool {
        debug_assert_eq!(self.current_token(), SyntaxKind::LessThanToken);
        self.scanner.look_ahead(|s| {
            let name = s.scan();
            if name != SyntaxKind::Identifier && !name.is_contextual_keyword() {
                return false;
            }
            if s.scan() != SyntaxKind::GreaterThanToken {
                return false;
            }
            s.scan() == SyntaxKind::OpenParenToken
        })
    }

    // ========================================================================
    // Function type vs parenthesized type
    // ========================================================================

    /// At `(` in a type position: `(x: T) => R` vs `(T)`. Same bounded
    /// scan-to-matching-paren resolution as the expression-level arrow,
    /// but only a bare `=>` can follow.
    pub(crate) fn is_start_of_function_type(&mut self) -> bool {
        debug_assert_eq!(self.current_token(), SyntaxKind::OpenParenToken);

        let saved = self.scanner.save_state();
        let mut budget = self.max_lookahead;
        let first = self.scanner.scan();

        let result = match first {
            SyntaxKind::CloseParenToken => {
                self.scanner.scan() == SyntaxKind::EqualsGreaterThanToken
            }
            SyntaxKind::DotDotDotToken => true,
            SyntaxKind::EndOfFileToken => false,
            _ => self.scan_to_matching_paren_then_arrow(1, &mut budget, false),
        };

        self.scanner.restore_state(saved);
        result
    }
}
