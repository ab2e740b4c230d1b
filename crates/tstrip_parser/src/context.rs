//! Parse-time disambiguation context.
//!
//! A snapshot of the enclosing-construct markers that decide how
//! context-sensitive tokens read at the current position. The context is
//! passed by value through parse calls and discarded when a node is
//! finalized; it is never stored in the tree and never shared between
//! files, so parallel per-file parsing needs no synchronization.

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParseContext: u8 {
        const NONE = 0;
        /// Inside a function marked `async`: `await` is an operator here,
        /// an ordinary identifier everywhere else.
        const AWAIT = 1 << 0;
        /// Inside a generator: `yield` is an operator here.
        const YIELD = 1 << 1;
        /// Inside a `for (...;...;...)` head: `in` is not a binary operator.
        const DISALLOW_IN = 1 << 2;
        /// Inside a `declare` ambient declaration.
        const AMBIENT = 1 << 3;
    }
}

impl ParseContext {
    /// The context for a function body, replacing the await/yield markers
    /// of the enclosing function with this function's own.
    pub fn function_body(self, is_async: bool, is_generator: bool) -> Self {
        let mut cx = self - (ParseContext::AWAIT | ParseContext::YIELD | ParseContext::DISALLOW_IN);
        if is_async {
            cx |= ParseContext::AWAIT;
        }
        if is_generator {
            cx |= ParseContext::YIELD;
        }
        cx
    }

    /// Re-allow `in` as a binary operator (leaving a for-head).
    pub fn allow_in(self) -> Self {
        self - ParseContext::DISALLOW_IN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_body_replaces_markers() {
        let outer = ParseContext::AWAIT | ParseContext::DISALLOW_IN;
        let inner = outer.function_body(false, true);
        assert!(!inner.contains(ParseContext::AWAIT));
        assert!(inner.contains(ParseContext::YIELD));
        assert!(!inner.contains(ParseContext::DISALLOW_IN));
    }
}
