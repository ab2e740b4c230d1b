//! Flag sets for tokens and nodes.

bitflags::bitflags! {
    /// Flags for AST nodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u16 {
        const NONE            = 0;
        /// `let` declaration list.
        const LET             = 1 << 0;
        /// `const` declaration list.
        const CONST           = 1 << 1;
        /// The node or one of its children failed to parse.
        const HAS_ERROR       = 1 << 2;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits();
    }
}

bitflags::bitflags! {
    /// Modifier flags for declarations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u16 {
        const NONE       = 0;
        const EXPORT     = 1 << 0;
        /// `declare` — the declaration is ambient and fully erased.
        const AMBIENT    = 1 << 1;
        const PUBLIC     = 1 << 2;
        const PRIVATE    = 1 << 3;
        const PROTECTED  = 1 << 4;
        const STATIC     = 1 << 5;
        const READONLY   = 1 << 6;
        const ABSTRACT   = 1 << 7;
        const ASYNC      = 1 << 8;
        const DEFAULT    = 1 << 9;
        const CONST      = 1 << 10;
        const OVERRIDE   = 1 << 11;
        const ACCESSOR   = 1 << 12;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        /// A constructor parameter carrying any of these becomes a property
        /// assignment in the emitted constructor body.
        const PARAMETER_PROPERTY_MODIFIER =
            Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
        /// Modifiers with no runtime meaning; the emitter drops them.
        const TYPE_ONLY_MODIFIER = Self::AMBIENT.bits()
            | Self::ACCESSIBILITY_MODIFIER.bits()
            | Self::READONLY.bits()
            | Self::ABSTRACT.bits()
            | Self::OVERRIDE.bits();
    }
}

bitflags::bitflags! {
    /// Flags attached to scanned tokens.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const NONE                   = 0;
        const PRECEDING_LINE_BREAK   = 1 << 0;
        const UNTERMINATED           = 1 << 1;
        const SCIENTIFIC             = 1 << 2;
        const HEX_SPECIFIER          = 1 << 3;
        const BINARY_SPECIFIER       = 1 << 4;
        const OCTAL_SPECIFIER        = 1 << 5;
        const CONTAINS_SEPARATOR     = 1 << 6;
        /// String literal delimited with `'` rather than `"`.
        const SINGLE_QUOTE           = 1 << 7;

        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::HEX_SPECIFIER.bits()
            | Self::BINARY_SPECIFIER.bits()
            | Self::OCTAL_SPECIFIER.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}
