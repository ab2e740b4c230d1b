//! Character classification helpers.

/// Whether a character terminates a line.
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whether a character is single-line whitespace.
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{FEFF}'
    ) || (ch as u32 > 0x7F && ch.is_whitespace() && !is_line_break(ch))
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Whether a character can start an identifier.
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Whether a character can continue an identifier.
pub fn is_identifier_part(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}
