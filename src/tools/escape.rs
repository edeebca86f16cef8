//! Placeholder-token escaping for the huffzip compressor.
//!
//! The table file stores one `character:code` line per symbol, so characters
//! that would break that format (the colon, the newline) and a fixed set of
//! other punctuation are replaced with multi-character placeholder tokens
//! before any analysis or encoding happens. The packed stream therefore only
//! ever carries characters from the escaped alphabet. Unescaping restores
//! the original text after decoding.
//!
//! Escaping is a single left-to-right pass; the characters inside a
//! placeholder token are never re-scanned. A text that already contains a
//! literal placeholder token will not survive a round trip unchanged. That
//! aliasing limitation is accepted rather than solved.

/// Fixed substitution table. Unescaping applies the token-to-character pairs
/// in exactly this order, with the newline token handled last.
pub const SPECIAL_TOKENS: [(char, &str); 17] = [
    ('@', "__SPECIAL_AT"),
    ('#', "__SPECIAL_HASH"),
    ('$', "__SPECIAL_DOLLAR"),
    ('%', "__SPECIAL_PERCENT"),
    ('^', "__SPECIAL_CARET"),
    ('&', "__SPECIAL_AND"),
    ('*', "__SPECIAL_STAR"),
    ('(', "__SPECIAL_LEFT_PAREN"),
    (')', "__SPECIAL_RIGHT_PAREN"),
    ('_', "__SPECIAL_UNDERSCORE"),
    ('+', "__SPECIAL_PLUS"),
    ('{', "__SPECIAL_LEFT_BRACE"),
    ('}', "__SPECIAL_RIGHT_BRACE"),
    ('|', "__SPECIAL_VERTICAL_BAR"),
    (':', "__SPECIAL_COLON"),
    ('<', "__SPECIAL_LEFT_ANGLE_BRACKET"),
    ('>', "__SPECIAL_RIGHT_ANGLE_BRACKET"),
];

/// Placeholder token for the newline character.
pub const NEWLINE_TOKEN: &str = "__NEWLINE__";

/// Expand every designated punctuation character and newline into its
/// placeholder token. All other characters pass through untouched.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\n' {
            out.push_str(NEWLINE_TOKEN);
            continue;
        }
        match SPECIAL_TOKENS.iter().find(|(special, _)| *special == ch) {
            Some((_, token)) => out.push_str(token),
            None => out.push(ch),
        }
    }
    out
}

/// Collapse placeholder tokens back into their original characters, applying
/// the table pairs in order and the newline token last.
pub fn unescape(text: &str) -> String {
    let mut out = text.to_string();
    for (ch, token) in SPECIAL_TOKENS.iter() {
        out = out.replace(token, &ch.to_string());
    }
    out.replace(NEWLINE_TOKEN, "\n")
}
