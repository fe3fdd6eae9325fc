//! Boundary validation for literal token matches.
//!
//! Substring search alone would report `any` inside `company`. The boundary
//! rules are what make literal search safe to use as the only detection
//! strategy, standing in for a real tokenizer without building one.

/// How to validate that a literal match is a genuine token occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Every literal occurrence is a valid match.
    None,
    /// JS identifier boundary: the bytes immediately before and after the
    /// match must be absent or outside `[A-Za-z0-9_$]`.
    Identifier,
    /// CSS boundary: the byte before must be absent or one of
    /// whitespace/`({;,`; the byte after must be absent or one of
    /// whitespace/`){};:,`.
    Css,
    /// Functional pseudo-class: the match must be immediately followed by
    /// `(`. Used for `:has`, where the leading `:` already delimits the
    /// token on the left.
    CssFunction,
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_css_before_byte(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'(' | b'{' | b';' | b',')
}

fn is_css_after_byte(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b')' | b'{' | b'}' | b';' | b':' | b',')
}

impl Boundary {
    /// Validate a match of `[start, end)` within `text`.
    pub fn is_valid(self, text: &str, start: usize, end: usize) -> bool {
        let bytes = text.as_bytes();
        match self {
            Boundary::None => true,
            Boundary::Identifier => {
                let before_ok = start == 0 || !is_ident_byte(bytes[start - 1]);
                let after_ok = end >= bytes.len() || !is_ident_byte(bytes[end]);
                before_ok && after_ok
            }
            Boundary::Css => {
                let before_ok = start == 0 || is_css_before_byte(bytes[start - 1]);
                let after_ok = end >= bytes.len() || is_css_after_byte(bytes[end]);
                before_ok && after_ok
            }
            Boundary::CssFunction => end < bytes.len() && bytes[end] == b'(',
        }
    }
}
