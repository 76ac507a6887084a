//! Scanner states, consumed by the lexer loop.

/// Lexer state for the literal scanner.
///
/// One literal is accumulated per excursion out of `Outside`; the buffer
/// lives in the lexer loop, not here, so the state stays `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Not inside any literal.
    Outside,
    /// Inside a `"` or `'` literal; `quote` is the delimiter that opened it.
    Simple { quote: char, escaped: bool },
    /// Inside a backtick template literal, outside any `${...}` span.
    Template { escaped: bool },
    /// Inside a `${...}` interpolation span of a template literal.
    ///
    /// The span is opaque: only brace depth is tracked, so a brace inside a
    /// nested string literal inside the interpolation is miscounted. Kept
    /// as-is intentionally.
    Interpolation { depth: u32, escaped: bool },
}

impl ScanState {
    /// Which state a delimiter character opens, if any.
    pub fn opened_by(c: char) -> Option<Self> {
        match c {
            '"' | '\'' => Some(ScanState::Simple {
                quote: c,
                escaped: false,
            }),
            '`' => Some(ScanState::Template { escaped: false }),
            _ => None,
        }
    }
}
