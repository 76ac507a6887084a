use super::state::ScanState;

/// Extract every string and template literal from `content`, verbatim.
///
/// Single-pass, left to right, no backtracking. Each returned token includes
/// its opening and closing delimiter characters, with escapes untouched, in
/// the order the opening delimiters appear in the input.
///
/// A literal still open at end of input is discarded, not emitted — including
/// a template whose `${...}` interpolation never closes. `${...}` spans are
/// brace-balanced but otherwise opaque; see [`ScanState::Interpolation`].
pub fn extract_strings(content: &str) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();
    let mut results = Vec::new();
    let mut buf = String::new();
    let mut state = ScanState::Outside;
    let mut i = 0;

    while i < len {
        let c = chars[i];

        match state {
            ScanState::Outside => {
                if let Some(next) = ScanState::opened_by(c) {
                    buf.clear();
                    buf.push(c);
                    state = next;
                }
                i += 1;
            }

            ScanState::Simple { quote, escaped } => {
                buf.push(c);
                if escaped {
                    state = ScanState::Simple {
                        quote,
                        escaped: false,
                    };
                } else if c == '\\' {
                    state = ScanState::Simple {
                        quote,
                        escaped: true,
                    };
                } else if c == quote {
                    results.push(std::mem::take(&mut buf));
                    state = ScanState::Outside;
                }
                i += 1;
            }

            ScanState::Template { escaped } => {
                buf.push(c);
                if escaped {
                    state = ScanState::Template { escaped: false };
                    i += 1;
                } else if c == '\\' {
                    state = ScanState::Template { escaped: true };
                    i += 1;
                } else if c == '$' && i + 1 < len && chars[i + 1] == '{' {
                    // Consume "${" and switch to brace counting
                    buf.push('{');
                    state = ScanState::Interpolation {
                        depth: 1,
                        escaped: false,
                    };
                    i += 2;
                } else if c == '`' {
                    results.push(std::mem::take(&mut buf));
                    state = ScanState::Outside;
                    i += 1;
                } else {
                    i += 1;
                }
            }

            ScanState::Interpolation { depth, escaped } => {
                buf.push(c);
                if escaped {
                    state = ScanState::Interpolation {
                        depth,
                        escaped: false,
                    };
                } else if c == '\\' {
                    state = ScanState::Interpolation {
                        depth,
                        escaped: true,
                    };
                } else if c == '{' {
                    state = ScanState::Interpolation {
                        depth: depth + 1,
                        escaped: false,
                    };
                } else if c == '}' {
                    if depth == 1 {
                        // Closing `}` stays in the token; back to the template body
                        state = ScanState::Template { escaped: false };
                    } else {
                        state = ScanState::Interpolation {
                            depth: depth - 1,
                            escaped: false,
                        };
                    }
                }
                i += 1;
            }
        }
    }

    // Any non-Outside state here is an unterminated literal; buf is dropped.
    results
}
