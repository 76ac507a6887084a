//! DQL classification of extracted literals.
//!
//! Decides whether one literal's text is a DQL expression: either a root
//! command starting the expression, or a transformation command after a
//! leading pipe. Only the spelling of the leading word is examined;
//! everything after it is not validated.

pub mod vocab;

/// Strip one outer quote/backtick pair from `raw`, if present.
///
/// Strips only when the first and last characters are the same `"`, `'`,
/// or `` ` ``. Assumes (without re-verifying) that such a pair is a genuine
/// delimiter pair, which always holds for tokens produced by the lexer.
pub fn strip_delimiters(raw: &str) -> &str {
    if raw.len() >= 2 {
        let mut chars = raw.chars();
        if let (Some(first), Some(last)) = (chars.next(), chars.next_back())
            && first == last
            && matches!(first, '"' | '\'' | '`')
        {
            // Delimiters are ASCII, so byte slicing is safe here
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Leading maximal run of ASCII alphabetic characters.
fn leading_word(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|&(_, c)| !c.is_ascii_alphabetic())
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

/// Classify one literal's raw text (delimiters optional) as DQL or not.
///
/// A leading pipe selects the transformation vocabulary; otherwise the
/// leading word must be a root command. Text with no leading alphabetic
/// run is never DQL.
pub fn is_dql_content(raw: &str) -> bool {
    let s = strip_delimiters(raw).trim_start();
    if s.is_empty() {
        return false;
    }

    if let Some(rest) = s.strip_prefix('|') {
        let rest = rest.trim_start();
        let word = leading_word(rest);
        return !word.is_empty() && vocab::is_transformation_command(word);
    }

    let word = leading_word(s);
    !word.is_empty() && vocab::is_root_command(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Classifier table over both vocabularies ──

    #[test]
    fn every_root_command_classifies_without_pipe() {
        for cmd in vocab::ROOT_COMMANDS {
            let raw = format!("\"{cmd} x\"");
            assert!(is_dql_content(&raw), "root command rejected: {raw}");
        }
    }

    #[test]
    fn every_transformation_command_classifies_after_pipe() {
        for cmd in vocab::TRANSFORMATION_COMMANDS {
            let raw = format!("\"| {cmd} x\"");
            assert!(is_dql_content(&raw), "piped command rejected: {raw}");
        }
    }

    #[test]
    fn transformation_commands_need_the_pipe() {
        for cmd in vocab::TRANSFORMATION_COMMANDS {
            let raw = format!("\"{cmd} x\"");
            assert!(!is_dql_content(&raw), "accepted without pipe: {raw}");
        }
    }

    #[test]
    fn root_commands_are_invalid_after_pipe() {
        for cmd in vocab::ROOT_COMMANDS {
            let raw = format!("\"| {cmd} x\"");
            assert!(!is_dql_content(&raw), "accepted after pipe: {raw}");
        }
    }

    // ── Delimiter handling ──

    #[test]
    fn accepts_all_three_delimiter_kinds() {
        assert!(is_dql_content("\"fetch logs\""));
        assert!(is_dql_content("'fetch logs'"));
        assert!(is_dql_content("`fetch logs`"));
    }

    #[test]
    fn accepts_undelimited_text() {
        assert!(is_dql_content("fetch logs"));
        assert!(is_dql_content("| filter x == 1"));
    }

    #[test]
    fn mismatched_delimiters_not_stripped() {
        // First char " is not alphabetic, so nothing matches
        assert!(!is_dql_content("\"fetch logs'"));
    }

    #[test]
    fn strip_delimiters_basic() {
        assert_eq!(strip_delimiters("\"abc\""), "abc");
        assert_eq!(strip_delimiters("'abc'"), "abc");
        assert_eq!(strip_delimiters("`abc`"), "abc");
        assert_eq!(strip_delimiters("abc"), "abc");
        assert_eq!(strip_delimiters("\"\""), "");
        assert_eq!(strip_delimiters("\""), "\"");
        assert_eq!(strip_delimiters(""), "");
    }

    // ── Edge cases ──

    #[test]
    fn leading_whitespace_is_trimmed() {
        assert!(is_dql_content("\"  fetch logs\""));
        assert!(is_dql_content("\"  |  filter x\""));
    }

    #[test]
    fn empty_and_blank_are_not_dql() {
        assert!(!is_dql_content(""));
        assert!(!is_dql_content("\"\""));
        assert!(!is_dql_content("\"   \""));
    }

    #[test]
    fn bare_pipe_is_not_dql() {
        assert!(!is_dql_content("\"|\""));
        assert!(!is_dql_content("\"|   \""));
    }

    #[test]
    fn pipe_then_non_alpha_is_not_dql() {
        assert!(!is_dql_content("\"| 42\""));
        assert!(!is_dql_content("\"| $filter\""));
    }

    #[test]
    fn non_alpha_leading_run_is_not_dql() {
        assert!(!is_dql_content("\"42 fetch\""));
        assert!(!is_dql_content("\"$data\""));
    }

    #[test]
    fn word_boundary_is_the_alpha_run() {
        // "data123" has leading run "data" followed by digits
        assert!(is_dql_content("\"data123\""));
        // "datax" is a single run and not in the vocabulary
        assert!(!is_dql_content("\"datax from logs\""));
    }

    #[test]
    fn trailing_content_is_unexamined() {
        assert!(is_dql_content("\"fetch ### anything at all !!!\""));
    }

    #[test]
    fn unknown_words_are_not_dql() {
        assert!(!is_dql_content("\"not dql\""));
        assert!(!is_dql_content("\"| unknown x\""));
    }

    #[test]
    fn double_pipe_is_not_dql() {
        // Second pipe is not alphabetic
        assert!(!is_dql_content("\"|| filter x\""));
    }
}
