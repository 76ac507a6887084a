//! The extraction pipeline: lexer, classifier, unwrap.

use crate::classify;
use crate::scan;

/// Extract every DQL expression found in string/template literals of `content`.
///
/// Tokens come back unwrapped (one outer delimiter pair stripped), in source
/// order, duplicates preserved.
pub fn extract_dql_commands(content: &str) -> Vec<String> {
    scan::extract_strings(content)
        .into_iter()
        .filter(|raw| classify::is_dql_content(raw))
        .map(|raw| classify::strip_delimiters(&raw).to_string())
        .collect()
}
