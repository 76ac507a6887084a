//! The two fixed DQL command vocabularies.
//!
//! Both sets are baked in at build time and are deliberately not
//! configurable: the whole point of the classifier is exact matching
//! against a known language surface, and a user-extended vocabulary would
//! silently change what counts as DQL.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Commands that can start a DQL expression directly (no leading pipe).
pub const ROOT_COMMANDS: &[&str] = &[
    // Data source commands
    "data",
    "describe",
    "fetch",
    "load",
    // Metric commands
    "timeseries",
    "metrics",
];

/// Commands that are only valid immediately after a pipe (`|`).
pub const TRANSFORMATION_COMMANDS: &[&str] = &[
    // Filter and search commands
    "dedup",
    "filter",
    "filterOut",
    "search",
    // Selection and modification commands
    "fields",
    "fieldsAdd",
    "fieldsKeep",
    "fieldsRemove",
    "fieldsRename",
    // Extraction and parsing commands
    "parse",
    // Ordering commands
    "limit",
    "sort",
    // Structuring commands
    "expand",
    "fieldsFlatten",
    // Aggregation commands
    "fieldsSummary",
    "makeTimeseries",
    "summarize",
    // Correlation and join commands
    "append",
    "join",
    "joinNested",
    "lookup",
    // Smartscape commands
    "smartscapeNodes",
    "smartscapeEdges",
    "traverse",
];

static ROOT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ROOT_COMMANDS.iter().copied().collect());

static TRANSFORMATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TRANSFORMATION_COMMANDS.iter().copied().collect());

/// Exact, case-sensitive membership in the root vocabulary.
pub fn is_root_command(word: &str) -> bool {
    ROOT_SET.contains(word)
}

/// Exact, case-sensitive membership in the transformation vocabulary.
pub fn is_transformation_command(word: &str) -> bool {
    TRANSFORMATION_SET.contains(word)
}
