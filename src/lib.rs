//! dql-format: finds DQL queries hiding in the string literals of source files.
//!
//! The scanner walks raw source text character by character, extracts every
//! string and template literal verbatim, and classifies each one against the
//! two fixed DQL command vocabularies: root commands that may start an
//! expression, and transformation commands that follow a pipe. Matching
//! literals come back unwrapped, in source order.
//!
//! # Architecture
//!
//! - **[`scan`]** — Literal tokenizer: a hand-rolled finite-state machine over
//!   quote state, escapes, and `${...}` interpolation braces.
//! - **[`classify`]** — DQL classifier and the two command vocabularies.
//! - **[`extract`]** — The pipeline composing tokenizer, classifier, and unwrap.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`report`]** — Text and JSON output formatting for the CLI.

/// DQL classification: leading-word matching against the fixed vocabularies.
pub mod classify;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// The tokenizer → classifier → unwrap pipeline.
pub mod extract;
/// Output formatting: prefixed text lines and per-file JSON reports.
pub mod report;
/// Literal tokenizer: single-pass scanner for string and template literals.
pub mod scan;

pub use classify::is_dql_content;
pub use extract::extract_dql_commands;
pub use scan::extract_strings;
