//! dql-format CLI: scan files for DQL expressions hidden in string literals.
//!
//! Usage: dql-format [--json] [--verbose] <filename>...
//!
//! Arguments may be files or directories. Directories are walked recursively
//! and files matching the configured extension list are collected; files
//! named explicitly are scanned regardless of extension.
//!
//! Exit codes:
//!   0 — scan completed (matches or not)
//!   1 — usage error
//!   2 — a named path does not exist
//!   3 — a file could not be read

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{debug, warn};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use dql_format::config::Config;
use dql_format::extract::extract_dql_commands;
use dql_format::report::{self, FileReport};

struct Args {
    json: bool,
    verbose: bool,
    paths: Vec<PathBuf>,
}

fn usage() {
    eprintln!("Usage: dql-format [--json] [--verbose] <filename>...");
}

fn parse_args() -> Option<Args> {
    let mut json = false;
    let mut verbose = false;
    let mut paths = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return None,
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {other}");
                return None;
            }
            other => paths.push(PathBuf::from(other)),
        }
    }

    if paths.is_empty() {
        return None;
    }

    Some(Args {
        json,
        verbose,
        paths,
    })
}

/// Recursively collect files under `path` whose extension is configured.
/// Unreadable directory entries are logged and skipped, not fatal.
fn collect_files(path: &Path, extensions: &[String], out: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("skipping unreadable directory {}: {e}", path.display());
            return;
        }
    };

    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("skipping unreadable entry in {}: {e}", path.display());
                None
            }
        })
        .collect();
    // Deterministic scan order regardless of filesystem order
    children.sort();

    for child in children {
        if child.is_dir() {
            collect_files(&child, extensions, out);
        } else if let Some(ext) = child.extension().and_then(|e| e.to_str())
            && extensions.iter().any(|e| e == ext)
        {
            out.push(child);
        }
    }
}

fn main() -> ExitCode {
    let Some(args) = parse_args() else {
        usage();
        return ExitCode::from(1);
    };

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let config = Config::load();

    // Resolve arguments to the list of files to scan
    let mut files = Vec::new();
    for path in &args.paths {
        if !path.exists() {
            eprintln!("File not found: {}", path.display());
            return ExitCode::from(2);
        }
        if path.is_dir() {
            collect_files(path, &config.files.extensions, &mut files);
        } else {
            files.push(path.clone());
        }
    }

    let mut reports = Vec::new();
    for file in &files {
        let content = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file {}: {e}", file.display());
                return ExitCode::from(3);
            }
        };

        let commands = extract_dql_commands(&content);
        debug!(
            "{}: {} literal(s) classified as DQL",
            file.display(),
            commands.len()
        );
        reports.push(FileReport {
            file: file.display().to_string(),
            commands,
        });
    }

    if args.json {
        match report::render_json(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error rendering JSON: {e}");
                return ExitCode::from(3);
            }
        }
    } else {
        for r in &reports {
            for command in &r.commands {
                println!(
                    "{}",
                    report::format_dql_command(&config.output.prefix, command)
                );
            }
        }
    }

    ExitCode::SUCCESS
}
