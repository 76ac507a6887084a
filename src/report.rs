//! Output formatting for extracted expressions.

use serde::Serialize;

/// Extraction results for one scanned file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub commands: Vec<String>,
}

/// Format one extracted expression for text output.
// TODO: real DQL pretty-printing (normalize pipe spacing, one stage per
// line). For now the configured prefix is prepended verbatim.
pub fn format_dql_command(prefix: &str, command: &str) -> String {
    format!("{prefix}{command}")
}

/// Render reports as a JSON array, one object per file.
pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_prepended() {
        assert_eq!(
            format_dql_command("dql-format: ", "fetch logs"),
            "dql-format: fetch logs"
        );
    }

    #[test]
    fn empty_prefix_passes_through() {
        assert_eq!(format_dql_command("", "| limit 10"), "| limit 10");
    }

    #[test]
    fn json_shape() {
        let reports = vec![FileReport {
            file: "a.ts".into(),
            commands: vec!["fetch logs".into()],
        }];
        let json = render_json(&reports).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["file"], "a.ts");
        assert_eq!(parsed[0]["commands"][0], "fetch logs");
    }

    #[test]
    fn json_empty_commands() {
        let reports = vec![FileReport {
            file: "b.ts".into(),
            commands: vec![],
        }];
        let json = render_json(&reports).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed[0]["commands"].as_array().unwrap().is_empty());
    }
}
