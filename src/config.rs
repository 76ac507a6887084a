use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub files: Files,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Output {
    /// Prefix prepended to each extracted expression in text output.
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Files {
    /// Extensions collected during directory scans (no leading dot).
    #[serde(default)]
    pub extensions: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    output: OutputOverlay,
    #[serde(default)]
    files: FilesOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct OutputOverlay {
    prefix: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FilesOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    remove_extensions: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/dql-format/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/dql-format/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/dql-format/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                log::warn!("config parse error, ignoring user config: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.output.prefix {
            self.output.prefix = v;
        }

        let f = overlay.files;
        merge_list(
            &mut self.files.extensions,
            f.extensions,
            &f.remove_extensions,
            f.replace,
        );
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
