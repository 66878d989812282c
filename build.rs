// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Fall back to hardcoded defaults if config.yaml is missing
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const TRANSITION_DURATION_MS: u64 = {transition_duration};
pub const TOOLBAR_POSITION: &str = "{position}";
pub const SHOW_INDICATOR: bool = {show_indicator};
pub const COLOR: &str = "{color}";
pub const FRAME_POLICY: &str = "{frame_policy}";
"#,
        transition_duration = config.transition_duration,
        position = config.position,
        show_indicator = config.show_indicator,
        color = config.color,
        frame_policy = config.frame_policy,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    transition_duration: u64,
    position: String,
    show_indicator: bool,
    color: String,
    frame_policy: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            transition_duration: 150,
            position: "top".to_string(),
            show_indicator: true,
            color: "primary".to_string(),
            frame_policy: "coalesce".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_super_tabs = false;
    let mut in_toolbar = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level sections start unindented
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_super_tabs = trimmed.starts_with("super_tabs:");
            in_toolbar = trimmed.starts_with("toolbar:");
            continue;
        }

        // Tab list entries are runtime-only
        if trimmed.starts_with("- ") {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_super_tabs {
                if key == "transition_duration" {
                    config.transition_duration = value.parse().unwrap_or(150);
                }
            } else if in_toolbar {
                match key {
                    "position" => config.position = value.to_string(),
                    "show_indicator" => config.show_indicator = parse_bool(value),
                    "color" => config.color = value.to_string(),
                    "frame_policy" => config.frame_policy = value.to_string(),
                    _ => {}
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    } else if value.starts_with('#') {
        value = "";
    }

    // Section header
    if value.is_empty() {
        return None;
    }

    Some((key, value.trim_matches('"')))
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "on" | "1")
}
