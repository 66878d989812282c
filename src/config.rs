// Configuration loading module
// Defaults compiled from config.yaml at build time, overridable by a runtime file

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::publisher::FramePolicy;
use crate::error::{Result, ToolbarError};

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Which edge of the content the toolbar sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarPosition {
    Top,
    Bottom,
}

impl ToolbarPosition {
    pub fn from_str(position: &str) -> Self {
        match position.to_lowercase().as_str() {
            "bottom" => ToolbarPosition::Bottom,
            _ => ToolbarPosition::Top,
        }
    }
}

impl Default for ToolbarPosition {
    fn default() -> Self {
        Self::from_str(compiled::TOOLBAR_POSITION)
    }
}

/// Shared configuration object handed to every toolbar
#[derive(Debug, Clone, Deserialize)]
pub struct SuperTabsConfig {
    /// Duration of the animated snap when a tab settles (ms)
    #[serde(default = "default_transition_duration")]
    pub transition_duration: u64,
}

impl Default for SuperTabsConfig {
    fn default() -> Self {
        Self {
            transition_duration: default_transition_duration(),
        }
    }
}

/// Toolbar options
#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarConfig {
    #[serde(default)]
    pub position: ToolbarPosition,
    #[serde(default = "default_show_indicator")]
    pub show_indicator: bool,
    /// Theme token (e.g. "primary") or terminal colour name
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_frame_policy")]
    pub frame_policy: FramePolicy,
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            position: ToolbarPosition::default(),
            show_indicator: default_show_indicator(),
            color: default_color(),
            frame_policy: default_frame_policy(),
            tabs: Vec::new(),
        }
    }
}

/// One tab button
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Whole configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub super_tabs: SuperTabsConfig,
    #[serde(default)]
    pub toolbar: ToolbarConfig,
}

fn default_transition_duration() -> u64 {
    compiled::TRANSITION_DURATION_MS
}

fn default_show_indicator() -> bool {
    compiled::SHOW_INDICATOR
}

fn default_color() -> String {
    compiled::COLOR.to_string()
}

fn default_frame_policy() -> FramePolicy {
    FramePolicy::from_str(compiled::FRAME_POLICY)
}

/// Path of the bundled config.yaml
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

impl AppConfig {
    /// Parse a configuration from YAML text
    pub fn from_yaml(contents: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(contents).map_err(|source| ToolbarError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject configurations the toolbar cannot render
    pub fn validate(&self) -> Result<()> {
        if self.toolbar.tabs.is_empty() {
            return Err(ToolbarError::NoTabs);
        }

        let mut seen = HashSet::new();
        for tab in &self.toolbar.tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(ToolbarError::DuplicateTab(tab.id.clone()));
            }
        }
        Ok(())
    }
}

/// Load configuration from `config_path`, or the bundled config.yaml
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ToolbarError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    AppConfig::from_yaml(&contents, &path)
}

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let config = load_config(config_path)?;
    config.validate()?;
    tracing::debug!(tabs = config.toolbar.tabs.len(), "loaded toolbar configuration");
    Ok(config)
}
