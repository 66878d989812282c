// Super Tabs Toolbar Library
// A tab toolbar with a sliding selection indicator for terminal UIs

// Core infrastructure - element tree, toolbar and indicator
pub mod core;

// UI - layout, rendering and event loop
pub mod ui;

// Configuration loading and validation
pub mod config;

// Error types
pub mod error;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use core::{App, ElementTree, SuperTabsToolbar, ToolbarEvent, ToolbarNotification};
pub use config::{load_and_validate_config, load_config, AppConfig};
pub use error::{Result, ToolbarError};
pub use constants::*;
