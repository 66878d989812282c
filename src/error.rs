// Error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolbarError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Toolbar config defines no tabs")]
    NoTabs,

    #[error("Duplicate tab id: {0}")]
    DuplicateTab(String),
}

pub type Result<T> = std::result::Result<T, ToolbarError>;
