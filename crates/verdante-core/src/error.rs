//! Error types for loading and querying project documents.

use thiserror::Error;

/// Result type alias for document operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to render TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported document format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("document contains no projects")]
    NoProjects,

    #[error("job not found: {0}")]
    JobNotFound(String),

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
