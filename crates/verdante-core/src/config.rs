//! Project document parser (`verdante.toml` or an exported `.json` state).
//!
//! The JSON shape matches the dashboard's exported state, so unrelated
//! keys such as `workspace` or `audit` are ignored on load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::seed;
use crate::types::{Defaults, Project};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default = "seed::default_settings")]
    pub defaults: Defaults,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectDocument {
    /// Load a document, choosing the codec from the file extension.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let doc = match ext.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        debug!(path = %path.display(), projects = doc.projects.len(), "loaded project document");
        Ok(doc)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Scaffold a document holding the sample project.
    pub fn seed() -> Self {
        ProjectDocument {
            defaults: seed::default_settings(),
            projects: vec![seed::sample_project()],
        }
    }

    /// Look up a project by id, or take the first one when `id` is `None`.
    pub fn project(&self, id: Option<&str>) -> ConfigResult<&Project> {
        match id {
            Some(id) => self
                .projects
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| ConfigError::ProjectNotFound(id.to_string())),
            None => self.projects.first().ok_or(ConfigError::NoProjects),
        }
    }
}
