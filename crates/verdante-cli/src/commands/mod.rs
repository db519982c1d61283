pub mod estimate;
pub mod init;
pub mod plan;
pub mod run;

use std::path::Path;

use anyhow::Context;
use verdante_core::ProjectDocument;

/// Load the project document at `file`.
pub fn load_document(file: &str) -> anyhow::Result<ProjectDocument> {
    ProjectDocument::from_file(Path::new(file))
        .with_context(|| format!("loading project document {file}"))
}
