use verdante_core::{CompareMode, Scope};
use verdante_planner::build_execution_plan;

use crate::report;

pub fn plan(
    file: &str,
    project_id: Option<&str>,
    job: Option<&str>,
    compare: CompareMode,
    format: &str,
) -> anyhow::Result<()> {
    let doc = super::load_document(file)?;
    let project = doc.project(project_id)?;
    let scope = Scope::from_job_id(job);
    if let Scope::Job(id) = &scope {
        if project.job(id).is_none() {
            return Err(verdante_core::ConfigError::JobNotFound(id.clone()).into());
        }
    }

    let scoped = project.scoped(&scope);
    let items = build_execution_plan(
        &scoped,
        &doc.defaults.default_profile,
        &doc.defaults.default_compliance,
        compare,
    );

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&items)?),
        _ => println!("{}", report::format_plan(project, compare, &items)),
    }

    Ok(())
}
