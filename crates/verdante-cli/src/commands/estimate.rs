use serde::Serialize;
use verdante_core::ProjectEstimates;
use verdante_estimate::{GuardrailBreach, estimate_project, project_guardrails};

use crate::report;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateOutput<'a> {
    project_id: &'a str,
    #[serde(flatten)]
    estimates: &'a ProjectEstimates,
    guardrail_breaches: &'a [GuardrailBreach],
}

pub fn estimate(file: &str, project_id: Option<&str>, format: &str) -> anyhow::Result<()> {
    let doc = super::load_document(file)?;
    let project = doc.project(project_id)?;
    let defaults = &doc.defaults;

    let estimates = estimate_project(project, &defaults.default_profile, &defaults.default_compliance);
    let breaches = project_guardrails(project, &defaults.default_profile, &estimates.totals);

    match format {
        "json" => {
            let out = EstimateOutput {
                project_id: &project.id,
                estimates: &estimates,
                guardrail_breaches: &breaches,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        _ => {
            println!(
                "{}",
                report::format_estimates(project, &defaults.default_profile, &estimates, &breaches)
            );
        }
    }

    Ok(())
}
