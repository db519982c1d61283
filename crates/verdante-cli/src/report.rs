//! Human-readable report formatting.

use verdante_core::{
    CompareMode, ExecutionPlanItem, OptimizationProfile, Project, ProjectEstimates,
};
use verdante_estimate::{GuardrailBreach, explained_weights};
use verdante_runner::{Receipt, RunOutcome};

fn header(out: &mut String, title: &str, rows: &[(&str, &str)]) {
    out.push_str("\n╔══════════════════════════════════════════════════╗\n");
    out.push_str(&format!("║  {title:<48}║\n"));
    out.push_str("╠══════════════════════════════════════════════════╣\n");
    for (key, value) in rows {
        let value: String = value.chars().take(37).collect();
        out.push_str(&format!("║  {key:<9} {value:<37}║\n"));
    }
    out.push_str("╚══════════════════════════════════════════════════╝\n\n");
}

pub fn format_estimates(
    project: &Project,
    default_profile: &OptimizationProfile,
    estimates: &ProjectEstimates,
    breaches: &[GuardrailBreach],
) -> String {
    let mut out = String::new();
    let profile = project.profile.as_ref().unwrap_or(default_profile);
    let profile_label = match profile {
        OptimizationProfile::Lite { preset } => format!("LITE {}", preset.as_str()),
        OptimizationProfile::Full(_) => "FULL".to_string(),
    };

    header(
        &mut out,
        "Verdante Worst-Case Estimate",
        &[
            ("Project:", project.name.as_str()),
            ("Regime:", project.reporting_regime.label()),
            ("Profile:", profile_label.as_str()),
        ],
    );

    if let Some(w) = explained_weights(profile) {
        out.push_str(&format!(
            "Weights (normalized): CO₂ {:.2} · Cost {:.2} · Time {:.2} · Power {:.2}\n\n",
            w.co2, w.cost, w.time, w.power
        ));
    }

    out.push_str(&format!(
        "  {:<28} {:>10} {:>10} {:>8} {:>8}  {}\n",
        "Job", "Cost USD", "CO₂ kg", "kW", "Hours", "Conf."
    ));
    for job in &project.jobs {
        let Some(e) = estimates.per_job.get(&job.id) else {
            continue;
        };
        let name: String = job.name.chars().take(28).collect();
        out.push_str(&format!(
            "  {:<28} {:>10.2} {:>10.2} {:>8.2} {:>8.2}  {:?}\n",
            name, e.max_cost_usd, e.max_co2_kg, e.max_power_kw, e.max_time_hours, e.confidence
        ));
    }
    let t = &estimates.totals;
    out.push_str(&format!(
        "  {:<28} {:>10.2} {:>10.2} {:>8.2} {:>8.2}\n\n",
        "TOTAL (peak power)", t.max_cost_usd, t.max_co2_kg, t.max_power_kw, t.max_time_hours
    ));

    if !breaches.is_empty() {
        out.push_str("❌ HARD LIMITS EXCEEDED:\n\n");
        for b in breaches {
            out.push_str(&format!(
                "  • {}: worst case {:.2} > limit {:.2}\n",
                b.kind.label(),
                b.estimate,
                b.limit
            ));
        }
        out.push('\n');
    }

    if let Some(first) = project.jobs.first().and_then(|j| estimates.per_job.get(&j.id)) {
        out.push_str("Assumptions:\n");
        for a in &first.assumptions {
            out.push_str(&format!("  • {a}\n"));
        }
        for a in &t.assumptions {
            out.push_str(&format!("  • {a}\n"));
        }
    }

    out
}

pub fn format_plan(project: &Project, mode: CompareMode, items: &[ExecutionPlanItem]) -> String {
    let mut out = String::new();
    header(
        &mut out,
        "Verdante Execution Plan",
        &[("Project:", project.name.as_str()), ("Compare:", mode.as_str())],
    );

    if items.is_empty() {
        out.push_str("No jobs in scope.\n");
        return out;
    }

    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", i + 1, item.job_name, item.job_id));
        out.push_str(&format!("     Region:   {}\n", item.region));
        out.push_str(&format!("     Provider: {}\n", item.provider));
        out.push_str(&format!("     Window:   {}\n", item.time_window_label));
        if !item.rationale_tags.is_empty() {
            out.push_str(&format!("     Why:      {}\n", item.rationale_tags.join(" · ")));
        }
        out.push('\n');
    }

    out
}

pub fn format_receipt(outcome: &RunOutcome, receipt: &Receipt) -> String {
    let mut out = String::new();
    let p = &receipt.payload;
    header(
        &mut out,
        "Verdante — Demo Receipt",
        &[
            ("Receipt:", p.receipt_id.as_str()),
            ("Project:", p.project.name.as_str()),
            ("Regime:", p.regime.label()),
            ("Scope:", p.scope.as_str()),
            ("Issued:", p.issued_at.as_str()),
        ],
    );

    out.push_str(&format!(
        "  {:<28} {:>10} {:>10} {:>8} {:>8}\n",
        "Job", "Cost USD", "CO₂ kg", "kW", "Hours"
    ));
    for l in &p.line_items {
        let name: String = l.job_name.chars().take(28).collect();
        out.push_str(&format!(
            "  {:<28} {:>10.2} {:>10.2} {:>8.2} {:>8.2}\n",
            name, l.cost_usd, l.co2_kg, l.peak_power_kw, l.time_hours
        ));
    }

    let (a, m) = (&p.actual_totals, &p.max_totals);
    out.push_str(&format!(
        "  {:<28} {:>10.2} {:>10.2} {:>8.2} {:>8.2}\n",
        "ACTUAL", a.cost_usd, a.co2_kg, a.peak_power_kw, a.time_hours
    ));
    out.push_str(&format!(
        "  {:<28} {:>10.2} {:>10.2} {:>8.2} {:>8.2}\n\n",
        "WORST CASE", m.max_cost_usd, m.max_co2_kg, m.max_power_kw, m.max_time_hours
    ));

    out.push_str("Run log:\n");
    for line in &outcome.record.logs {
        out.push_str(&format!("  {line}\n"));
    }
    out.push_str(&format!("\nIntegrity (SHA-256): {}\n", receipt.integrity));
    out.push_str("Generated locally for the demo (audit-style artifact). Not a legal certification.\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdante_core::seed;
    use verdante_estimate::estimate_project;
    use verdante_planner::build_execution_plan;

    #[test]
    fn estimate_report_lists_jobs_and_totals() {
        let project = seed::sample_project();
        let defaults = seed::default_settings();
        let est = estimate_project(&project, &defaults.default_profile, &defaults.default_compliance);
        let text = format_estimates(&project, &defaults.default_profile, &est, &[]);

        assert!(text.contains("Data preprocessing"));
        assert!(text.contains("Training run"));
        assert!(text.contains("TOTAL (peak power)"));
        assert!(text.contains("CO₂ 0.50"));
        assert!(!text.contains("HARD LIMITS"));
    }

    #[test]
    fn plan_report_shows_rationale() {
        let project = seed::sample_project();
        let defaults = seed::default_settings();
        let items = build_execution_plan(
            &project,
            &defaults.default_profile,
            &defaults.default_compliance,
            CompareMode::Auto,
        );
        let text = format_plan(&project, CompareMode::Auto, &items);
        assert!(text.contains("Region:   FR"));
        assert!(text.contains("Meets deadline"));

        let empty = format_plan(&project, CompareMode::Auto, &[]);
        assert!(empty.contains("No jobs in scope."));
    }
}
