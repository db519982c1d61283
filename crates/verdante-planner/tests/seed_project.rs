//! End-to-end estimation and planning over the sample project.

use verdante_core::seed;
use verdante_core::{CompareMode, OptimizationProfile, PolicyType, Scope, round2};
use verdante_estimate::estimate_project;
use verdante_planner::build_execution_plan;

#[test]
fn estimate_and_plan_cover_the_same_jobs() {
    let project = seed::sample_project();
    let defaults = seed::default_settings();

    let estimates = estimate_project(&project, &defaults.default_profile, &defaults.default_compliance);
    let plan = build_execution_plan(
        &project,
        &defaults.default_profile,
        &defaults.default_compliance,
        CompareMode::Auto,
    );

    assert_eq!(plan.len(), project.jobs.len());
    for item in &plan {
        assert!(estimates.per_job.contains_key(&item.job_id));
    }
}

#[test]
fn scoped_plan_only_holds_the_selected_job() {
    let project = seed::sample_project();
    let defaults = seed::default_settings();
    let scoped = project.scoped(&Scope::Job("job_002".to_string()));

    let plan = build_execution_plan(
        &scoped,
        &defaults.default_profile,
        &defaults.default_compliance,
        CompareMode::Cheapest,
    );
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].job_name, "Training run");
    assert_eq!(plan[0].region, "CA");
}

#[test]
fn defaults_govern_a_bare_project() {
    let mut project = seed::sample_project();
    project.profile = None;
    project.compliance = None;
    let mut defaults = seed::default_settings();
    defaults.default_compliance.policy_type = PolicyType::Blacklist;
    defaults.default_compliance.regions = vec!["EU".to_string()];

    let plan = build_execution_plan(
        &project,
        &defaults.default_profile,
        &defaults.default_compliance,
        CompareMode::Auto,
    );
    assert!(plan.iter().all(|i| i.region == "CA"));

    let estimates = estimate_project(&project, &defaults.default_profile, &defaults.default_compliance);
    let cpu = &estimates.per_job["job_001"];
    assert_eq!(cpu.assumptions.last().unwrap(), "Lite preset: BALANCED.");
    assert!(matches!(defaults.default_profile, OptimizationProfile::Lite { .. }));
}

#[test]
fn totals_follow_per_job_figures() {
    let project = seed::sample_project();
    let defaults = seed::default_settings();
    let estimates = estimate_project(&project, &defaults.default_profile, &defaults.default_compliance);

    let co2: f64 = estimates.per_job.values().map(|e| e.max_co2_kg).sum();
    let time: f64 = estimates.per_job.values().map(|e| e.max_time_hours).sum();
    assert_eq!(estimates.totals.max_co2_kg, round2(co2));
    assert_eq!(estimates.totals.max_time_hours, round2(time));
}
