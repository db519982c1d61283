//! Execution planner — one region/provider decision per job.
//!
//! For every job the planner:
//! 1. Resolves the effective compliance policy and profile
//! 2. Derives a weight vector (or takes the one forced by the compare mode)
//! 3. Ranks the compliant regions and keeps the best one
//! 4. Assigns a provider from a stable hash of the job identity

use tracing::debug;

use verdante_core::providers::PROVIDERS;
use verdante_core::{
    CompareMode, CompliancePolicy, ExecutionPlanItem, Job, ObjectiveWeights, OptimizationProfile,
    Project, effective_compliance, effective_profile,
};

use crate::pool::compliant_candidates;
use crate::scorer::rank_regions;

pub const SHIFTED_WINDOW: &str = "Shifted window (off-peak / lower-carbon)";
pub const IMMEDIATE_WINDOW: &str = "Immediate window (deadline/priority)";

pub const TAG_LOWER_CO2: &str = "Lower CO₂";
pub const TAG_DATA_RESIDENCY: &str = "Meets data residency";
pub const TAG_NO_CROSS_BORDER: &str = "No cross-border transfer";
pub const TAG_DEADLINE: &str = "Meets deadline";

/// Weights a job is planned with under `mode`.
pub fn plan_weights(profile: &OptimizationProfile, mode: CompareMode) -> ObjectiveWeights {
    mode.forced_weights()
        .unwrap_or_else(|| ObjectiveWeights::for_profile(profile))
}

/// Deterministic provider for a job.
///
/// Lengths are counted in UTF-16 code units so assignments match
/// receipts exported by the dashboard.
pub fn provider_for(job: &Job) -> &'static str {
    let id_len = job.id.encode_utf16().count();
    let name_len = job.name.encode_utf16().count();
    PROVIDERS[(id_len * 17 + name_len * 7) % PROVIDERS.len()]
}

pub fn time_window_label(job: &Job) -> &'static str {
    if job.batchable_shiftable {
        SHIFTED_WINDOW
    } else {
        IMMEDIATE_WINDOW
    }
}

pub fn rationale_tags(
    weights: &ObjectiveWeights,
    policy: &CompliancePolicy,
    job: &Job,
) -> Vec<String> {
    let mut tags = Vec::new();
    if weights.co2_dominant() {
        tags.push(TAG_LOWER_CO2.to_string());
    }
    if policy.enforce_data_residency {
        tags.push(TAG_DATA_RESIDENCY.to_string());
    }
    if policy.no_cross_border_transfer {
        tags.push(TAG_NO_CROSS_BORDER.to_string());
    }
    if job.deadline_iso.is_some() {
        tags.push(TAG_DEADLINE.to_string());
    }
    tags
}

fn plan_job(
    job: &Job,
    project: &Project,
    default_profile: &OptimizationProfile,
    default_compliance: &CompliancePolicy,
    mode: CompareMode,
) -> ExecutionPlanItem {
    let policy = effective_compliance(job, project, default_compliance);
    let profile = effective_profile(job, project, default_profile);
    let weights = plan_weights(profile, mode);

    let candidates = compliant_candidates(policy);
    let ranked = rank_regions(&candidates, &weights);
    // `compliant_candidates` never returns an empty set.
    let region = ranked.first().map(|s| s.code).unwrap_or(candidates[0].code);
    let provider = provider_for(job);

    debug!(
        job = %job.id,
        region,
        provider,
        candidates = candidates.len(),
        "planned job"
    );

    ExecutionPlanItem {
        job_id: job.id.clone(),
        job_name: job.name.clone(),
        region: region.to_string(),
        provider: provider.to_string(),
        time_window_label: time_window_label(job).to_string(),
        rationale_tags: rationale_tags(&weights, policy, job),
    }
}

/// Build the execution plan for the project's jobs, in job order.
///
/// The caller scopes the project to the jobs it wants planned.
pub fn build_execution_plan(
    project: &Project,
    default_profile: &OptimizationProfile,
    default_compliance: &CompliancePolicy,
    mode: CompareMode,
) -> Vec<ExecutionPlanItem> {
    project
        .jobs
        .iter()
        .map(|job| plan_job(job, project, default_profile, default_compliance, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdante_core::seed;
    use verdante_core::{FullProfile, LitePreset, PolicyType};

    fn plan(project: &Project, mode: CompareMode) -> Vec<ExecutionPlanItem> {
        let defaults = seed::default_settings();
        build_execution_plan(project, &defaults.default_profile, &defaults.default_compliance, mode)
    }

    #[test]
    fn seed_plan_auto() {
        let project = seed::sample_project();
        let items = plan(&project, CompareMode::Auto);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].job_id, "job_001");
        assert_eq!(items[0].region, "FR");
        assert_eq!(items[0].provider, "GCP");
        assert_eq!(items[0].time_window_label, SHIFTED_WINDOW);
        assert_eq!(
            items[0].rationale_tags,
            vec![TAG_LOWER_CO2, TAG_DATA_RESIDENCY, TAG_NO_CROSS_BORDER]
        );

        assert_eq!(items[1].provider, "OVHcloud");
        assert_eq!(items[1].time_window_label, IMMEDIATE_WINDOW);
        assert_eq!(items[1].rationale_tags.last().map(String::as_str), Some(TAG_DEADLINE));
    }

    #[test]
    fn compare_mode_overrides_profile() {
        let mut project = seed::sample_project();
        project.profile = Some(OptimizationProfile::Lite { preset: LitePreset::Cheapest });

        let profile = project.profile.as_ref().unwrap();
        assert_eq!(plan_weights(profile, CompareMode::Greenest), ObjectiveWeights::CO2_ONLY);

        let greenest = plan(&project, CompareMode::Greenest);
        assert!(greenest.iter().all(|i| i.region == "FR"));
        assert!(greenest.iter().all(|i| i.rationale_tags[0] == TAG_LOWER_CO2));

        let cheapest = plan(&project, CompareMode::Auto);
        assert!(cheapest.iter().all(|i| i.region == "CA"));
        assert!(cheapest.iter().all(|i| !i.rationale_tags.contains(&TAG_LOWER_CO2.to_string())));
    }

    #[test]
    fn fastest_keeps_first_compliant_region() {
        let project = seed::sample_project();
        let items = plan(&project, CompareMode::Fastest);
        assert!(items.iter().all(|i| i.region == "CA"));
    }

    #[test]
    fn job_override_policy_restricts_regions() {
        let mut project = seed::sample_project();
        let job = &mut project.jobs[0];
        job.inherit_compliance = false;
        job.override_compliance = Some(CompliancePolicy {
            policy_type: PolicyType::Blacklist,
            regions: vec!["EU".to_string()],
            allow_job_override: true,
            enforce_data_residency: false,
            no_cross_border_transfer: false,
        });
        let items = plan(&project, CompareMode::Greenest);
        assert_eq!(items[0].region, "CA");
        assert_eq!(items[0].rationale_tags, vec![TAG_LOWER_CO2]);
        assert_eq!(items[1].region, "FR");
    }

    #[test]
    fn excluded_everywhere_still_plans() {
        let mut project = seed::sample_project();
        project.compliance.as_mut().unwrap().regions = vec!["JP".to_string()];
        let items = plan(&project, CompareMode::Greenest);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.region == "FR"));
    }

    #[test]
    fn zero_weights_plan_with_equal_split() {
        let mut project = seed::sample_project();
        if let Some(OptimizationProfile::Full(FullProfile { weights, .. })) = project.profile.as_mut() {
            *weights = ObjectiveWeights::new(0.0, 0.0, 0.0, 0.0);
        }
        let profile = project.profile.as_ref().unwrap();
        assert_eq!(plan_weights(profile, CompareMode::Auto), ObjectiveWeights::EQUAL);
        // FR: 22.5 + 28 = 50.5 beats CA: 35 + 25 = 60.
        let items = plan(&project, CompareMode::Auto);
        assert_eq!(items[0].region, "FR");
    }

    #[test]
    fn provider_hash_counts_utf16_units() {
        let mut job = seed::sample_project().jobs[0].clone();
        job.id = "j".to_string();
        job.name = "é".to_string();
        // 1 * 17 + 1 * 7 = 24 → index 0
        assert_eq!(provider_for(&job), "AWS");
        job.name = "𝄞".to_string();
        // surrogate pair: 17 + 14 = 31 → index 3
        assert_eq!(provider_for(&job), "OVHcloud");
    }

    #[test]
    fn empty_project_yields_empty_plan() {
        let mut project = seed::sample_project();
        project.jobs.clear();
        assert!(plan(&project, CompareMode::Auto).is_empty());
    }

    #[test]
    fn planning_is_deterministic() {
        let project = seed::sample_project();
        let a = serde_json::to_string(&plan(&project, CompareMode::Auto)).unwrap();
        let b = serde_json::to_string(&plan(&project, CompareMode::Auto)).unwrap();
        assert_eq!(a, b);
    }
}
