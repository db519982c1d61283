//! Hard-constraint checks against worst-case figures.
//!
//! A FULL profile may declare budget, CO2, power and runtime limits.
//! Breaches are reported to the caller; they never block estimation.

use serde::Serialize;
use tracing::warn;

use verdante_core::{
    Estimates, HardConstraints, Job, OptimizationProfile, Project, effective_profile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuardrailKind {
    Budget,
    Co2,
    Power,
    Runtime,
}

impl GuardrailKind {
    pub fn label(&self) -> &'static str {
        match self {
            GuardrailKind::Budget => "budget (USD)",
            GuardrailKind::Co2 => "CO₂ (kg)",
            GuardrailKind::Power => "power (kW)",
            GuardrailKind::Runtime => "runtime (h)",
        }
    }
}

/// A worst-case figure above its declared limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardrailBreach {
    pub kind: GuardrailKind,
    pub limit: f64,
    pub estimate: f64,
}

pub fn check_guardrails(hard: &HardConstraints, estimates: &Estimates) -> Vec<GuardrailBreach> {
    [
        (GuardrailKind::Budget, hard.max_budget_usd, estimates.max_cost_usd),
        (GuardrailKind::Co2, hard.max_co2_kg, estimates.max_co2_kg),
        (GuardrailKind::Power, hard.max_power_kw, estimates.max_power_kw),
        (GuardrailKind::Runtime, hard.max_runtime_hours, estimates.max_time_hours),
    ]
    .into_iter()
    .filter_map(|(kind, limit, estimate)| {
        let limit = limit?;
        (estimate > limit).then_some(GuardrailBreach { kind, limit, estimate })
    })
    .collect()
}

fn check_profile(profile: &OptimizationProfile, estimates: &Estimates) -> Vec<GuardrailBreach> {
    profile
        .hard_constraints()
        .map(|hard| check_guardrails(hard, estimates))
        .unwrap_or_default()
}

/// Check project totals against the project-level profile.
pub fn project_guardrails(
    project: &Project,
    default_profile: &OptimizationProfile,
    totals: &Estimates,
) -> Vec<GuardrailBreach> {
    let profile = project.profile.as_ref().unwrap_or(default_profile);
    let breaches = check_profile(profile, totals);
    for b in &breaches {
        warn!(
            project = %project.id,
            limit = b.limit,
            estimate = b.estimate,
            "worst-case {} exceeds hard limit",
            b.kind.label()
        );
    }
    breaches
}

/// Check one job's estimate against its effective profile.
pub fn job_guardrails(
    job: &Job,
    project: &Project,
    default_profile: &OptimizationProfile,
    estimates: &Estimates,
) -> Vec<GuardrailBreach> {
    check_profile(effective_profile(job, project, default_profile), estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate_project;
    use verdante_core::seed;
    use verdante_core::{Confidence, LitePreset};

    fn estimates(cost: f64, co2: f64, power: f64, time: f64) -> Estimates {
        Estimates {
            max_cost_usd: cost,
            max_co2_kg: co2,
            max_power_kw: power,
            max_time_hours: time,
            confidence: Confidence::High,
            assumptions: vec![],
        }
    }

    #[test]
    fn reports_each_exceeded_limit() {
        let hard = HardConstraints {
            max_budget_usd: Some(100.0),
            max_co2_kg: Some(10.0),
            max_power_kw: None,
            max_runtime_hours: Some(5.0),
        };
        let breaches = check_guardrails(&hard, &estimates(150.0, 10.0, 99.0, 6.0));
        let kinds: Vec<_> = breaches.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![GuardrailKind::Budget, GuardrailKind::Runtime]);
        assert_eq!(breaches[0].limit, 100.0);
        assert_eq!(breaches[0].estimate, 150.0);
    }

    #[test]
    fn seed_project_fits_its_budget() {
        let project = seed::sample_project();
        let defaults = seed::default_settings();
        let est = estimate_project(&project, &defaults.default_profile, &defaults.default_compliance);
        assert!(project_guardrails(&project, &defaults.default_profile, &est.totals).is_empty());
    }

    #[test]
    fn job_override_brings_its_own_limits() {
        let project = seed::sample_project();
        let defaults = seed::default_settings();
        let mut job = project.jobs[1].clone();
        job.inherit_project_settings = false;
        job.override_profile = Some(OptimizationProfile::Lite { preset: LitePreset::Cheapest });
        let e = estimates(1e9, 1e9, 1e9, 1e9);
        assert!(job_guardrails(&job, &project, &defaults.default_profile, &e).is_empty());

        let inheriting = &project.jobs[1];
        let breaches = job_guardrails(inheriting, &project, &defaults.default_profile, &e);
        assert_eq!(breaches.len(), 1);
        assert_eq!(breaches[0].kind, GuardrailKind::Budget);
    }
}
