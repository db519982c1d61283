//! Worst-case ("majorant") estimation.
//!
//! Each figure is an upper bound: runtime, emissions and cost are all
//! inflated by fixed safety buffers, and every table lookup takes the
//! least favourable option the job's settings still allow. Estimation
//! never fails; malformed inputs degrade to conservative defaults.

use std::collections::BTreeMap;

use tracing::debug;

use verdante_core::providers::{PROVIDERS, cost_multiplier};
use verdante_core::{
    CompliancePolicy, Confidence, Estimates, GpuClass, Job, ObjectiveWeights,
    OptimizationProfile, Project, ProjectEstimates, effective_compliance, effective_profile,
    round2,
};

use crate::tables::{
    BASE_CPU_USD_PER_H, CO2_BUFFER, COST_BUFFER, DEFAULT_GRID_G_PER_KWH, MAX_RUNTIME_HOURS,
    MIN_RUNTIME_HOURS, TIME_BUFFER, gpu_rate_usd_per_h, grid_intensity, power_kw,
};

/// Provider with the highest price multiplier among those allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorstProvider {
    pub name: String,
    pub multiplier: f64,
}

/// Runtime actually fed into the formulas.
///
/// Zero or non-finite runtimes count as one hour; everything is then
/// clamped into `[0.1, 240]`.
pub fn clamp_runtime(hours: f64) -> f64 {
    let hours = if hours.is_finite() && hours != 0.0 { hours } else { 1.0 };
    hours.clamp(MIN_RUNTIME_HOURS, MAX_RUNTIME_HOURS)
}

/// Highest grid intensity among the policy's regions, floored at 350.
pub fn worst_grid_intensity(policy: &CompliancePolicy) -> f64 {
    policy
        .effective_regions()
        .into_iter()
        .map(grid_intensity)
        .fold(DEFAULT_GRID_G_PER_KWH, f64::max)
}

/// Pick the most expensive allowed provider.
///
/// `None` or an empty list allows the whole catalog. Ties keep the
/// first provider seen.
pub fn worst_provider(allowed: Option<&[String]>) -> WorstProvider {
    let list: Vec<&str> = match allowed {
        Some(list) if !list.is_empty() => list.iter().map(String::as_str).collect(),
        _ => PROVIDERS.to_vec(),
    };

    let mut worst = WorstProvider {
        name: list[0].to_string(),
        multiplier: cost_multiplier(list[0]),
    };
    for name in &list[1..] {
        let multiplier = cost_multiplier(name);
        if multiplier > worst.multiplier {
            worst = WorstProvider {
                name: name.to_string(),
                multiplier,
            };
        }
    }
    worst
}

fn confidence_for(job: &Job) -> Confidence {
    let compute = &job.compute;
    let gpu_known = !compute.gpu_required || compute.gpu_class != GpuClass::None;
    if compute.expected_runtime_hours > 0.0 && gpu_known {
        Confidence::High
    } else {
        Confidence::Med
    }
}

/// Estimate one job under its effective profile and compliance policy.
pub fn estimate_job(
    job: &Job,
    project: &Project,
    default_profile: &OptimizationProfile,
    default_compliance: &CompliancePolicy,
) -> Estimates {
    let profile = effective_profile(job, project, default_profile);
    let compliance = effective_compliance(job, project, default_compliance);
    let compute = &job.compute;

    let runtime = clamp_runtime(compute.expected_runtime_hours);
    let max_time_hours = round2(runtime * TIME_BUFFER);
    let max_power_kw = round2(power_kw(compute.gpu_required, compute.gpu_class));

    let worst_grid = worst_grid_intensity(compliance);
    let energy_kwh = max_power_kw * max_time_hours;
    let max_co2_kg = round2(energy_kwh * worst_grid / 1000.0 * CO2_BUFFER);

    let mut cost = max_time_hours * BASE_CPU_USD_PER_H;
    if compute.gpu_required {
        cost += max_time_hours * gpu_rate_usd_per_h(compute.gpu_class);
    }
    let worst = worst_provider(profile.allowed_providers());
    let max_cost_usd = round2(cost * worst.multiplier * COST_BUFFER);

    let mut assumptions = vec![
        "Worst-case (majorant) estimate with fixed safety buffers.".to_string(),
        "Mock grid-intensity and price factors for demo; not a certified accounting dataset."
            .to_string(),
        format!("Grid intensity worst-case within allowed regions: ~{worst_grid} gCO₂e/kWh (mock)."),
        format!("Cost worst-case provider multiplier selected: {}.", worst.name),
    ];
    match profile {
        OptimizationProfile::Lite { preset } => {
            assumptions.push(format!("Lite preset: {}.", preset.as_str()));
        }
        OptimizationProfile::Full(full) => {
            let w = full.weights.normalized();
            assumptions.push(format!(
                "Objective weights (normalized): CO₂ {:.2}, Cost {:.2}, Time {:.2}, Power {:.2}.",
                w.co2, w.cost, w.time, w.power
            ));
        }
    }

    debug!(
        job = %job.id,
        max_cost_usd,
        max_co2_kg,
        max_power_kw,
        max_time_hours,
        provider = %worst.name,
        "estimated job"
    );

    Estimates {
        max_cost_usd,
        max_co2_kg,
        max_power_kw,
        max_time_hours,
        confidence: confidence_for(job),
        assumptions,
    }
}

/// Estimate every job of a project and aggregate the totals.
///
/// Cost, CO2 and time are summed across jobs; power is the peak, since
/// it is an instantaneous ceiling rather than an additive quantity.
pub fn estimate_project(
    project: &Project,
    default_profile: &OptimizationProfile,
    default_compliance: &CompliancePolicy,
) -> ProjectEstimates {
    let mut per_job = BTreeMap::new();
    let (mut sum_cost, mut sum_co2, mut sum_time) = (0.0, 0.0, 0.0);
    let mut peak_power: f64 = 0.0;

    for job in &project.jobs {
        let e = estimate_job(job, project, default_profile, default_compliance);
        sum_cost += e.max_cost_usd;
        sum_co2 += e.max_co2_kg;
        sum_time += e.max_time_hours;
        peak_power = peak_power.max(e.max_power_kw);
        per_job.insert(job.id.clone(), e);
    }

    let totals = Estimates {
        max_cost_usd: round2(sum_cost),
        max_co2_kg: round2(sum_co2),
        max_power_kw: round2(peak_power),
        max_time_hours: round2(sum_time),
        confidence: Confidence::Med,
        assumptions: vec![
            "Project totals are conservative: sum of per-job maxima (and peak power).".to_string(),
        ],
    };

    debug!(
        project = %project.id,
        jobs = per_job.len(),
        max_cost_usd = totals.max_cost_usd,
        max_co2_kg = totals.max_co2_kg,
        "estimated project"
    );

    ProjectEstimates { per_job, totals }
}

/// Normalized weights the estimate explains for a profile.
pub fn explained_weights(profile: &OptimizationProfile) -> Option<ObjectiveWeights> {
    match profile {
        OptimizationProfile::Lite { .. } => None,
        OptimizationProfile::Full(full) => Some(full.weights.normalized()),
    }
}
