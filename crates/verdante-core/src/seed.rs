//! Sample project and caller defaults used by `verdante init` and tests.

use crate::types::{
    CompliancePolicy, DataHandlingToggles, Defaults, FullProfile, GpuClass, HardConstraints,
    Job, JobCompute, JobPriority, JobStatus, JobType, LitePreset, OptimizationProfile,
    PolicyType, Project, ProviderConstraints, ReportingRegime, SchedulingConstraints,
};
use crate::providers::PROVIDERS;
use crate::weights::ObjectiveWeights;

fn eu_ca_whitelist() -> CompliancePolicy {
    CompliancePolicy {
        policy_type: PolicyType::Whitelist,
        regions: vec!["EU".to_string(), "CA".to_string()],
        allow_job_override: true,
        enforce_data_residency: true,
        no_cross_border_transfer: true,
    }
}

pub fn default_settings() -> Defaults {
    Defaults {
        default_reporting_regime: ReportingRegime::Both,
        default_profile: OptimizationProfile::Lite { preset: LitePreset::Balanced },
        default_compliance: eu_ca_whitelist(),
        allow_job_override_by_default: true,
    }
}

pub fn sample_project() -> Project {
    Project {
        id: "proj_seed_001".to_string(),
        name: "LLM Fine-Tuning — Customer Support Bot".to_string(),
        description: Some(
            "Carbon-aware orchestration mockup: worst-case estimates, compliance constraints, \
             and audit-style reporting."
                .to_string(),
        ),
        tags: ["LLM", "GPU", "Customer Support", "Compliance"]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        reporting_regime: ReportingRegime::Both,
        profile: Some(OptimizationProfile::Full(FullProfile {
            weights: ObjectiveWeights::new(50.0, 30.0, 20.0, 0.0),
            hard: Some(HardConstraints {
                max_budget_usd: Some(2500.0),
                ..HardConstraints::default()
            }),
            scheduling: Some(SchedulingConstraints {
                batchable_shiftable: true,
                ..SchedulingConstraints::default()
            }),
            provider: Some(ProviderConstraints {
                allowed_providers: PROVIDERS.iter().map(|p| p.to_string()).collect(),
                allowed_instance_families: vec![
                    "General".to_string(),
                    "Compute".to_string(),
                    "GPU".to_string(),
                ],
            }),
            data_handling: Some(DataHandlingToggles {
                enforce_data_residency: true,
                no_cross_border_transfer: true,
            }),
        })),
        compliance: Some(eu_ca_whitelist()),
        jobs: vec![
            Job {
                id: "job_001".to_string(),
                name: "Data preprocessing".to_string(),
                job_type: JobType::Batch,
                priority: JobPriority::Low,
                deadline_iso: None,
                batchable_shiftable: true,
                compute: JobCompute {
                    gpu_required: false,
                    gpu_class: GpuClass::None,
                    expected_runtime_hours: 3.5,
                },
                inherit_project_settings: true,
                override_profile: None,
                inherit_compliance: true,
                override_compliance: None,
                status: JobStatus::Idle,
                notes: Some("Batchable; prefer low-carbon window.".to_string()),
            },
            Job {
                id: "job_002".to_string(),
                name: "Training run".to_string(),
                job_type: JobType::Training,
                priority: JobPriority::Critical,
                deadline_iso: Some("2026-02-09".to_string()),
                batchable_shiftable: false,
                compute: JobCompute {
                    gpu_required: true,
                    gpu_class: GpuClass::A100,
                    expected_runtime_hours: 11.0,
                },
                inherit_project_settings: true,
                override_profile: None,
                inherit_compliance: true,
                override_compliance: None,
                status: JobStatus::Idle,
                notes: Some("GPU required; deadline constrained.".to_string()),
            },
        ],
    }
}
