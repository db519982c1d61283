//! Effective-settings resolution.
//!
//! A job's own override wins only when the job opts out of inheritance
//! *and* supplies a value. Otherwise the project setting applies, and
//! the caller default covers projects that leave the setting unset.

use crate::types::{CompliancePolicy, Job, OptimizationProfile, Project};

pub fn effective_profile<'a>(
    job: &'a Job,
    project: &'a Project,
    default: &'a OptimizationProfile,
) -> &'a OptimizationProfile {
    if !job.inherit_project_settings {
        if let Some(profile) = &job.override_profile {
            return profile;
        }
    }
    project.profile.as_ref().unwrap_or(default)
}

pub fn effective_compliance<'a>(
    job: &'a Job,
    project: &'a Project,
    default: &'a CompliancePolicy,
) -> &'a CompliancePolicy {
    if !job.inherit_compliance {
        if let Some(policy) = &job.override_compliance {
            return policy;
        }
    }
    project.compliance.as_ref().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::{LitePreset, PolicyType};

    fn greenest() -> OptimizationProfile {
        OptimizationProfile::Lite { preset: LitePreset::Greenest }
    }

    fn blacklist_de() -> CompliancePolicy {
        CompliancePolicy {
            policy_type: PolicyType::Blacklist,
            regions: vec!["DE".to_string()],
            allow_job_override: true,
            enforce_data_residency: false,
            no_cross_border_transfer: false,
        }
    }

    #[test]
    fn inheriting_job_uses_project_settings() {
        let project = seed::sample_project();
        let defaults = seed::default_settings();
        let mut job = project.jobs[0].clone();
        job.override_profile = Some(greenest());

        let profile = effective_profile(&job, &project, &defaults.default_profile);
        assert_eq!(Some(profile), project.profile.as_ref());
    }

    #[test]
    fn override_applies_when_inheritance_disabled() {
        let project = seed::sample_project();
        let defaults = seed::default_settings();
        let mut job = project.jobs[0].clone();
        job.inherit_project_settings = false;
        job.override_profile = Some(greenest());
        job.inherit_compliance = false;
        job.override_compliance = Some(blacklist_de());

        assert_eq!(effective_profile(&job, &project, &defaults.default_profile), &greenest());
        assert_eq!(
            effective_compliance(&job, &project, &defaults.default_compliance),
            &blacklist_de()
        );
    }

    #[test]
    fn missing_override_falls_back_to_project() {
        let project = seed::sample_project();
        let defaults = seed::default_settings();
        let mut job = project.jobs[1].clone();
        job.inherit_compliance = false;
        job.override_compliance = None;

        let policy = effective_compliance(&job, &project, &defaults.default_compliance);
        assert_eq!(Some(policy), project.compliance.as_ref());
    }

    #[test]
    fn unset_project_settings_fall_back_to_defaults() {
        let mut project = seed::sample_project();
        project.profile = None;
        project.compliance = None;
        let defaults = seed::default_settings();
        let job = &project.jobs[0];

        assert_eq!(
            effective_profile(job, &project, &defaults.default_profile),
            &defaults.default_profile
        );
        assert_eq!(
            effective_compliance(job, &project, &defaults.default_compliance),
            &defaults.default_compliance
        );
    }
}
