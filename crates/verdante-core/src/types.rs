//! Shared domain types used across Verdante crates.
//!
//! Every type here is a plain value owned by the caller. Field names
//! serialize in camelCase so that documents exported by the dashboard
//! load without translation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::weights::ObjectiveWeights;

/// Region codes assumed when a compliance policy lists none.
pub const DEFAULT_REGIONS: [&str; 2] = ["EU", "CA"];

fn default_true() -> bool {
    true
}

// ── Enumerations ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportingRegime {
    Canada,
    Eu,
    #[default]
    Both,
}

impl ReportingRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportingRegime::Canada => "CANADA",
            ReportingRegime::Eu => "EU",
            ReportingRegime::Both => "BOTH",
        }
    }

    /// Heading used on printed reports for this regime.
    pub fn label(&self) -> &'static str {
        match self {
            ReportingRegime::Canada => "Canada — aligned GHG reporting format",
            ReportingRegime::Eu => "EU — aligned CSRD/ESRS format",
            ReportingRegime::Both => "Canada + EU — aligned formats",
        }
    }
}

impl fmt::Display for ReportingRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportingRegime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CANADA" | "CA" => Ok(ReportingRegime::Canada),
            "EU" => Ok(ReportingRegime::Eu),
            "BOTH" => Ok(ReportingRegime::Both),
            _ => Err(ConfigError::InvalidValue {
                field: "reporting regime",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LitePreset {
    Greenest,
    Cheapest,
    Fastest,
    Balanced,
}

impl LitePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            LitePreset::Greenest => "GREENEST",
            LitePreset::Cheapest => "CHEAPEST",
            LitePreset::Fastest => "FASTEST",
            LitePreset::Balanced => "BALANCED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Training,
    Batch,
    Ci,
    Etl,
    Inference,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Idle,
    Queued,
    Running,
    Done,
}

/// Accelerator class requested by a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GpuClass {
    T4,
    L4,
    A10,
    A100,
    H100,
    #[default]
    #[serde(rename = "NONE")]
    None,
    /// Any class string this build does not recognize.
    #[serde(rename = "UNKNOWN", other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    #[default]
    Whitelist,
    Blacklist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    Med,
    High,
}

/// Objective the planner should compare regions on.
///
/// `Auto` derives weights from each job's effective profile; the other
/// modes force a one-hot weight vector on every job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompareMode {
    #[default]
    Auto,
    Greenest,
    Cheapest,
    Fastest,
}

impl CompareMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareMode::Auto => "AUTO",
            CompareMode::Greenest => "GREENEST",
            CompareMode::Cheapest => "CHEAPEST",
            CompareMode::Fastest => "FASTEST",
        }
    }

    /// Forced weight vector, or `None` for `Auto`.
    pub fn forced_weights(&self) -> Option<ObjectiveWeights> {
        match self {
            CompareMode::Auto => None,
            CompareMode::Greenest => Some(ObjectiveWeights::CO2_ONLY),
            CompareMode::Cheapest => Some(ObjectiveWeights::COST_ONLY),
            CompareMode::Fastest => Some(ObjectiveWeights::TIME_ONLY),
        }
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AUTO" => Ok(CompareMode::Auto),
            "GREENEST" => Ok(CompareMode::Greenest),
            "CHEAPEST" => Ok(CompareMode::Cheapest),
            "FASTEST" => Ok(CompareMode::Fastest),
            _ => Err(ConfigError::InvalidValue {
                field: "compare mode",
                value: s.to_string(),
            }),
        }
    }
}

// ── Optimization profile ───────────────────────────────────────────

/// Limits a FULL profile declares on the worst-case figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_budget_usd: Option<f64>,
    #[serde(rename = "maxCO2Kg", alias = "maxCo2Kg", skip_serializing_if = "Option::is_none")]
    pub max_co2_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_power_kw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runtime_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingConstraints {
    #[serde(rename = "deadlineISO", alias = "deadlineIso", skip_serializing_if = "Option::is_none")]
    pub deadline_iso: Option<String>,
    #[serde(rename = "earliestStartISO", alias = "earliestStartIso", skip_serializing_if = "Option::is_none")]
    pub earliest_start_iso: Option<String>,
    #[serde(default)]
    pub batchable_shiftable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConstraints {
    #[serde(default)]
    pub allowed_providers: Vec<String>,
    #[serde(default)]
    pub allowed_instance_families: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataHandlingToggles {
    #[serde(default)]
    pub enforce_data_residency: bool,
    #[serde(default)]
    pub no_cross_border_transfer: bool,
}

/// Explicitly weighted profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProfile {
    pub weights: ObjectiveWeights,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard: Option<HardConstraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling: Option<SchedulingConstraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderConstraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_handling: Option<DataHandlingToggles>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "UPPERCASE")]
pub enum OptimizationProfile {
    Lite { preset: LitePreset },
    Full(FullProfile),
}

impl OptimizationProfile {
    /// Providers the profile restricts execution to, if any.
    pub fn allowed_providers(&self) -> Option<&[String]> {
        match self {
            OptimizationProfile::Lite { .. } => None,
            OptimizationProfile::Full(full) => full
                .provider
                .as_ref()
                .map(|p| p.allowed_providers.as_slice()),
        }
    }

    pub fn hard_constraints(&self) -> Option<&HardConstraints> {
        match self {
            OptimizationProfile::Lite { .. } => None,
            OptimizationProfile::Full(full) => full.hard.as_ref(),
        }
    }
}

// ── Compliance ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompliancePolicy {
    #[serde(rename = "type", default)]
    pub policy_type: PolicyType,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub allow_job_override: bool,
    #[serde(default)]
    pub enforce_data_residency: bool,
    #[serde(default)]
    pub no_cross_border_transfer: bool,
}

impl CompliancePolicy {
    /// Region list used for filtering and intensity lookup.
    ///
    /// An empty list never means "unconstrained": it falls back to
    /// [`DEFAULT_REGIONS`].
    pub fn effective_regions(&self) -> Vec<&str> {
        if self.regions.is_empty() {
            DEFAULT_REGIONS.to_vec()
        } else {
            self.regions.iter().map(String::as_str).collect()
        }
    }

    pub fn lists(&self, code: &str) -> bool {
        self.effective_regions().contains(&code)
    }
}

// ── Jobs and projects ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCompute {
    #[serde(default)]
    pub gpu_required: bool,
    #[serde(default)]
    pub gpu_class: GpuClass,
    pub expected_runtime_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(default)]
    pub priority: JobPriority,
    #[serde(rename = "deadlineISO", alias = "deadlineIso", default, skip_serializing_if = "Option::is_none")]
    pub deadline_iso: Option<String>,
    #[serde(default)]
    pub batchable_shiftable: bool,
    pub compute: JobCompute,
    #[serde(default = "default_true")]
    pub inherit_project_settings: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_profile: Option<OptimizationProfile>,
    #[serde(default = "default_true")]
    pub inherit_compliance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_compliance: Option<CompliancePolicy>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reporting_regime: ReportingRegime,
    /// Project-wide profile. Falls back to the caller's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<OptimizationProfile>,
    /// Project-wide policy. Falls back to the caller's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<CompliancePolicy>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl Project {
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// A copy of the project holding only the jobs in `scope`.
    pub fn scoped(&self, scope: &Scope) -> Project {
        let jobs = match scope {
            Scope::All => self.jobs.clone(),
            Scope::Job(id) => self.jobs.iter().filter(|j| &j.id == id).cloned().collect(),
        };
        Project {
            jobs,
            ..self.clone()
        }
    }
}

/// Which jobs of a project an operation covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    Job(String),
}

impl Scope {
    pub fn from_job_id(id: Option<&str>) -> Self {
        match id {
            Some(id) if !id.eq_ignore_ascii_case("ALL") => Scope::Job(id.to_string()),
            _ => Scope::All,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Scope::All => "ALL",
            Scope::Job(id) => id,
        }
    }
}

/// Caller-level fallbacks applied when a project leaves settings unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default)]
    pub default_reporting_regime: ReportingRegime,
    pub default_profile: OptimizationProfile,
    pub default_compliance: CompliancePolicy,
    #[serde(default = "default_true")]
    pub allow_job_override_by_default: bool,
}

// ── Outputs ────────────────────────────────────────────────────────

/// Worst-case figures for one job or a whole project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimates {
    pub max_cost_usd: f64,
    #[serde(rename = "maxCO2Kg")]
    pub max_co2_kg: f64,
    pub max_power_kw: f64,
    pub max_time_hours: f64,
    pub confidence: Confidence,
    pub assumptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEstimates {
    /// Job id → estimate.
    pub per_job: BTreeMap<String, Estimates>,
    pub totals: Estimates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlanItem {
    pub job_id: String,
    pub job_name: String,
    pub region: String,
    pub provider: String,
    pub time_window_label: String,
    pub rationale_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_list_falls_back() {
        let policy = CompliancePolicy {
            policy_type: PolicyType::Whitelist,
            regions: vec![],
            allow_job_override: false,
            enforce_data_residency: false,
            no_cross_border_transfer: false,
        };
        assert_eq!(policy.effective_regions(), vec!["EU", "CA"]);
        assert!(policy.lists("CA"));
        assert!(!policy.lists("FR"));
    }

    #[test]
    fn profile_tagged_by_mode() {
        let lite: OptimizationProfile =
            serde_json::from_str(r#"{"mode":"LITE","preset":"GREENEST"}"#).unwrap();
        assert_eq!(lite, OptimizationProfile::Lite { preset: LitePreset::Greenest });

        let full: OptimizationProfile = serde_json::from_str(
            r#"{"mode":"FULL","weights":{"co2":1,"cost":2,"time":3,"power":4},
                "provider":{"allowedProviders":["GCP"],"allowedInstanceFamilies":[]}}"#,
        )
        .unwrap();
        assert_eq!(full.allowed_providers(), Some(&["GCP".to_string()][..]));
        assert!(full.hard_constraints().is_none());
    }

    #[test]
    fn unrecognized_gpu_class_is_unknown() {
        let compute: JobCompute = serde_json::from_str(
            r#"{"gpuRequired":true,"gpuClass":"MI300X","expectedRuntimeHours":2}"#,
        )
        .unwrap();
        assert_eq!(compute.gpu_class, GpuClass::Unknown);
    }

    #[test]
    fn job_defaults_inherit_settings() {
        let job: Job = serde_json::from_str(
            r#"{"id":"j","name":"n","type":"CI","compute":{"expectedRuntimeHours":1}}"#,
        )
        .unwrap();
        assert!(job.inherit_project_settings);
        assert!(job.inherit_compliance);
        assert_eq!(job.status, JobStatus::Idle);
        assert_eq!(job.compute.gpu_class, GpuClass::None);
    }

    #[test]
    fn compare_mode_parses_case_insensitively() {
        assert_eq!("greenest".parse::<CompareMode>().unwrap(), CompareMode::Greenest);
        assert_eq!("AUTO".parse::<CompareMode>().unwrap(), CompareMode::Auto);
        assert!("slowest".parse::<CompareMode>().is_err());
        assert_eq!(CompareMode::Auto.forced_weights(), None);
    }

    #[test]
    fn scope_all_keeps_every_job() {
        assert_eq!(Scope::from_job_id(None), Scope::All);
        assert_eq!(Scope::from_job_id(Some("all")), Scope::All);
        assert_eq!(Scope::from_job_id(Some("job_2")).as_str(), "job_2");
    }
}
