//! Verdante estimator — worst-case figures for jobs and projects.
//!
//! # Components
//!
//! - **`tables`** — Fixed intensity, price and power tables
//! - **`estimator`** — Per-job estimates and project aggregation
//! - **`guardrails`** — Hard-constraint checks for FULL profiles

pub mod estimator;
pub mod guardrails;
pub mod tables;

pub use estimator::{
    WorstProvider, clamp_runtime, estimate_job, estimate_project, explained_weights,
    worst_grid_intensity, worst_provider,
};
pub use guardrails::{
    GuardrailBreach, GuardrailKind, check_guardrails, job_guardrails, project_guardrails,
};
