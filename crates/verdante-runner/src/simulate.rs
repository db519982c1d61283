//! Simulated job runs.
//!
//! A run ticks on a fixed interval to report progress, then scales each
//! job's worst-case figures by seeded fractions to produce "actuals".
//! The same project, scope, compare mode and regime always yield the
//! same actuals. Actuals never exceed the estimated maxima.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use verdante_core::{
    CompareMode, Defaults, ExecutionPlanItem, Project, ProjectEstimates, ReportingRegime, Scope,
    round2,
};
use verdante_estimate::estimate_project;
use verdante_planner::build_execution_plan;

use crate::error::{RunError, RunResult};
use crate::rng::{Mulberry32, hash32};

/// Stage messages emitted on even ticks, in order.
pub const STAGES: [&str; 6] = [
    "Initializing job runner (demo)...",
    "Validating compliance constraints (whitelist/blacklist)...",
    "Computing worst-case guardrails (majorant buffers)...",
    "Selecting eligible regions/providers (mock planner)...",
    "Generating aligned report sections...",
    "Finalizing receipt & integrity hash...",
];

const STATUS_TICK: &str = "Job status tick: Queued → Running → Done (simulated).";
const COMPLETED: &str = "Completed.";

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Total simulated run time.
    pub duration: Duration,
    /// Interval between progress ticks.
    pub tick: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(9000),
            tick: Duration::from_millis(350),
        }
    }
}

impl RunnerConfig {
    /// Number of ticks a run takes (at least one).
    pub fn steps(&self) -> u32 {
        let tick = self.tick.as_millis().max(1);
        let steps = self.duration.as_millis().div_ceil(tick);
        u32::try_from(steps).unwrap_or(u32::MAX).max(1)
    }
}

/// Progress report for a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub step: u32,
    pub steps: u32,
    pub percent: u8,
    pub message: &'static str,
}

pub fn progress_percent(step: u32, steps: u32) -> u8 {
    let pct = (f64::from(step) / f64::from(steps.max(1)) * 100.0).round();
    pct.min(100.0) as u8
}

/// Message logged at a tick: a stage on even ticks, a status line on odd ones.
pub fn tick_message(step: u32) -> &'static str {
    if step % 2 == 0 && step > 0 {
        let idx = (step / 2 - 1) as usize;
        STAGES[idx.min(STAGES.len() - 1)]
    } else {
        STATUS_TICK
    }
}

/// Simulated figures for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunJobActuals {
    pub job_id: String,
    pub actual_cost_usd: f64,
    #[serde(rename = "actualCO2Kg")]
    pub actual_co2_kg: f64,
    pub actual_power_kw: f64,
    pub actual_time_hours: f64,
    pub region: String,
    pub provider: String,
    pub time_window_label: String,
    pub rationale_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub id: String,
    pub project_id: String,
    #[serde(rename = "tsISO")]
    pub issued_at: String,
    pub regime: ReportingRegime,
    pub jobs: Vec<RunJobActuals>,
    pub logs: Vec<String>,
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub record: RunRecord,
    pub scope: Scope,
    pub estimates: ProjectEstimates,
    pub plan: Vec<ExecutionPlanItem>,
}

/// What to run.
#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    pub project: &'a Project,
    pub defaults: &'a Defaults,
    pub scope: Scope,
    pub mode: CompareMode,
    pub regime: ReportingRegime,
}

/// Seed for a run's random stream.
pub fn run_seed(project_id: &str, scope: &Scope, mode: CompareMode, regime: ReportingRegime) -> u32 {
    hash32(&format!(
        "{project_id}{}{}{}",
        scope.as_str(),
        mode.as_str(),
        regime.as_str()
    ))
}

fn scaled(max: f64, factor: f64) -> f64 {
    round2(max * factor).min(max)
}

/// Derive actuals for every planned job from its estimate.
///
/// Draws three numbers per job, in plan order: a shared cost/CO2
/// fraction (0.58..0.86), a power factor (0.85..1.05) and a time factor
/// (0.72..0.94).
pub fn simulate_actuals(
    plan: &[ExecutionPlanItem],
    estimates: &ProjectEstimates,
    rng: &mut Mulberry32,
) -> Vec<RunJobActuals> {
    plan.iter()
        .filter_map(|item| {
            let Some(e) = estimates.per_job.get(&item.job_id) else {
                warn!(job = %item.job_id, "planned job has no estimate — skipping");
                return None;
            };
            let frac = rng.next_in(0.58, 0.28);
            let power = rng.next_in(0.85, 0.2);
            let time = rng.next_in(0.72, 0.22);
            Some(RunJobActuals {
                job_id: item.job_id.clone(),
                actual_cost_usd: scaled(e.max_cost_usd, frac),
                actual_co2_kg: scaled(e.max_co2_kg, frac),
                actual_power_kw: scaled(e.max_power_kw, power),
                actual_time_hours: scaled(e.max_time_hours, time),
                region: item.region.clone(),
                provider: item.provider.clone(),
                time_window_label: item.time_window_label.clone(),
                rationale_tags: item.rationale_tags.clone(),
            })
        })
        .collect()
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drives simulated runs on a tokio interval.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run the jobs in scope, reporting each tick to `on_progress`.
    pub async fn run<F>(&self, request: &RunRequest<'_>, mut on_progress: F) -> RunResult<RunOutcome>
    where
        F: FnMut(&Progress),
    {
        let project = request.project;
        let defaults = request.defaults;
        let scoped = project.scoped(&request.scope);
        if scoped.jobs.is_empty() {
            return Err(RunError::EmptyScope(request.scope.as_str().to_string()));
        }

        let estimates = estimate_project(project, &defaults.default_profile, &defaults.default_compliance);
        let plan = build_execution_plan(
            &scoped,
            &defaults.default_profile,
            &defaults.default_compliance,
            request.mode,
        );

        let seed = run_seed(&project.id, &request.scope, request.mode, request.regime);
        let mut rng = Mulberry32::new(seed);

        let steps = self.config.steps();
        info!(
            project = %project.id,
            scope = request.scope.as_str(),
            mode = %request.mode,
            jobs = scoped.jobs.len(),
            steps,
            "starting simulated run"
        );

        let mut ticker = tokio::time::interval(self.config.tick.max(Duration::from_millis(1)));
        // The first tick completes immediately.
        ticker.tick().await;
        for step in 1..=steps {
            ticker.tick().await;
            let progress = Progress {
                step,
                steps,
                percent: progress_percent(step, steps),
                message: tick_message(step),
            };
            debug!(step, percent = progress.percent, "{}", progress.message);
            on_progress(&progress);
        }

        let jobs = simulate_actuals(&plan, &estimates, &mut rng);
        let issued_at = now_iso();
        let mut logs: Vec<String> = STAGES
            .iter()
            .map(|stage| format!("[{}] {stage}", now_iso()))
            .collect();
        logs.push(format!("[{}] {COMPLETED}", now_iso()));

        let record = RunRecord {
            id: format!("run_{:08x}", hash32(&format!("{seed:08x}{issued_at}"))),
            project_id: project.id.clone(),
            issued_at,
            regime: request.regime,
            jobs,
            logs,
        };
        info!(run = %record.id, jobs = record.jobs.len(), "simulated run completed");

        Ok(RunOutcome {
            record,
            scope: request.scope.clone(),
            estimates,
            plan,
        })
    }
}
