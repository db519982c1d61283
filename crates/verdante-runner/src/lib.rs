//! verdante-runner — simulated runs over an execution plan.
//!
//! Nothing is actually scheduled. A run replays the estimator and the
//! planner for the jobs in scope, ticks through fixed progress stages,
//! and derives reproducible "actual" figures from a seed built from the
//! run's inputs.
//!
//! # Actuals
//!
//! ```text
//! seed  = fnv1a32(project_id + scope + compare_mode + regime)
//! frac  = 0.58 + r * 0.28         // cost and CO2
//! power = 0.85 + r * 0.20
//! time  = 0.72 + r * 0.22
//! actual = min(round2(max * factor), max)
//! ```

pub mod error;
pub mod receipt;
pub mod rng;
pub mod simulate;

pub use error::{RunError, RunResult};
pub use receipt::{ActualTotals, LineItem, Receipt, ReceiptPayload};
pub use rng::{Mulberry32, hash32};
pub use simulate::{
    Progress, RunJobActuals, RunOutcome, RunRecord, RunRequest, Runner, RunnerConfig,
    simulate_actuals,
};
