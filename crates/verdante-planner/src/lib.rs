//! Verdante planner — region and provider selection per job.
//!
//! This crate does not run anything. It filters a fixed pool of mocked
//! regions by compliance policy, scores the survivors, and produces one
//! plan entry per job for the caller to display or simulate.
//!
//! # Components
//!
//! - **`pool`** — Region pool and compliance filter
//! - **`scorer`** — Weighted region scoring
//! - **`planner`** — Execution plan assembly (region, provider, window, tags)

pub mod planner;
pub mod pool;
pub mod scorer;

pub use planner::{build_execution_plan, plan_weights, provider_for, rationale_tags, time_window_label};
pub use pool::{REGION_POOL, RegionCandidate, compliant_candidates, region_allowed};
pub use scorer::{RegionScore, rank_regions, score_region};
