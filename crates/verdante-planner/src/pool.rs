//! The fixed pool of candidate regions and the compliance filter.

use serde::Serialize;
use tracing::warn;

use verdante_core::{CompliancePolicy, PolicyType};

/// A mocked deployment region the planner can choose.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCandidate {
    pub code: &'static str,
    pub label: &'static str,
    /// Grid intensity in gCO2e/kWh (mock).
    pub mock_grid: f64,
    /// Price relative to the cheapest region (mock).
    pub mock_cost: f64,
    /// Covered by the `EU` aggregate code in policies.
    pub eu_member: bool,
}

pub const REGION_POOL: [RegionCandidate; 4] = [
    RegionCandidate { code: "CA", label: "Canada", mock_grid: 140.0, mock_cost: 1.0, eu_member: false },
    RegionCandidate { code: "EU", label: "EU (generic)", mock_grid: 260.0, mock_cost: 1.1, eu_member: false },
    RegionCandidate { code: "FR", label: "France", mock_grid: 90.0, mock_cost: 1.12, eu_member: true },
    RegionCandidate { code: "DE", label: "Germany", mock_grid: 420.0, mock_cost: 1.05, eu_member: true },
];

impl RegionCandidate {
    /// The policy names this region directly or through its EU aggregate.
    fn listed_by(&self, policy: &CompliancePolicy) -> bool {
        policy.lists(self.code) || (self.eu_member && policy.lists("EU"))
    }
}

pub fn region_allowed(policy: &CompliancePolicy, region: &RegionCandidate) -> bool {
    match policy.policy_type {
        PolicyType::Whitelist => region.listed_by(policy),
        PolicyType::Blacklist => !region.listed_by(policy),
    }
}

/// Pool regions the policy allows, in pool order.
///
/// Never empty: when the policy excludes every region the whole pool is
/// returned instead.
pub fn compliant_candidates(policy: &CompliancePolicy) -> Vec<&'static RegionCandidate> {
    let allowed: Vec<_> = REGION_POOL
        .iter()
        .filter(|r| region_allowed(policy, r))
        .collect();
    if allowed.is_empty() {
        warn!(
            policy = ?policy.policy_type,
            regions = ?policy.regions,
            "no pooled region satisfies the compliance policy — considering the full pool"
        );
        return REGION_POOL.iter().collect();
    }
    allowed
}
