//! Region scoring for placement decisions.
//!
//! A region's score is a weighted sum of its mocked grid intensity and
//! its mocked relative cost (scaled by 100 so both terms share a range).
//! Lower is better. Time and power weights do not differentiate pooled
//! regions, so they contribute nothing here.

use verdante_core::ObjectiveWeights;

use crate::pool::RegionCandidate;

/// Scored candidate region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionScore {
    pub code: &'static str,
    pub score: f64,
}

pub fn score_region(region: &RegionCandidate, weights: &ObjectiveWeights) -> f64 {
    region.mock_grid * weights.co2 + region.mock_cost * 100.0 * weights.cost
}

/// Score all candidates and return them best first.
///
/// The sort is stable, so equal scores keep pool order.
pub fn rank_regions(candidates: &[&RegionCandidate], weights: &ObjectiveWeights) -> Vec<RegionScore> {
    let mut scores: Vec<RegionScore> = candidates
        .iter()
        .map(|r| RegionScore {
            code: r.code,
            score: score_region(r, weights),
        })
        .collect();
    scores.sort_by(|a, b| a.score.total_cmp(&b.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::REGION_POOL;

    fn pool() -> Vec<&'static RegionCandidate> {
        REGION_POOL.iter().collect()
    }

    #[test]
    fn greenest_prefers_lowest_intensity() {
        let ranked = rank_regions(&pool(), &ObjectiveWeights::CO2_ONLY);
        let codes: Vec<_> = ranked.iter().map(|s| s.code).collect();
        assert_eq!(codes, vec!["FR", "CA", "EU", "DE"]);
        assert_eq!(ranked[0].score, 90.0);
    }

    #[test]
    fn cheapest_prefers_lowest_cost() {
        let ranked = rank_regions(&pool(), &ObjectiveWeights::COST_ONLY);
        assert_eq!(ranked[0].code, "CA");
        assert_eq!(ranked[1].code, "DE");
    }

    #[test]
    fn ties_keep_pool_order() {
        let ranked = rank_regions(&pool(), &ObjectiveWeights::TIME_ONLY);
        let codes: Vec<_> = ranked.iter().map(|s| s.code).collect();
        assert_eq!(codes, vec!["CA", "EU", "FR", "DE"]);
        assert!(ranked.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn mixed_weights() {
        let w = ObjectiveWeights::new(50.0, 30.0, 20.0, 0.0).normalized();
        let ranked = rank_regions(&pool(), &w);
        // FR: 90 * 0.5 + 112 * 0.3 = 78.6 beats CA: 70 + 30 = 100.
        assert_eq!(ranked[0].code, "FR");
        assert_eq!(ranked[1].code, "CA");
    }
}
