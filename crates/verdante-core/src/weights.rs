//! Objective weight vectors.
//!
//! Raw weights come from FULL profiles on a 0..100 scale; scoring always
//! consumes the normalized form, whose components sum to 1.

use serde::{Deserialize, Serialize};

use crate::types::{LitePreset, OptimizationProfile};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    pub co2: f64,
    pub cost: f64,
    pub time: f64,
    pub power: f64,
}

impl ObjectiveWeights {
    pub const EQUAL: Self = Self::new(0.25, 0.25, 0.25, 0.25);
    pub const CO2_ONLY: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const COST_ONLY: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const TIME_ONLY: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const BALANCED: Self = Self::new(0.5, 0.3, 0.2, 0.0);

    pub const fn new(co2: f64, cost: f64, time: f64, power: f64) -> Self {
        Self { co2, cost, time, power }
    }

    /// Scale the vector so its components sum to 1.
    ///
    /// Negative and non-finite components count as 0. A vector whose
    /// sum is not positive becomes [`ObjectiveWeights::EQUAL`].
    pub fn normalized(&self) -> Self {
        let clean = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let (co2, cost, time, power) = (
            clean(self.co2),
            clean(self.cost),
            clean(self.time),
            clean(self.power),
        );
        let sum = co2 + cost + time + power;
        if !sum.is_finite() || sum <= 0.0 {
            return Self::EQUAL;
        }
        Self::new(co2 / sum, cost / sum, time / sum, power / sum)
    }

    /// Fixed vector for a LITE preset.
    pub fn for_preset(preset: LitePreset) -> Self {
        match preset {
            LitePreset::Greenest => Self::CO2_ONLY,
            LitePreset::Cheapest => Self::COST_ONLY,
            LitePreset::Fastest => Self::TIME_ONLY,
            LitePreset::Balanced => Self::BALANCED,
        }
    }

    /// Normalized weights a profile contributes to scoring.
    pub fn for_profile(profile: &OptimizationProfile) -> Self {
        match profile {
            OptimizationProfile::Lite { preset } => Self::for_preset(*preset),
            OptimizationProfile::Full(full) => full.weights.normalized(),
        }
    }

    /// CO2 weighs at least as much as cost and time.
    pub fn co2_dominant(&self) -> bool {
        self.co2 >= self.cost && self.co2 >= self.time
    }
}
