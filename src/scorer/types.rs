use crate::config::ScoringWeights;
use serde::{Deserialize, Serialize};

/// Raw totals of a layout, independent of the objective weights.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub build_rate: f64,
    pub exp_bonus: f64,
    /// After the shop multiplier.
    pub flaggy_rate: f64,
    pub flag_boost: f64,
}

impl Metrics {
    pub fn weighted(&self, weights: &ScoringWeights) -> ScoreBreakdown {
        ScoreBreakdown {
            build_rate: self.build_rate,
            exp_bonus: self.exp_bonus,
            flaggy_rate: self.flaggy_rate,
            flag_boost: self.flag_boost,
            total: weights.build_rate * self.build_rate
                + weights.exp_bonus * self.exp_bonus
                + weights.flaggy_rate * self.flaggy_rate,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub build_rate: f64,
    pub exp_bonus: f64,
    pub flaggy_rate: f64,
    // Reported only; not part of the weighted total.
    pub flag_boost: f64,
    pub total: f64,
}
