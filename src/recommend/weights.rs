//! Scoring policy tables for the recommendation engine.
//!
//! Every weight and tier threshold the engine uses is named here so the
//! scoring policy stays auditable and testable per term.

/// Products scoring at or below this composite are never recommended
pub const INCLUSION_THRESHOLD: f32 = 0.30;

/// At most this many recommendations survive ranking
pub const MAX_RECOMMENDATIONS: usize = 5;

/// At most this many reasons accompany a recommendation
pub const MAX_REASONS: usize = 3;

/// Yield at which the attractiveness term saturates at 1.0.
///
/// Caps runaway influence from an outlier high-yield product.
pub const YIELD_SATURATION_PCT: f32 = 20.0;

// Risk-appetite match tiers, by ordinal rank distance
pub const RISK_MATCH_EXACT: f32 = 1.0;
pub const RISK_MATCH_ADJACENT: f32 = 0.7;
pub const RISK_MATCH_DISTANT: f32 = 0.3;

// Diversification term adjustments, clamped to [0, 1] after summing
pub const NEW_TYPE_BONUS: f32 = 0.5;
pub const NEW_RISK_BONUS: f32 = 0.3;
pub const CROWDING_PENALTY: f32 = 0.4;
/// More than this many holdings sharing both type and risk triggers the
/// crowding penalty
pub const CROWDING_LIMIT: usize = 2;

// Reason tier thresholds
pub const RISK_REASON_PERFECT: f32 = 0.8;
pub const RISK_REASON_GOOD: f32 = 0.6;
pub const YIELD_REASON_HIGH: f32 = 12.0;
pub const YIELD_REASON_ATTRACTIVE: f32 = 8.0;
pub const DIVERSIFICATION_REASON: f32 = 0.7;
pub const RATING_REASON_TOP: f32 = 4.5;
pub const RATING_REASON_GOOD: f32 = 4.0;

/// Weights for the composite score (sum to 1.0)
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub risk_match: f32,
    pub yield_attractiveness: f32,
    pub affordability: f32,
    pub diversification: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            risk_match: 0.40,
            yield_attractiveness: 0.25,
            affordability: 0.20,
            diversification: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        let total = w.risk_match + w.yield_attractiveness + w.affordability + w.diversification;
        assert!((total - 1.0).abs() < 1e-6, "weights sum to {total}");
    }
}
