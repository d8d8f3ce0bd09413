//! Product recommendation scoring engine.
//!
//! Ranks a product catalog against one user's profile and existing holdings
//! using a fixed weighted composite of four terms: risk-appetite match, yield
//! attractiveness, affordability, and portfolio diversification. All inputs
//! are read-only snapshots; scoring is a total function and never fails.

use serde::{Deserialize, Serialize};

use crate::model::{Holding, Product, RiskAppetite, RiskLevel, UserProfile};

use super::reasons::recommendation_reasons;
use super::weights::{
    CROWDING_LIMIT, CROWDING_PENALTY, INCLUSION_THRESHOLD, MAX_RECOMMENDATIONS, NEW_RISK_BONUS,
    NEW_TYPE_BONUS, RISK_MATCH_ADJACENT, RISK_MATCH_DISTANT, RISK_MATCH_EXACT, ScoringWeights,
    YIELD_SATURATION_PCT,
};

/// One ranked recommendation produced fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub product: Product,
    /// Composite score in [0, 1]
    pub score: f32,
    /// `round(score * 100)`, 0-100
    pub match_percentage: u8,
    /// Up to three human-readable reasons, in fixed evaluation order
    pub reasons: Vec<String>,
}

/// Unweighted per-term scores for one candidate product.
///
/// Each term is in [0, 1]; the composite applies the weights and clamps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub risk_match: f32,
    pub yield_attractiveness: f32,
    pub affordability: f32,
    pub diversification: f32,
}

impl ScoreBreakdown {
    /// Compute all four terms for a candidate product.
    #[must_use]
    pub fn for_candidate(product: &Product, user: &UserProfile, holdings: &[Holding]) -> Self {
        Self {
            risk_match: risk_match_score(product.risk, user.risk_appetite),
            yield_attractiveness: yield_score(product.yield_pct),
            affordability: affordability_score(user.balance, product.min_investment),
            diversification: diversification_score(product, holdings),
        }
    }

    /// Weighted composite, clamped to [0, 1].
    #[must_use]
    pub fn composite(&self, weights: &ScoringWeights) -> f32 {
        let total = self.risk_match * weights.risk_match
            + self.yield_attractiveness * weights.yield_attractiveness
            + self.affordability * weights.affordability
            + self.diversification * weights.diversification;
        total.clamp(0.0, 1.0)
    }
}

/// Risk-appetite match term.
///
/// Equal ordinal ranks score full marks, adjacent ranks partial, anything
/// further the distant floor.
#[must_use]
pub fn risk_match_score(product_risk: RiskLevel, appetite: RiskAppetite) -> f32 {
    let distance = product_risk.rank().abs_diff(appetite.rank());
    match distance {
        0 => RISK_MATCH_EXACT,
        1 => RISK_MATCH_ADJACENT,
        _ => RISK_MATCH_DISTANT,
    }
}

/// Yield attractiveness term: linear up to the saturation yield, then flat.
#[must_use]
pub fn yield_score(yield_pct: f32) -> f32 {
    (yield_pct / YIELD_SATURATION_PCT).clamp(0.0, 1.0)
}

/// Affordability term: a binary gate expressed as a score.
///
/// Unaffordable products are not filtered out; they just rarely clear the
/// inclusion threshold on the strength of the other terms.
#[must_use]
pub fn affordability_score(balance: f32, min_investment: f32) -> f32 {
    if balance >= min_investment { 1.0 } else { 0.0 }
}

/// Diversification term.
///
/// An empty portfolio scores 1.0 (a first investment is maximally
/// diversifying). Otherwise: bonus for a new product type, bonus for a new
/// risk level, penalty when the portfolio is already crowded with holdings of
/// the same type and risk. Clamped to [0, 1].
#[must_use]
pub fn diversification_score(product: &Product, holdings: &[Holding]) -> f32 {
    if holdings.is_empty() {
        return 1.0;
    }

    let mut score = 0.0;

    let type_held = holdings
        .iter()
        .any(|h| h.product_type == product.product_type);
    if !type_held {
        score += NEW_TYPE_BONUS;
    }

    let risk_held = holdings.iter().any(|h| h.risk == product.risk);
    if !risk_held {
        score += NEW_RISK_BONUS;
    }

    let similar = holdings
        .iter()
        .filter(|h| h.product_type == product.product_type && h.risk == product.risk)
        .count();
    if similar > CROWDING_LIMIT {
        score -= CROWDING_PENALTY;
    }

    score.clamp(0.0, 1.0)
}

/// Recommendation scoring engine.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    weights: ScoringWeights,
}

impl RecommendationEngine {
    /// Create an engine with the default scoring weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the scoring weights
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Score one candidate product, returning the clamped composite.
    #[must_use]
    pub fn score_product(
        &self,
        product: &Product,
        user: &UserProfile,
        holdings: &[Holding],
    ) -> f32 {
        ScoreBreakdown::for_candidate(product, user, holdings).composite(&self.weights)
    }

    /// Rank a catalog against one user.
    ///
    /// Products scoring at or below the inclusion threshold are dropped;
    /// survivors are sorted by descending score (stable, so ties keep catalog
    /// order) and truncated to the top five.
    #[must_use]
    pub fn recommend(
        &self,
        catalog: &[Product],
        user: &UserProfile,
        holdings: &[Holding],
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = catalog
            .iter()
            .filter_map(|product| {
                let score = self.score_product(product, user, holdings);
                if score <= INCLUSION_THRESHOLD {
                    return None;
                }
                Some(Recommendation {
                    product: product.clone(),
                    score,
                    match_percentage: match_percentage(score),
                    reasons: recommendation_reasons(product, user, holdings),
                })
            })
            .collect();

        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            candidates = catalog.len(),
            recommended = recommendations.len(),
            "ranked product catalog"
        );

        recommendations
    }
}

/// Convert a composite score to a display percentage.
#[must_use]
pub fn match_percentage(score: f32) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
