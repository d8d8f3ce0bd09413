//! Product recommendation and portfolio insight engines.
//!
//! Both engines are pure functions over caller-owned snapshots: the
//! recommendation scorer ranks a catalog with a fixed weighted composite, and
//! the insight analyzers emit qualitative observations about a portfolio.
//!
//! # Usage
//!
//! ```no_run
//! use advisor_tools::model::load_snapshot;
//! use advisor_tools::recommend::{derive_portfolio_insights, RecommendationEngine};
//! use std::path::Path;
//!
//! let snapshot = load_snapshot(Path::new("portfolio.json")).unwrap();
//! let engine = RecommendationEngine::new();
//!
//! for rec in engine.recommend(&snapshot.products, &snapshot.user, &snapshot.holdings) {
//!     println!("{}% {}", rec.match_percentage, rec.product.name);
//! }
//! for insight in derive_portfolio_insights(&snapshot.user, &snapshot.holdings) {
//!     println!("[{}] {}", insight.severity.name(), insight.title);
//! }
//! ```

mod insights;
mod reasons;
mod scorer;
mod weights;

pub use insights::{derive_portfolio_insights, InsightKind, PortfolioInsight, Severity};
pub use reasons::{describe_product, recommendation_reasons};
pub use scorer::{
    affordability_score, diversification_score, match_percentage, risk_match_score, yield_score,
    Recommendation, RecommendationEngine, ScoreBreakdown,
};
pub use weights::{ScoringWeights, INCLUSION_THRESHOLD, MAX_RECOMMENDATIONS};
