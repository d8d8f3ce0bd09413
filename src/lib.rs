//! **Scoring engines for an investment platform: product recommendations,
//! portfolio insights, and password strength.**
//!
//! `advisor-tools` packages the two scoring components of the platform as
//! pure, synchronous functions over caller-owned snapshots. There is no I/O,
//! persistence, or shared state inside either engine; every call is
//! independent and safe to run concurrently. The crate powers both a small
//! CLI and programmatic use as a library.
//!
//! ## Core modules
//!
//! - **[`model`]**: The input records — [`Product`] catalog entries,
//!   [`UserProfile`] snapshots, [`Holding`] projections — plus the JSON
//!   snapshot loader the CLI uses. Unknown classification strings decode to
//!   neutral fallbacks so every operation stays total.
//! - **[`recommend`]**: The [`RecommendationEngine`], which ranks a catalog
//!   with a fixed weighted composite (risk match, yield, affordability,
//!   diversification), plus the portfolio insight analyzers and product
//!   description templates.
//! - **[`password`]**: The strength analyzer (0-5 score, label, ordered
//!   suggestions) and the composition-guaranteed password generator with an
//!   injectable RNG.
//!
//! ## Scoring a catalog
//!
//! ```
//! use advisor_tools::model::{Product, ProductType, RiskAppetite, RiskLevel, UserProfile};
//! use advisor_tools::recommend::RecommendationEngine;
//!
//! let catalog = vec![Product {
//!     id: "reit-1".into(),
//!     name: "Prime REIT".into(),
//!     product_type: ProductType::Reit,
//!     yield_pct: 9.8,
//!     risk: RiskLevel::Medium,
//!     min_investment: 2500.0,
//!     rating: 4.7,
//!     total_investors: 1200,
//! }];
//! let user = UserProfile {
//!     risk_appetite: RiskAppetite::Moderate,
//!     balance: 5000.0,
//!     total_investments: 0,
//!     portfolio_value: 0.0,
//!     average_return: 0.0,
//! };
//!
//! let engine = RecommendationEngine::new();
//! let recommendations = engine.recommend(&catalog, &user, &[]);
//! assert_eq!(recommendations[0].match_percentage, 87);
//! ```
//!
//! ## Checking a password
//!
//! ```
//! use advisor_tools::password::analyze_password;
//!
//! let assessment = analyze_password("Tr0ub4dor&3XQ", None);
//! assert!(assessment.is_strong);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize↔f32 casts are pervasive in the scoring math — all
    // values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod cli;
pub mod error;
pub mod model;
pub mod password;
pub mod recommend;

// Re-export main types for convenience
pub use error::{AdvisorError, ErrorContext, Result};
pub use model::{
    Holding, PortfolioSnapshot, Product, ProductType, RiskAppetite, RiskLevel, UserProfile,
};
pub use password::{analyze_password, generate_password, Identity, PasswordAssessment};
pub use recommend::{
    derive_portfolio_insights, describe_product, PortfolioInsight, Recommendation,
    RecommendationEngine,
};
