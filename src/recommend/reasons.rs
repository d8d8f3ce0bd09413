//! Human-readable reason and description text.
//!
//! Reasons are advisory strings attached to a recommendation; they re-derive
//! the same term scores the engine uses and never feed back into ranking.

use crate::model::{Holding, Product, ProductType, UserProfile};

use super::scorer::{diversification_score, risk_match_score};
use super::weights::{
    DIVERSIFICATION_REASON, MAX_REASONS, RATING_REASON_GOOD, RATING_REASON_TOP, RISK_REASON_GOOD,
    RISK_REASON_PERFECT, YIELD_REASON_ATTRACTIVE, YIELD_REASON_HIGH,
};

/// Generate up to three reasons for recommending a product.
///
/// Candidate sentences are evaluated in a fixed order (risk tier, yield tier,
/// affordability tier, diversification, per-type sentence, rating tier) and
/// the first three that fire are kept.
#[must_use]
pub fn recommendation_reasons(
    product: &Product,
    user: &UserProfile,
    holdings: &[Holding],
) -> Vec<String> {
    let mut reasons = Vec::new();

    let risk_match = risk_match_score(product.risk, user.risk_appetite);
    if risk_match > RISK_REASON_PERFECT {
        reasons.push(format!(
            "Perfect match for your {} risk appetite",
            user.risk_appetite.name().to_lowercase()
        ));
    } else if risk_match > RISK_REASON_GOOD {
        reasons.push("Good fit for your risk tolerance".to_string());
    }

    if product.yield_pct > YIELD_REASON_HIGH {
        reasons.push(format!("High potential returns ({}%)", product.yield_pct));
    } else if product.yield_pct > YIELD_REASON_ATTRACTIVE {
        reasons.push(format!("Attractive returns ({}%)", product.yield_pct));
    }

    if user.balance >= product.min_investment * 2.0 {
        reasons.push("Well within your investment capacity".to_string());
    } else if user.balance >= product.min_investment {
        reasons.push("Affordable with your current balance".to_string());
    }

    if diversification_score(product, holdings) > DIVERSIFICATION_REASON {
        reasons.push("Adds diversification to your portfolio".to_string());
    }

    if let Some(sentence) = type_reason(product.product_type) {
        reasons.push(sentence.to_string());
    }

    if product.rating > RATING_REASON_TOP {
        reasons.push(format!("Highly rated by investors ({}/5)", product.rating));
    } else if product.rating > RATING_REASON_GOOD {
        reasons.push("Well-rated investment option".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Fixed per-category sentence; unknown categories have none.
const fn type_reason(product_type: ProductType) -> Option<&'static str> {
    match product_type {
        ProductType::EquityFund => Some("Growth potential in equity markets"),
        ProductType::CorporateBond => Some("Stable fixed-income returns"),
        ProductType::Reit => Some("Real estate exposure with liquidity"),
        ProductType::CryptoFund => Some("Digital asset diversification"),
        ProductType::GovernmentBond => Some("Government-backed income stability"),
        ProductType::SectorFund => Some("Targeted exposure to growth sectors"),
        ProductType::Other => None,
    }
}

/// Render the full marketing description for a product.
///
/// Six fixed templates keyed by category, interpolating yield and risk;
/// unknown categories fall back to a generic template. Pure formatting.
#[must_use]
pub fn describe_product(product: &Product) -> String {
    let yield_pct = product.yield_pct;
    let risk = product.risk.name().to_lowercase();

    match product.product_type {
        ProductType::EquityFund => format!(
            "A professionally managed equity fund focusing on {risk}-risk investments with \
             potential for {yield_pct}% annual returns. This fund provides exposure to carefully \
             selected stocks across various sectors, managed by experienced fund managers with a \
             proven track record."
        ),
        ProductType::CorporateBond => format!(
            "A fixed-income investment offering {yield_pct}% annual yield with {risk} risk \
             profile. This corporate bond provides stable returns through regular interest \
             payments and capital preservation, making it suitable for conservative investors \
             seeking predictable income."
        ),
        ProductType::Reit => format!(
            "A Real Estate Investment Trust providing exposure to commercial real estate with \
             {yield_pct}% expected returns. This REIT offers the benefits of real estate \
             investment with added liquidity, professional management, and regular dividend \
             distributions."
        ),
        ProductType::CryptoFund => format!(
            "A diversified cryptocurrency fund targeting {yield_pct}% returns through strategic \
             allocation across major digital assets. This fund provides exposure to the crypto \
             market while managing risk through professional portfolio management and advanced \
             risk controls."
        ),
        ProductType::GovernmentBond => format!(
            "A government-backed security offering {yield_pct}% yield with minimal risk. This \
             investment provides capital preservation and regular income through \
             government-guaranteed returns, making it ideal for risk-averse investors."
        ),
        ProductType::SectorFund => format!(
            "A specialized sector fund focusing on specific industry segments with {yield_pct}% \
             potential returns. This fund provides targeted exposure to high-growth sectors \
             while maintaining a {risk}-risk investment profile."
        ),
        ProductType::Other => format!(
            "An investment product offering {yield_pct}% returns with {risk} risk profile."
        ),
    }
}
