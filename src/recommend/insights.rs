//! Qualitative portfolio insights.
//!
//! Four independent checks over the user's holdings and performance figures.
//! Each check that fires emits one insight; the emission order is fixed and
//! no ranking or truncation is applied.

use serde::{Deserialize, Serialize};

use crate::model::{Holding, ProductType, RiskLevel, UserProfile};

/// Dominant risk fraction above which a distribution insight fires
const DOMINANT_RISK_WARN: f32 = 0.6;
/// Dominant risk fraction above which the insight is high severity
const DOMINANT_RISK_SEVERE: f32 = 0.8;
/// Type-coverage score below which a diversification insight fires
const DIVERSIFICATION_WARN: f32 = 0.6;
/// Type-coverage score below which the insight is high severity
const DIVERSIFICATION_SEVERE: f32 = 0.3;
/// Missing categories listed in a diversification insight
const MAX_MISSING_LISTED: usize = 3;
/// Average return below which performance needs a strategy review
const RETURN_FLOOR_PCT: f32 = 3.0;
/// Average return below which performance warrants rebalancing
const RETURN_MARKET_PCT: f32 = 5.0;
/// Holding count above which the generic rebalancing reminder fires
const REBALANCE_HOLDING_COUNT: usize = 3;

/// Insight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum InsightKind {
    RiskDistribution,
    Diversification,
    Performance,
    Rebalancing,
}

/// Insight severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Display name for this severity
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One qualitative observation about a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInsight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

/// Evaluate all four checks against one portfolio snapshot.
///
/// Emission order is fixed: risk distribution, diversification, performance,
/// rebalancing. Zero to four insights are returned.
#[must_use]
pub fn derive_portfolio_insights(user: &UserProfile, holdings: &[Holding]) -> Vec<PortfolioInsight> {
    let mut insights = Vec::new();

    if let Some(insight) = risk_distribution_insight(holdings) {
        insights.push(insight);
    }
    if let Some(insight) = diversification_insight(holdings) {
        insights.push(insight);
    }
    if let Some(insight) = performance_insight(user) {
        insights.push(insight);
    }
    if holdings.len() > REBALANCE_HOLDING_COUNT {
        insights.push(rebalancing_reminder());
    }

    tracing::debug!(holdings = holdings.len(), emitted = insights.len(), "derived insights");

    insights
}

/// Fraction of holdings at each risk level; the dominant level drives the
/// distribution check.
fn dominant_risk(holdings: &[Holding]) -> Option<(RiskLevel, f32)> {
    if holdings.is_empty() {
        return None;
    }

    let total = holdings.len() as f32;
    [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
        .into_iter()
        .map(|level| {
            let count = holdings.iter().filter(|h| h.risk == level).count();
            (level, count as f32 / total)
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

fn risk_distribution_insight(holdings: &[Holding]) -> Option<PortfolioInsight> {
    let (dominant, fraction) = dominant_risk(holdings)?;
    if fraction <= DOMINANT_RISK_WARN {
        return None;
    }

    let severity = if fraction > DOMINANT_RISK_SEVERE {
        Severity::High
    } else {
        Severity::Medium
    };
    let counter = dominant.counterweight();

    Some(PortfolioInsight {
        kind: InsightKind::RiskDistribution,
        title: "Risk Distribution Imbalance".to_string(),
        description: format!(
            "Your portfolio is {dominant} heavy. Consider diversifying risk levels."
        ),
        severity,
        recommendations: vec![
            format!("Add more {counter} risk investments"),
            format!("Consider reducing {dominant} risk exposure"),
            "Aim for a balanced risk distribution".to_string(),
        ],
    })
}

/// Type coverage over the fixed six-category universe.
///
/// Returns the coverage score and the missing categories in canonical order.
fn type_coverage(holdings: &[Holding]) -> (f32, Vec<ProductType>) {
    let missing: Vec<ProductType> = ProductType::UNIVERSE
        .into_iter()
        .filter(|ty| !holdings.iter().any(|h| h.product_type == *ty))
        .collect();

    let score = 1.0 - (missing.len() as f32 / ProductType::UNIVERSE.len() as f32);
    (score, missing)
}

fn diversification_insight(holdings: &[Holding]) -> Option<PortfolioInsight> {
    let (score, missing) = type_coverage(holdings);
    if score >= DIVERSIFICATION_WARN {
        return None;
    }

    let severity = if score < DIVERSIFICATION_SEVERE {
        Severity::High
    } else {
        Severity::Medium
    };
    let listed: Vec<&str> = missing
        .iter()
        .take(MAX_MISSING_LISTED)
        .map(ProductType::name)
        .collect();
    let first_missing = listed.first().copied().unwrap_or("new asset class");

    Some(PortfolioInsight {
        kind: InsightKind::Diversification,
        title: "Portfolio Diversification".to_string(),
        description: format!(
            "Your portfolio lacks diversification across {}.",
            listed.join(", ")
        ),
        severity,
        recommendations: vec![
            format!("Consider adding {first_missing} investments"),
            "Diversify across different asset classes".to_string(),
            "Balance between growth and income investments".to_string(),
        ],
    })
}

fn performance_insight(user: &UserProfile) -> Option<PortfolioInsight> {
    if user.average_return < RETURN_FLOOR_PCT {
        Some(PortfolioInsight {
            kind: InsightKind::Performance,
            title: "Performance Optimization".to_string(),
            description: "Your portfolio is underperforming with very low returns.".to_string(),
            severity: Severity::High,
            recommendations: vec![
                "Consider higher-yield investment options".to_string(),
                "Review your current investment strategy".to_string(),
                "Consult with a financial advisor".to_string(),
            ],
        })
    } else if user.average_return < RETURN_MARKET_PCT {
        Some(PortfolioInsight {
            kind: InsightKind::Performance,
            title: "Performance Optimization".to_string(),
            description: "Your portfolio returns are below market average.".to_string(),
            severity: Severity::Medium,
            recommendations: vec![
                "Diversify into growth-oriented investments".to_string(),
                "Consider rebalancing your portfolio".to_string(),
                "Review investment fees and costs".to_string(),
            ],
        })
    } else {
        None
    }
}

/// Fires purely on holding count; there is no failure condition.
fn rebalancing_reminder() -> PortfolioInsight {
    PortfolioInsight {
        kind: InsightKind::Rebalancing,
        title: "Portfolio Rebalancing".to_string(),
        description: "Your portfolio may benefit from rebalancing to maintain target allocation."
            .to_string(),
        severity: Severity::Low,
        recommendations: vec![
            "Review your investment allocation quarterly".to_string(),
            "Consider automatic rebalancing features".to_string(),
            "Adjust based on market conditions".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskAppetite;

    fn holding(ty: ProductType, risk: RiskLevel) -> Holding {
        Holding {
            product_type: ty,
            risk,
        }
    }

    fn user_with_return(average_return: f32) -> UserProfile {
        UserProfile {
            risk_appetite: RiskAppetite::Moderate,
            balance: 10_000.0,
            total_investments: 4,
            portfolio_value: 12_000.0,
            average_return,
        }
    }

    #[test]
    fn test_dominant_risk_fraction() {
        let holdings = [
            holding(ProductType::EquityFund, RiskLevel::High),
            holding(ProductType::Reit, RiskLevel::High),
            holding(ProductType::CorporateBond, RiskLevel::Low),
        ];
        let (level, fraction) = dominant_risk(&holdings).unwrap();
        assert_eq!(level, RiskLevel::High);
        assert!((fraction - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_risk_distribution_severity_tiers() {
        // 3/4 high risk: above warn, below severe -> Medium
        let mostly_high = [
            holding(ProductType::EquityFund, RiskLevel::High),
            holding(ProductType::Reit, RiskLevel::High),
            holding(ProductType::CryptoFund, RiskLevel::High),
            holding(ProductType::CorporateBond, RiskLevel::Low),
        ];
        let insight = risk_distribution_insight(&mostly_high).unwrap();
        assert_eq!(insight.severity, Severity::Medium);
        assert!(insight.description.contains("High heavy"));
        assert!(insight.recommendations[0].contains("Low risk"));

        // All high risk -> High severity
        let all_high = [
            holding(ProductType::EquityFund, RiskLevel::High),
            holding(ProductType::Reit, RiskLevel::High),
        ];
        let insight = risk_distribution_insight(&all_high).unwrap();
        assert_eq!(insight.severity, Severity::High);
    }

    #[test]
    fn test_balanced_portfolio_emits_no_distribution_insight() {
        let balanced = [
            holding(ProductType::EquityFund, RiskLevel::High),
            holding(ProductType::Reit, RiskLevel::Medium),
            holding(ProductType::CorporateBond, RiskLevel::Low),
        ];
        assert!(risk_distribution_insight(&balanced).is_none());
    }

    #[test]
    fn test_type_coverage_score() {
        let holdings = [
            holding(ProductType::EquityFund, RiskLevel::Medium),
            holding(ProductType::Reit, RiskLevel::Medium),
        ];
        let (score, missing) = type_coverage(&holdings);
        assert!((score - (1.0 - 4.0 / 6.0)).abs() < 1e-6);
        assert_eq!(missing.len(), 4);
        assert!(!missing.contains(&ProductType::Reit));
    }

    #[test]
    fn test_diversification_insight_lists_three_missing() {
        let holdings = [holding(ProductType::EquityFund, RiskLevel::Medium)];
        let insight = diversification_insight(&holdings).unwrap();
        assert_eq!(insight.severity, Severity::High);
        assert!(insight.description.contains("Corporate Bond, REIT, Crypto Fund"));
        assert!(insight.recommendations[0].contains("Corporate Bond"));
    }

    #[test]
    fn test_empty_holdings_diversification_fires() {
        // No coverage at all: score 0, highest severity
        let insight = diversification_insight(&[]).unwrap();
        assert_eq!(insight.severity, Severity::High);
    }

    #[test]
    fn test_performance_tiers() {
        assert_eq!(
            performance_insight(&user_with_return(1.5)).unwrap().severity,
            Severity::High
        );
        assert_eq!(
            performance_insight(&user_with_return(4.0)).unwrap().severity,
            Severity::Medium
        );
        assert!(performance_insight(&user_with_return(6.5)).is_none());
    }

    #[test]
    fn test_rebalancing_fires_on_holding_count_alone() {
        let holdings = vec![holding(ProductType::EquityFund, RiskLevel::Medium); 4];
        let insights = derive_portfolio_insights(&user_with_return(8.0), &holdings);
        assert!(
            insights
                .iter()
                .any(|i| i.kind == InsightKind::Rebalancing && i.severity == Severity::Low)
        );

        let few = vec![holding(ProductType::EquityFund, RiskLevel::Medium); 3];
        let insights = derive_portfolio_insights(&user_with_return(8.0), &few);
        assert!(!insights.iter().any(|i| i.kind == InsightKind::Rebalancing));
    }

    #[test]
    fn test_emission_order_is_fixed() {
        // Portfolio that trips all four checks
        let holdings = vec![holding(ProductType::EquityFund, RiskLevel::High); 4];
        let insights = derive_portfolio_insights(&user_with_return(2.0), &holdings);
        let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::RiskDistribution,
                InsightKind::Diversification,
                InsightKind::Performance,
                InsightKind::Rebalancing,
            ]
        );
    }
}
