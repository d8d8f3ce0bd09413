//! Portfolio snapshot loading.
//!
//! The CLI consumes one JSON document holding the user profile, existing
//! holdings, and the candidate product catalog. The library API takes the
//! pieces separately; this module is the file-format boundary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, ErrorContext, Result};

use super::{Holding, Product, UserProfile};

/// One caller-supplied snapshot of domain data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub user: UserProfile,
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Parse a snapshot from a JSON string.
pub fn parse_snapshot_str(content: &str) -> Result<PortfolioSnapshot> {
    serde_json::from_str(content).context("parsing portfolio snapshot")
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<PortfolioSnapshot> {
    let content = fs::read_to_string(path).map_err(|e| AdvisorError::io(path, e))?;
    parse_snapshot_str(&content)
        .with_context(|| format!("loading snapshot from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductType, RiskAppetite};

    #[test]
    fn test_parse_minimal_snapshot() {
        let json = r#"{"user": {"riskAppetite": "Aggressive", "balance": 10000}}"#;
        let snapshot = parse_snapshot_str(json).unwrap();
        assert_eq!(snapshot.user.risk_appetite, RiskAppetite::Aggressive);
        assert!(snapshot.holdings.is_empty());
        assert!(snapshot.products.is_empty());
    }

    #[test]
    fn test_parse_full_snapshot() {
        let json = r#"{
            "user": {"riskAppetite": "Moderate", "balance": 5000, "averageReturn": 6.2},
            "holdings": [{"type": "REIT", "risk": "Medium"}],
            "products": [{
                "id": "p1", "name": "Prime REIT", "type": "REIT", "yield": 9.8,
                "risk": "Medium", "minInvestment": 2500, "rating": 4.7
            }]
        }"#;
        let snapshot = parse_snapshot_str(json).unwrap();
        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.products[0].product_type, ProductType::Reit);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_snapshot_str("{not json").unwrap_err();
        assert!(err.to_string().contains("snapshot"));
    }
}
