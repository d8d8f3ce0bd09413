//! Product catalog entries and their classification enums.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// Wire names match the display strings the data source uses ("Equity Fund",
/// "REIT", ...). Unknown categories decode to [`ProductType::Other`] so that
/// scoring stays total over malformed catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
#[non_exhaustive]
pub enum ProductType {
    #[serde(rename = "Equity Fund")]
    EquityFund,
    #[serde(rename = "Corporate Bond")]
    CorporateBond,
    #[serde(rename = "REIT")]
    Reit,
    #[serde(rename = "Crypto Fund")]
    CryptoFund,
    #[serde(rename = "Government Bond")]
    GovernmentBond,
    #[serde(rename = "Sector Fund")]
    SectorFund,
    /// Fallback for unrecognized category strings
    #[serde(rename = "Other")]
    Other,
}

impl ProductType {
    /// The six known categories, in the canonical order used for
    /// diversification analysis.
    pub const UNIVERSE: [Self; 6] = [
        Self::EquityFund,
        Self::CorporateBond,
        Self::Reit,
        Self::CryptoFund,
        Self::GovernmentBond,
        Self::SectorFund,
    ];

    /// Display name for this category
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EquityFund => "Equity Fund",
            Self::CorporateBond => "Corporate Bond",
            Self::Reit => "REIT",
            Self::CryptoFund => "Crypto Fund",
            Self::GovernmentBond => "Government Bond",
            Self::SectorFund => "Sector Fund",
            Self::Other => "Other",
        }
    }
}

impl From<String> for ProductType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Equity Fund" => Self::EquityFund,
            "Corporate Bond" => Self::CorporateBond,
            "REIT" => Self::Reit,
            "Crypto Fund" => Self::CryptoFund,
            "Government Bond" => Self::GovernmentBond,
            "Sector Fund" => Self::SectorFund,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Product risk level, ordered Low < Medium < High.
///
/// Unknown wire values decode to [`RiskLevel::Low`], the neutral lowest rank,
/// keeping the risk-match term total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Ordinal rank: Low=1, Medium=2, High=3
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Display name for this risk level
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// The counter-risk suggested when a portfolio is dominated by this level.
    ///
    /// A fixed rotation (High→Low, Low→Medium, Medium→High), not an
    /// optimization.
    #[must_use]
    pub const fn counterweight(&self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::Low,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable catalog entry supplied wholesale by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Annual yield in percent, non-negative
    #[serde(rename = "yield")]
    pub yield_pct: f32,
    pub risk: RiskLevel,
    /// Minimum investment amount in the account currency
    pub min_investment: f32,
    /// Investor rating, 0.0-5.0
    pub rating: f32,
    #[serde(default)]
    pub total_investors: u32,
}
