//! User profile and holding projections.

use serde::{Deserialize, Serialize};

use super::{ProductType, RiskLevel};

/// User risk appetite, on the same ordinal scale as [`RiskLevel`].
///
/// Unknown wire values decode to [`RiskAppetite::Conservative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum RiskAppetite {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskAppetite {
    /// Ordinal rank: Conservative=1, Moderate=2, Aggressive=3
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Conservative => 1,
            Self::Moderate => 2,
            Self::Aggressive => 3,
        }
    }

    /// Display name for this appetite
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }
}

impl From<String> for RiskAppetite {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Moderate" => Self::Moderate,
            "Aggressive" => Self::Aggressive,
            _ => Self::Conservative,
        }
    }
}

impl std::fmt::Display for RiskAppetite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One user's account snapshot. Never mutated by the engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub risk_appetite: RiskAppetite,
    /// Available balance in the account currency, non-negative
    pub balance: f32,
    #[serde(default)]
    pub total_investments: u32,
    #[serde(default)]
    pub portfolio_value: f32,
    /// Average annual return in percent; may be negative
    #[serde(default)]
    pub average_return: f32,
}

/// Minimal projection of an existing investment.
///
/// Only the fields diversification scoring inspects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub risk: RiskLevel,
}
