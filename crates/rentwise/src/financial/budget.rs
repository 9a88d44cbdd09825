use super::money::round2;
use serde::{Deserialize, Serialize};

/// Share of the affordable rent the upper estimate must stay under to be low risk.
const COMFORT_SHARE: f64 = 0.9;
/// Overrun, as a share of the affordable rent, still graded high rather than critical.
const OVERRUN_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// How an estimated rent range fits a household's affordable rent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCompatibility {
    pub is_affordable: bool,
    pub over_budget_amount: f64,
    pub recommended_max_rent: f64,
    pub risk_level: RiskLevel,
}

/// Compares the low end of an estimate against the affordable rent and grades
/// the risk using the high end.
pub fn evaluate_budget_compatibility(
    max_affordable_rent: f64,
    estimated_rent_min: f64,
    estimated_rent_max: f64,
) -> BudgetCompatibility {
    let is_affordable = estimated_rent_min <= max_affordable_rent;
    let over_budget_amount = (estimated_rent_min - max_affordable_rent).max(0.0);

    let risk_level = if is_affordable {
        if estimated_rent_max <= max_affordable_rent * COMFORT_SHARE {
            RiskLevel::Low
        } else {
            RiskLevel::Medium
        }
    } else if over_budget_amount <= max_affordable_rent * OVERRUN_TOLERANCE {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    };

    BudgetCompatibility {
        is_affordable,
        over_budget_amount: round2(over_budget_amount),
        recommended_max_rent: max_affordable_rent,
        risk_level,
    }
}
