//! Debt-to-income analysis and the affordability policy behind it.

use super::money::{round2, round_percentage};
use serde::{Deserialize, Serialize};

/// Share of monthly income treated as the ceiling for rent plus debt.
pub const AFFORDABILITY_CEILING: f64 = 0.40;

/// Upper bounds (exclusive, in percent) of the excellent, good and elevated bands.
pub const RATIO_THRESHOLDS: RatioThresholds = RatioThresholds {
    excellent_below: 30.0,
    good_below: 40.0,
    elevated_below: 50.0,
};

/// Width in percentage points of the critical band on the gauge.
const CRITICAL_GAUGE_SPAN: f64 = 20.0;

/// Qualitative verdict on a debt-to-income ratio, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    Excellent,
    Good,
    Elevated,
    Critical,
}

impl RatioCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Excellent, Self::Good, Self::Elevated, Self::Critical]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Bon",
            Self::Elevated => "Élevé",
            Self::Critical => "Critique",
        }
    }

    /// 0 for excellent up to 3 for critical.
    pub const fn severity(self) -> u8 {
        match self {
            Self::Excellent => 0,
            Self::Good => 1,
            Self::Elevated => 2,
            Self::Critical => 3,
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::Excellent => {
                "Excellente marge de manœuvre financière. Capacité d'épargne pour une mise de fonds."
            }
            Self::Good => "Loyer acceptable, mais espace d'épargne plus restreint.",
            Self::Elevated => "Risqué - trop grande part du revenu allouée au logement.",
            Self::Critical => "Problématique - risque de non-paiement, aucune capacité d'épargne.",
        }
    }
}

/// Category boundaries in percent. A ratio equal to a bound lands in the next band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioThresholds {
    pub excellent_below: f64,
    pub good_below: f64,
    pub elevated_below: f64,
}

impl RatioThresholds {
    pub fn categorize(&self, ratio: f64) -> RatioCategory {
        if ratio < self.excellent_below {
            RatioCategory::Excellent
        } else if ratio < self.good_below {
            RatioCategory::Good
        } else if ratio < self.elevated_below {
            RatioCategory::Elevated
        } else {
            RatioCategory::Critical
        }
    }

    /// Position of `ratio` on a 0..=100 gauge where each band owns a quarter,
    /// excellent on the right.
    pub fn gauge_position(&self, ratio: f64) -> f64 {
        let position = match self.categorize(ratio) {
            RatioCategory::Excellent => {
                75.0 + (self.excellent_below - ratio) / self.excellent_below * 25.0
            }
            RatioCategory::Good => {
                50.0 + (self.good_below - ratio) / (self.good_below - self.excellent_below) * 25.0
            }
            RatioCategory::Elevated => {
                25.0 + (self.elevated_below - ratio) / (self.elevated_below - self.good_below)
                    * 25.0
            }
            RatioCategory::Critical => {
                25.0 - (ratio - self.elevated_below) / CRITICAL_GAUGE_SPAN * 25.0
            }
        };

        position.clamp(0.0, 100.0)
    }

    fn is_ordered(&self) -> bool {
        0.0 < self.excellent_below
            && self.excellent_below < self.good_below
            && self.good_below < self.elevated_below
    }
}

impl Default for RatioThresholds {
    fn default() -> Self {
        RATIO_THRESHOLDS
    }
}

/// Outcome of a debt-to-income analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioAnalysis {
    pub ratio: f64,
    pub category: RatioCategory,
    pub max_affordable_rent: f64,
}

impl RatioAnalysis {
    const fn degenerate() -> Self {
        Self {
            ratio: 0.0,
            category: RatioCategory::Critical,
            max_affordable_rent: 0.0,
        }
    }
}

/// Ceiling and band thresholds applied by the ratio analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityPolicy {
    pub ceiling: f64,
    pub thresholds: RatioThresholds,
}

impl Default for AffordabilityPolicy {
    fn default() -> Self {
        Self {
            ceiling: AFFORDABILITY_CEILING,
            thresholds: RATIO_THRESHOLDS,
        }
    }
}

impl AffordabilityPolicy {
    pub fn new(ceiling: f64, thresholds: RatioThresholds) -> Result<Self, PolicyError> {
        if !(ceiling > 0.0 && ceiling <= 1.0) {
            return Err(PolicyError::InvalidCeiling(ceiling));
        }
        if !thresholds.is_ordered() {
            return Err(PolicyError::UnorderedThresholds(thresholds));
        }

        Ok(Self {
            ceiling,
            thresholds,
        })
    }

    pub fn with_ceiling(ceiling: f64) -> Result<Self, PolicyError> {
        Self::new(ceiling, RATIO_THRESHOLDS)
    }

    /// Ratio of debts (plus `proposed_rent` when given) to income.
    ///
    /// Income at or below zero yields a zero ratio, a critical verdict and no
    /// affordable rent.
    pub fn analyze(
        &self,
        monthly_income: f64,
        total_monthly_debts: f64,
        proposed_rent: Option<f64>,
    ) -> RatioAnalysis {
        if monthly_income <= 0.0 {
            return RatioAnalysis::degenerate();
        }

        let max_affordable_rent =
            round2(monthly_income * self.ceiling - total_monthly_debts).max(0.0);

        let obligations = match proposed_rent {
            Some(rent) => rent + total_monthly_debts,
            None => total_monthly_debts,
        };
        let ratio = round_percentage(obligations / monthly_income);

        RatioAnalysis {
            ratio,
            category: self.thresholds.categorize(ratio),
            max_affordable_rent,
        }
    }
}

/// Rejected affordability policy parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("affordability ceiling must be within (0, 1], got {0}")]
    InvalidCeiling(f64),
    #[error("ratio thresholds must be positive and strictly increasing, got {0:?}")]
    UnorderedThresholds(RatioThresholds),
}

/// Analyzes a debt-to-income ratio under the default policy.
pub fn analyze_debt_ratio(
    monthly_income: f64,
    total_monthly_debts: f64,
    proposed_rent: Option<f64>,
) -> RatioAnalysis {
    AffordabilityPolicy::default().analyze(monthly_income, total_monthly_debts, proposed_rent)
}
