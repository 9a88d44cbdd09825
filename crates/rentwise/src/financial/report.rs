use super::budget::{evaluate_budget_compatibility, BudgetCompatibility};
use super::debts::{calculate_monthly_debts, DebtCalculation};
use super::estimation::{calculate_rental_estimation, RentalEstimation, DEFAULT_INSURANCE};
use super::features::PropertyFeatures;
use super::household::DebtSource;
use super::property::PropertyData;
use super::ratio::{AffordabilityPolicy, RatioAnalysis};
use serde::{Deserialize, Serialize};

/// Household and property inputs with every figure derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport<F> {
    pub personal_finances: F,
    pub property_data: PropertyData,
    pub property_features: PropertyFeatures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_rent: Option<f64>,
    pub debt_calculation: DebtCalculation,
    pub ratio_analysis: RatioAnalysis,
    pub rental_estimation: RentalEstimation,
    pub budget_compatibility: BudgetCompatibility,
}

impl<F: DebtSource + Clone> FinancialReport<F> {
    /// Runs debts, ratio, estimation and compatibility under the given policy
    /// and insurance figure.
    pub fn build(
        policy: &AffordabilityPolicy,
        insurance: f64,
        finances: &F,
        property: &PropertyData,
        features: &PropertyFeatures,
        proposed_rent: Option<f64>,
    ) -> Self {
        let debt_calculation = calculate_monthly_debts(finances);
        let ratio_analysis = policy.analyze(
            finances.monthly_income(),
            debt_calculation.total_monthly_debts,
            proposed_rent,
        );
        let rental_estimation = calculate_rental_estimation(property, features, insurance);
        let budget_compatibility = evaluate_budget_compatibility(
            ratio_analysis.max_affordable_rent,
            rental_estimation.estimated_rent_min,
            rental_estimation.estimated_rent_max,
        );

        Self {
            personal_finances: finances.clone(),
            property_data: *property,
            property_features: *features,
            proposed_rent,
            debt_calculation,
            ratio_analysis,
            rental_estimation,
            budget_compatibility,
        }
    }
}

/// Builds a [`FinancialReport`] with the default policy and insurance.
pub fn generate_financial_report<F: DebtSource + Clone>(
    finances: &F,
    property: &PropertyData,
    features: &PropertyFeatures,
    proposed_rent: Option<f64>,
) -> FinancialReport<F> {
    FinancialReport::build(
        &AffordabilityPolicy::default(),
        DEFAULT_INSURANCE,
        finances,
        property,
        features,
        proposed_rent,
    )
}
