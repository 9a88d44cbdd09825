//! Pure affordability and rent estimation calculators.
//!
//! Every function here is deterministic and free of I/O. Degenerate inputs
//! (zero units, non-positive income, negative rates) produce documented zero
//! or clamped values instead of errors.

mod aggregate;
pub mod budget;
pub mod debts;
pub mod estimation;
pub mod features;
pub mod household;
mod money;
pub mod property;
pub mod ratio;
pub mod report;

pub use aggregate::{sum_fields, CategoryFields};
pub use budget::{evaluate_budget_compatibility, BudgetCompatibility, RiskLevel};
pub use debts::{
    calculate_monthly_debts, revolving_payment, DebtCalculation, REVOLVING_PAYMENT_RATE,
};
pub use estimation::{
    calculate_default_rental_estimation, calculate_rental_estimation, RentalEstimation,
    DEFAULT_INSURANCE,
};
pub use features::{
    calculate_feature_adjustments, FeatureAdjustment, PropertyFeature, PropertyFeatures,
};
pub use household::{
    AutoExpenses, Credits, DebtSource, FinancesInput, FlatFinances, HouseholdFinances,
    MonthlyIncomes, MonthlyLoans,
};
pub use money::{round2, round_percentage};
pub use property::{
    calculate_average_unit_value, calculate_government_rent, calculate_monthly_interest,
    PropertyData, DEFAULT_AMORTIZATION_YEARS,
};
pub use ratio::{
    analyze_debt_ratio, AffordabilityPolicy, PolicyError, RatioAnalysis, RatioCategory,
    RatioThresholds, AFFORDABILITY_CEILING, RATIO_THRESHOLDS,
};
pub use report::{generate_financial_report, FinancialReport};
