//! HTTP-facing calculator service.
//!
//! Wraps the pure calculators with the configured affordability policy and
//! insurance figure, decodes form-style payloads and shapes the JSON views
//! returned by [`calculator_router`].

mod payload;
pub mod router;
pub mod views;

pub use router::calculator_router;
pub use views::{EstimationView, RatioView, RollEstimate};

use crate::config::CalculatorConfig;
use crate::financial::{
    calculate_monthly_debts, calculate_rental_estimation, AffordabilityPolicy, DebtCalculation,
    FinancesInput, FinancialReport, PropertyData, PropertyFeatures,
};
use crate::roll::PropertyRollEntry;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Body of a ratio request. A missing proposed rent analyzes debts alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatioRequest {
    pub monthly_income: f64,
    pub total_monthly_debts: f64,
    pub proposed_rent: Option<f64>,
}

/// Body of an estimation request. `insurance` overrides the configured
/// figure; a missing or zero value keeps it, as a blank form field does.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimationRequest {
    pub property: PropertyData,
    pub features: PropertyFeatures,
    pub insurance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub finances: FinancesInput,
    #[serde(default)]
    pub property: PropertyData,
    #[serde(default)]
    pub features: PropertyFeatures,
    #[serde(default)]
    pub proposed_rent: Option<f64>,
    #[serde(default)]
    pub insurance: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid request payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Calculators bound to one affordability policy and insurance figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorService {
    policy: AffordabilityPolicy,
    insurance: f64,
}

impl CalculatorService {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            policy: config.policy,
            insurance: config.insurance,
        }
    }

    pub fn policy(&self) -> &AffordabilityPolicy {
        &self.policy
    }

    /// Caller-supplied insurance, or the configured figure when absent or zero.
    pub fn insurance_or_default(&self, requested: Option<f64>) -> f64 {
        requested
            .filter(|amount| *amount != 0.0)
            .unwrap_or(self.insurance)
    }

    /// Decodes a JSON body after converting form text into typed values.
    pub fn decode<T: DeserializeOwned>(&self, body: serde_json::Value) -> Result<T, ServiceError> {
        payload::decode(body).map_err(ServiceError::from)
    }

    pub fn debts(&self, finances: &FinancesInput) -> DebtCalculation {
        calculate_monthly_debts(finances)
    }

    pub fn ratio(&self, request: &RatioRequest) -> RatioView {
        let analysis = self.policy.analyze(
            request.monthly_income,
            request.total_monthly_debts,
            request.proposed_rent,
        );
        RatioView::new(&self.policy, analysis)
    }

    pub fn estimate(&self, request: &EstimationRequest) -> EstimationView {
        let insurance = self.insurance_or_default(request.insurance);
        let estimation =
            calculate_rental_estimation(&request.property, &request.features, insurance);
        EstimationView::new(estimation, &request.features)
    }

    pub fn report(&self, request: &ReportRequest) -> FinancialReport<FinancesInput> {
        FinancialReport::build(
            &self.policy,
            self.insurance_or_default(request.insurance),
            &request.finances,
            &request.property,
            &request.features,
            request.proposed_rent,
        )
    }

    /// Estimates every building of an imported property roll, in file order.
    pub fn estimate_roll(
        &self,
        entries: &[PropertyRollEntry],
        insurance: Option<f64>,
    ) -> Vec<RollEstimate> {
        entries
            .iter()
            .map(|entry| {
                let view = self.estimate(&EstimationRequest {
                    property: entry.property,
                    features: entry.features,
                    insurance,
                });
                tracing::debug!(
                    label = %entry.label,
                    min = view.estimation.estimated_rent_min,
                    max = view.estimation.estimated_rent_max,
                    "estimated property roll entry"
                );
                RollEstimate {
                    label: entry.label.clone(),
                    estimation: view,
                }
            })
            .collect()
    }
}
