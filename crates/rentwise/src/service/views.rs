use crate::financial::{
    AffordabilityPolicy, FeatureAdjustment, PropertyFeatures, RatioAnalysis, RatioCategory,
    RentalEstimation,
};
use serde::Serialize;

/// Ratio analysis with the display fields a gauge needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioView {
    pub ratio: f64,
    pub category: RatioCategory,
    pub label: &'static str,
    pub severity: u8,
    pub advice: &'static str,
    pub gauge_position: f64,
    pub max_affordable_rent: f64,
}

impl RatioView {
    pub fn new(policy: &AffordabilityPolicy, analysis: RatioAnalysis) -> Self {
        let category = analysis.category;
        Self {
            ratio: analysis.ratio,
            category,
            label: category.label(),
            severity: category.severity(),
            advice: category.advice(),
            gauge_position: policy.thresholds.gauge_position(analysis.ratio),
            max_affordable_rent: analysis.max_affordable_rent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationView {
    #[serde(flatten)]
    pub estimation: RentalEstimation,
    pub breakdown: Vec<FeatureAdjustment>,
}

impl EstimationView {
    pub fn new(estimation: RentalEstimation, features: &PropertyFeatures) -> Self {
        Self {
            estimation,
            breakdown: features.breakdown(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollEstimate {
    pub label: String,
    pub estimation: EstimationView,
}
