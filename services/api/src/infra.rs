use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use rentwise::config::AppConfig;
use rentwise::error::AppError;
use rentwise::financial::PropertyFeature;
use rentwise::service::CalculatorService;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Calculator bound to the policy and insurance from the environment.
pub(crate) fn configured_service() -> Result<CalculatorService, AppError> {
    let config = AppConfig::load()?;
    Ok(CalculatorService::new(config.calculator))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_feature(raw: &str) -> Result<PropertyFeature, String> {
    PropertyFeature::from_key(raw).ok_or_else(|| {
        let known: Vec<_> = PropertyFeature::ordered()
            .into_iter()
            .map(PropertyFeature::key)
            .collect();
        format!("unknown feature '{raw}' (expected one of {})", known.join(", "))
    })
}
