use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RollRow {
    pub(crate) line: u64,
    pub(crate) label: String,
    pub(crate) municipal_value: f64,
    pub(crate) total_units: i64,
    pub(crate) annual_taxes: f64,
    pub(crate) interest_rate_min: f64,
    pub(crate) interest_rate_max: f64,
    pub(crate) feature_keys: Vec<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RollRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let raw: RawRollRow = record.deserialize(Some(&headers))?;

        rows.push(RollRow {
            line,
            label: raw.label.unwrap_or_else(|| format!("line {line}")),
            municipal_value: raw.municipal_value,
            total_units: raw.total_units,
            annual_taxes: raw.annual_taxes,
            interest_rate_min: raw.interest_rate_min,
            interest_rate_max: raw.interest_rate_max,
            feature_keys: split_features(raw.features.as_deref()),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRollRow {
    #[serde(rename = "Label", default, deserialize_with = "empty_string_as_none")]
    label: Option<String>,
    #[serde(rename = "Municipal Value", default, deserialize_with = "lenient_amount")]
    municipal_value: f64,
    #[serde(rename = "Total Units", default, deserialize_with = "lenient_count")]
    total_units: i64,
    #[serde(rename = "Annual Taxes", default, deserialize_with = "lenient_amount")]
    annual_taxes: f64,
    #[serde(rename = "Interest Rate Min", default, deserialize_with = "lenient_amount")]
    interest_rate_min: f64,
    #[serde(rename = "Interest Rate Max", default, deserialize_with = "lenient_amount")]
    interest_rate_max: f64,
    #[serde(rename = "Features", default, deserialize_with = "empty_string_as_none")]
    features: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    Ok(opt.as_deref().map(parse_amount).unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = lenient_amount(deserializer)?;
    Ok(amount.trunc() as i64)
}

/// Blank or non-numeric cells count as zero. Thousands separators and a
/// trailing `%` or `$` are tolerated.
fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '$' | '%' | ' '))
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or_default()
}

fn split_features(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
pub(crate) fn parse_amount_for_tests(raw: &str) -> f64 {
    parse_amount(raw)
}
