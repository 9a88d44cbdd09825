//! CSV import of municipal property rolls for batch rent estimation.

mod parser;

use crate::financial::{PropertyData, PropertyFeature, PropertyFeatures};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum PropertyRollImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownFeature { line: u64, key: String },
}

impl std::fmt::Display for PropertyRollImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyRollImportError::Io(err) => write!(f, "failed to read property roll: {}", err),
            PropertyRollImportError::Csv(err) => {
                write!(f, "invalid property roll CSV data: {}", err)
            }
            PropertyRollImportError::UnknownFeature { line, key } => {
                write!(f, "unknown property feature '{}' on line {}", key, line)
            }
        }
    }
}

impl std::error::Error for PropertyRollImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropertyRollImportError::Io(err) => Some(err),
            PropertyRollImportError::Csv(err) => Some(err),
            PropertyRollImportError::UnknownFeature { .. } => None,
        }
    }
}

impl From<std::io::Error> for PropertyRollImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PropertyRollImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One building read from a property roll.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRollEntry {
    pub label: String,
    pub property: PropertyData,
    pub features: PropertyFeatures,
}

pub struct PropertyRollImporter;

impl PropertyRollImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<PropertyRollEntry>, PropertyRollImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads `Label, Municipal Value, Total Units, Annual Taxes,
    /// Interest Rate Min, Interest Rate Max[, Features]` rows. Features are
    /// `;`-separated keys such as `furnished;indoorParking`.
    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<PropertyRollEntry>, PropertyRollImportError> {
        parser::parse_rows(reader)?
            .into_iter()
            .map(|row| {
                let features = row
                    .feature_keys
                    .iter()
                    .map(|key| {
                        PropertyFeature::from_key(key).ok_or_else(|| {
                            PropertyRollImportError::UnknownFeature {
                                line: row.line,
                                key: key.clone(),
                            }
                        })
                    })
                    .collect::<Result<PropertyFeatures, _>>()?;

                Ok(PropertyRollEntry {
                    label: row.label,
                    property: PropertyData {
                        municipal_value: row.municipal_value,
                        total_units: row.total_units,
                        annual_taxes: row.annual_taxes,
                        interest_rate_min: row.interest_rate_min,
                        interest_rate_max: row.interest_rate_max,
                    },
                    features,
                })
            })
            .collect()
    }
}
