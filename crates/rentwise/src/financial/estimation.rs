use super::features::{calculate_feature_adjustments, PropertyFeatures};
use super::money::round2;
use super::property::{calculate_monthly_interest, PropertyData, DEFAULT_AMORTIZATION_YEARS};
use serde::{Deserialize, Serialize};

/// Flat monthly insurance figure used when the caller supplies none.
pub const DEFAULT_INSURANCE: f64 = 250.0;

/// Rent range for one unit and the components it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalEstimation {
    pub unit_value: f64,
    pub bank_rent_min: f64,
    pub bank_rent_max: f64,
    pub government_rent: f64,
    pub insurance: f64,
    pub feature_adjustments: f64,
    pub estimated_rent_min: f64,
    pub estimated_rent_max: f64,
}

/// Estimates the rent range of a unit from bank rent at both interest rates,
/// government rent, insurance and feature adjustments.
pub fn calculate_rental_estimation(
    property: &PropertyData,
    features: &PropertyFeatures,
    insurance: f64,
) -> RentalEstimation {
    let unit_value = property.average_unit_value();
    let bank_rent_min = calculate_monthly_interest(
        unit_value,
        property.interest_rate_min,
        DEFAULT_AMORTIZATION_YEARS,
    );
    let bank_rent_max = calculate_monthly_interest(
        unit_value,
        property.interest_rate_max,
        DEFAULT_AMORTIZATION_YEARS,
    );
    let government_rent = property.government_rent();
    let feature_adjustments = calculate_feature_adjustments(features);

    RentalEstimation {
        unit_value,
        bank_rent_min,
        bank_rent_max,
        government_rent,
        insurance,
        feature_adjustments,
        estimated_rent_min: round2(bank_rent_min + government_rent + insurance + feature_adjustments),
        estimated_rent_max: round2(bank_rent_max + government_rent + insurance + feature_adjustments),
    }
}

/// [`calculate_rental_estimation`] with [`DEFAULT_INSURANCE`].
pub fn calculate_default_rental_estimation(
    property: &PropertyData,
    features: &PropertyFeatures,
) -> RentalEstimation {
    calculate_rental_estimation(property, features, DEFAULT_INSURANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert, proptest};

    fn fourplex() -> PropertyData {
        PropertyData {
            municipal_value: 500_000.0,
            total_units: 4,
            annual_taxes: 6000.0,
            interest_rate_min: 4.0,
            interest_rate_max: 6.0,
        }
    }

    #[test]
    fn composes_every_component() {
        let estimation = calculate_default_rental_estimation(&fourplex(), &PropertyFeatures::default());

        assert_eq!(estimation.unit_value, 125_000.0);
        assert_eq!(estimation.bank_rent_min, 659.8);
        assert_eq!(estimation.bank_rent_max, 805.38);
        assert_eq!(estimation.government_rent, 125.0);
        assert_eq!(estimation.insurance, 250.0);
        assert_eq!(estimation.feature_adjustments, 0.0);
        assert_eq!(estimation.estimated_rent_min, 1034.8);
        assert_eq!(estimation.estimated_rent_max, 1180.38);
    }

    #[test]
    fn features_and_insurance_shift_both_bounds() {
        let features = PropertyFeatures {
            furnished: true,
            gym_access: true,
            ..PropertyFeatures::default()
        };

        let estimation = calculate_rental_estimation(&fourplex(), &features, 300.0);

        assert_eq!(estimation.insurance, 300.0);
        assert_eq!(estimation.feature_adjustments, 325.0);
        assert_eq!(estimation.estimated_rent_min, 1409.8);
        assert_eq!(estimation.estimated_rent_max, 1555.38);
    }

    #[test]
    fn invalid_building_keeps_only_flat_components() {
        let property = PropertyData {
            total_units: 0,
            ..fourplex()
        };
        let features = PropertyFeatures {
            poor_condition: true,
            ..PropertyFeatures::default()
        };

        let estimation = calculate_default_rental_estimation(&property, &features);

        assert_eq!(estimation.unit_value, 0.0);
        assert_eq!(estimation.bank_rent_min, 0.0);
        assert_eq!(estimation.government_rent, 0.0);
        assert_eq!(estimation.estimated_rent_min, 125.0);
        assert_eq!(estimation.estimated_rent_max, 125.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let features = PropertyFeatures {
            view_balcony: true,
            ..PropertyFeatures::default()
        };
        let first = calculate_default_rental_estimation(&fourplex(), &features);
        let second = calculate_default_rental_estimation(&fourplex(), &features);
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_rent_range_is_ordered(
            value in 0u32..5_000_000,
            units in -2i64..60,
            taxes in 0u32..80_000,
            rate_min_bp in 0u32..1500,
            spread_bp in 0u32..500,
            furnished in any::<bool>(),
            poor_condition in any::<bool>(),
            insurance in 0u32..600,
        ) {
            let property = PropertyData {
                municipal_value: f64::from(value),
                total_units: units,
                annual_taxes: f64::from(taxes),
                interest_rate_min: f64::from(rate_min_bp) / 100.0,
                interest_rate_max: f64::from(rate_min_bp + spread_bp) / 100.0,
            };
            let features = PropertyFeatures {
                furnished,
                poor_condition,
                ..PropertyFeatures::default()
            };

            let estimation = calculate_rental_estimation(&property, &features, f64::from(insurance));
            prop_assert!(estimation.estimated_rent_max >= estimation.estimated_rent_min);
        }
    }
}
