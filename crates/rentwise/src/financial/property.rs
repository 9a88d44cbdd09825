use super::money::round2;
use serde::{Deserialize, Serialize};

/// Amortization term applied when none is supplied.
pub const DEFAULT_AMORTIZATION_YEARS: u32 = 25;

/// Assessment and financing data for a whole building.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyData {
    pub municipal_value: f64,
    pub total_units: i64,
    pub annual_taxes: f64,
    /// Annual mortgage rate, in percent.
    pub interest_rate_min: f64,
    /// Annual mortgage rate, in percent.
    pub interest_rate_max: f64,
}

impl PropertyData {
    pub fn average_unit_value(&self) -> f64 {
        calculate_average_unit_value(self.municipal_value, self.total_units)
    }

    pub fn government_rent(&self) -> f64 {
        calculate_government_rent(self.annual_taxes, self.total_units)
    }
}

/// Building value split evenly across its units. Zero for a non-positive
/// value or unit count.
pub fn calculate_average_unit_value(municipal_value: f64, total_units: i64) -> f64 {
    if total_units <= 0 || municipal_value <= 0.0 {
        return 0.0;
    }

    round2(municipal_value / total_units as f64)
}

/// Monthly payment of a fixed-rate loan of `property_value` amortized over
/// `amortization_years` ("bank rent").
///
/// Returns 0 when the value, the rate or the term is not positive. A rate too
/// small to move `1 + monthly_rate` away from 1 falls back to straight-line
/// repayment.
pub fn calculate_monthly_interest(
    property_value: f64,
    annual_rate_percent: f64,
    amortization_years: u32,
) -> f64 {
    if property_value <= 0.0 || annual_rate_percent <= 0.0 || amortization_years == 0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let total_payments = f64::from(amortization_years) * 12.0;
    let growth = (1.0 + monthly_rate).powf(total_payments);

    if growth - 1.0 <= 0.0 {
        return round2(property_value / total_payments);
    }

    round2(property_value * monthly_rate * growth / (growth - 1.0))
}

/// Per-unit monthly share of the building's annual property tax
/// ("government rent"). Zero for a non-positive unit count or negative taxes.
pub fn calculate_government_rent(annual_taxes: f64, total_units: i64) -> f64 {
    if total_units <= 0 || annual_taxes < 0.0 {
        return 0.0;
    }

    round2(annual_taxes / total_units as f64 / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    #[test]
    fn unit_value_divides_building_value() {
        assert_eq!(calculate_average_unit_value(500_000.0, 5), 100_000.0);
        assert_eq!(calculate_average_unit_value(200_000.0, 1), 200_000.0);
        assert_eq!(calculate_average_unit_value(100_000.0, 3), 33_333.33);
        assert_eq!(calculate_average_unit_value(333_333.0, 3), 111_111.0);
    }

    #[test]
    fn unit_value_degrades_to_zero() {
        assert_eq!(calculate_average_unit_value(500_000.0, 0), 0.0);
        assert_eq!(calculate_average_unit_value(500_000.0, -1), 0.0);
        assert_eq!(calculate_average_unit_value(0.0, 10), 0.0);
        assert_eq!(calculate_average_unit_value(-100_000.0, 5), 0.0);
    }

    #[test]
    fn monthly_interest_follows_amortization_formula() {
        assert_eq!(calculate_monthly_interest(300_000.0, 5.0, 25), 1753.77);
        assert_eq!(calculate_monthly_interest(50_000.0, 5.0, 25), 292.3);
        assert!(calculate_monthly_interest(300_000.0, 15.0, 25) > 3500.0);
    }

    #[test]
    fn monthly_interest_guards_invalid_inputs() {
        assert_eq!(calculate_monthly_interest(0.0, 5.0, 25), 0.0);
        assert_eq!(calculate_monthly_interest(-100_000.0, 5.0, 25), 0.0);
        assert_eq!(calculate_monthly_interest(300_000.0, 0.0, 25), 0.0);
        assert_eq!(calculate_monthly_interest(300_000.0, -2.0, 25), 0.0);
        assert_eq!(calculate_monthly_interest(50_000.0, 5.0, 0), 0.0);
    }

    #[test]
    fn vanishing_rate_repays_straight_line() {
        assert_eq!(calculate_monthly_interest(60_000.0, 1e-15, 25), 200.0);
    }

    #[test]
    fn shorter_terms_cost_more_per_month() {
        let fifteen = calculate_monthly_interest(300_000.0, 5.0, 15);
        let thirty = calculate_monthly_interest(300_000.0, 5.0, 30);
        assert!(fifteen > thirty);
    }

    #[test]
    fn government_rent_spreads_taxes_monthly() {
        assert_eq!(calculate_government_rent(6000.0, 4), 125.0);
        assert_eq!(calculate_government_rent(3600.0, 1), 300.0);
        assert_eq!(calculate_government_rent(1000.0, 3), 27.78);
        assert_eq!(calculate_government_rent(13_579.0, 7), 161.65);
        assert_eq!(calculate_government_rent(0.0, 5), 0.0);
    }

    #[test]
    fn government_rent_degrades_to_zero() {
        assert_eq!(calculate_government_rent(6000.0, 0), 0.0);
        assert_eq!(calculate_government_rent(6000.0, -2), 0.0);
        assert_eq!(calculate_government_rent(-5000.0, 10), 0.0);
    }

    #[test]
    fn property_data_derives_per_unit_figures() {
        let property = PropertyData {
            municipal_value: 500_000.0,
            total_units: 4,
            annual_taxes: 6000.0,
            interest_rate_min: 4.0,
            interest_rate_max: 6.0,
        };
        assert_eq!(property.average_unit_value(), 125_000.0);
        assert_eq!(property.government_rent(), 125.0);

        let empty = PropertyData {
            total_units: 0,
            ..property
        };
        assert_eq!(empty.average_unit_value(), 0.0);
        assert_eq!(empty.government_rent(), 0.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_longer_amortization_lowers_payment(
            value in 50_000u32..2_000_000,
            rate_bp in 100u32..1500,
            years in 5u32..35,
        ) {
            let rate = f64::from(rate_bp) / 100.0;
            let shorter = calculate_monthly_interest(f64::from(value), rate, years);
            let longer = calculate_monthly_interest(f64::from(value), rate, years + 1);
            prop_assert!(longer < shorter, "{longer} !< {shorter}");
        }

        #[test]
        fn prop_higher_rate_raises_payment(
            value in 50_000u32..2_000_000,
            rate_bp in 100u32..1500,
            years in 5u32..35,
        ) {
            let lower = calculate_monthly_interest(f64::from(value), f64::from(rate_bp) / 100.0, years);
            let higher =
                calculate_monthly_interest(f64::from(value), f64::from(rate_bp + 25) / 100.0, years);
            prop_assert!(higher > lower, "{higher} !> {lower}");
        }
    }
}
