use super::household::DebtSource;
use super::money::round2;
use serde::{Deserialize, Serialize};

/// Share of a revolving balance assumed as its minimum monthly payment.
pub const REVOLVING_PAYMENT_RATE: f64 = 0.03;

/// Itemized monthly obligations derived from a household profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtCalculation {
    pub auto_payment: f64,
    pub loan_payment: f64,
    pub credit_card_payment: f64,
    pub credit_line_payment: f64,
    pub total_monthly_debts: f64,
}

/// Minimum monthly payment assumed for a revolving balance.
pub fn revolving_payment(balance: f64) -> f64 {
    round2(balance * REVOLVING_PAYMENT_RATE)
}

/// Normalizes a household profile into monthly obligations.
///
/// Card and line payments are rounded individually; the total re-rounds the
/// sum of fixed obligations and those rounded payments.
pub fn calculate_monthly_debts<S: DebtSource + ?Sized>(finances: &S) -> DebtCalculation {
    let balances = finances.revolving_balances();
    let auto_payment = finances.auto_payment();
    let loan_payment = finances.loan_payment();
    let credit_card_payment = revolving_payment(balances.card);
    let credit_line_payment = revolving_payment(balances.line);

    let total = auto_payment + loan_payment + credit_card_payment + credit_line_payment;

    DebtCalculation {
        auto_payment,
        loan_payment,
        credit_card_payment,
        credit_line_payment,
        total_monthly_debts: round2(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financial::household::{
        AutoExpenses, Credits, FlatFinances, HouseholdFinances, MonthlyLoans,
    };

    fn flat(car: f64, card: f64, line: f64) -> FlatFinances {
        FlatFinances {
            monthly_income: 5000.0,
            car_payment: car,
            credit_card_balance: card,
            credit_line_balance: line,
        }
    }

    #[test]
    fn converts_balances_at_three_percent() {
        let result = calculate_monthly_debts(&flat(400.0, 5000.0, 10000.0));

        assert_eq!(result.auto_payment, 400.0);
        assert_eq!(result.loan_payment, 0.0);
        assert_eq!(result.credit_card_payment, 150.0);
        assert_eq!(result.credit_line_payment, 300.0);
        assert_eq!(result.total_monthly_debts, 850.0);
    }

    #[test]
    fn all_zero_profile_yields_zero_debts() {
        let result = calculate_monthly_debts(&flat(0.0, 0.0, 0.0));
        assert_eq!(result, DebtCalculation::default());
    }

    #[test]
    fn rounds_payments_before_rounding_total() {
        let result = calculate_monthly_debts(&flat(400.0, 1234.56, 987.65));
        assert_eq!(result.credit_card_payment, 37.04);
        assert_eq!(result.credit_line_payment, 29.63);
        assert_eq!(result.total_monthly_debts, 466.67);

        let result = calculate_monthly_debts(&flat(299.99, 3333.33, 6666.67));
        assert_eq!(result.credit_card_payment, 100.0);
        assert_eq!(result.credit_line_payment, 200.0);
        assert_eq!(result.total_monthly_debts, 599.99);
    }

    #[test]
    fn negative_balances_are_not_clamped() {
        let result = calculate_monthly_debts(&flat(0.0, -1000.0, 0.0));
        assert_eq!(result.credit_card_payment, -30.0);
        assert_eq!(result.total_monthly_debts, -30.0);
    }

    #[test]
    fn detailed_profile_uses_line_balance_for_line_payment() {
        let finances = HouseholdFinances {
            auto_expenses: AutoExpenses {
                car: 350.0,
                other: 50.0,
            },
            credits: Credits {
                card: 5000.0,
                line: 10000.0,
            },
            monthly_loans: MonthlyLoans {
                personal: 0.0,
                student: 120.0,
                other: 30.0,
            },
            ..HouseholdFinances::default()
        };

        let result = calculate_monthly_debts(&finances);

        assert_eq!(result.auto_payment, 400.0);
        assert_eq!(result.loan_payment, 150.0);
        assert_eq!(result.credit_card_payment, 150.0);
        assert_eq!(result.credit_line_payment, 300.0);
        assert_eq!(result.total_monthly_debts, 1000.0);
    }
}
