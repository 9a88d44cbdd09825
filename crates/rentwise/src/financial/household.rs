use super::aggregate::{sum_fields, CategoryFields};
use serde::{Deserialize, Serialize};

/// Monthly income categories declared by the household.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyIncomes {
    pub pre_tax_salary: f64,
    pub alimony_received: f64,
    pub family_benefits: f64,
    pub others: f64,
}

impl CategoryFields for MonthlyIncomes {
    fn amounts(&self) -> impl IntoIterator<Item = f64> {
        [
            self.pre_tax_salary,
            self.alimony_received,
            self.family_benefits,
            self.others,
        ]
    }
}

/// Monthly vehicle costs (loan or lease payments, other car expenses).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoExpenses {
    pub car: f64,
    pub other: f64,
}

impl CategoryFields for AutoExpenses {
    fn amounts(&self) -> impl IntoIterator<Item = f64> {
        [self.car, self.other]
    }
}

/// Outstanding revolving balances.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credits {
    pub card: f64,
    pub line: f64,
}

impl CategoryFields for Credits {
    fn amounts(&self) -> impl IntoIterator<Item = f64> {
        [self.card, self.line]
    }
}

/// Monthly installment loan payments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyLoans {
    pub personal: f64,
    pub student: f64,
    pub other: f64,
}

impl CategoryFields for MonthlyLoans {
    fn amounts(&self) -> impl IntoIterator<Item = f64> {
        [self.personal, self.student, self.other]
    }
}

/// Detailed household profile grouped by income and obligation category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HouseholdFinances {
    pub monthly_incomes: MonthlyIncomes,
    pub auto_expenses: AutoExpenses,
    pub credits: Credits,
    pub monthly_loans: MonthlyLoans,
}

/// Legacy four-field profile: one income figure, one car payment, two balances.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlatFinances {
    pub monthly_income: f64,
    pub car_payment: f64,
    pub credit_card_balance: f64,
    pub credit_line_balance: f64,
}

/// Household profile able to feed the monthly debt calculator.
///
/// Fixed obligations are already monthly figures; revolving balances are raw
/// outstanding amounts that the calculator converts into minimum payments.
pub trait DebtSource {
    fn monthly_income(&self) -> f64;

    fn auto_payment(&self) -> f64;

    /// Installment loans. Profiles without a loan category report none.
    fn loan_payment(&self) -> f64 {
        0.0
    }

    fn revolving_balances(&self) -> Credits;
}

impl DebtSource for HouseholdFinances {
    fn monthly_income(&self) -> f64 {
        sum_fields(&self.monthly_incomes)
    }

    fn auto_payment(&self) -> f64 {
        sum_fields(&self.auto_expenses)
    }

    fn loan_payment(&self) -> f64 {
        sum_fields(&self.monthly_loans)
    }

    fn revolving_balances(&self) -> Credits {
        self.credits
    }
}

impl DebtSource for FlatFinances {
    fn monthly_income(&self) -> f64 {
        self.monthly_income
    }

    fn auto_payment(&self) -> f64 {
        self.car_payment
    }

    fn revolving_balances(&self) -> Credits {
        Credits {
            card: self.credit_card_balance,
            line: self.credit_line_balance,
        }
    }
}

/// Either supported profile shape, tagged by `schema` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "snake_case")]
pub enum FinancesInput {
    Detailed(HouseholdFinances),
    Flat(FlatFinances),
}

impl DebtSource for FinancesInput {
    fn monthly_income(&self) -> f64 {
        match self {
            Self::Detailed(finances) => finances.monthly_income(),
            Self::Flat(finances) => finances.monthly_income(),
        }
    }

    fn auto_payment(&self) -> f64 {
        match self {
            Self::Detailed(finances) => finances.auto_payment(),
            Self::Flat(finances) => finances.auto_payment(),
        }
    }

    fn loan_payment(&self) -> f64 {
        match self {
            Self::Detailed(finances) => finances.loan_payment(),
            Self::Flat(finances) => finances.loan_payment(),
        }
    }

    fn revolving_balances(&self) -> Credits {
        match self {
            Self::Detailed(finances) => finances.revolving_balances(),
            Self::Flat(finances) => finances.revolving_balances(),
        }
    }
}

impl From<HouseholdFinances> for FinancesInput {
    fn from(value: HouseholdFinances) -> Self {
        Self::Detailed(value)
    }
}

impl From<FlatFinances> for FinancesInput {
    fn from(value: FlatFinances) -> Self {
        Self::Flat(value)
    }
}
