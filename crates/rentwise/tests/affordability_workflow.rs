use rentwise::financial::{
    analyze_debt_ratio, calculate_monthly_debts, generate_financial_report, AutoExpenses,
    Credits, FinancesInput, FlatFinances, HouseholdFinances, MonthlyIncomes, MonthlyLoans,
    PropertyData, PropertyFeatures, RatioCategory, RiskLevel,
};

fn household() -> HouseholdFinances {
    HouseholdFinances {
        monthly_incomes: MonthlyIncomes {
            pre_tax_salary: 4200.0,
            alimony_received: 300.0,
            family_benefits: 350.0,
            others: 150.0,
        },
        auto_expenses: AutoExpenses {
            car: 350.0,
            other: 50.0,
        },
        credits: Credits {
            card: 2500.0,
            line: 4000.0,
        },
        monthly_loans: MonthlyLoans {
            personal: 0.0,
            student: 120.0,
            other: 80.0,
        },
    }
}

#[test]
fn detailed_household_flows_from_debts_to_ratio() {
    let debts = calculate_monthly_debts(&household());

    assert_eq!(debts.auto_payment, 400.0);
    assert_eq!(debts.loan_payment, 200.0);
    assert_eq!(debts.credit_card_payment, 75.0);
    assert_eq!(debts.credit_line_payment, 120.0);
    assert_eq!(debts.total_monthly_debts, 795.0);

    let without_rent = analyze_debt_ratio(5000.0, debts.total_monthly_debts, None);
    assert_eq!(without_rent.ratio, 15.9);
    assert_eq!(without_rent.category, RatioCategory::Excellent);
    assert_eq!(without_rent.max_affordable_rent, 1205.0);

    let with_rent = analyze_debt_ratio(5000.0, debts.total_monthly_debts, Some(1100.0));
    assert_eq!(with_rent.ratio, 37.9);
    assert_eq!(with_rent.category, RatioCategory::Good);
    assert_eq!(with_rent.max_affordable_rent, without_rent.max_affordable_rent);
}

#[test]
fn both_schemas_agree_on_revolving_payments() {
    let flat = FlatFinances {
        monthly_income: 5000.0,
        car_payment: 400.0,
        credit_card_balance: 2500.0,
        credit_line_balance: 4000.0,
    };
    let detailed = HouseholdFinances {
        monthly_loans: MonthlyLoans::default(),
        ..household()
    };

    let from_flat = calculate_monthly_debts(&FinancesInput::from(flat));
    let from_detailed = calculate_monthly_debts(&FinancesInput::from(detailed));

    assert_eq!(from_flat, from_detailed);
}

#[test]
fn zero_income_household_is_critical() {
    let finances = FlatFinances {
        car_payment: 300.0,
        ..FlatFinances::default()
    };
    let report = generate_financial_report(
        &finances,
        &PropertyData::default(),
        &PropertyFeatures::default(),
        None,
    );

    assert_eq!(report.ratio_analysis.ratio, 0.0);
    assert_eq!(report.ratio_analysis.category, RatioCategory::Critical);
    assert_eq!(report.ratio_analysis.max_affordable_rent, 0.0);
    assert!(!report.budget_compatibility.is_affordable);
    assert_eq!(report.budget_compatibility.risk_level, RiskLevel::Critical);
}

#[test]
fn report_grades_fourplex_against_household() {
    let property = PropertyData {
        municipal_value: 500_000.0,
        total_units: 4,
        annual_taxes: 6000.0,
        interest_rate_min: 4.0,
        interest_rate_max: 6.0,
    };

    let report = generate_financial_report(
        &household(),
        &property,
        &PropertyFeatures::default(),
        None,
    );

    assert_eq!(report.rental_estimation.estimated_rent_min, 1034.8);
    assert_eq!(report.rental_estimation.estimated_rent_max, 1180.38);
    assert!(report.budget_compatibility.is_affordable);
    assert_eq!(report.budget_compatibility.risk_level, RiskLevel::Medium);
    assert_eq!(report.budget_compatibility.recommended_max_rent, 1205.0);
}
