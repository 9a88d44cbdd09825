use crate::infra::{configured_service, parse_date, parse_feature};
use chrono::{Local, NaiveDate};
use clap::Args;
use rentwise::error::AppError;
use rentwise::financial::{
    AutoExpenses, BudgetCompatibility, Credits, FinancesInput, HouseholdFinances,
    MonthlyIncomes, MonthlyLoans, PropertyData, PropertyFeature, PropertyFeatures,
};
use rentwise::roll::PropertyRollImporter;
use rentwise::service::{EstimationRequest, EstimationView, RatioRequest, RatioView, ReportRequest};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RatioArgs {
    /// Gross monthly household income
    #[arg(long)]
    pub(crate) income: f64,
    /// Total monthly debt payments
    #[arg(long, default_value_t = 0.0)]
    pub(crate) debts: f64,
    /// Rent to include in the ratio
    #[arg(long)]
    pub(crate) proposed_rent: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EstimateArgs {
    /// Property roll CSV; estimates every building instead of the flags below
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Municipal assessment of the whole building
    #[arg(long, default_value_t = 0.0)]
    pub(crate) municipal_value: f64,
    /// Number of units in the building
    #[arg(long, default_value_t = 0)]
    pub(crate) units: i64,
    /// Annual property taxes for the building
    #[arg(long, default_value_t = 0.0)]
    pub(crate) taxes: f64,
    /// Lowest annual mortgage rate, in percent
    #[arg(long, default_value_t = 0.0)]
    pub(crate) rate_min: f64,
    /// Highest annual mortgage rate, in percent
    #[arg(long, default_value_t = 0.0)]
    pub(crate) rate_max: f64,
    /// Feature key such as `furnished` or `indoor-parking`; repeatable
    #[arg(long = "feature", value_parser = parse_feature)]
    pub(crate) features: Vec<PropertyFeature>,
    /// Monthly insurance figure; defaults to RENTWISE_INSURANCE or 250
    #[arg(long)]
    pub(crate) insurance: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Rent to include in the household ratio
    #[arg(long)]
    pub(crate) proposed_rent: Option<f64>,
    /// Monthly insurance figure for the sample building
    #[arg(long)]
    pub(crate) insurance: Option<f64>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_ratio(args: RatioArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let view = service.ratio(&RatioRequest {
        monthly_income: args.income,
        total_monthly_debts: args.debts,
        proposed_rent: args.proposed_rent,
    });

    render_ratio(&view);
    Ok(())
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let service = configured_service()?;

    if let Some(path) = args.csv {
        let entries = PropertyRollImporter::from_path(&path)?;
        println!(
            "Property roll {} ({} buildings)",
            path.display(),
            entries.len()
        );
        for estimate in service.estimate_roll(&entries, args.insurance) {
            println!("\n{}", estimate.label);
            render_estimation(&estimate.estimation);
        }
        return Ok(());
    }

    let request = EstimationRequest {
        property: PropertyData {
            municipal_value: args.municipal_value,
            total_units: args.units,
            annual_taxes: args.taxes,
            interest_rate_min: args.rate_min,
            interest_rate_max: args.rate_max,
        },
        features: args.features.into_iter().collect(),
        insurance: args.insurance,
    };
    render_estimation(&service.estimate(&request));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let request = demo_request(args.proposed_rent, args.insurance);
    let report = service.report(&request);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Rent affordability demo (evaluated {today})");
    println!(
        "Policy: {:.0}% of income toward debts and rent | insurance ${:.2}",
        service.policy().ceiling * 100.0,
        report.rental_estimation.insurance
    );

    let debts = &report.debt_calculation;
    println!("\nMonthly obligations");
    println!("- Auto: ${:.2}", debts.auto_payment);
    println!("- Loans: ${:.2}", debts.loan_payment);
    println!("- Credit card (3% of balance): ${:.2}", debts.credit_card_payment);
    println!("- Credit line (3% of balance): ${:.2}", debts.credit_line_payment);
    println!("- Total: ${:.2}", debts.total_monthly_debts);

    println!("\nDebt ratio");
    render_ratio(&RatioView::new(service.policy(), report.ratio_analysis));

    println!("\nRental estimation");
    render_estimation(&EstimationView::new(
        report.rental_estimation,
        &report.property_features,
    ));

    println!("\nBudget fit");
    render_budget(&report.budget_compatibility);
    Ok(())
}

fn demo_request(proposed_rent: Option<f64>, insurance: Option<f64>) -> ReportRequest {
    let finances = HouseholdFinances {
        monthly_incomes: MonthlyIncomes {
            pre_tax_salary: 4200.0,
            alimony_received: 0.0,
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
            other: 0.0,
        },
    };

    ReportRequest {
        finances: FinancesInput::from(finances),
        property: PropertyData {
            municipal_value: 500_000.0,
            total_units: 4,
            annual_taxes: 6000.0,
            interest_rate_min: 4.0,
            interest_rate_max: 6.0,
        },
        features: [PropertyFeature::Appliances, PropertyFeature::HeatingIncluded]
            .into_iter()
            .collect::<PropertyFeatures>(),
        proposed_rent,
        insurance,
    }
}

fn render_ratio(view: &RatioView) {
    println!("- Ratio: {:.1}% ({})", view.ratio, view.label);
    println!("- Gauge: {:.0}/100", view.gauge_position);
    println!("- Max affordable rent: ${:.2}", view.max_affordable_rent);
    println!("  {}", view.advice);
}

fn render_estimation(view: &EstimationView) {
    let estimation = &view.estimation;
    println!("- Unit value: ${:.2}", estimation.unit_value);
    println!(
        "- Bank rent: ${:.2} to ${:.2}",
        estimation.bank_rent_min, estimation.bank_rent_max
    );
    println!("- Government rent: ${:.2}", estimation.government_rent);
    println!("- Insurance: ${:.2}", estimation.insurance);
    for adjustment in &view.breakdown {
        println!("  - {}: {:+.2}", adjustment.label, adjustment.amount);
    }
    println!(
        "- Estimated rent: ${:.2} to ${:.2}",
        estimation.estimated_rent_min, estimation.estimated_rent_max
    );
}

fn render_budget(budget: &BudgetCompatibility) {
    println!(
        "- Affordable: {} | risk {}",
        if budget.is_affordable { "yes" } else { "no" },
        budget.risk_level.label()
    );
    if budget.over_budget_amount > 0.0 {
        println!("- Over budget by ${:.2}", budget.over_budget_amount);
    }
    println!("- Recommended max rent: ${:.2}", budget.recommended_max_rent);
}
