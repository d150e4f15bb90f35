use crate::infra::{configured_turnover_service, parse_date};
use crate::workforce::render_enps;
use chrono::NaiveDate;
use clap::Args;
use people_analytics::error::AppError;
use people_analytics::workflows::roster::RosterImporter;
use people_analytics::workflows::turnover::{
    roster_row_view, ProfileSubmission, RiskAssessment, TOP_FACTOR_COUNT,
};
use people_analytics::workflows::workforce::{employee_nps, turnover_rate, AbsenteeismInputs};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Disciplinary sanctions on record (0-10)
    #[arg(long, default_value_t = 0)]
    pub(crate) sanctions: i64,
    #[arg(long)]
    pub(crate) birth_year: i64,
    #[arg(long)]
    pub(crate) age: i64,
    /// Mark the employee as a new hire
    #[arg(long)]
    pub(crate) new_hire: bool,
    /// Months of experience before joining
    #[arg(long, default_value_t = 0)]
    pub(crate) prior_experience_months: i64,
    /// Contract start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) contract_start: NaiveDate,
    #[arg(long)]
    pub(crate) tenure_years: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) tenure_months: i64,
    /// Starting salary in 2020 currency units
    #[arg(long)]
    pub(crate) initial_salary: i64,
    /// Current salary in 2020 currency units
    #[arg(long)]
    pub(crate) current_salary: i64,
    /// Evaluation date (defaults to APP_REFERENCE_DATE, then today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

impl AssessArgs {
    pub(crate) fn submission(&self) -> ProfileSubmission {
        ProfileSubmission {
            sanctions_count: self.sanctions,
            birth_year: self.birth_year,
            age: self.age,
            is_new_hire: self.new_hire,
            prior_experience_months: self.prior_experience_months,
            contract_start_date: self.contract_start,
            tenure_years: self.tenure_years,
            tenure_months: self.tenure_months,
            initial_salary_2020: self.initial_salary,
            current_salary_2020: self.current_salary,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// CSV roster with one employee profile per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation date (defaults to APP_REFERENCE_DATE, then today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (defaults to APP_REFERENCE_DATE, then today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the workforce KPI portion of the demo
    #[arg(long)]
    pub(crate) skip_workforce: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let service = configured_turnover_service()?;
    let today = service.resolve_today(args.today);
    let assessment = service.assess(args.submission(), today)?;
    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let service = configured_turnover_service()?;
    let today = service.resolve_today(args.today);
    let entries = RosterImporter::from_path(&args.csv)?;

    println!("Roster {} scored as of {today}", args.csv.display());
    for (index, result) in service
        .assess_batch(entries, today)
        .into_iter()
        .enumerate()
    {
        let row = roster_row_view(index + 1, result);
        match (row.risk_score, row.tier, row.error) {
            (Some(score), Some(tier), _) => {
                let factors = row
                    .top_factors
                    .unwrap_or_default()
                    .iter()
                    .map(|factor| factor.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("- row {}: {score:.2} ({tier}) | {factors}", row.row);
            }
            (_, _, Some(error)) => println!("- row {}: {error}", row.row),
            _ => println!("- row {}: no result", row.row),
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = configured_turnover_service()?;
    let today = service.resolve_today(args.today);

    println!("People analytics demo (as of {today})");
    for (title, submission) in demo_profiles(today) {
        println!("\n== {title} ==");
        match service.assess(submission, today) {
            Ok(assessment) => render_assessment(&assessment),
            Err(err) => println!("{err}"),
        }
    }

    if !args.skip_workforce {
        println!("\n== Workforce KPIs ==");
        let rate = turnover_rate(10, 200.0)?;
        println!("Turnover rate: {rate:.2}% (10 terminations / 200 average headcount)");
        let mut scores = vec![9u8; 60];
        scores.extend(vec![7u8; 30]);
        scores.extend(vec![3u8; 10]);
        render_enps(&employee_nps(&scores)?);
        let absenteeism = AbsenteeismInputs {
            hours_lost: 500.0,
            agreed_hours: 10_000.0,
            overtime_hours: 0.0,
            vacation_and_holiday_hours: 0.0,
        }
        .rate()?;
        println!("Absenteeism rate: {absenteeism:.2}% (500 hours lost / 10000 agreed hours)");
    }

    Ok(())
}

fn demo_profiles(today: NaiveDate) -> Vec<(&'static str, ProfileSubmission)> {
    let started_days_ago = |days: i64| {
        today
            .checked_sub_signed(chrono::Duration::days(days))
            .unwrap_or(today)
    };

    vec![
        (
            "Settled specialist",
            ProfileSubmission {
                sanctions_count: 0,
                birth_year: 1985,
                age: 40,
                is_new_hire: false,
                prior_experience_months: 48,
                contract_start_date: started_days_ago(8 * 365),
                tenure_years: 8,
                tenure_months: 0,
                initial_salary_2020: 30_000,
                current_salary_2020: 45_000,
            },
        ),
        (
            "Recent graduate hire",
            ProfileSubmission {
                sanctions_count: 0,
                birth_year: 2000,
                age: 22,
                is_new_hire: true,
                prior_experience_months: 0,
                contract_start_date: started_days_ago(182),
                tenure_years: 0,
                tenure_months: 6,
                initial_salary_2020: 20_000,
                current_salary_2020: 20_000,
            },
        ),
        (
            "Experienced hire with sanctions",
            ProfileSubmission {
                sanctions_count: 6,
                birth_year: 1995,
                age: 30,
                is_new_hire: true,
                prior_experience_months: 84,
                contract_start_date: started_days_ago(365),
                tenure_years: 1,
                tenure_months: 0,
                initial_salary_2020: 32_000,
                current_salary_2020: 30_000,
            },
        ),
    ]
}

fn render_assessment(assessment: &RiskAssessment) {
    let view = assessment.view();
    println!("{}", view.headline);
    println!("Risk score: {:.2} | tier: {}", view.risk_score, view.tier);
    println!("Factors:");
    for factor in &view.factors {
        println!(
            "  - {:<16} raw {:.3} x weight {:.2} = {:.3}",
            factor.name.label(),
            factor.raw_score,
            factor.weight,
            factor.weighted_impact
        );
    }
    println!("Top {TOP_FACTOR_COUNT} drivers:");
    for factor in &view.top_factors {
        println!("  - {}", factor.label());
    }
    println!("Recommendations:");
    for recommendation in &view.recommendations {
        println!("  - {recommendation}");
    }
}
